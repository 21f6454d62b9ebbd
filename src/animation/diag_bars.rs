//! Two diagonal bars sweeping across the lamp
//!
//! One bar travels along `x + y`, the other along `x - y`. Each bar bounces
//! back when it leaves the lamp and picks a fresh random hue and saturation
//! from the injected generator. Modulation controls the speed.

use libm::fabsf;

use super::Animation;
use crate::{
    color::{Rgbw, hsvw},
    controls::RenderContext,
    frame::decay,
    layout::{Layout, Point},
    random::Prng,
};

/// Half width of a bar, in layout units
const BAR_WIDTH: f32 = 50.0;

/// Speed at full modulation, in layout units per tick
const MAX_SPEED: f32 = 20.0;

/// The falling bar moves slightly faster so the bars drift apart
const FALLING_SPEED_FACTOR: f32 = 1.1;

/// Hue drift per tick, in degrees
const HUE_DRIFT: f32 = 0.5;

/// Fade applied before drawing, so bars leave a short trail
const FADE: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Diagonal {
    /// Distance measured along `x + y`
    Rising,
    /// Distance measured along `x - y`
    Falling,
}

impl Diagonal {
    fn project(self, point: Point) -> f32 {
        let x = f32::from(point.x);
        let y = f32::from(point.y);
        match self {
            Self::Rising => x + y,
            Self::Falling => x - y,
        }
    }

    /// Range of projected values covered by the lamp
    fn bounds(self, layout: &Layout<'_>) -> (f32, f32) {
        let width = f32::from(layout.width());
        let height = f32::from(layout.height());
        match self {
            Self::Rising => (0.0, width + height),
            Self::Falling => (-height, width),
        }
    }
}

#[derive(Debug, Clone)]
struct Bar {
    diagonal: Diagonal,
    position: f32,
    direction: f32,
    speed_factor: f32,
    hue: f32,
    saturation: f32,
}

impl Bar {
    fn new(diagonal: Diagonal, speed_factor: f32, layout: &Layout<'_>, rng: &mut Prng) -> Self {
        let mut bar = Self {
            diagonal,
            position: rng.range_f32(0.0, f32::from(layout.width())),
            direction: 1.0,
            speed_factor,
            hue: 0.0,
            saturation: 1.0,
        };
        bar.reseed(rng);
        bar
    }

    fn reseed(&mut self, rng: &mut Prng) {
        self.hue = rng.range_f32(0.0, 360.0);
        self.saturation = rng.range_f32(0.5, 1.0);
    }

    fn advance(&mut self, speed: f32, layout: &Layout<'_>, rng: &mut Prng) {
        let step = speed * self.speed_factor;
        let (low, high) = self.diagonal.bounds(layout);
        if self.position >= high || self.position < low {
            self.direction = -self.direction;
            self.position += step * self.direction;
            self.reseed(rng);
        }
        self.position += step * self.direction;

        self.hue += HUE_DRIFT;
        if self.hue > 360.0 {
            self.hue -= 360.0;
        }
    }

    /// Color of the bar at `point`, if the point is covered
    fn color_at(&self, point: Point, brightness: f32) -> Option<Rgbw> {
        let distance = fabsf(self.diagonal.project(point) - self.position);
        if distance >= BAR_WIDTH {
            return None;
        }
        let falloff = 1.0 - distance / BAR_WIDTH;
        Some(hsvw(self.hue, self.saturation, brightness * falloff, 0.0))
    }
}

/// Diagonal bars; decays the previous frame and redraws on top of it
#[derive(Debug, Clone)]
pub struct DiagBars {
    rising: Bar,
    falling: Bar,
    rng: Prng,
}

impl DiagBars {
    pub fn new(layout: &Layout<'_>, mut rng: Prng) -> Self {
        Self {
            rising: Bar::new(Diagonal::Rising, 1.0, layout, &mut rng),
            falling: Bar::new(Diagonal::Falling, FALLING_SPEED_FACTOR, layout, &mut rng),
            rng,
        }
    }

    /// Current positions of the rising and falling bar
    pub fn positions(&self) -> (f32, f32) {
        (self.rising.position, self.falling.position)
    }

    /// Current hue and saturation of the rising and falling bar
    pub fn colors(&self) -> ((f32, f32), (f32, f32)) {
        (
            (self.rising.hue, self.rising.saturation),
            (self.falling.hue, self.falling.saturation),
        )
    }

    fn draw(&self, ctx: &RenderContext<'_>, leds: &mut [Rgbw]) {
        decay(leds, FADE);

        let brightness = ctx.controls.brightness();
        for (led, point) in leds.iter_mut().zip(ctx.layout.pixels()) {
            for bar in [&self.rising, &self.falling] {
                if let Some(color) = bar.color_at(*point, brightness) {
                    *led = led.add(color);
                }
            }
        }
    }
}

impl Animation for DiagBars {
    fn advance(&mut self, ctx: &RenderContext<'_>) {
        let speed = ctx.controls.modulation() * MAX_SPEED;
        self.rising.advance(speed, &ctx.layout, &mut self.rng);
        self.falling.advance(speed, &ctx.layout, &mut self.rng);
    }

    fn render(&mut self, ctx: &RenderContext<'_>, leds: &mut [Rgbw]) {
        self.draw(ctx, leds);
    }

    fn snapshot(&mut self, ctx: &RenderContext<'_>, buffer: &mut [Rgbw]) {
        self.draw(ctx, buffer);
    }
}
