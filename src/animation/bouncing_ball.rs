//! Not-so-realistic bouncing ball
//!
//! The ball height follows `|h * e^(-d * t) * cos(f * t^2)|`. Time runs
//! forward until `t_max` and then backwards again, so the ball keeps
//! bouncing forever while slowly changing color.

use libm::{cosf, expf, fabsf};

use super::Animation;
use crate::{
    color::{Rgbw, hsvw},
    controls::RenderContext,
    frame::{add_fractional, decay},
    random::Prng,
};

const DAMPENING: f32 = 0.05;
const FREQUENCY: f32 = 0.01;
const TIME_STEP: f32 = 0.1;
const TIME_MAX: f32 = 40.0;
const BALL_SIZE: f32 = 2.0;
const HUE_STEP: f32 = 0.7;
const FADE: u8 = 48;

/// Bouncing ball over the pixel index axis; decays and redraws
#[derive(Debug, Clone)]
pub struct BouncingBall {
    position: f32,
    time: f32,
    direction: f32,
    hue: f32,
    /// Length of the strip the ball bounces along
    height: f32,
}

impl BouncingBall {
    /// Create a ball bouncing along `len` pixels from a random phase
    #[allow(clippy::cast_precision_loss)]
    pub fn new(len: usize, mut rng: Prng) -> Self {
        let height = len as f32;
        Self {
            position: rng.range_f32(0.0, height),
            time: rng.range_f32(0.0, TIME_MAX),
            direction: if rng.below(2) == 0 { -1.0 } else { 1.0 },
            hue: rng.range_f32(0.0, 360.0),
            height,
        }
    }

    pub const fn position(&self) -> f32 {
        self.position
    }

    fn draw(&self, ctx: &RenderContext<'_>, leds: &mut [Rgbw]) {
        decay(leds, FADE);
        let color = hsvw(self.hue, 1.0, ctx.controls.brightness(), 0.0);
        add_fractional(leds, self.position, self.position + BALL_SIZE, color);
    }
}

impl Animation for BouncingBall {
    fn advance(&mut self, ctx: &RenderContext<'_>) {
        let envelope = self.height * expf(-DAMPENING * self.time);
        let bounce = envelope * cosf(FREQUENCY * self.time * self.time);
        self.position = fabsf(bounce);

        // Modulation scales the pace between half and one and a half
        let step = TIME_STEP * (0.5 + ctx.controls.modulation());
        self.time += step * self.direction;
        if self.time > TIME_MAX {
            self.time = TIME_MAX;
            self.direction = -1.0;
        } else if self.time < 0.0 {
            // Negative time would lift the ball above the strip
            self.time = 0.0;
            self.direction = 1.0;
        }

        self.hue += HUE_STEP;
        if self.hue > 360.0 {
            self.hue -= 360.0;
        }
    }

    fn render(&mut self, ctx: &RenderContext<'_>, leds: &mut [Rgbw]) {
        self.draw(ctx, leds);
    }

    fn snapshot(&mut self, ctx: &RenderContext<'_>, buffer: &mut [Rgbw]) {
        self.draw(ctx, buffer);
    }

    /// At rest when time has run back to the first, highest bounce
    fn is_at_rest(&self) -> bool {
        self.time <= 0.0
    }
}
