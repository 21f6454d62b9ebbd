//! Block bouncing between both ends of the strip
//!
//! The block is drawn with sub-pixel boundaries over a randomly decaying
//! background, which leaves a sparkling tail behind it.

use super::Animation;
use crate::{
    color::{Rgbw, hsvw},
    controls::RenderContext,
    frame::{DEFAULT_DECAY_RANGE, add_fractional, decay_random},
    random::Prng,
};

const BLOCK_LEN: f32 = 3.0;
const MIN_SPEED: f32 = 0.5;
const SPEED_RANGE: f32 = 4.0;
const HUE_STEP: f32 = 5.0;

/// Ping-pong block; randomly decays the live frame and redraws
///
/// Has no off-screen state, so it shows black while being transitioned in.
#[derive(Debug, Clone)]
pub struct PingPong {
    position: f32,
    direction: f32,
    hue: f32,
    end: f32,
    rng: Prng,
}

impl PingPong {
    #[allow(clippy::cast_precision_loss)]
    pub fn new(len: usize, rng: Prng) -> Self {
        Self {
            position: 1.0,
            direction: 1.0,
            hue: 0.0,
            end: len as f32,
            rng,
        }
    }

    pub const fn position(&self) -> f32 {
        self.position
    }
}

impl Animation for PingPong {
    fn advance(&mut self, ctx: &RenderContext<'_>) {
        let moving_out = self.direction > 0.0 && self.position + BLOCK_LEN > self.end;
        let moving_in = self.direction < 0.0 && self.position < 0.0;
        if moving_out || moving_in {
            self.direction = -self.direction;
        }

        let speed = MIN_SPEED + ctx.controls.modulation() * SPEED_RANGE;
        self.position += speed * self.direction;

        self.hue += HUE_STEP;
        if self.hue > 360.0 {
            self.hue -= 360.0;
        }
    }

    fn render(&mut self, ctx: &RenderContext<'_>, leds: &mut [Rgbw]) {
        decay_random(leds, &mut self.rng, DEFAULT_DECAY_RANGE);
        let color = hsvw(self.hue, 1.0, ctx.controls.brightness(), 0.0);
        add_fractional(leds, self.position, self.position + BLOCK_LEN, color);
    }
}
