//! Plain white light with adjustable color temperature
//!
//! Modulation sweeps from cold (0) through neutral white (0.5) to warm (1).
//! Around the middle a dead band keeps the pure white channel.

use super::Animation;
use crate::{color::Rgbw, controls::RenderContext, frame::set_solid};

const COLD: Rgbw = Rgbw::new(64, 100, 239, 0);
const NEUTRAL: Rgbw = Rgbw::new(0, 0, 0, 255);
const WARM: Rgbw = Rgbw::new(255, 237, 0, 0);

/// Half width of the neutral dead band around 0.5
const NEUTRAL_DEADBAND: f32 = 0.1;

/// Static white field; overwrites the whole frame on every render
#[derive(Debug, Clone, Default)]
pub struct PlainWhite;

impl PlainWhite {
    pub const fn new() -> Self {
        Self
    }

    fn color(ctx: &RenderContext<'_>) -> Rgbw {
        let modulation = ctx.controls.modulation();
        let span = 0.5 - NEUTRAL_DEADBAND;

        let base = if modulation < span {
            COLD.blend(NEUTRAL, modulation / span)
        } else if modulation > 1.0 - span {
            WARM.blend(NEUTRAL, (1.0 - modulation) / span)
        } else {
            NEUTRAL
        };

        base.dim(ctx.controls.brightness8())
    }
}

impl Animation for PlainWhite {
    fn advance(&mut self, _ctx: &RenderContext<'_>) {}

    fn render(&mut self, ctx: &RenderContext<'_>, leds: &mut [Rgbw]) {
        set_solid(leds, .., Self::color(ctx));
    }

    fn snapshot(&mut self, ctx: &RenderContext<'_>, buffer: &mut [Rgbw]) {
        set_solid(buffer, .., Self::color(ctx));
    }

    fn is_at_rest(&self) -> bool {
        true
    }
}
