//! Solid fill walking the full hue wheel
//!
//! Modulation selects the hue, brightness the HSV value.

use super::Animation;
use crate::{
    color::{Rgbw, hsvw},
    controls::RenderContext,
    frame::set_solid,
};

/// Overwrites the whole frame on every render
#[derive(Debug, Clone, Default)]
pub struct HueLight;

impl HueLight {
    pub const fn new() -> Self {
        Self
    }

    fn color(ctx: &RenderContext<'_>) -> Rgbw {
        hsvw(
            ctx.controls.modulation() * 360.0,
            1.0,
            ctx.controls.brightness(),
            0.0,
        )
    }
}

impl Animation for HueLight {
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
