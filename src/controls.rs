//! Continuous control inputs shared by every animation
//!
//! Values arrive already normalized to `[0, 1]` from the input collaborator.
//! Only the intent processor writes them; animations read them through
//! [`RenderContext`].

use crate::layout::Layout;

/// Default brightness at startup
pub const DEFAULT_BRIGHTNESS: f32 = 1.0;

/// Default modulation at startup
pub const DEFAULT_MODULATION: f32 = 0.5;

/// Global brightness and modulation inputs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Controls {
    brightness: f32,
    modulation: f32,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            brightness: DEFAULT_BRIGHTNESS,
            modulation: DEFAULT_MODULATION,
        }
    }
}

impl Controls {
    pub fn new(brightness: f32, modulation: f32) -> Self {
        Self {
            brightness: normalize(brightness),
            modulation: normalize(modulation),
        }
    }

    pub const fn brightness(&self) -> f32 {
        self.brightness
    }

    /// Brightness mapped to 0-255
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn brightness8(&self) -> u8 {
        (self.brightness * 255.0) as u8
    }

    pub const fn modulation(&self) -> f32 {
        self.modulation
    }

    pub fn set_brightness(&mut self, value: f32) {
        self.brightness = normalize(value);
    }

    pub fn set_modulation(&mut self, value: f32) {
        self.modulation = normalize(value);
    }
}

/// Clamp to `[0, 1]`, NaN reads as 0
fn normalize(value: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

/// Everything an animation may read while advancing or drawing
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub controls: Controls,
    pub layout: Layout<'a>,
}

impl<'a> RenderContext<'a> {
    pub const fn new(controls: Controls, layout: Layout<'a>) -> Self {
        Self { controls, layout }
    }
}
