use smart_leds::{RGB8, RGBW, White};

/// Four channel colour value for RGBW strips
///
/// Every arithmetic operation saturates at the channel bounds, no channel
/// ever wraps around.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rgbw {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub w: u8,
}

impl Rgbw {
    /// All channels off
    pub const BLACK: Self = Self::new(0, 0, 0, 0);

    /// Dedicated white channel at full level
    pub const WHITE: Self = Self::white(255);

    pub const fn new(r: u8, g: u8, b: u8, w: u8) -> Self {
        Self { r, g, b, w }
    }

    /// Color that only lights the white channel
    pub const fn white(level: u8) -> Self {
        Self::new(0, 0, 0, level)
    }

    /// Channel-wise sum, clamped to 255
    #[must_use]
    pub const fn add(self, other: Self) -> Self {
        Self {
            r: self.r.saturating_add(other.r),
            g: self.g.saturating_add(other.g),
            b: self.b.saturating_add(other.b),
            w: self.w.saturating_add(other.w),
        }
    }

    /// Channel-wise difference, floored at 0
    #[must_use]
    pub const fn saturating_sub(self, amount: u8) -> Self {
        Self {
            r: self.r.saturating_sub(amount),
            g: self.g.saturating_sub(amount),
            b: self.b.saturating_sub(amount),
            w: self.w.saturating_sub(amount),
        }
    }

    /// Multiply every channel by a real factor
    ///
    /// Negative and NaN factors produce black, results above 255 clamp.
    #[must_use]
    pub fn scale(self, factor: f32) -> Self {
        Self {
            r: scale_channel(self.r, factor),
            g: scale_channel(self.g, factor),
            b: scale_channel(self.b, factor),
            w: scale_channel(self.w, factor),
        }
    }

    /// Dim every channel by `level / 255`
    #[must_use]
    pub const fn dim(self, level: u8) -> Self {
        Self {
            r: dim_channel(self.r, level),
            g: dim_channel(self.g, level),
            b: dim_channel(self.b, level),
            w: dim_channel(self.w, level),
        }
    }

    /// Linear mix towards `other`
    ///
    /// * `amount_of_other` - 0 keeps `self`, 1 yields `other`; clamped
    #[must_use]
    pub fn blend(self, other: Self, amount_of_other: f32) -> Self {
        let t = if amount_of_other.is_nan() {
            0.0
        } else {
            amount_of_other.clamp(0.0, 1.0)
        };
        Self {
            r: blend_channel(self.r, other.r, t),
            g: blend_channel(self.g, other.g, t),
            b: blend_channel(self.b, other.b, t),
            w: blend_channel(self.w, other.w, t),
        }
    }

    /// Sum of all four channels
    #[allow(clippy::cast_lossless)]
    pub const fn channel_sum(self) -> u16 {
        self.r as u16 + self.g as u16 + self.b as u16 + self.w as u16
    }

    pub const fn is_black(self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0 && self.w == 0
    }
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scale_channel(value: u8, factor: f32) -> u8 {
    // Float to int casts saturate and map NaN to zero
    (f32::from(value) * factor) as u8
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn blend_channel(a: u8, b: u8, t: f32) -> u8 {
    (f32::from(a) * (1.0 - t) + f32::from(b) * t + 0.5) as u8
}

#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
const fn dim_channel(value: u8, level: u8) -> u8 {
    ((value as u16 * level as u16) / 255) as u8
}

impl From<RGB8> for Rgbw {
    fn from(color: RGB8) -> Self {
        Self::new(color.r, color.g, color.b, 0)
    }
}

impl From<Rgbw> for RGBW<u8> {
    fn from(color: Rgbw) -> Self {
        RGBW {
            r: color.r,
            g: color.g,
            b: color.b,
            a: White(color.w),
        }
    }
}
