use libm::{fabsf, fmodf};
use smart_leds::hsv::hsv2rgb;

use super::{Hsv, Rgbw};

/// Convert a floating point HSV colour plus white level to RGBW
///
/// * `hue` - degrees, 0-360
/// * `saturation` - 0-1
/// * `value` - 0-1
/// * `white` - 0-255
///
/// Components outside their range are clamped, NaN components count as 0.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::many_single_char_names
)]
pub fn hsvw(hue: f32, saturation: f32, value: f32, white: f32) -> Rgbw {
    let h = clamp_component(hue, 360.0);
    let s = clamp_component(saturation, 1.0);
    let v = clamp_component(value, 1.0);
    let w = clamp_component(white, 255.0);

    let c = s * v;
    let x = c * (1.0 - fabsf(fmodf(h / 60.0, 2.0) - 1.0));
    let m = v - c;

    let (r, g, b) = match (h / 60.0) as u8 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgbw {
        r: ((r + m) * 255.0) as u8,
        g: ((g + m) * 255.0) as u8,
        b: ((b + m) * 255.0) as u8,
        w: w as u8,
    }
}

/// Convert an 8-bit HSV colour (hue on a 0-255 circle) plus white level
pub fn hsv8(hsv: Hsv, white: u8) -> Rgbw {
    let mut color = Rgbw::from(hsv2rgb(hsv));
    color.w = white;
    color
}

#[inline]
fn clamp_component(value: f32, max: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, max)
}
