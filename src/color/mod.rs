mod hsv;
mod rgbw;

use smart_leds::hsv::Hsv as HSV;

pub use hsv::{hsv8, hsvw};
pub use rgbw::Rgbw;

pub type Hsv = HSV;
