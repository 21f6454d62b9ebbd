//! Compositing operations over a frame buffer
//!
//! A frame is any `[Rgbw]` slice: the renderer's live buffer or a scratch
//! buffer owned by the transition engine. Index-checked writes report
//! [`FrameError`]; span operations clip to the frame and never fail, so a
//! malformed span degrades to untouched pixels instead of a halted display.

use core::fmt;
use core::ops::{Bound, Range, RangeBounds};

use libm::floorf;

use crate::color::Rgbw;
use crate::random::Prng;

/// Default amount range used by [`decay_random`]
pub const DEFAULT_DECAY_RANGE: Range<u8> = 0..128;

/// Error returned by index-checked pixel writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    /// Pixel index is not inside the frame
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "pixel index {index} out of range for frame of {len}")
            }
        }
    }
}

/// Overwrite a single pixel
pub fn set_pixel(frame: &mut [Rgbw], index: usize, color: Rgbw) -> Result<(), FrameError> {
    let pixel = pixel_mut(frame, index)?;
    *pixel = color;
    Ok(())
}

/// Additively blend a color onto a single pixel
pub fn add_pixel(frame: &mut [Rgbw], index: usize, color: Rgbw) -> Result<(), FrameError> {
    let pixel = pixel_mut(frame, index)?;
    *pixel = pixel.add(color);
    Ok(())
}

fn pixel_mut(frame: &mut [Rgbw], index: usize) -> Result<&mut Rgbw, FrameError> {
    let len = frame.len();
    frame
        .get_mut(index)
        .ok_or(FrameError::IndexOutOfRange { index, len })
}

/// Overwrite every pixel in `range` (`..` covers the whole frame)
pub fn set_solid(frame: &mut [Rgbw], range: impl RangeBounds<usize>, color: Rgbw) {
    let range = clip(&range, frame.len());
    for pixel in &mut frame[range] {
        *pixel = color;
    }
}

/// Additively blend a color onto every pixel in `range`
pub fn add_solid(frame: &mut [Rgbw], range: impl RangeBounds<usize>, color: Rgbw) {
    let range = clip(&range, frame.len());
    for pixel in &mut frame[range] {
        *pixel = pixel.add(color);
    }
}

/// Overwrite a span with real-valued boundaries
///
/// Boundary pixels receive the color dimmed by the share of the pixel that
/// the span covers.
pub fn set_fractional(frame: &mut [Rgbw], start: f32, end: f32, color: Rgbw) {
    blend_fractional(frame, start, end, color, BlendMode::Overwrite);
}

/// Additively blend a span with real-valued boundaries
pub fn add_fractional(frame: &mut [Rgbw], start: f32, end: f32, color: Rgbw) {
    blend_fractional(frame, start, end, color, BlendMode::Add);
}

#[derive(Debug, Clone, Copy)]
enum BlendMode {
    Overwrite,
    Add,
}

impl BlendMode {
    fn apply(self, pixel: &mut Rgbw, color: Rgbw) {
        match self {
            Self::Overwrite => *pixel = color,
            Self::Add => *pixel = pixel.add(color),
        }
    }

    fn apply_at(self, frame: &mut [Rgbw], position: f32, color: Rgbw) {
        if let Some(pixel) = index_of(position).and_then(|index| frame.get_mut(index)) {
            self.apply(pixel, color);
        }
    }
}

fn blend_fractional(frame: &mut [Rgbw], start: f32, end: f32, color: Rgbw, mode: BlendMode) {
    if !start.is_finite() || !end.is_finite() || end <= start {
        return;
    }

    let first = floorf(start);
    let start_fraction = start - first;
    let length = end - start;

    // The whole span sits inside one pixel: light it once, by the span length
    if length < 1.0 - start_fraction {
        mode.apply_at(frame, first, color.dim(coverage_level(length)));
        return;
    }

    mode.apply_at(frame, first, color.dim(coverage_level(1.0 - start_fraction)));

    let last = floorf(end);
    let solid_start = index_of(first + 1.0).unwrap_or(0);
    let solid_end = index_of(last).unwrap_or(0);
    for pixel in frame.iter_mut().take(solid_end).skip(solid_start) {
        mode.apply(pixel, color);
    }

    let end_fraction = end - last;
    if end_fraction > 0.0 {
        mode.apply_at(frame, last, color.dim(coverage_level(end_fraction)));
    }
}

/// Convert pixel coverage (0-1) to a dim level
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn coverage_level(coverage: f32) -> u8 {
    (coverage * 255.0 + 0.5) as u8
}

/// Index of a floored position, `None` when it lies before the frame
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn index_of(position: f32) -> Option<usize> {
    if position < 0.0 {
        None
    } else {
        Some(position as usize)
    }
}

fn clip(range: &impl RangeBounds<usize>, len: usize) -> Range<usize> {
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => end.saturating_add(1),
        Bound::Excluded(&end) => end,
        Bound::Unbounded => len,
    };
    let end = end.min(len);
    start.min(end)..end
}

/// Reduce every channel of every pixel by `amount`, floored at 0
pub fn decay(frame: &mut [Rgbw], amount: u8) {
    for pixel in frame {
        *pixel = pixel.saturating_sub(amount);
    }
}

/// Reduce every pixel by an independent random amount drawn from `range`
///
/// All four channels of one pixel share the same draw.
pub fn decay_random(frame: &mut [Rgbw], rng: &mut Prng, range: Range<u8>) {
    for pixel in frame {
        let amount = rng.range_u8(range.clone());
        *pixel = pixel.saturating_sub(amount);
    }
}

/// Multiply every pixel by `factor`
pub fn scale_all(frame: &mut [Rgbw], factor: f32) {
    for pixel in frame {
        *pixel = pixel.scale(factor);
    }
}

/// Check if every channel of every pixel is 0
pub fn is_black(frame: &[Rgbw]) -> bool {
    frame.iter().all(|pixel| pixel.is_black())
}

/// Turn every pixel off
pub fn clear(frame: &mut [Rgbw]) {
    frame.fill(Rgbw::BLACK);
}
