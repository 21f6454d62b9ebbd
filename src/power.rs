//! Current draw estimation and budget enforcement
//!
//! Current draw is linear in channel values, so a single uniform scale is
//! enough to bring an over-budget frame back under the ceiling.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::Rgbw;
use crate::frame::scale_all;

/// Current drawn by one fully lit channel of one LED
pub const DEFAULT_MILLIAMPS_PER_CHANNEL: u8 = 20;

/// Extra headroom applied on top of the exact scale factor
pub const SAFETY_MARGIN: f32 = 0.95;

/// Ceiling for the estimated current draw of a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PowerBudget {
    /// No ceiling; estimation is skipped entirely
    #[default]
    Unbounded,
    /// Maximum total draw in milliamps
    Milliamps(u32),
}

/// Configuration for the power governor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerConfig {
    pub budget: PowerBudget,
    pub milliamps_per_channel: u8,
}

impl Default for PowerConfig {
    fn default() -> Self {
        Self {
            budget: PowerBudget::Unbounded,
            milliamps_per_channel: DEFAULT_MILLIAMPS_PER_CHANNEL,
        }
    }
}

impl PowerConfig {
    pub const fn with_budget(budget: PowerBudget) -> Self {
        Self {
            budget,
            milliamps_per_channel: DEFAULT_MILLIAMPS_PER_CHANNEL,
        }
    }
}

/// Sum of all channel values of a frame
fn channel_total(frame: &[Rgbw]) -> u64 {
    frame
        .iter()
        .map(|pixel| u64::from(pixel.channel_sum()))
        .sum()
}

/// Estimate the current draw of a frame in milliamps (rounded down)
#[allow(clippy::cast_possible_truncation)]
pub fn estimate_milliamps(frame: &[Rgbw], milliamps_per_channel: u8) -> u32 {
    let total = channel_total(frame) * u64::from(milliamps_per_channel) / 255;
    total.min(u64::from(u32::MAX)) as u32
}

/// Dim the frame so its estimated draw stays under the budget
///
/// Returns the applied scale factor, or `None` when the frame was already
/// within budget (or the budget is unbounded) and was left untouched.
#[allow(clippy::cast_precision_loss)]
pub fn enforce_budget(frame: &mut [Rgbw], config: &PowerConfig) -> Option<f32> {
    let PowerBudget::Milliamps(budget) = config.budget else {
        return None;
    };

    if estimate_milliamps(frame, config.milliamps_per_channel) <= budget {
        return None;
    }

    // Exact (unrounded) draw
    let draw =
        channel_total(frame) as f32 * f32::from(config.milliamps_per_channel) / 255.0;
    let factor = budget as f32 / draw * SAFETY_MARGIN;

    #[cfg(feature = "esp32-log")]
    println!(
        "[power] estimated draw {}mA over budget {}mA, scaling by {}",
        draw, budget, factor
    );

    scale_all(frame, factor);
    Some(factor)
}
