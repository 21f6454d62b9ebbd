#![no_std]

pub mod animation;
pub mod channel;
pub mod color;
pub mod controls;
pub mod frame;
pub mod frame_scheduler;
pub mod intent_processor;
pub mod layout;
pub mod power;
pub mod random;
pub mod renderer;
pub mod transition;

use core::fmt;

pub use animation::{ANIMATION_COUNT, Animation, AnimationId, AnimationSlot};
pub use controls::{Controls, RenderContext};
pub use frame::FrameError;
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use intent_processor::{
    ControlChannel, ControlEffects, ControlIntent, ControlReceiver, ControlSender,
    IntentProcessor, SwitchDirection,
};
pub use layout::{Layout, Point};
pub use power::{PowerBudget, PowerConfig};
pub use random::Prng;
pub use renderer::{Renderer, RendererConfig};
pub use transition::{TransitionConfig, TransitionEngine, TransitionStatus, WipeAxis};

pub use color::{Hsv, Rgbw};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The frame scheduler is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgbw]);
}

/// Error reported by an [`IndexStore`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// The storage medium is temporarily unavailable
    Busy,
    /// The storage driver failed
    Driver,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Busy => f.write_str("store is busy"),
            Self::Driver => f.write_str("store driver failed"),
        }
    }
}

/// Persistent storage for the active animation index
pub trait IndexStore {
    /// Remember the index of the animation that is now active
    fn write_active_index(&mut self, index: u8) -> Result<(), StoreError>;
}
