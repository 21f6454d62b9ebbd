//! Intent processing module
//!
//! Turns queued control intents into control updates and switch requests.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::channel::{Channel, Receiver, Sender};
use crate::controls::Controls;

/// Direction of an animation switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchDirection {
    Previous,
    Next,
}

impl SwitchDirection {
    /// Signed index step of this direction
    pub const fn step(self) -> i32 {
        match self {
            Self::Previous => -1,
            Self::Next => 1,
        }
    }
}

/// Input from the user, already normalized by the input collaborator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlIntent {
    /// New brightness in `[0, 1]`
    Brightness(f32),
    /// New modulation in `[0, 1]`
    Modulation(f32),
    /// Request a switch to a neighbouring animation
    Switch(SwitchDirection),
}

/// Switch requests collected from one drain of the queue
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlEffects {
    /// Net requested index step, `0` if nothing was requested
    pub switch_step: i32,
}

impl ControlEffects {
    pub const fn has_switch(&self) -> bool {
        self.switch_step != 0
    }
}

pub type ControlSender<'a, const SIZE: usize> = Sender<'a, ControlIntent, SIZE>;

pub type ControlReceiver<'a, const SIZE: usize> = Receiver<'a, ControlIntent, SIZE>;

pub type ControlChannel<const SIZE: usize> = Channel<ControlIntent, SIZE>;

/// Drains control intents at the start of each frame
pub struct IntentProcessor<'a, const SIZE: usize> {
    intents: ControlReceiver<'a, SIZE>,
}

impl<'a, const SIZE: usize> IntentProcessor<'a, SIZE> {
    pub const fn new(intents: ControlReceiver<'a, SIZE>) -> Self {
        Self { intents }
    }

    /// Apply every queued intent (non-blocking)
    ///
    /// Control values are written straight into `controls`; switch requests
    /// are summed and returned for the renderer to act on.
    pub fn process_pending(&mut self, controls: &mut Controls) -> ControlEffects {
        let mut effects = ControlEffects::default();

        while let Ok(intent) = self.intents.try_receive() {
            match intent {
                ControlIntent::Brightness(value) => controls.set_brightness(value),
                ControlIntent::Modulation(value) => controls.set_modulation(value),
                ControlIntent::Switch(direction) => {
                    #[cfg(feature = "esp32-log")]
                    println!("[intent] switch {:?}", direction);

                    effects.switch_step = effects.switch_step.saturating_add(direction.step());
                }
            }
        }

        effects
    }
}
