//! Crossfade between two animations
//!
//! A white bar sweeps across the lamp along one axis. Every pixel the bar
//! has touched switches over to the incoming animation and stays switched
//! (the mask only grows). The bar itself fades out behind the wipe, so the
//! transition ends once the wipe has left the lamp and the bar is dark.
//!
//! The engine owns its scratch buffers. The incoming animation renders into
//! them through [`Animation::snapshot`], the outgoing one keeps drawing into
//! the live frame and only the masked pixels are overwritten.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::animation::Animation;
use crate::color::Rgbw;
use crate::controls::RenderContext;
use crate::frame::{decay, is_black};
use crate::layout::Layout;

/// Default wipe advance per tick, in axis units
pub const DEFAULT_DELTA: f32 = 42.0;

/// Default bar thickness, in axis units
pub const DEFAULT_THICKNESS: f32 = 75.0;

/// Default per-tick fade of the bar
pub const DEFAULT_BAR_DECAY: u8 = 32;

/// Coordinate the wipe travels along
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WipeAxis {
    /// Horizontal pixel position
    #[default]
    X,
    /// Vertical pixel position
    Y,
    /// Wiring order
    Index,
}

impl WipeAxis {
    #[allow(clippy::cast_precision_loss)]
    fn coordinate(self, layout: &Layout<'_>, index: usize) -> f32 {
        match self {
            Self::Index => index as f32,
            // Pixels the layout does not place sit at the axis origin
            Self::X => layout.point(index).map_or(0.0, |point| f32::from(point.x)),
            Self::Y => layout.point(index).map_or(0.0, |point| f32::from(point.y)),
        }
    }
}

/// Which way the wipe travels along its axis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WipeDirection {
    /// From the axis origin towards its far end
    #[default]
    Forward,
}

impl WipeDirection {
    /// Map a raw axis coordinate to the distance from where the wipe starts
    const fn orient(self, coordinate: f32) -> f32 {
        match self {
            Self::Forward => coordinate,
        }
    }
}

/// Configuration for animation transitions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionConfig {
    pub axis: WipeAxis,
    pub direction: WipeDirection,
    /// Wipe advance per tick, must be positive and finite
    pub delta: f32,
    /// Bar thickness
    pub thickness: f32,
    /// Bar fade per tick, at least 1
    pub bar_decay: u8,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            axis: WipeAxis::X,
            direction: WipeDirection::Forward,
            delta: DEFAULT_DELTA,
            thickness: DEFAULT_THICKNESS,
            bar_decay: DEFAULT_BAR_DECAY,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransitionPhase {
    #[default]
    Idle,
    Running,
}

/// Outcome of a single transition tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionStatus {
    Running,
    /// The live frame shows only the incoming animation now
    Complete,
}

/// Wipe transition state machine with its scratch buffers
#[derive(Debug, Clone)]
pub struct TransitionEngine<const N: usize> {
    config: TransitionConfig,
    phase: TransitionPhase,
    wipe: f32,
    /// Smallest oriented axis coordinate on the lamp
    start: f32,
    /// Largest oriented axis coordinate on the lamp
    extent: f32,
    steps: u32,
    mask: [bool; N],
    incoming: [Rgbw; N],
    bar: [Rgbw; N],
}

impl<const N: usize> Default for TransitionEngine<N> {
    fn default() -> Self {
        Self::new(TransitionConfig::default())
    }
}

impl<const N: usize> TransitionEngine<N> {
    pub const fn new(config: TransitionConfig) -> Self {
        Self {
            config,
            phase: TransitionPhase::Idle,
            wipe: 0.0,
            start: 0.0,
            extent: 0.0,
            steps: 0,
            mask: [false; N],
            incoming: [Rgbw::BLACK; N],
            bar: [Rgbw::BLACK; N],
        }
    }

    pub const fn config(&self) -> &TransitionConfig {
        &self.config
    }

    pub const fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub const fn is_running(&self) -> bool {
        matches!(self.phase, TransitionPhase::Running)
    }

    /// Current wipe position along the axis
    pub const fn wipe_position(&self) -> f32 {
        self.wipe
    }

    /// Ticks since the transition started
    pub const fn steps(&self) -> u32 {
        self.steps
    }

    pub const fn mask(&self) -> &[bool; N] {
        &self.mask
    }

    pub const fn incoming(&self) -> &[Rgbw; N] {
        &self.incoming
    }

    pub const fn bar(&self) -> &[Rgbw; N] {
        &self.bar
    }

    /// Enter the running phase with clean scratch state
    pub fn begin(&mut self, layout: &Layout<'_>) {
        self.reset();
        if N > 0 {
            let (start, extent) = (0..N)
                .map(|index| self.position_of(layout, index))
                .fold((f32::INFINITY, f32::NEG_INFINITY), |(low, high), position| {
                    (low.min(position), high.max(position))
                });
            self.start = start;
            self.extent = extent;
        }
        self.wipe = self.start;
        self.phase = TransitionPhase::Running;

        #[cfg(feature = "esp32-log")]
        println!("[transition] begin, span {}..{}", self.start, self.extent);
    }

    /// Drop any transition in progress and clear the scratch buffers
    pub fn reset(&mut self) {
        self.phase = TransitionPhase::Idle;
        self.wipe = 0.0;
        self.start = 0.0;
        self.extent = 0.0;
        self.steps = 0;
        self.mask = [false; N];
        self.incoming = [Rgbw::BLACK; N];
        self.bar = [Rgbw::BLACK; N];
    }

    /// Run one transition tick
    ///
    /// `live` must already hold the outgoing animation's frame for this
    /// tick. Starts a new transition when called while idle.
    pub fn tick<A: Animation>(
        &mut self,
        incoming: &mut A,
        ctx: &RenderContext<'_>,
        live: &mut [Rgbw],
    ) -> TransitionStatus {
        if !self.is_running() {
            self.begin(&ctx.layout);
        }

        incoming.advance(ctx);
        incoming.snapshot(ctx, &mut self.incoming);

        let delta = self.delta();
        self.wipe += delta;
        decay(&mut self.bar, self.config.bar_decay.max(1));

        let reach = self.config.thickness.max(delta);
        let bar_color = Rgbw::white(ctx.controls.brightness8());
        for index in 0..N {
            let behind = self.wipe - self.position_of(&ctx.layout, index);
            if behind > 0.0 && behind <= reach {
                self.bar[index] = bar_color;
                self.mask[index] = true;
            }
        }

        for (index, pixel) in live.iter_mut().take(N).enumerate() {
            if self.mask[index] {
                *pixel = self.incoming[index];
            }
            *pixel = pixel.add(self.bar[index]);
        }
        self.steps = self.steps.saturating_add(1);

        if self.wipe > self.extent && is_black(&self.bar) {
            #[cfg(feature = "esp32-log")]
            println!("[transition] complete after {} steps", self.steps);

            self.phase = TransitionPhase::Idle;
            return TransitionStatus::Complete;
        }
        TransitionStatus::Running
    }

    /// Configured wipe step, falling back to the default when it would
    /// never carry the wipe across the lamp
    fn delta(&self) -> f32 {
        let delta = self.config.delta;
        if delta.is_finite() && delta > 0.0 {
            delta
        } else {
            DEFAULT_DELTA
        }
    }

    fn position_of(&self, layout: &Layout<'_>, index: usize) -> f32 {
        let coordinate = self.config.axis.coordinate(layout, index);
        self.config.direction.orient(coordinate)
    }
}
