//! Frame pacing, output and persistence.
//!
//! Portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping between frames.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::animation::AnimationId;
use crate::{IndexStore, OutputDriver, Renderer};

/// Default target frame rate (40 FPS)
pub const DEFAULT_FPS: u32 = 40;

/// Default frame duration based on target FPS (25 ms)
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Number of frames the schedule may fall behind before it is reset
pub const MAX_DRIFT_FRAMES: u64 = 2;

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (zero if behind schedule).
    pub sleep_duration: Duration,
    /// Animation adopted during this frame, already handed to the store
    pub completed_switch: Option<AnimationId>,
}

/// Drives the renderer at a fixed rate and connects it to the hardware
///
/// Every tick renders one frame, writes it to the output driver and, when a
/// transition completed during that frame, persists the new animation index
/// exactly once. Store failures are logged and otherwise ignored.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(renderer, driver, store);
///
/// loop {
///     let result = scheduler.tick(Instant::now());
///     sleep(result.sleep_duration);
/// }
/// ```
pub struct FrameScheduler<
    'a,
    O: OutputDriver,
    S: IndexStore,
    const N: usize,
    const CONTROL_CHANNEL_SIZE: usize,
> {
    output: O,
    store: S,
    renderer: Renderer<'a, N, CONTROL_CHANNEL_SIZE>,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<'a, O: OutputDriver, S: IndexStore, const N: usize, const CONTROL_CHANNEL_SIZE: usize>
    FrameScheduler<'a, O, S, N, CONTROL_CHANNEL_SIZE>
{
    /// Create a scheduler running at [`DEFAULT_FPS`]
    pub fn new(renderer: Renderer<'a, N, CONTROL_CHANNEL_SIZE>, output: O, store: S) -> Self {
        Self::with_frame_duration(renderer, output, store, DEFAULT_FRAME_DURATION)
    }

    pub fn with_frame_duration(
        renderer: Renderer<'a, N, CONTROL_CHANNEL_SIZE>,
        output: O,
        store: S,
        frame_duration: Duration,
    ) -> Self {
        Self {
            output,
            store,
            renderer,
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Render, transmit and persist one frame
    ///
    /// The caller should wait until `next_deadline` before the next call.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        // Skip the backlog after a long stall instead of bursting to catch up
        let max_drift = self.frame_duration.as_millis() * MAX_DRIFT_FRAMES;
        if now.as_millis() > self.next_frame.as_millis() + max_drift {
            self.next_frame = now;
        }

        let frame = self.renderer.render();
        self.output.write(frame);

        let completed_switch = self.renderer.take_completed_switch();
        if let Some(animation) = completed_switch {
            self.persist(animation);
        }

        self.next_frame += self.frame_duration;
        let sleep_duration = if self.next_frame > now {
            self.next_frame - now
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
            completed_switch,
        }
    }

    fn persist(&mut self, animation: AnimationId) {
        match self.store.write_active_index(animation.index()) {
            Ok(()) => {}
            #[cfg(feature = "esp32-log")]
            Err(error) => println!(
                "[scheduler] failed to store {}: {}",
                animation.as_str(),
                error
            ),
            #[cfg(not(feature = "esp32-log"))]
            Err(_) => {}
        }
    }

    pub const fn renderer(&self) -> &Renderer<'a, N, CONTROL_CHANNEL_SIZE> {
        &self.renderer
    }

    pub const fn renderer_mut(&mut self) -> &mut Renderer<'a, N, CONTROL_CHANNEL_SIZE> {
        &mut self.renderer
    }

    pub const fn output(&self) -> &O {
        &self.output
    }

    pub const fn store(&self) -> &S {
        &self.store
    }
}
