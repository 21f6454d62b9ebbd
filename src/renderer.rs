#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::animation::{Animation, AnimationId, AnimationSlot};
use crate::color::Rgbw;
use crate::controls::{Controls, RenderContext};
use crate::intent_processor::{ControlReceiver, IntentProcessor, SwitchDirection};
use crate::layout::Layout;
use crate::power::{PowerConfig, enforce_budget};
use crate::random::Prng;
use crate::transition::{TransitionConfig, TransitionEngine, TransitionStatus};

/// Default seed of the animation random source
pub const DEFAULT_SEED: u64 = 0x6c61_6d70;

/// Configuration for the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RendererConfig {
    /// Animation shown at startup, usually restored from the index store
    pub animation: AnimationId,
    pub transition: TransitionConfig,
    pub power: PowerConfig,
    /// Control values until the first intents arrive
    pub controls: Controls,
    pub seed: u64,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            animation: AnimationId::default(),
            transition: TransitionConfig::default(),
            power: PowerConfig::default(),
            controls: Controls::default(),
            seed: DEFAULT_SEED,
        }
    }
}

/// Frame orchestrator
///
/// Owns the live frame, the active animation and the transition engine.
pub struct Renderer<'a, const N: usize, const CONTROL_CHANNEL_SIZE: usize> {
    intent_processor: IntentProcessor<'a, CONTROL_CHANNEL_SIZE>,
    layout: Layout<'a>,
    power: PowerConfig,
    rng: Prng,

    controls: Controls,
    active: AnimationSlot,
    /// Animation being transitioned in
    incoming: Option<AnimationSlot>,
    /// Net switch step requested since the last completed transition
    pending_step: i32,
    completed: Option<AnimationId>,

    transition: TransitionEngine<N>,
    frame_buffer: [Rgbw; N],
}

impl<'a, const N: usize, const CONTROL_CHANNEL_SIZE: usize> Renderer<'a, N, CONTROL_CHANNEL_SIZE> {
    pub fn new(
        intents: ControlReceiver<'a, CONTROL_CHANNEL_SIZE>,
        layout: Layout<'a>,
        config: &RendererConfig,
    ) -> Self {
        debug_assert_eq!(layout.len(), N, "layout must place every pixel");
        let mut rng = Prng::new(config.seed);
        let active = config.animation.to_slot(&layout, rng.fork());
        Self {
            intent_processor: IntentProcessor::new(intents),
            layout,
            power: config.power,
            rng,
            controls: config.controls,
            active,
            incoming: None,
            pending_step: 0,
            completed: None,
            transition: TransitionEngine::new(config.transition),
            frame_buffer: [Rgbw::BLACK; N],
        }
    }

    /// Produce the next frame
    ///
    /// Drains pending intents, runs either the active animation or the
    /// transition and finally enforces the power budget.
    pub fn render(&mut self) -> &[Rgbw] {
        self.process_intents();

        if self.incoming.is_none() && self.pending_step != 0 {
            self.start_transition();
        }

        if self.incoming.is_some() {
            self.tick_transition();
        } else {
            self.tick_active();
        }

        self.enforce_power_budget();
        &self.frame_buffer
    }

    /// Advance the active animation and draw it into the live frame
    pub fn tick_active(&mut self) {
        let ctx = self.context();
        self.active.advance(&ctx);
        self.active.render(&ctx, &mut self.frame_buffer);
    }

    /// Ask for a switch to a neighbouring animation
    ///
    /// Returns `false` if the request was ignored because a transition is
    /// already running.
    pub fn request_switch(&mut self, direction: SwitchDirection) -> bool {
        self.request_step(direction.step())
    }

    pub const fn transition_in_progress(&self) -> bool {
        self.incoming.is_some()
    }

    /// Scale the live frame down to the configured current budget
    ///
    /// Returns the applied factor, `None` if the frame was already within
    /// budget.
    pub fn enforce_power_budget(&mut self) -> Option<f32> {
        enforce_budget(&mut self.frame_buffer, &self.power)
    }

    /// Id of an animation adopted since the last call
    pub fn take_completed_switch(&mut self) -> Option<AnimationId> {
        self.completed.take()
    }

    pub fn active_animation(&self) -> AnimationId {
        self.active.id()
    }

    pub fn incoming_animation(&self) -> Option<AnimationId> {
        self.incoming.as_ref().map(AnimationSlot::id)
    }

    pub const fn pending_step(&self) -> i32 {
        self.pending_step
    }

    pub const fn controls(&self) -> &Controls {
        &self.controls
    }

    pub const fn transition(&self) -> &TransitionEngine<N> {
        &self.transition
    }

    pub const fn frame(&self) -> &[Rgbw] {
        &self.frame_buffer
    }

    fn context(&self) -> RenderContext<'a> {
        RenderContext::new(self.controls, self.layout)
    }

    fn process_intents(&mut self) {
        let effects = self.intent_processor.process_pending(&mut self.controls);
        if effects.has_switch() {
            self.request_step(effects.switch_step);
        }
    }

    fn request_step(&mut self, step: i32) -> bool {
        if self.transition_in_progress() {
            #[cfg(feature = "esp32-log")]
            println!("[renderer] switch ignored, transition in progress");

            return false;
        }
        self.pending_step = self.pending_step.saturating_add(step);
        true
    }

    fn start_transition(&mut self) {
        let target = self.active.id().offset(self.pending_step);

        #[cfg(feature = "esp32-log")]
        println!(
            "[renderer] switching {} -> {}",
            self.active.id().as_str(),
            target.as_str()
        );

        self.incoming = Some(target.to_slot(&self.layout, self.rng.fork()));
        self.transition.begin(&self.layout);
    }

    fn tick_transition(&mut self) {
        let ctx = self.context();
        let Some(incoming) = self.incoming.as_mut() else {
            return;
        };

        // The outgoing animation keeps running underneath the mask
        self.active.advance(&ctx);
        self.active.render(&ctx, &mut self.frame_buffer);

        let status = self
            .transition
            .tick(incoming, &ctx, &mut self.frame_buffer);
        if status == TransitionStatus::Complete {
            self.finish_transition();
        }
    }

    fn finish_transition(&mut self) {
        let Some(incoming) = self.incoming.take() else {
            return;
        };
        self.active = incoming;
        self.pending_step = 0;
        self.completed = Some(self.active.id());
    }
}
