//! Animation system with compile-time known variants
//!
//! All animations are stored in an enum to avoid heap allocations.
//! Each animation implements the `Animation` trait.

mod bouncing_ball;
mod diag_bars;
mod edge_runner;
mod hue_light;
mod ping_pong;
mod plain_white;

pub use bouncing_ball::BouncingBall;
pub use diag_bars::DiagBars;
pub use edge_runner::EdgeRunner;
pub use hue_light::HueLight;
pub use ping_pong::PingPong;
pub use plain_white::PlainWhite;

use crate::{color::Rgbw, controls::RenderContext, layout::Layout, random::Prng};

const ANIMATION_NAME_PLAIN_WHITE: &str = "plain_white";
const ANIMATION_NAME_HUE_LIGHT: &str = "hue_light";
const ANIMATION_NAME_DIAG_BARS: &str = "diag_bars";
const ANIMATION_NAME_BOUNCING_BALL: &str = "bouncing_ball";
const ANIMATION_NAME_PING_PONG: &str = "ping_pong";
const ANIMATION_NAME_EDGE_RUNNER: &str = "edge_runner";

const ANIMATION_ID_PLAIN_WHITE: u8 = 0;
const ANIMATION_ID_HUE_LIGHT: u8 = 1;
const ANIMATION_ID_DIAG_BARS: u8 = 2;
const ANIMATION_ID_BOUNCING_BALL: u8 = 3;
const ANIMATION_ID_PING_PONG: u8 = 4;
const ANIMATION_ID_EDGE_RUNNER: u8 = 5;

/// Number of selectable animations
pub const ANIMATION_COUNT: u8 = 6;

pub trait Animation {
    /// Advance the internal state by exactly one tick
    ///
    /// Must not draw anything.
    fn advance(&mut self, ctx: &RenderContext<'_>);

    /// Draw the current state into the live frame
    ///
    /// Whether the previous frame content is kept (decay and redraw) or
    /// overwritten is up to each animation.
    fn render(&mut self, ctx: &RenderContext<'_>, leds: &mut [Rgbw]);

    /// Draw the current state into an off-screen buffer
    ///
    /// The buffer persists between calls during one transition. Animations
    /// without off-screen support leave it untouched (black).
    fn snapshot(&mut self, _ctx: &RenderContext<'_>, _buffer: &mut [Rgbw]) {}

    /// Whether the animation sits at its reset (neutral) point
    ///
    /// Static animations are always at rest.
    fn is_at_rest(&self) -> bool {
        false
    }
}

/// Animation slot - enum containing all possible animations
#[derive(Debug, Clone)]
pub enum AnimationSlot {
    /// White light with adjustable color temperature
    PlainWhite(PlainWhite),
    /// Solid color across the hue wheel
    HueLight(HueLight),
    /// Two diagonal bars sweeping over the lamp
    DiagBars(DiagBars),
    /// Damped bouncing ball
    BouncingBall(BouncingBall),
    /// Block bouncing between the strip ends
    PingPong(PingPong),
    /// Comet following the lamp edges
    EdgeRunner(EdgeRunner),
}

/// Known animation ids that can be selected
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum AnimationId {
    #[default]
    PlainWhite = ANIMATION_ID_PLAIN_WHITE,
    HueLight = ANIMATION_ID_HUE_LIGHT,
    DiagBars = ANIMATION_ID_DIAG_BARS,
    BouncingBall = ANIMATION_ID_BOUNCING_BALL,
    PingPong = ANIMATION_ID_PING_PONG,
    EdgeRunner = ANIMATION_ID_EDGE_RUNNER,
}

impl AnimationId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            ANIMATION_ID_PLAIN_WHITE => Self::PlainWhite,
            ANIMATION_ID_HUE_LIGHT => Self::HueLight,
            ANIMATION_ID_DIAG_BARS => Self::DiagBars,
            ANIMATION_ID_BOUNCING_BALL => Self::BouncingBall,
            ANIMATION_ID_PING_PONG => Self::PingPong,
            ANIMATION_ID_EDGE_RUNNER => Self::EdgeRunner,
            _ => return None,
        })
    }

    /// Restore an id from a persisted index, wrapping out-of-range values
    pub fn from_stored(value: u8) -> Self {
        Self::from_raw(value % ANIMATION_COUNT).unwrap_or_default()
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Id `step` positions away, wrapping in both directions
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn offset(self, step: i32) -> Self {
        let index = (i32::from(self.index()) + step).rem_euclid(i32::from(ANIMATION_COUNT));
        Self::from_stored(index as u8)
    }

    /// Create a fresh animation for this id
    ///
    /// `rng` seeds the animation's own random source.
    pub fn to_slot(self, layout: &Layout<'_>, rng: Prng) -> AnimationSlot {
        match self {
            Self::PlainWhite => AnimationSlot::PlainWhite(PlainWhite::new()),
            Self::HueLight => AnimationSlot::HueLight(HueLight::new()),
            Self::DiagBars => AnimationSlot::DiagBars(DiagBars::new(layout, rng)),
            Self::BouncingBall => {
                AnimationSlot::BouncingBall(BouncingBall::new(layout.len(), rng))
            }
            Self::PingPong => AnimationSlot::PingPong(PingPong::new(layout.len(), rng)),
            Self::EdgeRunner => AnimationSlot::EdgeRunner(EdgeRunner::new(rng)),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PlainWhite => ANIMATION_NAME_PLAIN_WHITE,
            Self::HueLight => ANIMATION_NAME_HUE_LIGHT,
            Self::DiagBars => ANIMATION_NAME_DIAG_BARS,
            Self::BouncingBall => ANIMATION_NAME_BOUNCING_BALL,
            Self::PingPong => ANIMATION_NAME_PING_PONG,
            Self::EdgeRunner => ANIMATION_NAME_EDGE_RUNNER,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            ANIMATION_NAME_PLAIN_WHITE => Some(Self::PlainWhite),
            ANIMATION_NAME_HUE_LIGHT => Some(Self::HueLight),
            ANIMATION_NAME_DIAG_BARS => Some(Self::DiagBars),
            ANIMATION_NAME_BOUNCING_BALL => Some(Self::BouncingBall),
            ANIMATION_NAME_PING_PONG => Some(Self::PingPong),
            ANIMATION_NAME_EDGE_RUNNER => Some(Self::EdgeRunner),
            _ => None,
        }
    }
}

impl AnimationSlot {
    /// Get the animation ID for external observation
    pub fn id(&self) -> AnimationId {
        match self {
            Self::PlainWhite(_) => AnimationId::PlainWhite,
            Self::HueLight(_) => AnimationId::HueLight,
            Self::DiagBars(_) => AnimationId::DiagBars,
            Self::BouncingBall(_) => AnimationId::BouncingBall,
            Self::PingPong(_) => AnimationId::PingPong,
            Self::EdgeRunner(_) => AnimationId::EdgeRunner,
        }
    }
}

impl Animation for AnimationSlot {
    fn advance(&mut self, ctx: &RenderContext<'_>) {
        match self {
            Self::PlainWhite(animation) => animation.advance(ctx),
            Self::HueLight(animation) => animation.advance(ctx),
            Self::DiagBars(animation) => animation.advance(ctx),
            Self::BouncingBall(animation) => animation.advance(ctx),
            Self::PingPong(animation) => animation.advance(ctx),
            Self::EdgeRunner(animation) => animation.advance(ctx),
        }
    }

    fn render(&mut self, ctx: &RenderContext<'_>, leds: &mut [Rgbw]) {
        match self {
            Self::PlainWhite(animation) => animation.render(ctx, leds),
            Self::HueLight(animation) => animation.render(ctx, leds),
            Self::DiagBars(animation) => animation.render(ctx, leds),
            Self::BouncingBall(animation) => animation.render(ctx, leds),
            Self::PingPong(animation) => animation.render(ctx, leds),
            Self::EdgeRunner(animation) => animation.render(ctx, leds),
        }
    }

    fn snapshot(&mut self, ctx: &RenderContext<'_>, buffer: &mut [Rgbw]) {
        match self {
            Self::PlainWhite(animation) => animation.snapshot(ctx, buffer),
            Self::HueLight(animation) => animation.snapshot(ctx, buffer),
            Self::DiagBars(animation) => animation.snapshot(ctx, buffer),
            Self::BouncingBall(animation) => animation.snapshot(ctx, buffer),
            Self::PingPong(animation) => animation.snapshot(ctx, buffer),
            Self::EdgeRunner(animation) => animation.snapshot(ctx, buffer),
        }
    }

    fn is_at_rest(&self) -> bool {
        match self {
            Self::PlainWhite(animation) => animation.is_at_rest(),
            Self::HueLight(animation) => animation.is_at_rest(),
            Self::DiagBars(animation) => animation.is_at_rest(),
            Self::BouncingBall(animation) => animation.is_at_rest(),
            Self::PingPong(animation) => animation.is_at_rest(),
            Self::EdgeRunner(animation) => animation.is_at_rest(),
        }
    }
}
