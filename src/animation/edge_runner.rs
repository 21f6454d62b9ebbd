//! Comet marching along the physical edges of the lamp
//!
//! The head walks one pixel per tick. When it reaches the end of an edge it
//! continues on a random other edge meeting at the same vertex. Requires a
//! layout with an edge graph; without one nothing is drawn.

use heapless::Vec;

use super::Animation;
use crate::{
    color::{Hsv, Rgbw, hsv8},
    controls::RenderContext,
    frame::{add_pixel, decay},
    layout::{EdgeEnd, EdgeSide, Layout},
    random::Prng,
};

/// Upper bound of edge ends meeting at one vertex
const MAX_VERTEX_DEGREE: usize = 8;

const HUE_STEP: u8 = 3;
const FADE: u8 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Walk {
    edge: u8,
    /// End of the edge the head is moving towards
    toward: EdgeSide,
    /// Pixels already walked on this edge
    step: u16,
}

/// Edge runner; decays the previous frame and adds the head on top
#[derive(Debug, Clone)]
pub struct EdgeRunner {
    walk: Option<Walk>,
    hue: u8,
    rng: Prng,
}

impl EdgeRunner {
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(mut rng: Prng) -> Self {
        Self {
            walk: None,
            hue: rng.below(256) as u8,
            rng,
        }
    }

    /// Pixel index of the head, if the runner is on an edge
    pub fn head(&self, layout: &Layout<'_>) -> Option<u16> {
        let walk = self.walk?;
        let edge = layout.edges().get(usize::from(walk.edge))?;
        let pixel = match walk.toward {
            EdgeSide::End => edge.start() + walk.step,
            EdgeSide::Start => edge.end() - walk.step,
        };
        Some(pixel)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn random_walk(&mut self, layout: &Layout<'_>) -> Option<Walk> {
        let count = u32::try_from(layout.edges().len()).ok()?;
        if count == 0 {
            return None;
        }
        let toward = if self.rng.below(2) == 0 {
            EdgeSide::Start
        } else {
            EdgeSide::End
        };
        Some(Walk {
            edge: self.rng.below(count) as u8,
            toward,
            step: 0,
        })
    }

    /// Continue from the vertex at the end of `walk` onto another edge
    #[allow(clippy::cast_possible_truncation)]
    fn next_walk(&mut self, walk: Walk, layout: &Layout<'_>) -> Option<Walk> {
        let arrived = EdgeEnd::new(walk.edge, walk.toward);
        let Some(vertex) = layout.vertex_of(arrived) else {
            return self.random_walk(layout);
        };

        let candidates: Vec<EdgeEnd, MAX_VERTEX_DEGREE> = vertex
            .ends()
            .iter()
            .copied()
            .filter(|end| end.edge != walk.edge)
            .take(MAX_VERTEX_DEGREE)
            .collect();
        let Ok(count) = u32::try_from(candidates.len()) else {
            return self.random_walk(layout);
        };
        if count == 0 {
            return self.random_walk(layout);
        }

        let entry = candidates[self.rng.below(count) as usize];
        Some(Walk {
            edge: entry.edge,
            toward: entry.side.opposite(),
            step: 0,
        })
    }

    fn draw(&self, ctx: &RenderContext<'_>, leds: &mut [Rgbw]) {
        decay(leds, FADE);
        let Some(head) = self.head(&ctx.layout) else {
            return;
        };
        let color = hsv8(
            Hsv {
                hue: self.hue,
                sat: 255,
                val: ctx.controls.brightness8(),
            },
            0,
        );
        // The edge graph may describe more pixels than the frame holds
        let _ = add_pixel(leds, usize::from(head), color);
    }
}

impl Animation for EdgeRunner {
    fn advance(&mut self, ctx: &RenderContext<'_>) {
        let layout = &ctx.layout;
        self.walk = match self.walk {
            None => self.random_walk(layout),
            Some(walk) => {
                let len = layout
                    .edges()
                    .get(usize::from(walk.edge))
                    .map_or(0, |edge| edge.pixel_count());
                if walk.step + 1 < len {
                    Some(Walk {
                        step: walk.step + 1,
                        ..walk
                    })
                } else {
                    self.next_walk(walk, layout)
                }
            }
        };
        self.hue = self.hue.wrapping_add(HUE_STEP);
    }

    fn render(&mut self, ctx: &RenderContext<'_>, leds: &mut [Rgbw]) {
        self.draw(ctx, leds);
    }

    fn snapshot(&mut self, ctx: &RenderContext<'_>, buffer: &mut [Rgbw]) {
        self.draw(ctx, buffer);
    }
}
