//! Seedable pseudo-random source for animations
//!
//! Animations receive their own generator at construction so their output is
//! reproducible for a given seed. The generator is `SplitMix64`, which is
//! small, fast and has no bad seeds.

use core::ops::Range;

const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

#[derive(Debug, Clone)]
pub struct Prng {
    state: u64,
}

impl Prng {
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Uniform value in `0..bound`, or 0 for an empty bound
    #[allow(clippy::cast_possible_truncation)]
    pub fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        ((u64::from(self.next_u32()) * u64::from(bound)) >> 32) as u32
    }

    /// Uniform value in `range`; empty ranges yield `range.start`
    #[allow(clippy::cast_possible_truncation)]
    pub fn range_u8(&mut self, range: Range<u8>) -> u8 {
        if range.end <= range.start {
            return range.start;
        }
        let span = u32::from(range.end - range.start);
        range.start + self.below(span) as u8
    }

    /// Uniform value in `[0, 1)`
    #[allow(clippy::cast_precision_loss)]
    pub fn unit_f32(&mut self) -> f32 {
        // 24 random bits fill the f32 mantissa exactly
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Uniform value in `[low, high)`
    pub fn range_f32(&mut self, low: f32, high: f32) -> f32 {
        low + (high - low) * self.unit_f32()
    }

    /// Derive an independent generator, used to seed new animations
    pub fn fork(&mut self) -> Self {
        Self::new(self.next_u64())
    }
}
