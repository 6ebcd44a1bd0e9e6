//! Randomness as an injected capability.
//!
//! The simulation never reads system entropy.  Anything that needs a random
//! choice (the random policy, random task generation) takes a
//! `&mut dyn RandomIndex` and asks it for an index below an exclusive upper
//! bound.  Production runs pass a seeded [`SimRng`]; tests pass a
//! [`ScriptedIndex`] replaying a fixed sequence, which makes every policy
//! deterministic.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Source of uniformly distributed indices.
pub trait RandomIndex {
    /// Return an index in `0..upper`.
    ///
    /// `upper` must be non-zero; implementations return `0` when it is not.
    fn pick_index(&mut self, upper: usize) -> usize;
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Seeded simulation RNG backed by `SmallRng`.
///
/// The same seed always produces the same sequence, so a whole comparison
/// run is reproducible from `SimConfig::seed`.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset, used to give
    /// each trial of a comparison its own stream.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }
}

impl RandomIndex for SimRng {
    #[inline]
    fn pick_index(&mut self, upper: usize) -> usize {
        if upper == 0 {
            return 0;
        }
        self.0.gen_range(0..upper)
    }
}

// ── ScriptedIndex ─────────────────────────────────────────────────────────────

/// Replays a fixed sequence of indices, cycling when exhausted.
///
/// Each scripted value is reduced modulo the requested bound, so a script
/// written for one graph never produces an out-of-range index on another.
#[derive(Debug, Clone, Default)]
pub struct ScriptedIndex {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedIndex {
    pub fn new(script: impl Into<Vec<usize>>) -> Self {
        Self { script: script.into(), cursor: 0 }
    }

    /// How many indices have been handed out so far.
    pub fn calls(&self) -> usize {
        self.cursor
    }
}

impl RandomIndex for ScriptedIndex {
    fn pick_index(&mut self, upper: usize) -> usize {
        if upper == 0 || self.script.is_empty() {
            self.cursor += 1;
            return 0;
        }
        let value = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        value % upper
    }
}

// ── FnIndex ───────────────────────────────────────────────────────────────────

/// Adapts any `FnMut(upper) -> index` closure into a [`RandomIndex`].
pub struct FnIndex<F>(pub F);

impl<F: FnMut(usize) -> usize> RandomIndex for FnIndex<F> {
    #[inline]
    fn pick_index(&mut self, upper: usize) -> usize {
        if upper == 0 {
            return 0;
        }
        (self.0)(upper) % upper
    }
}
