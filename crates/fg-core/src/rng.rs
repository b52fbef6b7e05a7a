//! Deterministic per-agent and world-level RNG wrappers.
//!
//! Every random draw in a run comes from one of two places:
//!
//! | Owner  | Type       | Seed                                        | Draws                          |
//! |--------|------------|---------------------------------------------|--------------------------------|
//! | Agent  | `AgentRng` | `global_seed ^ (agent_id * MIXING_CONSTANT)` | sensed-target choice, wander   |
//! | World  | `SimRng`   | `global_seed`, split into child streams      | cluster layout, regrowth times |
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio, so
//! consecutive agent ids land far apart in seed space.  An agent's movement
//! never perturbs the world's regrowth stream (or another agent's), and the
//! same global seed always replays the same run.

use rand::distributions::uniform::{SampleRange, SampleUniform};
use rand::distributions::{Distribution, Standard};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::AgentId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-agent RNG, owned by the agent it drives and cloned with it on restart.
#[derive(Clone, Debug)]
pub struct AgentRng(SmallRng);

impl AgentRng {
    pub fn new(global_seed: u64, agent: AgentId) -> Self {
        let seed = global_seed ^ u64::from(agent.0).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        Standard: Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T: SampleUniform, R: SampleRange<T>>(&mut self, range: R) -> T {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Uniform draw from `{-1, 0, 1}`.
    #[inline]
    pub fn unit(&mut self) -> i32 {
        self.0.gen_range(-1..=1)
    }

    /// `-1` or `1` with equal probability.
    #[inline]
    pub fn sign(&mut self) -> i32 {
        if self.0.r#gen::<bool>() { 1 } else { -1 }
    }

    /// Uniform pick; `None` for an empty slice.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.0)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// World-level RNG for cluster generation and regrowth duration draws.
#[derive(Clone, Debug)]
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Split off an independent stream.  Children are derived in call order,
    /// so the parent must split them in a fixed sequence.
    pub fn child(&mut self, stream: u64) -> SimRng {
        let seed = self.0.r#gen::<u64>() ^ stream.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn gen_range<T: SampleUniform, R: SampleRange<T>>(&mut self, range: R) -> T {
        self.0.gen_range(range)
    }

    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
