//! Simulation tick counter.
//!
//! A tick is one pass of the coordinator loop: world regrowth, one update per
//! living agent, one day/night check.  Days have no fixed length in ticks
//! since they end when every living agent has spent its move quota, so
//! `Tick` only orders events and counts elapsed work.

use std::fmt;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
