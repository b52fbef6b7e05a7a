//! A single grid location and its regrowth state machine.

use fg_core::{ClusterId, ResourceType};

/// Observable state of a cell.
///
/// Barren cells (never part of a cluster) report `Consumed`: they hold
/// nothing and never regrow.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    Full,
    Consumed,
    Regrowing,
}

/// What a consumption yielded.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Harvest {
    pub amount: u32,
    pub kind:   ResourceType,
}

impl Harvest {
    /// The result of consuming anything that is not `Full`.
    pub const NONE: Harvest = Harvest { amount: 0, kind: ResourceType::None };

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.amount == 0
    }
}

/// One cell of the world grid.
///
/// Invariants (upheld by every mutator):
/// - `state == Full` ⇒ `resource_amount > 0`
/// - `state != Full` ⇒ `resource_amount == 0`
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    resource_amount:  u32,
    resource_type:    ResourceType,
    state:            CellState,
    regrowth_time:    u32,
    regrowth_counter: u32,
    cluster_id:       Option<ClusterId>,
}

impl Cell {
    /// A barren cell.
    pub fn empty() -> Self {
        Self {
            resource_amount:  0,
            resource_type:    ResourceType::None,
            state:            CellState::Consumed,
            regrowth_time:    0,
            regrowth_counter: 0,
            cluster_id:       None,
        }
    }

    #[inline]
    pub fn state(&self) -> CellState {
        self.state
    }

    #[inline]
    pub fn resource_amount(&self) -> u32 {
        self.resource_amount
    }

    /// The resource this cell carries (or regrows).  `None` for barren cells.
    #[inline]
    pub fn resource_type(&self) -> ResourceType {
        self.resource_type
    }

    #[inline]
    pub fn cluster_id(&self) -> Option<ClusterId> {
        self.cluster_id
    }

    /// Duration of the current (or most recent) regrowth cycle.
    #[inline]
    pub fn regrowth_time(&self) -> u32 {
        self.regrowth_time
    }

    #[inline]
    pub fn regrowth_counter(&self) -> u32 {
        self.regrowth_counter
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.state == CellState::Full
    }

    /// `true` if no resource has ever been assigned to this cell.
    #[inline]
    pub fn is_barren(&self) -> bool {
        !self.resource_type.is_resource()
    }

    /// Fraction of the current regrowth completed, in `[0, 1]`.
    ///
    /// `0.0` for any cell that is not regrowing.
    pub fn regrowth_fraction(&self) -> f32 {
        if self.state != CellState::Regrowing || self.regrowth_time == 0 {
            return 0.0;
        }
        (self.regrowth_counter as f32 / self.regrowth_time as f32).min(1.0)
    }

    // ── Crate-private mutators (driven by World) ──────────────────────────

    /// Promote to `Full` with `amount` of `kind`.
    pub(crate) fn fill(&mut self, kind: ResourceType, amount: u32, cluster: Option<ClusterId>) {
        debug_assert!(kind.is_resource() && amount > 0);
        self.resource_type    = kind;
        self.resource_amount  = amount;
        self.state            = CellState::Full;
        self.regrowth_counter = 0;
        self.cluster_id       = cluster;
    }

    /// Take everything from a `Full` cell.
    ///
    /// `regrowth` is the freshly drawn duration when regrowth is enabled; the
    /// cell then starts `Regrowing`, otherwise it is `Consumed` for good.
    pub(crate) fn consume(&mut self, regrowth: Option<u32>) -> Harvest {
        if self.state != CellState::Full {
            return Harvest::NONE;
        }
        let harvest = Harvest { amount: self.resource_amount, kind: self.resource_type };
        self.resource_amount  = 0;
        self.regrowth_counter = 0;
        match regrowth {
            Some(duration) => {
                self.state         = CellState::Regrowing;
                self.regrowth_time = duration;
            }
            None => self.state = CellState::Consumed,
        }
        harvest
    }

    /// Advance one regrowth tick.  Returns `true` when the cycle is complete
    /// and the caller must call [`Cell::complete_regrowth`].
    pub(crate) fn tick_regrowth(&mut self) -> bool {
        if self.state != CellState::Regrowing {
            return false;
        }
        self.regrowth_counter += 1;
        self.regrowth_counter >= self.regrowth_time
    }

    /// Restore `amount` and stash the duration of the next cycle.
    pub(crate) fn complete_regrowth(&mut self, amount: u32, next_regrowth_time: u32) {
        self.state            = CellState::Full;
        self.resource_amount  = amount;
        self.regrowth_counter = 0;
        self.regrowth_time    = next_regrowth_time;
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::empty()
    }
}
