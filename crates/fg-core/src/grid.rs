//! Integer grid coordinates and unit steps.
//!
//! Coordinates are signed so that a candidate move one step past the edge
//! (`x = -1`) is representable and can be rejected by the world's bounds
//! check instead of wrapping.  Valid cells always have `0 <= x < width` and
//! `0 <= y < height`.

use std::fmt;

/// A cell coordinate on the world grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell reached by taking `step` from `self`.
    #[inline]
    pub fn offset(self, step: Step) -> GridPos {
        GridPos::new(self.x + step.dx, self.y + step.dy)
    }

    /// `|dx| + |dy|`: the number of 4-connected moves between two cells.
    #[inline]
    pub fn manhattan(self, other: GridPos) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// `max(|dx|, |dy|)`: the number of 8-connected moves between two cells.
    #[inline]
    pub fn chebyshev(self, other: GridPos) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// Straight-line distance, used by cluster growth falloff.
    #[inline]
    pub fn euclidean(self, other: GridPos) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }

    /// `true` if `other` is one king-move away (and not the same cell).
    #[inline]
    pub fn is_adjacent(self, other: GridPos) -> bool {
        self.chebyshev(other) == 1
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── Step ──────────────────────────────────────────────────────────────────────

/// A displacement between two cells.  Movement steps have each component in
/// `{-1, 0, 1}`; sensing offsets may be larger until [`Step::clamp_unit`] is
/// applied.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    pub dx: i32,
    pub dy: i32,
}

impl Step {
    pub const ZERO: Step = Step { dx: 0, dy: 0 };

    /// The eight king-move directions, row by row.
    pub const NEIGHBORS_8: [Step; 8] = [
        Step { dx: -1, dy: -1 },
        Step { dx:  0, dy: -1 },
        Step { dx:  1, dy: -1 },
        Step { dx: -1, dy:  0 },
        Step { dx:  1, dy:  0 },
        Step { dx: -1, dy:  1 },
        Step { dx:  0, dy:  1 },
        Step { dx:  1, dy:  1 },
    ];

    /// The four rook-move directions: left, right, up, down.
    pub const NEIGHBORS_4: [Step; 4] = [
        Step { dx: -1, dy:  0 },
        Step { dx:  1, dy:  0 },
        Step { dx:  0, dy: -1 },
        Step { dx:  0, dy:  1 },
    ];

    #[inline]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.dx == 0 && self.dy == 0
    }

    /// Reduce each component to its sign, giving a single-cell step.
    #[inline]
    pub fn clamp_unit(self) -> Step {
        Step::new(self.dx.clamp(-1, 1), self.dy.clamp(-1, 1))
    }

    /// `|dx| + |dy|`.
    #[inline]
    pub fn manhattan_len(self) -> u32 {
        self.dx.unsigned_abs() + self.dy.unsigned_abs()
    }
}
