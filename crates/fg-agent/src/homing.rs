//! Direct path back to the home base.

use std::collections::VecDeque;

use fg_core::GridPos;

/// The cells visited walking from `from` to `to`: every x step first, then
/// every y step.  Excludes `from`, ends with `to`; empty when already there.
///
/// Each consecutive pair is 4-adjacent, so a path of length `n` costs exactly
/// `manhattan(from, to) == n` moves.
pub fn direct_path(from: GridPos, to: GridPos) -> VecDeque<GridPos> {
    let mut path = VecDeque::with_capacity(from.manhattan(to) as usize);
    let mut cur  = from;
    let sx = (to.x - from.x).signum();
    let sy = (to.y - from.y).signum();
    while cur.x != to.x {
        cur.x += sx;
        path.push_back(cur);
    }
    while cur.y != to.y {
        cur.y += sy;
        path.push_back(cur);
    }
    path
}
