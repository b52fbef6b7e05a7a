//! Breadth-first nearest-resource lookup.
//!
//! The search expands over 4-connected neighbours in the fixed
//! [`Step::NEIGHBORS_4`] order, so among equally distant candidates the one
//! discovered first always wins and results are reproducible.  Distances are
//! Manhattan because the grid has no obstacles: BFS depth equals
//! `manhattan(from, cell)`.

use std::collections::VecDeque;

use fg_core::{GridPos, ResourceType, Step};

use crate::World;

impl World {
    /// The nearest `Full` cell to `from`, optionally restricted to one
    /// resource `kind` and to a Manhattan radius.
    ///
    /// `from` itself is a candidate at distance 0.  Returns `None` when
    /// `from` is off the grid or nothing matches within range.
    pub fn nearest_resource(
        &self,
        from:       GridPos,
        kind:       Option<ResourceType>,
        max_radius: Option<u32>,
    ) -> Option<GridPos> {
        let start = self.index(from)?;

        let matches = |idx: usize| {
            let cell = &self.cells[idx];
            cell.is_full() && kind.is_none_or(|k| cell.resource_type() == k)
        };

        let mut visited = vec![false; self.cells.len()];
        let mut queue   = VecDeque::new();
        visited[start] = true;
        queue.push_back((start, 0u32));

        while let Some((idx, depth)) = queue.pop_front() {
            if matches(idx) {
                return Some(self.pos_of(idx));
            }
            if max_radius.is_some_and(|r| depth >= r) {
                continue;
            }
            let here = self.pos_of(idx);
            for step in Step::NEIGHBORS_4 {
                let Some(next) = self.index(here.offset(step)) else {
                    continue;
                };
                if !visited[next] {
                    visited[next] = true;
                    queue.push_back((next, depth + 1));
                }
            }
        }
        None
    }

    /// Manhattan distance from `from` to the nearest `Full` cell of `kind`
    /// (any kind when `None`), if one exists.
    pub fn distance_to_nearest(&self, from: GridPos, kind: Option<ResourceType>) -> Option<u32> {
        self.nearest_resource(from, kind, None).map(|p| from.manhattan(p))
    }
}
