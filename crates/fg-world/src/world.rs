//! The `World` grid: construction, per-cell queries, consumption, regrowth.

use tracing::debug;

use fg_core::{GridPos, ResourceType, SimRng, WorldConfig};

use crate::cell::{Cell, CellState, Harvest};
use crate::cluster::{self, Cluster};
use crate::{WorldError, WorldResult};

/// Seed offsets for the two independent world RNG streams.
const GENERATION_STREAM: u64 = 1;
const REGROWTH_STREAM:   u64 = 2;

// ── CellCounts ────────────────────────────────────────────────────────────────

/// Cell tally by state, for status displays and end-of-run statistics.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CellCounts {
    pub full:      usize,
    pub consumed:  usize,
    pub regrowing: usize,
    pub total:     usize,
}

impl CellCounts {
    fn percent(&self, n: usize) -> f64 {
        if self.total == 0 { 0.0 } else { n as f64 * 100.0 / self.total as f64 }
    }

    pub fn full_percent(&self) -> f64 {
        self.percent(self.full)
    }

    pub fn consumed_percent(&self) -> f64 {
        self.percent(self.consumed)
    }

    pub fn regrowing_percent(&self) -> f64 {
        self.percent(self.regrowing)
    }
}

// ── World ─────────────────────────────────────────────────────────────────────

/// A fixed `width × height` grid of [`Cell`]s stored row-major.
///
/// Build with [`World::generate`] for a clustered layout or [`World::empty`]
/// plus [`World::seed_resource`] for hand-built scenarios.
#[derive(Clone, Debug)]
pub struct World {
    pub(crate) width:    u32,
    pub(crate) height:   u32,
    pub(crate) cells:    Vec<Cell>,
    pub(crate) clusters: Vec<Cluster>,
    pub(crate) config:   WorldConfig,
    /// Regrowth duration draws.
    rng: SimRng,
}

impl World {
    /// Validate `config` and grow every configured resource cluster.
    pub fn generate(config: WorldConfig, seed: u64) -> WorldResult<World> {
        let mut root = SimRng::new(seed);
        let mut gen_rng = root.child(GENERATION_STREAM);
        let mut world = Self::with_rng(config, root.child(REGROWTH_STREAM))?;
        cluster::generate_clusters(&mut world, &mut gen_rng);
        debug!(
            clusters = world.clusters.len(),
            full_cells = world.count_cells_by_state().full,
            "world generated"
        );
        Ok(world)
    }

    /// Validate `config` and build a grid of barren cells.
    ///
    /// Uses the same regrowth stream as [`World::generate`] for `seed`.
    pub fn empty(config: WorldConfig, seed: u64) -> WorldResult<World> {
        let mut root = SimRng::new(seed);
        let _ = root.child(GENERATION_STREAM);
        Self::with_rng(config, root.child(REGROWTH_STREAM))
    }

    fn with_rng(config: WorldConfig, rng: SimRng) -> WorldResult<World> {
        config.validate()?;
        Ok(World {
            width:    config.width,
            height:   config.height,
            cells:    vec![Cell::empty(); config.cell_count()],
            clusters: Vec::new(),
            config,
            rng,
        })
    }

    /// Make the cell at `pos` `Full` of `kind` at its configured value.
    ///
    /// Overwrites whatever the cell held before.  The cell belongs to no
    /// cluster.
    pub fn seed_resource(&mut self, pos: GridPos, kind: ResourceType) -> WorldResult<()> {
        let value = self.config.value_of(kind);
        if !kind.is_resource() || value == 0 {
            return Err(WorldError::UnconfiguredResource(kind));
        }
        let idx = self.index(pos).ok_or(WorldError::OutOfBounds(pos))?;
        self.cells[idx].fill(kind, value, None);
        Ok(())
    }

    // ── Per-tick mutation ─────────────────────────────────────────────────

    /// Advance regrowth on every cell by one tick.
    ///
    /// Cells whose counter reaches their duration become `Full` again at
    /// their type's configured value, with a freshly drawn duration.  A no-op
    /// when regrowth is disabled.
    pub fn update(&mut self) {
        if !self.config.regrowth_enabled {
            return;
        }
        let (min, max) = (self.config.min_regrowth_time, self.config.max_regrowth_time);
        for cell in &mut self.cells {
            if cell.tick_regrowth() {
                let amount = self.config.value_of(cell.resource_type());
                let next = self.rng.gen_range(min..=max);
                cell.complete_regrowth(amount, next);
            }
        }
    }

    /// Harvest the cell at `pos`.
    ///
    /// Returns [`Harvest::NONE`] for out-of-bounds or non-`Full` cells.
    /// Otherwise the cell is emptied and starts regrowing (or is consumed
    /// permanently when regrowth is disabled).
    pub fn consume_resources(&mut self, pos: GridPos) -> Harvest {
        let Some(idx) = self.index(pos) else {
            return Harvest::NONE;
        };
        if !self.cells[idx].is_full() {
            return Harvest::NONE;
        }
        let regrowth = if self.config.regrowth_enabled {
            let (min, max) = (self.config.min_regrowth_time, self.config.max_regrowth_time);
            Some(self.rng.gen_range(min..=max))
        } else {
            None
        };
        self.cells[idx].consume(regrowth)
    }

    // ── Geometry ──────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Bounds check.
    #[inline]
    pub fn is_valid_position(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    #[inline]
    pub fn contains(&self, pos: GridPos) -> bool {
        self.is_valid_position(pos.x, pos.y)
    }

    /// Row-major index of `pos`, or `None` outside the grid.
    #[inline]
    pub fn index(&self, pos: GridPos) -> Option<usize> {
        self.contains(pos)
            .then(|| pos.y as usize * self.width as usize + pos.x as usize)
    }

    /// Inverse of [`World::index`].
    #[inline]
    pub fn pos_of(&self, index: usize) -> GridPos {
        let w = self.width as usize;
        GridPos::new((index % w) as i32, (index / w) as i32)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn cell(&self, pos: GridPos) -> Option<&Cell> {
        self.index(pos).map(|i| &self.cells[i])
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clusters in generation order; `clusters()[id.index()]` is cluster `id`.
    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    /// `true` if the cell at `pos` is `Full`.
    pub fn has_resources(&self, pos: GridPos) -> bool {
        self.cell(pos).is_some_and(Cell::is_full)
    }

    /// `true` if the cell at `pos` is `Full` of `kind`.
    pub fn has_resource_of(&self, pos: GridPos, kind: ResourceType) -> bool {
        self.cell(pos).is_some_and(|c| c.is_full() && c.resource_type() == kind)
    }

    /// Regrowth progress of the cell at `pos`, `0.0` if not regrowing.
    pub fn regrowth_fraction(&self, pos: GridPos) -> f32 {
        self.cell(pos).map_or(0.0, Cell::regrowth_fraction)
    }

    pub fn count_cells_by_state(&self) -> CellCounts {
        let mut counts = CellCounts { total: self.cells.len(), ..CellCounts::default() };
        for cell in &self.cells {
            match cell.state() {
                CellState::Full      => counts.full += 1,
                CellState::Consumed  => counts.consumed += 1,
                CellState::Regrowing => counts.regrowing += 1,
            }
        }
        counts
    }

    /// Fraction of cells currently holding nothing (consumed, regrowing, or
    /// barren).
    pub fn consumed_fraction(&self) -> f64 {
        let empty = self.cells.iter().filter(|c| !c.is_full()).count();
        empty as f64 / self.cells.len() as f64
    }

    /// Share of `Full` cells in the in-bounds square of `radius` around `pos`.
    pub fn local_density(&self, pos: GridPos, radius: u32) -> f32 {
        let r = radius as i32;
        let mut total = 0u32;
        let mut full = 0u32;
        for y in pos.y - r..=pos.y + r {
            for x in pos.x - r..=pos.x + r {
                if let Some(cell) = self.cell(GridPos::new(x, y)) {
                    total += 1;
                    if cell.is_full() {
                        full += 1;
                    }
                }
            }
        }
        full as f32 / total.max(1) as f32
    }

    /// [`World::local_density`] for every cell, row-major.
    pub fn density_map(&self, radius: u32) -> Vec<f32> {
        (0..self.cells.len())
            .map(|i| self.local_density(self.pos_of(i), radius))
            .collect()
    }
}
