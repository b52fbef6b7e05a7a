//! Seeded cluster generation.
//!
//! # Algorithm
//!
//! For each configured resource type, `cluster_count` times:
//!
//! 1. Draw a random barren centre cell (bounded retries; a cluster whose
//!    centre cannot be placed is skipped).
//! 2. Draw `target_size` uniformly in `[min_cluster_size, max_cluster_size]`
//!    and pick a shape: water becomes an elongated `River` with probability
//!    `river_probability`, everything else is a `Blob`.
//! 3. Breadth-first spread from the centre over an explicit FIFO frontier of
//!    grid indices.  Each popped cell offers its 8 neighbours in a
//!    shape-dependent order; a neighbour is examined at most once per
//!    cluster and admitted with probability `density × distance_factor`.
//! 4. Stop at `target_size` members or when the frontier runs dry.
//!
//! Cells that already carry a resource are never examined as candidates, so
//! no cell is claimed by two clusters.  The worklist keeps stack depth
//! constant and makes generation a pure function of the RNG stream.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use fg_core::{ClusterId, GridPos, ResourceSpec, ResourceType, SimRng, Step};

use crate::World;

/// Primary growth axis of a river cluster.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClusterShape {
    /// Roughly round; admission decays with Euclidean distance from centre.
    Blob,
    /// Elongated along `axis`; admission favours steps parallel to it and
    /// decays with distance off the axis line.
    River { axis: Axis },
}

/// A generation-time record of one grown cluster.  Never mutated after the
/// world is built; consumption and regrowth happen on the member cells.
#[derive(Clone, Debug, PartialEq)]
pub struct Cluster {
    pub id:            ClusterId,
    pub resource_type: ResourceType,
    pub center:        GridPos,
    /// The size growth aimed for.  `members.len()` may fall short of it when
    /// the frontier was exhausted first.
    pub target_size:   u32,
    pub shape:         ClusterShape,
    /// Member cells in admission order; `members[0]` is the centre.
    pub members:       Vec<GridPos>,
}

impl Cluster {
    #[inline]
    pub fn size(&self) -> usize {
        self.members.len()
    }
}

// ── Admission weights ─────────────────────────────────────────────────────────

const RIVER_PARALLEL:      f64 = 1.0;
const RIVER_DIAGONAL:      f64 = 0.5;
const RIVER_PERPENDICULAR: f64 = 0.15;
/// Falloff length (cells) for distance off a river's axis line.
const RIVER_BANK_FALLOFF:  f64 = 2.0;

/// Neighbour examination order for `shape`.
///
/// Rivers try the two parallel steps first, then the diagonals, then the
/// perpendicular steps, so the frontier elongates before it widens.
fn candidate_order(shape: ClusterShape) -> [Step; 8] {
    match shape {
        ClusterShape::Blob => Step::NEIGHBORS_8,
        ClusterShape::River { axis: Axis::Horizontal } => [
            Step::new(-1, 0),
            Step::new(1, 0),
            Step::new(-1, -1),
            Step::new(1, -1),
            Step::new(-1, 1),
            Step::new(1, 1),
            Step::new(0, -1),
            Step::new(0, 1),
        ],
        ClusterShape::River { axis: Axis::Vertical } => [
            Step::new(0, -1),
            Step::new(0, 1),
            Step::new(-1, -1),
            Step::new(-1, 1),
            Step::new(1, -1),
            Step::new(1, 1),
            Step::new(-1, 0),
            Step::new(1, 0),
        ],
    }
}

/// Multiplier on `density` for admitting `candidate`, reached by `step`.
fn distance_factor(
    shape:     ClusterShape,
    center:    GridPos,
    candidate: GridPos,
    step:      Step,
    spread:    f64,
) -> f64 {
    match shape {
        ClusterShape::Blob => (-candidate.euclidean(center) / spread).exp(),
        ClusterShape::River { axis } => {
            let (along, across, off_axis) = match axis {
                Axis::Horizontal => (step.dx, step.dy, candidate.y.abs_diff(center.y)),
                Axis::Vertical   => (step.dy, step.dx, candidate.x.abs_diff(center.x)),
            };
            let base = match (along != 0, across != 0) {
                (true, false) => RIVER_PARALLEL,
                (true, true)  => RIVER_DIAGONAL,
                _             => RIVER_PERPENDICULAR,
            };
            base * (-f64::from(off_axis) / RIVER_BANK_FALLOFF).exp()
        }
    }
}

// ── Generation ────────────────────────────────────────────────────────────────

/// Grow every configured cluster into `world`, in spec order.
pub(crate) fn generate_clusters(world: &mut World, rng: &mut SimRng) {
    let specs = world.config.resources.clone();
    for spec in &specs {
        for _ in 0..spec.cluster_count {
            let Some(center) = pick_center(world, rng) else {
                warn!(kind = %spec.kind, "no barren cell found for cluster centre; skipping");
                continue;
            };
            let target_size = rng.gen_range(spec.min_cluster_size..=spec.max_cluster_size);
            let shape = if spec.kind == ResourceType::Water && rng.gen_bool(spec.river_probability) {
                let axis = if rng.gen_bool(0.5) { Axis::Horizontal } else { Axis::Vertical };
                ClusterShape::River { axis }
            } else {
                ClusterShape::Blob
            };

            let Ok(id) = ClusterId::try_from(world.clusters.len()) else {
                warn!(clusters = world.clusters.len(), "cluster id space exhausted; stopping generation");
                return;
            };
            let members = grow(world, rng, spec, id, center, target_size, shape);
            debug!(
                cluster = id.0,
                kind = %spec.kind,
                ?shape,
                target_size,
                size = members.len(),
                "cluster grown"
            );
            world.clusters.push(Cluster {
                id,
                resource_type: spec.kind,
                center,
                target_size,
                shape,
                members,
            });
        }
    }
}

fn pick_center(world: &World, rng: &mut SimRng) -> Option<GridPos> {
    for _ in 0..world.config.center_attempts {
        let pos = GridPos::new(
            rng.gen_range(0..world.width as i32),
            rng.gen_range(0..world.height as i32),
        );
        if world.cell(pos).is_some_and(|c| c.is_barren()) {
            return Some(pos);
        }
    }
    None
}

fn grow(
    world:       &mut World,
    rng:         &mut SimRng,
    spec:        &ResourceSpec,
    id:          ClusterId,
    center:      GridPos,
    target_size: u32,
    shape:       ClusterShape,
) -> Vec<GridPos> {
    let target = target_size as usize;
    let spread = f64::from(target_size).sqrt().max(1.0);
    let order  = candidate_order(shape);

    let mut members  = Vec::with_capacity(target);
    let mut frontier = VecDeque::new();
    let mut examined = FxHashSet::default();

    let Some(center_idx) = world.index(center) else {
        return members;
    };
    world.cells[center_idx].fill(spec.kind, spec.value, Some(id));
    examined.insert(center_idx);
    frontier.push_back(center_idx);
    members.push(center);

    while members.len() < target {
        let Some(idx) = frontier.pop_front() else {
            break;
        };
        let here = world.pos_of(idx);

        for step in order {
            if members.len() >= target {
                break;
            }
            let next = here.offset(step);
            let Some(next_idx) = world.index(next) else {
                continue;
            };
            if !examined.insert(next_idx) || !world.cells[next_idx].is_barren() {
                continue;
            }
            let p = spec.density * distance_factor(shape, center, next, step, spread);
            if rng.gen_bool(p) {
                world.cells[next_idx].fill(spec.kind, spec.value, Some(id));
                members.push(next);
                frontier.push_back(next_idx);
            }
        }
    }
    members
}
