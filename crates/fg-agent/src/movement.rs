//! The foraging heuristic.
//!
//! # Resource-directed moves
//!
//! [`scan`] visits the square of Chebyshev radius `sensing_radius` around the
//! agent (own cell excluded) column by column (`dx` ascending, then `dy`
//! ascending) and records every `Full` cell with weight
//! `1 / max(1, manhattan)`.  [`pick_sensed`] stable-sorts by weight, so ties
//! keep scan order, then takes the best entry with probability
//! `optimal_choice_probability` or a uniformly random one otherwise.  The
//! chosen offset is clamped to a single step.
//!
//! # Smoothed random walk
//!
//! With nothing sensed, [`random_walk`] draws `r ∈ {-1,0,1}²`, reflects the
//! previous step off any wall the agent is touching, and averages the two per
//! axis.  Averages of `±0.5` round to `0`, so a component survives only when
//! both inputs are equal and non-zero.  A `(0, 0)` result is re-rolled once
//! over `{-1,0,1}²`; if that is still `(0, 0)`, `dx` is drawn from `{-1, 1}`.

use fg_core::{AgentRng, GridPos, Step};
use fg_world::World;

/// One resource-bearing cell seen by [`scan`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sensed {
    /// Offset from the agent to the cell.
    pub offset: Step,
    /// `1 / max(1, manhattan(offset))`.
    pub weight: f64,
}

/// Every `Full` cell within `radius` of `from`, in scan order.
///
/// Radii past the grid's larger dimension see nothing more, so they are
/// capped there.
pub fn scan(world: &World, from: GridPos, radius: u32) -> Vec<Sensed> {
    let span = world.width().max(world.height());
    let r = i32::try_from(radius.min(span)).unwrap_or(i32::MAX);
    let mut sensed = Vec::new();
    for dx in -r..=r {
        for dy in -r..=r {
            let offset = Step::new(dx, dy);
            if offset.is_zero() || !world.has_resources(from.offset(offset)) {
                continue;
            }
            sensed.push(Sensed {
                offset,
                weight: 1.0 / f64::from(offset.manhattan_len().max(1)),
            });
        }
    }
    sensed
}

/// Choose a unit step toward one of `sensed`.  `None` if nothing was sensed.
pub fn pick_sensed(sensed: &mut [Sensed], p_optimal: f64, rng: &mut AgentRng) -> Option<Step> {
    if sensed.is_empty() {
        return None;
    }
    sensed.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    let target = if rng.gen_bool(p_optimal) {
        sensed[0]
    } else {
        *rng.choose(sensed)?
    };
    Some(target.offset.clamp_unit())
}

/// Flip any component of `last` that points into a wall `pos` is touching.
pub fn reflect_at_walls(pos: GridPos, last: Step, width: u32, height: u32) -> Step {
    let mut out = last;
    let (max_x, max_y) = (width as i32 - 1, height as i32 - 1);
    if (pos.x == 0 && out.dx < 0) || (pos.x == max_x && out.dx > 0) {
        out.dx = -out.dx;
    }
    if (pos.y == 0 && out.dy < 0) || (pos.y == max_y && out.dy > 0) {
        out.dy = -out.dy;
    }
    out
}

/// Average two unit components.  Truncating division sends `±0.5` to `0`.
#[inline]
pub(crate) fn smooth(prev: i32, drawn: i32) -> i32 {
    (prev + drawn) / 2
}

/// Reflect `last` at the walls around `pos`, then average it with `drawn`.
pub(crate) fn blend(pos: GridPos, last: Step, drawn: Step, width: u32, height: u32) -> Step {
    let prev = reflect_at_walls(pos, last, width, height);
    Step::new(smooth(prev.dx, drawn.dx), smooth(prev.dy, drawn.dy))
}

/// A non-zero unit step continuing (noisily) along `last`.
pub fn random_walk(
    pos:    GridPos,
    last:   Step,
    width:  u32,
    height: u32,
    rng:    &mut AgentRng,
) -> Step {
    let drawn = Step::new(rng.unit(), rng.unit());
    let mut step = blend(pos, last, drawn, width, height);
    if step.is_zero() {
        step = Step::new(rng.unit(), rng.unit());
        if step.is_zero() {
            step.dx = rng.sign();
        }
    }
    step
}

/// The heuristic's next step from `pos`: toward a sensed resource if any,
/// otherwise a random-walk step.  May point off the grid.
pub fn choose_step(
    world:     &World,
    pos:       GridPos,
    last:      Step,
    radius:    u32,
    p_optimal: f64,
    rng:       &mut AgentRng,
) -> Step {
    let mut sensed = scan(world, pos, radius);
    match pick_sensed(&mut sensed, p_optimal, rng) {
        Some(step) => step,
        None => random_walk(pos, last, world.width(), world.height(), rng),
    }
}
