//! The `Agent` struct and its per-tick update.

use std::collections::VecDeque;

use tracing::debug;

use fg_core::{AgentConfig, AgentId, AgentRng, GridPos, Step};
use fg_world::World;

use crate::energy::EnergyPool;
use crate::homing::direct_path;
use crate::movement;
use crate::state::{AgentState, DeathCause};

/// A single forager.
///
/// The agent owns its position, energy pools, and RNG; the world is only
/// touched through [`World::consume_resources`].  Once `Dead`, every method
/// that mutates is a no-op.
#[derive(Clone, Debug)]
pub struct Agent {
    id:   AgentId,
    pos:  GridPos,
    home: GridPos,

    stored:    EnergyPool,
    collected: EnergyPool,
    sleep:     EnergyPool,

    state:       AgentState,
    death_cause: Option<DeathCause>,

    moves_today:             u32,
    days_survived:           u32,
    total_distance_traveled: u64,

    last_step: Step,
    home_path: VecDeque<GridPos>,

    /// Woke from this night's sleep; idles until the next day call.
    rested: bool,

    config: AgentConfig,
    rng:    AgentRng,
}

impl Agent {
    /// Spawn agent `id` at `home`, seeding its RNG from the run's `seed`.
    pub fn new(id: AgentId, home: GridPos, config: &AgentConfig, seed: u64) -> Self {
        Self {
            id,
            pos:                     home,
            home,
            stored:                  EnergyPool::new(config.initial_stored_energy, config.max_stored_energy),
            collected:               EnergyPool::new(0, config.max_collected_energy),
            sleep:                   EnergyPool::new(config.initial_sleep_energy, config.max_sleep_energy),
            state:                   AgentState::Foraging,
            death_cause:             None,
            moves_today:             0,
            days_survived:           0,
            total_distance_traveled: 0,
            last_step:               Step::ZERO,
            home_path:               VecDeque::new(),
            rested:                  false,
            config:                  config.clone(),
            rng:                     AgentRng::new(seed, id),
        }
    }

    /// Start at `pos` instead of the home base.
    pub fn with_position(mut self, pos: GridPos) -> Self {
        self.pos = pos;
        self
    }

    // ── Per-tick update ───────────────────────────────────────────────────

    /// Advance one tick.  Returns `true` if the agent did something.
    ///
    /// By day: one step (foraging or homing) while the move quota lasts,
    /// counted whether or not the step succeeded.  By night: eat on the first
    /// call, then sleep until movement energy is full and wake.
    pub fn update(&mut self, world: &mut World, is_day: bool) -> bool {
        if !self.is_alive() {
            return false;
        }
        if is_day { self.day_update(world) } else { self.night_update() }
    }

    fn day_update(&mut self, world: &mut World) -> bool {
        self.rested = false;
        if self.state == AgentState::Sleeping {
            return self.sleep_tick();
        }
        if self.moves_today >= self.config.moves_per_day {
            return false;
        }
        if self.state == AgentState::Foraging && self.must_head_home() {
            self.state     = AgentState::ReturningHome;
            self.home_path = direct_path(self.pos, self.home);
            debug!(agent = self.id.0, pos = %self.pos, moves_left = self.moves_left(), "heading home");
        }
        let acted = match self.state {
            AgentState::ReturningHome => self.homing_step(world),
            _ => self.forage_step(world),
        };
        self.moves_today += 1;
        acted
    }

    fn night_update(&mut self) -> bool {
        match self.state {
            AgentState::Sleeping => self.sleep_tick(),
            _ if self.rested => false,
            _ => {
                self.home_path.clear();
                self.eat();
                if self.is_alive() {
                    self.state = AgentState::Sleeping;
                }
                true
            }
        }
    }

    // ── Movement ──────────────────────────────────────────────────────────

    /// Take one heuristic foraging step.  Returns `true` if the agent moved.
    ///
    /// Does not touch `moves_today`; [`Agent::update`] counts the attempt.
    pub fn forage_step(&mut self, world: &mut World) -> bool {
        if !self.is_alive() {
            return false;
        }
        let step = movement::choose_step(
            world,
            self.pos,
            self.last_step,
            self.config.sensing_radius,
            self.config.optimal_choice_probability,
            &mut self.rng,
        );
        self.last_step = step;
        self.try_move(world, self.pos.offset(step))
    }

    fn homing_step(&mut self, world: &mut World) -> bool {
        if self.pos == self.home {
            self.arrive_home();
            return false;
        }
        let next_ok = self
            .home_path
            .front()
            .is_some_and(|&p| world.contains(p) && self.pos.manhattan(p) == 1);
        if !next_ok {
            self.home_path = direct_path(self.pos, self.home);
        }
        let Some(next) = self.home_path.pop_front() else {
            return false;
        };
        self.last_step = Step::new(next.x - self.pos.x, next.y - self.pos.y);
        let moved = self.try_move(world, next);
        if moved && self.is_alive() && self.pos == self.home {
            self.arrive_home();
        }
        moved
    }

    /// Move to `target` if it is on the grid: harvest it and pay one unit of
    /// sleep energy.  Off-grid targets are silently refused.
    fn try_move(&mut self, world: &mut World, target: GridPos) -> bool {
        if !world.contains(target) {
            return false;
        }
        self.pos = target;
        self.total_distance_traveled += 1;

        let harvest = world.consume_resources(target);
        if !harvest.is_empty() {
            self.collected.add(harvest.amount);
        }

        self.sleep.sub(1);
        if self.sleep.is_empty() {
            self.die(DeathCause::Exhaustion);
        }
        true
    }

    fn must_head_home(&self) -> bool {
        self.distance_to_home() >= self.moves_left()
    }

    fn arrive_home(&mut self) {
        self.state = AgentState::Foraging;
        self.home_path.clear();
        debug!(agent = self.id.0, moves_today = self.moves_today, "arrived home");
    }

    // ── Night ─────────────────────────────────────────────────────────────

    /// Bank up to the daily requirement from collected into stored energy;
    /// any shortfall is burned from the reserve.
    fn eat(&mut self) {
        let need  = self.config.daily_energy_requirement;
        let eaten = self.collected.sub(need);
        self.stored.add(eaten);

        let deficit = need - eaten;
        if deficit > 0 {
            self.stored.sub(deficit);
            if self.stored.is_empty() {
                self.die(DeathCause::Starvation);
            }
        }
    }

    /// One night tick of recovery.  Returns `false` on the tick the agent
    /// wakes.
    fn sleep_tick(&mut self) -> bool {
        self.sleep.add(self.config.sleep_recovery);
        if !self.sleep.is_full() {
            return true;
        }
        self.state          = AgentState::Foraging;
        self.moves_today    = 0;
        self.days_survived += 1;
        self.rested         = true;
        debug!(agent = self.id.0, days_survived = self.days_survived, "woke");
        false
    }

    // ── Coordinator hooks ─────────────────────────────────────────────────

    /// Forfeit half (rounded down) of collected energy.  Returns the amount
    /// lost; `0` for dead agents.
    pub fn forfeit_half_collected(&mut self) -> u32 {
        if !self.is_alive() {
            return 0;
        }
        let lost = self.collected.value() / 2;
        self.collected.sub(lost)
    }

    fn die(&mut self, cause: DeathCause) {
        self.state       = AgentState::Dead;
        self.death_cause = Some(cause);
        self.home_path.clear();
        debug!(
            agent = self.id.0,
            %cause,
            pos = %self.pos,
            days_survived = self.days_survived,
            "agent died"
        );
    }

    // ── Read surface ──────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    #[inline]
    pub fn position(&self) -> GridPos {
        self.pos
    }

    #[inline]
    pub fn home(&self) -> GridPos {
        self.home
    }

    #[inline]
    pub fn state(&self) -> AgentState {
        self.state
    }

    pub fn death_cause(&self) -> Option<DeathCause> {
        self.death_cause
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.state.is_alive()
    }

    #[inline]
    pub fn is_sleeping(&self) -> bool {
        self.state == AgentState::Sleeping
    }

    pub fn is_at_home(&self) -> bool {
        self.pos == self.home
    }

    /// Manhattan distance to the home base.
    pub fn distance_to_home(&self) -> u32 {
        self.pos.manhattan(self.home)
    }

    pub fn stored_energy(&self) -> u32 {
        self.stored.value()
    }

    pub fn max_stored_energy(&self) -> u32 {
        self.stored.max()
    }

    pub fn collected_energy(&self) -> u32 {
        self.collected.value()
    }

    pub fn max_collected_energy(&self) -> u32 {
        self.collected.max()
    }

    pub fn sleep_energy(&self) -> u32 {
        self.sleep.value()
    }

    pub fn max_sleep_energy(&self) -> u32 {
        self.sleep.max()
    }

    /// Sleep energy as a fraction of its maximum.
    pub fn sleep_fraction(&self) -> f32 {
        self.sleep.fraction()
    }

    #[inline]
    pub fn moves_today(&self) -> u32 {
        self.moves_today
    }

    pub fn moves_per_day(&self) -> u32 {
        self.config.moves_per_day
    }

    /// Daily moves not yet spent.
    pub fn moves_left(&self) -> u32 {
        self.config.moves_per_day.saturating_sub(self.moves_today)
    }

    pub fn days_survived(&self) -> u32 {
        self.days_survived
    }

    pub fn total_distance_traveled(&self) -> u64 {
        self.total_distance_traveled
    }

    pub fn last_step(&self) -> Step {
        self.last_step
    }

    /// Remaining cells of the current homing path.
    pub fn home_path(&self) -> &VecDeque<GridPos> {
        &self.home_path
    }
}
