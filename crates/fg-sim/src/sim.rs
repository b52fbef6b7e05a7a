//! The `Sim` struct and its tick loop.

use tracing::{debug, info};

use fg_agent::Agent;
use fg_core::{SimConfig, Tick};
use fg_world::World;

use crate::{AgentSummary, SimObserver, SimStats, TimeSystem, Transition};

/// Whether [`Sim::step`] does anything.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RunState {
    Running,
    Paused,
    /// Every agent is dead.  Only [`Sim::restart`] leaves this state.
    Finished,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation coordinator.
///
/// Owns the world, the agents (indexed by `AgentId`), and the time system,
/// and drives them in the fixed order described in the crate docs.  Also
/// keeps the initial world and agents so [`Sim::restart`] can replay the run
/// from the start.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Global configuration (seed, agent parameters, tick limit, …).
    pub config: SimConfig,

    /// The resource grid.  Mutated only by its own `update` and by agents
    /// consuming cells.
    pub world: World,

    /// All agents, dead ones included, in ascending `AgentId` order.
    pub agents: Vec<Agent>,

    /// The day/night barrier.
    pub time: TimeSystem,

    tick:  Tick,
    state: RunState,

    initial_world:  World,
    initial_agents: Vec<Agent>,
}

impl Sim {
    pub(crate) fn new(config: SimConfig, world: World, agents: Vec<Agent>) -> Self {
        let time = TimeSystem::new(config.agent.moves_per_day);
        Self {
            initial_world:  world.clone(),
            initial_agents: agents.clone(),
            config,
            world,
            agents,
            time,
            tick:  Tick::ZERO,
            state: RunState::Running,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run until every agent is dead, `config.max_ticks` is reached (when
    /// non-zero), or the sim is paused.
    ///
    /// With `max_ticks == 0` a world rich enough to feed every agent forever
    /// never returns; set a limit for open-ended runs.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimStats {
        while self.state == RunState::Running && !self.tick_limit_reached() {
            self.step(observer);
        }
        let stats = self.stats();
        info!(
            ticks = stats.ticks.0,
            days = stats.days,
            living = stats.living_count(),
            "simulation ended"
        );
        observer.on_sim_end(self.tick, &stats);
        stats
    }

    /// Run at most `n` ticks from the current position (ignores `max_ticks`).
    ///
    /// Stops early if the sim finishes or is paused.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            if self.state != RunState::Running {
                break;
            }
            self.step(observer);
        }
    }

    /// Execute one tick.  Returns the day/night transition that fired, if any.
    ///
    /// Does nothing unless the sim is [`RunState::Running`].
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> Option<Transition> {
        if self.state != RunState::Running {
            return None;
        }
        let now = self.tick;
        observer.on_tick_start(now);

        // ── ① World regrowth ──────────────────────────────────────────────
        self.world.update();

        // ── ② Agents, ascending id ────────────────────────────────────────
        let is_day = self.time.is_day();
        let mut acted = 0;
        for agent in &mut self.agents {
            if !agent.is_alive() {
                continue;
            }
            if agent.update(&mut self.world, is_day) {
                acted += 1;
            }
            if !agent.is_alive() {
                observer.on_agent_died(now, agent);
            }
        }

        // ── ③ Day/night barrier ───────────────────────────────────────────
        let transition = self.time.update(&self.agents);
        if let Some(t) = transition {
            match t {
                Transition::Nightfall => {
                    info!(tick = now.0, day = self.time.day_count(), "night falls");
                    self.apply_stranded_penalty(now, observer);
                }
                Transition::Daybreak => {
                    info!(tick = now.0, day = self.time.day_count(), "a new day begins");
                }
            }
            observer.on_transition(now, t, &self.time, &self.agents);
        }

        observer.on_tick_end(now, acted);

        // ── ④ Snapshot ────────────────────────────────────────────────────
        let interval = self.config.output_interval_ticks;
        if interval > 0 && now.0.is_multiple_of(interval) {
            observer.on_snapshot(now, &self.agents, &self.world);
        }

        self.tick = now.next();
        if self.living_count() == 0 {
            self.state = RunState::Finished;
            info!(tick = now.0, "all agents are dead");
        }
        transition
    }

    /// Stop [`Sim::run`] and make [`Sim::step`] a no-op.  Ignored once
    /// finished.
    pub fn pause(&mut self) {
        if self.state == RunState::Running {
            self.state = RunState::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.state == RunState::Paused {
            self.state = RunState::Running;
        }
    }

    pub fn toggle_pause(&mut self) {
        match self.state {
            RunState::Running  => self.pause(),
            RunState::Paused   => self.resume(),
            RunState::Finished => {}
        }
    }

    /// Reset world, agents, and time to their initial state.  The replay is
    /// identical to the first run since every RNG is restored too.
    pub fn restart(&mut self) {
        self.world  = self.initial_world.clone();
        self.agents = self.initial_agents.clone();
        self.time   = TimeSystem::new(self.config.agent.moves_per_day);
        self.tick   = Tick::ZERO;
        self.state  = RunState::Running;
        info!(agents = self.agents.len(), "simulation restarted");
    }

    /// Per-agent outcomes, cycle counters, and cell tallies as of now.
    pub fn stats(&self) -> SimStats {
        SimStats {
            ticks:       self.tick,
            days:        self.time.day_count(),
            time_cycles: self.time.time_cycles(),
            agents:      self.agents.iter().map(AgentSummary::from).collect(),
            cells:       self.world.count_cells_by_state(),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The tick the next [`Sim::step`] will execute.
    #[inline]
    pub fn tick(&self) -> Tick {
        self.tick
    }

    #[inline]
    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state == RunState::Finished
    }

    pub fn is_day(&self) -> bool {
        self.time.is_day()
    }

    pub fn living_count(&self) -> usize {
        self.agents.iter().filter(|a| a.is_alive()).count()
    }

    /// See [`TimeSystem::day_progress`].
    pub fn day_progress(&self) -> f32 {
        self.time.day_progress(&self.agents)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn tick_limit_reached(&self) -> bool {
        self.config.max_ticks > 0 && self.tick.0 >= self.config.max_ticks
    }

    /// Every living agent not standing on its home cell forfeits half its
    /// collected energy.  Agents that died this tick are skipped.
    fn apply_stranded_penalty<O: SimObserver>(&mut self, now: Tick, observer: &mut O) {
        for agent in &mut self.agents {
            if !agent.is_alive() {
                continue;
            }
            if agent.is_at_home() {
                debug!(agent = agent.id().0, "made it home");
                continue;
            }
            let lost = agent.forfeit_half_collected();
            info!(
                agent = agent.id().0,
                pos = %agent.position(),
                lost,
                "stranded at nightfall"
            );
            observer.on_stranded(now, agent, lost);
        }
    }
}
