//! Simulation observer trait for progress reporting and data collection.

use fg_agent::Agent;
use fg_core::Tick;
use fg_world::World;

use crate::{SimStats, TimeSystem, Transition};

/// Callbacks invoked by [`Sim`][crate::Sim] at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: death log
///
/// ```rust,ignore
/// struct DeathLog(Vec<(Tick, AgentId)>);
///
/// impl SimObserver for DeathLog {
///     fn on_agent_died(&mut self, tick: Tick, agent: &Agent) {
///         self.0.push((tick, agent.id()));
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick.
    ///
    /// `acted` is the number of agents whose update did something this tick.
    fn on_tick_end(&mut self, _tick: Tick, _acted: usize) {}

    /// Called after the day/night barrier flips (and, at nightfall, after the
    /// stranded penalty has been applied).
    fn on_transition(
        &mut self,
        _tick:       Tick,
        _transition: Transition,
        _time:       &TimeSystem,
        _agents:     &[Agent],
    ) {}

    /// Called on the tick an agent dies, right after its update.
    fn on_agent_died(&mut self, _tick: Tick, _agent: &Agent) {}

    /// Called at nightfall for each living agent away from home, after it
    /// forfeited `lost` collected energy.
    fn on_stranded(&mut self, _tick: Tick, _agent: &Agent, _lost: u32) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks` ticks).
    ///
    /// Provides read-only access to every agent and the world so that output
    /// writers can record state without the sim knowing any output format.
    fn on_snapshot(&mut self, _tick: Tick, _agents: &[Agent], _world: &World) {}

    /// Called once when [`Sim::run`][crate::Sim::run] returns.
    fn on_sim_end(&mut self, _final_tick: Tick, _stats: &SimStats) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
