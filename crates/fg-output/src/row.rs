//! Plain data row types written by output backends.

use fg_agent::{Agent, AgentState};
use fg_core::Tick;
use fg_sim::Transition;

/// One agent's position and energy levels at a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentSnapshotRow {
    pub tick:          u64,
    pub agent_id:      u32,
    pub x:             i32,
    pub y:             i32,
    pub state:         AgentState,
    pub stored:        u32,
    pub collected:     u32,
    pub sleep:         u32,
    pub moves_today:   u32,
    pub days_survived: u32,
}

impl AgentSnapshotRow {
    pub fn from_agent(tick: Tick, agent: &Agent) -> Self {
        let pos = agent.position();
        Self {
            tick:          tick.0,
            agent_id:      agent.id().0,
            x:             pos.x,
            y:             pos.y,
            state:         agent.state(),
            stored:        agent.stored_energy(),
            collected:     agent.collected_energy(),
            sleep:         agent.sleep_energy(),
            moves_today:   agent.moves_today(),
            days_survived: agent.days_survived(),
        }
    }
}

/// One row per day/night transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseSummaryRow {
    pub tick:          u64,
    pub transition:    Transition,
    pub day_count:     u32,
    pub time_cycles:   u32,
    pub living_agents: u32,
    /// Living agents on their home cell when the transition fired.
    pub agents_home:   u32,
    /// Agents that forfeited collected energy at this nightfall.  Always 0
    /// at daybreak.
    pub stranded:      u32,
}
