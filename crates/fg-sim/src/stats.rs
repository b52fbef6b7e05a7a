//! End-of-run statistics.

use fg_agent::{Agent, DeathCause};
use fg_core::{AgentId, Tick};
use fg_world::CellCounts;

/// Per-agent outcome.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentSummary {
    pub id:                      AgentId,
    pub alive:                   bool,
    pub days_survived:           u32,
    pub total_distance_traveled: u64,
    pub death_cause:             Option<DeathCause>,
}

impl From<&Agent> for AgentSummary {
    fn from(agent: &Agent) -> Self {
        Self {
            id:                      agent.id(),
            alive:                   agent.is_alive(),
            days_survived:           agent.days_survived(),
            total_distance_traveled: agent.total_distance_traveled(),
            death_cause:             agent.death_cause(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SimStats {
    /// Ticks executed.
    pub ticks:       Tick,
    /// Daybreaks so far.
    pub days:        u32,
    pub time_cycles: u32,
    pub agents:      Vec<AgentSummary>,
    pub cells:       CellCounts,
}

impl SimStats {
    /// The agent that survived the most days; the lowest id wins ties.
    pub fn best_agent(&self) -> Option<&AgentSummary> {
        self.agents
            .iter()
            .reduce(|best, a| if a.days_survived > best.days_survived { a } else { best })
    }

    pub fn living_count(&self) -> usize {
        self.agents.iter().filter(|a| a.alive).count()
    }
}
