//! Agent lifecycle states.

use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AgentState {
    /// Daytime: sensing and moving toward resources.
    #[default]
    Foraging,
    /// Daytime: walking the direct path home before the move quota runs out.
    ReturningHome,
    /// Night: recovering movement energy.
    Sleeping,
    /// Terminal.
    Dead,
}

impl AgentState {
    #[inline]
    pub fn is_alive(self) -> bool {
        self != AgentState::Dead
    }

    /// Lowercase label used in logs and CSV exports.
    pub fn as_str(self) -> &'static str {
        match self {
            AgentState::Foraging      => "foraging",
            AgentState::ReturningHome => "returning_home",
            AgentState::Sleeping      => "sleeping",
            AgentState::Dead          => "dead",
        }
    }
}

impl fmt::Display for AgentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why an agent died.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DeathCause {
    /// Stored energy ran out after the nightly meal.
    Starvation,
    /// Sleep energy ran out after a move.
    Exhaustion,
}

impl fmt::Display for DeathCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DeathCause::Starvation => "starvation",
            DeathCause::Exhaustion => "exhaustion",
        })
    }
}
