//! Fluent builder for constructing a [`Sim`].

use tracing::debug;

use fg_agent::Agent;
use fg_core::{AgentId, GridPos, SimConfig};
use fg_world::World;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`]: grid, agent parameters, agent count, seed, …
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                                      |
/// |--------------------------|----------------------------------------------|
/// | `.world(w)`              | `World::generate(config.world, config.seed)` |
/// | `.initial_positions(v)`  | Every agent at the home base                 |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .world(hand_built_world)
///     .initial_positions(positions)
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder {
    config:    SimConfig,
    world:     Option<World>,
    positions: Option<Vec<GridPos>>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, world: None, positions: None }
    }

    /// Use a pre-built world (e.g. `World::empty` + `seed_resource`) instead
    /// of generating one.  Its dimensions must match `config.world`.
    pub fn world(mut self, world: World) -> Self {
        self.world = Some(world);
        self
    }

    /// Supply the starting cell for each agent (must be length
    /// `agent_count`).  Home stays at `config.home_pos()`.
    pub fn initial_positions(mut self, positions: Vec<GridPos>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Validate inputs, build the world, spawn the agents, and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        let config = self.config;
        config.validate()?;
        let agent_count = config.agent_count;

        // ── World ─────────────────────────────────────────────────────────
        let world = match self.world {
            Some(w) => {
                if w.width() != config.world.width || w.height() != config.world.height {
                    return Err(SimError::WorldSizeMismatch {
                        width:      config.world.width,
                        height:     config.world.height,
                        got_width:  w.width(),
                        got_height: w.height(),
                    });
                }
                w
            }
            None => World::generate(config.world.clone(), config.seed)?,
        };

        // ── Positions ─────────────────────────────────────────────────────
        let home = config.home_pos();
        let positions = match self.positions {
            Some(p) => {
                if p.len() != agent_count {
                    return Err(SimError::AgentCountMismatch {
                        expected: agent_count,
                        got:      p.len(),
                        what:     "initial positions",
                    });
                }
                if let Some(&bad) = p.iter().find(|&&pos| !world.contains(pos)) {
                    return Err(SimError::PositionOutOfBounds(bad));
                }
                p
            }
            None => vec![home; agent_count],
        };

        // ── Agents ────────────────────────────────────────────────────────
        let mut agents = Vec::with_capacity(agent_count);
        for (i, &pos) in positions.iter().enumerate() {
            let id = AgentId::try_from(i).map_err(|_| SimError::TooManyAgents(agent_count))?;
            agents.push(Agent::new(id, home, &config.agent, config.seed).with_position(pos));
        }

        debug!(agents = agent_count, %home, seed = config.seed, "simulation built");
        Ok(Sim::new(config, world, agents))
    }
}
