use thiserror::Error;

use fg_core::{FgError, GridPos};
use fg_world::WorldError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] FgError),

    #[error(transparent)]
    World(#[from] WorldError),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("supplied world is {got_width}x{got_height}, configuration says {width}x{height}")]
    WorldSizeMismatch {
        width:      u32,
        height:     u32,
        got_width:  u32,
        got_height: u32,
    },

    #[error("initial position {0} is outside the world")]
    PositionOutOfBounds(GridPos),

    #[error("agent count {0} exceeds the AgentId range")]
    TooManyAgents(usize),
}

pub type SimResult<T> = Result<T, SimError>;
