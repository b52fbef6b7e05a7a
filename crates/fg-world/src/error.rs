//! World-subsystem error type.

use thiserror::Error;

use fg_core::{FgError, GridPos, ResourceType};

/// Errors produced while building or hand-seeding a `World`.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error(transparent)]
    Core(#[from] FgError),

    #[error("position {0} is outside the world")]
    OutOfBounds(GridPos),

    #[error("resource type `{0}` has no spec in the world configuration")]
    UnconfiguredResource(ResourceType),
}

pub type WorldResult<T> = Result<T, WorldError>;
