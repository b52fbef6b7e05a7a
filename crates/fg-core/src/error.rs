//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `FgError` as one variant
//! (`#[from]`), so configuration problems surface unchanged from any layer.

use thiserror::Error;

/// Errors raised while validating or assembling a simulation.
///
/// Domain outcomes (an agent starving, a move off the grid) are never errors;
/// they are state transitions reported through the simulation observer.
#[derive(Debug, Error)]
pub enum FgError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("position {0} is outside the {1}x{2} grid")]
    OutOfBounds(crate::GridPos, u32, u32),
}

/// Shorthand result type for all `fg-*` crates.
pub type FgResult<T> = Result<T, FgError>;
