//! `fg-core`: foundational types for the forage simulation.
//!
//! Every other `fg-*` crate builds on these types.  External dependencies
//! are `rand` and `thiserror`, plus `serde` behind a feature.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `ClusterId`                                |
//! | [`grid`]        | `GridPos`, `Step`, Manhattan / Chebyshev distances    |
//! | [`resource`]    | `ResourceType` (`None`, `Food`, `Water`)              |
//! | [`time`]        | `Tick`                                                |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (world)              |
//! | [`config`]      | `SimConfig`, `WorldConfig`, `ResourceSpec`, `AgentConfig` |
//! | [`error`]       | `FgError`, `FgResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on all public types; needed to   |
//! |         | load a `SimConfig` from JSON or TOML.                      |

pub mod config;
pub mod error;
pub mod grid;
pub mod ids;
pub mod resource;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{AgentConfig, ResourceSpec, SimConfig, WorldConfig};
pub use error::{FgError, FgResult};
pub use grid::{GridPos, Step};
pub use ids::{AgentId, ClusterId};
pub use resource::ResourceType;
pub use rng::{AgentRng, SimRng};
pub use time::Tick;
