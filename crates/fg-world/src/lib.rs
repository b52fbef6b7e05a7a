//! `fg-world`: the resource grid the agents forage on.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`cell`]    | `Cell`, `CellState`, `Harvest`                                  |
//! | [`cluster`] | `Cluster`, `ClusterShape`, `Axis`, seeded frontier growth       |
//! | [`world`]   | `World`: queries, consumption, regrowth, `CellCounts`          |
//! | [`search`]  | Breadth-first nearest-resource lookup                           |
//! | [`error`]   | `WorldError`, `WorldResult<T>`                                  |
//!
//! # Cell lifecycle
//!
//! ```text
//!             generation / seed_resource
//!   (barren) ─────────────────────────────▶ Full
//!                                            │ consume_resources
//!                       regrowth enabled ◀───┴───▶ regrowth disabled
//!                             │                         │
//!                         Regrowing                  Consumed (forever)
//!                             │ update() × regrowth_time
//!                             ▼
//!                           Full
//! ```
//!
//! Only [`World::update`] and [`World::consume_resources`] mutate cells after
//! construction; every query is a pure read.

pub mod cell;
pub mod cluster;
pub mod error;
pub mod search;
pub mod world;

#[cfg(test)]
mod tests;

pub use cell::{Cell, CellState, Harvest};
pub use cluster::{Axis, Cluster, ClusterShape};
pub use error::{WorldError, WorldResult};
pub use world::{CellCounts, World};
