//! `fg-agent`: the forager: a per-agent decision and energy state machine.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`energy`]   | `EnergyPool`: a counter clamped to `[0, max]`                |
//! | [`state`]    | `AgentState`, `DeathCause`                                    |
//! | [`movement`] | Resource scan, weighted choice, smoothed random walk          |
//! | [`homing`]   | Direct axis-first path back to the home base                  |
//! | [`agent`]    | `Agent`: day/night update, moves, eating, sleeping, death    |
//!
//! # State machine
//!
//! ```text
//!   Foraging ──(distance home ≥ moves left)──▶ ReturningHome
//!      ▲    ◀─────────(reached home)──────────────┘
//!      │
//!      │ sleep full                first night call
//!   Sleeping ◀──────────────── Foraging | ReturningHome
//!
//!   any ──(sleep energy or stored energy reaches 0)──▶ Dead
//! ```
//!
//! An agent never reads the day/night flag on its own: the coordinator passes
//! `is_day` into every [`Agent::update`] call.

pub mod agent;
pub mod energy;
pub mod homing;
pub mod movement;
pub mod state;


pub use agent::Agent;
pub use energy::EnergyPool;
pub use state::{AgentState, DeathCause};
