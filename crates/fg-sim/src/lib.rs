//! `fg-sim`: tick coordinator for the forage simulation.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                  |
//! |------------------|-----------------------------------------------------------|
//! | [`time_system`]  | `TimeSystem`, `Transition`, `Phase`, `PhaseParticipant`   |
//! | [`sim`]          | `Sim`: step / run / pause / restart                      |
//! | [`builder`]      | `SimBuilder`: validation, world generation, placement    |
//! | [`observer`]     | `SimObserver` hooks, `NoopObserver`                       |
//! | [`stats`]        | `SimStats`, `AgentSummary`                                |
//! | [`error`]        | `SimError`, `SimResult<T>`                                |
//!
//! # Tick loop
//!
//! ```text
//! every tick:
//!   ① World    : world.update(): regrowth counters advance.
//!   ② Agents   : agent.update(&mut world, is_day) for each living agent,
//!                 ascending AgentId.  Deaths are reported as they happen.
//!   ③ Time     : time.update(&agents): the day/night barrier.
//!                 Nightfall → every living agent away from home forfeits
//!                 half its collected energy.
//!   ④ Snapshot : every `output_interval_ticks` ticks.
//! ```
//!
//! Days have no fixed length: night falls on the tick the last living agent
//! spends its move quota, and day breaks on the tick the last one wakes.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use fg_core::SimConfig;
//! use fg_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default()).build()?;
//! let stats = sim.run(&mut NoopObserver);
//! println!("best: {:?}", stats.best_agent());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod stats;
pub mod time_system;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{RunState, Sim};
pub use stats::{AgentSummary, SimStats};
pub use time_system::{CycleStats, Phase, PhaseParticipant, TimeSystem, Transition};
