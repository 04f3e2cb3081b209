//! `lg-sim` — tick loop orchestrator for the luck-gate simulation.
//!
//! # Tick loop
//!
//! ```text
//! for each agent i in ascending AgentId order:
//!   ① Move      — advance `speed` along `heading`.
//!   ② Boundary  — clamp into the arena, reflect heading.
//!   ③ Gate      — GateEngine::step (prune, select node, barrier / score).
//!   ④ Collide   — resolve (i, j) for every j > i, in ascending j.
//! ```
//!
//! All writes are immediate, so agent `j` sees what agents `< j` already did
//! this tick (and agent `i`'s collision pushes land on agents that have not
//! moved yet).  This ordering is part of the contract: with the same seed the
//! run is bit-for-bit reproducible.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lg_core::{SimConfig, SimRng};
//! use lg_sim::{NoopObserver, SimBuilder};
//!
//! let config = SimConfig::default();
//! let rng = SimRng::from_seed_option(config.seed);
//! let mut sim = SimBuilder::new(config, rng).build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod snapshot;
pub mod summary;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{RunStats, Sim};
pub use snapshot::{AgentView, NodeView, Snapshot};
pub use summary::TickSummary;

pub use lg_gate::GateOutcome;
