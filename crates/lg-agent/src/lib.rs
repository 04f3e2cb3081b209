//! `lg-agent` — entity storage for the luck-gate simulation.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`gate`]    | `GateState`, `GateTable` (per-agent node memory), `Barrier`  |
//! | [`store`]   | `AgentStore` (SoA arrays), `AgentSpawn`, `AgentStats`        |
//! | [`builder`] | `AgentStoreBuilder` (talent, position, heading draws)        |
//! | [`node`]    | `FixedNode`, `NodeSet`                                       |
//!
//! Agents and nodes are held in flat arrays and referenced by index
//! (`AgentId`, `NodeId`).  Neither is created nor destroyed mid-run.

pub mod builder;
pub mod gate;
pub mod node;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::AgentStoreBuilder;
pub use gate::{Barrier, GateState, GateTable};
pub use node::{FixedNode, NodeSet};
pub use store::{AgentSpawn, AgentStats, AgentStore};
