//! `lg-core` — foundational types for the luck-gate simulation.
//!
//! This crate is a dependency of every other `lg-*` crate.  It has no `lg-*`
//! dependencies and minimal external ones (`rand`, `rand_distr`, and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `NodeId`                                   |
//! | [`geo`]         | `Vec2`, `Bounds`, heading arithmetic                  |
//! | [`time`]        | `Tick`, `RunBudget`                                   |
//! | [`config`]      | `SimConfig`, `TalentOverride`, `RewardTier`           |
//! | [`rng`]         | `RandomSource` trait, `SimRng`                        |
//! | [`error`]       | `LgError`, `LgResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on all public types (TOML config) |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{RewardTier, SimConfig, TalentOverride};
pub use error::{LgError, LgResult};
pub use geo::{Bounds, Vec2};
pub use ids::{AgentId, NodeId};
pub use rng::{RandomSource, SimRng};
pub use time::{RunBudget, Tick};
