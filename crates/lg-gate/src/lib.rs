//! `lg-gate` — the per-(agent, node) barrier state machine.
//!
//! ```text
//! NoMemory ──enter range──▶ Unresolved ◀──reject──┐
//!                               │                 │
//!                               └──barrier raised─┘
//!                               │
//!                             pass
//!                               ▼
//!                            Passed ──contact──▶ +reward
//!
//! Unresolved / Passed ──leave range──▶ NoMemory
//! ```
//!
//! There is no edge from `NoMemory` straight to `Passed`: every approach needs
//! at least one barrier resolution before contact scores.
//!
//! | Module        | Contents                                         |
//! |---------------|--------------------------------------------------|
//! | [`params`]    | `GateParams`, `pass_probability`                 |
//! | [`outcome`]   | `GateOutcome`                                    |
//! | [`engine`]    | `GateEngine`                                     |
//! | [`error`]     | `GateError`                                      |

pub mod engine;
pub mod error;
pub mod outcome;
pub mod params;


pub use engine::GateEngine;
pub use error::{GateError, GateResult};
pub use outcome::GateOutcome;
pub use params::{GateParams, pass_probability};
