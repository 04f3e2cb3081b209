//! Shared error type.
//!
//! Sub-crates may define their own error enums and convert `LgError` into
//! them via `From` impls.  Only configuration can fail in this crate; the
//! simulation itself has no I/O failure surface.

use thiserror::Error;

/// The top-level error type for `lg-core` and a common base for sub-crates.
///
/// Raised by `SimConfig::validate` and by the `lg-agent` constructors for
/// agents and nodes that break a construction invariant.
#[derive(Debug, Error, PartialEq)]
pub enum LgError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `lg-*` crates.
pub type LgResult<T> = Result<T, LgError>;
