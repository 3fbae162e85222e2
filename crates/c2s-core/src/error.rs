//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`, so `?` works across crate boundaries.

use thiserror::Error;

/// The error type for `c2s-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown movement type {0:?}: expected \"go_straight\", \"turn_left\", or \"turn_right\"")]
    UnknownDirection(String),
}

/// Shorthand result type for `c2s-core`.
pub type CoreResult<T> = Result<T, CoreError>;
