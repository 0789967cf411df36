//! Core error type.
//!
//! Sub-crates define their own error enums (`GridError`, `SimError`) and wrap
//! `CoreError` where configuration problems can surface.

use thiserror::Error;

/// Errors raised by `sg-core`, chiefly configuration validation.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `sg-core`.
pub type CoreResult<T> = Result<T, CoreError>;
