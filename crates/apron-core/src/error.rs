//! Framework error type.
//!
//! Sub-crates define their own error enums and either convert into
//! `CoreError` via `From` or keep them fully separate; both patterns are
//! used across this workspace, whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `apron-core` and a common base for
/// sub-crates that don't need a richer taxonomy of their own.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type.
pub type CoreResult<T> = Result<T, CoreError>;
