// File: crates/grid-core/src/error.rs
// Summary: Error types for surface failures and grid rendering.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GridError>;

/// Failure reported by a drawing surface. Always fatal for the current render.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("drawing surface unavailable: {0}")]
    Unavailable(String),

    #[error("unknown color: {0}")]
    InvalidColor(String),
}

#[derive(Error, Debug)]
pub enum GridError {
    #[error("Surface error: {0}")]
    Surface(#[from] SurfaceError),

    #[error("Config error: {0}")]
    Config(String),
}
