//! Error types for globe-chase.

use thiserror::Error;

/// The main error type for globe-chase operations.
#[derive(Error, Debug)]
pub enum ChaseError {
    /// The chase view has not been initialized.
    #[error("chase view not initialized - call ChaseView::initialize() first")]
    NotInitialized,

    /// The chase view has already been initialized.
    #[error("chase view already initialized")]
    AlreadyInitialized,

    /// The game-state stream ended before delivering a snapshot.
    #[error("game-state stream ended without an initial snapshot")]
    MissingSnapshot,

    /// A position contained NaN or infinite coordinates.
    #[error("position ({x}, {y}, {z}) is not finite")]
    NonFinitePosition { x: f64, y: f64, z: f64 },

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for globe-chase operations.
pub type Result<T> = std::result::Result<T, ChaseError>;
