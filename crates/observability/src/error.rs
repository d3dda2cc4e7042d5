//! Error types for observability crate

use thiserror::Error;

/// Errors that can occur during observability initialization
#[derive(Error, Debug)]
pub enum ObservabilityError {
    /// Subscriber could not be installed (e.g. one is already set)
    #[error("Failed to initialize observability: {0}")]
    InitFailed(String),

    /// Invalid filter directive
    #[error("Configuration error: {0}")]
    Config(String),
}
