//! Domain layer error types
//!
//! Layout and counter operations are total; these cover the demo shell and
//! configuration, which can be handed bad input.

use thiserror::Error;

use crate::shared::config::ConfigError;

/// Main domain error type
#[derive(Error, Debug)]
pub enum DomainError {
    /// A list catalog must hold at least one item
    #[error("List catalog is empty")]
    EmptyCatalog,

    /// Demo name not recognised
    #[error("Unknown demo: {0}")]
    UnknownDemo(String),

    /// Bad command-line or extras value
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// JSON (de)serialization failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
