//! Error types for the kanban board
//!
//! Nothing here is fatal to the app: callers log the error and carry on
//! with the previous state.

use crate::core::models::TaskStatus;
use thiserror::Error;

/// Main error type for board operations
#[derive(Error, Debug)]
pub enum KanbanError {
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("Unknown task status: {0}")]
    UnknownStatus(String),

    #[error("Column not found for status: {0}")]
    MissingColumn(TaskStatus),

    #[error("No active board selected")]
    NoActiveBoard,

    #[error("Logger already installed: {0}")]
    Logger(#[from] log::SetLoggerError),
}

impl KanbanError {
    /// True for errors caused by form input rather than the environment.
    pub fn is_validation(&self) -> bool {
        matches!(self, KanbanError::MissingField { .. } | KanbanError::NoActiveBoard)
    }
}

/// Result type alias for board operations
pub type Result<T> = std::result::Result<T, KanbanError>;
