//! Configuration for the kanban board
//!
//! The settings file is compiled into the bundle; there is no file system
//! to read from in the browser.

use std::collections::HashSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::{KanbanError, Result};
use crate::core::models::TaskStatus;

const EMBEDDED_CONFIG: &str = include_str!("../../kanban.toml");
const BOARD_PLACEHOLDER: &str = "{board}";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub board: BoardConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    /// Prepended to every localStorage key
    pub key_prefix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BoardConfig {
    /// Columns in display order
    pub columns: Vec<TaskStatus>,
    /// Write the default tasks when storage has no task list
    pub seed_on_first_run: bool,
    /// Title of the task created with a new board; `{board}` is replaced
    pub default_task_title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Any `log::LevelFilter` name: off, error, warn, info, debug, trace
    pub level: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            columns: TaskStatus::all(),
            seed_on_first_run: true,
            default_task_title: format!("Set up your first task for {}", BOARD_PLACEHOLDER),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// The bundled `kanban.toml`, or the defaults plus the reason it was
    /// rejected. The caller reports the error once logging is running,
    /// since the log level itself comes from this file.
    pub fn load_embedded() -> (Self, Option<KanbanError>) {
        Self::load_or_default(EMBEDDED_CONFIG)
    }

    fn load_or_default(content: &str) -> (Self, Option<KanbanError>) {
        match Self::from_toml_str(content) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.board.columns.is_empty() {
            return Err(KanbanError::InvalidConfig(
                "board.columns must list at least one status".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for status in &self.board.columns {
            if !seen.insert(status) {
                return Err(KanbanError::InvalidConfig(format!(
                    "board.columns lists {} twice",
                    status
                )));
            }
        }

        if !self.board.default_task_title.contains(BOARD_PLACEHOLDER) {
            return Err(KanbanError::InvalidConfig(format!(
                "board.default_task_title must contain {}",
                BOARD_PLACEHOLDER
            )));
        }

        log::LevelFilter::from_str(&self.logging.level).map_err(|_| {
            KanbanError::InvalidConfig(format!("unknown log level {:?}", self.logging.level))
        })?;

        Ok(())
    }

    pub fn log_level(&self) -> log::LevelFilter {
        log::LevelFilter::from_str(&self.logging.level).unwrap_or(log::LevelFilter::Info)
    }

    pub fn default_task_title(&self, board: &str) -> String {
        self.board.default_task_title.replace(BOARD_PLACEHOLDER, board)
    }
}
