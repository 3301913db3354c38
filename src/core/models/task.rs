use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::core::error::{KanbanError, Result};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Todo,
    Doing,
    Done,
}

impl TaskStatus {
    /// Stable key used in storage and as the column's `data-status`.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::Doing => "doing",
            TaskStatus::Done => "done",
        }
    }

    /// Column header text.
    pub fn heading(&self) -> String {
        self.as_str().to_uppercase()
    }

    pub fn all() -> Vec<TaskStatus> {
        vec![TaskStatus::Todo, TaskStatus::Doing, TaskStatus::Done]
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = KanbanError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "todo" => Ok(TaskStatus::Todo),
            "doing" => Ok(TaskStatus::Doing),
            "done" => Ok(TaskStatus::Done),
            other => Err(KanbanError::UnknownStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: TaskStatus,
    pub board: String,
}

impl Task {
    /// Merge the set fields of `patch` into this task. The id never changes.
    pub fn apply(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(board) = patch.board {
            self.board = board;
        }
    }
}

// Older data stored timestamp ids as JSON numbers.
fn id_from_string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}

/// A task that has not been stored yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub board: String,
}

impl TaskDraft {
    /// Presence check for the required fields. Nothing else is validated.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(KanbanError::MissingField { field: "title" });
        }
        if self.board.is_empty() {
            return Err(KanbanError::MissingField { field: "board" });
        }
        Ok(())
    }

    pub fn into_task(self, id: String) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            status: self.status,
            board: self.board,
        }
    }
}

/// Partial update merged by `TaskRepository::patch`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub board: Option<String>,
}
