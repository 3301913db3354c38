pub mod preferences;
pub mod task;

pub use preferences::{Preferences, Theme};
pub use task::{Task, TaskDraft, TaskPatch, TaskStatus};
