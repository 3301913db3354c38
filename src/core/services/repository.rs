use uuid::Uuid;

use super::storage::{KeyValueStore, TASKS_KEY};
use crate::core::error::Result;
use crate::core::models::{Task, TaskDraft, TaskPatch};

/// CRUD over the task list stored under `tasks`.
#[derive(Debug, Clone)]
pub struct TaskRepository<S> {
    store: S,
}

impl<S: KeyValueStore> TaskRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// A blank `tasks` value counts as no data, so it gets seeded.
    pub fn has_data(&self) -> Result<bool> {
        Ok(self
            .store
            .get(TASKS_KEY)?
            .is_some_and(|raw| !raw.trim().is_empty()))
    }

    /// Tasks in storage order. Entries that no longer decode are skipped;
    /// a value that is not a JSON array reads as empty and is replaced on
    /// the next save.
    pub fn get_all(&self) -> Result<Vec<Task>> {
        let Some(raw) = self.store.get(TASKS_KEY)? else {
            return Ok(Vec::new());
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        let entries: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                log::error!("Stored task list is unreadable, treating it as empty: {}", e);
                return Ok(Vec::new());
            }
        };
        let total = entries.len();
        let tasks: Vec<Task> = entries
            .into_iter()
            .filter_map(|value| match serde_json::from_value(value) {
                Ok(task) => Some(task),
                Err(e) => {
                    log::warn!("Skipping stored task that failed to decode: {}", e);
                    None
                }
            })
            .collect();

        if tasks.len() != total {
            log::warn!("Loaded {} of {} stored tasks", tasks.len(), total);
        }
        Ok(tasks)
    }

    pub fn save_all(&self, tasks: &[Task]) -> Result<()> {
        let json = serde_json::to_string(tasks)?;
        self.store.set(TASKS_KEY, &json)?;
        log::debug!("Saved {} tasks", tasks.len());
        Ok(())
    }

    /// Validate, assign a fresh id, append and persist.
    pub fn create(&self, draft: TaskDraft) -> Result<Task> {
        draft.validate()?;

        let mut tasks = self.get_all()?;
        let mut id = Uuid::new_v4().to_string();
        while tasks.iter().any(|t| t.id == id) {
            id = Uuid::new_v4().to_string();
        }

        let task = draft.into_task(id);
        tasks.push(task.clone());
        self.save_all(&tasks)?;
        log::info!("Created task {} on board {}", task.id, task.board);
        Ok(task)
    }

    /// Returns `false` when no task has this id.
    pub fn patch(&self, id: &str, patch: TaskPatch) -> Result<bool> {
        let mut tasks = self.get_all()?;
        let Some(task) = tasks.iter_mut().find(|t| t.id == id) else {
            log::warn!("Task {} not found, nothing patched", id);
            return Ok(false);
        };
        task.apply(patch);
        self.save_all(&tasks)?;
        Ok(true)
    }

    /// Full overwrite. The stored id is kept even if `task.id` differs.
    pub fn replace(&self, id: &str, mut task: Task) -> Result<bool> {
        let mut tasks = self.get_all()?;
        let Some(index) = tasks.iter().position(|t| t.id == id) else {
            log::warn!("Task {} not found, nothing replaced", id);
            return Ok(false);
        };
        task.id = id.to_string();
        tasks[index] = task;
        self.save_all(&tasks)?;
        Ok(true)
    }

    pub fn delete(&self, id: &str) -> Result<bool> {
        let mut tasks = self.get_all()?;
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        if tasks.len() == before {
            log::debug!("Task {} already absent", id);
            return Ok(false);
        }
        self.save_all(&tasks)?;
        log::info!("Deleted task {}", id);
        Ok(true)
    }
}
