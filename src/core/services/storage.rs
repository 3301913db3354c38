use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::core::error::{KanbanError, Result};

pub const TASKS_KEY: &str = "tasks";
pub const ACTIVE_BOARD_KEY: &str = "activeBoard";
pub const SHOW_SIDEBAR_KEY: &str = "showSideBar";
pub const LIGHT_THEME_KEY: &str = "light-theme";

/// String key-value persistence, the shape of `window.localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Browser `localStorage`. The handle is looked up on every call so the
/// store itself stays `Send + Sync` and can live inside a signal.
#[derive(Debug, Clone, Default)]
pub struct LocalStore {
    prefix: String,
}

impl LocalStore {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    fn key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }

    fn storage() -> Result<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| KanbanError::StorageUnavailable("no window object".to_string()))?;
        window
            .local_storage()
            .map_err(|e| KanbanError::StorageUnavailable(format!("{:?}", e)))?
            .ok_or_else(|| KanbanError::StorageUnavailable("localStorage is disabled".to_string()))
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Self::storage()?
            .get_item(&self.key(key))
            .map_err(|e| KanbanError::Storage(format!("Failed to read {}: {:?}", key, e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        Self::storage()?
            .set_item(&self.key(key), value)
            .map_err(|e| KanbanError::Storage(format!("Failed to write {}: {:?}", key, e)))
    }

    fn remove(&self, key: &str) -> Result<()> {
        Self::storage()?
            .remove_item(&self.key(key))
            .map_err(|e| KanbanError::Storage(format!("Failed to remove {}: {:?}", key, e)))
    }
}

/// In-process store. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| KanbanError::Storage("memory store lock poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.set(SHOW_SIDEBAR_KEY, "true").unwrap();
        assert_eq!(other.get(SHOW_SIDEBAR_KEY).unwrap().as_deref(), Some("true"));

        other.remove(SHOW_SIDEBAR_KEY).unwrap();
        assert_eq!(store.get(SHOW_SIDEBAR_KEY).unwrap(), None);
    }

    #[test]
    fn local_store_prefixes_keys() {
        assert_eq!(LocalStore::new("kanban.").key(TASKS_KEY), "kanban.tasks");
        assert_eq!(LocalStore::default().key(TASKS_KEY), "tasks");
    }
}
