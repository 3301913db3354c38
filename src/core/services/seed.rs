use super::preferences::PreferenceStore;
use super::repository::TaskRepository;
use super::storage::KeyValueStore;
use crate::core::error::Result;
use crate::core::models::Task;

const SEED_TASKS: &str = include_str!("seed.json");

pub fn initial_tasks() -> Result<Vec<Task>> {
    Ok(serde_json::from_str(SEED_TASKS)?)
}

/// Write the default tasks and show the sidebar, but only when no task
/// list has ever been stored. Returns whether anything was written.
pub fn seed_if_empty<S: KeyValueStore>(
    repo: &TaskRepository<S>,
    prefs: &PreferenceStore<S>,
) -> Result<bool> {
    if repo.has_data()? {
        log::info!("Data already exists in storage");
        return Ok(false);
    }

    let tasks = initial_tasks()?;
    repo.save_all(&tasks)?;
    prefs.save_show_sidebar(true)?;
    log::info!("Seeded storage with {} tasks", tasks.len());
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::TaskPatch;
    use crate::core::services::storage::MemoryStore;

    #[test]
    fn seed_data_decodes() {
        let tasks = initial_tasks().unwrap();
        assert!(!tasks.is_empty());
        assert!(tasks.iter().all(|t| !t.board.is_empty() && !t.title.is_empty()));
    }

    #[test]
    fn seeding_never_overwrites() {
        let store = MemoryStore::new();
        let repo = TaskRepository::new(store.clone());
        let prefs = PreferenceStore::new(store);

        assert!(seed_if_empty(&repo, &prefs).unwrap());
        let first_id = repo.get_all().unwrap()[0].id.clone();
        repo.patch(
            &first_id,
            TaskPatch {
                title: Some("Edited".into()),
                ..Default::default()
            },
        )
        .unwrap();

        assert!(!seed_if_empty(&repo, &prefs).unwrap());
        assert_eq!(repo.get_all().unwrap()[0].title, "Edited");
    }

    #[test]
    fn a_blank_value_is_reseeded() {
        let store = MemoryStore::new();
        let repo = TaskRepository::new(store.clone());
        let prefs = PreferenceStore::new(store.clone());

        store.set(crate::core::services::storage::TASKS_KEY, "").unwrap();
        assert!(seed_if_empty(&repo, &prefs).unwrap());
        assert_eq!(repo.get_all().unwrap(), initial_tasks().unwrap());
    }

    #[test]
    fn an_emptied_list_is_not_reseeded() {
        let store = MemoryStore::new();
        let repo = TaskRepository::new(store.clone());
        let prefs = PreferenceStore::new(store);

        repo.save_all(&[]).unwrap();
        assert!(!seed_if_empty(&repo, &prefs).unwrap());
        assert!(repo.get_all().unwrap().is_empty());
    }
}
