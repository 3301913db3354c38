pub mod preferences;
pub mod repository;
pub mod seed;
pub mod storage;

pub use preferences::PreferenceStore;
pub use repository::TaskRepository;
pub use seed::{initial_tasks, seed_if_empty};
pub use storage::*;
