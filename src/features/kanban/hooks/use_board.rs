use leptos::prelude::*;

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::services::LocalStore;
use crate::features::kanban::services::AppController;

pub type BoardController = AppController<LocalStore>;

/// Handle to the board state shared by every component on the page.
#[derive(Clone, Copy)]
pub struct BoardHook {
    pub state: RwSignal<BoardController>,
}

pub fn use_board(config: Config) -> BoardHook {
    let store = LocalStore::new(config.storage.key_prefix.clone());
    let mut controller = AppController::new(store, config);

    // A failed init still leaves an empty, usable board.
    if let Err(e) = controller.init() {
        log::error!("Failed to initialize board: {}", e);
    }

    BoardHook {
        state: RwSignal::new(controller),
    }
}

impl BoardHook {
    pub fn with<T>(&self, f: impl FnOnce(&BoardController) -> T) -> T {
        self.state.with(f)
    }

    pub fn with_untracked<T>(&self, f: impl FnOnce(&BoardController) -> T) -> T {
        self.state.with_untracked(f)
    }

    /// Infallible state change, e.g. closing a modal.
    pub fn apply(&self, f: impl FnOnce(&mut BoardController)) {
        self.state.update(f);
    }

    /// Run one controller operation and log its failure. Returns whether it
    /// succeeded so forms know when to clear.
    pub fn run<T>(&self, action: &str, op: impl FnOnce(&mut BoardController) -> Result<T>) -> bool {
        let mut succeeded = false;
        self.state.update(|controller| match op(controller) {
            Ok(_) => succeeded = true,
            Err(e) if e.is_validation() => log::warn!("{}: {}", action, e),
            Err(e) => log::error!("{} failed: {}", action, e),
        });
        succeeded
    }
}
