use super::storage::{KeyValueStore, ACTIVE_BOARD_KEY, LIGHT_THEME_KEY, SHOW_SIDEBAR_KEY};
use crate::core::error::Result;
use crate::core::models::{Preferences, Theme};

/// Typed access to the UI flags kept next to the task list.
#[derive(Debug, Clone)]
pub struct PreferenceStore<S> {
    store: S,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn load(&self) -> Result<Preferences> {
        let active_board = match self.store.get(ACTIVE_BOARD_KEY)? {
            Some(raw) => match serde_json::from_str::<Option<String>>(&raw) {
                Ok(board) => board.filter(|b| !b.is_empty()),
                Err(e) => {
                    log::warn!("Ignoring unreadable active board {:?}: {}", raw, e);
                    None
                }
            },
            None => None,
        };

        let show_sidebar = self.store.get(SHOW_SIDEBAR_KEY)?.as_deref() == Some("true");
        let theme = Theme::from_stored(self.store.get(LIGHT_THEME_KEY)?.as_deref());

        Ok(Preferences {
            active_board,
            show_sidebar,
            theme,
        })
    }

    /// Stored JSON-encoded, so `"Launch"` keeps its quotes.
    pub fn save_active_board(&self, board: &str) -> Result<()> {
        self.store
            .set(ACTIVE_BOARD_KEY, &serde_json::to_string(board)?)
    }

    pub fn save_show_sidebar(&self, show: bool) -> Result<()> {
        self.store
            .set(SHOW_SIDEBAR_KEY, if show { "true" } else { "false" })
    }

    pub fn save_theme(&self, theme: Theme) -> Result<()> {
        self.store.set(LIGHT_THEME_KEY, theme.as_stored())
    }
}
