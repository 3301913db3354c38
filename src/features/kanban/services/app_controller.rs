use super::board_selector::{board_links, derive_boards, resolve_active_board, BoardLink};
use super::modal_controller::{ModalController, ModalKind};
use super::view_renderer::BoardView;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::models::{Preferences, Task, Theme};
use crate::core::services::{seed_if_empty, KeyValueStore, PreferenceStore, TaskRepository};

/// All state behind the board page: the repository, the derived boards,
/// the rendered columns and the modals. Every UI event maps to one method.
#[derive(Debug, Clone)]
pub struct AppController<S> {
    pub(super) config: Config,
    pub(super) repo: TaskRepository<S>,
    prefs: PreferenceStore<S>,
    preferences: Preferences,
    boards: Vec<String>,
    active_board: Option<String>,
    pub(super) view: BoardView,
    pub(super) modals: ModalController,
    initialized: bool,
}

impl<S: KeyValueStore + Clone> AppController<S> {
    pub fn new(store: S, config: Config) -> Self {
        let view = BoardView::empty(&config.board.columns);
        Self {
            repo: TaskRepository::new(store.clone()),
            prefs: PreferenceStore::new(store),
            config,
            preferences: Preferences::default(),
            boards: Vec::new(),
            active_board: None,
            view,
            modals: ModalController::new(),
            initialized: false,
        }
    }

    /// Seed on first run, restore preferences, render. Runs once.
    pub fn init(&mut self) -> Result<()> {
        if self.initialized {
            log::debug!("Board already initialized");
            return Ok(());
        }

        if self.config.board.seed_on_first_run {
            seed_if_empty(&self.repo, &self.prefs)?;
        }
        self.preferences = self.prefs.load()?;
        // Writes the flag back so the key always exists after a start.
        self.prefs.save_show_sidebar(self.preferences.show_sidebar)?;
        self.refresh()?;
        self.initialized = true;
        log::info!(
            "Board initialized with {} boards, active: {:?}",
            self.boards.len(),
            self.active_board
        );
        Ok(())
    }

    /// Re-derive boards and the active board, then re-render its columns.
    pub fn refresh(&mut self) -> Result<()> {
        let tasks = self.repo.get_all()?;
        self.boards = derive_boards(&tasks);

        let persisted = self
            .active_board
            .as_deref()
            .or(self.preferences.active_board.as_deref());
        self.active_board = resolve_active_board(persisted, &self.boards);

        self.render(&tasks);
        Ok(())
    }

    /// Re-render the active board without re-deriving boards.
    pub fn refresh_tasks(&mut self) -> Result<()> {
        let tasks = self.repo.get_all()?;
        self.render(&tasks);
        Ok(())
    }

    fn render(&mut self, tasks: &[Task]) {
        self.view = match &self.active_board {
            Some(board) => BoardView::render(board, tasks, &self.config.board.columns),
            None => BoardView::empty(&self.config.board.columns),
        };
    }

    pub fn select_board(&mut self, name: &str) -> Result<()> {
        if !self.boards.iter().any(|b| b == name) {
            log::warn!("Ignoring selection of unknown board {:?}", name);
            return Ok(());
        }

        self.active_board = Some(name.to_string());
        self.preferences.active_board = Some(name.to_string());
        self.prefs.save_active_board(name)?;
        self.refresh_tasks()
    }

    pub fn toggle_sidebar(&mut self, show: bool) -> Result<()> {
        self.preferences.show_sidebar = show;
        self.prefs.save_show_sidebar(show)
    }

    /// Mobile dropdown: flips whatever is stored.
    pub fn toggle_sidebar_dropdown(&mut self) -> Result<()> {
        self.toggle_sidebar(!self.preferences.show_sidebar)
    }

    pub fn toggle_theme(&mut self) -> Result<Theme> {
        let theme = self.preferences.theme.toggled();
        self.preferences.theme = theme;
        self.prefs.save_theme(theme)?;
        Ok(theme)
    }

    pub fn open_create_task(&mut self) {
        self.modals.open(ModalKind::CreateTask);
    }

    /// The sidebar gets out of the way of the board form.
    pub fn open_create_board(&mut self) -> Result<()> {
        self.modals.open(ModalKind::CreateBoard);
        self.toggle_sidebar(false)
    }

    pub fn close_modal(&mut self, kind: ModalKind) {
        self.modals.close(kind);
    }

    pub fn dismiss_overlay(&mut self) {
        self.modals.dismiss_overlay();
    }

    pub fn tasks(&self) -> Result<Vec<Task>> {
        self.repo.get_all()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn boards(&self) -> &[String] {
        &self.boards
    }

    pub fn board_links(&self) -> Vec<BoardLink> {
        board_links(&self.boards, self.active_board.as_deref())
    }

    pub fn active_board(&self) -> Option<&str> {
        self.active_board.as_deref()
    }

    pub fn view(&self) -> &BoardView {
        &self.view
    }

    pub fn modals(&self) -> &ModalController {
        &self.modals
    }

    pub fn modals_mut(&mut self) -> &mut ModalController {
        &mut self.modals
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{TaskDraft, TaskStatus};
    use crate::core::services::{
        MemoryStore, ACTIVE_BOARD_KEY, LIGHT_THEME_KEY, SHOW_SIDEBAR_KEY, TASKS_KEY,
    };

    fn store_with(boards: &[&str]) -> MemoryStore {
        let store = MemoryStore::new();
        let repo = TaskRepository::new(store.clone());
        for board in boards {
            repo.create(TaskDraft {
                title: format!("{} task", board),
                description: String::new(),
                status: TaskStatus::Todo,
                board: board.to_string(),
            })
            .unwrap();
        }
        store
    }

    #[test]
    fn first_board_is_active_without_a_stored_choice() {
        let mut app = AppController::new(store_with(&["A", "B"]), Config::default());
        app.init().unwrap();
        assert_eq!(app.active_board(), Some("A"));
        assert_eq!(app.view().board.as_deref(), Some("A"));
    }

    #[test]
    fn stored_choice_is_restored() {
        let store = store_with(&["A", "B"]);
        PreferenceStore::new(store.clone()).save_active_board("B").unwrap();

        let mut app = AppController::new(store, Config::default());
        app.init().unwrap();
        assert_eq!(app.active_board(), Some("B"));
    }

    #[test]
    fn selecting_persists_and_marks_one_link() {
        let store = store_with(&["A", "B"]);
        let mut app = AppController::new(store.clone(), Config::default());
        app.init().unwrap();

        app.select_board("B").unwrap();
        assert_eq!(app.view().board.as_deref(), Some("B"));
        assert_eq!(store.get(ACTIVE_BOARD_KEY).unwrap().as_deref(), Some("\"B\""));

        let active: Vec<String> = app
            .board_links()
            .into_iter()
            .filter(|l| l.active)
            .map(|l| l.name)
            .collect();
        assert_eq!(active, vec!["B".to_string()]);
    }

    #[test]
    fn unknown_board_selection_is_ignored() {
        let mut app = AppController::new(store_with(&["A"]), Config::default());
        app.init().unwrap();
        app.select_board("Nope").unwrap();
        assert_eq!(app.active_board(), Some("A"));
    }

    #[test]
    fn no_boards_means_no_active_board_and_bare_columns() {
        let store = MemoryStore::new();
        store.set(TASKS_KEY, "[]").unwrap();

        let mut app = AppController::new(store, Config::default());
        app.init().unwrap();
        assert!(app.boards().is_empty());
        assert_eq!(app.active_board(), None);
        assert_eq!(app.view(), &BoardView::empty(&TaskStatus::all()));
    }

    #[test]
    fn init_writes_the_sidebar_flag_when_it_is_missing() {
        let store = store_with(&["A"]);
        assert_eq!(store.get(SHOW_SIDEBAR_KEY).unwrap(), None);

        let mut app = AppController::new(store.clone(), Config::default());
        app.init().unwrap();
        assert!(!app.preferences().show_sidebar);
        assert_eq!(store.get(SHOW_SIDEBAR_KEY).unwrap().as_deref(), Some("false"));
    }

    #[test]
    fn blank_task_list_recovers_on_init() {
        let store = MemoryStore::new();
        store.set(TASKS_KEY, "").unwrap();

        let mut app = AppController::new(store.clone(), Config::default());
        app.init().unwrap();
        assert!(!app.boards().is_empty());
        assert_eq!(store.get(SHOW_SIDEBAR_KEY).unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn second_init_does_not_reseed() {
        let store = MemoryStore::new();
        let mut app = AppController::new(store.clone(), Config::default());
        app.init().unwrap();

        store.set(TASKS_KEY, "[]").unwrap();
        app.init().unwrap();
        assert_eq!(store.get(TASKS_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn seeding_can_be_disabled() {
        let store = MemoryStore::new();
        let mut config = Config::default();
        config.board.seed_on_first_run = false;

        let mut app = AppController::new(store.clone(), config);
        app.init().unwrap();
        assert_eq!(store.get(TASKS_KEY).unwrap(), None);
        assert!(app.boards().is_empty());
    }

    #[test]
    fn theme_and_sidebar_toggles_persist() {
        let store = store_with(&["A"]);
        let mut app = AppController::new(store.clone(), Config::default());
        app.init().unwrap();

        assert_eq!(app.toggle_theme().unwrap(), Theme::Light);
        assert_eq!(store.get(LIGHT_THEME_KEY).unwrap().as_deref(), Some("enabled"));

        app.toggle_sidebar(true).unwrap();
        app.toggle_sidebar_dropdown().unwrap();
        assert!(!app.preferences().show_sidebar);

        app.open_create_board().unwrap();
        assert!(app.modals().is_visible(ModalKind::CreateBoard));
        assert!(!app.preferences().show_sidebar);
    }
}
