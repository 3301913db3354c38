pub mod app_controller;
pub mod board_selector;
pub mod modal_controller;
pub mod task_operations;
pub mod view_renderer;

pub use app_controller::AppController;
pub use board_selector::{board_links, derive_boards, resolve_active_board, BoardLink};
pub use modal_controller::{BoardForm, EditBinding, ModalController, ModalKind, TaskForm, Visibility};
pub use view_renderer::{BoardView, ColumnView, TaskItem};
