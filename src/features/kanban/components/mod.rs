pub mod board_modal;
pub mod column;
pub mod edit_task_modal;
pub mod header;
pub mod sidebar;
pub mod status_select;
pub mod task_card;
pub mod task_modal;

pub use board_modal::BoardModal;
pub use column::KanbanColumn;
pub use edit_task_modal::EditTaskModal;
pub use header::KanbanHeader;
pub use sidebar::BoardSidebar;
pub use status_select::StatusSelect;
pub use task_card::TaskCard;
pub use task_modal::TaskModal;
