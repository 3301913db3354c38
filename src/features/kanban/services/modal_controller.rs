use crate::core::models::{Task, TaskDraft, TaskPatch, TaskStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalKind {
    CreateTask,
    EditTask,
    CreateBoard,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

/// Title, description and status fields shared by the create and edit forms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
}

impl TaskForm {
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_draft(&self, board: &str) -> TaskDraft {
        TaskDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            status: self.status,
            board: board.to_string(),
        }
    }

    pub fn to_patch(&self) -> TaskPatch {
        TaskPatch {
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            status: Some(self.status),
            board: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardForm {
    pub name: String,
}

/// The task the edit modal's save and delete buttons act on. There is one
/// slot; binding a new task overwrites it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBinding {
    pub task_id: String,
    /// Bumped on every bind so reopening the same task still reloads the form.
    pub generation: u64,
}

#[derive(Debug, Clone, Default)]
pub struct ModalController {
    create_task: Visibility,
    edit_task: Visibility,
    create_board: Visibility,
    overlay: bool,
    pub create_form: TaskForm,
    pub edit_form: TaskForm,
    pub board_form: BoardForm,
    edit_binding: Option<EditBinding>,
    generation: u64,
    error: Option<String>,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&mut self, kind: ModalKind) -> &mut Visibility {
        match kind {
            ModalKind::CreateTask => &mut self.create_task,
            ModalKind::EditTask => &mut self.edit_task,
            ModalKind::CreateBoard => &mut self.create_board,
        }
    }

    pub fn open(&mut self, kind: ModalKind) {
        *self.slot(kind) = Visibility::Visible;
        self.error = None;
        if kind == ModalKind::CreateTask {
            self.overlay = true;
        }
    }

    /// Hides the modal and the overlay. Closing the edit modal also empties
    /// the binding slot.
    pub fn close(&mut self, kind: ModalKind) {
        *self.slot(kind) = Visibility::Hidden;
        self.overlay = false;
        self.error = None;
        if kind == ModalKind::EditTask {
            self.edit_binding = None;
        }
    }

    /// Overlay click closes the create-task modal.
    pub fn dismiss_overlay(&mut self) {
        self.close(ModalKind::CreateTask);
    }

    pub fn visibility(&self, kind: ModalKind) -> Visibility {
        match kind {
            ModalKind::CreateTask => self.create_task,
            ModalKind::EditTask => self.edit_task,
            ModalKind::CreateBoard => self.create_board,
        }
    }

    pub fn is_visible(&self, kind: ModalKind) -> bool {
        self.visibility(kind) == Visibility::Visible
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay
    }

    /// Load `task` into the edit form, point the slot at it and open.
    pub fn bind_edit(&mut self, task: &Task) {
        self.generation += 1;
        self.edit_form = TaskForm::from_task(task);
        self.edit_binding = Some(EditBinding {
            task_id: task.id.clone(),
            generation: self.generation,
        });
        self.open(ModalKind::EditTask);
    }

    pub fn edit_binding(&self) -> Option<&EditBinding> {
        self.edit_binding.as_ref()
    }

    pub fn bound_task_id(&self) -> Option<&str> {
        self.edit_binding.as_ref().map(|b| b.task_id.as_str())
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, title: &str) -> Task {
        TaskDraft {
            title: title.to_string(),
            description: format!("about {}", title),
            status: TaskStatus::Doing,
            board: "A".to_string(),
        }
        .into_task(id.to_string())
    }

    #[test]
    fn open_and_close_toggle_visibility() {
        let mut modals = ModalController::new();
        assert!(!modals.is_visible(ModalKind::CreateBoard));

        modals.open(ModalKind::CreateBoard);
        assert!(modals.is_visible(ModalKind::CreateBoard));
        assert!(!modals.overlay_visible());

        modals.close(ModalKind::CreateBoard);
        assert_eq!(modals.visibility(ModalKind::CreateBoard), Visibility::Hidden);
    }

    #[test]
    fn create_task_modal_brings_the_overlay() {
        let mut modals = ModalController::new();
        modals.open(ModalKind::CreateTask);
        assert!(modals.overlay_visible());

        modals.dismiss_overlay();
        assert!(!modals.overlay_visible());
        assert!(!modals.is_visible(ModalKind::CreateTask));
    }

    #[test]
    fn binding_replaces_the_previous_target() {
        let mut modals = ModalController::new();
        modals.bind_edit(&task("1", "First"));
        let first_generation = modals.edit_binding().unwrap().generation;

        modals.bind_edit(&task("2", "Second"));
        assert_eq!(modals.bound_task_id(), Some("2"));
        assert_eq!(modals.edit_form.title, "Second");
        assert_eq!(modals.edit_form.status, TaskStatus::Doing);
        assert!(modals.edit_binding().unwrap().generation > first_generation);

        modals.close(ModalKind::EditTask);
        assert_eq!(modals.bound_task_id(), None);
    }

    #[test]
    fn errors_clear_on_close() {
        let mut modals = ModalController::new();
        modals.open(ModalKind::CreateTask);
        modals.set_error("title is required");
        assert_eq!(modals.error(), Some("title is required"));

        modals.close(ModalKind::CreateTask);
        assert_eq!(modals.error(), None);
    }

    #[test]
    fn form_conversions() {
        let mut form = TaskForm {
            title: "Write".into(),
            description: "copy".into(),
            status: TaskStatus::Done,
        };
        let draft = form.to_draft("Launch");
        assert_eq!(draft.board, "Launch");
        assert_eq!(draft.status, TaskStatus::Done);
        assert_eq!(form.to_patch().board, None);

        form.reset();
        assert_eq!(form, TaskForm::default());
    }
}
