use super::app_controller::AppController;
use super::modal_controller::ModalKind;
use crate::core::error::{KanbanError, Result};
use crate::core::models::{Task, TaskDraft, TaskStatus};
use crate::core::services::KeyValueStore;

// Task lifecycle driven by the three modals.
impl<S: KeyValueStore + Clone> AppController<S> {
    /// Submit the create-task form onto the active board.
    pub fn create_task(&mut self) -> Result<Task> {
        let result = self.try_create_task();
        self.report(ModalKind::CreateTask, result)
    }

    fn try_create_task(&mut self) -> Result<Task> {
        let board = self.active_board().ok_or(KanbanError::NoActiveBoard)?.to_string();
        let draft = self.modals.create_form.to_draft(&board);
        let task = self.repo.create(draft)?;

        // Show the card right away; the refresh below reconciles with storage.
        if let Err(e) = self.view.add_task(&task) {
            log::warn!("Card for task {} not inserted: {}", task.id, e);
        }

        self.modals.close(ModalKind::CreateTask);
        self.modals.create_form.reset();
        self.refresh_tasks()?;
        Ok(task)
    }

    /// Submit the board form. The board comes into being through its first task.
    pub fn create_board(&mut self) -> Result<Task> {
        let result = self.try_create_board();
        self.report(ModalKind::CreateBoard, result)
    }

    fn try_create_board(&mut self) -> Result<Task> {
        let name = self.modals.board_form.name.trim().to_string();
        if name.is_empty() {
            return Err(KanbanError::MissingField { field: "board name" });
        }

        let task = self.repo.create(TaskDraft {
            title: self.config.default_task_title(&name),
            description: String::new(),
            status: TaskStatus::Todo,
            board: name,
        })?;

        self.modals.close(ModalKind::CreateBoard);
        self.modals.board_form = Default::default();
        self.refresh()?;
        Ok(task)
    }

    /// Point the edit modal at `task_id`. Unknown ids are ignored.
    pub fn open_edit_task(&mut self, task_id: &str) -> Result<()> {
        let tasks = self.repo.get_all()?;
        match tasks.iter().find(|t| t.id == task_id) {
            Some(task) => self.modals.bind_edit(task),
            None => log::warn!("Task {} not found, edit modal not opened", task_id),
        }
        Ok(())
    }

    /// Save the edit form onto the currently bound task.
    pub fn save_task_changes(&mut self) -> Result<()> {
        let result = self.try_save_task_changes();
        self.report(ModalKind::EditTask, result)
    }

    fn try_save_task_changes(&mut self) -> Result<()> {
        let Some(task_id) = self.modals.bound_task_id().map(str::to_string) else {
            log::warn!("Save requested with no task bound to the edit modal");
            return Ok(());
        };
        if self.modals.edit_form.title.trim().is_empty() {
            return Err(KanbanError::MissingField { field: "title" });
        }

        self.repo.patch(&task_id, self.modals.edit_form.to_patch())?;
        self.modals.close(ModalKind::EditTask);
        self.refresh_tasks()
    }

    /// Delete the currently bound task. Its board may disappear with it.
    pub fn delete_task(&mut self) -> Result<()> {
        let Some(task_id) = self.modals.bound_task_id().map(str::to_string) else {
            log::warn!("Delete requested with no task bound to the edit modal");
            return Ok(());
        };

        self.repo.delete(&task_id)?;
        self.refresh()?;
        self.modals.close(ModalKind::EditTask);
        Ok(())
    }

    /// Keep validation failures on the open modal for display.
    fn report<T>(&mut self, kind: ModalKind, result: Result<T>) -> Result<T> {
        if let Err(e) = &result {
            if self.modals.is_visible(kind) {
                self.modals.set_error(e.to_string());
            }
        }
        result
    }
}
