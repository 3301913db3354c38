use crate::core::error::{KanbanError, Result};
use crate::core::models::{Task, TaskStatus};

/// A rendered task card. Holds the task id, not the task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    pub task_id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnView {
    pub status: TaskStatus,
    pub heading: String,
    pub items: Vec<TaskItem>,
}

impl ColumnView {
    fn new(status: TaskStatus) -> Self {
        Self {
            status,
            heading: status.heading(),
            items: Vec::new(),
        }
    }
}

/// Columns of one board, rebuilt from the task list on every refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardView {
    pub board: Option<String>,
    pub columns: Vec<ColumnView>,
}

impl BoardView {
    /// Headers only.
    pub fn empty(columns: &[TaskStatus]) -> Self {
        Self {
            board: None,
            columns: columns.iter().copied().map(ColumnView::new).collect(),
        }
    }

    pub fn render(board: &str, tasks: &[Task], columns: &[TaskStatus]) -> Self {
        let on_board: Vec<&Task> = tasks.iter().filter(|t| t.board == board).collect();

        let columns = columns
            .iter()
            .map(|&status| {
                let mut column = ColumnView::new(status);
                column.items = on_board
                    .iter()
                    .filter(|t| t.status == status)
                    .map(|t| TaskItem {
                        task_id: t.id.clone(),
                        title: t.title.clone(),
                    })
                    .collect();
                column
            })
            .collect();

        Self {
            board: Some(board.to_string()),
            columns,
        }
    }

    pub fn column(&self, status: TaskStatus) -> Option<&ColumnView> {
        self.columns.iter().find(|c| c.status == status)
    }

    /// Append one card without rebuilding. Fails when the task's status has
    /// no rendered column.
    pub fn add_task(&mut self, task: &Task) -> Result<()> {
        let Some(column) = self.columns.iter_mut().find(|c| c.status == task.status) else {
            log::error!("Column not found for status: {}", task.status);
            return Err(KanbanError::MissingColumn(task.status));
        };
        column.items.push(TaskItem {
            task_id: task.id.clone(),
            title: task.title.clone(),
        });
        Ok(())
    }

    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|c| c.items.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::TaskDraft;

    fn task(id: &str, board: &str, status: TaskStatus) -> Task {
        TaskDraft {
            title: format!("task {}", id),
            description: String::new(),
            status,
            board: board.to_string(),
        }
        .into_task(id.to_string())
    }

    fn ids(column: &ColumnView) -> Vec<&str> {
        column.items.iter().map(|i| i.task_id.as_str()).collect()
    }

    #[test]
    fn only_the_requested_board_is_rendered() {
        let tasks = vec![
            task("1", "A", TaskStatus::Todo),
            task("2", "B", TaskStatus::Todo),
            task("3", "A", TaskStatus::Done),
        ];
        let view = BoardView::render("A", &tasks, &TaskStatus::all());

        assert_eq!(ids(view.column(TaskStatus::Todo).unwrap()), vec!["1"]);
        assert!(view.column(TaskStatus::Doing).unwrap().items.is_empty());
        assert_eq!(ids(view.column(TaskStatus::Done).unwrap()), vec!["3"]);
        assert_eq!(view.task_count(), 2);
    }

    #[test]
    fn storage_order_is_kept_within_a_column() {
        let tasks = vec![
            task("9", "A", TaskStatus::Doing),
            task("2", "A", TaskStatus::Doing),
            task("5", "A", TaskStatus::Doing),
        ];
        let view = BoardView::render("A", &tasks, &TaskStatus::all());
        assert_eq!(ids(view.column(TaskStatus::Doing).unwrap()), vec!["9", "2", "5"]);
    }

    #[test]
    fn rendering_twice_gives_the_same_view() {
        let tasks = vec![task("1", "A", TaskStatus::Todo), task("2", "A", TaskStatus::Done)];
        let columns = TaskStatus::all();
        assert_eq!(
            BoardView::render("A", &tasks, &columns),
            BoardView::render("A", &tasks, &columns)
        );
    }

    #[test]
    fn empty_list_keeps_headers() {
        let view = BoardView::render("A", &[], &TaskStatus::all());
        let headings: Vec<&str> = view.columns.iter().map(|c| c.heading.as_str()).collect();
        assert_eq!(headings, vec!["TODO", "DOING", "DONE"]);
        assert_eq!(view.task_count(), 0);
    }

    #[test]
    fn add_task_appends_to_matching_column() {
        let mut view = BoardView::render("A", &[task("1", "A", TaskStatus::Todo)], &TaskStatus::all());
        view.add_task(&task("2", "A", TaskStatus::Todo)).unwrap();
        assert_eq!(ids(view.column(TaskStatus::Todo).unwrap()), vec!["1", "2"]);
    }

    #[test]
    fn add_task_without_column_reports_and_leaves_view_alone() {
        let columns = [TaskStatus::Todo, TaskStatus::Doing];
        let mut view = BoardView::render("A", &[], &columns);
        let before = view.clone();

        let err = view.add_task(&task("1", "A", TaskStatus::Done)).unwrap_err();
        assert!(matches!(err, KanbanError::MissingColumn(TaskStatus::Done)));
        assert_eq!(view, before);
    }
}
