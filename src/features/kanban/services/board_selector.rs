use crate::core::models::Task;

/// One board-switch control in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardLink {
    pub name: String,
    pub active: bool,
}

/// Distinct non-empty board names in first-seen order.
pub fn derive_boards(tasks: &[Task]) -> Vec<String> {
    let mut boards: Vec<String> = Vec::new();
    for task in tasks {
        if !task.board.is_empty() && !boards.iter().any(|b| *b == task.board) {
            boards.push(task.board.clone());
        }
    }
    boards
}

/// Keep the persisted board while it still has tasks, otherwise fall back
/// to the first board.
pub fn resolve_active_board(persisted: Option<&str>, boards: &[String]) -> Option<String> {
    match persisted {
        Some(name) if boards.iter().any(|b| b == name) => Some(name.to_string()),
        _ => boards.first().cloned(),
    }
}

pub fn board_links(boards: &[String], active: Option<&str>) -> Vec<BoardLink> {
    boards
        .iter()
        .map(|name| BoardLink {
            name: name.clone(),
            active: Some(name.as_str()) == active,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{TaskDraft, TaskStatus};

    fn on_board(id: &str, board: &str) -> Task {
        TaskDraft {
            title: format!("task {}", id),
            description: String::new(),
            status: TaskStatus::Todo,
            board: board.to_string(),
        }
        .into_task(id.to_string())
    }

    #[test]
    fn boards_in_first_seen_order_without_duplicates() {
        let tasks = vec![on_board("1", "A"), on_board("2", "B"), on_board("3", "A")];
        assert_eq!(derive_boards(&tasks), vec!["A", "B"]);
    }

    #[test]
    fn empty_board_names_are_excluded() {
        let tasks = vec![on_board("1", ""), on_board("2", "B")];
        assert_eq!(derive_boards(&tasks), vec!["B"]);
        assert!(derive_boards(&[]).is_empty());
    }

    #[test]
    fn persisted_board_is_restored_only_if_it_still_exists() {
        let boards = vec!["A".to_string(), "B".to_string()];
        assert_eq!(resolve_active_board(Some("B"), &boards).as_deref(), Some("B"));
        assert_eq!(resolve_active_board(Some("Gone"), &boards).as_deref(), Some("A"));
        assert_eq!(resolve_active_board(None, &boards).as_deref(), Some("A"));
        assert_eq!(resolve_active_board(Some("A"), &[]), None);
    }

    #[test]
    fn exactly_one_link_is_active_by_exact_match() {
        let boards = vec!["Roadmap".to_string(), "roadmap".to_string()];
        let links = board_links(&boards, Some("roadmap"));
        assert_eq!(
            links.iter().filter(|l| l.active).map(|l| l.name.as_str()).collect::<Vec<_>>(),
            vec!["roadmap"]
        );
    }
}
