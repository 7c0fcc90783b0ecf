//! Board State
//!
//! In-memory model of everything the page shows: task rows, the form
//! draft and the feedback banner. Components render from it; the controller
//! mutates it through [`crate::view::TaskView`].

use crate::models::{Task, TaskId};
use crate::optimistic::ToggleState;

/// Placeholder shown when the collection is empty
pub const EMPTY_STATE_MESSAGE: &str = "No tasks yet. Create your first task above!";

/// One rendered task
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRow {
    /// Last state confirmed by the server; `completed` drives the row style
    pub task: Task,
    /// What the checkbox currently shows (may be tentative)
    pub checked: bool,
}

impl TaskRow {
    pub fn new(task: Task) -> Self {
        let checked = task.completed;
        Self { task, checked }
    }

    pub fn id(&self) -> TaskId {
        self.task.id
    }

    /// Whether the row carries the `completed` style
    pub fn is_completed(&self) -> bool {
        self.task.completed
    }

    pub fn apply(&mut self, state: ToggleState) {
        match state {
            ToggleState::Tentative { checked } | ToggleState::Reverted { checked } => {
                self.checked = checked;
            }
            ToggleState::Confirmed { completed } => {
                self.task.completed = completed;
                self.checked = completed;
            }
        }
    }
}

/// Form inputs for a new task
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            BannerKind::Success => "feedback success",
            BannerKind::Error => "feedback error",
        }
    }
}

/// Transient feedback message above the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub id: u64,
    pub kind: BannerKind,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardState {
    pub rows: Vec<TaskRow>,
    pub draft: TaskDraft,
    pub banner: Option<Banner>,
    next_banner_id: u64,
}

impl BoardState {
    /// Replace all rows with the collection, in received order
    pub fn render_tasks(&mut self, tasks: Vec<Task>) {
        self.rows = tasks.into_iter().map(TaskRow::new).collect();
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, id: TaskId) -> Option<&TaskRow> {
        self.rows.iter().find(|row| row.id() == id)
    }

    /// Returns false when the row is no longer on the board
    pub fn apply_toggle(&mut self, id: TaskId, state: ToggleState) -> bool {
        match self.rows.iter_mut().find(|row| row.id() == id) {
            Some(row) => {
                row.apply(state);
                true
            }
            None => false,
        }
    }

    /// Remove a row and return how many remain
    pub fn remove_row(&mut self, id: TaskId) -> usize {
        self.rows.retain(|row| row.id() != id);
        self.rows.len()
    }

    pub fn clear_draft(&mut self) {
        self.draft = TaskDraft::default();
    }

    /// Show a banner, replacing any previous one. Returns its id for dismissal.
    pub fn show_banner(&mut self, kind: BannerKind, message: impl Into<String>) -> u64 {
        self.next_banner_id += 1;
        let id = self.next_banner_id;
        self.banner = Some(Banner {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Dismiss the banner only if it is still the one with `id`
    pub fn dismiss_banner(&mut self, id: u64) {
        if self.banner.as_ref().is_some_and(|b| b.id == id) {
            self.banner = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: TaskId, title: &str, completed: bool) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: None,
            completed,
        }
    }

    #[test]
    fn test_render_keeps_received_order() {
        let mut board = BoardState::default();
        board.render_tasks(vec![task(3, "c", false), task(1, "a", true)]);

        let ids: Vec<_> = board.rows.iter().map(TaskRow::id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert!(board.rows[1].checked);
        assert!(board.rows[1].is_completed());
    }

    #[test]
    fn test_tentative_then_confirm() {
        let mut row = TaskRow::new(task(1, "a", false));

        row.apply(ToggleState::Tentative { checked: true });
        assert!(row.checked);
        assert!(!row.is_completed());

        row.apply(ToggleState::Confirmed { completed: true });
        assert!(row.checked);
        assert!(row.is_completed());
    }

    #[test]
    fn test_revert_leaves_style_untouched() {
        let mut row = TaskRow::new(task(1, "a", true));
        row.apply(ToggleState::Tentative { checked: false });
        row.apply(ToggleState::Reverted { checked: true });

        assert_eq!(row, TaskRow::new(task(1, "a", true)));
    }

    #[test]
    fn test_remove_row_reports_remaining() {
        let mut board = BoardState::default();
        board.render_tasks(vec![task(1, "a", false), task(2, "b", false)]);

        assert_eq!(board.remove_row(1), 1);
        assert_eq!(board.remove_row(2), 0);
        assert!(board.is_empty());
    }

    #[test]
    fn test_apply_toggle_on_missing_row() {
        let mut board = BoardState::default();
        assert!(!board.apply_toggle(9, ToggleState::Tentative { checked: true }));
    }

    #[test]
    fn test_new_banner_replaces_old_and_stale_dismiss_is_ignored() {
        let mut board = BoardState::default();
        let first = board.show_banner(BannerKind::Success, "Task created successfully!");
        let second = board.show_banner(BannerKind::Error, "Failed to load tasks. Please refresh the page.");

        board.dismiss_banner(first);
        assert_eq!(board.banner.as_ref().map(|b| b.id), Some(second));

        board.dismiss_banner(second);
        assert!(board.banner.is_none());
    }
}
