//! Page Access
//!
//! What the controller is allowed to do to the page. The Leptos-backed
//! [`SignalView`] writes into a reactive [`BoardState`]; tests use a plain
//! in-memory board instead.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::{Task, TaskId};
use crate::optimistic::ToggleState;
use crate::store::{BannerKind, BoardState, TaskDraft, TaskRow};

pub trait TaskView {
    fn render_tasks(&self, tasks: Vec<Task>);

    fn row(&self, id: TaskId) -> Option<TaskRow>;

    /// Returns false when the row is gone
    fn apply_toggle(&self, id: TaskId, state: ToggleState) -> bool;

    /// Remove a row and return how many remain
    fn remove_row(&self, id: TaskId) -> usize;

    fn draft(&self) -> TaskDraft;

    fn clear_draft(&self);

    /// Ask the user to confirm a destructive action
    fn confirm(&self, message: &str) -> bool;

    /// Show a transient banner, replacing any previous one
    fn show_banner(&self, kind: BannerKind, message: String);
}

/// View over a reactive board signal, dismissing banners on a timer
#[derive(Clone, Copy)]
pub struct SignalView {
    board: RwSignal<BoardState>,
    banner_timeout_ms: u32,
}

impl SignalView {
    pub fn new(board: RwSignal<BoardState>, banner_timeout_ms: u32) -> Self {
        Self { board, banner_timeout_ms }
    }

    pub fn board(&self) -> RwSignal<BoardState> {
        self.board
    }
}

impl TaskView for SignalView {
    fn render_tasks(&self, tasks: Vec<Task>) {
        self.board.update(|b| b.render_tasks(tasks));
    }

    fn row(&self, id: TaskId) -> Option<TaskRow> {
        self.board.with_untracked(|b| b.row(id).cloned())
    }

    fn apply_toggle(&self, id: TaskId, state: ToggleState) -> bool {
        self.board
            .try_update(|b| b.apply_toggle(id, state))
            .unwrap_or(false)
    }

    fn remove_row(&self, id: TaskId) -> usize {
        self.board.try_update(|b| b.remove_row(id)).unwrap_or(0)
    }

    fn draft(&self) -> TaskDraft {
        self.board.with_untracked(|b| b.draft.clone())
    }

    fn clear_draft(&self) {
        self.board.update(|b| b.clear_draft());
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn show_banner(&self, kind: BannerKind, message: String) {
        let Some(id) = self.board.try_update(|b| b.show_banner(kind, message)) else {
            return;
        };
        let board = self.board;
        let timeout = self.banner_timeout_ms;
        spawn_local(async move {
            TimeoutFuture::new(timeout).await;
            board.try_update(|b| b.dismiss_banner(id));
        });
    }
}
