//! Task List Controller
//!
//! Keeps the board in step with the remote collection. Every user action
//! maps to one request; failures are logged, surfaced as a banner and never
//! retried.

use crate::api::TaskApi;
use crate::models::{NewTask, TaskId, TaskPatch};
use crate::optimistic::PendingToggle;
use crate::store::BannerKind;
use crate::view::TaskView;

pub const MSG_LOAD_FAILED: &str = "Failed to load tasks. Please refresh the page.";
pub const MSG_TITLE_REQUIRED: &str = "Title is required";
pub const MSG_CREATED: &str = "Task created successfully!";
pub const MSG_CREATE_FAILED: &str = "Failed to create task";
pub const MSG_UPDATE_FAILED: &str = "Failed to update task";
pub const MSG_DELETED: &str = "Task deleted successfully!";
pub const MSG_DELETE_FAILED: &str = "Failed to delete task";
pub const MSG_CONFIRM_DELETE: &str = "Are you sure you want to delete this task?";

#[derive(Clone)]
pub struct TaskListController<A, V> {
    api: A,
    view: V,
}

impl<A: TaskApi, V: TaskView> TaskListController<A, V> {
    pub fn new(api: A, view: V) -> Self {
        Self { api, view }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Fetch the whole collection and render it
    pub async fn load(&self) {
        match self.api.list_tasks().await {
            Ok(tasks) => {
                log::debug!("Loaded {} tasks", tasks.len());
                self.view.render_tasks(tasks);
            }
            Err(e) => {
                log::error!("Error loading tasks: {}", e);
                self.view.show_banner(BannerKind::Error, MSG_LOAD_FAILED.to_string());
            }
        }
    }

    /// Create a task from the form draft
    pub async fn submit(&self) {
        let draft = self.view.draft();
        let title = draft.title.trim();
        if title.is_empty() {
            self.view.show_banner(BannerKind::Error, MSG_TITLE_REQUIRED.to_string());
            return;
        }

        let new_task = NewTask {
            title: title.to_string(),
            description: draft.description.trim().to_string(),
        };

        match self.api.create_task(&new_task).await {
            Ok(()) => {
                log::debug!("Created task {:?}", new_task.title);
                self.view.clear_draft();
                self.view.show_banner(BannerKind::Success, MSG_CREATED.to_string());
                self.load().await;
            }
            Err(e) => {
                log::error!("Error creating task: {}", e);
                self.view.show_banner(BannerKind::Error, e.user_message(MSG_CREATE_FAILED));
            }
        }
    }

    /// Checkbox changed to `checked`
    pub async fn toggle(&self, id: TaskId, checked: bool) {
        let previous = match self.view.row(id) {
            Some(row) => row.checked,
            None => {
                log::warn!("Toggle for task {} which is not on the board", id);
                return;
            }
        };

        let pending = PendingToggle::begin(id, previous, checked);
        self.view.apply_toggle(pending.id(), pending.tentative());

        match self.api.update_task(pending.id(), &TaskPatch::completed(pending.requested())).await {
            Ok(()) => {
                log::debug!("Task {} completed={}", id, checked);
                self.view.apply_toggle(pending.id(), pending.confirm());
            }
            Err(e) => {
                log::error!("Error updating task {}: {}", id, e);
                self.view.show_banner(BannerKind::Error, MSG_UPDATE_FAILED.to_string());
                self.view.apply_toggle(pending.id(), pending.revert());
            }
        }
    }

    /// Delete after the user confirms
    pub async fn delete(&self, id: TaskId) {
        if !self.view.confirm(MSG_CONFIRM_DELETE) {
            return;
        }

        match self.api.delete_task(id).await {
            Ok(()) => {
                let remaining = self.view.remove_row(id);
                log::debug!("Deleted task {}, {} remaining", id, remaining);
                self.view.show_banner(BannerKind::Success, MSG_DELETED.to_string());
            }
            Err(e) => {
                log::error!("Error deleting task {}: {}", id, e);
                self.view.show_banner(BannerKind::Error, MSG_DELETE_FAILED.to_string());
            }
        }
    }
}
