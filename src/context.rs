//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::FetchTaskApi;
use crate::controller::TaskListController;
use crate::models::TaskId;
use crate::store::BoardState;
use crate::view::SignalView;

pub type AppController = TaskListController<FetchTaskApi, SignalView>;

/// App-wide controller and board, provided via context
#[derive(Clone)]
pub struct AppContext {
    controller: AppController,
    /// Everything the page renders from
    pub board: RwSignal<BoardState>,
}

impl AppContext {
    pub fn new(controller: AppController) -> Self {
        let board = controller.view().board();
        Self { controller, board }
    }

    /// Reload the whole collection
    pub fn load(&self) {
        let controller = self.controller.clone();
        spawn_local(async move { controller.load().await });
    }

    /// Submit the form draft
    pub fn submit(&self) {
        let controller = self.controller.clone();
        spawn_local(async move { controller.submit().await });
    }

    pub fn toggle(&self, id: TaskId, checked: bool) {
        let controller = self.controller.clone();
        spawn_local(async move { controller.toggle(id, checked).await });
    }

    pub fn delete(&self, id: TaskId) {
        let controller = self.controller.clone();
        spawn_local(async move { controller.delete(id).await });
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
