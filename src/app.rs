//! Taskboard App
//!
//! Wires configuration, HTTP access and the board into the controller and
//! lays out the page.

use leptos::prelude::*;

use crate::api::FetchTaskApi;
use crate::components::{TaskForm, TaskList};
use crate::config::ClientConfig;
use crate::context::AppContext;
use crate::controller::TaskListController;
use crate::store::BoardState;
use crate::view::SignalView;

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::from_document();
    log::info!("Task collection at {}", config.collection_url());

    let board = RwSignal::new(BoardState::default());
    let page = SignalView::new(board, config.banner_timeout_ms);
    let controller = TaskListController::new(FetchTaskApi::new(config), page);

    let ctx = AppContext::new(controller);
    provide_context(ctx.clone());

    // Load tasks on mount
    Effect::new(move |_| ctx.load());

    view! {
        <div class="container">
            <header class="header">
                <h1>"Taskboard"</h1>
            </header>

            <section class="task-form-section">
                <h2>"Add a Task"</h2>
                <TaskForm />
            </section>

            <section class="task-list-section">
                <h2>"Tasks"</h2>
                <TaskList />
            </section>
        </div>
    }
}
