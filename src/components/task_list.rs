//! Task List Component
//!
//! Rows in received order, or the empty-state placeholder.

use leptos::prelude::*;

use crate::components::TaskRowView;
use crate::context::use_app_context;
use crate::models::TaskId;
use crate::store::EMPTY_STATE_MESSAGE;

#[component]
pub fn TaskList() -> impl IntoView {
    let ctx = use_app_context();
    let board = ctx.board;

    let toggle_ctx = ctx.clone();
    let on_toggle = Callback::new(move |(id, checked): (TaskId, bool)| toggle_ctx.toggle(id, checked));
    let on_delete = Callback::new(move |id: TaskId| ctx.delete(id));

    let has_rows = move || board.with(|b| !b.is_empty());

    view! {
        <div id="taskContainer" class="task-container">
            <Show
                when=has_rows
                fallback=|| view! { <p class="empty-state">{EMPTY_STATE_MESSAGE}</p> }
            >
                <For
                    each=move || board.with(|b| b.rows.clone())
                    // Checkbox and confirmed state are part of the key so
                    // toggles and rollbacks re-render the row
                    key=|row| (row.id(), row.checked, row.is_completed())
                    children=move |row| {
                        view! { <TaskRowView row=row on_toggle=on_toggle on_delete=on_delete /> }
                    }
                />
            </Show>
        </div>
    }
}
