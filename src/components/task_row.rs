//! Task Row Component
//!
//! A single task: completion checkbox, title, optional description and a
//! delete button. Text is bound as text nodes, so markup in titles and
//! descriptions shows up literally.

use leptos::prelude::*;

use crate::models::TaskId;
use crate::store::TaskRow;

#[component]
pub fn TaskRowView(
    row: TaskRow,
    #[prop(into)] on_toggle: Callback<(TaskId, bool)>,
    #[prop(into)] on_delete: Callback<TaskId>,
) -> impl IntoView {
    let id = row.id();
    let checked = row.checked;
    let completed = row.is_completed();
    let title = row.task.title.clone();
    let description = row.task.visible_description().map(str::to_string);

    let aria_label = if completed {
        "Mark task as incomplete"
    } else {
        "Mark task as complete"
    };

    view! {
        <div
            class=if completed { "task-item completed" } else { "task-item" }
            data-id=id.to_string()
        >
            <div class="task-checkbox">
                <input
                    type="checkbox"
                    prop:checked=checked
                    aria-label=aria_label
                    on:change=move |ev| on_toggle.run((id, event_target_checked(&ev)))
                />
            </div>
            <div class="task-content">
                <h3 class="task-title">{title}</h3>
                {description.map(|d| view! { <p class="task-description">{d}</p> })}
            </div>
            <div class="task-actions">
                <button
                    class="btn btn-danger btn-sm delete-btn"
                    aria-label="Delete task"
                    on:click=move |_| on_delete.run(id)
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}
