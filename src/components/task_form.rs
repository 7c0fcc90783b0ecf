//! Task Form Component
//!
//! Title and description inputs bound to the board draft. The feedback
//! banner sits at the top of the form.

use leptos::prelude::*;

use crate::components::FeedbackBanner;
use crate::context::use_app_context;

#[component]
pub fn TaskForm() -> impl IntoView {
    let ctx = use_app_context();
    let board = ctx.board;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    view! {
        <form id="taskForm" class="task-form" on:submit=on_submit>
            <FeedbackBanner />
            <div class="form-group">
                <input
                    id="taskTitle"
                    type="text"
                    placeholder="Task title"
                    prop:value=move || board.with(|b| b.draft.title.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        board.update(|b| b.draft.title = value);
                    }
                />
            </div>
            <div class="form-group">
                <textarea
                    id="taskDescription"
                    placeholder="Description (optional)"
                    rows="3"
                    prop:value=move || board.with(|b| b.draft.description.clone())
                    on:input=move |ev| {
                        let value = event_target::<web_sys::HtmlTextAreaElement>(&ev).value();
                        board.update(|b| b.draft.description = value);
                    }
                ></textarea>
            </div>
            <button type="submit" class="btn btn-primary">"Add Task"</button>
        </form>
    }
}
