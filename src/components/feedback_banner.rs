//! Feedback Banner Component

use leptos::prelude::*;

use crate::context::use_app_context;

/// The single transient banner, if one is showing
#[component]
pub fn FeedbackBanner() -> impl IntoView {
    let board = use_app_context().board;

    move || {
        board.with(|b| b.banner.clone()).map(|banner| {
            view! {
                <div class=banner.kind.css_class() role="status">
                    {banner.message}
                </div>
            }
        })
    }
}
