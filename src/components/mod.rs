//! UI Components
//!
//! Leptos components rendering the board.

mod feedback_banner;
mod task_form;
mod task_list;
mod task_row;

pub use feedback_banner::FeedbackBanner;
pub use task_form::TaskForm;
pub use task_list::TaskList;
pub use task_row::TaskRowView;
