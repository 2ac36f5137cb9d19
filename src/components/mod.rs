//! UI Components
//!
//! Leptos components rendering the synchronizer's display state.

mod error_banner;
mod new_task_form;
mod task_column;
mod task_row;

pub use error_banner::ErrorBanner;
pub use new_task_form::NewTaskForm;
pub use task_column::TaskColumn;
pub use task_row::TaskRow;
