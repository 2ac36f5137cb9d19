//! Task Column Component

use leptos::prelude::*;
use todo_sync::ListKind;

use crate::components::TaskRow;
use crate::context::use_todo_context;

/// One list (ongoing or done) with a heading.
///
/// Rows are keyed by position; each row reads its task reactively, so a
/// row being edited keeps its input element (and focus) across updates.
#[component]
pub fn TaskColumn(kind: ListKind, #[prop(into)] heading: String) -> impl IntoView {
    let ctx = use_todo_context();
    let count = move || ctx.display.with(|d| d.tasks(kind).len());

    view! {
        <div class=format!("task-column {}", kind.as_str())>
            <h2>{heading}</h2>
            <For
                each=move || 0..count()
                key=|index| *index
                children=move |index| view! { <TaskRow kind=kind index=index /> }
            />
        </div>
    }
}
