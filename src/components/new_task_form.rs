//! New Task Form Component

use leptos::prelude::*;

use crate::context::use_todo_context;

/// Input row for creating ongoing tasks
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_todo_context();

    let (new_title, set_new_title) = signal(String::new());

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = new_title.get_untracked();
        ctx.run(move |sync| async move {
            // Empty titles come back as Ok(false) without a request
            if let Ok(true) = sync.add(&title).await {
                set_new_title.set(String::new());
            }
        });
    };

    view! {
        <form class="row new-task-form" on:submit=add_task>
            <input
                id="new-task-input"
                type="text"
                placeholder="Enter a task..."
                prop:value=move || new_title.get()
                on:input=move |ev| set_new_title.set(event_target_value(&ev))
            />
            <button class="input-button" type="submit">"add"</button>
        </form>
    }
}
