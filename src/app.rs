//! Todo-Sync Frontend App
//!
//! Main application component: input row plus the two task columns.

use std::rc::Rc;

use leptos::prelude::*;
use todo_sync::{DisplayState, ListKind, Synchronizer};

use crate::commands::TauriBackend;
use crate::components::{ErrorBanner, NewTaskForm, TaskColumn};
use crate::context::TodoContext;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (display, set_display) = signal(DisplayState::default());
    let sync = Synchronizer::new(TauriBackend)
        .with_observer(move |state| set_display.set(state.clone()));

    // Provide context to all children
    let ctx = TodoContext::new(display, Rc::new(sync));
    provide_context(ctx);

    // Load tasks on mount
    Effect::new(move |_| {
        ctx.run(|sync| async move {
            let _ = sync.refresh().await;
        });
    });

    view! {
        <div class="container">
            <ErrorBanner />
            <NewTaskForm />
            <div class="task-lists">
                <TaskColumn kind=ListKind::Ongoing heading="Ongoing" />
                <TaskColumn kind=ListKind::Done heading="Done" />
            </div>
        </div>
    }
}
