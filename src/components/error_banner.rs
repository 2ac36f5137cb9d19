//! Error Banner Component
//!
//! Single place where failed backend commands are shown to the user.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_todo_context;

/// How long an error stays up before it is dismissed automatically
const AUTO_DISMISS_MS: u32 = 8_000;

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_todo_context();
    let last_error = move || ctx.display.with(|d| d.last_error.clone());

    // Auto-dismiss, unless a newer error replaced this one meanwhile
    Effect::new(move |_| {
        if let Some(message) = last_error() {
            spawn_local(async move {
                TimeoutFuture::new(AUTO_DISMISS_MS).await;
                let current = ctx.display.with_untracked(|d| d.last_error.clone());
                if current.as_deref() == Some(message.as_str()) {
                    ctx.with_sync(|sync| sync.dismiss_error());
                }
            });
        }
    });

    view! {
        {move || last_error().map(|message| view! {
            <div class="error-banner" role="alert">
                <span class="error-text">{message}</span>
                <button
                    class="dismiss-btn"
                    type="button"
                    on:click=move |_| ctx.with_sync(|sync| sync.dismiss_error())
                >
                    "×"
                </button>
            </div>
        })}
    }
}
