//! Task Row Component
//!
//! One task with its edit/done/delete controls. While editing, the delete
//! button turns into cancel and the done button is hidden.

use leptos::html;
use leptos::prelude::*;
use todo_sync::ListKind;

use crate::context::use_todo_context;

#[component]
pub fn TaskRow(kind: ListKind, index: usize) -> impl IntoView {
    let ctx = use_todo_context();
    let input_ref = NodeRef::<html::Input>::new();

    let title = move || {
        ctx.display
            .with(|d| d.task(kind, index).map(|t| t.title.clone()))
            .unwrap_or_default()
    };
    let editing = move || ctx.display.with(|d| d.task(kind, index).is_some_and(|t| t.editing));
    let editing_now = move || {
        ctx.display
            .with_untracked(|d| d.task(kind, index).is_some_and(|t| t.editing))
    };

    let save = move || {
        ctx.run(move |sync| async move {
            let _ = sync.edit(index, kind).await;
        });
    };
    let cancel = move || ctx.with_sync(|sync| sync.cancel_edit(index, kind));

    let on_edit = move |_| {
        if editing_now() {
            save();
        } else {
            ctx.with_sync(|sync| sync.enable_edit(index, kind));
            // The input is still disabled until the view catches up
            request_animation_frame(move || {
                if let Some(input) = input_ref.get_untracked() {
                    let _ = input.focus();
                }
            });
        }
    };

    let on_done = move |_| {
        let title = ctx
            .display
            .with_untracked(|d| d.task(kind, index).map(|t| t.title.clone()));
        if let Some(title) = title {
            ctx.run(move |sync| async move {
                let _ = sync.mark_done(&title, index).await;
            });
        }
    };

    let on_delete_or_cancel = move |_| {
        if editing_now() {
            cancel();
        } else {
            ctx.run(move |sync| async move {
                let _ = sync.delete(index, kind).await;
            });
        }
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if !editing_now() {
            return;
        }
        match ev.key().as_str() {
            "Enter" => save(),
            "Escape" => cancel(),
            _ => {}
        }
    };

    view! {
        <div class="task-row">
            <input
                node_ref=input_ref
                type="text"
                prop:value=title
                disabled=move || !editing()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    ctx.with_sync(|sync| sync.change_title(value, kind, index));
                }
                on:keydown=on_keydown
            />
            <button class="list-button" type="button" on:click=on_edit>
                {move || if editing() { "save" } else { "edit" }}
            </button>
            <Show when=move || kind == ListKind::Ongoing && !editing()>
                <button class="list-button" type="button" on:click=on_done>
                    "done"
                </button>
            </Show>
            <button class="list-button" type="button" on:click=on_delete_or_cancel>
                {move || if editing() { "cancel" } else { "delete" }}
            </button>
        </div>
    }
}
