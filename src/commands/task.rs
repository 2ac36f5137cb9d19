//! Task Commands
//!
//! Frontend bindings for the task backend commands, and the
//! `TaskBackend` implementation the synchronizer runs on.

use async_trait::async_trait;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use todo_sync::{commands, TaskBackend, TaskLists};

use super::{invoke, js_error};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct AddTaskArgs<'a> {
    title: &'a str,
}

#[derive(Serialize)]
struct CompleteTaskArgs<'a> {
    ongoing: &'a [String],
    index: usize,
    title: &'a str,
}

// ========================
// Commands
// ========================

async fn call<A: Serialize>(cmd: &str, args: &A) -> Result<JsValue, String> {
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    invoke(cmd, js_args).await.map_err(js_error)
}

pub async fn fetch_all() -> Result<TaskLists, String> {
    let result = invoke(commands::FETCH_ALL, JsValue::NULL).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn add_task(title: &str) -> Result<(), String> {
    call(commands::ADD_TASK, &AddTaskArgs { title }).await.map(|_| ())
}

/// `TaskLists` serializes to `{ ongoing, done }`, which is the argument
/// object the command expects
pub async fn edit_tasks(lists: &TaskLists) -> Result<(), String> {
    call(commands::EDIT_TASKS, lists).await.map(|_| ())
}

pub async fn delete_tasks(lists: &TaskLists) -> Result<(), String> {
    call(commands::DELETE_TASKS, lists).await.map(|_| ())
}

pub async fn complete_task(ongoing: &[String], index: usize, title: &str) -> Result<(), String> {
    call(commands::COMPLETE_TASK, &CompleteTaskArgs { ongoing, index, title })
        .await
        .map(|_| ())
}

/// Synchronizer backend over Tauri IPC
pub struct TauriBackend;

#[async_trait(?Send)]
impl TaskBackend for TauriBackend {
    async fn fetch_all(&self) -> Result<TaskLists, String> {
        fetch_all().await
    }

    async fn add_task(&self, title: &str) -> Result<(), String> {
        add_task(title).await
    }

    async fn edit_tasks(&self, lists: &TaskLists) -> Result<(), String> {
        edit_tasks(lists).await
    }

    async fn delete_tasks(&self, lists: &TaskLists) -> Result<(), String> {
        delete_tasks(lists).await
    }

    async fn complete_task(&self, ongoing: &[String], index: usize, title: &str)
        -> Result<(), String> {
        complete_task(ongoing, index, title).await
    }
}
