//! Backend Command Surface
//!
//! The four mutating commands plus fetch, as seen from the synchronizer.
//! Implementations: Tauri IPC in the front-end, in-memory fakes in tests.

use async_trait::async_trait;

use crate::model::TaskLists;

/// Command names shared by the front-end bindings and the Tauri handlers
pub mod commands {
    pub const FETCH_ALL: &str = "fetch_all";
    pub const ADD_TASK: &str = "add_task";
    pub const EDIT_TASKS: &str = "edit_tasks";
    pub const DELETE_TASKS: &str = "delete_tasks";
    pub const COMPLETE_TASK: &str = "complete_task";
}

/// Remote operations consumed by the synchronizer.
///
/// Futures are not required to be `Send` so the trait can sit on top of
/// `wasm-bindgen` promises. Errors are opaque strings.
#[async_trait(?Send)]
pub trait TaskBackend {
    /// Full authoritative snapshot
    async fn fetch_all(&self) -> Result<TaskLists, String>;

    /// Append a new ongoing task
    async fn add_task(&self, title: &str) -> Result<(), String>;

    /// Replace the stored snapshot after an edit
    async fn edit_tasks(&self, lists: &TaskLists) -> Result<(), String>;

    /// Replace the stored snapshot after a delete
    async fn delete_tasks(&self, lists: &TaskLists) -> Result<(), String>;

    /// Move `ongoing[index]` (expected to be `title`) to done
    async fn complete_task(&self, ongoing: &[String], index: usize, title: &str)
        -> Result<(), String>;
}
