//! Todo-Sync Core
//!
//! Client-side state synchronization for the todo list:
//! - model: snapshot and display projection types
//! - reducer: pure state transitions keyed by discrete actions
//! - backend: the command surface the synchronizer talks to
//! - sync: the synchronizer driving backend calls and the reducer

mod backend;
mod error;
mod model;
mod reducer;
mod sync;

#[cfg(test)]
mod tests;

pub use backend::{commands, TaskBackend};
pub use error::{SyncError, SyncResult};
pub use model::{DisplayState, ListKind, Task, TaskLists};
pub use reducer::{reduce, Action};
pub use sync::Synchronizer;
