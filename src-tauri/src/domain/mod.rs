//! Domain Layer
//!
//! Task model (shared with the frontend) and domain errors.

mod error;
mod task;

pub use error::{DomainError, DomainResult};
pub use task::{validate_lists, validate_title};
pub use todo_sync::{ListKind, TaskLists};
