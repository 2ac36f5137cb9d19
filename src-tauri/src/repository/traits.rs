//! Repository Layer - Core Traits
//!
//! Abstract interface for task storage. Every method is atomic: either the
//! whole change is stored or nothing is.

use async_trait::async_trait;

use crate::domain::{DomainResult, TaskLists};

#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Both lists in stored order
    async fn load(&self) -> DomainResult<TaskLists>;

    /// Append a title to the end of ongoing
    async fn append(&self, title: &str) -> DomainResult<()>;

    /// Replace everything with `lists`
    async fn replace(&self, lists: &TaskLists) -> DomainResult<()>;

    /// Move `ongoing[index]` to the front of done, provided it is `title`.
    /// Returns the lists as stored afterwards.
    async fn complete(&self, index: usize, title: &str) -> DomainResult<TaskLists>;
}
