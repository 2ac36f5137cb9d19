//! Repository Layer
//!
//! Data access abstractions and implementations.

mod db;
mod task_repo;
mod traits;


pub use db::open_db;
#[cfg(test)]
pub use db::open_in_memory;
pub use task_repo::SqliteTaskRepository;
pub use traits::TaskRepository;
