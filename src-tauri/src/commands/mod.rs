//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to backend services.

mod task_cmd;

pub use task_cmd::*;
