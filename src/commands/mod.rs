//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands.

mod task;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Rejected promises (command returned `Err`) surface as `Err`
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Tauri rejects with the command's error string; fall back to the debug form
fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

pub use task::*;
