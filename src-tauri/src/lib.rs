//! Todo-Sync Backend
//!
//! Layered architecture:
//! - domain: Task model and rules
//! - repository: Task storage abstraction and SQLite implementation
//! - commands: Tauri command handlers

use tauri::Manager;

mod commands;
mod config;
mod domain;
mod repository;

use config::AppConfig;
use repository::{open_db, SqliteTaskRepository};

/// Application state shared across commands
pub struct AppState {
    pub tasks: SqliteTaskRepository,
}

/// Install the fmt subscriber; `log` records are forwarded to it
fn init_logging(config: &AppConfig) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_target(false)
        .try_init();
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                // Focus the existing window when a new instance tries to start
                if let Some(window) = app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let app_dir = app.path().app_data_dir()?;
            std::fs::create_dir_all(&app_dir)?;

            let config = AppConfig::from_env(&app_dir);
            init_logging(&config);
            log::info!("opening task store at {}", config.db_path.display());

            let conn = open_db(&config.db_path)?;
            app.manage(AppState {
                tasks: SqliteTaskRepository::new(conn),
            });
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::fetch_all,
            commands::add_task,
            commands::edit_tasks,
            commands::delete_tasks,
            commands::complete_task,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
