//! Tauri Commands for the task lists
//!
//! Exposes task storage to the frontend via Tauri IPC. Errors cross the
//! boundary as strings.

use tauri::State;

use crate::domain::TaskLists;
use crate::repository::TaskRepository;
use crate::AppState;

/// Both lists as currently stored
#[tauri::command]
pub async fn fetch_all(state: State<'_, AppState>) -> Result<TaskLists, String> {
    state.tasks.load().await.map_err(|e| e.to_string())
}

/// Append a new ongoing task
#[tauri::command]
pub async fn add_task(state: State<'_, AppState>, title: String) -> Result<(), String> {
    state.tasks.append(&title).await.map_err(|e| {
        log::warn!("add_task rejected: {}", e);
        e.to_string()
    })?;
    log::info!("added task {:?}", title);
    Ok(())
}

/// Store the lists after an edit
#[tauri::command]
pub async fn edit_tasks(
    state: State<'_, AppState>,
    ongoing: Vec<String>,
    done: Vec<String>,
) -> Result<(), String> {
    replace_all(&state, "edit_tasks", TaskLists::new(ongoing, done)).await
}

/// Store the lists after a delete
#[tauri::command]
pub async fn delete_tasks(
    state: State<'_, AppState>,
    ongoing: Vec<String>,
    done: Vec<String>,
) -> Result<(), String> {
    replace_all(&state, "delete_tasks", TaskLists::new(ongoing, done)).await
}

async fn replace_all(state: &AppState, command: &str, lists: TaskLists) -> Result<(), String> {
    state.tasks.replace(&lists).await.map_err(|e| {
        log::warn!("{} rejected: {}", command, e);
        e.to_string()
    })?;
    log::info!(
        "{}: stored {} ongoing, {} done",
        command,
        lists.ongoing.len(),
        lists.done.len()
    );
    Ok(())
}

/// Move `ongoing[index]` to done.
///
/// `ongoing` is the caller's view of the list; only `index` and `title`
/// decide what moves, the view is compared just to flag stale clients.
#[tauri::command]
pub async fn complete_task(
    state: State<'_, AppState>,
    ongoing: Vec<String>,
    index: usize,
    title: String,
) -> Result<(), String> {
    let stored = state.tasks.load().await.map_err(|e| e.to_string())?;
    if stored.ongoing != ongoing {
        log::warn!("complete_task: client view of ongoing list is stale");
    }

    state.tasks.complete(index, &title).await.map_err(|e| {
        log::warn!("complete_task rejected: {}", e);
        e.to_string()
    })?;
    log::info!("completed task {:?}", title);
    Ok(())
}
