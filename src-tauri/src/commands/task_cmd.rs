//! Tauri Commands for Tasks
//!
//! Exposes the task board to the frontend via Tauri IPC.

use chichi_domain::Task;
use tauri::State;

use crate::repository::TaskSource;
use crate::AppState;

/// List all tasks
#[tauri::command]
pub async fn list_tasks(state: State<'_, AppState>) -> Result<Vec<Task>, String> {
    state.board.list().await.map_err(|e| e.to_string())
}

/// Toggle task completion
#[tauri::command]
pub async fn toggle_task(state: State<'_, AppState>, id: String) -> Result<Task, String> {
    let task = state.board.toggle(&id).await.map_err(|e| {
        log::warn!("toggle_task({}) failed: {}", id, e);
        e.to_string()
    })?;
    log::info!("Task {} completed={}", task.id, task.completed);
    Ok(task)
}
