//! Chichi Host
//!
//! Layered architecture:
//! - config: packaging config and starter tasks
//! - repository: task source abstraction and the in-memory board
//! - commands: Tauri command handlers

use tauri::Manager;

mod commands;
mod config;
mod repository;

use config::PackagingConfig;
use repository::TaskBoard;

/// Application state shared across commands
pub struct AppState {
    pub board: TaskBoard,
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            let app_handle = app.handle().clone();

            // Initialize logging
            rolling_logger::init_logger(app_handle.path().app_log_dir()?, "Chichi")
                .map_err(|e| format!("failed to init rolling logger: {:?}", e))?;

            let config = PackagingConfig::load(&app_handle.path().app_config_dir()?)?;
            log::info!(
                "Loaded config for {} ({}), dev server {} cleartext={}",
                config.app_name,
                config.app_id,
                config.server.url,
                config.server.cleartext
            );

            let board = TaskBoard::new(config.starter_tasks)?;
            app.manage(AppState { board });
            log::info!("State managed, app will start immediately");

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::list_tasks,
            commands::toggle_task,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
