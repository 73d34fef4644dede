pub mod animation;
pub mod backend;
pub mod calculations;
pub mod config;
pub mod utils;

#[cfg(feature = "desktop")]
use config::AppConfig;
#[cfg(feature = "desktop")]
use tauri::Manager;
#[cfg(feature = "desktop")]
use utils::commands::*;
#[cfg(feature = "desktop")]
use utils::log_buffer::MAX_LOG_LEVEL;
#[cfg(feature = "desktop")]
use utils::logger::{
    clear_logs, get_recent_logs, set_console_logging, set_frontend_logging, Logger,
};

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            let app_handle = app.handle();
            Logger::init(app_handle.clone(), 100)?;
            log::set_max_level(MAX_LOG_LEVEL);

            let config = AppConfig::load_from_env();
            if let Some(window) = app.get_webview_window("main") {
                window.set_title(config.skin().title)?;
            }
            app.manage(create_app_state(config));
            start_animation(app_handle)?;
            Ok(())
        })
        .on_window_event(|window, event| {
            if let tauri::WindowEvent::Destroyed = event {
                if window.label() == "main" {
                    end_session(window.app_handle());
                }
            }
        })
        .invoke_handler(tauri::generate_handler![
            update_measurements,
            update_measurement,
            clear_fields,
            get_skin,
            get_particles,
            get_recent_logs,
            set_console_logging,
            set_frontend_logging,
            clear_logs
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
