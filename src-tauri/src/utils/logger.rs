use super::log_buffer::{format_entry, is_recorded, should_filter_log, LogMessage, RecentLogs};
use chrono::Local;
use log::{Metadata, Record, SetLoggerError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tauri::Emitter;

pub const LOG_EVENT: &str = "log_message";

static LOGGER: Mutex<Option<Logger>> = Mutex::new(None);

pub struct Logger {
    app_handle: tauri::AppHandle,
    recent_logs: Mutex<RecentLogs>,
    console_logging_enabled: AtomicBool,
    frontend_logging_enabled: AtomicBool,
}

impl Logger {
    pub fn init(
        app_handle: tauri::AppHandle,
        max_recent_logs: usize,
    ) -> Result<(), SetLoggerError> {
        let logger = Logger {
            app_handle,
            recent_logs: Mutex::new(RecentLogs::new(max_recent_logs)),
            console_logging_enabled: AtomicBool::new(true),
            frontend_logging_enabled: AtomicBool::new(true),
        };

        if let Ok(mut global_logger) = LOGGER.lock() {
            *global_logger = Some(logger);
        }

        log::set_logger(&LoggerImplementation)?;

        Ok(())
    }

    fn log(&self, record: &Record) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let log_message = LogMessage {
            level: record.level().to_string(),
            message: record.args().to_string(),
            timestamp: timestamp.clone(),
        };

        if self.console_logging_enabled.load(Ordering::Relaxed) {
            println!("{}", format_entry(&timestamp, record));
        }

        // Logging from inside the logger would recurse, so emit failures go to stderr.
        if self.frontend_logging_enabled.load(Ordering::Relaxed) {
            if let Err(e) = self.app_handle.emit(LOG_EVENT, log_message.clone()) {
                eprintln!("Failed to emit log message: {}", e);
            }
        }

        if let Ok(mut recent_logs) = self.recent_logs.lock() {
            recent_logs.push(log_message);
        }
    }
}

struct LoggerImplementation;

impl log::Log for LoggerImplementation {
    fn enabled(&self, metadata: &Metadata) -> bool {
        is_recorded(metadata.level())
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) || should_filter_log(record) {
            return;
        }
        if let Ok(guard) = LOGGER.lock() {
            if let Some(logger) = guard.as_ref() {
                logger.log(record);
            }
        }
    }

    fn flush(&self) {}
}

fn with_logger<T: Default>(f: impl FnOnce(&Logger) -> T) -> T {
    LOGGER
        .lock()
        .ok()
        .and_then(|guard| guard.as_ref().map(f))
        .unwrap_or_default()
}

#[tauri::command]
pub fn get_recent_logs() -> Vec<LogMessage> {
    with_logger(|logger| {
        logger
            .recent_logs
            .lock()
            .map(|logs| logs.to_vec())
            .unwrap_or_default()
    })
}

#[tauri::command]
pub fn set_console_logging(enabled: bool) {
    with_logger(|logger| logger.console_logging_enabled.store(enabled, Ordering::Relaxed));
}

#[tauri::command]
pub fn set_frontend_logging(enabled: bool) {
    with_logger(|logger| logger.frontend_logging_enabled.store(enabled, Ordering::Relaxed));
}

#[tauri::command]
pub fn clear_logs() {
    with_logger(|logger| {
        if let Ok(mut recent_logs) = logger.recent_logs.lock() {
            recent_logs.clear();
        }
    });
}
