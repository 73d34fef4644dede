use log::{Level, LevelFilter, Record};
use serde::Serialize;
use std::collections::VecDeque;

/// Installed once as the global max level; the logger filters against it too.
pub const MAX_LOG_LEVEL: LevelFilter = LevelFilter::Info;

pub fn is_recorded(level: Level) -> bool {
    level <= MAX_LOG_LEVEL
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogMessage {
    pub level: String,
    pub message: String,
    pub timestamp: String,
}

/// Fixed-capacity ring of the most recent log messages.
#[derive(Debug)]
pub struct RecentLogs {
    messages: VecDeque<LogMessage>,
    capacity: usize,
}

impl RecentLogs {
    pub fn new(capacity: usize) -> Self {
        RecentLogs {
            messages: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, message: LogMessage) {
        if self.capacity == 0 {
            return;
        }
        if self.messages.len() >= self.capacity {
            self.messages.pop_front();
        }
        self.messages.push_back(message);
    }

    pub fn to_vec(&self) -> Vec<LogMessage> {
        self.messages.iter().cloned().collect()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

pub fn format_entry(timestamp: &str, record: &Record) -> String {
    format!(
        "[{}] {} - {}: {}",
        timestamp,
        record.level(),
        record.target(),
        record.args()
    )
}

// tao reports these on every frame on some platforms.
pub fn should_filter_log(record: &Record) -> bool {
    if !record
        .target()
        .starts_with("tao::platform_impl::platform::event_loop::runner")
    {
        return false;
    }
    let message = record.args().to_string();
    message.contains("NewEvents emitted without explicit RedrawEventsCleared")
        || message.contains("RedrawEventsCleared emitted without explicit MainEventsCleared")
}
