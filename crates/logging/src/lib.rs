use chrono::Local;
use once_cell::sync::Lazy;
use std::sync::{Arc, Mutex};

// Every line logged during the process, regardless of level
static LOGS: Lazy<Arc<Mutex<Vec<String>>>> = Lazy::new(|| Arc::new(Mutex::new(Vec::new())));

static LOG_LEVEL: Lazy<Arc<Mutex<LogLevel>>> =
    Lazy::new(|| Arc::new(Mutex::new(LogLevel::Warning)));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    fn prefix(&self) -> &'static str {
        match self {
            LogLevel::Debug => "🔍",
            LogLevel::Info => "ℹ️",
            LogLevel::Warning => "⚠️",
            LogLevel::Error => "❌",
        }
    }
}

pub fn set_log_level(level: LogLevel) {
    if let Ok(mut current_level) = LOG_LEVEL.lock() {
        *current_level = level;
    }
}

pub fn get_log_level() -> LogLevel {
    if let Ok(level) = LOG_LEVEL.lock() {
        *level
    } else {
        LogLevel::Warning
    }
}

fn format_line(level: LogLevel, message: &str) -> String {
    let timestamp = Local::now().format("%H:%M:%S").to_string();
    format!("[{}] {} {}", timestamp, level.prefix(), message)
}

/// Record a message and echo it to stderr when it passes the current level.
///
/// Stdout carries the validation report, so log output never goes there.
pub fn log(level: LogLevel, message: &str) {
    let formatted = format_line(level, message);

    if let Ok(mut logs) = LOGS.lock() {
        logs.push(formatted.clone());
    }

    if level >= get_log_level() {
        eprintln!("{}", formatted);
    }
}

pub fn get_logs() -> Vec<String> {
    if let Ok(logs) = LOGS.lock() {
        logs.clone()
    } else {
        vec![format_line(LogLevel::Error, "Error accessing logs")]
    }
}

pub fn debug(message: &str) {
    log(LogLevel::Debug, message);
}

pub fn info(message: &str) {
    log(LogLevel::Info, message);
}

pub fn warning(message: &str) {
    log(LogLevel::Warning, message);
}

pub fn error(message: &str) {
    log(LogLevel::Error, message);
}
