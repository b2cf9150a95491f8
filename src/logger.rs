//! Custom logging module.
//!
//! This module provides a custom logger implementation that captures log entries
//! into a bounded buffer shared with the application state for display in the UI.

use crate::error::AppError;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Specify how many formatted entries are retained.
///
pub const LOG_CAPACITY: usize = 500;

const CRATE_TARGET: &str = "todolist_tui";

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {} {}", timestamp, level_str, record.args())
}

/// Shared, bounded store of formatted log lines.
///
#[derive(Clone, Default)]
pub struct LogBuffer {
    entries: Arc<Mutex<VecDeque<String>>>,
}

impl LogBuffer {
    /// Append a line, evicting the oldest one once full.
    ///
    pub fn push(&self, line: String) {
        if let Ok(mut entries) = self.entries.lock() {
            if entries.len() == LOG_CAPACITY {
                entries.pop_front();
            }
            entries.push_back(line);
        }
    }

    /// Return a copy of the most recent `count` lines, oldest first.
    ///
    pub fn tail(&self, count: usize) -> Vec<String> {
        match self.entries.lock() {
            Ok(entries) => {
                let skip = entries.len().saturating_sub(count);
                entries.iter().skip(skip).cloned().collect()
            }
            Err(_) => vec![],
        }
    }
}

/// Custom logger that captures logs to state
///
pub struct CustomLogger {
    level: LevelFilter,
    log_callback: Arc<Mutex<Option<Box<dyn Fn(String) + Send + Sync>>>>,
}

impl CustomLogger {
    pub fn new(level: LevelFilter) -> Self {
        CustomLogger {
            level,
            log_callback: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_log_callback(&self, callback: Box<dyn Fn(String) + Send + Sync>) {
        if let Ok(mut guard) = self.log_callback.lock() {
            *guard = Some(callback);
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        // Other crates only get through when something went wrong
        metadata.level() <= self.level
            && (metadata.target().starts_with(CRATE_TARGET) || metadata.level() <= Level::Warn)
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(callback) = self.log_callback.lock() {
                if let Some(ref cb) = *callback {
                    cb(format_log(record));
                }
            }
        }
    }

    fn flush(&self) {}
}

/// Install the custom logger as the global `log` backend, writing into the
/// given buffer.
///
pub fn init(buffer: LogBuffer, level: LevelFilter) -> Result<(), AppError> {
    let logger = CustomLogger::new(level);
    logger.set_log_callback(Box::new(move |line| buffer.push(line)));
    log::set_boxed_logger(Box::new(logger)).map_err(|e| AppError::Logger(e.to_string()))?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_evicts_oldest_entries() {
        let buffer = LogBuffer::default();
        for i in 0..LOG_CAPACITY + 5 {
            buffer.push(format!("line {}", i));
        }
        assert_eq!(buffer.tail(LOG_CAPACITY + 5).len(), LOG_CAPACITY);
        let tail = buffer.tail(2);
        assert_eq!(tail, vec![
            format!("line {}", LOG_CAPACITY + 3),
            format!("line {}", LOG_CAPACITY + 4),
        ]);
    }

    #[test]
    fn init_installs_global_logger_once() {
        let buffer = LogBuffer::default();
        init(buffer.clone(), LevelFilter::Info).unwrap();
        log::info!("Loaded 3 tasks");
        assert!(buffer
            .tail(LOG_CAPACITY)
            .iter()
            .any(|line| line.ends_with("INFO Loaded 3 tasks")));

        assert!(matches!(
            init(LogBuffer::default(), LevelFilter::Info),
            Err(AppError::Logger(_))
        ));
    }

    #[test]
    fn logger_forwards_enabled_records() {
        let buffer = LogBuffer::default();
        let logger = CustomLogger::new(LevelFilter::Info);
        let sink = buffer.clone();
        logger.set_log_callback(Box::new(move |line| sink.push(line)));

        logger.log(
            &Record::builder()
                .level(Level::Error)
                .target("todolist_tui::events::network")
                .args(format_args!("Failed to add task"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Debug)
                .target("todolist_tui::api")
                .args(format_args!("too chatty"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Info)
                .target("hyper::client")
                .args(format_args!("connection pooled"))
                .build(),
        );

        let lines = buffer.tail(10);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("ERROR Failed to add task"));
    }
}
