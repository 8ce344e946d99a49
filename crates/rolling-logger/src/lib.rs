//! Rolling Logger
//!
//! A `log` backend that keeps the most recent lines in a circular buffer and
//! forwards every record to the browser console (stderr when not on wasm).

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of lines kept in memory
pub const DEFAULT_CAPACITY: usize = 256;

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Fixed-capacity buffer that drops the oldest line when full
#[derive(Debug)]
pub struct RollingBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl RollingBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, line: String) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines in insertion order, oldest first
    pub fn snapshot(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }
}

pub struct RollingLogger {
    level: LevelFilter,
    buffer: Mutex<RollingBuffer>,
}

impl RollingLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            buffer: Mutex::new(RollingBuffer::new(capacity)),
        }
    }

    /// Buffered lines, oldest first. Still readable after a panic poisoned the lock.
    pub fn recent(&self) -> Vec<String> {
        let buf = self.buffer.lock().unwrap_or_else(|e| e.into_inner());
        buf.snapshot()
    }
}

/// `2026-01-01T10:00:00.000Z [INFO storefront_ui::app] message`
pub fn format_line(timestamp: chrono::DateTime<chrono::Utc>, record: &Record) -> String {
    format!(
        "{} [{} {}] {}",
        timestamp.format("%Y-%m-%dT%H:%M:%S%.3fZ"),
        record.level(),
        record.target(),
        record.args()
    )
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(chrono::Utc::now(), record);
        emit(record.level(), &line);
        if let Ok(mut buf) = self.buffer.lock() {
            buf.push(line);
        }
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    match level {
        Level::Error => web_sys::console::error_1(&line.into()),
        Level::Warn => web_sys::console::warn_1(&line.into()),
        Level::Info => web_sys::console::info_1(&line.into()),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&line.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the global logger. Only the first call takes effect.
pub fn init(level: LevelFilter, capacity: usize) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Recent lines of the installed logger; empty before `init`
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(RollingLogger::recent).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_buffer_drops_oldest() {
        let mut buf = RollingBuffer::new(3);
        for i in 0..5 {
            buf.push(format!("line {}", i));
        }
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.snapshot(), vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let mut buf = RollingBuffer::new(0);
        buf.push("a".to_string());
        buf.push("b".to_string());
        assert_eq!(buf.snapshot(), vec!["b"]);
    }

    #[test]
    fn test_level_filter() {
        let logger = RollingLogger::new(LevelFilter::Warn, 8);
        logger.log(
            &Record::builder()
                .level(Level::Info)
                .target("cart")
                .args(format_args!("ignored"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Error)
                .target("cart")
                .args(format_args!("kept"))
                .build(),
        );
        let recent = logger.recent();
        assert_eq!(recent.len(), 1);
        assert!(recent[0].ends_with("[ERROR cart] kept"));
    }

    #[test]
    fn test_recent_survives_poisoned_lock() {
        let logger = std::sync::Arc::new(RollingLogger::new(LevelFilter::Info, 8));
        logger.log(
            &Record::builder()
                .level(Level::Info)
                .target("app")
                .args(format_args!("before panic"))
                .build(),
        );
        let poisoner = logger.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.buffer.lock().unwrap();
            panic!("poison the buffer");
        })
        .join();
        assert!(logger.buffer.is_poisoned());
        let recent = logger.recent();
        assert_eq!(recent.len(), 1);
        assert!(recent[0].ends_with("[INFO app] before panic"));
    }

    #[test]
    fn test_recent_lines_before_init() {
        assert!(recent_lines().is_empty());
    }

    #[test]
    fn test_format_line() {
        let ts = chrono::Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let line = format_line(
            ts,
            &Record::builder()
                .level(Level::Warn)
                .target("nav")
                .args(format_args!("scrolled"))
                .build(),
        );
        assert_eq!(line, "2026-01-02T03:04:05.000Z [WARN nav] scrolled");
    }
}
