/// Ren Engine - process-wide services
///
/// The engine owns the global logger slot. Subsystems (water framebuffers,
/// input manager, devices) are plain values owned by the application's
/// composition root and are not registered here.

use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

// ===== INTERNAL STATE =====

/// Logger slot, filled with DefaultLogger on first use
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

fn logger_slot() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)))
}

// ===== PUBLIC API =====

/// Entry point for engine-wide services
///
/// # Example
///
/// ```no_run
/// use ren_engine::ren::{Engine, log::{Logger, LogEntry}};
///
/// struct StderrLogger;
/// impl Logger for StderrLogger {
///     fn log(&self, entry: &LogEntry) {
///         eprintln!("{} {}", entry.source, entry.message);
///     }
/// }
///
/// Engine::set_logger(StderrLogger);
/// ```
pub struct Engine;

impl Engine {
    /// Route every subsequent log entry to `logger`
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        if let Ok(mut slot) = logger_slot().write() {
            *slot = Box::new(logger);
        }
    }

    /// Go back to colored console output
    pub fn reset_logger() {
        if let Ok(mut slot) = logger_slot().write() {
            *slot = Box::new(DefaultLogger);
        }
    }

    /// Log a message without source location
    ///
    /// Backs `engine_trace!` through `engine_warn!`. `source` names the
    /// emitting component, e.g. "ren::WaterFramebuffers".
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        Self::dispatch(LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: None,
            line: None,
        });
    }

    /// Log a message with the file and line it was emitted from
    ///
    /// Backs `engine_error!` and `engine_err!`.
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        Self::dispatch(LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: Some(file),
            line: Some(line),
        });
    }

    /// A poisoned slot drops the entry rather than panicking inside a log call
    fn dispatch(entry: LogEntry) {
        if let Ok(slot) = logger_slot().read() {
            slot.log(&entry);
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
