//! Engine logging
//!
//! Every engine component logs through one global `Logger` slot owned by
//! `Engine`. Entries carry a severity, a timestamp, the emitting component
//! ("ren::WaterFramebuffers", "ren::gl", ...) and, for errors, the file and
//! line they came from. `DefaultLogger` prints colored lines to stdout.

use colored::*;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Destination for engine log entries
///
/// Installed with `Engine::set_logger`. Called from whichever thread logs,
/// hence `Send + Sync`.
///
/// # Example
///
/// ```no_run
/// use std::sync::Mutex;
/// use ren_engine::ren::log::{Logger, LogEntry};
///
/// struct MemoryLogger {
///     lines: Mutex<Vec<String>>,
/// }
///
/// impl Logger for MemoryLogger {
///     fn log(&self, entry: &LogEntry) {
///         self.lines.lock().unwrap().push(entry.message.clone());
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    fn log(&self, entry: &LogEntry);
}

/// One log message
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub severity: LogSeverity,

    /// When the entry was created
    pub timestamp: SystemTime,

    /// Emitting component, e.g. "ren::WaterFramebuffers"
    pub source: String,

    pub message: String,

    /// Source file, set by `engine_error!` and `engine_err!`
    pub file: Option<&'static str>,

    /// Source line, set by `engine_error!` and `engine_err!`
    pub line: Option<u32>,
}

/// Log severity, ordered from most to least verbose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogSeverity {
    /// Fixed-width label used by the default logger
    pub fn label(&self) -> &'static str {
        match self {
            LogSeverity::Trace => "TRACE",
            LogSeverity::Debug => "DEBUG",
            LogSeverity::Info => "INFO ",
            LogSeverity::Warn => "WARN ",
            LogSeverity::Error => "ERROR",
        }
    }
}

/// Default logger implementation using colored console output
///
/// Colors:
/// - Trace: bright_black
/// - Debug: cyan
/// - Info: green
/// - Warn: yellow
/// - Error: red + bold
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Error: `[timestamp] [ERROR] [source] message (file:line)`
pub struct DefaultLogger;

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let local: DateTime<Local> = entry.timestamp.into();
        let label = entry.severity.label();
        let severity = match entry.severity {
            LogSeverity::Trace => label.bright_black(),
            LogSeverity::Debug => label.cyan(),
            LogSeverity::Info => label.green(),
            LogSeverity::Warn => label.yellow(),
            LogSeverity::Error => label.red().bold(),
        };
        let location = match (entry.file, entry.line) {
            (Some(file), Some(line)) => format!(" ({}:{})", file, line),
            _ => String::new(),
        };

        println!(
            "[{}] [{}] [{}] {}{}",
            local.format("%Y-%m-%d %H:%M:%S%.3f"),
            severity,
            entry.source.bright_blue(),
            entry.message,
            location
        );
    }
}

// ===== LOGGING MACROS =====

#[doc(hidden)]
#[macro_export]
macro_rules! __engine_log {
    ($severity:ident, $source:expr, $($arg:tt)*) => {
        $crate::ren::Engine::log(
            $crate::ren::log::LogSeverity::$severity,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log at TRACE (per-call detail, usually filtered out)
///
/// ```ignore
/// engine_trace!("ren::WaterFramebuffers", "Binding reflection target");
/// ```
#[macro_export]
macro_rules! engine_trace {
    ($source:expr, $($arg:tt)*) => { $crate::__engine_log!(Trace, $source, $($arg)*) };
}

/// Log at DEBUG
///
/// ```ignore
/// engine_debug!("ren::FramebufferTarget", "Created {}x{} target", width, height);
/// ```
#[macro_export]
macro_rules! engine_debug {
    ($source:expr, $($arg:tt)*) => { $crate::__engine_log!(Debug, $source, $($arg)*) };
}

/// Log at INFO (lifecycle events)
///
/// ```ignore
/// engine_info!("ren::WaterFramebuffers", "Water framebuffers created");
/// ```
#[macro_export]
macro_rules! engine_info {
    ($source:expr, $($arg:tt)*) => { $crate::__engine_log!(Info, $source, $($arg)*) };
}

/// Log at WARN (misuse that the engine can absorb)
///
/// ```ignore
/// engine_warn!("ren::WaterFramebuffers", "clean_up called twice, ignoring");
/// ```
#[macro_export]
macro_rules! engine_warn {
    ($source:expr, $($arg:tt)*) => { $crate::__engine_log!(Warn, $source, $($arg)*) };
}

/// Log at ERROR, tagged with the calling file and line
///
/// ```ignore
/// engine_error!("ren::gl", "Failed to create texture: {}", error);
/// ```
#[macro_export]
macro_rules! engine_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::ren::Engine::log_detailed(
            $crate::ren::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

/// Build an `Error::Backend`, logging it at ERROR level with file:line
///
/// # Example
///
/// ```ignore
/// let err = engine_err!("ren::gl", "glCreateTexture failed: {}", reason);
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::ren::Error::Backend(message)
    }};
}

/// Return early with a logged `Error::Backend`
///
/// # Example
///
/// ```ignore
/// engine_bail!("ren::WaterFramebuffers", "Target {} already destroyed", name);
/// ```
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
