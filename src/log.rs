//! Global leveled logger.
//!
//! Messages are tagged with the verbosity level at which they start to be
//! shown, and with a kind that decides their color and prefix.

use colored::Colorize;
use serde::Deserialize;
use std::fmt::Arguments;
use std::sync::atomic::{AtomicU8, Ordering};

/// Verbosity level. A message is printed if its level is not above the
/// level the logger was initialized with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Only verdicts and failures.
    Brief = 0,
    /// Per-profile progress.
    #[default]
    Normal = 1,
    /// Everything, including scanned functions.
    Verbose = 2,
}

/// Kind of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Critical,
    Error,
    Warning,
    Info,
    Ok,
    /// Printed as is.
    Simple,
}

static LOG_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Normal as u8);

/// Set the global log level.
pub fn init_logger(level: LogLevel) {
    LOG_LEVEL.store(level as u8, Ordering::Relaxed);
}

/// Whether a message of `level` would be printed.
pub fn enabled(level: LogLevel) -> bool {
    level as u8 <= LOG_LEVEL.load(Ordering::Relaxed)
}

#[doc(hidden)]
pub fn log_message(level: LogLevel, kind: MessageKind, args: Arguments<'_>) {
    if !enabled(level) {
        return;
    }
    let text = args.to_string();
    match kind {
        MessageKind::Critical => println!("{}", text.bold()),
        MessageKind::Error => eprintln!("{} {}", "[ERROR]".red().bold(), text.red()),
        MessageKind::Warning => println!("{} {}", "[WARN]".yellow().bold(), text),
        MessageKind::Info => println!("{} {}", "[INFO]".cyan(), text),
        MessageKind::Ok => println!("{} {}", "[OK]".green().bold(), text),
        MessageKind::Simple => println!("{}", text),
    }
}

/// Log a message: `log!(Level, Kind, "format", args...)`.
#[macro_export]
macro_rules! log {
    ($level:ident, $kind:ident, $($arg:tt)*) => {
        $crate::log::log_message(
            $crate::log::LogLevel::$level,
            $crate::log::MessageKind::$kind,
            format_args!($($arg)*),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_ordering() {
        assert!(LogLevel::Brief < LogLevel::Normal);
        assert!(LogLevel::Normal < LogLevel::Verbose);
    }

    #[test]
    fn level_from_config_string() {
        #[derive(Deserialize)]
        struct Wrapper {
            level: LogLevel,
        }
        let w: Wrapper = toml::from_str("level = \"verbose\"").unwrap();
        assert_eq!(w.level, LogLevel::Verbose);
    }
}
