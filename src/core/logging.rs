//! Log level parsing and logger construction
//!
//! The logger is built as a `tracing::Dispatch` value rather than installed
//! globally. The dispatch travels inside the sync context and is attached to
//! each task and to the walker thread explicitly.

use std::fmt;
use std::io::IsTerminal;
use std::str::FromStr;
use tracing::level_filters::LevelFilter;
use tracing::Dispatch;

/// Severity names accepted by `--log-level`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Panic,
    Fatal,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Error returned for an unrecognized `--log-level` value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidLogLevel(String);

impl fmt::Display for InvalidLogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} is not a valid level (options: trace, debug, info, warn, warning, error, fatal, panic)",
            self.0
        )
    }
}

impl std::error::Error for InvalidLogLevel {}

impl FromStr for LogLevel {
    type Err = InvalidLogLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "panic" => Ok(LogLevel::Panic),
            "fatal" => Ok(LogLevel::Fatal),
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Resolves the effective level; `--debug` raises anything quieter than debug
    pub fn effective(self, debug: bool) -> Self {
        match self {
            LogLevel::Trace => LogLevel::Trace,
            _ if debug => LogLevel::Debug,
            level => level,
        }
    }

    /// Maps onto the tracing filter. `panic` and `fatal` collapse onto `error`,
    /// the most severe level tracing has.
    pub fn filter(self) -> LevelFilter {
        match self {
            LogLevel::Panic | LogLevel::Fatal | LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Builds the stdout logger for the given level
pub fn build_dispatch(level: LogLevel) -> Dispatch {
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .with_ansi(std::io::stdout().is_terminal())
        .without_time()
        .with_target(false)
        .with_max_level(level.filter())
        .finish();
    Dispatch::new(subscriber)
}
