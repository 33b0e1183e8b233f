//! Logger initialization.
//!
//! Logs are written to stderr so that reports on stdout stay clean for piping.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::{ColoredString, Colorize};
use log::{Level, LevelFilter};

/// Initializes the logger with the specified level and format.
///
/// `RUST_LOG` is read first; the provided `level` overrides it for this crate.
/// `Plain` prints `target [LEVEL] message` with a coloured level, `Json` prints
/// one `{"ts","level","target","msg"}` object per line.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Show how every component was scored
/// domain_rater example.com --log-level trace
///
/// # Structured logs
/// domain_rater example.com --log-level debug --log-format json
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder
        .filter_level(level)
        .filter_module("domain_rater", level)
        .target(env_logger::Target::Stderr);

    match format {
        LogFormat::Json => builder.format(|buf, record| {
            let line = json_line(
                chrono::Utc::now().timestamp_millis(),
                record.level(),
                record.target(),
                &record.args().to_string(),
            );
            writeln!(buf, "{line}")
        }),
        LogFormat::Plain => builder.format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                record.target().cyan(),
                level_label(record.level()),
                record.args()
            )
        }),
    };

    // try_init() so repeated initialization (tests) returns an error instead of panicking
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// One JSON log record. The message is escaped by `serde_json`.
fn json_line(timestamp_ms: i64, level: Level, target: &str, msg: &str) -> String {
    let msg = serde_json::to_string(msg).unwrap_or_else(|_| "\"\"".into());
    format!("{{\"ts\":{timestamp_ms},\"level\":\"{level}\",\"target\":\"{target}\",\"msg\":{msg}}}")
}

fn level_label(level: Level) -> ColoredString {
    let label = level.as_str();
    match level {
        Level::Error => label.red(),
        Level::Warn => label.yellow(),
        Level::Info => label.green(),
        Level::Debug | Level::Trace => label.dimmed(),
    }
}
