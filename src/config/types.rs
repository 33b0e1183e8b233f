//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Text report: domain, pattern, score and the message log
    Plain,
    /// One JSON object per rated domain (JSON Lines)
    Json,
}

/// Command-line options and configuration.
///
/// This struct is automatically generated by `clap` from the field attributes.
/// All options have defaults, so it can also be built programmatically.
///
/// # Examples
///
/// ```bash
/// # Rate a single domain
/// domain_rater https://shop.example.com
///
/// # Rate every line of a file as JSON Lines
/// domain_rater --file domains.txt --format json
///
/// # Read domains from stdin
/// cat domains.txt | domain_rater
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "domain_rater",
    about = "Parses domain names and rates how spammy they look (lower scores are better)."
)]
pub struct Config {
    /// Domain to rate (e.g. https://www.example.com/path)
    pub domain: Option<String>,

    /// File with one domain per line (blank lines and # comments are skipped)
    #[arg(long, value_parser, conflicts_with = "domain")]
    pub file: Option<PathBuf>,

    /// Output format: plain|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Disable the score colour in plain output
    #[arg(long)]
    pub no_color: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domain: None,
            file: None,
            format: OutputFormat::Plain,
            no_color: false,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_log_level_ordering() {
        let error = log::LevelFilter::from(LogLevel::Error);
        let warn = log::LevelFilter::from(LogLevel::Warn);
        let info = log::LevelFilter::from(LogLevel::Info);
        let debug = log::LevelFilter::from(LogLevel::Debug);
        let trace = log::LevelFilter::from(LogLevel::Trace);

        assert!(error < warn);
        assert!(warn < info);
        assert!(info < debug);
        assert!(debug < trace);
    }

    #[test]
    fn test_log_format_debug() {
        assert_eq!(format!("{:?}", LogFormat::Plain), "Plain");
        assert_eq!(format!("{:?}", LogFormat::Json), "Json");
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.domain.is_none());
        assert!(config.file.is_none());
        assert_eq!(config.format, OutputFormat::Plain);
        assert!(!config.no_color);
        assert_eq!(
            log::LevelFilter::from(config.log_level),
            log::LevelFilter::Warn
        );
    }

    #[test]
    fn test_config_parse_matches_default() {
        // Parsing with no arguments should produce the same values as Default
        let parsed = Config::try_parse_from(["domain_rater"]).unwrap();
        let default = Config::default();
        assert_eq!(parsed.domain, default.domain);
        assert_eq!(parsed.file, default.file);
        assert_eq!(parsed.format, default.format);
        assert_eq!(parsed.no_color, default.no_color);
    }

    #[test]
    fn test_config_domain_and_file_conflict() {
        let result = Config::try_parse_from(["domain_rater", "example.com", "--file", "x.txt"]);
        assert!(result.is_err());
    }
}
