//! domain_rater library: domain parsing and spam-risk rating
//!
//! This library parses domain-like strings into their components and rates how
//! likely the domain is to look like spam. Every component adds to a score
//! (lower is better) and to a human-readable breakdown.
//!
//! # Example
//!
//! ```
//! use domain_rater::DomainRater;
//!
//! let rater = DomainRater::new("https://shop.example.com/cart");
//! assert_eq!(rater.domain(), "example.com");
//! assert_eq!(rater.pattern(), "7L.com");
//! for message in rater.messages() {
//!     println!("{message}");
//! }
//! println!("Score: {}", rater.score());
//! ```

#![warn(missing_docs)]

pub mod app;
pub mod config;
mod domain;
mod error_handling;
pub mod initialization;
mod rating;

// Re-export public API
pub use app::score_to_hue;
pub use config::{Config, LogFormat, LogLevel, OutputFormat, INVALID_DOMAIN};
pub use domain::Domain;
pub use error_handling::{InitializationError, InputError};
pub use rating::{
    count_class, find_runs, CharClass, DomainRater, ProtocolKind, RatingReport, RunKind,
    TldCategory,
};
pub use run::{run, RunSummary};

mod run {
    use std::io::Write;

    use anyhow::{Context, Result};
    use log::info;

    use crate::app::{read_domains, write_report};
    use crate::config::Config;
    use crate::rating::DomainRater;

    /// Totals for one invocation.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct RunSummary {
        /// Number of domains rated
        pub total: usize,
        /// Domains that matched the grammar
        pub valid: usize,
        /// Domains that did not
        pub invalid: usize,
    }

    /// Rates every domain selected by `config` and writes the reports to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or a report cannot be written.
    /// Domains that fail to parse are not errors; they are reported as invalid.
    pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<RunSummary> {
        let domains = read_domains(config).context("Failed to read input domains")?;
        let mut summary = RunSummary::default();

        for (i, domain) in domains.iter().enumerate() {
            let rater = DomainRater::new(domain);
            if rater.parsed().is_valid() {
                summary.valid += 1;
            } else {
                summary.invalid += 1;
            }
            summary.total += 1;

            if i > 0 && config.format == crate::config::OutputFormat::Plain {
                writeln!(out).context("Failed to write report separator")?;
            }
            write_report(out, &rater, config.format, !config.no_color)
                .with_context(|| format!("Failed to write report for {domain:?}"))?;
        }

        info!(
            "Rated {} domain{} ({} valid, {} invalid)",
            summary.total,
            if summary.total == 1 { "" } else { "s" },
            summary.valid,
            summary.invalid
        );
        Ok(summary)
    }
}
