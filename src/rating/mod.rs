//! Domain rating.
//!
//! `DomainRater` parses a raw string and runs four passes over the result, in
//! order: protocol, subdomain, main domain, TLD. Each pass opens with a header
//! and appends scored detail messages. Lower scores are better.
//!
//! Message layout:
//! - header: `""`, text, `""`
//! - detail: `"\t[+n] text"` (or `"\t[-n] text"` for negative deltas)

mod name;
mod protocol;
mod tld;

use log::{debug, trace};
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::config::{INVALID_DOMAIN, INVALID_PATTERN_HEADER, RUN_CHAR_WEIGHT, RUN_GROUP_WEIGHT};
use crate::domain::Domain;

pub use name::{count_class, find_runs, CharClass, RunKind};
pub use protocol::ProtocolKind;
pub use tld::TldCategory;

/// Serializable snapshot of a finished rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatingReport {
    /// The raw input that was rated
    pub input: String,
    /// Whether the input matched the domain grammar
    pub valid: bool,
    /// Apex domain, or `"Invalid domain."`
    pub domain: String,
    /// Shape signature of the main domain, or `"Invalid domain."`
    pub pattern: String,
    /// Accumulated score (lower is better)
    pub score: i64,
    /// Ordered message log
    pub messages: Vec<String>,
}

/// Rates a domain name.
///
/// All work happens in `new`; afterwards the rater is read-only.
///
/// # Examples
///
/// ```
/// use domain_rater::DomainRater;
///
/// let rater = DomainRater::new("https://example.com");
/// assert_eq!(rater.domain(), "example.com");
/// assert_eq!(rater.pattern(), "7L.com");
/// assert!(rater.score() > 0);
///
/// let invalid = DomainRater::new("not a domain");
/// assert_eq!(invalid.domain(), "Invalid domain.");
/// assert_eq!(invalid.score(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct DomainRater {
    input: String,
    domain: Domain,
    score: i64,
    messages: Vec<String>,
}

impl DomainRater {
    /// Parses `input` and rates it.
    pub fn new(input: &str) -> Self {
        let mut rater = Self {
            input: input.to_string(),
            domain: Domain::parse(input),
            score: 0,
            messages: Vec::new(),
        };

        if rater.domain.is_valid() {
            rater.add_header(rater.domain.domain_without_directory());
            rater.rate_protocol();
            rater.rate_sub_domain();
            rater.rate_main_domain();
            rater.rate_tld();
        } else {
            rater.add_header(INVALID_PATTERN_HEADER);
        }

        debug!(
            "Rated {input:?}: score={} ({} messages)",
            rater.score,
            rater.messages.len()
        );
        rater
    }

    /// The apex domain (`main.tld`), or `"Invalid domain."`.
    pub fn domain(&self) -> String {
        if self.domain.is_valid() {
            self.domain.apex_domain()
        } else {
            INVALID_DOMAIN.to_string()
        }
    }

    /// The accumulated score. Lower scores are better.
    pub fn score(&self) -> i64 {
        self.score
    }

    /// The ordered message log.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// The parsed domain this rating was built from.
    pub fn parsed(&self) -> &Domain {
        &self.domain
    }

    /// Shape signature of the apex domain.
    ///
    /// `5L.com` for an all-letter main domain, `5N.com` for all digits,
    /// otherwise letters become `L`, digits `N` and anything else is kept
    /// (`abc-123` gives `LLL-NNN.com`).
    pub fn pattern(&self) -> String {
        if !self.domain.is_valid() {
            return INVALID_DOMAIN.to_string();
        }

        let main = self.domain.main_domain();
        let tld = self.domain.tld();
        if main.chars().all(|c| c.is_ascii_alphabetic()) {
            format!("{}L.{tld}", main.chars().count())
        } else if main.chars().all(|c| c.is_ascii_digit()) {
            format!("{}N.{tld}", main.chars().count())
        } else {
            let shape: String = main
                .chars()
                .map(|c| {
                    if c.is_ascii_alphabetic() {
                        'L'
                    } else if c.is_ascii_digit() {
                        'N'
                    } else {
                        c
                    }
                })
                .collect();
            format!("{shape}.{tld}")
        }
    }

    /// Snapshot of everything a presentation layer needs.
    pub fn report(&self) -> RatingReport {
        RatingReport {
            input: self.input.clone(),
            valid: self.domain.is_valid(),
            domain: self.domain(),
            pattern: self.pattern(),
            score: self.score,
            messages: self.messages.clone(),
        }
    }

    fn add_header(&mut self, message: impl Into<String>) {
        self.messages.push(String::new());
        self.messages.push(message.into());
        self.messages.push(String::new());
    }

    fn add_message(&mut self, message: impl AsRef<str>, score_change: i64) {
        let message = message.as_ref();
        trace!("[{score_change:+}] {message}");
        self.score += score_change;
        self.messages.push(format!("\t[{score_change:+}] {message}"));
    }

    fn rate_protocol(&mut self) {
        self.add_header(format!("Domain Protocol ({})", self.domain.protocol()));
        let kind = ProtocolKind::classify(self.domain.protocol());
        self.add_message(kind.description(), kind.penalty());
    }

    fn rate_sub_domain(&mut self) {
        let sub_domain = self.domain.sub_domain().to_string();
        self.add_header(format!("Subdomain ({sub_domain})"));
        match sub_domain.as_str() {
            "" => self.add_message("There is no subdomain.", 0),
            "www" => self.add_message("Default subdomain.", 0),
            _ => {
                for part in sub_domain.split('.') {
                    if part.is_empty() {
                        self.add_message("Malformed subdomain.", 0);
                    } else {
                        self.rate_name(part);
                    }
                }
            }
        }
    }

    fn rate_main_domain(&mut self) {
        let main = self.domain.main_domain().to_string();
        self.add_header(format!("Main Domain ({main})"));
        self.rate_name(&main);
    }

    fn rate_tld(&mut self) {
        let tld = self.domain.tld().to_string();
        self.add_header(format!("Top Level Domain ({tld})"));
        self.add_message("Number of characters in TLD", tld.chars().count() as i64);
        let category = TldCategory::classify(&tld);
        self.add_message(category.description(), category.penalty());
    }

    /// Scores a single label: length, hyphen placement, letter runs and
    /// weighted character classes.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty. Callers only pass labels taken from a
    /// successful parse, so an empty one is a bug in the caller.
    fn rate_name(&mut self, name: &str) {
        assert!(!name.is_empty(), "rate_name called with an empty label");

        let length = name.chars().count();
        let length_score = length as i64;
        self.add_message(
            format!("Length of {name}: {length} characters"),
            length_score * length_score,
        );

        if name.starts_with('-') || name.ends_with('-') {
            self.add_message("Invalid identifier. Cannot start or end with a hyphen!", 0);
        }

        for kind in RunKind::iter() {
            let runs = find_runs(name, kind);
            if runs.is_empty() {
                continue;
            }
            self.add_message(
                format!(
                    "{} groups of 3 or more {}: {}",
                    runs.len(),
                    kind.plural(),
                    runs.join(", ")
                ),
                RUN_GROUP_WEIGHT * runs.len() as i64,
            );
            for run in runs {
                let run_length = run.chars().count();
                self.add_message(
                    format!("{run_length} {} in sequence: {run}", kind.plural()),
                    RUN_CHAR_WEIGHT * run_length as i64,
                );
            }
        }

        for class in CharClass::iter() {
            let count = count_class(name, class);
            if count > 0 {
                self.add_message(class.describe(count), class.weight() * count as i64);
            }
        }
    }
}
