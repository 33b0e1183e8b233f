//! Domain parsing.
//!
//! This module decomposes a raw domain-like string into its components:
//! protocol, subdomain chain, main domain, top-level domain and trailing path.
//!
//! Key functions:
//! - `Domain::parse()` - Single anchored match against the domain grammar
//! - `Domain::apex_domain()` - `main.tld`
//! - `Domain::domain_without_directory()` - Everything except the trailing path

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::config::DOMAIN_PATTERN;

static DOMAIN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DOMAIN_PATTERN).expect("domain pattern must compile"));

/// A parsed web domain.
///
/// Fields are only meaningful when `is_valid()` returns `true`; an invalid
/// domain carries empty strings everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Domain {
    valid: bool,
    complete_domain: String,
    protocol: String,
    sub_domain: String,
    main_domain: String,
    tld: String,
    directory: String,
}

impl Domain {
    /// Parses a domain from a raw string.
    ///
    /// The whole input must match `(scheme://)?(subdomain.)?main.tld(/path)?`.
    /// Partial matches are rejected rather than truncated. Scheme, subdomain,
    /// main domain and TLD are lowercased; the path is kept verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// use domain_rater::Domain;
    ///
    /// let domain = Domain::parse("HTTPS://Shop.Example.com/Cart?id=1");
    /// assert!(domain.is_valid());
    /// assert_eq!(domain.sub_domain(), "shop");
    /// assert_eq!(domain.apex_domain(), "example.com");
    /// assert_eq!(domain.directory(), "/Cart?id=1");
    /// ```
    pub fn parse(input: &str) -> Self {
        let Some(caps) = DOMAIN_REGEX.captures(input) else {
            debug!("Input does not match the domain grammar: {input:?}");
            return Self::default();
        };

        let group = |i: usize| caps.get(i).map_or("", |m| m.as_str());

        let domain = Self {
            valid: true,
            complete_domain: group(0).to_string(),
            protocol: group(1).to_ascii_lowercase(),
            sub_domain: group(2).to_ascii_lowercase(),
            main_domain: group(3).to_ascii_lowercase(),
            tld: group(4).to_ascii_lowercase(),
            directory: group(5).to_string(),
        };
        debug!(
            "Parsed {input:?}: protocol={:?} subdomain={:?} main={:?} tld={:?} directory={:?}",
            domain.protocol, domain.sub_domain, domain.main_domain, domain.tld, domain.directory
        );
        domain
    }

    /// Whether the input matched the domain grammar.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The complete text that was matched (the whole input when valid).
    pub fn complete_domain(&self) -> &str {
        &self.complete_domain
    }

    /// The protocol, e.g. `https`. May be empty.
    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    /// The subdomain chain, e.g. `x.y` for `x.y.example.com`. May be empty.
    pub fn sub_domain(&self) -> &str {
        &self.sub_domain
    }

    /// The main domain label, e.g. `example`.
    pub fn main_domain(&self) -> &str {
        &self.main_domain
    }

    /// The top-level domain label, e.g. `com`.
    pub fn tld(&self) -> &str {
        &self.tld
    }

    /// Everything from the first `/` after the TLD, typically when a URL was pasted. May be empty.
    pub fn directory(&self) -> &str {
        &self.directory
    }

    /// The apex domain. Example: `example.com`
    pub fn apex_domain(&self) -> String {
        format!("{}.{}", self.main_domain, self.tld)
    }

    /// The full domain without the trailing directory.
    ///
    /// Example: `https://shop.example.com` for `https://shop.example.com/path`.
    pub fn domain_without_directory(&self) -> String {
        let mut out = String::new();
        if !self.protocol.is_empty() {
            out.push_str(&self.protocol);
            out.push_str("://");
        }
        if !self.sub_domain.is_empty() {
            out.push_str(&self.sub_domain);
            out.push('.');
        }
        out.push_str(&self.apex_domain());
        out
    }
}
