//! Presentation layer.
//!
//! This module provides the command-line side of the rater: reading input
//! domains, rendering reports and mapping scores to colours.

pub mod hue;
pub mod input;
pub mod output;

// Re-export public API
pub use hue::{hsl_to_rgb, score_to_hue};
pub use input::{parse_domain_lines, read_domains};
pub use output::write_report;
