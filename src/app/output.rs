//! Report rendering.

use std::io::Write;

use colored::Colorize;
use serde::Serialize;

use super::hue::{hsl_to_rgb, score_to_hue};
use crate::config::{OutputFormat, HUE_LIGHTNESS, HUE_SATURATION};
use crate::error_handling::InputError;
use crate::rating::{DomainRater, RatingReport};

/// JSON Lines record: the rating report plus its display hue.
#[derive(Debug, Serialize)]
struct JsonReport {
    #[serde(flatten)]
    report: RatingReport,
    hue: f64,
}

/// Writes one rating in the requested format.
///
/// Plain output mirrors the interactive page: apex domain, pattern, score and
/// the message log. The score line is tinted by its hue when `color` is set.
///
/// # Errors
///
/// Returns `InputError` if writing or serialization fails.
pub fn write_report<W: Write>(
    out: &mut W,
    rater: &DomainRater,
    format: OutputFormat,
    color: bool,
) -> Result<(), InputError> {
    match format {
        OutputFormat::Plain => {
            let score_line = format!("Score: {} (lower scores are better)", rater.score());
            let score_line = if color {
                let (r, g, b) =
                    hsl_to_rgb(score_to_hue(rater.score()), HUE_SATURATION, HUE_LIGHTNESS);
                score_line.as_str().truecolor(r, g, b).bold().to_string()
            } else {
                score_line
            };
            writeln!(out, "{}", rater.domain())?;
            writeln!(out, "{}", rater.pattern())?;
            writeln!(out)?;
            writeln!(out, "{score_line}")?;
            writeln!(out)?;
            writeln!(out, "{}", rater.messages().join("\n"))?;
        }
        OutputFormat::Json => {
            let record = JsonReport {
                report: rater.report(),
                hue: score_to_hue(rater.score()),
            };
            serde_json::to_writer(&mut *out, &record)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
