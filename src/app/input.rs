//! Reading domains to rate.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::config::Config;
use crate::error_handling::InputError;

/// Path value that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Collects domains from line-oriented input.
///
/// Lines are trimmed; blank lines and lines starting with `#` are skipped.
pub fn parse_domain_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut domains = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            debug!("Skipping line {}: {trimmed:?}", number + 1);
            continue;
        }
        domains.push(trimmed.to_string());
    }
    Ok(domains)
}

/// Returns the domains selected by the configuration.
///
/// - a positional domain is rated as-is (even when empty)
/// - `--file PATH` reads every line of the file
/// - `--file -` or no input at all reads standard input
///
/// # Errors
///
/// Returns `InputError` if the file or stdin cannot be read.
pub fn read_domains(config: &Config) -> Result<Vec<String>, InputError> {
    if let Some(domain) = &config.domain {
        return Ok(vec![domain.clone()]);
    }

    match config.file.as_deref() {
        Some(path) if path != Path::new(STDIN_PATH) => {
            let file = File::open(path).map_err(|source| InputError::FileReadError {
                path: path.to_path_buf(),
                source,
            })?;
            parse_domain_lines(BufReader::new(file)).map_err(|source| {
                InputError::FileReadError {
                    path: path.to_path_buf(),
                    source,
                }
            })
        }
        _ => {
            debug!("Reading domains from stdin");
            parse_domain_lines(io::stdin().lock()).map_err(InputError::StdinReadError)
        }
    }
}
