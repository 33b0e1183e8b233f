//! Tests for file input (comments, blank lines) and the run summary.

use std::io::Write;

use domain_rater::{run, Config, OutputFormat, RunSummary};
use tempfile::NamedTempFile;

fn write_domains(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write test file");
    file
}

fn file_config(file: &NamedTempFile, format: OutputFormat) -> Config {
    Config {
        file: Some(file.path().to_path_buf()),
        format,
        no_color: true,
        ..Default::default()
    }
}

#[test]
fn test_file_with_comments_and_blanks() {
    let file = write_domains(
        "# domains to check\nexample.com\n\n   \nhttp://www.google.com\n# trailing comment\nnot a domain\n",
    );
    let mut out = Vec::new();
    let summary = run(&file_config(&file, OutputFormat::Json), &mut out).unwrap();

    assert_eq!(
        summary,
        RunSummary {
            total: 3,
            valid: 2,
            invalid: 1
        }
    );

    let text = String::from_utf8(out).unwrap();
    let records: Vec<serde_json::Value> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["domain"], "example.com");
    assert_eq!(records[0]["score"], 167);
    assert_eq!(records[1]["domain"], "google.com");
    assert_eq!(records[1]["score"], 114);
    assert_eq!(records[2]["domain"], "Invalid domain.");
    assert_eq!(records[2]["input"], "not a domain");
    assert_eq!(records[2]["score"], 0);
}

#[test]
fn test_plain_reports_are_separated() {
    let file = write_domains("a.com\nb.org\n");
    let mut out = Vec::new();
    run(&file_config(&file, OutputFormat::Plain), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("a.com\n1L.com\n\nScore: "));
    assert!(text.contains("\n\nb.org\n1L.org\n\nScore: "));
}

#[test]
fn test_empty_file_rates_nothing() {
    let file = write_domains("# nothing here\n\n");
    let mut out = Vec::new();
    let summary = run(&file_config(&file, OutputFormat::Plain), &mut out).unwrap();
    assert_eq!(summary.total, 0);
    assert!(out.is_empty());
}

#[test]
fn test_missing_file_fails() {
    let config = Config {
        file: Some("/no/such/dir/domains.txt".into()),
        ..Default::default()
    };
    let mut out = Vec::new();
    let err = run(&config, &mut out).unwrap_err();
    assert!(format!("{err:#}").contains("/no/such/dir/domains.txt"));
}
