//! End-to-end properties of parsing and rating through the public API.

use domain_rater::{
    count_class, find_runs, CharClass, Domain, DomainRater, RunKind, TldCategory, INVALID_DOMAIN,
};
use strum::IntoEnumIterator;

const SAMPLES: &[&str] = &[
    "a.b",
    "aa.com",
    "xyzzy.com",
    "example.io",
    "http://www.google.com",
    "https://shop.example.com/path",
    "ftp://files.queueing.org",
    "HTTPS://Mixed.Case-Domain99.NET/Keep/Case",
    "x.y.z.strengths.museum",
    "a..b.c",
    "-lead.trail-.gov",
    "1234.5678.uk",
];

/// Replays the name-rating steps independently of the rater.
fn expected_name_score(name: &str) -> i64 {
    let len = name.chars().count() as i64;
    let mut score = len * len;
    for kind in RunKind::iter() {
        let runs = find_runs(name, kind);
        score += 10 * runs.len() as i64;
        score += runs.iter().map(|r| 5 * r.len() as i64).sum::<i64>();
    }
    for class in CharClass::iter() {
        score += class.weight() * count_class(name, class) as i64;
    }
    score
}

/// Replays the whole rating from the parsed components.
fn expected_score(domain: &Domain) -> i64 {
    let mut score = if domain.protocol() == "http" { 5 } else { 0 };
    if domain.sub_domain() != "www" {
        score += domain
            .sub_domain()
            .split('.')
            .filter(|part| !part.is_empty())
            .map(expected_name_score)
            .sum::<i64>();
    }
    score += expected_name_score(domain.main_domain());
    score += domain.tld().len() as i64 + TldCategory::classify(domain.tld()).penalty();
    score
}

#[test]
fn test_score_matches_independent_replay() {
    for input in SAMPLES {
        let rater = DomainRater::new(input);
        assert!(rater.parsed().is_valid(), "{input}");
        assert_eq!(rater.score(), expected_score(rater.parsed()), "{input}");
    }
}

#[test]
fn test_invalid_inputs_report_sentinel() {
    for input in ["", "com", "a..b", "http:/example.com", "ex_ample.com", "1.2.3.4:80"] {
        let rater = DomainRater::new(input);
        assert_eq!(rater.domain(), INVALID_DOMAIN, "{input}");
        assert_eq!(rater.pattern(), INVALID_DOMAIN, "{input}");
        assert_eq!(rater.score(), 0, "{input}");
    }
}

#[test]
fn test_apex_and_domain_without_directory() {
    let domain = Domain::parse("https://shop.example.com/path");
    assert_eq!(domain.apex_domain(), "example.com");
    assert_eq!(domain.domain_without_directory(), "https://shop.example.com");
}

#[test]
fn test_tld_io_pass_totals_37() {
    let with_io = DomainRater::new("example.io").score();
    let main_only = DomainRater::new("example.com").score() - 3;
    assert_eq!(with_io - main_only, 37);
}

#[test]
fn test_patterns() {
    assert_eq!(DomainRater::new("abc123.com").pattern(), "LLLNNN.com");
    assert_eq!(DomainRater::new("12345.com").pattern(), "5N.com");
    assert_eq!(DomainRater::new("ABCDE.com").pattern(), "5L.com");
}

#[test]
fn test_raters_are_independent() {
    for input in SAMPLES {
        let first = DomainRater::new(input);
        let _other = DomainRater::new("something.else.entirely.xyz");
        let second = DomainRater::new(input);
        assert_eq!(first.score(), second.score(), "{input}");
        assert_eq!(first.messages(), second.messages(), "{input}");
    }
}

#[test]
fn test_raters_across_threads() {
    let handles: Vec<_> = SAMPLES
        .iter()
        .map(|input| std::thread::spawn(move || DomainRater::new(input).report()))
        .collect();
    for (handle, input) in handles.into_iter().zip(SAMPLES) {
        let report = handle.join().unwrap();
        assert_eq!(report, DomainRater::new(input).report());
    }
}
