//! Rating constants.
//!
//! This module defines the weights, lookup tables and bounds used by the domain
//! parser and the rating passes.

/// Value returned by `domain()` and `pattern()` when the input failed to parse.
pub const INVALID_DOMAIN: &str = "Invalid domain.";

/// Header emitted when the input does not match the domain grammar.
pub const INVALID_PATTERN_HEADER: &str = "Invalid domain name pattern.";

/// Domain grammar: `(scheme://)?(subdomain.)?main.tld(/path)?`, anchored at both ends.
///
/// Letter classes are spelled out in both cases instead of using `(?i)`, which
/// would let Unicode case folding admit characters such as the Kelvin sign.
/// The path stops at any line terminator (`\n`, `\r`, U+2028, U+2029).
pub const DOMAIN_PATTERN: &str =
    r"^(?:([A-Za-z]+)://)?(?:([A-Za-z0-9.\-]+)\.)?([A-Za-z0-9\-]+)\.([A-Za-z0-9\-]+)(/[^\n\r\x{2028}\x{2029}]*)?$";

// Name rating
/// Characters treated as vowels when looking for runs. `y` counts as a vowel here.
pub const VOWELS: &str = "aeiouy";
/// Minimum length of a vowel or consonant run before it is penalized.
pub const MIN_RUN_LENGTH: usize = 3;
/// Penalty per detected run group (applied once per run, on the summary line).
pub const RUN_GROUP_WEIGHT: i64 = 10;
/// Penalty per character of each individual run.
pub const RUN_CHAR_WEIGHT: i64 = 5;

/// Most frequent English letters.
pub const CHEAP_LETTERS: &str = "etaoinshrdl";
/// Score per cheap letter.
pub const CHEAP_WEIGHT: i64 = 10;
/// Moderately common letters.
pub const MEDIUM_LETTERS: &str = "cumwfgyp";
/// Score per medium letter.
pub const MEDIUM_WEIGHT: i64 = 15;
/// Rare letters.
pub const EXPENSIVE_LETTERS: &str = "bvkxjqz";
/// Score per expensive letter.
pub const EXPENSIVE_WEIGHT: i64 = 20;
/// Weight for digits and hyphens.
pub const SPECIAL_WEIGHT: i64 = 20;

// Protocol rating
/// Penalty for an unsecured `http` scheme.
pub const HTTP_PENALTY: i64 = 5;

// TLD rating
/// Penalty for `net` and `org`.
pub const WELL_KNOWN_TLD_PENALTY: i64 = 5;
/// Penalty for country codes with registration restrictions.
pub const RESTRICTED_CC_TLD_PENALTY: i64 = 10;
/// Penalty for any other two-letter TLD.
pub const UNRESTRICTED_CC_TLD_PENALTY: i64 = 35;
/// Penalty for everything else.
pub const UNKNOWN_TLD_PENALTY: i64 = 45;

/// Best-known commercial TLD.
pub const COMMERCIAL_TLDS: &[&str] = &["com"];
/// Well-known network and organization TLDs.
pub const WELL_KNOWN_TLDS: &[&str] = &["net", "org"];
/// Governmental, educational and international TLDs.
pub const OFFICIAL_TLDS: &[&str] = &["edu", "gov", "mil", "int"];

/// Country-code TLDs whose registries restrict who may register.
pub const RESTRICTED_CC_TLDS: &[&str] = &[
    "au", // Australia
    "br", // Brazil
    "ca", // Canada
    "eu", // European Union
    "fr", // France
    "ie", // Ireland
    "it", // Italy
    "mc", // Monaco
    "mg", // Madagascar
    "mo", // Macau
    "my", // Malaysia
    "no", // Norway
    "re", // Reunion
    "sa", // Saudi Arabia
    "sk", // Slovakia
    "sm", // San Marino
    "ua", // Ukraine
    "uk", // United Kingdom
    "us", // United States
    "va", // Vatican City
];

// Score colour
/// Score mapped to the greenest hue.
pub const HUE_SCORE_MIN: f64 = 0.0;
/// Score mapped to pure red.
pub const HUE_SCORE_MAX: f64 = 1000.0;
/// Hue before clamping at `HUE_SCORE_MIN`.
pub const HUE_AT_SCORE_MIN: f64 = 140.0;
/// Hue at `HUE_SCORE_MAX`.
pub const HUE_AT_SCORE_MAX: f64 = 0.0;
/// Hue is clamped to [0, 120] (red to green).
pub const HUE_CLAMP_MIN: f64 = 0.0;
/// Upper hue bound.
pub const HUE_CLAMP_MAX: f64 = 120.0;
/// Display colour saturation.
pub const HUE_SATURATION: f64 = 1.0;
/// Display colour lightness.
pub const HUE_LIGHTNESS: f64 = 0.45;
