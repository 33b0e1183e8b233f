//! Top-level domain classification.

use crate::config::{
    COMMERCIAL_TLDS, OFFICIAL_TLDS, RESTRICTED_CC_TLDS, RESTRICTED_CC_TLD_PENALTY,
    UNKNOWN_TLD_PENALTY, UNRESTRICTED_CC_TLD_PENALTY, WELL_KNOWN_TLDS, WELL_KNOWN_TLD_PENALTY,
};

/// Reputation bucket of a TLD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TldCategory {
    /// `com`
    Commercial,
    /// `net`, `org`
    WellKnown,
    /// `edu`, `gov`, `mil`, `int`
    Official,
    /// Country codes whose registries restrict registration
    RestrictedCountryCode,
    /// Any other two-letter TLD
    UnrestrictedCountryCode,
    /// Everything else
    Unknown,
}

impl TldCategory {
    /// Classifies a TLD by exact, case-insensitive match against the fixed tables.
    pub fn classify(tld: &str) -> Self {
        let tld = tld.to_ascii_lowercase();
        let tld = tld.as_str();
        if COMMERCIAL_TLDS.contains(&tld) {
            TldCategory::Commercial
        } else if WELL_KNOWN_TLDS.contains(&tld) {
            TldCategory::WellKnown
        } else if OFFICIAL_TLDS.contains(&tld) {
            TldCategory::Official
        } else if RESTRICTED_CC_TLDS.contains(&tld) {
            TldCategory::RestrictedCountryCode
        } else if tld.chars().count() == 2 {
            TldCategory::UnrestrictedCountryCode
        } else {
            TldCategory::Unknown
        }
    }

    /// Score added for this kind.
    pub fn penalty(self) -> i64 {
        match self {
            TldCategory::Commercial | TldCategory::Official => 0,
            TldCategory::WellKnown => WELL_KNOWN_TLD_PENALTY,
            TldCategory::RestrictedCountryCode => RESTRICTED_CC_TLD_PENALTY,
            TldCategory::UnrestrictedCountryCode => UNRESTRICTED_CC_TLD_PENALTY,
            TldCategory::Unknown => UNKNOWN_TLD_PENALTY,
        }
    }

    /// Report message for this kind.
    pub fn description(self) -> &'static str {
        match self {
            TldCategory::Commercial => {
                "Extremely well-known commercial TLD with a long reputation. Highly desirable."
            }
            TldCategory::WellKnown => "Well-known network or organization TLD. Desirable.",
            TldCategory::Official => {
                "Official governmental or educational TLD. Highly desirable, but only issued by the US government."
            }
            TldCategory::RestrictedCountryCode => {
                "Country-level TLD with some restrictions. Usually these are safe and reputable."
            }
            TldCategory::UnrestrictedCountryCode => {
                "Country-level TLD with few or no restrictions. These often are marked as spam websites."
            }
            TldCategory::Unknown => {
                "Fun or unknown TLD. Not desirable as these websites may be flagged as spam by some search engines."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_generic_tlds() {
        assert_eq!(TldCategory::classify("com"), TldCategory::Commercial);
        assert_eq!(TldCategory::classify("net"), TldCategory::WellKnown);
        assert_eq!(TldCategory::classify("org"), TldCategory::WellKnown);
        for tld in ["edu", "gov", "mil", "int"] {
            assert_eq!(TldCategory::classify(tld), TldCategory::Official);
        }
    }

    #[test]
    fn test_classify_country_codes() {
        for tld in RESTRICTED_CC_TLDS {
            assert_eq!(
                TldCategory::classify(tld),
                TldCategory::RestrictedCountryCode,
                "{tld}"
            );
        }
        assert_eq!(
            TldCategory::classify("io"),
            TldCategory::UnrestrictedCountryCode
        );
        assert_eq!(
            TldCategory::classify("tk"),
            TldCategory::UnrestrictedCountryCode
        );
    }

    #[test]
    fn test_classify_unknown() {
        assert_eq!(TldCategory::classify("xyz"), TldCategory::Unknown);
        assert_eq!(TldCategory::classify("c"), TldCategory::Unknown);
        assert_eq!(TldCategory::classify("museum"), TldCategory::Unknown);
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(TldCategory::classify("COM"), TldCategory::Commercial);
        assert_eq!(TldCategory::classify("Uk"), TldCategory::RestrictedCountryCode);
    }

    #[test]
    fn test_penalties() {
        assert_eq!(TldCategory::Commercial.penalty(), 0);
        assert_eq!(TldCategory::WellKnown.penalty(), 5);
        assert_eq!(TldCategory::Official.penalty(), 0);
        assert_eq!(TldCategory::RestrictedCountryCode.penalty(), 10);
        assert_eq!(TldCategory::UnrestrictedCountryCode.penalty(), 35);
        assert_eq!(TldCategory::Unknown.penalty(), 45);
    }
}
