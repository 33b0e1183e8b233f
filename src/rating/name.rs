//! Character classification for the name-rating procedure.
//!
//! Two independent views of a label:
//! - runs of three or more vowels or consonants (`find_runs`)
//! - per-character weighted classes (`count_class`)
//!
//! A character inside a run is still counted by its class; the penalties compound.

use strum_macros::EnumIter;

use crate::config::{
    CHEAP_LETTERS, CHEAP_WEIGHT, EXPENSIVE_LETTERS, EXPENSIVE_WEIGHT, MEDIUM_LETTERS,
    MEDIUM_WEIGHT, MIN_RUN_LENGTH, SPECIAL_WEIGHT, VOWELS,
};

/// Kinds of letter runs that are penalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum RunKind {
    /// `a e i o u y`
    Vowel,
    /// Every other ASCII letter
    Consonant,
}

impl RunKind {
    /// Whether `c` belongs to this kind of run (case-insensitive).
    pub fn contains(self, c: char) -> bool {
        if !c.is_ascii_alphabetic() {
            return false;
        }
        let is_vowel = VOWELS.contains(c.to_ascii_lowercase());
        match self {
            RunKind::Vowel => is_vowel,
            RunKind::Consonant => !is_vowel,
        }
    }

    /// Plural noun used in report messages.
    pub fn plural(self) -> &'static str {
        match self {
            RunKind::Vowel => "vowels",
            RunKind::Consonant => "consonants",
        }
    }
}

/// Weighted character classes. The letter sets partition the alphabet;
/// digits and hyphens form their own class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum CharClass {
    /// `etaoinshrdl`
    Cheap,
    /// `cumwfgyp`
    Medium,
    /// `bvkxjqz`
    Expensive,
    /// Digits and hyphens
    Special,
}

impl CharClass {
    /// The class `c` falls into, if any (case-insensitive).
    pub fn of(c: char) -> Option<Self> {
        let c = c.to_ascii_lowercase();
        if c.is_ascii_digit() || c == '-' {
            Some(CharClass::Special)
        } else if !c.is_ascii_lowercase() {
            None
        } else if CHEAP_LETTERS.contains(c) {
            Some(CharClass::Cheap)
        } else if MEDIUM_LETTERS.contains(c) {
            Some(CharClass::Medium)
        } else if EXPENSIVE_LETTERS.contains(c) {
            Some(CharClass::Expensive)
        } else {
            None
        }
    }

    /// Score per matching character.
    pub fn weight(self) -> i64 {
        match self {
            CharClass::Cheap => CHEAP_WEIGHT,
            CharClass::Medium => MEDIUM_WEIGHT,
            CharClass::Expensive => EXPENSIVE_WEIGHT,
            CharClass::Special => SPECIAL_WEIGHT,
        }
    }

    /// Report message for `count` matching characters.
    pub fn describe(self, count: usize) -> String {
        match self {
            CharClass::Cheap => format!("{count} characters from [{CHEAP_LETTERS}]"),
            CharClass::Medium => format!("{count} characters from [{MEDIUM_LETTERS}]"),
            CharClass::Expensive => format!("{count} characters from [{EXPENSIVE_LETTERS}]"),
            CharClass::Special => format!("{count} numbers and hyphens"),
        }
    }
}

/// Returns every maximal run of at least `MIN_RUN_LENGTH` characters of `kind`,
/// in order of appearance.
pub fn find_runs(name: &str, kind: RunKind) -> Vec<&str> {
    let mut runs = Vec::new();
    let mut start: Option<usize> = None;
    let mut len = 0;

    for (i, c) in name.char_indices() {
        if kind.contains(c) {
            if start.is_none() {
                start = Some(i);
                len = 0;
            }
            len += 1;
        } else if let Some(s) = start.take() {
            if len >= MIN_RUN_LENGTH {
                runs.push(&name[s..i]);
            }
        }
    }
    if let Some(s) = start {
        if len >= MIN_RUN_LENGTH {
            runs.push(&name[s..]);
        }
    }
    runs
}

/// Number of characters of `name` in `class`. Every character counts, not runs.
pub fn count_class(name: &str, class: CharClass) -> usize {
    name.chars()
        .filter(|&c| CharClass::of(c) == Some(class))
        .count()
}
