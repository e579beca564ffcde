//! Definition resolution for acronym letters

use crate::banks::{CORPORATE_JARGON, CREED_QUOTES, GENERAL_CATEGORY};
use rand::Rng;

/// How a letter's definition is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// User types their own definition; the service returns an empty string
    Manual,
    /// Random corporate-jargon word starting with the letter
    Corporate,
    /// Random Creed quote, letter ignored
    Creed,
}

impl Mode {
    /// Parse a mode string. Unrecognized values map to `Manual`; an unknown
    /// mode behaves identically to manual mode, not as an error.
    pub fn parse(s: &str) -> Self {
        match s {
            "corporate" => Mode::Corporate,
            "creed" => Mode::Creed,
            _ => Mode::Manual,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Manual => "manual",
            Mode::Corporate => "corporate",
            Mode::Creed => "creed",
        }
    }
}

/// Resolve a definition for `letter` according to `mode`.
///
/// Total for every input: manual mode yields an empty string, the other modes
/// always yield a non-empty one. No letter validation is performed;
/// multi-character and empty strings pass through uppercased.
pub fn resolve(letter: &str, mode: Mode) -> String {
    match mode {
        Mode::Corporate => corporate_definition(letter),
        Mode::Creed => creed_definition(letter),
        Mode::Manual => String::new(),
    }
}

/// Pick a corporate-jargon word for a letter.
///
/// Matches against the flattened pool of all categories, prefix-wise after
/// uppercasing both sides. When nothing matches (Q, X, Z have no natural
/// words), falls back to a random pick from the general category only, not the
/// full pool.
pub fn corporate_definition(letter: &str) -> String {
    let letter = letter.to_uppercase();
    let mut rng = rand::thread_rng();

    let matching: Vec<&str> = CORPORATE_JARGON
        .all_words()
        .filter(|word| word.to_uppercase().starts_with(&letter))
        .collect();

    if !matching.is_empty() {
        return matching[rng.gen_range(0..matching.len())].to_string();
    }

    let general = CORPORATE_JARGON
        .category(GENERAL_CATEGORY)
        .unwrap_or_default();
    general[rng.gen_range(0..general.len())].to_string()
}

/// Pick a Creed quote. The letter is ignored by design.
pub fn creed_definition(_letter: &str) -> String {
    let mut rng = rand::thread_rng();
    CREED_QUOTES[rng.gen_range(0..CREED_QUOTES.len())].to_string()
}
