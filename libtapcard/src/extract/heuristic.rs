//! Pattern-based fallback extraction over the ASCII-decoded payload.
//!
//! Approximate on purpose: it only has to produce something displayable when
//! the structured path yields nothing.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{CARD_NUMBER_MAX_DIGITS, CARD_NUMBER_MIN_DIGITS, EXPIRATION_DATE_DIGITS};
use crate::types::DecodedText;

static DIGIT_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new("[0-9]+").expect("digit-run pattern is valid"));

/// Matches the first maximal run of ASCII digits whose length lies in
/// `min..=max`. Runs shorter or longer than the bounds are skipped whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitRunRule {
    name: &'static str,
    min: usize,
    max: usize,
}

impl DigitRunRule {
    /// 12 to 19 digits.
    pub const CARD_NUMBER: Self = Self::new(
        "card-number",
        CARD_NUMBER_MIN_DIGITS,
        CARD_NUMBER_MAX_DIGITS,
    );

    /// Exactly four digits.
    pub const EXPIRATION_DATE: Self = Self::new(
        "expiration-date",
        EXPIRATION_DATE_DIGITS,
        EXPIRATION_DATE_DIGITS,
    );

    /// A rule accepting runs of `min..=max` digits.
    pub const fn new(name: &'static str, min: usize, max: usize) -> Self {
        Self { name, min, max }
    }

    /// Name used in log output.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// First qualifying run in `text`.
    pub fn find<'a>(&self, text: &'a DecodedText) -> Option<&'a str> {
        DIGIT_RUN
            .find_iter(text.as_str())
            .map(|m| m.as_str())
            .find(|run| (self.min..=self.max).contains(&run.len()))
    }
}

/// Both heuristic candidates for one payload. The two rules run
/// independently; no de-duplication is done between them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeuristicCandidates {
    /// Match of [`DigitRunRule::CARD_NUMBER`].
    pub card_number: Option<String>,
    /// Match of [`DigitRunRule::EXPIRATION_DATE`].
    pub expiration_date: Option<String>,
}

/// Run both rules over `text`.
pub fn scan(text: &DecodedText) -> HeuristicCandidates {
    HeuristicCandidates {
        card_number: DigitRunRule::CARD_NUMBER.find(text).map(str::to_owned),
        expiration_date: DigitRunRule::EXPIRATION_DATE.find(text).map(str::to_owned),
    }
}
