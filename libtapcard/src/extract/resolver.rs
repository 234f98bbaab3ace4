// libtapcard/src/extract/resolver.rs

use std::ops::RangeInclusive;

use derive_more::Display;
use log::debug;

use crate::constants::{
    CARD_NUMBER_MAX_DIGITS, CARD_NUMBER_MIN_DIGITS, EXPIRATION_DATE_DIGITS,
    EXPIRATION_DATE_MAX_DIGITS, TAG_CARD_NUMBER, TAG_EXPIRATION_DATE, TAG_HOLDER_NAME,
};
use crate::extract::heuristic::DigitRunRule;
use crate::protocol::tlv::TlvMap;
use crate::types::{CardDetails, DecodedText, HexString};

/// Display fields produced by a read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Field {
    /// Primary account number, tag `5a`.
    #[display(fmt = "card number")]
    CardNumber,
    /// Expiration date, tag `5f24`.
    #[display(fmt = "expiration date")]
    ExpirationDate,
    /// Cardholder name, tag `5f20`.
    #[display(fmt = "holder name")]
    HolderName,
}

/// A single way of obtaining a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Value of the field's tag in the FCI record map.
    Structured,
    /// Digit-run match over the decoded payload text.
    Heuristic(DigitRunRule),
}

const CARD_NUMBER_STRATEGIES: [Strategy; 2] = [
    Strategy::Structured,
    Strategy::Heuristic(DigitRunRule::CARD_NUMBER),
];
const EXPIRATION_DATE_STRATEGIES: [Strategy; 2] = [
    Strategy::Structured,
    Strategy::Heuristic(DigitRunRule::EXPIRATION_DATE),
];
const HOLDER_NAME_STRATEGIES: [Strategy; 1] = [Strategy::Structured];

impl Field {
    /// Every field, in `CardDetails` order.
    pub const ALL: [Field; 3] = [Field::CardNumber, Field::ExpirationDate, Field::HolderName];

    /// FCI tag carrying this field.
    pub fn tag(self) -> &'static str {
        match self {
            Field::CardNumber => TAG_CARD_NUMBER,
            Field::ExpirationDate => TAG_EXPIRATION_DATE,
            Field::HolderName => TAG_HOLDER_NAME,
        }
    }

    /// Strategies in priority order. The first one yielding a value wins.
    pub fn strategies(self) -> &'static [Strategy] {
        match self {
            Field::CardNumber => &CARD_NUMBER_STRATEGIES,
            Field::ExpirationDate => &EXPIRATION_DATE_STRATEGIES,
            Field::HolderName => &HOLDER_NAME_STRATEGIES,
        }
    }

    /// Plausible digit counts for numeric fields; `None` for text fields.
    fn digit_bounds(self) -> Option<RangeInclusive<usize>> {
        match self {
            Field::CardNumber => Some(CARD_NUMBER_MIN_DIGITS..=CARD_NUMBER_MAX_DIGITS),
            Field::ExpirationDate => Some(EXPIRATION_DATE_DIGITS..=EXPIRATION_DATE_MAX_DIGITS),
            Field::HolderName => None,
        }
    }
}

impl Strategy {
    /// Run this strategy for `field`. `None` when it finds nothing.
    pub fn extract(&self, field: Field, map: Option<&TlvMap>, text: &DecodedText) -> Option<String> {
        match self {
            Strategy::Structured => map
                .and_then(|m| m.get(field.tag()))
                .and_then(|value| render_value(field, value)),
            Strategy::Heuristic(rule) => rule.find(text).map(str::to_owned),
        }
    }
}

/// Render a structured value for display. Empty renderings count as absent.
fn render_value(field: Field, value: &HexString) -> Option<String> {
    let rendered = match field.digit_bounds() {
        Some(bounds) => render_digits(field, value, &bounds),
        None => render_text(value),
    };
    rendered.filter(|s| !s.is_empty())
}

/// Numeric fields: ASCII digits (trailing spaces and NULs dropped) first,
/// then packed BCD with trailing `f` padding dropped. Whichever reading is
/// used must be all digits with a count inside `bounds`.
fn render_digits(field: Field, value: &HexString, bounds: &RangeInclusive<usize>) -> Option<String> {
    let text = value.to_ascii();
    let ascii = text.as_str().trim_end_matches([' ', '\0']);
    if is_digit_run(ascii, bounds) {
        return Some(ascii.to_owned());
    }
    let bcd = value.as_str().trim_end_matches('f');
    if is_digit_run(bcd, bounds) {
        return Some(bcd.to_owned());
    }
    debug!("{} value {} is neither ASCII nor BCD digits", field, value);
    None
}

fn is_digit_run(s: &str, bounds: &RangeInclusive<usize>) -> bool {
    bounds.contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}

/// Text fields: ASCII with control characters dropped and trailing spaces trimmed.
fn render_text(value: &HexString) -> Option<String> {
    let text: String = value
        .to_ascii()
        .as_str()
        .chars()
        .filter(|c| !c.is_control())
        .collect();
    Some(text.trim_end().to_owned())
}

/// Resolve one field by trying its strategies in order; empty when none match.
pub fn resolve_field(field: Field, map: Option<&TlvMap>, text: &DecodedText) -> String {
    field
        .strategies()
        .iter()
        .find_map(|strategy| {
            let value = strategy.extract(field, map, text);
            if value.is_some() {
                debug!("{} resolved via {:?}", field, strategy);
            }
            value
        })
        .unwrap_or_default()
}

/// Build the final record. Never fails: missing fields are empty strings.
pub fn resolve(map: Option<&TlvMap>, text: &DecodedText) -> CardDetails {
    CardDetails::new(
        resolve_field(Field::CardNumber, map, text),
        resolve_field(Field::ExpirationDate, map, text),
        resolve_field(Field::HolderName, map, text),
    )
}
