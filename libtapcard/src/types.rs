// libtapcard/src/types.rs

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use derive_more::Display;

use crate::utils::{bytes_to_hex, hex_to_ascii, parse_hex_byte};
use crate::{Error, Result};

/// HexString - lowercase, even-length hex rendering of a byte buffer.
///
/// Only constructible from bytes or from validated text, so every pair is a
/// valid hex byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Display)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct HexString(String);

impl HexString {
    /// Hex rendering of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(bytes_to_hex(bytes))
    }

    /// The hex text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in hex characters (always `2 * byte_len()`).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a zero-byte value.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Length in bytes.
    pub fn byte_len(&self) -> usize {
        self.0.len() / 2
    }

    /// Decode back to bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0
            .as_bytes()
            .chunks_exact(2)
            .filter_map(|pair| std::str::from_utf8(pair).ok())
            .filter_map(|pair| parse_hex_byte(pair).ok())
            .collect()
    }

    /// Character-code decoding of every byte.
    pub fn to_ascii(&self) -> DecodedText {
        DecodedText::from_hex(&self.0)
    }
}

impl TryFrom<&str> for HexString {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        if s.len() % 2 != 0 {
            return Err(Error::InvalidHex(format!(
                "odd length {} for '{}'",
                s.len(),
                s
            )));
        }
        if let Some(c) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(Error::InvalidHex(format!("non-hex character '{}'", c)));
        }
        Ok(Self(s.to_ascii_lowercase()))
    }
}

impl TryFrom<String> for HexString {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::try_from(s.as_str())
    }
}

impl FromStr for HexString {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_from(s)
    }
}

impl From<HexString> for String {
    fn from(h: HexString) -> Self {
        h.0
    }
}

impl AsRef<str> for HexString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Text obtained by decoding each hex pair of a payload to its character
/// code. The heuristic rules match against this, never against raw hex.
#[derive(Debug, Clone, PartialEq, Eq, Default, Display)]
pub struct DecodedText(String);

impl DecodedText {
    /// Decode `hex` pair by pair, clamping at the first malformed pair.
    pub fn from_hex(hex: &str) -> Self {
        Self(hex_to_ascii(hex))
    }

    /// The decoded text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Display fields extracted from a single card read. Any field may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct CardDetails {
    card_number: String,
    expiration_date: String,
    holder_name: String,
}

impl CardDetails {
    /// Build a record from already-rendered fields.
    pub fn new(
        card_number: impl Into<String>,
        expiration_date: impl Into<String>,
        holder_name: impl Into<String>,
    ) -> Self {
        Self {
            card_number: card_number.into(),
            expiration_date: expiration_date.into(),
            holder_name: holder_name.into(),
        }
    }

    /// Card number, or empty.
    pub fn card_number(&self) -> &str {
        &self.card_number
    }

    /// Expiration date digits, or empty.
    pub fn expiration_date(&self) -> &str {
        &self.expiration_date
    }

    /// Cardholder name, or empty.
    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    /// True when no field could be extracted.
    pub fn is_empty(&self) -> bool {
        self.card_number.is_empty() && self.expiration_date.is_empty() && self.holder_name.is_empty()
    }

    /// Card number with everything but the last four characters replaced by `*`.
    pub fn masked_card_number(&self) -> String {
        let n = self.card_number.chars().count();
        if n <= 4 {
            return self.card_number.clone();
        }
        let visible: String = self.card_number.chars().skip(n - 4).collect();
        format!("{}{}", "*".repeat(n - 4), visible)
    }
}

impl fmt::Display for CardDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "card {} exp {} holder {}",
            self.masked_card_number(),
            self.expiration_date,
            self.holder_name
        )
    }
}
