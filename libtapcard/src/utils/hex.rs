//! Hexadecimal helpers shared by the decoder and for debug output.
//!
//! Encoding is always lowercase and zero-padded. `hex_to_ascii` is the lenient
//! decoder used on card payloads: it clamps instead of failing.

use crate::{Error, Result};

/// Convert a byte slice to a lowercase hex string without separators.
///
/// Example: `&[0xde, 0xad]` -> `"dead"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        use std::fmt::Write;
        // write! never fails writing to a String
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Convert a byte slice to a lowercase hex string with a single space between
/// each byte.
///
/// Example: `&[0xde, 0xad]` -> `"de ad"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        use std::fmt::Write;
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Parse a single two-character hex pair.
pub fn parse_hex_byte(pair: &str) -> Result<u8> {
    if pair.len() != 2 || !pair.bytes().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::InvalidHex(format!("invalid hex pair '{}'", pair)));
    }
    u8::from_str_radix(pair, 16).map_err(|e| Error::InvalidHex(format!("'{}': {}", pair, e)))
}

/// Parse a hex string into bytes.
///
/// Accepts strings with or without ASCII whitespace and either case.
pub fn parse_hex(s: &str) -> Result<Vec<u8>> {
    let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();

    if cleaned.len() % 2 != 0 {
        return Err(Error::InvalidHex("hex string has odd length".to_string()));
    }

    let mut out = Vec::with_capacity(cleaned.len() / 2);
    let mut i = 0usize;
    while i < cleaned.len() {
        let pair = cleaned
            .get(i..i + 2)
            .ok_or_else(|| Error::InvalidHex(format!("non-ascii input at {}", i)))?;
        out.push(parse_hex_byte(pair)?);
        i += 2;
    }

    Ok(out)
}

/// Decode consecutive hex pairs to their character codes.
///
/// Stops at the first malformed pair and ignores a trailing odd nibble, so the
/// result is always the longest cleanly decodable prefix.
pub fn hex_to_ascii(hex: &str) -> String {
    let bytes = hex.as_bytes();
    let mut out = String::with_capacity(bytes.len() / 2);
    for pair in bytes.chunks_exact(2) {
        let Ok(pair) = std::str::from_utf8(pair) else {
            break;
        };
        match parse_hex_byte(pair) {
            Ok(b) => out.push(char::from(b)),
            Err(_) => break,
        }
    }
    out
}
