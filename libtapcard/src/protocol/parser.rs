// libtapcard/src/protocol/parser.rs

//! Bounds-checked readers over hex text. Offsets and lengths are in hex
//! characters; every helper returns an error instead of slicing out of range.

use crate::utils::parse_hex_byte;
use crate::{Error, Result};

/// Ensure the hex text has at least `min` characters.
pub fn ensure_len(hex: &str, min: usize) -> Result<()> {
    if hex.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: hex.len(),
        });
    }
    Ok(())
}

/// Return a sub-slice of `len` characters starting at `idx`.
pub fn slice_at(hex: &str, idx: usize, len: usize) -> Result<&str> {
    ensure_len(hex, idx + len)?;
    hex.get(idx..idx + len)
        .ok_or_else(|| Error::InvalidHex(format!("non-ascii text at offset {}", idx)))
}

/// Read the byte encoded by the hex pair at `idx`.
pub fn byte_at(hex: &str, idx: usize) -> Result<u8> {
    parse_hex_byte(slice_at(hex, idx, 2)?)
}

/// Width in hex characters of the BER tag starting at `idx`.
///
/// A first byte with all five low bits set announces subsequent tag bytes;
/// each subsequent byte with bit 8 set announces one more.
pub fn tag_width_at(hex: &str, idx: usize) -> Result<usize> {
    let first = byte_at(hex, idx)?;
    if first & 0x1f != 0x1f {
        return Ok(2);
    }
    let mut width = 2;
    loop {
        let next = byte_at(hex, idx + width)?;
        width += 2;
        if next & 0x80 == 0 {
            return Ok(width);
        }
    }
}

/// Decode the BER length field at `idx`.
///
/// Returns `(value_len_in_bytes, field_width_in_hex_chars)`. Short form and
/// the `81`/`82` long forms are accepted; anything else is malformed.
pub fn length_at(hex: &str, idx: usize) -> Result<(usize, usize)> {
    let first = byte_at(hex, idx)?;
    match first {
        0x00..=0x7f => Ok((first as usize, 2)),
        0x81 => Ok((byte_at(hex, idx + 2)? as usize, 4)),
        0x82 => {
            let hi = byte_at(hex, idx + 2)? as usize;
            let lo = byte_at(hex, idx + 4)? as usize;
            Ok(((hi << 8) | lo, 6))
        }
        _ => Err(Error::MalformedLength { offset: idx }),
    }
}
