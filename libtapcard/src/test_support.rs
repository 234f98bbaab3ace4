//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup and response
//! construction so tests across the crate and tests/ directory can reuse
//! the same logic.
#![allow(dead_code)]

use crate::session::{Initialized, Reader};
use crate::transport::mock::MockTransport;
use crate::transport::Transport;
use crate::utils::bytes_to_hex;
use crate::Result;

/// Encode one short-form TLV record as hex. Values longer than 127 bytes use
/// the `81` long form.
#[doc(hidden)]
pub fn tlv_hex(tag: &str, value_hex: &str) -> String {
    let len = value_hex.len() / 2;
    if len > 0x7f {
        format!("{}81{:02x}{}", tag, len, value_hex)
    } else {
        format!("{}{:02x}{}", tag, len, value_hex)
    }
}

/// Hex of the ASCII bytes of `s`.
#[doc(hidden)]
pub fn ascii_hex(s: &str) -> String {
    bytes_to_hex(s.as_bytes())
}

/// Build a SELECT response `6f [ a5 [ records ] ] 90 00` from pre-encoded
/// record hex.
#[doc(hidden)]
pub fn fci_response(records_hex: &str) -> Vec<u8> {
    let fci = tlv_hex("a5", records_hex);
    let outer = tlv_hex("6f", &fci);
    let mut raw = crate::utils::parse_hex(&outer).unwrap_or_default();
    raw.extend_from_slice(&crate::constants::SW_SUCCESS);
    raw
}

/// Build a MockTransport pre-seeded with the given responses and return it
/// boxed as a Transport trait object.
#[doc(hidden)]
pub fn boxed_mock_with_responses(responses: Vec<Vec<u8>>) -> Box<dyn Transport + Send> {
    let mut mock = MockTransport::new();
    for resp in responses {
        mock.push_response(resp);
    }
    Box::new(mock)
}

/// Convenience: create and initialize a Reader<Initialized> backed by a
/// MockTransport pre-seeded with the provided responses.
#[doc(hidden)]
pub fn initialized_mock_reader(responses: Vec<Vec<u8>>) -> Result<Reader<Initialized>> {
    let boxed = boxed_mock_with_responses(responses);
    Reader::new_with_transport(boxed).initialize()
}
