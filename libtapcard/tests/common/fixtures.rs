// fixtures.rs: commonly used card responses and payloads

use libtapcard::test_support::{ascii_hex, fci_response, tlv_hex};

pub const SAMPLE_PAN: &str = "4111111111111111";
pub const SAMPLE_EXPIRY: &str = "2612";
pub const SAMPLE_HOLDER: &str = "JOHN DOE";

/// FCI records carrying all three display fields as ASCII.
pub fn full_records_hex() -> String {
    let mut records = String::new();
    records.push_str(&tlv_hex("50", &ascii_hex("VISA CREDIT")));
    records.push_str(&tlv_hex("5a", &ascii_hex(SAMPLE_PAN)));
    records.push_str(&tlv_hex("5f24", &ascii_hex(SAMPLE_EXPIRY)));
    records.push_str(&tlv_hex("5f20", &ascii_hex(SAMPLE_HOLDER)));
    records
}

/// Complete SELECT response with the full record set and status 9000.
pub fn full_fci_response() -> Vec<u8> {
    fci_response(&full_records_hex())
}

/// Response with no templates: the PAN and a date embedded between
/// non-digit bytes, followed by status 9000.
pub fn unstructured_response() -> Vec<u8> {
    let mut raw = vec![0x01, 0x02, 0xff];
    raw.extend_from_slice(SAMPLE_PAN.as_bytes());
    raw.extend_from_slice(&[0x00, b'/', 0x00]);
    raw.extend_from_slice(b"2705");
    raw.extend_from_slice(&[0x90, 0x00]);
    raw
}
