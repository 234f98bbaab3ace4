use libtapcard::protocol::{decode_payload, decode_response};
use libtapcard::test_support::{ascii_hex, fci_response, tlv_hex};
use libtapcard::{HexString, utils};

use crate::common::fixtures;

#[test]
fn full_fci_resolves_all_fields() {
    crate::common::init_logger();
    let d = decode_response(&fixtures::full_fci_response());
    assert_eq!(d.card_number(), fixtures::SAMPLE_PAN);
    assert_eq!(d.expiration_date(), fixtures::SAMPLE_EXPIRY);
    assert_eq!(d.holder_name(), fixtures::SAMPLE_HOLDER);
}

#[test]
fn structured_value_beats_heuristic_match_elsewhere() {
    // a different digit run sits in the payload ahead of the templates
    let records = tlv_hex("5a", &ascii_hex("4111111111111111"));
    let templates = utils::bytes_to_hex(&fci_response(&records));
    let hex = format!("{}{}", ascii_hex("9999888877776666"), templates);
    let d = decode_payload(&HexString::try_from(hex.as_str()).unwrap());
    assert_eq!(d.card_number(), "4111111111111111");
}

#[test]
fn no_templates_falls_back_to_heuristics() {
    let d = decode_response(&fixtures::unstructured_response());
    assert_eq!(d.card_number(), fixtures::SAMPLE_PAN);
    assert_eq!(d.expiration_date(), "2705");
    assert_eq!(d.holder_name(), "");
}

#[test]
fn partial_fci_mixes_structured_and_heuristic() {
    // holder name decodes, then the PAN record is truncated; the PAN digits
    // still appear in the decoded text and are picked up by the heuristic
    let records = format!(
        "{}5a14{}",
        tlv_hex("5f20", &ascii_hex("JANE ROE")),
        ascii_hex("4111111111111111")
    );
    let fci = format!("a5{:02x}{}", records.len() / 2, records);
    let outer = format!("6f{:02x}{}", fci.len() / 2, fci);
    let d = decode_payload(&HexString::try_from(outer.as_str()).unwrap());
    assert_eq!(d.holder_name(), "JANE ROE");
    assert_eq!(d.card_number(), "4111111111111111");
}

#[test]
fn garbage_response_yields_empty_details() {
    let d = decode_response(&[0x6f, 0xff, 0x01]);
    assert!(d.is_empty());
}

#[test]
fn hex_helpers_agree_with_hex_crate() {
    let raw = fixtures::full_fci_response();
    let ours = utils::bytes_to_hex(&raw);
    assert_eq!(ours, hex::encode(&raw));
    assert_eq!(utils::parse_hex(&ours).unwrap(), hex::decode(&ours).unwrap());
}
