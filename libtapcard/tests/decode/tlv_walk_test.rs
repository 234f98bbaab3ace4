use libtapcard::protocol::walk_records;
use libtapcard::test_support::tlv_hex;

#[test]
fn map_contains_exactly_the_built_records() {
    let triples = [("50", "41424344"), ("87", "01"), ("5a", "34313131"), ("9f38", "9f6604")];
    let payload: String = triples.iter().map(|(t, v)| tlv_hex(t, v)).collect();

    let map = walk_records(&payload);
    assert_eq!(map.len(), triples.len());
    assert!(!map.is_partial());
    for (tag, value) in triples {
        assert_eq!(map.get(tag).unwrap().as_str(), value);
    }
    let tags: Vec<_> = map.tags().collect();
    assert_eq!(tags, vec!["50", "87", "5a", "9f38"]);
}

#[test]
fn repeated_tag_keeps_first_occurrence() {
    let payload = format!(
        "{}{}{}",
        tlv_hex("5a", "3131"),
        tlv_hex("50", "41"),
        tlv_hex("5a", "3232")
    );
    let map = walk_records(&payload);
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("5a").unwrap().as_str(), "3131");
}

#[test]
fn truncation_keeps_records_decoded_before_it() {
    let payload = format!("{}{}5a10313131", tlv_hex("50", "41"), tlv_hex("87", "01"));
    let map = walk_records(&payload);
    assert!(map.is_partial());
    assert_eq!(map.len(), 2);
    assert!(map.contains("50"));
    assert!(map.contains("87"));
    assert!(!map.contains("5a"));
}

#[test]
fn dangling_tag_without_length() {
    let payload = format!("{}5a", tlv_hex("50", "41"));
    let map = walk_records(&payload);
    assert!(map.is_partial());
    assert_eq!(map.len(), 1);
}

#[test]
fn empty_payload_is_empty_map() {
    let map = walk_records("");
    assert!(map.is_empty());
    assert!(!map.is_partial());
}

#[test]
fn record_accessors() {
    let map = walk_records(&tlv_hex("5f20", "4a4f"));
    let rec = &map.records()[0];
    assert_eq!(rec.tag(), "5f20");
    assert_eq!(rec.length(), 2);
    assert_eq!(rec.value().as_str(), "4a4f");
}
