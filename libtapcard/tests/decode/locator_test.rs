use libtapcard::Error;
use libtapcard::protocol::{locate_fci, locate_tag};
use libtapcard::test_support::tlv_hex;

#[test]
fn locate_tag_ignores_mid_byte_match() {
    // bytes 06 f0 contain "6f" only across a byte boundary
    let hex = format!("06f0{}", tlv_hex("6f", "aabb"));
    let v = locate_tag("6f", &hex).unwrap().unwrap();
    assert_eq!(v.as_str(), "aabb");
}

#[test]
fn locate_tag_scope_is_the_given_text() {
    let inner = tlv_hex("a5", "01");
    let outer = tlv_hex("6f", &inner);
    let scope = locate_tag("6f", &outer).unwrap().unwrap();
    assert_eq!(scope.as_str(), inner);
    assert_eq!(
        locate_tag("a5", scope.as_str()).unwrap().unwrap().as_str(),
        "01"
    );
}

#[test]
fn locate_tag_uppercase_input() {
    let v = locate_tag("A5", "6F03A50122").unwrap().unwrap();
    assert_eq!(v.as_str(), "22");
}

#[test]
fn declared_span_past_end_is_truncated_record() {
    match locate_tag("6f", "6f0a0102") {
        Err(Error::TruncatedRecord {
            declared,
            available,
            ..
        }) => {
            assert_eq!(declared, 20);
            assert_eq!(available, 4);
        }
        other => panic!("expected TruncatedRecord, got: {:?}", other),
    }
}

#[test]
fn absent_templates_are_no_structured_data() {
    assert_eq!(locate_fci("").unwrap_err(), Error::NoStructuredData);
    assert_eq!(
        locate_fci(&tlv_hex("6f", &tlv_hex("84", "a0000000031010"))).unwrap_err(),
        Error::NoStructuredData
    );
}

#[test]
fn long_form_outer_length() {
    let filler = "00".repeat(0x90);
    let inner = tlv_hex("a5", "5a0111");
    let outer = tlv_hex("6f", &format!("{}{}", tlv_hex("84", &filler[..0x7a * 2]), inner));
    assert!(outer.starts_with("6f81"));
    assert_eq!(locate_fci(&outer).unwrap().as_str(), "5a0111");
}
