// libtapcard/src/constants.rs
//! Domain-fixed command frame and tag constants used across the crate

/// Application SELECT command header: CLA INS P1 P2.
pub const SELECT_COMMAND: [u8; 4] = [0x00, 0xA4, 0x04, 0x00];

/// Outer application template (FCI template container).
pub const TAG_APPLICATION_TEMPLATE: &str = "6f";

/// Inner file control information proprietary template.
pub const TAG_FCI_PROPRIETARY: &str = "a5";

/// Application primary account number.
pub const TAG_CARD_NUMBER: &str = "5a";

/// Application expiration date.
pub const TAG_EXPIRATION_DATE: &str = "5f24";

/// Cardholder name.
pub const TAG_HOLDER_NAME: &str = "5f20";

/// Status word reported by the card on normal completion.
pub const SW_SUCCESS: [u8; 2] = [0x90, 0x00];

/// Fewest digits a card number may have.
pub const CARD_NUMBER_MIN_DIGITS: usize = 12;

/// Most digits a card number may have.
pub const CARD_NUMBER_MAX_DIGITS: usize = 19;

/// Exact digit-run length for the expiration date heuristic (`YYMM`).
pub const EXPIRATION_DATE_DIGITS: usize = 4;

/// Longest structured expiration date (`YYMMDD`).
pub const EXPIRATION_DATE_MAX_DIGITS: usize = 6;
