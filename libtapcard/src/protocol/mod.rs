// libtapcard/src/protocol/mod.rs

pub mod apdu;
/// Full decode pipeline from raw response to card details.
pub mod codec;
/// Locates the FCI proprietary template.
pub mod fci;
pub mod parser;
/// Tag lookup and flat record walk.
pub mod tlv;

pub use apdu::{ResponseApdu, StatusWord};
pub use codec::{decode_payload, decode_response};
pub use fci::{FCI_PATH, locate_fci, locate_path};
pub use tlv::{TlvMap, TlvRecord, locate_tag, walk_records};
