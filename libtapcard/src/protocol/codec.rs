// libtapcard/src/protocol/codec.rs

use log::{debug, warn};

use crate::extract::resolver;
use crate::protocol::ResponseApdu;
use crate::protocol::fci::locate_fci;
use crate::protocol::tlv::{TlvMap, walk_records};
use crate::types::{CardDetails, HexString};

/// Decode a raw SELECT response into display fields.
///
/// The trailing status word, when present, is split off first; a non-success
/// status is logged but decoding still proceeds on whatever data came back.
pub fn decode_response(raw: &[u8]) -> CardDetails {
    let apdu = ResponseApdu::from_raw(raw);
    if let Some(sw) = apdu.status() {
        if !sw.is_success() {
            warn!("card returned status {}", sw);
        }
    }
    decode_payload(&HexString::from_bytes(apdu.data()))
}

/// Structured FCI records for `hex`, or `None` when the template path is
/// absent or unreadable.
pub fn structured_records(hex: &HexString) -> Option<TlvMap> {
    match locate_fci(hex.as_str()) {
        Ok(fci) => Some(walk_records(fci.as_str())),
        Err(e) => {
            debug!("falling back to heuristics: {}", e);
            None
        }
    }
}

/// Decode an already hex-encoded payload.
pub fn decode_payload(hex: &HexString) -> CardDetails {
    let records = structured_records(hex);
    let text = hex.to_ascii();
    resolver::resolve(records.as_ref(), &text)
}
