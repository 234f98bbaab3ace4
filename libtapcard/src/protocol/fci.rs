// libtapcard/src/protocol/fci.rs

use log::debug;

use crate::constants::{TAG_APPLICATION_TEMPLATE, TAG_FCI_PROPRIETARY};
use crate::protocol::tlv::locate_tag;
use crate::types::HexString;
use crate::{Error, Result};

/// Nesting path from a SELECT response down to the FCI proprietary template.
pub const FCI_PATH: [&str; 2] = [TAG_APPLICATION_TEMPLATE, TAG_FCI_PROPRIETARY];

/// Follow `path` one template at a time, each lookup searching only inside
/// the previous one's value.
///
/// An absent tag anywhere on the path is `Error::NoStructuredData`; a
/// truncated template surfaces as `Error::TruncatedRecord`.
pub fn locate_path(path: &[&str], hex: &str) -> Result<HexString> {
    let mut scope = HexString::try_from(hex)?;
    for tag in path {
        scope = match locate_tag(tag, scope.as_str())? {
            Some(inner) => inner,
            None => {
                debug!("template {} absent", tag);
                return Err(Error::NoStructuredData);
            }
        };
    }
    Ok(scope)
}

/// Locate the FCI proprietary template payload.
pub fn locate_fci(hex: &str) -> Result<HexString> {
    locate_path(&FCI_PATH, hex)
}
