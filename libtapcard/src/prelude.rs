// libtapcard/src/prelude.rs

pub use crate::extract::{Field, Strategy};
pub use crate::protocol::{StatusWord, TlvMap, TlvRecord, decode_payload, decode_response};
pub use crate::session::{
    Initialized, Reader, ReaderBuilder, ReaderConfig, SessionState, Uninitialized,
};
pub use crate::transport::Transport;
pub use crate::{CardDetails, DecodedText, Error, HexString, Result};

#[cfg(feature = "async")]
pub use crate::session::{AsyncReader, CardSource};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, hex_to_ascii, ms, parse_hex};
