// libtapcard/src/lib.rs

//! libtapcard
//!
//! Reads display card details (card number, expiration date, holder name)
//! from a contactless smart card: issues the application SELECT over a
//! `Transport`, decodes the BER-TLV File Control Information in the response,
//! and falls back to pattern heuristics when the structured data is missing.
#![warn(missing_docs)]

pub mod constants;
/// Crate-wide error type.
pub mod error;
pub mod extract;
/// Common imports for readers and decoders.
pub mod prelude;
/// Response APDU and BER-TLV decoding.
pub mod protocol;
/// Reader handle and read lifecycle.
pub mod session;
pub mod test_support;
/// Hardware abstraction and the mock transport.
pub mod transport;
/// Hex, decoded-text and card-detail value types.
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
