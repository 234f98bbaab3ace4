//! Utilities for libtapcard: small, reusable helpers used across the crate.
//!
//! Hex conversion for the decoder and debug output, plus timeout values.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
