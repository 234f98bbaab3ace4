//! Timeouts for the card exchange.
//!
//! Decoding has no timeout of its own. The transceive timeout bounds one
//! command/response round trip; the read deadline bounds a whole read when
//! it is awaited through the async reader.

use std::time::Duration;

/// Transceive timeout in milliseconds used when the reader config leaves it
/// unset.
pub const DEFAULT_TRANSCEIVE_TIMEOUT_MS: u64 = 1000;

/// Read deadline as a multiple of the transceive timeout.
pub const READ_DEADLINE_FACTOR: u32 = 2;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Deadline for a whole read whose exchange uses `transceive_timeout_ms`.
pub fn read_deadline(transceive_timeout_ms: u64) -> Duration {
    ms(transceive_timeout_ms).saturating_mul(READ_DEADLINE_FACTOR)
}
