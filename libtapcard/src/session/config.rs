// libtapcard/src/session/config.rs

use crate::utils::DEFAULT_TRANSCEIVE_TIMEOUT_MS;

/// Reader settings fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Timeout handed to every `Transport::transceive` call.
    pub transceive_timeout_ms: u64,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            transceive_timeout_ms: DEFAULT_TRANSCEIVE_TIMEOUT_MS,
        }
    }
}
