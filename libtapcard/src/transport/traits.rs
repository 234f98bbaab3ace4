// libtapcard/src/transport/traits.rs

use crate::Result;

/// Transport trait abstracts the contactless hardware away from the session
/// and decode logic.
///
/// Implementations report hardware conditions with the hardware variants of
/// `Error` (`NoCard`, `CardRemoved`, `Timeout`, `TechnologyUnavailable`,
/// `Transport`).
pub trait Transport {
    /// Bring the hardware up. Called once when a reader is initialized.
    fn start(&mut self) -> Result<()> {
        Ok(())
    }

    /// Acquire the ISO-DEP technology session for the card in the field.
    fn request_technology(&mut self) -> Result<()>;

    /// Send a command APDU and wait up to `timeout_ms` for the response.
    fn transceive(&mut self, command: &[u8], timeout_ms: u64) -> Result<Vec<u8>>;

    /// Release the technology session. Called on every exit path of a read,
    /// including a failed `request_technology`.
    fn release_technology(&mut self) -> Result<()>;

    /// Tear the hardware down. Called once by `Reader::shutdown`.
    fn shutdown(&mut self) -> Result<()> {
        Ok(())
    }
}
