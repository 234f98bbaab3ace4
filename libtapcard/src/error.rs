// libtapcard/src/error.rs

use thiserror::Error;

/// Errors raised anywhere in the crate.
///
/// The decode variants never reach the caller of a read. They degrade to
/// partial or empty fields instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No card answered in the RF field.
    #[error("no card present in the field")]
    NoCard,

    /// The card left the field mid-exchange.
    #[error("card removed during exchange")]
    CardRemoved,

    /// The card or the read deadline did not answer in time.
    #[error("operation timed out")]
    Timeout,

    /// The ISO-DEP technology session could not be acquired.
    #[error("technology session unavailable")]
    TechnologyUnavailable,

    /// Any other failure reported by the transport.
    #[error("transport error: {0}")]
    Transport(String),

    /// A read was requested while another was in flight.
    #[error("a card read is already in progress")]
    ReadInProgress,

    /// A length field declares more hex characters than remain.
    #[error("truncated record for tag {tag}: declared {declared} hex chars, {available} available")]
    TruncatedRecord {
        /// Tag of the truncated record.
        tag: String,
        /// Declared value length in hex characters.
        declared: usize,
        /// Hex characters actually left.
        available: usize,
    },

    /// Length byte outside the short, `81` and `82` forms.
    #[error("malformed length field at offset {offset}")]
    MalformedLength {
        /// Offset of the length field in hex characters.
        offset: usize,
    },

    /// A template on the FCI path is absent.
    #[error("no structured data in response")]
    NoStructuredData,

    /// Text that is not an even run of hex digits.
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// Input shorter than a read required.
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Characters needed.
        expected: usize,
        /// Characters present.
        actual: usize,
    },
}

impl Error {
    /// True for conditions raised by the hardware layer. These are the only
    /// errors a read surfaces to its caller; decode-layer conditions degrade
    /// to partial or empty fields instead.
    pub fn is_hardware(&self) -> bool {
        matches!(
            self,
            Error::NoCard
                | Error::CardRemoved
                | Error::Timeout
                | Error::TechnologyUnavailable
                | Error::Transport(_)
        )
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
