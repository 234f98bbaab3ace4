// libtapcard/src/session/state.rs

use derive_more::Display;

/// Lifecycle of a single card read.
///
/// `Idle -> Requesting -> Exchanging -> (Succeeded | Failed) -> Idle`. The
/// return to `Idle` happens only after the technology session is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionState {
    /// No read in flight.
    #[default]
    #[display(fmt = "idle")]
    Idle,
    /// Acquiring the technology session.
    #[display(fmt = "requesting")]
    Requesting,
    /// SELECT sent, waiting for the response.
    #[display(fmt = "exchanging")]
    Exchanging,
    /// Response decoded into card details.
    #[display(fmt = "succeeded")]
    Succeeded,
    /// The hardware reported an error.
    #[display(fmt = "failed")]
    Failed,
}

impl SessionState {
    /// `Succeeded` or `Failed`.
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionState::Succeeded | SessionState::Failed)
    }
}
