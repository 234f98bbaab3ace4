// libtapcard/src/session/builder.rs

use crate::session::handle::{Reader, TransitionObserver, Uninitialized};
use crate::session::{ReaderConfig, SessionState};
use crate::transport::Transport;
use crate::{Error, Result};

/// Helper to construct a Reader with optional configuration.
#[derive(Default)]
pub struct ReaderBuilder {
    transport: Option<Box<dyn Transport + Send>>,
    config: ReaderConfig,
    observer: Option<TransitionObserver>,
}

impl ReaderBuilder {
    /// Builder with no transport and the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport + Send>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Timeout handed to every transceive call.
    pub fn transceive_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.config.transceive_timeout_ms = timeout_ms;
        self
    }

    /// Register a callback for session state changes, e.g. to drive a
    /// "scanning" indicator.
    pub fn on_transition<F>(mut self, observer: F) -> Self
    where
        F: Fn(SessionState) + Send + Sync + 'static,
    {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Consume the builder and return an uninitialized Reader.
    /// Requires a transport to be provided; otherwise returns
    /// TechnologyUnavailable.
    pub fn build_uninitialized(self) -> Result<Reader<Uninitialized>> {
        let transport = self.transport.ok_or(Error::TechnologyUnavailable)?;
        let mut reader = Reader::with_config(transport, self.config);
        if let Some(observer) = self.observer {
            reader.set_observer(observer);
        }
        Ok(reader)
    }
}
