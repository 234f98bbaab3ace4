// libtapcard/src/session/async_reader.rs

//! Async facade over the blocking reader. Only compiled with the `async`
//! feature.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::warn;

use crate::session::handle::{Initialized, Reader};
use crate::types::CardDetails;
use crate::utils::read_deadline;
use crate::{Error, Result};

/// Something a UI layer can await a card read from.
#[async_trait]
pub trait CardSource: Send + Sync {
    /// Read the card currently in the field.
    async fn read_card(&self) -> Result<CardDetails>;
}

/// Runs reads on tokio's blocking pool under an overall deadline.
pub struct AsyncReader {
    inner: Arc<Reader<Initialized>>,
    timeout: Duration,
}

impl AsyncReader {
    /// Wrap a reader. The deadline defaults to `read_deadline` of its
    /// transceive timeout.
    pub fn new(reader: Reader<Initialized>) -> Self {
        let timeout = read_deadline(reader.config().transceive_timeout_ms);
        Self {
            inner: Arc::new(reader),
            timeout,
        }
    }

    /// Override the overall read deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The wrapped blocking reader.
    pub fn reader(&self) -> &Reader<Initialized> {
        &self.inner
    }
}

#[async_trait]
impl CardSource for AsyncReader {
    /// On deadline expiry returns `Error::Timeout`. The abandoned blocking
    /// read keeps running and still releases its session when it returns.
    async fn read_card(&self) -> Result<CardDetails> {
        let reader = Arc::clone(&self.inner);
        let task = tokio::task::spawn_blocking(move || reader.read_card());
        match tokio::time::timeout(self.timeout, task).await {
            Ok(Ok(outcome)) => outcome,
            Ok(Err(join)) => Err(Error::Transport(format!("read task failed: {}", join))),
            Err(_) => {
                warn!("card read exceeded {:?}", self.timeout);
                Err(Error::Timeout)
            }
        }
    }
}
