// libtapcard/src/transport/mock.rs

use std::collections::VecDeque;
use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex, PoisonError};

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Calls observed by a `MockTransport`. Shared so tests can inspect it after
/// a reader has taken ownership of the transport.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MockLog {
    /// `start` calls.
    pub started: usize,
    /// `request_technology` calls, including failed ones.
    pub acquired: usize,
    /// `release_technology` calls.
    pub released: usize,
    /// `shutdown` calls.
    pub shut_down: usize,
    /// Every command passed to `transceive`, in order.
    pub sent: Vec<Vec<u8>>,
    /// Timeout passed with each command.
    pub timeouts: Vec<u64>,
}

/// Mock transport for unit tests. It records calls and returns queued
/// responses; an empty queue behaves like a card that never answers.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: VecDeque<Result<Vec<u8>>>,
    /// Testing hook: number of request_technology calls that should fail
    technology_failures: usize,
    log: Arc<Mutex<MockLog>>,
    gate: Option<(Sender<()>, Receiver<()>)>,
}

impl MockTransport {
    /// Mock with an empty response queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for the next transceive.
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push_back(Ok(resp));
    }

    /// Queue a hardware error as the next transceive result.
    pub fn push_error(&mut self, err: Error) {
        self.responses.push_back(Err(err));
    }

    /// Set how many subsequent request_technology calls should fail.
    pub fn set_technology_failures(&mut self, n: usize) {
        self.technology_failures = n;
    }

    /// Make transceive signal `entered` and then block until `proceed`
    /// receives, so tests can hold an exchange in flight.
    pub fn set_gate(&mut self, entered: Sender<()>, proceed: Receiver<()>) {
        self.gate = Some((entered, proceed));
    }

    /// Shared handle to the call log.
    pub fn log(&self) -> Arc<Mutex<MockLog>> {
        Arc::clone(&self.log)
    }

    fn record<F: FnOnce(&mut MockLog)>(&self, f: F) {
        let mut log = self.log.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut log);
    }
}

impl Transport for MockTransport {
    fn start(&mut self) -> Result<()> {
        self.record(|l| l.started += 1);
        Ok(())
    }

    fn request_technology(&mut self) -> Result<()> {
        self.record(|l| l.acquired += 1);
        if self.technology_failures > 0 {
            self.technology_failures -= 1;
            return Err(Error::TechnologyUnavailable);
        }
        Ok(())
    }

    fn transceive(&mut self, command: &[u8], timeout_ms: u64) -> Result<Vec<u8>> {
        self.record(|l| {
            l.sent.push(command.to_vec());
            l.timeouts.push(timeout_ms);
        });
        if let Some((entered, proceed)) = &self.gate {
            let _ = entered.send(());
            let _ = proceed.recv();
        }
        self.responses.pop_front().unwrap_or(Err(Error::Timeout))
    }

    fn release_technology(&mut self) -> Result<()> {
        self.record(|l| l.released += 1);
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        self.record(|l| l.shut_down += 1);
        Ok(())
    }
}
