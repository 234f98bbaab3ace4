// libtapcard/src/session/handle.rs

use std::marker::PhantomData;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{debug, warn};

use crate::constants::SELECT_COMMAND;
use crate::protocol::codec;
use crate::session::{ReaderConfig, SessionState};
use crate::transport::Transport;
use crate::types::CardDetails;
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// Type-state marker: hardware not started yet.
pub struct Uninitialized;
/// Type-state marker: hardware started, reads allowed.
pub struct Initialized;

/// Callback invoked on every session state change.
pub type TransitionObserver = Box<dyn Fn(SessionState) + Send + Sync>;

/// Reader handle that owns the hardware transport and coordinates reads.
///
/// At most one read is in flight at a time; the hardware is started by
/// `initialize` and torn down by `shutdown`.
pub struct Reader<State = Uninitialized> {
    transport: Mutex<Box<dyn Transport + Send>>,
    config: ReaderConfig,
    state: Mutex<SessionState>,
    in_progress: AtomicBool,
    observer: Option<TransitionObserver>,
    _state: PhantomData<State>,
}

impl<State> Reader<State> {
    /// Settings fixed at construction.
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Current session state.
    pub fn state(&self) -> SessionState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn set_state(&self, next: SessionState) {
        let prev = {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            std::mem::replace(&mut *state, next)
        };
        debug!("session {} -> {}", prev, next);
        if let Some(observer) = &self.observer {
            observer(next);
        }
    }

    fn lock_transport(&self) -> MutexGuard<'_, Box<dyn Transport + Send>> {
        self.transport.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Reader<Uninitialized> {
    /// Create a Reader from an existing Transport instance with the default
    /// configuration.
    pub fn new_with_transport(transport: Box<dyn Transport + Send>) -> Self {
        Self::with_config(transport, ReaderConfig::default())
    }

    /// Create a Reader from a transport and explicit settings.
    pub fn with_config(transport: Box<dyn Transport + Send>, config: ReaderConfig) -> Self {
        Self {
            transport: Mutex::new(transport),
            config,
            state: Mutex::new(SessionState::Idle),
            in_progress: AtomicBool::new(false),
            observer: None,
            _state: PhantomData,
        }
    }

    pub(crate) fn set_observer(&mut self, observer: TransitionObserver) {
        self.observer = Some(observer);
    }

    /// Start the hardware. Returns an initialized Reader on success.
    pub fn initialize(self) -> Result<Reader<Initialized>> {
        self.lock_transport().start()?;
        debug!("reader initialized");

        let Reader {
            transport,
            config,
            state,
            in_progress,
            observer,
            ..
        } = self;
        Ok(Reader {
            transport,
            config,
            state,
            in_progress,
            observer,
            _state: PhantomData,
        })
    }
}

impl Reader<Initialized> {
    /// Select the application on the card in the field and decode its FCI
    /// into display fields.
    ///
    /// Returns `Error::ReadInProgress` without touching the hardware when
    /// another read is outstanding. Hardware failures are returned as-is;
    /// decode problems never are. The technology session is released exactly
    /// once on every path, before the state returns to `Idle`.
    pub fn read_card(&self) -> Result<CardDetails> {
        if self
            .in_progress
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("read rejected: exchange already in flight");
            return Err(Error::ReadInProgress);
        }
        let _in_flight = InFlight { reader: self };
        self.set_state(SessionState::Requesting);

        let mut transport = self.lock_transport();
        let mut session = TechnologySession {
            transport: &mut *transport,
        };
        let outcome = self.exchange(&mut session);
        match &outcome {
            Ok(_) => self.set_state(SessionState::Succeeded),
            Err(e) => {
                warn!("card read failed: {}", e);
                self.set_state(SessionState::Failed);
            }
        }
        drop(session);
        outcome
    }

    fn exchange(&self, session: &mut TechnologySession<'_>) -> Result<CardDetails> {
        session.transport.request_technology()?;
        self.set_state(SessionState::Exchanging);

        debug!(">> {}", bytes_to_hex_spaced(&SELECT_COMMAND));
        let response = session
            .transport
            .transceive(&SELECT_COMMAND, self.config.transceive_timeout_ms)?;
        debug!("<< {}", bytes_to_hex_spaced(&response));

        Ok(codec::decode_response(&response))
    }

    /// True while a read is outstanding.
    pub fn is_reading(&self) -> bool {
        self.in_progress.load(Ordering::Acquire)
    }

    /// Tear the hardware down and hand the transport back.
    pub fn shutdown(self) -> Result<Box<dyn Transport + Send>> {
        let mut transport = self
            .transport
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        transport.shutdown()?;
        debug!("reader shut down");
        Ok(transport)
    }
}

/// Releases the technology session when dropped.
struct TechnologySession<'a> {
    transport: &'a mut Box<dyn Transport + Send>,
}

impl Drop for TechnologySession<'_> {
    fn drop(&mut self) {
        if let Err(e) = self.transport.release_technology() {
            warn!("technology release failed: {}", e);
        }
    }
}

/// Clears the in-flight flag and returns the reader to `Idle` when dropped.
struct InFlight<'a> {
    reader: &'a Reader<Initialized>,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.reader.set_state(SessionState::Idle);
        self.reader.in_progress.store(false, Ordering::Release);
    }
}
