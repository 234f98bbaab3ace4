// libtapcard/src/session/mod.rs

/// Builder for configured readers.
pub mod builder;
/// Reader configuration.
pub mod config;
/// Type-state reader and the read lifecycle.
pub mod handle;
/// Session states.
pub mod state;

#[cfg(feature = "async")]
pub mod async_reader;

pub use builder::ReaderBuilder;
pub use config::ReaderConfig;
pub use handle::{Initialized, Reader, TransitionObserver, Uninitialized};
pub use state::SessionState;

#[cfg(feature = "async")]
pub use async_reader::{AsyncReader, CardSource};
