// libtapcard/src/transport/mod.rs

/// In-memory transport for tests and demos.
pub mod mock;
/// The `Transport` trait.
pub mod traits;

pub use mock::{MockLog, MockTransport};
pub use traits::Transport;
