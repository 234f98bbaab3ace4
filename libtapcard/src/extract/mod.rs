//! Field extraction: structured lookups with a heuristic fallback.

pub mod heuristic;
/// Per-field strategy selection.
pub mod resolver;

pub use heuristic::{DigitRunRule, HeuristicCandidates, scan};
pub use resolver::{Field, Strategy, resolve, resolve_field};
