//! Core business logic modules
//!
//! Pure data models and algorithms with no I/O dependencies.

pub mod completions;
pub mod cycle;
pub mod engine;
pub mod history;

pub use completions::{CompletionEvent, GroupCompletions, LeaderboardEntry, MemberStats};
pub use cycle::current_cycle_key;
pub use engine::{create_pairings, PairingOutcome};
pub use history::{GroupHistory, PairingLookup};
