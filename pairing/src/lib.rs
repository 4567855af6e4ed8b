//! Partner pairing and completion tracking
//!
//! Pairs the members of a group every weekly cycle while steering away from
//! repeat partners, and keeps a per-cycle, at-most-once log of completions
//! between partners from which leaderboards are derived. All state is scoped
//! per group and mirrored to JSON documents through injectable backends.

pub mod config;
pub mod coordinator;
pub mod core;
pub mod display;
pub mod error;
pub mod services;
pub mod store;
pub mod traits;

// Re-export commonly used types
pub use coordinator::{
    CompletionOutcome, CompletionReceipt, CompletionSignal, Coordinator, NotificationTally, PairingReport,
    RankedBoard, RankedEntry,
};
pub use error::{PairingError, PairingResult};
pub use store::{CompletionTracker, HistoryStore};
pub use traits::{Clock, DocumentStore, Notifier};
