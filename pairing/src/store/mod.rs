//! Durable, lock-guarded stores built on `DocumentStore` backends

pub mod completions;
pub mod document;
pub mod history;

pub use completions::CompletionTracker;
pub use document::{Change, PersistentDocument};
pub use history::HistoryStore;
