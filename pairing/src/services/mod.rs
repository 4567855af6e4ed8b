//! Service implementations
//!
//! Real implementations of the service traits: storage backends, the
//! system clock and the command-line notifier.

pub mod clock;
pub mod file_store;
pub mod memory_store;
pub mod notifier;

#[cfg(test)]
mod tests;

pub use clock::SystemClock;
pub use file_store::JsonFileStore;
pub use memory_store::MemoryStore;
pub use notifier::LogNotifier;
