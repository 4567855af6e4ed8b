//! Shared types for the pairing system
//!
//! Identifiers, the member pair type, the shared error type and the
//! logging setup used by every crate in the workspace.

pub mod errors;
pub mod logging;
pub mod types;

pub use errors::*;
pub use types::*;
