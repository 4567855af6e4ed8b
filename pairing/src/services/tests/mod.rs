//! Service-specific tests
//!
//! Each backend has its own test file.

mod file_store;
mod memory_store;
