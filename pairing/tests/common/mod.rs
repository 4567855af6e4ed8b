//! Common test utilities and fixtures
//!
//! Shared by every integration test in this directory.

#![allow(dead_code)]

pub mod fixtures;
pub mod helpers;

pub use fixtures::TestFixtures;
pub use helpers::{CoordinatorBuilder, TestClock};
