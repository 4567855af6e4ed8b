//! Trait definitions with mockall annotations for testing
//!
//! These are the seams the stores and the coordinator are built against:
//! where documents are persisted, how paired members are told about their
//! partner, and where "now" comes from.

use chrono::{DateTime, Utc};
use shared::{GroupId, MemberId};

use crate::error::PairingResult;

/// Byte-level persistence for one JSON document
///
/// Each store owns exactly one document. Implementations must make `save`
/// all-or-nothing: after a failed save, `load` still returns the previous
/// contents.
#[mockall::automock]
#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    /// Read the whole document, `None` if it has never been written
    async fn load(&self) -> PairingResult<Option<String>>;

    /// Replace the whole document and make it durable before returning
    async fn save(&self, contents: &str) -> PairingResult<()>;

    /// Human-readable location for log messages
    fn describe(&self) -> String;
}

/// Delivery of partner assignments to members
#[mockall::automock]
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    /// Tell `member` that `partner` is their partner for the current cycle
    async fn notify_partner(
        &self,
        group: &GroupId,
        member: &MemberId,
        partner: &MemberId,
    ) -> PairingResult<()>;
}

/// Source of the current time
#[mockall::automock]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
