//! Notifier that reports partner assignments through the log
//!
//! Stands in for direct messages when running from the command line.

use async_trait::async_trait;
use shared::{group_info, GroupId, MemberId};

use crate::error::PairingResult;
use crate::traits::Notifier;

#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify_partner(&self, group: &GroupId, member: &MemberId, partner: &MemberId) -> PairingResult<()> {
        group_info!(group, "📨 {} has been paired with {}", member, partner);
        Ok(())
    }
}
