//! Durable pairing history, all groups in one document

use shared::{group_debug, CycleKey, GroupId, MemberId, MemberPair};
use std::sync::Arc;

use super::document::{Change, PersistentDocument};
use crate::core::cycle::current_cycle_key;
use crate::core::history::{GroupHistory, HistoryDocument, PairingLookup};
use crate::error::PairingResult;
use crate::traits::{Clock, DocumentStore};

pub struct HistoryStore<S> {
    document: PersistentDocument<HistoryDocument, S>,
    clock: Arc<dyn Clock>,
}

impl<S: DocumentStore> HistoryStore<S> {
    pub async fn open(storage: S, clock: Arc<dyn Clock>) -> Self {
        Self {
            document: PersistentDocument::open(storage).await,
            clock,
        }
    }

    pub fn current_cycle(&self) -> CycleKey {
        current_cycle_key(self.clock.now())
    }

    pub async fn has_paired_before(&self, group: &GroupId, a: &MemberId, b: &MemberId) -> bool {
        self.document
            .read(|doc| doc.get(group).is_some_and(|history| history.has_paired_before(a, b)))
            .await
    }

    /// Record `a` and `b` as ever-paired; no write if already known
    pub async fn record_pairing(&self, group: &GroupId, a: &MemberId, b: &MemberId) -> PairingResult<()> {
        self.document
            .update(|doc| {
                let history = doc.entry(group.clone()).or_default();
                if history.record_pairing(a, b) {
                    Change::Changed(())
                } else {
                    Change::Unchanged(())
                }
            })
            .await
    }

    /// Partner of `member` in the current cycle, first saved round wins
    pub async fn current_cycle_partner(&self, group: &GroupId, member: &MemberId) -> Option<MemberId> {
        let cycle = self.current_cycle();
        self.document
            .read(|doc| doc.get(group).and_then(|history| history.partner_in(&cycle, member)))
            .await
    }

    pub async fn are_current_cycle_partners(&self, group: &GroupId, a: &MemberId, b: &MemberId) -> bool {
        let cycle = self.current_cycle();
        self.document
            .read(|doc| doc.get(group).is_some_and(|history| history.are_partners_in(&cycle, a, b)))
            .await
    }

    /// Commit a pairing round for the current cycle in a single write
    ///
    /// Returns the cycle the round was committed under.
    pub async fn save_pairings(&self, group: &GroupId, pairs: &[MemberPair]) -> PairingResult<CycleKey> {
        let now = self.clock.now();
        let cycle = current_cycle_key(now);

        self.document
            .update(|doc| {
                doc.entry(group.clone())
                    .or_default()
                    .commit_round(cycle.clone(), pairs.to_vec(), now);
                Change::Changed(())
            })
            .await?;

        group_debug!(group, "💾 Saved {} pairs for {}", pairs.len(), cycle);
        Ok(cycle)
    }

    /// Copy of one group's history, empty for an unknown group
    pub async fn snapshot(&self, group: &GroupId) -> GroupHistory {
        self.document
            .read(|doc| doc.get(group).cloned().unwrap_or_default())
            .await
    }
}
