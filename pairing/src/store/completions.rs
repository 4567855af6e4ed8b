//! Durable completion log, all groups in one document

use shared::{group_debug, CycleKey, GroupId, MemberId, MemberPair};
use std::sync::Arc;

use super::document::{Change, PersistentDocument};
use crate::core::completions::{CompletionDocument, CompletionEvent, LeaderboardEntry, MemberStats};
use crate::core::cycle::current_cycle_key;
use crate::error::PairingResult;
use crate::traits::{Clock, DocumentStore};

/// Records at most one completion per unordered pair per cycle
///
/// Does not check that the two members are partners; callers validate that
/// against the pairing history first.
pub struct CompletionTracker<S> {
    document: PersistentDocument<CompletionDocument, S>,
    clock: Arc<dyn Clock>,
}

impl<S: DocumentStore> CompletionTracker<S> {
    pub async fn open(storage: S, clock: Arc<dyn Clock>) -> Self {
        Self {
            document: PersistentDocument::open(storage).await,
            clock,
        }
    }

    pub fn current_cycle(&self) -> CycleKey {
        current_cycle_key(self.clock.now())
    }

    pub async fn is_already_recorded_this_cycle(&self, group: &GroupId, a: &MemberId, b: &MemberId) -> bool {
        let cycle = self.current_cycle();
        self.document
            .read(|doc| doc.get(group).is_some_and(|log| log.is_recorded(&cycle, a, b)))
            .await
    }

    /// Append a completion for the current cycle
    ///
    /// Returns `false`, writing nothing, when this pair already completed
    /// in the current cycle.
    pub async fn record_completion(
        &self,
        group: &GroupId,
        a: &MemberId,
        b: &MemberId,
        evidence: &str,
    ) -> PairingResult<bool> {
        let now = self.clock.now();
        let cycle = current_cycle_key(now);

        let recorded = self
            .document
            .update(|doc| {
                let log = doc.entry(group.clone()).or_default();
                if log.is_recorded(&cycle, a, b) {
                    return Change::Unchanged(false);
                }
                log.completions.push(CompletionEvent {
                    pair: MemberPair::new(a.clone(), b.clone()),
                    cycle: cycle.clone(),
                    recorded_at: now,
                    evidence: evidence.to_string(),
                });
                Change::Changed(true)
            })
            .await?;

        if recorded {
            group_debug!(group, "🍩 Completion recorded for {} & {} in {}", a, b, cycle);
        }
        Ok(recorded)
    }

    /// Completion counts across all cycles, highest first
    pub async fn leaderboard(&self, group: &GroupId) -> Vec<LeaderboardEntry> {
        self.document
            .read(|doc| doc.get(group).map(|log| log.leaderboard()).unwrap_or_default())
            .await
    }

    pub async fn stats_for(&self, group: &GroupId, member: &MemberId) -> MemberStats {
        let cycle = self.current_cycle();
        self.document
            .read(|doc| {
                doc.get(group)
                    .map(|log| log.stats_for(&cycle, member))
                    .unwrap_or_default()
            })
            .await
    }
}
