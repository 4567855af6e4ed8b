//! End-to-end flows over the engine, the two stores and the notifier
//!
//! A pairing round is computed and committed under a round lock so two
//! rounds for the same process never interleave. Notifications go out after
//! the commit and outside any lock; each failure is logged and counted
//! without affecting the others or the saved pairing.

use futures_util::future::join_all;
use rand::Rng;
use shared::{group_error, group_info, group_warn, CycleKey, GroupId, MemberId, MemberPair};
use std::collections::HashSet;
use tokio::sync::Mutex;

use crate::core::completions::{LeaderboardEntry, MemberStats};
use crate::core::engine::{self, PairingOutcome};
use crate::error::PairingResult;
use crate::store::{CompletionTracker, HistoryStore};
use crate::traits::{DocumentStore, Notifier};

/// Delivery counts for one round of notifications
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotificationTally {
    pub sent: usize,
    pub failed: usize,
}

/// What a pairing round produced
#[derive(Debug, Clone, PartialEq)]
pub struct PairingReport {
    pub cycle: CycleKey,
    pub pairs: Vec<MemberPair>,
    pub unpaired: Vec<MemberId>,
    pub notifications: NotificationTally,
}

/// A member claiming completion with one or more named partners
#[derive(Debug, Clone)]
pub struct CompletionSignal {
    pub actor: MemberId,
    pub mentioned: Vec<MemberId>,
    pub evidence: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    Recorded,
    AlreadyRecorded,
    NotPartnered,
}

/// Outcome per distinct mentioned member, in mention order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompletionReceipt {
    pub outcomes: Vec<(MemberId, CompletionOutcome)>,
}

impl CompletionReceipt {
    pub fn recorded_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| *outcome == CompletionOutcome::Recorded)
            .count()
    }

    pub fn members_with(&self, wanted: CompletionOutcome) -> Vec<&MemberId> {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| *outcome == wanted)
            .map(|(member, _)| member)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub rank: usize,
    pub member: MemberId,
    pub count: u32,
    pub this_cycle: u32,
}

/// Top of the leaderboard plus how many members are on it in total
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedBoard {
    pub entries: Vec<RankedEntry>,
    pub total_members: usize,
}

pub struct Coordinator<H, C, N> {
    history: HistoryStore<H>,
    tracker: CompletionTracker<C>,
    notifier: N,
    round_lock: Mutex<()>,
}

impl<H, C, N> Coordinator<H, C, N>
where
    H: DocumentStore,
    C: DocumentStore,
    N: Notifier,
{
    pub fn new(history: HistoryStore<H>, tracker: CompletionTracker<C>, notifier: N) -> Self {
        Self {
            history,
            tracker,
            notifier,
            round_lock: Mutex::new(()),
        }
    }

    pub fn history(&self) -> &HistoryStore<H> {
        &self.history
    }

    pub fn tracker(&self) -> &CompletionTracker<C> {
        &self.tracker
    }

    /// Pair `members` against the group's history using the thread RNG
    pub async fn create_pairings(&self, group: &GroupId, members: &[MemberId]) -> PairingOutcome {
        let history = self.history.snapshot(group).await;
        engine::create_pairings(&history, members, &mut rand::thread_rng())
    }

    pub async fn create_pairings_with_rng<R: Rng + ?Sized>(
        &self,
        group: &GroupId,
        members: &[MemberId],
        rng: &mut R,
    ) -> PairingOutcome {
        let history = self.history.snapshot(group).await;
        engine::create_pairings(&history, members, rng)
    }

    /// Run a full round: pair, commit, then notify every paired member
    ///
    /// The report names the cycle the round was committed under. When no
    /// pair can be formed nothing is saved and nobody is notified.
    pub async fn run_pairing(&self, group: &GroupId, members: &[MemberId]) -> PairingResult<PairingReport> {
        let (outcome, committed) = {
            let _round = self.round_lock.lock().await;
            let outcome = self.create_pairings(group, members).await;
            if outcome.pairs.is_empty() {
                (outcome, None)
            } else {
                match self.history.save_pairings(group, &outcome.pairs).await {
                    Ok(cycle) => (outcome, Some(cycle)),
                    Err(e) => {
                        group_error!(group, "❌ Failed to save pairings: {}", e);
                        return Err(e);
                    }
                }
            }
        };

        let Some(cycle) = committed else {
            group_warn!(group, "⚠️ No pairs formed from {} members", members.len());
            return Ok(PairingReport {
                cycle: self.history.current_cycle(),
                pairs: Vec::new(),
                unpaired: outcome.unpaired,
                notifications: NotificationTally::default(),
            });
        };

        group_info!(
            group,
            "🤝 Paired {} members into {} pairs for {} ({} unpaired)",
            outcome.pairs.len() * 2,
            outcome.pairs.len(),
            cycle,
            outcome.unpaired.len()
        );

        let notifications = self.notify_pairs(group, &outcome.pairs).await;

        Ok(PairingReport {
            cycle,
            pairs: outcome.pairs,
            unpaired: outcome.unpaired,
            notifications,
        })
    }

    async fn notify_pairs(&self, group: &GroupId, pairs: &[MemberPair]) -> NotificationTally {
        let deliveries = pairs
            .iter()
            .flat_map(|pair| [(&pair.first, &pair.second), (&pair.second, &pair.first)])
            .map(|(member, partner)| async move {
                match self.notifier.notify_partner(group, member, partner).await {
                    Ok(()) => true,
                    Err(e) => {
                        group_warn!(group, "📭 Could not notify {}: {}", member, e);
                        false
                    }
                }
            });

        let delivered = join_all(deliveries).await;
        let sent = delivered.iter().filter(|ok| **ok).count();
        NotificationTally {
            sent,
            failed: delivered.len() - sent,
        }
    }

    /// Validate and record a completion signal against every mentioned member
    pub async fn submit_completion(
        &self,
        group: &GroupId,
        signal: &CompletionSignal,
    ) -> PairingResult<CompletionReceipt> {
        let mut seen = HashSet::new();
        let mut receipt = CompletionReceipt::default();

        for partner in signal.mentioned.iter().filter(|member| seen.insert(*member)) {
            let outcome = if !self
                .history
                .are_current_cycle_partners(group, &signal.actor, partner)
                .await
            {
                CompletionOutcome::NotPartnered
            } else if self
                .tracker
                .record_completion(group, &signal.actor, partner, &signal.evidence)
                .await?
            {
                CompletionOutcome::Recorded
            } else {
                CompletionOutcome::AlreadyRecorded
            };

            receipt.outcomes.push((partner.clone(), outcome));
        }

        if receipt.recorded_count() > 0 {
            group_info!(
                group,
                "🎉 {} recorded {} completion(s) from {}",
                signal.actor,
                receipt.recorded_count(),
                signal.evidence
            );
        }
        Ok(receipt)
    }

    pub async fn leaderboard(&self, group: &GroupId) -> Vec<LeaderboardEntry> {
        self.tracker.leaderboard(group).await
    }

    /// Top `limit` leaderboard entries with rank and current-cycle counts
    pub async fn ranked_leaderboard(&self, group: &GroupId, limit: usize) -> RankedBoard {
        let board = self.tracker.leaderboard(group).await;
        let total_members = board.len();

        let mut entries = Vec::with_capacity(limit.min(total_members));
        for (index, entry) in board.into_iter().take(limit).enumerate() {
            let stats = self.tracker.stats_for(group, &entry.member).await;
            entries.push(RankedEntry {
                rank: index + 1,
                member: entry.member,
                count: entry.count,
                this_cycle: stats.this_cycle,
            });
        }

        RankedBoard {
            entries,
            total_members,
        }
    }

    pub async fn stats_for(&self, group: &GroupId, member: &MemberId) -> MemberStats {
        self.tracker.stats_for(group, member).await
    }

    pub async fn current_cycle_partner(&self, group: &GroupId, member: &MemberId) -> Option<MemberId> {
        self.history.current_cycle_partner(group, member).await
    }
}
