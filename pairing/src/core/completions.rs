//! Completion log model and derived statistics
//!
//! Pure data and queries over one group's completion events. Persistence and
//! locking live in `store::completions`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::{CycleKey, GroupId, MemberId, MemberPair};
use std::collections::{BTreeMap, HashMap};

/// Whole completion document, keyed by group
pub type CompletionDocument = BTreeMap<GroupId, GroupCompletions>;

/// Two partners fulfilling a cycle's activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionEvent {
    #[serde(flatten)]
    pub pair: MemberPair,
    pub cycle: CycleKey,
    pub recorded_at: DateTime<Utc>,
    /// Reference to the originating evidence, e.g. a message id
    pub evidence: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupCompletions {
    #[serde(default)]
    pub completions: Vec<CompletionEvent>,
}

/// One leaderboard row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    pub member: MemberId,
    pub count: u32,
}

/// Completion counts for one member
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MemberStats {
    pub total: u32,
    pub this_cycle: u32,
}

impl GroupCompletions {
    pub fn is_recorded(&self, cycle: &CycleKey, a: &MemberId, b: &MemberId) -> bool {
        self.completions
            .iter()
            .any(|event| &event.cycle == cycle && event.pair.is_between(a, b))
    }

    /// Completion counts per member across every cycle, highest first
    ///
    /// Members with equal counts keep the order in which they first appear
    /// in the log.
    pub fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        let mut entries: Vec<LeaderboardEntry> = Vec::new();
        let mut positions: HashMap<&MemberId, usize> = HashMap::new();

        for event in &self.completions {
            for member in [&event.pair.first, &event.pair.second] {
                match positions.get(member) {
                    Some(&index) => entries[index].count += 1,
                    None => {
                        positions.insert(member, entries.len());
                        entries.push(LeaderboardEntry {
                            member: member.clone(),
                            count: 1,
                        });
                    }
                }
            }
        }

        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries
    }

    pub fn stats_for(&self, cycle: &CycleKey, member: &MemberId) -> MemberStats {
        self.completions
            .iter()
            .filter(|event| event.pair.contains(member))
            .fold(MemberStats::default(), |mut stats, event| {
                stats.total += 1;
                if &event.cycle == cycle {
                    stats.this_cycle += 1;
                }
                stats
            })
    }
}
