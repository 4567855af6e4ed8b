//! Pairing history model
//!
//! Pure data and queries over one group's pairing history. Persistence and
//! locking live in `store::history`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::{CycleKey, GroupId, MemberId, MemberPair};
use std::collections::{BTreeMap, BTreeSet};

/// Whole pairing-history document, keyed by group
pub type HistoryDocument = BTreeMap<GroupId, GroupHistory>;

/// Pairings committed for one cycle by one pairing round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CyclePairing {
    pub cycle: CycleKey,
    pub pairs: Vec<MemberPair>,
    pub created_at: DateTime<Utc>,
}

/// Everything recorded about one group's pairings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupHistory {
    /// Member -> every member it has ever been paired with. Always symmetric.
    #[serde(default)]
    pub partners: BTreeMap<MemberId, BTreeSet<MemberId>>,

    /// Per-cycle records in the order they were saved
    #[serde(default)]
    pub cycles: Vec<CyclePairing>,
}

/// Answers "have these two been paired before?" for the pairing engine
pub trait PairingLookup {
    fn has_paired_before(&self, a: &MemberId, b: &MemberId) -> bool;
}

impl PairingLookup for GroupHistory {
    fn has_paired_before(&self, a: &MemberId, b: &MemberId) -> bool {
        self.partners.get(a).is_some_and(|seen| seen.contains(b))
    }
}

impl GroupHistory {
    /// Record `a` and `b` as partners in both directions
    ///
    /// Returns `false` when the pairing was already known.
    pub fn record_pairing(&mut self, a: &MemberId, b: &MemberId) -> bool {
        let added_forward = self.partners.entry(a.clone()).or_default().insert(b.clone());
        let added_backward = self.partners.entry(b.clone()).or_default().insert(a.clone());
        added_forward || added_backward
    }

    /// Pairs from every entry saved for `cycle`, in stored order
    pub fn pairs_in(&self, cycle: &CycleKey) -> impl Iterator<Item = &MemberPair> {
        let cycle = cycle.clone();
        self.cycles
            .iter()
            .filter(move |entry| entry.cycle == cycle)
            .flat_map(|entry| entry.pairs.iter())
    }

    /// First partner found for `member` in `cycle`
    pub fn partner_in(&self, cycle: &CycleKey, member: &MemberId) -> Option<MemberId> {
        self.pairs_in(cycle)
            .find_map(|pair| pair.partner_of(member))
            .cloned()
    }

    pub fn are_partners_in(&self, cycle: &CycleKey, a: &MemberId, b: &MemberId) -> bool {
        self.pairs_in(cycle).any(|pair| pair.is_between(a, b))
    }

    /// Commit a round: every pair joins the all-time set, then one cycle entry is appended
    pub fn commit_round(&mut self, cycle: CycleKey, pairs: Vec<MemberPair>, created_at: DateTime<Utc>) {
        for pair in &pairs {
            self.record_pairing(&pair.first, &pair.second);
        }
        self.cycles.push(CyclePairing {
            cycle,
            pairs,
            created_at,
        });
    }
}
