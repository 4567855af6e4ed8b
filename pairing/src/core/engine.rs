//! Greedy pairing with repeat avoidance
//!
//! Single randomized pass: each member takes the first remaining member it
//! has never been paired with, or, failing that, the first remaining member
//! at all. This reduces repeats but does not minimise them.

use rand::seq::SliceRandom;
use rand::Rng;
use shared::{MemberId, MemberPair};
use std::collections::HashSet;

use super::history::PairingLookup;

/// Result of one pairing pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PairingOutcome {
    pub pairs: Vec<MemberPair>,
    pub unpaired: Vec<MemberId>,
}

impl PairingOutcome {
    /// Number of members placed in pairs or left over
    pub fn member_count(&self) -> usize {
        self.pairs.len() * 2 + self.unpaired.len()
    }
}

/// Partition `members` into pairs, preferring partners never seen in `history`
///
/// Duplicate ids in `members` are treated as one member. Fewer than two
/// distinct members produce no pairs.
pub fn create_pairings<L, R>(history: &L, members: &[MemberId], rng: &mut R) -> PairingOutcome
where
    L: PairingLookup + ?Sized,
    R: Rng + ?Sized,
{
    let mut seen = HashSet::with_capacity(members.len());
    let mut order: Vec<MemberId> = members
        .iter()
        .filter(|member| seen.insert(*member))
        .cloned()
        .collect();
    order.shuffle(rng);

    let mut remaining = order.clone();
    let mut pairs = Vec::with_capacity(order.len() / 2);

    for member in &order {
        if !remaining.contains(member) {
            continue;
        }

        let fresh = remaining
            .iter()
            .position(|candidate| candidate != member && !history.has_paired_before(member, candidate));

        // Forced repeat: accept any remaining member rather than leave both unpaired
        let chosen = fresh.or_else(|| {
            if remaining.len() >= 2 {
                remaining.iter().position(|candidate| candidate != member)
            } else {
                None
            }
        });

        if let Some(index) = chosen {
            let partner = remaining[index].clone();
            remaining.retain(|other| other != member && other != &partner);
            pairs.push(MemberPair::new(member.clone(), partner));
        }
    }

    PairingOutcome {
        pairs,
        unpaired: remaining,
    }
}
