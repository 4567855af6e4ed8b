//! Test fixtures and data for pairing tests

use chrono::{DateTime, TimeZone, Utc};
use shared::{GroupId, MemberId};

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    pub const GROUP: &'static str = "g1";
    pub const OTHER_GROUP: &'static str = "g2";

    pub fn group() -> GroupId {
        GroupId::new(Self::GROUP)
    }

    pub fn other_group() -> GroupId {
        GroupId::new(Self::OTHER_GROUP)
    }

    pub fn member(id: &str) -> MemberId {
        MemberId::new(id)
    }

    /// `m1` .. `m{count}`
    pub fn members(count: usize) -> Vec<MemberId> {
        (1..=count).map(|i| MemberId::new(format!("m{i}"))).collect()
    }

    /// Wednesday of ISO week 2025-W03
    pub fn week_three() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap()
    }

    /// Same weekday one week later
    pub fn week_four() -> DateTime<Utc> {
        Self::week_three() + chrono::Duration::days(7)
    }
}
