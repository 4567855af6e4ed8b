//! Core shared types and identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{SharedError, SharedResult};

/// Identifier for an independent group (one community) of members
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(String);

impl GroupId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for GroupId {
    type Err = SharedError;

    fn from_str(s: &str) -> SharedResult<Self> {
        validate_token("group", s).map(Self::new)
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque, stable token naming a participant
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(String);

impl MemberId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for MemberId {
    type Err = SharedError;

    fn from_str(s: &str) -> SharedResult<Self> {
        validate_token("member", s).map(Self::new)
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn validate_token<'a>(kind: &'static str, input: &'a str) -> SharedResult<&'a str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(SharedError::InvalidIdentifier {
            kind,
            input: input.to_string(),
        });
    }
    Ok(trimmed)
}

/// Key of a weekly cycle, e.g. `2025-W03`
///
/// Only meaningful for equality. Keys do not sort chronologically across
/// year boundaries.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CycleKey(String);

impl CycleKey {
    /// Build a key from an ISO week-numbering year and a 1-based week
    pub fn from_iso_week(year: i32, week: u32) -> Self {
        Self(format!("{year}-W{week:02}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CycleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Two members assigned to each other
///
/// Stored in the order produced, but pair identity is always the unordered
/// set `{first, second}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberPair {
    pub first: MemberId,
    pub second: MemberId,
}

impl MemberPair {
    pub fn new(first: MemberId, second: MemberId) -> Self {
        Self { first, second }
    }

    pub fn contains(&self, member: &MemberId) -> bool {
        &self.first == member || &self.second == member
    }

    /// The other member of the pair, if `member` is in it
    pub fn partner_of(&self, member: &MemberId) -> Option<&MemberId> {
        if &self.first == member {
            Some(&self.second)
        } else if &self.second == member {
            Some(&self.first)
        } else {
            None
        }
    }

    /// Unordered comparison against `{a, b}`
    pub fn is_between(&self, a: &MemberId, b: &MemberId) -> bool {
        (&self.first == a && &self.second == b) || (&self.first == b && &self.second == a)
    }
}

impl fmt::Display for MemberPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} & {}", self.first, self.second)
    }
}
