use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RecordError;

/// Store-assigned key of a drug record.
///
/// Keys are handed out by the record store in strictly increasing order and
/// are never chosen by callers. They travel as decimal strings on the wire,
/// so ordering must always go through [`Ord`] on this type rather than
/// through string comparison (`"10" < "2"` lexically).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordKey(u64);

impl RecordKey {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// The key that follows this one, or `None` once the key space is used up.
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }
}

impl fmt::Debug for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordKey({})", self.0)
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordKey {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| RecordError::InvalidKey(s.to_string()))
    }
}

impl From<u64> for RecordKey {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<RecordKey> for u64 {
    fn from(key: RecordKey) -> Self {
        key.0
    }
}
