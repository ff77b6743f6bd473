//! Typed identifier newtype for student records.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unique identifier for a [`Student`](crate::student::Student).
///
/// Assigned by the persistence layer on first save and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(i64);

impl StudentId {
    /// Wrap a raw identifier value.
    #[must_use]
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Access the raw identifier value.
    #[must_use]
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for StudentId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl From<i64> for StudentId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}
