//! Tenure bucket key.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A normalized tenure value used as a column key in the amount tables.
///
/// A bucket is only ever a table index, never a literal duration: a male
/// applicant with two months of tenure lands in bucket 26.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenureBucket(u32);

impl TenureBucket {
    /// Creates a bucket from a raw key.
    pub const fn new(key: u32) -> Self {
        Self(key)
    }

    /// Returns the raw key.
    pub const fn key(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TenureBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
