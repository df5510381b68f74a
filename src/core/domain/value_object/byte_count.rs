//! Byte counts as the engine sends them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A byte count kept as received, converted only when needed.
///
/// The oVirt REST API serialises 64-bit integers as strings
/// (`"used": "107374182400"`); plain numbers are accepted as well. Anything
/// else is kept verbatim so that one odd record does not spoil the listing.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ByteCount {
    Number(u64),
    Text(String),
    Other(serde_json::Value),
}

impl ByteCount {
    /// The count in bytes, if the value is a non-negative integer.
    pub fn bytes(&self) -> Option<u64> {
        match self {
            ByteCount::Number(n) => Some(*n),
            ByteCount::Text(s) => s.trim().parse().ok(),
            ByteCount::Other(_) => None,
        }
    }
}

impl From<u64> for ByteCount {
    fn from(bytes: u64) -> Self {
        ByteCount::Number(bytes)
    }
}

impl fmt::Display for ByteCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ByteCount::Number(n) => write!(f, "{n}"),
            ByteCount::Text(s) => write!(f, "'{s}'"),
            ByteCount::Other(value) => write!(f, "{value}"),
        }
    }
}
