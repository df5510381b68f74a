//! Domain model for storage domains from the `/ovirt-engine/api/storagedomains` endpoint.
//!
//! Only the capacity-related fields are modelled; the engine returns many more
//! (status, type, links, ...) which are ignored.

use crate::core::domain::{
    error::{OlvmError, OlvmResult},
    value_object::ByteCount,
};
use serde::{Deserialize, Serialize};

/// Bytes per GiB. Sizes are reported with the label `GB` but are base-1024.
pub const BYTES_PER_GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// A storage domain as returned by the engine.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StorageDomainRecord {
    /// Storage domain name, compared case-insensitively.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Used space in bytes, as sent by the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used: Option<ByteCount>,
    /// Available space in bytes, as sent by the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<ByteCount>,
}

impl StorageDomainRecord {
    /// Returns true if this record's name equals `name`, ignoring case.
    pub fn matches(&self, name: &str) -> bool {
        self.name
            .as_deref()
            .is_some_and(|own| own.to_lowercase() == name.to_lowercase())
    }

    /// Used and available space in GiB.
    ///
    /// `requested` is the name the domain was looked up with; it is only used
    /// in error messages.
    ///
    /// # Errors
    /// - `OlvmError::MissingCapacity` if either figure is absent
    /// - `OlvmError::InvalidCapacity` if either figure is not an integer
    pub fn capacity(&self, requested: &str) -> OlvmResult<DomainCapacity> {
        let (Some(used), Some(available)) = (&self.used, &self.available) else {
            return Err(OlvmError::MissingCapacity {
                name: requested.to_string(),
            });
        };
        let bytes = |field: &str, count: &ByteCount| {
            count.bytes().ok_or_else(|| OlvmError::InvalidCapacity {
                name: requested.to_string(),
                field: field.to_string(),
                value: count.to_string(),
            })
        };
        Ok(DomainCapacity::from_bytes(
            bytes("used", used)?,
            bytes("available", available)?,
        ))
    }
}

/// Used and available space of a storage domain, in GiB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainCapacity {
    pub used_gib: f64,
    pub available_gib: f64,
}

impl DomainCapacity {
    pub fn from_bytes(used: u64, available: u64) -> Self {
        Self {
            used_gib: used as f64 / BYTES_PER_GIB,
            available_gib: available as f64 / BYTES_PER_GIB,
        }
    }
}

/// Selects the first record whose name matches `name` case-insensitively.
///
/// Returns the selected record and the number of additional matches that were
/// skipped.
pub fn find_domain<'a>(
    domains: &'a [StorageDomainRecord],
    name: &str,
) -> Option<(&'a StorageDomainRecord, usize)> {
    let mut matches = domains.iter().filter(|domain| domain.matches(name));
    let first = matches.next()?;
    Some((first, matches.count()))
}
