//! Request normalization: canonical objective-set keys

use std::collections::BTreeSet;

use crate::catalog::ObjectiveCatalog;
use crate::error::{Error, Result};

/// Sorted, deduplicated tuple of objective identifiers.
///
/// The sole join key between a request and a precomputed record: two
/// requests naming the same set of objectives, in any order and with any
/// duplication, produce equal keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalKey(Vec<String>);

impl CanonicalKey {
    /// Build a key from raw identifiers.
    ///
    /// Blank entries are dropped; the rest are deduplicated and sorted
    /// lexicographically ascending.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set: BTreeSet<String> = ids
            .into_iter()
            .filter(|id| !id.as_ref().trim().is_empty())
            .map(|id| id.as_ref().to_string())
            .collect();
        CanonicalKey(set.into_iter().collect())
    }

    /// The identifiers, sorted ascending.
    pub fn ids(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Clone the identifiers out for response payloads.
    pub fn to_vec(&self) -> Vec<String> {
        self.0.clone()
    }
}

/// Normalize caller-supplied identifiers into a catalog-validated key.
///
/// Empty input (after dropping blanks) is a valid "no selection" and
/// normalizes to the empty key. Any surviving identifier missing from the
/// catalog fails with [`Error::UnknownObjectives`] listing the offenders,
/// sorted.
pub fn normalize(catalog: &ObjectiveCatalog, raw: &[String]) -> Result<CanonicalKey> {
    let key = CanonicalKey::new(raw);
    if key.is_empty() {
        return Ok(key);
    }

    let unknown: Vec<String> = key
        .ids()
        .iter()
        .filter(|id| !catalog.contains(id))
        .cloned()
        .collect();
    if !unknown.is_empty() {
        return Err(Error::UnknownObjectives(unknown));
    }

    Ok(key)
}
