//! Objective catalog: the set of valid objective identifiers

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Categorized objectives document, as stored in `objectives.json`
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    categories: Vec<Category>,
}

#[derive(Debug, Deserialize)]
struct Category {
    #[serde(default)]
    objectives: Vec<ObjectiveEntry>,
}

#[derive(Debug, Deserialize)]
struct ObjectiveEntry {
    #[serde(default)]
    id: String,
}

/// The set of valid objective identifiers, loaded once per process.
///
/// Used only to validate requested identifiers; everything else about an
/// objective stays in the data files.
#[derive(Debug)]
pub struct ObjectiveCatalog {
    ids: HashSet<String>,
}

impl ObjectiveCatalog {
    /// Load the catalog from a categorized objectives document.
    ///
    /// Fails closed: a missing or malformed file is a
    /// [`Error::DataLoad`], as is a well-formed document containing no
    /// identifiers at all. Dependent operations must never run against an
    /// empty catalog.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::DataLoad(format!("cannot read {}: {}", path.display(), e)))?;
        let document: CatalogDocument = serde_json::from_str(&raw).map_err(|e| {
            Error::DataLoad(format!(
                "invalid objectives document {}: {}",
                path.display(),
                e
            ))
        })?;

        let ids: HashSet<String> = document
            .categories
            .into_iter()
            .flat_map(|category| category.objectives)
            .filter(|objective| !objective.id.is_empty())
            .map(|objective| objective.id)
            .collect();

        if ids.is_empty() {
            return Err(Error::DataLoad(format!(
                "no objective identifiers found in {}",
                path.display()
            )));
        }

        Ok(Self { ids })
    }

    /// Build a catalog directly from identifiers.
    pub fn from_ids<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    /// Whether `id` is a known objective identifier.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
