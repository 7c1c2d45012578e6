//! Record indexes over the line-delimited JSON result datasets

use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::normalize::CanonicalKey;

/// Which precomputed result dataset an index serves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    Interference,
    Physiology,
}

impl ResultKind {
    /// Record fields holding the objective identifiers, primary first.
    ///
    /// The secondary name is a fallback for format tolerance between
    /// dataset generations.
    fn id_fields(self) -> [&'static str; 2] {
        match self {
            ResultKind::Interference => ["inputs", "objectives"],
            ResultKind::Physiology => ["objectives", "inputs"],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ResultKind::Interference => "interference",
            ResultKind::Physiology => "physiology",
        }
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// In-memory mapping from canonical objective-set key to result record.
///
/// Built once from a JSONL dataset and read-only afterwards. When two lines
/// share a canonical key, the later line wins. Records are held as raw JSON
/// values; the formatters project them into stable response shapes.
#[derive(Debug)]
pub struct RecordIndex {
    kind: ResultKind,
    records: HashMap<CanonicalKey, Value>,
}

impl RecordIndex {
    /// Load an index from a line-delimited JSON dataset.
    ///
    /// Blank lines are skipped; records without any identifiers are
    /// skipped. A malformed line fails the whole load (fail closed).
    pub fn load(kind: ResultKind, path: &Path) -> Result<Self> {
        let file = File::open(path)
            .map_err(|e| Error::DataLoad(format!("cannot open {}: {}", path.display(), e)))?;

        let mut records = HashMap::new();
        for (line_no, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let record: Value = serde_json::from_str(line).map_err(|e| {
                Error::DataLoad(format!("{} line {}: {}", path.display(), line_no + 1, e))
            })?;

            let key = Self::record_key(kind, &record);
            if key.is_empty() {
                continue;
            }
            if records.insert(key, record).is_some() {
                debug!(
                    "{}: line {} replaces an earlier record with the same key",
                    path.display(),
                    line_no + 1
                );
            }
        }

        Ok(Self { kind, records })
    }

    /// Extract the canonical key from a record's identifier field.
    fn record_key(kind: ResultKind, record: &Value) -> CanonicalKey {
        for field in kind.id_fields() {
            if let Some(ids) = record.get(field).and_then(Value::as_array) {
                if !ids.is_empty() {
                    return CanonicalKey::new(ids.iter().filter_map(Value::as_str));
                }
            }
        }
        CanonicalKey::default()
    }

    pub fn kind(&self) -> ResultKind {
        self.kind
    }

    /// Look up the record for a canonical key.
    pub fn get(&self, key: &CanonicalKey) -> Option<&Value> {
        self.records.get(key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
