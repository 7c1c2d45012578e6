//! Common error types for the planner service

use thiserror::Error;

use crate::index::ResultKind;

/// Common result type for planner operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types shared across the planner crates
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog or dataset file missing or malformed at load time
    #[error("Data load error: {0}")]
    DataLoad(String),

    /// One or more requested objective identifiers are not in the catalog
    #[error("Unknown objective IDs: {}", .0.join(", "))]
    UnknownObjectives(Vec<String>),

    /// The normalized key has no matching precomputed record
    #[error("No {} data for: {}", .kind, .objectives.join(", "))]
    RecordNotFound {
        kind: ResultKind,
        objectives: Vec<String>,
    },
}
