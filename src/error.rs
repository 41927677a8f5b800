use thiserror::Error;

use crate::point::PointId;

/// Error types for the dbscan-rs library
#[derive(Error, Debug)]
pub enum DbscanError {
    /// An input record could not be parsed (line numbers are 1-based)
    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    /// Two input records share the same identifier
    #[error("Duplicate point id: {0}")]
    DuplicatePointId(PointId),

    /// No point with this identifier exists in the store
    #[error("Unknown point id: {0}")]
    UnknownPoint(PointId),

    /// More clusters were requested than the run discovered
    #[error("Insufficient clusters: requested {requested}, but only {found} non-noise clusters were found")]
    InsufficientClusters { requested: usize, found: usize },

    /// Model has not been fitted yet
    #[error("Model has not been fitted. Call fit() first.")]
    NotFitted,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
