//! Error taxonomy for alignment curation.
//!
//! Loading errors (`InvalidReference`, `MalformedTable`, `Io` on input) are
//! fatal to the whole batch and carry the offending path. Per-query errors
//! (`AlignmentShapeMismatch`, `CoordinateOutOfRange`, `GeneBoundaryOutOfRange`)
//! are recovered at the batch level: the query is excluded and its identifier
//! and reason land in the batch summary.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CurateError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid reference {path}: {reason}")]
    InvalidReference { path: PathBuf, reason: String },

    #[error("malformed table {path} (line {line}): {reason}")]
    MalformedTable {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("alignment shape mismatch: reference row has {reference_columns} columns, query row has {query_columns}")]
    AlignmentShapeMismatch {
        reference_columns: usize,
        query_columns: usize,
    },

    #[error("reference coordinate {coord} out of range (reference length {length})")]
    CoordinateOutOfRange { coord: usize, length: usize },

    #[error("gene '{name}' spans columns {start_column}..={end_column}, beyond the {columns}-column row")]
    GeneBoundaryOutOfRange {
        name: String,
        start_column: usize,
        end_column: usize,
        columns: usize,
    },
}

impl CurateError {
    /// Wrap an IO error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
