//! Error handling

use std::path::PathBuf;

use thiserror::Error;

use crate::logic::features::layout::LayoutMismatchError;

pub type DetectorResult<T> = Result<T, DetectorError>;

/// Errors surfaced to the caller of the detection pipeline.
///
/// Both variants reject the whole batch; no partial alert list is returned.
#[derive(Debug, Error)]
pub enum DetectorError {
    #[error("malformed reading at row {row}: field '{field}' {reason}")]
    MalformedReading {
        row: usize,
        field: &'static str,
        reason: MalformedReason,
    },

    #[error("scoring failed: {0}")]
    Scoring(#[from] ScoringError),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MalformedReason {
    #[error("is missing")]
    Missing,

    #[error("is not numeric (got {0})")]
    NotNumeric(String),

    #[error("is not a finite number")]
    NotFinite,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    #[error("anomaly model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("feature matrix has {actual} columns, expected {expected}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("feature matrix has no rows")]
    EmptyMatrix,

    #[error("{stage} returned {actual} rows for {expected} input rows")]
    RowCountMismatch {
        stage: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Startup failures while loading a model artifact. Fatal to the process.
#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("model artifact not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read model artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid model artifact: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Layout(#[from] LayoutMismatchError),

    #[error("invalid model parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },
}
