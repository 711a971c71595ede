//! Scoring Adapter
//!
//! Wraps an `AnomalyModel` and converts its "higher = more normal" decision
//! values into anomaly scores where higher means worse. Every component
//! downstream of this one assumes that sign convention.

use crate::error::ScoringError;
use crate::logic::features::{FeatureMatrix, FEATURE_COUNT};
use super::inference::{AnomalyModel, Label};

/// Row-aligned scoring output
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredBatch {
    pub scores: Vec<f64>,
    pub labels: Vec<Label>,
}

impl ScoredBatch {
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Score a non-empty matrix with exactly `FEATURE_COUNT` columns.
pub fn score_matrix(
    model: &dyn AnomalyModel,
    matrix: &FeatureMatrix,
) -> Result<ScoredBatch, ScoringError> {
    let (rows, cols) = matrix.dim();

    if cols != FEATURE_COUNT {
        return Err(ScoringError::ShapeMismatch {
            expected: FEATURE_COUNT,
            actual: cols,
        });
    }
    if rows == 0 {
        return Err(ScoringError::EmptyMatrix);
    }

    let decisions = model.decision_values(matrix)?;
    ensure_rows("decision_values", rows, decisions.len())?;

    let labels = model.classify(matrix)?;
    ensure_rows("classify", rows, labels.len())?;

    let scores = decisions.into_iter().map(|d| -d).collect();

    Ok(ScoredBatch { scores, labels })
}

fn ensure_rows(stage: &'static str, expected: usize, actual: usize) -> Result<(), ScoringError> {
    if expected == actual {
        Ok(())
    } else {
        Err(ScoringError::RowCountMismatch { stage, expected, actual })
    }
}
