//! Inference capability
//!
//! The detector never depends on a concrete estimator. Anything that can
//! produce a decision value and a label per row plugs in here.

use serde::{Deserialize, Serialize};

use crate::error::ScoringError;
use crate::logic::features::FeatureMatrix;

/// Per-row classifier output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Anomaly,
    Normal,
}

impl Label {
    pub fn is_anomaly(self) -> bool {
        self == Label::Anomaly
    }
}

/// Capability for anomaly models (baseline, isolation forest, ONNX, ...)
///
/// Implementations are shared read-only across concurrent invocations and
/// must not mutate internal state while scoring.
pub trait AnomalyModel: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &str;

    /// One value per row, higher means more normal
    fn decision_values(&self, matrix: &FeatureMatrix) -> Result<Vec<f64>, ScoringError>;

    /// One label per row, using the model's own internal cutoff
    fn classify(&self, matrix: &FeatureMatrix) -> Result<Vec<Label>, ScoringError>;
}

/// Model metadata for startup logs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub model_name: String,
    pub model_type: String,
    pub feature_version: u8,
    pub layout_hash: u32,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}
