//! Baseline Model - z-score reference scorer
//!
//! Scores a reading by its largest per-feature deviation from a fitted
//! baseline. The artifact (means, standard deviations, offset) is produced
//! offline; this module only loads, validates and applies it.
//!
//! decision = offset - max_i |(x_i - mean_i) / std_dev_i|
//!
//! A row is labelled `Anomaly` when its decision value drops below zero.

use std::fs;
use std::path::Path;

use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

use crate::error::{ModelLoadError, ScoringError};
use crate::logic::features::layout::{layout_hash, validate_layout, FEATURE_COUNT};
use crate::logic::features::FeatureMatrix;
use super::inference::{AnomalyModel, Label, ModelMetadata};

pub const MODEL_TYPE: &str = "baseline-zscore";

/// Baseline artifact as stored on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaselineArtifact {
    pub name: String,
    pub feature_version: u8,
    /// Feature names the statistics were fitted on, in order
    pub features: Vec<String>,
    #[serde(default)]
    pub layout_hash: Option<u32>,

    pub mean: [f64; FEATURE_COUNT],
    pub std_dev: [f64; FEATURE_COUNT],

    /// Largest tolerated |z| before a row is labelled anomalous
    pub offset: f64,
}

#[derive(Debug, Clone)]
pub struct BaselineModel {
    artifact: BaselineArtifact,
    metadata: ModelMetadata,
}

impl BaselineModel {
    /// Validate an artifact and wrap it as a scoring model
    pub fn from_artifact(artifact: BaselineArtifact) -> Result<Self, ModelLoadError> {
        validate_layout(artifact.feature_version, &artifact.features, artifact.layout_hash)?;

        for (i, (&mean, &std_dev)) in artifact.mean.iter().zip(&artifact.std_dev).enumerate() {
            if !mean.is_finite() {
                return Err(invalid(format!("mean[{i}]"), "must be finite"));
            }
            if !std_dev.is_finite() || std_dev <= 0.0 {
                return Err(invalid(format!("std_dev[{i}]"), "must be finite and > 0"));
            }
        }
        if !artifact.offset.is_finite() || artifact.offset <= 0.0 {
            return Err(invalid("offset".to_string(), "must be finite and > 0"));
        }

        let metadata = ModelMetadata {
            model_name: artifact.name.clone(),
            model_type: MODEL_TYPE.to_string(),
            feature_version: artifact.feature_version,
            layout_hash: layout_hash(),
            loaded_at: chrono::Utc::now(),
        };

        Ok(Self { artifact, metadata })
    }

    /// Load artifact from disk with validation
    pub fn load(path: &Path) -> Result<Self, ModelLoadError> {
        tracing::info!("Loading baseline model from: {}", path.display());

        if !path.exists() {
            return Err(ModelLoadError::NotFound(path.to_path_buf()));
        }

        let data = fs::read(path)?;
        let artifact: BaselineArtifact = serde_json::from_slice(&data)?;
        let model = Self::from_artifact(artifact)?;

        tracing::info!(
            "Baseline model '{}' loaded (layout v{}, hash {:08x})",
            model.metadata.model_name,
            model.metadata.feature_version,
            model.metadata.layout_hash
        );

        Ok(model)
    }

    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    fn decision_value(&self, row: ArrayView1<f64>) -> f64 {
        let max_z = row
            .iter()
            .zip(self.artifact.mean.iter().zip(&self.artifact.std_dev))
            .map(|(x, (mean, std_dev))| ((x - mean) / std_dev).abs())
            .fold(0.0f64, f64::max);

        self.artifact.offset - max_z
    }

    fn check_shape(matrix: &FeatureMatrix) -> Result<(), ScoringError> {
        if matrix.ncols() == FEATURE_COUNT {
            Ok(())
        } else {
            Err(ScoringError::ShapeMismatch {
                expected: FEATURE_COUNT,
                actual: matrix.ncols(),
            })
        }
    }
}

impl AnomalyModel for BaselineModel {
    fn name(&self) -> &str {
        &self.artifact.name
    }

    fn decision_values(&self, matrix: &FeatureMatrix) -> Result<Vec<f64>, ScoringError> {
        Self::check_shape(matrix)?;
        Ok(matrix.rows().into_iter().map(|row| self.decision_value(row)).collect())
    }

    fn classify(&self, matrix: &FeatureMatrix) -> Result<Vec<Label>, ScoringError> {
        Ok(self
            .decision_values(matrix)?
            .into_iter()
            .map(|d| if d < 0.0 { Label::Anomaly } else { Label::Normal })
            .collect())
    }
}

fn invalid(name: String, reason: &str) -> ModelLoadError {
    ModelLoadError::InvalidParameter {
        name,
        reason: reason.to_string(),
    }
}
