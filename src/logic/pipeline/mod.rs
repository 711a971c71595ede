//! Detection Pipeline
//!
//! rows → readings → feature matrix → (scores, labels) → alerts → report
//!
//! # Failure Strategy
//! Fail fast. A malformed row rejects the batch before scoring, and a
//! scoring failure rejects it before any alert is built. Nothing is
//! retried: the same input would produce the same failure.


use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::error::{DetectorError, DetectorResult};
use crate::logic::alert::{batch_alerts_at, Alert};
use crate::logic::features::{extract_readings, to_feature_matrix, RawRow, SensorReading};
use crate::logic::model::{score_matrix, AnomalyModel};
use crate::logic::report::generate_text_report;

/// Everything one invocation produces
#[derive(Debug, Clone)]
pub struct DetectionOutcome {
    pub rows: usize,
    /// Every alert, uncapped, in row order
    pub alerts: Vec<Alert>,
    pub report: String,
}

/// Holds the loaded model; cheap to clone and share between invocations
#[derive(Clone)]
pub struct Detector {
    model: Arc<dyn AnomalyModel>,
}

impl Detector {
    pub fn new(model: Arc<dyn AnomalyModel>) -> Self {
        Self { model }
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    pub fn run(&self, rows: &[RawRow], threshold: f64) -> DetectorResult<DetectionOutcome> {
        self.run_at(rows, threshold, Utc::now())
    }

    /// Same as [`Detector::run`] with an explicit alert generation time
    pub fn run_at(
        &self,
        rows: &[RawRow],
        threshold: f64,
        generated_at: DateTime<Utc>,
    ) -> DetectorResult<DetectionOutcome> {
        let readings = extract_readings(rows).inspect_err(|e| {
            tracing::warn!("Rejected batch of {} rows: {}", rows.len(), e);
        })?;

        self.run_readings(&readings, threshold, generated_at)
    }

    /// Score already-extracted readings
    pub fn run_readings(
        &self,
        readings: &[SensorReading],
        threshold: f64,
        generated_at: DateTime<Utc>,
    ) -> DetectorResult<DetectionOutcome> {
        if readings.is_empty() {
            tracing::debug!("Empty batch, nothing to score");
            return Ok(DetectionOutcome {
                rows: 0,
                alerts: Vec::new(),
                report: generate_text_report(&[]),
            });
        }

        let matrix = to_feature_matrix(readings);
        let scored = score_matrix(&*self.model, &matrix).map_err(|e| {
            tracing::error!("Scoring with '{}' failed: {}", self.model.name(), e);
            DetectorError::from(e)
        })?;
        tracing::debug!("Scored {} rows with '{}'", scored.len(), self.model.name());

        let alerts = batch_alerts_at(
            readings,
            &scored.scores,
            &scored.labels,
            threshold,
            generated_at,
        )?;

        tracing::info!(
            "Processed {} rows: {} alerts (threshold {})",
            readings.len(),
            alerts.len(),
            threshold
        );

        let report = generate_text_report(&alerts);

        Ok(DetectionOutcome {
            rows: readings.len(),
            alerts,
            report,
        })
    }
}
