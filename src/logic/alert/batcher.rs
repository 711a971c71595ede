//! Alert Batcher
//!
//! A row fires when its score reaches the caller's threshold OR the model
//! labelled it anomalous. The label carries the model's own cutoff, which
//! can disagree with the threshold, so either signal alone is enough.
//!
//! No bounds are enforced on the threshold. A threshold at or below every
//! score fires every row; one above every score still fires the rows the
//! model labelled anomalous.

use chrono::{DateTime, Utc};

use crate::error::ScoringError;
use crate::logic::features::SensorReading;
use crate::logic::model::Label;
use super::types::Alert;

/// Firing rule for a single row (inclusive boundary)
pub fn should_alert(score: f64, label: Label, threshold: f64) -> bool {
    score >= threshold || label.is_anomaly()
}

/// Unique within a batch: rows sharing a timestamp differ by index
pub fn alert_id(generated_at: &DateTime<Utc>, row_index: usize) -> String {
    format!("alert-{}-{}", generated_at.timestamp(), row_index)
}

/// Build alerts for every firing row, in input order
pub fn batch_alerts(
    readings: &[SensorReading],
    scores: &[f64],
    labels: &[Label],
    threshold: f64,
) -> Result<Vec<Alert>, ScoringError> {
    batch_alerts_at(readings, scores, labels, threshold, Utc::now())
}

/// Same as [`batch_alerts`] with an explicit generation time
pub fn batch_alerts_at(
    readings: &[SensorReading],
    scores: &[f64],
    labels: &[Label],
    threshold: f64,
    generated_at: DateTime<Utc>,
) -> Result<Vec<Alert>, ScoringError> {
    for (stage, len) in [("scores", scores.len()), ("labels", labels.len())] {
        if len != readings.len() {
            return Err(ScoringError::RowCountMismatch {
                stage,
                expected: readings.len(),
                actual: len,
            });
        }
    }

    let alerts = readings
        .iter()
        .zip(scores)
        .zip(labels)
        .enumerate()
        .filter(|&(_, ((_, &score), &label))| should_alert(score, label, threshold))
        .map(|(index, ((reading, &score), _))| {
            Alert::new(alert_id(&generated_at, index), generated_at, reading, score)
        })
        .collect();

    Ok(alerts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use chrono::TimeZone;
    use crate::logic::alert::types::ALERT_MESSAGE;

    fn readings(n: usize) -> Vec<SensorReading> {
        (0..n)
            .map(|i| {
                SensorReading::new(
                    Some(format!("2025-01-01 00:{i:02}:00")),
                    [60.0 + i as f64, 0.3, 30.0, 1500.0],
                )
            })
            .collect()
    }

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_should_alert_truth_table() {
        assert!(should_alert(0.7, Label::Normal, 0.6));
        assert!(should_alert(0.6, Label::Normal, 0.6));
        assert!(!should_alert(0.59, Label::Normal, 0.6));
        assert!(should_alert(0.1, Label::Anomaly, 0.6));
        assert!(should_alert(0.9, Label::Anomaly, 0.6));
    }

    #[test]
    fn test_label_alone_fires_below_threshold() {
        let alerts = batch_alerts_at(
            &readings(1),
            &[0.05],
            &[Label::Anomaly],
            0.6,
            fixed_time(),
        )
        .unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].anomaly_score, 0.05);
    }

    #[test]
    fn test_alert_contents() {
        let batch = readings(3);
        let alerts = batch_alerts_at(
            &batch,
            &[0.1, 0.8, 0.2],
            &[Label::Normal; 3],
            0.6,
            fixed_time(),
        )
        .unwrap();

        assert_eq!(alerts.len(), 1);
        let alert = &alerts[0];
        assert_eq!(alert.id, format!("alert-{}-1", fixed_time().timestamp()));
        assert_eq!(alert.timestamp, fixed_time());
        assert_eq!(alert.anomaly_row_ts.as_deref(), Some("2025-01-01 00:01:00"));
        assert_eq!(alert.temperature, 61.0);
        assert_eq!(alert.vibration, 0.3);
        assert_eq!(alert.pressure, 30.0);
        assert_eq!(alert.rpm, 1500.0);
        assert_eq!(alert.anomaly_score, 0.8);
        assert_eq!(alert.message, ALERT_MESSAGE);
    }

    #[test]
    fn test_ids_unique_within_same_second() {
        let n = 50;
        let alerts = batch_alerts_at(
            &readings(n),
            &vec![1.0; n],
            &vec![Label::Normal; n],
            0.6,
            fixed_time(),
        )
        .unwrap();

        let ids: HashSet<_> = alerts.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids.len(), n);
    }

    #[test]
    fn test_non_positive_threshold_fires_everything() {
        let alerts = batch_alerts_at(
            &readings(4),
            &[-0.4, -0.1, 0.0, 0.2],
            &[Label::Normal; 4],
            -0.5,
            fixed_time(),
        )
        .unwrap();
        assert_eq!(alerts.len(), 4);
    }

    #[test]
    fn test_huge_threshold_only_labels_fire() {
        let alerts = batch_alerts_at(
            &readings(4),
            &[0.9, 0.95, 0.99, 0.5],
            &[Label::Normal, Label::Anomaly, Label::Normal, Label::Anomaly],
            1e9,
            fixed_time(),
        )
        .unwrap();

        let fired: Vec<_> = alerts.iter().map(|a| a.anomaly_score).collect();
        assert_eq!(fired, vec![0.95, 0.5]);
    }

    #[test]
    fn test_empty_input() {
        let alerts = batch_alerts(&[], &[], &[], 0.6).unwrap();
        assert!(alerts.is_empty());
    }

    #[test]
    fn test_misaligned_input_rejected() {
        let result = batch_alerts_at(
            &readings(3),
            &[0.1, 0.2],
            &[Label::Normal; 3],
            0.6,
            fixed_time(),
        );
        assert_eq!(
            result,
            Err(ScoringError::RowCountMismatch { stage: "scores", expected: 3, actual: 2 })
        );
    }
}
