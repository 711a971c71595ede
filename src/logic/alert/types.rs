use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::logic::features::SensorReading;

/// Advisory attached to every alert
pub const ALERT_MESSAGE: &str = "Anomalous reading detected — recommend inspection";

/// A flagged reading. Built once by the batcher, never modified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    /// When the alert was generated, not when the reading was taken
    pub timestamp: DateTime<Utc>,
    /// The reading's own timestamp, verbatim
    pub anomaly_row_ts: Option<String>,

    pub temperature: f64,
    pub vibration: f64,
    pub pressure: f64,
    pub rpm: f64,

    pub anomaly_score: f64,
    pub message: String,
}

impl Alert {
    pub fn new(
        id: String,
        generated_at: DateTime<Utc>,
        reading: &SensorReading,
        anomaly_score: f64,
    ) -> Self {
        Self {
            id,
            timestamp: generated_at,
            anomaly_row_ts: reading.timestamp.clone(),
            temperature: reading.temperature,
            vibration: reading.vibration,
            pressure: reading.pressure,
            rpm: reading.rpm,
            anomaly_score,
            message: ALERT_MESSAGE.to_string(),
        }
    }
}
