//! Sensor Reading - one observation pulled out of an ingested row

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{DetectorError, DetectorResult, MalformedReason};
use super::layout::{FEATURE_COUNT, FEATURE_LAYOUT};

/// A row as handed over by the ingestion layer: named fields, untyped values.
pub type RawRow = Map<String, Value>;

/// Name of the optional timestamp column
pub const TIMESTAMP_FIELD: &str = "timestamp";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    /// Kept verbatim for display, never interpreted
    pub timestamp: Option<String>,
    pub temperature: f64,
    pub vibration: f64,
    pub pressure: f64,
    pub rpm: f64,
}

impl SensorReading {
    pub fn new(timestamp: Option<String>, values: [f64; FEATURE_COUNT]) -> Self {
        let [temperature, vibration, pressure, rpm] = values;
        Self {
            timestamp,
            temperature,
            vibration,
            pressure,
            rpm,
        }
    }

    /// Feature values in layout order
    pub fn features(&self) -> [f64; FEATURE_COUNT] {
        [self.temperature, self.vibration, self.pressure, self.rpm]
    }

    /// Build a reading from row `index` of a batch.
    ///
    /// Every layout column must be present and coercible to a finite f64.
    /// Numeric strings are accepted, as a CSV-backed ingestion layer emits them.
    pub fn from_row(index: usize, row: &RawRow) -> DetectorResult<Self> {
        let mut values = [0.0f64; FEATURE_COUNT];

        for (slot, &field) in values.iter_mut().zip(FEATURE_LAYOUT) {
            *slot = coerce_field(row.get(field)).map_err(|reason| {
                DetectorError::MalformedReading { row: index, field, reason }
            })?;
        }

        let timestamp = match row.get(TIMESTAMP_FIELD) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        };

        Ok(Self::new(timestamp, values))
    }
}

fn coerce_field(value: Option<&Value>) -> Result<f64, MalformedReason> {
    let number = match value {
        None | Some(Value::Null) => return Err(MalformedReason::Missing),
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| MalformedReason::NotNumeric(n.to_string()))?,
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| MalformedReason::NotNumeric(format!("{s:?}")))?,
        Some(other) => return Err(MalformedReason::NotNumeric(other.to_string())),
    };

    if number.is_finite() {
        Ok(number)
    } else {
        Err(MalformedReason::NotFinite)
    }
}
