//! Feature Extractor - rows → readings → numeric matrix
//!
//! Strictly columnar: picks the layout columns, coerces them, and stacks
//! them in layout order. No scaling, no derived features.

use ndarray::Array2;

use crate::error::DetectorResult;
use super::layout::FEATURE_COUNT;
use super::reading::{RawRow, SensorReading};

/// One row per reading, columns in `FEATURE_LAYOUT` order
pub type FeatureMatrix = Array2<f64>;

/// Convert a whole batch, failing fast on the first malformed row.
pub fn extract_readings(rows: &[RawRow]) -> DetectorResult<Vec<SensorReading>> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| SensorReading::from_row(index, row))
        .collect()
}

/// Stack readings into an `n x FEATURE_COUNT` matrix
pub fn to_feature_matrix(readings: &[SensorReading]) -> FeatureMatrix {
    Array2::from_shape_fn((readings.len(), FEATURE_COUNT), |(i, j)| {
        readings[i].features()[j]
    })
}
