//! Features Module - Feature Extraction
//!
//! Turns ingested rows into the fixed-order numeric matrix the model scores.

pub mod layout;
pub mod reading;
pub mod extractor;

pub use layout::{FEATURE_COUNT, FEATURE_LAYOUT, FEATURE_VERSION, LayoutInfo};
pub use reading::{RawRow, SensorReading};
pub use extractor::{extract_readings, to_feature_matrix, FeatureMatrix};
