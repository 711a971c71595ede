//! Machine Failure Detector
//!
//! Scores batches of sensor readings (temperature, vibration, pressure,
//! rpm) with a pluggable anomaly model, raises alerts for suspicious rows
//! and renders them as a text report.

pub mod constants;
pub mod config;
pub mod error;
pub mod logic;

pub use error::{DetectorError, DetectorResult, ModelLoadError, ScoringError};
pub use logic::alert::Alert;
pub use logic::features::{RawRow, SensorReading};
pub use logic::model::{AnomalyModel, BaselineModel, Label};
pub use logic::pipeline::{DetectionOutcome, Detector};
pub use logic::report::DetectionResponse;
