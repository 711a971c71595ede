//! Model Module - Anomaly Scoring
//!
//! Keeps the concrete estimator behind a capability trait so the
//! alerting stages never see it.

pub mod inference;
pub mod scoring;
pub mod baseline;

// Re-export common types
pub use inference::{AnomalyModel, Label, ModelMetadata};
pub use scoring::{score_matrix, ScoredBatch};
pub use baseline::{BaselineArtifact, BaselineModel};
