//! Logic Module - detection core
//!
//! - `features`: row ingestion and the fixed feature layout
//! - `model`: anomaly model capability and score inversion
//! - `alert`: threshold policy and alert records
//! - `report`: text report and response payload
//! - `pipeline`: wires the stages together

pub mod features;
pub mod model;
pub mod alert;
pub mod report;
pub mod pipeline;
