//! Alert Module - threshold policy and alert records

pub mod types;
pub mod batcher;

pub use types::{Alert, ALERT_MESSAGE};
pub use batcher::{alert_id, batch_alerts, batch_alerts_at, should_alert};
