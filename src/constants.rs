//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.

/// Score at or above which a row raises an alert
pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// Alerts included in a response payload; the rest are only counted
pub const DEFAULT_ALERT_CAP: usize = 20;

/// Model artifact loaded at startup
pub const DEFAULT_MODEL_PATH: &str = "models/baseline.json";

/// Default log filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "machine_failure_detector=info";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Machine Failure Detector";

// Environment variable names
pub const ENV_MODEL_PATH: &str = "DETECTOR_MODEL_PATH";
pub const ENV_THRESHOLD: &str = "DETECTOR_THRESHOLD";
pub const ENV_ALERT_CAP: &str = "DETECTOR_ALERT_CAP";
