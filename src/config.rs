//! Configuration module

use std::env;
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_ALERT_CAP, DEFAULT_MODEL_PATH, DEFAULT_THRESHOLD, ENV_ALERT_CAP, ENV_MODEL_PATH,
    ENV_THRESHOLD,
};

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Model artifact path
    pub model_path: PathBuf,

    /// Alert threshold applied when the caller passes none
    pub threshold: f64,

    /// Alerts kept in the response payload
    pub alert_cap: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            threshold: DEFAULT_THRESHOLD,
            alert_cap: DEFAULT_ALERT_CAP,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unparsable values fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            model_path: lookup(ENV_MODEL_PATH)
                .map(PathBuf::from)
                .unwrap_or(defaults.model_path),

            threshold: lookup(ENV_THRESHOLD)
                .and_then(|t| t.trim().parse().ok())
                .unwrap_or(defaults.threshold),

            alert_cap: lookup(ENV_ALERT_CAP)
                .and_then(|c| c.trim().parse().ok())
                .unwrap_or(defaults.alert_cap),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.threshold, 0.6);
        assert_eq!(config.alert_cap, 20);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("DETECTOR_MODEL_PATH", "/opt/models/press-7.json"),
            ("DETECTOR_THRESHOLD", "-0.25"),
            ("DETECTOR_ALERT_CAP", "5"),
        ]));

        assert_eq!(config.model_path, PathBuf::from("/opt/models/press-7.json"));
        assert_eq!(config.threshold, -0.25);
        assert_eq!(config.alert_cap, 5);
    }

    #[test]
    fn test_garbage_falls_back() {
        let config = Config::from_lookup(lookup(&[
            ("DETECTOR_THRESHOLD", "high"),
            ("DETECTOR_ALERT_CAP", "-3"),
        ]));

        assert_eq!(config.threshold, DEFAULT_THRESHOLD);
        assert_eq!(config.alert_cap, DEFAULT_ALERT_CAP);
    }
}
