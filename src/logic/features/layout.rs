//! Feature Layout - Centralized Feature Definition
//!
//! **This file controls the sensor feature schema**
//!
//! ## Rules:
//! 1. Add feature → increment FEATURE_VERSION
//! 2. Change order → increment FEATURE_VERSION
//! 3. Remove feature → increment FEATURE_VERSION
//!
//! Model artifacts record the layout they were fitted against and are
//! rejected on load when it differs from this one.

use crc32fast::Hasher;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// FEATURE VERSION
// ============================================================================

/// Current feature layout version
pub const FEATURE_VERSION: u8 = 1;

// ============================================================================
// FEATURE LAYOUT
// ============================================================================

/// Sensor columns in the exact order they appear in a feature row.
/// Never inferred from the order of columns in the input.
pub const FEATURE_LAYOUT: &[&str] = &[
    "temperature", // 0: degrees
    "vibration",   // 1: vibration amplitude
    "pressure",    // 2: pressure units
    "rpm",         // 3: rotations per minute
];

/// Total number of features
/// Must match FEATURE_LAYOUT.len()
pub const FEATURE_COUNT: usize = 4;

// ============================================================================
// LAYOUT HASH
// ============================================================================

/// CRC32 over the version byte and every feature name in order.
pub fn layout_hash() -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(&[FEATURE_VERSION]);

    for name in FEATURE_LAYOUT {
        hasher.update(name.as_bytes());
        hasher.update(&[0]);
    }

    hasher.finalize()
}

/// Layout information for logging and artifact metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutInfo {
    pub version: u8,
    pub hash: u32,
    pub feature_names: Vec<String>,
}

impl LayoutInfo {
    pub fn current() -> Self {
        Self {
            version: FEATURE_VERSION,
            hash: layout_hash(),
            feature_names: FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect(),
        }
    }
}

// ============================================================================
// LAYOUT VALIDATION
// ============================================================================

#[derive(Debug, Clone, Error)]
pub enum LayoutMismatchError {
    #[error("feature layout version mismatch: expected v{expected}, got v{actual}")]
    Version { expected: u8, actual: u8 },

    #[error("feature layout mismatch: expected {expected:?}, got {actual:?}")]
    Names { expected: Vec<String>, actual: Vec<String> },

    #[error("feature layout hash mismatch: expected {expected:08x}, got {actual:08x}")]
    Hash { expected: u32, actual: u32 },
}

/// Validate a declared layout against the current one.
///
/// `hash` is optional because hand-written artifacts rarely carry it; when
/// present it must match.
pub fn validate_layout(
    version: u8,
    names: &[String],
    hash: Option<u32>,
) -> Result<(), LayoutMismatchError> {
    if version != FEATURE_VERSION {
        return Err(LayoutMismatchError::Version {
            expected: FEATURE_VERSION,
            actual: version,
        });
    }

    if !names.iter().map(String::as_str).eq(FEATURE_LAYOUT.iter().copied()) {
        return Err(LayoutMismatchError::Names {
            expected: LayoutInfo::current().feature_names,
            actual: names.to_vec(),
        });
    }

    if let Some(actual) = hash {
        let expected = layout_hash();
        if actual != expected {
            return Err(LayoutMismatchError::Hash { expected, actual });
        }
    }

    Ok(())
}

/// Get feature index by name
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|&n| n == name)
}

/// Get feature name by index
pub fn feature_name(index: usize) -> Option<&'static str> {
    FEATURE_LAYOUT.get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current_names() -> Vec<String> {
        FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_feature_count() {
        assert_eq!(FEATURE_LAYOUT.len(), FEATURE_COUNT);
    }

    #[test]
    fn test_layout_hash_stable() {
        assert_eq!(layout_hash(), layout_hash());
        assert_ne!(layout_hash(), 0);
    }

    #[test]
    fn test_validate_layout_success() {
        assert!(validate_layout(FEATURE_VERSION, &current_names(), None).is_ok());
        assert!(validate_layout(FEATURE_VERSION, &current_names(), Some(layout_hash())).is_ok());
    }

    #[test]
    fn test_validate_layout_version_mismatch() {
        let result = validate_layout(FEATURE_VERSION + 1, &current_names(), None);
        assert!(matches!(result, Err(LayoutMismatchError::Version { .. })));
    }

    #[test]
    fn test_validate_layout_reordered_names() {
        let names = vec![
            "vibration".to_string(),
            "temperature".to_string(),
            "pressure".to_string(),
            "rpm".to_string(),
        ];
        let result = validate_layout(FEATURE_VERSION, &names, None);
        assert!(matches!(result, Err(LayoutMismatchError::Names { .. })));
    }

    #[test]
    fn test_validate_layout_hash_mismatch() {
        let result = validate_layout(FEATURE_VERSION, &current_names(), Some(!layout_hash()));
        assert!(matches!(result, Err(LayoutMismatchError::Hash { .. })));
    }

    #[test]
    fn test_feature_lookup() {
        assert_eq!(feature_index("temperature"), Some(0));
        assert_eq!(feature_index("rpm"), Some(3));
        assert_eq!(feature_index("humidity"), None);
        assert_eq!(feature_name(2), Some("pressure"));
        assert_eq!(feature_name(4), None);
    }
}
