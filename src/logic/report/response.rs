//! Response payload for outer surfaces (CLI, HTTP handlers)
//!
//! The pipeline hands back every alert. Capping the list for transport is
//! decided here, not in the core.

use serde::{Deserialize, Serialize};

use crate::logic::alert::Alert;
use crate::logic::pipeline::DetectionOutcome;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionResponse {
    /// Rows received in the batch
    pub rows: usize,
    /// All alerts raised, before capping
    pub alerts_count: usize,
    /// First `cap` alerts in row order
    pub alerts: Vec<Alert>,
    /// Text report over the full alert list
    pub report: String,
}

impl DetectionResponse {
    pub fn from_outcome(outcome: &DetectionOutcome, cap: usize) -> Self {
        Self {
            rows: outcome.rows,
            alerts_count: outcome.alerts.len(),
            alerts: outcome.alerts.iter().take(cap).cloned().collect(),
            report: outcome.report.clone(),
        }
    }
}
