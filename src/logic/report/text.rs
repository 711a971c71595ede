//! Text report rendering
//!
//! Fixed precision per metric so identical alerts always render to
//! identical text.

use crate::logic::alert::Alert;

/// Rendered when a batch produced no alerts
pub const HEALTHY_REPORT: &str = "No anomalies detected. System healthy.";

const REPORT_HEADER: &str = "Anomaly Report:\n";

/// Render alerts in the order given. No sorting, capping or dedup.
pub fn generate_text_report(alerts: &[Alert]) -> String {
    if alerts.is_empty() {
        return HEALTHY_REPORT.to_string();
    }

    let mut lines = Vec::with_capacity(1 + alerts.len() * 2);
    lines.push(REPORT_HEADER.to_string());

    for alert in alerts {
        lines.push(format!("- {} at {} -> {}", alert.id, alert.timestamp, alert.message));
        lines.push(format!(
            " temp={:.1}, vib={:.2}, rpm={:.0}, score={:.3}",
            alert.temperature, alert.vibration, alert.rpm, alert.anomaly_score
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use crate::logic::alert::ALERT_MESSAGE;
    use crate::logic::features::SensorReading;

    fn alert(id: &str, values: [f64; 4], score: f64) -> Alert {
        let generated_at = Utc.with_ymd_and_hms(2025, 1, 1, 8, 30, 0).unwrap();
        Alert::new(id.to_string(), generated_at, &SensorReading::new(None, values), score)
    }

    #[test]
    fn test_empty_is_healthy() {
        assert_eq!(generate_text_report(&[]), "No anomalies detected. System healthy.");
    }

    #[test]
    fn test_report_layout() {
        let alerts = vec![
            alert("alert-1735720200-1", [87.26, 1.234, 44.0, 2012.4], 0.65432),
            alert("alert-1735720200-3", [60.04, 0.3, 30.0, 1499.6], 0.9),
        ];

        let expected = format!(
            "Anomaly Report:\n\n\
             - alert-1735720200-1 at 2025-01-01 08:30:00 UTC -> {msg}\n \
             temp=87.3, vib=1.23, rpm=2012, score=0.654\n\
             - alert-1735720200-3 at 2025-01-01 08:30:00 UTC -> {msg}\n \
             temp=60.0, vib=0.30, rpm=1500, score=0.900",
            msg = ALERT_MESSAGE
        );

        assert_eq!(generate_text_report(&alerts), expected);
    }

    #[test]
    fn test_two_lines_per_alert() {
        let alerts: Vec<_> = (0..5)
            .map(|i| alert(&format!("alert-0-{i}"), [60.0, 0.3, 30.0, 1500.0], 0.7))
            .collect();

        let report = generate_text_report(&alerts);
        // header, blank separator, then two lines per alert
        assert_eq!(report.lines().count(), 2 + alerts.len() * 2);
    }

    #[test]
    fn test_deterministic() {
        let alerts = vec![alert("alert-0-0", [61.11, 0.456, 31.0, 1550.5], 0.61)];
        assert_eq!(generate_text_report(&alerts), generate_text_report(&alerts));
    }
}
