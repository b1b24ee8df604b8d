//! KPI metric model
//!
//! Represents one display row on the dashboard's key-metrics strip. Value and
//! change are already display strings (e.g. "$89,000" / "+35%"), produced by
//! whoever assembled the dashboard state.

use serde::{Deserialize, Serialize};

/// One key-performance-indicator row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricRow {
    /// Metric name (e.g., "Total Revenue")
    pub title: String,

    /// Formatted current value (e.g., "$89,000" or "156K")
    pub value: String,

    /// Formatted change indicator (e.g., "+35%")
    pub change: String,
}

impl MetricRow {
    /// Create a new metric row
    pub fn new(
        title: impl Into<String>,
        value: impl Into<String>,
        change: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            change: change.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let m = MetricRow::new("Total Revenue", "$89,000", "+35%");
        assert_eq!(m.title, "Total Revenue");
        assert_eq!(m.value, "$89,000");
        assert_eq!(m.change, "+35%");
    }

    #[test]
    fn test_serde_round_trip() {
        let m = MetricRow::new("Conversions", "3,690", "+28%");
        let json = serde_json::to_string(&m).unwrap();
        let back: MetricRow = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }
}
