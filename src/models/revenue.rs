//! Monthly revenue model
//!
//! Keeps raw numeric values; display formatting ($ grouping, percent suffix)
//! happens at normalization time so CSV exports can emit the raw numbers.

use serde::{Deserialize, Serialize};

/// One month of revenue history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueRow {
    /// Short month label (e.g., "Jan")
    pub month: String,

    /// Revenue for the month in whole currency units
    pub revenue: u64,

    /// Growth versus the prior month, in whole percent (may be negative)
    pub growth: i64,
}

impl RevenueRow {
    /// Create a new revenue row
    pub fn new(month: impl Into<String>, revenue: u64, growth: i64) -> Self {
        Self {
            month: month.into(),
            revenue,
            growth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let r = RevenueRow::new("Jan", 45000, 12);
        assert_eq!(r.month, "Jan");
        assert_eq!(r.revenue, 45000);
        assert_eq!(r.growth, 12);
    }

    #[test]
    fn test_negative_growth() {
        let r = RevenueRow::new("Mar", 48000, -8);
        assert_eq!(r.growth, -8);
    }

    #[test]
    fn test_serde_round_trip() {
        let r = RevenueRow::new("Jun", 89000, 24);
        let json = serde_json::to_string(&r).unwrap();
        let back: RevenueRow = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}
