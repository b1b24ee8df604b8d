//! Record normalization into table sections
//!
//! Maps each record kind onto a flat, uniformly-typed table representation
//! with a fixed column order. Sections are produced transiently and consumed
//! once by the document composer or the terminal preview.

use crate::display::format::{format_currency, format_growth, group_thousands};
use crate::models::{CampaignRow, MetricRow, RevenueRow};

/// A titled table: ordered column headers plus ordered row tuples
#[derive(Debug, Clone, PartialEq)]
pub struct TableSection {
    /// Section title rendered above the table
    pub title: String,

    /// Column headers, in display order
    pub columns: Vec<String>,

    /// Row values as display strings, one inner vec per record
    pub rows: Vec<Vec<String>>,
}

impl TableSection {
    /// Normalize metric records: `[Metric, Value, Change]`
    ///
    /// Metric values are already display strings and pass through verbatim.
    /// An empty input yields a zero-row section.
    pub fn from_metrics(title: impl Into<String>, metrics: &[MetricRow]) -> Self {
        Self {
            title: title.into(),
            columns: columns(&["Metric", "Value", "Change"]),
            rows: metrics
                .iter()
                .map(|m| vec![m.title.clone(), m.value.clone(), m.change.clone()])
                .collect(),
        }
    }

    /// Normalize campaign records: `[Campaign, Status, Clicks, Conversions, Cost, ROI]`
    ///
    /// Clicks and conversions are thousands-grouped; status is rendered with
    /// its capitalized display form.
    pub fn from_campaigns(title: impl Into<String>, campaigns: &[CampaignRow]) -> Self {
        Self {
            title: title.into(),
            columns: columns(&["Campaign", "Status", "Clicks", "Conversions", "Cost", "ROI"]),
            rows: campaigns
                .iter()
                .map(|c| {
                    vec![
                        c.campaign.clone(),
                        c.status.to_string(),
                        group_thousands(c.clicks),
                        group_thousands(c.conversions),
                        c.cost.clone(),
                        c.roi.clone(),
                    ]
                })
                .collect(),
        }
    }

    /// Normalize revenue records: `[Month, Revenue, Growth %]`
    ///
    /// Revenue is formatted as currency, growth as a whole percent.
    pub fn from_revenue(title: impl Into<String>, revenue: &[RevenueRow]) -> Self {
        Self {
            title: title.into(),
            columns: columns(&["Month", "Revenue", "Growth %"]),
            rows: revenue
                .iter()
                .map(|r| {
                    vec![
                        r.month.clone(),
                        format_currency(r.revenue),
                        format_growth(r.growth),
                    ]
                })
                .collect(),
        }
    }
}

fn columns(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CampaignStatus;

    #[test]
    fn test_from_metrics() {
        let metrics = vec![MetricRow::new("Total Revenue", "$89,000", "+35%")];
        let section = TableSection::from_metrics("Key Metrics", &metrics);

        assert_eq!(section.title, "Key Metrics");
        assert_eq!(section.columns, vec!["Metric", "Value", "Change"]);
        assert_eq!(
            section.rows,
            vec![vec!["Total Revenue", "$89,000", "+35%"]]
        );
    }

    #[test]
    fn test_from_campaigns_formats_counts_and_status() {
        let campaigns = vec![CampaignRow::new(
            "Email Marketing",
            CampaignStatus::Active,
            12500,
            850,
            "$2,400",
            "254%",
        )];
        let section = TableSection::from_campaigns("Campaign Performance", &campaigns);

        assert_eq!(
            section.columns,
            vec!["Campaign", "Status", "Clicks", "Conversions", "Cost", "ROI"]
        );
        assert_eq!(
            section.rows[0],
            vec!["Email Marketing", "Active", "12,500", "850", "$2,400", "254%"]
        );
    }

    #[test]
    fn test_from_revenue_formats_currency_and_growth() {
        let revenue = vec![
            RevenueRow::new("Jan", 45000, 12),
            RevenueRow::new("Mar", 48000, -8),
        ];
        let section = TableSection::from_revenue("Revenue Trend", &revenue);

        assert_eq!(section.columns, vec!["Month", "Revenue", "Growth %"]);
        assert_eq!(section.rows[0], vec!["Jan", "$45,000", "12%"]);
        assert_eq!(section.rows[1], vec!["Mar", "$48,000", "-8%"]);
    }

    #[test]
    fn test_empty_input_yields_zero_rows() {
        let section = TableSection::from_metrics("Key Metrics", &[]);
        assert!(section.rows.is_empty());
        assert_eq!(section.columns.len(), 3);

        let section = TableSection::from_campaigns("Campaigns", &[]);
        assert!(section.rows.is_empty());
        assert_eq!(section.columns.len(), 6);
    }
}
