//! Built-in demo dataset
//!
//! Deterministic sample data for trying the exporter without any input file:
//! four KPI rows, four campaigns, and six months of revenue history.

use crate::datasource::DataSource;
use crate::display::format::{format_currency, group_thousands};
use crate::error::ReportResult;
use crate::models::{CampaignRow, CampaignStatus, MetricRow, RevenueRow};

/// Demo analytics data source
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticSource;

impl StaticSource {
    /// Create the demo source
    pub fn new() -> Self {
        Self
    }
}

impl DataSource for StaticSource {
    fn metrics(&self) -> ReportResult<Vec<MetricRow>> {
        Ok(vec![
            MetricRow::new("Total Revenue", format_currency(89000), "+35%"),
            MetricRow::new("Total Users", group_thousands(24500), "+12%"),
            MetricRow::new("Conversions", group_thousands(3690), "+28%"),
            MetricRow::new("Page Views", "156K", "+18%"),
        ])
    }

    fn campaigns(&self) -> ReportResult<Vec<CampaignRow>> {
        Ok(vec![
            CampaignRow::new(
                "Email Marketing",
                CampaignStatus::Active,
                12500,
                850,
                format_currency(2400),
                "254%",
            ),
            CampaignRow::new(
                "Social Media",
                CampaignStatus::Paused,
                8900,
                450,
                format_currency(1800),
                "189%",
            ),
            CampaignRow::new(
                "Search Ads",
                CampaignStatus::Active,
                15600,
                1200,
                format_currency(3200),
                "312%",
            ),
            CampaignRow::new(
                "Display Ads",
                CampaignStatus::Active,
                6700,
                890,
                format_currency(1600),
                "445%",
            ),
        ])
    }

    fn revenue(&self) -> ReportResult<Vec<RevenueRow>> {
        Ok(vec![
            RevenueRow::new("Jan", 45000, 12),
            RevenueRow::new("Feb", 52000, 16),
            RevenueRow::new("Mar", 48000, -8),
            RevenueRow::new("Apr", 67000, 40),
            RevenueRow::new("May", 72000, 7),
            RevenueRow::new("Jun", 89000, 24),
        ])
    }
}
