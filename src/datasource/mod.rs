//! Analytics data sources
//!
//! The export engine never fetches data itself; a [`DataSource`] hands it
//! fully materialized record arrays at export time. Two implementations:
//! a built-in demo dataset and a JSON-file-backed source.

pub mod json_file;
pub mod static_data;

use crate::error::ReportResult;
use crate::models::{CampaignRow, MetricRow, RevenueRow};

pub use json_file::JsonFileSource;
pub use static_data::StaticSource;

/// Supplies the record arrays a report is built from
pub trait DataSource {
    /// KPI metric rows for the dashboard strip
    fn metrics(&self) -> ReportResult<Vec<MetricRow>>;

    /// Campaign performance rows
    fn campaigns(&self) -> ReportResult<Vec<CampaignRow>>;

    /// Monthly revenue rows
    fn revenue(&self) -> ReportResult<Vec<RevenueRow>>;
}
