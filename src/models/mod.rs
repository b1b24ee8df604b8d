//! Core data models for admetrics
//!
//! This module contains the record types that feed the report export engine:
//! KPI metrics, campaign performance rows, and monthly revenue rows. All of
//! them are immutable value records supplied by the caller before export.

pub mod campaign;
pub mod metric;
pub mod revenue;

pub use campaign::{CampaignRow, CampaignStatus};
pub use metric::MetricRow;
pub use revenue::RevenueRow;
