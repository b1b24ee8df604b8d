//! JSON-file-backed data source
//!
//! Loads a full analytics snapshot from a single JSON document:
//!
//! ```json
//! {
//!   "metrics":   [{ "title": "...", "value": "...", "change": "..." }],
//!   "campaigns": [{ "campaign": "...", "status": "active", ... }],
//!   "revenue":   [{ "month": "Jan", "revenue": 45000, "growth": 12 }]
//! }
//! ```
//!
//! The whole file is parsed up front so a malformed snapshot fails the export
//! before any composition starts.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::datasource::DataSource;
use crate::error::{ReportError, ReportResult};
use crate::models::{CampaignRow, MetricRow, RevenueRow};

/// One analytics snapshot as stored on disk
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    /// KPI metric rows
    #[serde(default)]
    pub metrics: Vec<MetricRow>,

    /// Campaign performance rows
    #[serde(default)]
    pub campaigns: Vec<CampaignRow>,

    /// Monthly revenue rows
    #[serde(default)]
    pub revenue: Vec<RevenueRow>,
}

/// Data source backed by a JSON snapshot file
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    snapshot: AnalyticsSnapshot,
}

impl JsonFileSource {
    /// Load and parse a snapshot file
    pub fn load(path: impl AsRef<Path>) -> ReportResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ReportError::DataSource(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let snapshot: AnalyticsSnapshot = serde_json::from_str(&contents).map_err(|e| {
            ReportError::DataSource(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        Ok(Self { snapshot })
    }

    /// Wrap an already-parsed snapshot
    pub fn from_snapshot(snapshot: AnalyticsSnapshot) -> Self {
        Self { snapshot }
    }
}

impl DataSource for JsonFileSource {
    fn metrics(&self) -> ReportResult<Vec<MetricRow>> {
        Ok(self.snapshot.metrics.clone())
    }

    fn campaigns(&self) -> ReportResult<Vec<CampaignRow>> {
        Ok(self.snapshot.campaigns.clone())
    }

    fn revenue(&self) -> ReportResult<Vec<RevenueRow>> {
        Ok(self.snapshot.revenue.clone())
    }
}
