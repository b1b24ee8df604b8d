//! Campaign performance model
//!
//! Represents one marketing campaign's performance snapshot. Cost and ROI are
//! pre-formatted display strings; clicks and conversions stay numeric so CSV
//! exports can emit raw values. The invariant conversions <= clicks is the
//! caller's responsibility and is not enforced here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a campaign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    /// Currently running
    Active,
    /// Temporarily stopped
    Paused,
    /// Finished its flight
    Completed,
}

impl CampaignStatus {
    /// Parse campaign status from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "active" => Some(Self::Active),
            "paused" => Some(Self::Paused),
            "completed" | "complete" => Some(Self::Completed),
            _ => None,
        }
    }

    /// The lowercase wire representation (matches the serde encoding)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Completed => "completed",
        }
    }
}

impl Default for CampaignStatus {
    fn default() -> Self {
        Self::Active
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Paused => write!(f, "Paused"),
            Self::Completed => write!(f, "Completed"),
        }
    }
}

/// One campaign performance row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignRow {
    /// Campaign name (e.g., "Email Marketing")
    pub campaign: String,

    /// Campaign status
    pub status: CampaignStatus,

    /// Total clicks recorded
    pub clicks: u64,

    /// Total conversions recorded
    pub conversions: u64,

    /// Formatted cost (e.g., "$2,400")
    pub cost: String,

    /// Formatted return on investment (e.g., "254%")
    pub roi: String,
}

impl CampaignRow {
    /// Create a new campaign row
    pub fn new(
        campaign: impl Into<String>,
        status: CampaignStatus,
        clicks: u64,
        conversions: u64,
        cost: impl Into<String>,
        roi: impl Into<String>,
    ) -> Self {
        Self {
            campaign: campaign.into(),
            status,
            clicks,
            conversions,
            cost: cost.into(),
            roi: roi.into(),
        }
    }
}
