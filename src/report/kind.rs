//! Report variants and artifact naming

use chrono::NaiveDate;
use std::fmt;

/// The exportable report variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// CSV of KPI metric rows
    MetricsCsv,
    /// CSV of campaign performance rows
    CampaignsCsv,
    /// CSV of monthly revenue rows
    RevenueCsv,
    /// PDF with metrics and campaign sections
    MetricsPdf,
    /// PDF with the revenue trend section
    RevenuePdf,
    /// PDF with cover page and all three sections
    FullPdf,
}

impl ReportKind {
    /// Default artifact filename, combining a fixed prefix with the
    /// generation date
    pub fn filename(&self, date: NaiveDate) -> String {
        let date = date.format("%Y-%m-%d");
        match self {
            Self::MetricsCsv => format!("metrics-{}.csv", date),
            Self::CampaignsCsv => format!("campaigns-{}.csv", date),
            Self::RevenueCsv => format!("revenue-data-{}.csv", date),
            Self::MetricsPdf => format!("analytics-report-{}.pdf", date),
            Self::RevenuePdf => format!("revenue-trend-{}.pdf", date),
            Self::FullPdf => format!("complete-analytics-report-{}.pdf", date),
        }
    }

    /// MIME type of the artifact payload
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::MetricsCsv | Self::CampaignsCsv | Self::RevenueCsv => "text/csv;charset=utf-8",
            Self::MetricsPdf | Self::RevenuePdf | Self::FullPdf => "application/pdf",
        }
    }

    /// Bundle a finished payload with its save metadata
    pub fn artifact(&self, date: NaiveDate, bytes: Vec<u8>) -> Artifact {
        Artifact {
            filename: self.filename(date),
            mime_type: self.mime_type(),
            bytes,
        }
    }
}

/// A finished export payload plus the metadata the save collaborator needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Default save filename
    pub filename: String,

    /// MIME type of the payload
    pub mime_type: &'static str,

    /// The artifact content
    pub bytes: Vec<u8>,
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::MetricsCsv => "metrics CSV",
            Self::CampaignsCsv => "campaigns CSV",
            Self::RevenueCsv => "revenue CSV",
            Self::MetricsPdf => "analytics report PDF",
            Self::RevenuePdf => "revenue trend PDF",
            Self::FullPdf => "complete analytics report PDF",
        };
        write!(f, "{}", name)
    }
}
