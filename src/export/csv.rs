//! CSV export functionality
//!
//! Serializes record sequences into CSV text with a stable column order and a
//! synthetic `Exported` timestamp column appended to every row. Quoting and
//! escaping follow RFC 4180 via the `csv` crate; records end with `\n`.
//!
//! Campaign and revenue exports emit raw domain values (numeric clicks,
//! conversions, revenue, growth; lowercase status), not display formatting.
//! Metric rows are already display strings and pass through.

use chrono::{DateTime, SecondsFormat, Utc};
use csv::Writer;

use crate::error::{ReportError, ReportResult};
use crate::models::{CampaignRow, MetricRow, RevenueRow};

/// Serialize metric rows: `Metric,Value,Change,Exported`
pub fn metrics_to_csv(metrics: &[MetricRow], exported_at: DateTime<Utc>) -> ReportResult<String> {
    let stamp = timestamp(exported_at);
    let mut writer = Writer::from_writer(Vec::new());

    writer.write_record(["Metric", "Value", "Change", "Exported"])?;
    for m in metrics {
        writer.write_record([&m.title, &m.value, &m.change, &stamp])?;
    }

    into_string(writer)
}

/// Serialize campaign rows: `Campaign,Status,Clicks,Conversions,Cost,ROI,Exported`
pub fn campaigns_to_csv(
    campaigns: &[CampaignRow],
    exported_at: DateTime<Utc>,
) -> ReportResult<String> {
    let stamp = timestamp(exported_at);
    let mut writer = Writer::from_writer(Vec::new());

    writer.write_record([
        "Campaign",
        "Status",
        "Clicks",
        "Conversions",
        "Cost",
        "ROI",
        "Exported",
    ])?;
    for c in campaigns {
        writer.write_record([
            c.campaign.as_str(),
            c.status.as_str(),
            &c.clicks.to_string(),
            &c.conversions.to_string(),
            c.cost.as_str(),
            c.roi.as_str(),
            &stamp,
        ])?;
    }

    into_string(writer)
}

/// Serialize revenue rows: `Month,Revenue,Growth,Exported`
pub fn revenue_to_csv(revenue: &[RevenueRow], exported_at: DateTime<Utc>) -> ReportResult<String> {
    let stamp = timestamp(exported_at);
    let mut writer = Writer::from_writer(Vec::new());

    writer.write_record(["Month", "Revenue", "Growth", "Exported"])?;
    for r in revenue {
        writer.write_record([
            r.month.as_str(),
            &r.revenue.to_string(),
            &r.growth.to_string(),
            &stamp,
        ])?;
    }

    into_string(writer)
}

/// ISO-8601 timestamp with millisecond precision, identical for every row of
/// one export call
fn timestamp(exported_at: DateTime<Utc>) -> String {
    exported_at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn into_string(writer: Writer<Vec<u8>>) -> ReportResult<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| ReportError::Serialization(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ReportError::Serialization(e.to_string()))
}
