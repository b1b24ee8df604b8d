//! Report assembly
//!
//! Orchestrates the document composer to produce the named report variants
//! and finalizes documents with per-page footer metadata. Assembly has no
//! side effects; persistence belongs to the caller.

use chrono::NaiveDate;

use crate::document::{layout, Document};
use crate::error::ReportResult;
use crate::models::{CampaignRow, MetricRow, RevenueRow};
use crate::report::TableSection;

/// Build the analytics report: title lines plus metrics and campaign sections
///
/// The campaign section continues from wherever the metrics section ended,
/// subject to the composer's pagination policy.
pub fn build_metrics_report(
    metrics: &[MetricRow],
    campaigns: &[CampaignRow],
    brand: &str,
    generated_on: NaiveDate,
) -> ReportResult<Document> {
    let mut doc = Document::new();
    doc.push_page();

    doc.push_text(format!("{} Analytics Report", brand), layout::TITLE_SIZE)?;
    doc.push_text(
        format!("Generated on: {}", generated_on.format("%Y-%m-%d")),
        layout::SUBTITLE_SIZE,
    )?;

    doc.compose_section(&TableSection::from_metrics("Key Metrics Overview", metrics))?;
    doc.compose_section(&TableSection::from_campaigns(
        "Campaign Performance",
        campaigns,
    ))?;

    Ok(doc)
}

/// Build the revenue trend report: title lines plus the revenue section
pub fn build_revenue_report(
    revenue: &[RevenueRow],
    generated_on: NaiveDate,
) -> ReportResult<Document> {
    let mut doc = Document::new();
    doc.push_page();

    doc.push_text("Revenue Trend Report", layout::TITLE_SIZE)?;
    doc.push_text(
        format!("Generated on: {}", generated_on.format("%Y-%m-%d")),
        layout::SUBTITLE_SIZE,
    )?;

    doc.compose_section(&TableSection::from_revenue("Revenue Trend", revenue))?;

    Ok(doc)
}

/// Build the complete analytics report
///
/// Cover page (no table), then metrics and campaigns flowing together, then
/// the revenue section on a forced new page.
pub fn build_full_report(
    metrics: &[MetricRow],
    campaigns: &[CampaignRow],
    revenue: &[RevenueRow],
    brand: &str,
    attribution: &str,
    generated_on: NaiveDate,
) -> ReportResult<Document> {
    let mut doc = Document::new();

    // Cover page
    doc.push_page();
    doc.push_text(brand, layout::COVER_SIZE)?;
    doc.push_text("Complete Analytics Report", layout::COVER_SIZE)?;
    doc.push_text(
        format!("Report Period: {}", generated_on.format("%Y-%m-%d")),
        layout::SUBTITLE_SIZE,
    )?;
    doc.push_text(attribution, layout::SUBTITLE_SIZE)?;

    // Metrics and campaigns flow together
    doc.push_page();
    doc.compose_section(&TableSection::from_metrics(
        "Key Performance Metrics",
        metrics,
    ))?;
    doc.compose_section(&TableSection::from_campaigns(
        "Campaign Performance Analysis",
        campaigns,
    ))?;

    // Revenue always starts its own page
    doc.push_page();
    doc.compose_section(&TableSection::from_revenue("Revenue Trend Analysis", revenue))?;

    Ok(doc)
}

/// Stamp `Page {i} of {n} | <report name> | <date>` on every page
///
/// Must run after all sections are composed: the total page count is only
/// known once composition is complete.
pub fn finalize(doc: &mut Document, report_name: &str, generated_on: NaiveDate) {
    let date = generated_on.format("%Y-%m-%d").to_string();
    let name = report_name.to_string();
    doc.stamp_footers(move |i, n| format!("Page {} of {} | {} | {}", i, n, name, date));
}
