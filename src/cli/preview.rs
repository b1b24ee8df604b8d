//! Terminal preview of report tables

use std::path::PathBuf;

use crate::cli::RecordTarget;
use crate::datasource::{DataSource, JsonFileSource, StaticSource};
use crate::display::render_section;
use crate::error::ReportResult;
use crate::report::TableSection;

/// Print one normalized report table to stdout
pub fn handle_preview_command(target: RecordTarget, input: Option<PathBuf>) -> ReportResult<()> {
    let source: Box<dyn DataSource> = match input {
        Some(path) => Box::new(JsonFileSource::load(path)?),
        None => Box::new(StaticSource::new()),
    };

    let section = match target {
        RecordTarget::Metrics => TableSection::from_metrics("Key Metrics", &source.metrics()?),
        RecordTarget::Campaigns => {
            TableSection::from_campaigns("Campaign Performance", &source.campaigns()?)
        }
        RecordTarget::Revenue => TableSection::from_revenue("Revenue Trend", &source.revenue()?),
    };

    print!("{}", render_section(&section));
    Ok(())
}
