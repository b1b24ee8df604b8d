//! CLI command handlers

pub mod export;
pub mod preview;

use clap::ValueEnum;

pub use export::{handle_export_command, CsvTarget, ExportCommands, PdfTarget};
pub use preview::handle_preview_command;

/// Record kinds addressable from the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RecordTarget {
    /// KPI metric rows
    Metrics,
    /// Campaign performance rows
    Campaigns,
    /// Monthly revenue rows
    Revenue,
}
