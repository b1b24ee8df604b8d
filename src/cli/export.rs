//! CLI commands for report export
//!
//! Builds the full artifact payload in memory before touching the output
//! file, so a failed export never leaves a partial file behind. A
//! single-flight guard wraps each export; composition either runs to
//! completion or fails entirely.

use chrono::Utc;
use clap::{Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::datasource::{DataSource, JsonFileSource, StaticSource};
use crate::error::{ReportError, ReportResult};
use crate::export::{self, ExportGuard};
use crate::report::{self, ReportKind};

/// CSV export targets
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CsvTarget {
    /// KPI metric rows
    Metrics,
    /// Campaign performance rows
    Campaigns,
    /// Monthly revenue rows
    Revenue,
}

/// PDF report variants
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PdfTarget {
    /// Metrics and campaign sections
    Metrics,
    /// Revenue trend section
    Revenue,
    /// Cover page plus all sections
    Full,
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export records to a CSV file
    Csv {
        /// Which records to export
        target: CsvTarget,

        /// Output file path (default: <kind>-<date>.csv in the output directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Read data from a JSON snapshot instead of the demo dataset
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Export a report to a PDF file
    Pdf {
        /// Which report to build
        target: PdfTarget,

        /// Output file path (default: <kind>-<date>.pdf in the output directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Read data from a JSON snapshot instead of the demo dataset
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

/// Handle export commands
///
/// The caller owns the guard so every export request contends on the same
/// flag; a request arriving while a ticket is alive is rejected.
pub fn handle_export_command(
    settings: &Settings,
    guard: &ExportGuard,
    cmd: ExportCommands,
) -> ReportResult<()> {
    let _ticket = guard.begin()?;

    match cmd {
        ExportCommands::Csv {
            target,
            output,
            input,
        } => handle_export_csv(settings, target, output, input),
        ExportCommands::Pdf {
            target,
            output,
            input,
        } => handle_export_pdf(settings, target, output, input),
    }
}

fn handle_export_csv(
    settings: &Settings,
    target: CsvTarget,
    output: Option<PathBuf>,
    input: Option<PathBuf>,
) -> ReportResult<()> {
    let source = resolve_source(input)?;
    let now = Utc::now();

    let (kind, csv, row_count) = match target {
        CsvTarget::Metrics => {
            let rows = source.metrics()?;
            (
                ReportKind::MetricsCsv,
                export::metrics_to_csv(&rows, now)?,
                rows.len(),
            )
        }
        CsvTarget::Campaigns => {
            let rows = source.campaigns()?;
            (
                ReportKind::CampaignsCsv,
                export::campaigns_to_csv(&rows, now)?,
                rows.len(),
            )
        }
        CsvTarget::Revenue => {
            let rows = source.revenue()?;
            (
                ReportKind::RevenueCsv,
                export::revenue_to_csv(&rows, now)?,
                rows.len(),
            )
        }
    };

    let artifact = kind.artifact(now.date_naive(), csv.into_bytes());
    let path = resolve_output(settings, output, &artifact.filename);
    write_artifact(&path, &artifact.bytes)?;

    println!(
        "Exported {} rows ({}) to: {}",
        row_count,
        artifact.mime_type,
        path.display()
    );
    Ok(())
}

fn handle_export_pdf(
    settings: &Settings,
    target: PdfTarget,
    output: Option<PathBuf>,
    input: Option<PathBuf>,
) -> ReportResult<()> {
    let source = resolve_source(input)?;
    let today = Utc::now().date_naive();

    let (kind, mut doc) = match target {
        PdfTarget::Metrics => (
            ReportKind::MetricsPdf,
            report::build_metrics_report(
                &source.metrics()?,
                &source.campaigns()?,
                &settings.brand,
                today,
            )?,
        ),
        PdfTarget::Revenue => (
            ReportKind::RevenuePdf,
            report::build_revenue_report(&source.revenue()?, today)?,
        ),
        PdfTarget::Full => (
            ReportKind::FullPdf,
            report::build_full_report(
                &source.metrics()?,
                &source.campaigns()?,
                &source.revenue()?,
                &settings.brand,
                &settings.attribution,
                today,
            )?,
        ),
    };

    report::finalize(&mut doc, &settings.footer_name(), today);
    let bytes = export::render_pdf(&doc, &settings.footer_name())?;

    let artifact = kind.artifact(today, bytes);
    let path = resolve_output(settings, output, &artifact.filename);
    write_artifact(&path, &artifact.bytes)?;

    println!(
        "Exported {} ({} pages, {}) to: {}",
        kind,
        doc.page_count(),
        artifact.mime_type,
        path.display()
    );
    Ok(())
}

fn resolve_source(input: Option<PathBuf>) -> ReportResult<Box<dyn DataSource>> {
    match input {
        Some(path) => Ok(Box::new(JsonFileSource::load(path)?)),
        None => Ok(Box::new(StaticSource::new())),
    }
}

/// Pick the output path: explicit flag, or the artifact's default filename
/// in the configured output directory (current directory when unset)
fn resolve_output(settings: &Settings, output: Option<PathBuf>, filename: &str) -> PathBuf {
    if let Some(path) = output {
        return path;
    }

    match &settings.output_dir {
        Some(dir) => dir.join(filename),
        None => PathBuf::from(filename),
    }
}

fn write_artifact(path: &Path, bytes: &[u8]) -> ReportResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ReportError::Io(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    std::fs::write(path, bytes)
        .map_err(|e| ReportError::Io(format!("Failed to write {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_output_uses_configured_dir() {
        let mut settings = Settings::default();
        settings.output_dir = Some(PathBuf::from("/tmp/reports"));

        let path = resolve_output(&settings, None, "metrics-2026-08-30.csv");
        assert!(path.starts_with("/tmp/reports"));
        assert!(path.to_string_lossy().ends_with(".csv"));
    }

    #[test]
    fn test_resolve_output_prefers_explicit_path() {
        let settings = Settings::default();
        let explicit = PathBuf::from("/tmp/custom.csv");

        let path = resolve_output(&settings, Some(explicit.clone()), "metrics-2026-08-30.csv");
        assert_eq!(path, explicit);
    }

    #[test]
    fn test_export_rejected_while_ticket_alive() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("metrics.csv");
        let settings = Settings::default();
        let guard = ExportGuard::new();

        let _ticket = guard.begin().unwrap();

        let err = handle_export_command(
            &settings,
            &guard,
            ExportCommands::Csv {
                target: CsvTarget::Metrics,
                output: Some(out.clone()),
                input: None,
            },
        )
        .unwrap_err();

        assert!(err.is_export_in_progress());
        assert!(!out.exists());
    }

    #[test]
    fn test_export_command_releases_guard() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings::default();
        let guard = ExportGuard::new();

        for name in ["first.csv", "second.csv"] {
            let out = temp_dir.path().join(name);
            handle_export_command(
                &settings,
                &guard,
                ExportCommands::Csv {
                    target: CsvTarget::Metrics,
                    output: Some(out.clone()),
                    input: None,
                },
            )
            .unwrap();
            assert!(out.exists());
        }

        assert!(!guard.is_in_flight());
    }

    #[test]
    fn test_csv_export_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("metrics.csv");
        let settings = Settings::default();

        handle_export_csv(&settings, CsvTarget::Metrics, Some(out.clone()), None).unwrap();

        let contents = std::fs::read_to_string(&out).unwrap();
        assert!(contents.starts_with("Metric,Value,Change,Exported"));
        assert_eq!(contents.lines().count(), 5); // header + 4 demo rows
    }

    #[test]
    fn test_pdf_export_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("report.pdf");
        let settings = Settings::default();

        handle_export_pdf(&settings, PdfTarget::Full, Some(out.clone()), None).unwrap();

        let bytes = std::fs::read(&out).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_failed_export_leaves_no_file() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("metrics.csv");
        let settings = Settings::default();

        let missing = Some(temp_dir.path().join("no-such-snapshot.json"));
        let err =
            handle_export_csv(&settings, CsvTarget::Metrics, Some(out.clone()), missing)
                .unwrap_err();
        assert!(matches!(err, ReportError::DataSource(_)));
        assert!(!out.exists());
    }
}
