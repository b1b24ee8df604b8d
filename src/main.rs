use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use admetrics::cli::{handle_export_command, handle_preview_command, ExportCommands, RecordTarget};
use admetrics::config::{paths::ReportPaths, settings::Settings};
use admetrics::export::ExportGuard;

#[derive(Parser)]
#[command(
    name = "admetrics",
    version,
    about = "Terminal-based campaign analytics report exporter",
    long_about = "admetrics turns campaign analytics data into downloadable \
                  CSV and PDF reports from the command line: KPI summaries, \
                  campaign performance tables, and revenue trends, with \
                  paginated multi-section PDF output."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Export reports and raw data
    #[command(subcommand)]
    Export(ExportCommands),

    /// Preview a report table in the terminal
    Preview {
        /// Which records to preview
        target: RecordTarget,

        /// Read data from a JSON snapshot instead of the demo dataset
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Write default settings to the config directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ReportPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Export(cmd)) => {
            handle_export_command(&settings, ExportGuard::shared(), cmd)?;
        }
        Some(Commands::Preview { target, input }) => {
            handle_preview_command(target, input)?;
        }
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Initialized admetrics at: {}", paths.base_dir().display());
            println!();
            println!("Edit {} to set your brand name", paths.settings_file().display());
            println!("and default output directory.");
        }
        Some(Commands::Config) => {
            println!("admetrics Configuration");
            println!("=======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Brand:       {}", settings.brand);
            println!("  Attribution: {}", settings.attribution);
            match &settings.output_dir {
                Some(dir) => println!("  Output dir:  {}", dir.display()),
                None => println!("  Output dir:  (current directory)"),
            }
        }
        None => {
            println!("admetrics - Campaign analytics report exporter");
            println!();
            println!("Run 'admetrics --help' for usage information.");
            println!("Run 'admetrics preview metrics' to see the demo dataset.");
            println!("Run 'admetrics export pdf full' to build a complete report.");
        }
    }

    Ok(())
}
