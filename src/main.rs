mod config;
mod convert;
mod domain;
mod error;
mod persistence;
mod report;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use config::{default_config_path, load_file_config, ConverterConfig, FileConfig};
use convert::{convert_markdown, convert_outline};
use persistence::{write_markdown, write_outline, DayOneReader, DEFAULT_MARKDOWN_DIR, DEFAULT_OUTLINE_FILE};
use report::ConversionReport;
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "dayone2roam")]
#[command(about = "Convert a Day One JSON export to a Roam Research import", long_about = None)]
struct Cli {
    /// Path to the Day One JSON export
    source: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Outline)]
    format: OutputFormat,

    /// Output file (outline) or directory (markdown)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Email recorded as creator and editor of every block
    #[arg(long, env = "DAYONE2ROAM_EMAIL")]
    email: Option<String>,

    /// Heading block inserted above each entry's text
    #[arg(long, env = "DAYONE2ROAM_HEADING")]
    heading: Option<String>,

    /// Config file. Defaults to <config dir>/dayone2roam/config.json
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Roam Research JSON import
    Outline,
    /// One markdown file per entry
    Markdown,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let file_config = match cli.config.clone().or_else(default_config_path) {
        Some(path) => load_file_config(path)?,
        None => FileConfig::default(),
    };
    let config = ConverterConfig::resolve(cli.email.clone(), cli.heading.clone(), file_config)?;

    let mut reader = DayOneReader::new(&cli.source);
    reader
        .load()
        .with_context(|| format!("Could not load export: {}", cli.source.display()))?;
    let version = reader.document()?.version().unwrap_or("unknown");
    tracing::debug!("{} is export version {}", reader.path().display(), version);
    let entries = reader.entries()?;

    match cli.format {
        OutputFormat::Outline => {
            let report = convert_outline(entries, &config);
            let output = cli
                .output
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTLINE_FILE));
            write_outline(&output, &report.converted)?;
            print_summary(&report);
            println!("Roam import written: {}", output.display());
        }
        OutputFormat::Markdown => {
            let report = convert_markdown(entries, &config);
            let output = cli
                .output
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MARKDOWN_DIR));
            let written = write_markdown(&output, &report.converted)?;
            print_summary(&report);
            println!("{} markdown files written to {}", written.len(), output.display());
        }
    }

    Ok(())
}

fn print_summary<T>(report: &ConversionReport<T>) {
    println!("{}", report.summary());
    if !report.is_clean() {
        let skipped: Vec<String> = report.failures.iter().map(|f| f.index.to_string()).collect();
        eprintln!("Warning: skipped entries {}", skipped.join(", "));
    }
}

/// Log to stderr; level comes from RUST_LOG, defaulting to info
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
