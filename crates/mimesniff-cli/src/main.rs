//! mimesniff CLI

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use mimesniff::core::io::read_file_capped;
use mimesniff::{Detection, DocumentKind, Family, SniffConfig, detect_bytes};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "mimesniff")]
#[command(version, about = "Detect content types from file bytes", long_about = None)]
struct Cli {
    /// Log detection decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect the content type of one or more files
    Detect {
        /// Files to inspect
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Detector family: auto, document, image or audio-video (defaults to the configured family)
        #[arg(short, long, value_name = "FAMILY")]
        family: Option<Family>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Configuration file (TOML or JSON); otherwise mimesniff.toml is discovered
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print a file as a data URI using its detected content type
    DataUri {
        path: PathBuf,

        /// Detector family: auto, document, image or audio-video (defaults to the configured family)
        #[arg(short, long, value_name = "FAMILY")]
        family: Option<Family>,

        /// Configuration file (TOML or JSON); otherwise mimesniff.toml is discovered
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct Report<'a> {
    path: &'a Path,
    #[serde(flatten)]
    detection: Detection,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Detect {
            paths,
            family,
            format,
            config,
        } => {
            let config = load_config(config.as_deref())?;
            let family = family.unwrap_or(config.family);

            let mut reports = Vec::with_capacity(paths.len());
            let mut failures = 0usize;

            for path in &paths {
                match read_file_capped(path, config.max_input_size) {
                    Ok(content) => {
                        let detection = detect_bytes(&content, family);
                        tracing::debug!("{} -> {:?}", path.display(), detection);
                        reports.push(Report { path, detection });
                    }
                    Err(e) => {
                        eprintln!("Error: {}: {}", path.display(), e);
                        failures += 1;
                    }
                }
            }

            match format {
                OutputFormat::Text => {
                    for report in &reports {
                        println!("{}", format_text(report));
                    }
                }
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&reports).context("Failed to serialize results")?;
                    println!("{}", json);
                }
            }

            if failures > 0 {
                bail!("{} of {} file(s) could not be read", failures, paths.len());
            }

            Ok(())
        }

        Commands::DataUri { path, family, config } => {
            let config = load_config(config.as_deref())?;
            let family = family.unwrap_or(config.family);

            let content = read_file_capped(&path, config.max_input_size)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let content_type = detect_bytes(&content, family)
                .content_type()
                .unwrap_or(DocumentKind::Binary.content_type());

            println!("{}", content_type.to_data_uri(&content));
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Explicit `--config` wins, then a discovered `mimesniff.toml`, then defaults.
fn load_config(path: Option<&Path>) -> Result<SniffConfig> {
    let config = match path {
        Some(path) => SniffConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => SniffConfig::discover()
            .context("Failed to load discovered configuration")?
            .unwrap_or_default(),
    };

    tracing::debug!(
        "Using max_input_size={} family={}",
        config.max_input_size,
        config.family
    );
    Ok(config)
}

fn format_text(report: &Report<'_>) -> String {
    let path = report.path.display();

    match report.detection {
        Detection::Document(content_type) | Detection::AudioVideo(content_type) => {
            format!("{}\t{}\t{}", path, content_type.mime_type(), content_type.extension())
        }
        Detection::Image(image) => format!(
            "{}\t{}\t{}\tattachment={}\talpha={}\tlegacy={}",
            path,
            image.mime_type(),
            image.extension(),
            image.supported_as_attachment,
            image.supports_alpha_channel,
            image.needs_legacy_conversion
        ),
        Detection::Unrecognized => format!("{}\tunrecognized", path),
    }
}
