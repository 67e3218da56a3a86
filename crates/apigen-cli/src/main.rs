//! Apigen CLI tool
//!
//! Compiles API method signatures into a sorted, uniquely named batch
//! for downstream code generators.

use anyhow::Context;
use apigen_cli::commands;
use apigen_cli::config::{ApigenConfig, OutputFormat, DEFAULT_CONFIG_FILE};
use apigen_cli::output::{resolve_color_choice, ColorMode, StyledOutput};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "apigen")]
#[command(about = "API method signature compiler", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Color output
    #[arg(long, global = true, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse signatures and emit the finished method batch
    Parse {
        /// Output file (overrides output.path)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Output format (overrides output.format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Parse signatures and report errors only
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = ApigenConfig::from_file(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;
    init_logging(config.logging.level.as_deref());

    let mut out = StyledOutput::new(resolve_color_choice(cli.color));

    match cli.command {
        Commands::Parse { output, format } => {
            commands::parse::execute(&config, output, format, &mut out)
        }
        Commands::Check => commands::check::execute(&config, &mut out),
    }
}

/// `RUST_LOG` wins over the config level; `info` otherwise.
fn init_logging(level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level.unwrap_or("info")))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
