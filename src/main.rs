//! Mauka Collections - Main entrypoint.
//!
//! Command-line front end for the container library. It initializes the
//! logging system, loads configuration, and runs demonstration workloads.

mod demo;

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use demo::Structure;
use mauka_collections_lib::config::{CollectionsConfig, ConfigLoader, LogConfig, ENV_PREFIX};
use mauka_collections_lib::error::{
    report_error, set_error_reporter, ErrorContext, MaukaError, MaukaResult, TracingErrorReporter,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for Mauka Collections.
#[derive(Parser, Debug)]
#[clap(name = "Mauka Collections", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser, global = true)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Exercise a container with generated data and check its invariants
    Demo {
        /// Container to exercise
        #[clap(value_enum, default_value = "all")]
        structure: Structure,

        /// Number of generated elements
        #[clap(short = 'n', long, default_value_t = 1_000)]
        count: usize,

        /// Seed for the data generator
        #[clap(short, long, default_value_t = 42)]
        seed: u64,

        /// Print the reports as JSON on standard output
        #[clap(long)]
        json: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> MaukaResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&log.level))
        .map_err(|e| MaukaError::Custom(format!("Invalid log filter: {e}")))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_line_number(true)
        .with_file(true)
        .with_writer(std::io::stderr);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };
    result.map_err(|e| MaukaError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

fn execute(command: Command, config: CollectionsConfig) -> MaukaResult<()> {
    match command {
        Command::Demo {
            structure,
            count,
            seed,
            json,
        } => {
            info!(?structure, count, seed, "Running demo");
            let reports = demo::run(structure, &config, count, seed)?;
            if json {
                let rendered = serde_json::to_string_pretty(&reports)
                    .map_err(|e| MaukaError::Custom(format!("Failed to render reports: {e}")))?;
                println!("{rendered}");
            }
            info!(workloads = reports.len(), "All structural checks passed");
            Ok(())
        }
        Command::Validate => {
            info!(?config, "Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = CollectionsConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();

    // A broken configuration file must not block generating a fresh one
    let loaded = match &args.command {
        Command::GenConfig { .. } => Ok(CollectionsConfig::default()),
        _ => ConfigLoader::new(args.config.as_deref(), ENV_PREFIX).load(),
    };

    let log = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();
    if let Err(e) = init_logging(&log) {
        eprintln!("Error: {e}");
        process::exit(1);
    }

    set_error_reporter(Arc::new(TracingErrorReporter));

    let outcome = loaded
        .map_err(MaukaError::from)
        .and_then(|config| execute(args.command, config));
    if let Err(error) = outcome {
        let component = match &error {
            MaukaError::Config(_) => "config",
            MaukaError::Collection(_) => "data_structures",
            _ => "cli",
        };
        report_error(ErrorContext::new(error, component));
        process::exit(1);
    }
}
