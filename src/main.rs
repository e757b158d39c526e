//! Transition Heatmap CLI
//!
//! Aggregates origin/destination flow tables and resolves the heat
//! around a selected region.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use transition_heatmap::commands::{
    display_version, execute_aggregate, execute_heat, validate_aggregate_args, validate_args,
    validate_report_file, AggregateArgs, HeatArgs,
};
use transition_heatmap::utils::config::{load_config, HeatConfig};

/// Transition Heatmap - origin/destination heat for region maps
#[derive(Parser, Debug)]
#[command(name = "transition-heatmap")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Heat configuration TOML (optional)
    #[arg(short, long, global = true, env = "TRANSITION_HEATMAP_CONFIG")]
    config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Aggregate a flow table into outflow and inflow maps
    Aggregate {
        /// Flow table JSON (array of rows or data frame)
        #[arg(short, long)]
        input: PathBuf,

        /// Output path for flow maps JSON (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print flow summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Resolve the heat around a region
    Heat {
        /// Flow table JSON (array of rows or data frame)
        #[arg(short, long)]
        input: PathBuf,

        /// Selected region (omit for no selection)
        #[arg(short, long)]
        region: Option<String>,

        /// GeoJSON region catalogue, repeat once per map
        #[arg(long)]
        regions: Vec<PathBuf>,

        /// Output path for the heat report
        #[arg(short, long, default_value = "heat.json")]
        output: PathBuf,

        /// Print a text table to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate a heat report JSON file
    Validate {
        /// Path to heat report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => HeatConfig::default(),
    };

    // Execute command
    match cli.command {
        Commands::Aggregate { input, output, summary } => {
            let args = AggregateArgs {
                input,
                output,
                print_summary: summary,
                config,
            };

            validate_aggregate_args(&args)?;

            execute_aggregate(&args)?;
        }

        Commands::Heat {
            input,
            region,
            regions,
            output,
            summary,
        } => {
            let args = HeatArgs {
                input,
                region,
                regions,
                output,
                print_summary: summary,
                config,
            };

            // Validate args first
            validate_args(&args)?;

            execute_heat(&args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(&file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
