//! Aggregate command implementation.
//!
//! Reads a flow table, builds both flow maps and optionally writes them.

use super::models::AggregateArgs;
use super::utils::validate_input_and_config;
use crate::aggregator::{aggregate_with, summarize_flows, FlowMaps};
use crate::output::write_json;
use crate::parser::{read_flow_table, TransitionRow};
use anyhow::{Context, Result};
use log::info;

/// Execute the aggregate command
///
/// **Public** - main entry point called from main.rs
pub fn execute_aggregate(args: &AggregateArgs) -> Result<FlowMaps> {
    info!("Reading flow table: {}", args.input.display());
    let rows = read_flow_table(&args.input, &args.config)
        .with_context(|| format!("Failed to read flow table {}", args.input.display()))?;

    let maps = aggregate_with(&rows, &args.config);
    let summary = summarize_flows(&maps);
    info!("Flow summary: {}", summary.summary());

    if let Some(output) = &args.output {
        write_json(&maps, output).context("Failed to write flow maps JSON")?;
        info!("✓ Flow maps written to: {}", output.display());
    }

    if args.print_summary {
        println!("\n{}", "=".repeat(60));
        println!("FLOW SUMMARY");
        println!("{}", "=".repeat(60));
        println!("Rows:         {}", rows.len());
        println!("Origins:      {}", summary.origin_count);
        println!("Destinations: {}", summary.destination_count);
        println!("Links:        {}", summary.link_count);
        println!("Total:        {}", summary.total_quantity);
        if let Some(link) = &summary.busiest_link {
            println!("Busiest:      {} -> {} ({})", link.origin, link.destination, link.quantity);
        }
        if let Some((row, total)) = largest_row(&rows) {
            println!("Largest row:  {} ({})", row.source, total);
        }
        println!("{}", "=".repeat(60));
    }

    Ok(maps)
}

/// Validate aggregate arguments
///
/// **Public** - can be called before execute_aggregate for early validation
pub fn validate_aggregate_args(args: &AggregateArgs) -> Result<()> {
    validate_input_and_config(&args.input, &args.config)
}

/// Row with the largest total quantity, first one on ties
pub fn largest_row(rows: &[TransitionRow]) -> Option<(&TransitionRow, f64)> {
    rows.iter()
        .map(|row| (row, row.total_quantity()))
        .fold(None, |best: Option<(&TransitionRow, f64)>, (row, total)| match best {
            Some((_, best_total)) if best_total >= total => best,
            _ => Some((row, total)),
        })
}
