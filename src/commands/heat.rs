//! Heat command implementation.
//!
//! The heat command:
//! 1. Reads the flow table
//! 2. Aggregates it into flow maps
//! 3. Resolves the heat around the selected region
//! 4. Writes the heat report

use super::models::HeatArgs;
use super::utils::validate_input_and_config;
use crate::aggregator::aggregate_with;
use crate::heat::{build_catalogue_overlay, heat_mode, resolve_heat_with, HeatResult};
use crate::heat::label::format_number;
use crate::output::{to_report, write_report, HeatReport};
use crate::parser::{read_flow_table, read_region_names};
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the heat command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Unreadable or malformed flow table / region file
/// * File write errors
pub fn execute_heat(args: &HeatArgs) -> Result<HeatReport> {
    let start_time = Instant::now();

    info!("Step 1/4: Reading flow table...");
    let rows = read_flow_table(&args.input, &args.config)
        .with_context(|| format!("Failed to read flow table {}", args.input.display()))?;

    info!("Step 2/4: Aggregating {} rows...", rows.len());
    let maps = aggregate_with(&rows, &args.config);

    info!("Step 3/4: Resolving heat...");
    let region = args.region.as_deref();
    if let Some(name) = region {
        debug!("Selection {} is {:?}", name, heat_mode(name, &maps));
    }
    let heat = resolve_heat_with(region, &maps, &args.config);
    info!("{} related regions", heat.len());

    // One overlay per catalogue, one catalogue per map
    let mut overlays = Vec::with_capacity(args.regions.len());
    for path in &args.regions {
        let names = read_region_names(path)
            .with_context(|| format!("Failed to read regions {}", path.display()))?;
        overlays.push(build_catalogue_overlay(path.display().to_string(), &names, &heat));
    }

    if args.print_summary {
        println!("{}", format_heat_table(region, &heat));
    }

    info!("Step 4/4: Writing heat report...");
    let report = to_report(region, heat, overlays);
    write_report(&report, &args.output).context("Failed to write heat report")?;
    info!("✓ Heat report written to: {}", args.output.display());

    info!("Heat completed in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(report)
}

/// Validate heat arguments
///
/// **Public** - can be called before execute_heat for early validation
pub fn validate_args(args: &HeatArgs) -> Result<()> {
    validate_input_and_config(&args.input, &args.config)?;

    if let Some(region) = &args.region {
        if region.trim().is_empty() {
            anyhow::bail!("Region name cannot be blank");
        }
    }

    Ok(())
}

/// Render the heat as a text table
pub fn format_heat_table(region: Option<&str>, heat: &HeatResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "=".repeat(60)));
    out.push_str(&format!("HEAT FOR {}\n", region.unwrap_or("<none>")));
    out.push_str(&format!("{}\n", "=".repeat(60)));

    if heat.is_empty() {
        out.push_str("No related regions above the noise floor\n");
    }

    for (name, entry) in heat {
        out.push_str(&format!(
            "{:<20} {:<20} hue {:>5}\n",
            name,
            entry.label,
            format_number(entry.color.hue.round())
        ));
    }

    out.push_str(&"=".repeat(60));
    out
}
