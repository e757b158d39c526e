use crate::output::read_report;
use crate::utils::config::{HeatConfig, SCHEMA_VERSION};
use anyhow::Result;
use std::path::Path;

/// Checks shared by every command that reads a flow table
pub(crate) fn validate_input_and_config(input: &Path, config: &HeatConfig) -> Result<()> {
    if input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if config.noise_floor.is_nan() || config.noise_floor < 0.0 {
        anyhow::bail!("noise_floor must be a non-negative number");
    }

    Ok(())
}

/// Validate a heat report JSON file
pub fn validate_report_file(file_path: &Path) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(file_path)?;

    println!("✓ Valid heat report JSON");
    println!("  Version: {}", report.version);
    println!("  Region: {}", report.region.as_deref().unwrap_or("<none>"));
    println!("  Generated: {}", report.generated_at);
    println!("  Entries: {}", report.entries.len());
    for overlay in &report.overlays {
        println!("  Overlay {}: {} regions", overlay.catalogue, overlay.regions.len());
    }

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("Transition Heatmap v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Origin/destination transition heat for region maps.");
}
