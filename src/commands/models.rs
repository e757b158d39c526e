use crate::utils::config::HeatConfig;
use std::path::PathBuf;

/// Arguments for the aggregate command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AggregateArgs {
    /// Flow table JSON
    pub input: PathBuf,

    /// Output path for the flow maps JSON (optional)
    pub output: Option<PathBuf>,

    /// Print flow summary to stdout
    pub print_summary: bool,

    /// Aggregation and heat tunables
    pub config: HeatConfig,
}

impl Default for AggregateArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("rows.json"),
            output: None,
            print_summary: false,
            config: HeatConfig::default(),
        }
    }
}

/// Arguments for the heat command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct HeatArgs {
    /// Flow table JSON
    pub input: PathBuf,

    /// Selected region (None = nothing selected)
    pub region: Option<String>,

    /// GeoJSON region catalogues, one overlay each
    pub regions: Vec<PathBuf>,

    /// Output path for the heat report
    pub output: PathBuf,

    /// Print a text table to stdout
    pub print_summary: bool,

    /// Aggregation and heat tunables
    pub config: HeatConfig,
}

impl Default for HeatArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("rows.json"),
            region: None,
            regions: Vec::new(),
            output: PathBuf::from("heat.json"),
            print_summary: false,
            config: HeatConfig::default(),
        }
    }
}
