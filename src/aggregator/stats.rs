//! Summary statistics over aggregated flow maps.

use super::flows::FlowMaps;
use serde::{Deserialize, Serialize};

/// The single largest origin -> destination quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowLink {
    pub origin: String,
    pub destination: String,
    pub quantity: f64,
}

/// Flow statistics
///
/// **Public** - returned from summarize_flows
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowSummary {
    /// Origins with an outflow entry (empty ones included)
    pub origin_count: usize,

    /// Destinations with at least one inflow
    pub destination_count: usize,

    /// Distinct origin -> destination pairs
    pub link_count: usize,

    /// Sum of every accumulated quantity
    pub total_quantity: f64,

    /// Largest link, first in map order on ties
    pub busiest_link: Option<FlowLink>,
}

/// Calculate flow statistics
pub fn summarize_flows(maps: &FlowMaps) -> FlowSummary {
    let mut summary = FlowSummary {
        origin_count: maps.outflow.len(),
        destination_count: maps.inflow.len(),
        ..FlowSummary::default()
    };

    for (origin, destinations) in &maps.outflow {
        for (destination, &quantity) in destinations {
            summary.link_count += 1;
            summary.total_quantity += quantity;

            let busier = summary
                .busiest_link
                .as_ref()
                .map_or(true, |link| quantity > link.quantity);
            if busier {
                summary.busiest_link = Some(FlowLink {
                    origin: origin.clone(),
                    destination: destination.clone(),
                    quantity,
                });
            }
        }
    }

    summary
}

impl FlowSummary {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        let busiest = match &self.busiest_link {
            Some(link) => format!("{} -> {} ({})", link.origin, link.destination, link.quantity),
            None => "none".to_string(),
        };
        format!(
            "Origins: {} | Destinations: {} | Links: {} | Total: {} | Busiest: {}",
            self.origin_count, self.destination_count, self.link_count, self.total_quantity, busiest
        )
    }
}
