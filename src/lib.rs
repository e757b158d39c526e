//! Transition Heatmap
//!
//! Origin/destination transition aggregation and heat coloring for
//! region maps.
//!
//! A flow table of `Source` rows is aggregated into outflow and inflow maps;
//! selecting a region then yields a label and an HSLA color for every
//! related region.
//!
//! ```
//! use transition_heatmap::aggregator::aggregate;
//! use transition_heatmap::heat::resolve_heat;
//! use transition_heatmap::parser::parse_flow_table;
//!
//! let rows = parse_flow_table(&serde_json::json!([
//!     { "Source": "A", "B": 5, "C": 2 },
//!     { "Source": "A", "B": 3 }
//! ])).unwrap();
//! let maps = aggregate(&rows);
//! let heat = resolve_heat(Some("A"), &maps.outflow, &maps.inflow);
//!
//! assert_eq!(heat["B"].label, "To 8");
//! assert!(!heat.contains_key("C"));
//! ```

pub mod aggregator;
pub mod commands;
pub mod heat;
pub mod output;
pub mod parser;
pub mod utils;
