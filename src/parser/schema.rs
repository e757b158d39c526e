//! Typed flow table definitions.
//!
//! Rows arrive as untyped documents. They are converted once at the
//! ingestion boundary into [`TransitionRow`]s so that nothing downstream
//! has to rediscover which fields are flows.

use serde::{Deserialize, Serialize};

/// One reporting record: an origin and the quantities it sent onwards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionRow {
    /// Origin region name
    pub source: String,

    /// (destination, quantity) pairs, all strictly positive
    pub flows: Vec<(String, f64)>,
}

impl TransitionRow {
    /// Create a row from an origin and its flows
    pub fn new(source: impl Into<String>, flows: Vec<(String, f64)>) -> Self {
        Self {
            source: source.into(),
            flows,
        }
    }

    /// Sum of all quantities in this row
    pub fn total_quantity(&self) -> f64 {
        self.flows.iter().map(|(_, qty)| qty).sum()
    }
}

/// One reporting batch, in arrival order
pub type FlowTable = Vec<TransitionRow>;
