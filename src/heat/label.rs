//! Display labels for related regions.

/// Format a number the way the dashboard shows it
///
/// Integral values print without a fractional part (`8`, not `8.0`);
/// everything else uses the shortest representation that round-trips.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Label for a region the selection sends flow to
pub fn outflow_label(quantity: f64) -> String {
    format!("To {}", format_number(quantity))
}

/// Label for a region the selection receives flow from
pub fn inflow_label(quantity: f64) -> String {
    format!("From {}", format_number(quantity))
}

/// Label for a region with significant flow in both directions
pub fn combined_label(outgoing: f64, incoming: f64) -> String {
    format!("{} {}", outflow_label(outgoing), inflow_label(incoming))
}
