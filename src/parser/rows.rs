//! Flow table parser.
//!
//! Accepts either a bare JSON array of documents or a dashboard data frame
//! whose first field holds the documents:
//!
//! ```json
//! { "series": [ { "fields": [ { "values": [ { "Source": "A", "B": 5 } ] } ] } ] }
//! ```

use super::schema::{FlowTable, TransitionRow};
use crate::utils::config::{HeatConfig, SOURCE_FIELD, UNKNOWN_ORIGIN};
use crate::utils::error::ParseError;
use log::{debug, warn};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Parse a flow table using the default excluded fields
pub fn parse_flow_table(raw: &Value) -> Result<FlowTable, ParseError> {
    parse_flow_table_with(raw, &HeatConfig::default())
}

/// Parse a flow table, skipping the fields `config` marks as metadata
///
/// # Errors
/// * `ParseError::InvalidFormat` - input is neither an array nor a data frame
pub fn parse_flow_table_with(raw: &Value, config: &HeatConfig) -> Result<FlowTable, ParseError> {
    let documents = match extract_documents(raw)? {
        Some(documents) => documents,
        None => {
            debug!("Data frame has no series, flow table is empty");
            return Ok(Vec::new());
        }
    };

    let mut rows = Vec::with_capacity(documents.len());
    for (index, document) in documents.iter().enumerate() {
        match document.as_object() {
            Some(obj) => rows.push(parse_row(obj, config)),
            None => warn!("Skipping row {}: not a JSON object", index),
        }
    }

    debug!("Parsed {} transition rows", rows.len());
    Ok(rows)
}

/// Read and parse a flow table from a JSON file
pub fn read_flow_table(path: impl AsRef<Path>, config: &HeatConfig) -> Result<FlowTable, ParseError> {
    let path = path.as_ref();
    debug!("Reading flow table from: {}", path.display());

    let contents = fs::read_to_string(path)?;
    let raw: Value = serde_json::from_str(&contents)?;
    parse_flow_table_with(&raw, config)
}

/// Locate the document array inside the input
///
/// **Private** - returns `None` for a frame without series
fn extract_documents(raw: &Value) -> Result<Option<&Vec<Value>>, ParseError> {
    match raw {
        Value::Array(documents) => Ok(Some(documents)),

        Value::Object(obj) => {
            let series = obj
                .get("series")
                .and_then(Value::as_array)
                .ok_or_else(|| {
                    ParseError::InvalidFormat("Expected an array of rows or a `series` frame".to_string())
                })?;

            let Some(first) = series.first() else {
                return Ok(None);
            };

            let values = first
                .get("fields")
                .and_then(Value::as_array)
                .and_then(|fields| fields.first())
                .and_then(|field| field.get("values"))
                .ok_or_else(|| {
                    ParseError::InvalidFormat("Series has no `fields[0].values`".to_string())
                })?;

            // Some frames wrap the column in an array buffer
            let values = values.get("buffer").unwrap_or(values);

            values.as_array().map(Some).ok_or_else(|| {
                ParseError::InvalidFormat("`fields[0].values` must be an array".to_string())
            })
        }

        _ => Err(ParseError::InvalidFormat(
            "Flow table must be a JSON array or object".to_string(),
        )),
    }
}

/// Convert one document into a typed row
///
/// Fields that are metadata, non-numeric or not strictly positive are dropped.
pub fn parse_row(obj: &Map<String, Value>, config: &HeatConfig) -> TransitionRow {
    let source = match obj.get(SOURCE_FIELD) {
        Some(Value::String(name)) => name.clone(),
        Some(Value::Number(n)) => n.to_string(),
        other => {
            debug!("Row without usable {} field ({:?}), using {}", SOURCE_FIELD, other, UNKNOWN_ORIGIN);
            UNKNOWN_ORIGIN.to_string()
        }
    };

    let flows = obj
        .iter()
        .filter(|(field, _)| !config.is_excluded_field(field))
        .filter_map(|(field, value)| {
            numeric_value(value)
                .filter(|qty| *qty > 0.0)
                .map(|qty| (field.clone(), qty))
        })
        .collect();

    TransitionRow { source, flows }
}

/// Numeric view of a JSON value
///
/// Numbers pass through; strings count when they parse as a finite number.
pub fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_bare_array() {
        let table = parse_flow_table(&json!([
            { "_id": "x1", "Source": "A", "B": 5, "C": 2, "timestamp": 1700000000 },
            { "Source": "A", "B": 3 }
        ]))
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table[0].source, "A");
        assert_eq!(
            table[0].flows,
            vec![("B".to_string(), 5.0), ("C".to_string(), 2.0)]
        );
    }

    #[test]
    fn test_parse_data_frame() {
        let raw = json!({
            "series": [{
                "fields": [{ "values": [ { "Source": "A", "B": 1 } ] }]
            }]
        });
        let table = parse_flow_table(&raw).unwrap();
        assert_eq!(table, vec![TransitionRow::new("A", vec![("B".to_string(), 1.0)])]);
    }

    #[test]
    fn test_parse_data_frame_buffer() {
        let raw = json!({
            "series": [{
                "fields": [{ "values": { "buffer": [ { "Source": "Z", "Y": 9 } ] } }]
            }]
        });
        let table = parse_flow_table(&raw).unwrap();
        assert_eq!(table[0].source, "Z");
    }

    #[test]
    fn test_empty_series() {
        let table = parse_flow_table(&json!({ "series": [] })).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_invalid_shapes() {
        assert!(parse_flow_table(&json!("rows")).is_err());
        assert!(parse_flow_table(&json!({ "data": [] })).is_err());
        assert!(parse_flow_table(&json!({ "series": [{ "fields": [] }] })).is_err());
    }

    #[test]
    fn test_non_object_rows_skipped() {
        let table = parse_flow_table(&json!([1, { "Source": "A", "B": 4 }, null])).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_numeric_value() {
        assert_eq!(numeric_value(&json!(4)), Some(4.0));
        assert_eq!(numeric_value(&json!(" 2.5 ")), Some(2.5));
        assert_eq!(numeric_value(&json!("many")), None);
        assert_eq!(numeric_value(&json!(true)), None);
        assert_eq!(numeric_value(&json!(null)), None);
    }

    #[test]
    fn test_row_drops_non_positive_and_non_numeric() {
        let obj = json!({ "Source": "A", "B": 0, "C": -4, "D": "x", "E": "7", "F": [1] });
        let row = parse_row(obj.as_object().unwrap(), &HeatConfig::default());
        assert_eq!(row.flows, vec![("E".to_string(), 7.0)]);
    }

    #[test]
    fn test_missing_source_uses_sentinel() {
        let obj = json!({ "B": 5 });
        let row = parse_row(obj.as_object().unwrap(), &HeatConfig::default());
        assert_eq!(row.source, UNKNOWN_ORIGIN);

        let obj = json!({ "Source": null, "B": 5 });
        let row = parse_row(obj.as_object().unwrap(), &HeatConfig::default());
        assert_eq!(row.source, UNKNOWN_ORIGIN);
    }

    #[test]
    fn test_numeric_source_is_stringified() {
        let obj = json!({ "Source": 12, "B": 5 });
        let row = parse_row(obj.as_object().unwrap(), &HeatConfig::default());
        assert_eq!(row.source, "12");
    }
}
