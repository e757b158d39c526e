//! Region catalogue from GeoJSON.
//!
//! Only feature names matter here; geometry is left to the renderer.

use crate::utils::error::ParseError;
use log::debug;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// List region names of a GeoJSON FeatureCollection
///
/// A feature counts as a region when it has a non-empty `properties.name`
/// string and a `geometry.type`. Order is preserved.
///
/// # Errors
/// * `ParseError::InvalidFormat` - no top-level `features` array
pub fn parse_region_names(geojson: &Value) -> Result<Vec<String>, ParseError> {
    let features = geojson
        .get("features")
        .and_then(Value::as_array)
        .ok_or_else(|| ParseError::InvalidFormat("GeoJSON has no `features` array".to_string()))?;

    let names: Vec<String> = features
        .iter()
        .filter(|feature| {
            feature
                .get("geometry")
                .and_then(|g| g.get("type"))
                .is_some_and(|t| !t.is_null())
        })
        .filter_map(|feature| {
            feature
                .get("properties")
                .and_then(|p| p.get("name"))
                .and_then(Value::as_str)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
        })
        .collect();

    debug!("Found {} named regions in {} features", names.len(), features.len());
    Ok(names)
}

/// Read region names from a GeoJSON file
pub fn read_region_names(path: impl AsRef<Path>) -> Result<Vec<String>, ParseError> {
    let path = path.as_ref();
    debug!("Reading regions from: {}", path.display());

    let contents = fs::read_to_string(path)?;
    let geojson: Value = serde_json::from_str(&contents)?;
    parse_region_names(&geojson)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_named_features_only() {
        let geojson = json!({
            "type": "FeatureCollection",
            "features": [
                { "properties": { "name": "A" }, "geometry": { "type": "Polygon", "coordinates": [] } },
                { "properties": { "name": "" }, "geometry": { "type": "Polygon" } },
                { "properties": {}, "geometry": { "type": "Polygon" } },
                { "properties": { "name": "NoGeometry" } },
                { "properties": { "name": "B" }, "geometry": { "type": "LineString" } }
            ]
        });

        assert_eq!(parse_region_names(&geojson).unwrap(), vec!["A", "B"]);
    }

    #[test]
    fn test_missing_features() {
        assert!(parse_region_names(&json!({ "type": "Feature" })).is_err());
    }
}
