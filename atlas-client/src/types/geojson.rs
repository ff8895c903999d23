//! GeoJSON geometry models.
//!
//! These types (de)serialize to standard GeoJSON, so a `FeatureCollection`
//! returned by a boundary or sales-territory call can be handed directly
//! to any GeoJSON-aware mapping library via `serde_json::to_value`.

use serde::{Deserialize, Serialize};

/// A GeoJSON geometry (usually a `Polygon` for Atlas responses).
///
/// `coordinates` nesting depth depends on the geometry type, so it is
/// kept as raw JSON rather than a fixed shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: serde_json::Value,
}

/// A GeoJSON feature: a geometry plus optional properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<serde_json::Value>,
    pub geometry: Geometry,
}

/// A GeoJSON feature collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: String,
    pub features: Vec<Feature>,
}
