//! Cities endpoint family models: reverse geocoding.
//!
//! Discovery calls (`list_cities`, `list_places_in_city`,
//! `list_areas_in_city`) return plain string lists and boundary calls
//! return [`FeatureCollection`](crate::types::geojson::FeatureCollection)
//! directly, so only reverse geocoding needs dedicated models.

use serde::{Deserialize, Serialize};

/// Echo of the parameters sent to the reverse-geocode endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReverseGeocodeRequest {
    pub latitude: f64,
    pub longitude: f64,
}

/// Administrative attribution for a coordinate, down to neighborhood depth.
///
/// County and state attribution is always present; neighborhood, place,
/// and urban-area fields are omitted when the coordinate falls outside
/// a covered urban area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReverseGeocodePlace {
    /// Neighborhood name, if the point falls inside one.
    pub nbd_name: Option<String>,
    pub place_code: Option<String>,
    pub place_name: Option<String>,
    pub place_name_complete: Option<String>,
    pub urban_area_name: Option<String>,
    pub urban_area_name_complete: Option<String>,
    pub county_geo_id: String,
    pub county_name: String,
    pub county_name_complete: String,
    pub state_code: String,
    pub state_name: String,
    pub state_postcode: String,
    pub county_code: String,
}

/// Envelope returned by the reverse-geocode endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReverseGeocode {
    pub request: ReverseGeocodeRequest,
    pub response: ReverseGeocodePlace,
}
