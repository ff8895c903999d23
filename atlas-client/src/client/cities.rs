//! Cities endpoint family: discovery, reverse geocoding, boundaries.

use super::AtlasClient;
use crate::domain::Point;
use crate::error::AtlasError;
use crate::types::cities::ReverseGeocode;
use crate::types::geojson::FeatureCollection;

impl AtlasClient {
    /// List all cities supported by the API.
    pub async fn list_cities(&self) -> Result<Vec<String>, AtlasError> {
        self.get_json("/cities", &[]).await
    }

    /// List the places (sub-areas) within a city.
    ///
    /// Burbank and Beverly Hills are examples of places in the urban
    /// area of Los Angeles; these are distinct from neighborhoods.
    pub async fn list_places_in_city(&self, city: &str) -> Result<Vec<String>, AtlasError> {
        self.get_json(&format!("/cities/places/{city}"), &[]).await
    }

    /// List the areas (neighborhoods) within a city.
    pub async fn list_areas_in_city(&self, city: &str) -> Result<Vec<String>, AtlasError> {
        self.get_json(&format!("/cities/areas/{city}"), &[]).await
    }

    /// Reverse geocode a US coordinate, down to neighborhood depth.
    ///
    /// Coordinates are validated against WGS84 bounds before any
    /// request is made.
    pub async fn reverse_geocode(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ReverseGeocode, AtlasError> {
        let point = Point::new(latitude, longitude)?;

        let query = [
            ("latitude", point.latitude().to_string()),
            ("longitude", point.longitude().to_string()),
        ];
        self.get_json("/cities/reverse_geocode", &query).await
    }

    /// The boundary of a city, as GeoJSON.
    pub async fn city_boundary(&self, city: &str) -> Result<FeatureCollection, AtlasError> {
        self.get_json(&format!("/cities/boundary/{city}"), &[])
            .await
    }

    /// The boundary of a place within a city, as GeoJSON.
    pub async fn place_boundary(
        &self,
        city: &str,
        place: &str,
    ) -> Result<FeatureCollection, AtlasError> {
        self.get_json(&format!("/cities/places/boundary/{city}/{place}"), &[])
            .await
    }

    /// The boundary of an area within a city, as GeoJSON.
    pub async fn area_boundary(
        &self,
        city: &str,
        area: &str,
    ) -> Result<FeatureCollection, AtlasError> {
        self.get_json(&format!("/cities/areas/boundary/{city}/{area}"), &[])
            .await
    }
}
