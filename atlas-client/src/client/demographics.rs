//! Socio-demographics endpoint family: city/area statistics and sales
//! territories.

use super::AtlasClient;
use crate::domain::{Mobility, Point};
use crate::error::AtlasError;
use crate::types::demographics::{AreaStats, CityStatsReport, SalesTerritory};

/// Accepted range for time-based territories, in minutes.
const TIME_MINUTES_RANGE: std::ops::RangeInclusive<u32> = 1..=60;

/// Accepted range for distance-based territories, in meters.
const DISTANCE_METERS_RANGE: std::ops::RangeInclusive<u32> = 1..=10_000;

impl AtlasClient {
    /// Summarized statistics for a city: demographics, income, and
    /// household composition, plus derived insight statements.
    pub async fn city_stats(&self, city: &str) -> Result<CityStatsReport, AtlasError> {
        self.get_json(&format!("/socio-demographics/stats/{city}"), &[])
            .await
    }

    /// Area-level statistics for a neighborhood or administrative area
    /// within a city.
    pub async fn area_stats(&self, city: &str, area: &str) -> Result<AreaStats, AtlasError> {
        self.get_json(&format!("/socio-demographics/stats/{city}/{area}"), &[])
            .await
    }

    /// The sales territory reachable within `time_minutes` from a
    /// coordinate, traversing by `mobility`.
    ///
    /// Returns the isochrone polygon populated with the sociodemographic
    /// profile valid inside it. `time_minutes` must be in 1..=60;
    /// coordinates are validated against WGS84 bounds. Both checks
    /// happen before any request is made.
    pub async fn sales_territory(
        &self,
        latitude: f64,
        longitude: f64,
        city: &str,
        time_minutes: u32,
        mobility: Mobility,
    ) -> Result<SalesTerritory, AtlasError> {
        let point = Point::new(latitude, longitude)?;

        if !TIME_MINUTES_RANGE.contains(&time_minutes) {
            return Err(AtlasError::invalid("time_minutes must be in range 1-60"));
        }

        let query = [
            ("latitude", point.latitude().to_string()),
            ("longitude", point.longitude().to_string()),
            ("city", city.to_string()),
            ("mode_of_mobility", mobility.as_str().to_string()),
            ("time_minutes", time_minutes.to_string()),
        ];
        self.get_json("/socio-demographics/sales_territory/time", &query)
            .await
    }

    /// The sales territory within `distance_meters` of a coordinate.
    ///
    /// With a `mobility` mode, distance is measured along the street
    /// network; without one, the territory is a circular radius.
    /// `distance_meters` must be in 1..=10,000.
    pub async fn sales_territory_by_distance(
        &self,
        latitude: f64,
        longitude: f64,
        city: &str,
        distance_meters: u32,
        mobility: Option<Mobility>,
    ) -> Result<SalesTerritory, AtlasError> {
        let point = Point::new(latitude, longitude)?;

        if !DISTANCE_METERS_RANGE.contains(&distance_meters) {
            return Err(AtlasError::invalid(
                "distance_meters must be in range 1-10,000",
            ));
        }

        let mut query = vec![
            ("latitude", point.latitude().to_string()),
            ("longitude", point.longitude().to_string()),
            ("city", city.to_string()),
            ("distance_meters", distance_meters.to_string()),
        ];
        if let Some(mode) = mobility {
            query.push(("mode_of_mobility", mode.as_str().to_string()));
        }
        self.get_json("/socio-demographics/sales_territory/distance", &query)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::AtlasConfig;

    fn client() -> AtlasClient {
        AtlasClient::new(AtlasConfig::new("test-key")).unwrap()
    }

    #[tokio::test]
    async fn sales_territory_rejects_out_of_range_time() {
        for minutes in [0, 61, 1000] {
            let result = client()
                .sales_territory(29.76, -95.36, "Houston", minutes, Mobility::Driving)
                .await;
            assert!(
                matches!(result, Err(AtlasError::Validation { .. })),
                "time_minutes={minutes} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn sales_territory_rejects_bad_coordinates() {
        let result = client()
            .sales_territory(-90.5, 0.0, "Houston", 15, Mobility::Walking)
            .await;
        assert!(matches!(result, Err(AtlasError::Validation { .. })));
    }

    #[tokio::test]
    async fn distance_territory_rejects_out_of_range_distance() {
        for meters in [0, 10_001] {
            let result = client()
                .sales_territory_by_distance(29.76, -95.36, "Houston", meters, None)
                .await;
            assert!(
                matches!(result, Err(AtlasError::Validation { .. })),
                "distance_meters={meters} should be rejected"
            );
        }
    }
}
