//! Competition endpoint family: discovery, nearby search, and
//! city-level insights.

use serde::de::DeserializeOwned;

use super::AtlasClient;
use crate::domain::Point;
use crate::error::AtlasError;
use crate::types::competition::{
    AreaInsightsReport, BrandInsightsReport, CategoryInsightsReport, NearbyCompetition,
};

/// Default search radius for nearby competition, in meters.
const DEFAULT_RADIUS_METERS: u32 = 500;

/// Accepted search radius range, in meters.
const RADIUS_METERS_RANGE: std::ops::RangeInclusive<u32> = 1..=10_000;

impl AtlasClient {
    /// List the commercial types the API accepts (retail, restaurants,
    /// gyms, ...).
    pub async fn list_commercial_types(&self) -> Result<Vec<String>, AtlasError> {
        self.get_json("/competition/types", &[]).await
    }

    /// List the distinct brands of a commercial type within a city.
    pub async fn list_commercial_brands(
        &self,
        city: &str,
        commercial_type: &str,
    ) -> Result<Vec<String>, AtlasError> {
        self.get_json(&format!("/competition/brands/{city}/{commercial_type}"), &[])
            .await
    }

    /// List the distinct category tags of a commercial type within a
    /// city, ordered by outlet count.
    pub async fn list_commercial_categories(
        &self,
        city: &str,
        commercial_type: &str,
    ) -> Result<Vec<String>, AtlasError> {
        self.get_json(
            &format!("/competition/categories/{city}/{commercial_type}"),
            &[],
        )
        .await
    }

    /// Nearby outlets of a commercial type, within the default
    /// 500-meter radius.
    pub async fn nearby_competition(
        &self,
        latitude: f64,
        longitude: f64,
        city: &str,
        commercial_type: &str,
    ) -> Result<NearbyCompetition, AtlasError> {
        self.nearby_competition_filtered(
            latitude,
            longitude,
            city,
            commercial_type,
            DEFAULT_RADIUS_METERS,
            &[],
            &[],
        )
        .await
    }

    /// Nearby outlets with an explicit radius and brand/category
    /// filters.
    ///
    /// `radius_meters` must be in 1..=10,000; coordinates are validated
    /// against WGS84 bounds. Both checks happen before any request is
    /// made. Empty filter slices mean no filtering.
    pub async fn nearby_competition_filtered(
        &self,
        latitude: f64,
        longitude: f64,
        city: &str,
        commercial_type: &str,
        radius_meters: u32,
        brand_filters: &[&str],
        category_filters: &[&str],
    ) -> Result<NearbyCompetition, AtlasError> {
        let point = Point::new(latitude, longitude)?;

        if !RADIUS_METERS_RANGE.contains(&radius_meters) {
            return Err(AtlasError::invalid(
                "radius_meters must be in range 1-10,000",
            ));
        }

        let mut query = vec![
            ("latitude", point.latitude().to_string()),
            ("longitude", point.longitude().to_string()),
            ("city", city.to_string()),
            ("radius_meters", radius_meters.to_string()),
        ];
        for brand in brand_filters {
            query.push(("brand_filters", brand.to_string()));
        }
        for category in category_filters {
            query.push(("category_filters", category.to_string()));
        }

        self.get_json(&format!("/competition/nearby/{commercial_type}"), &query)
            .await
    }

    /// City-level insights aggregated by category tag.
    pub async fn category_insights(
        &self,
        city: &str,
        commercial_type: &str,
        categories: &[&str],
        price_range: Option<u32>,
    ) -> Result<CategoryInsightsReport, AtlasError> {
        self.insights("categories", city, commercial_type, categories, price_range)
            .await
    }

    /// City-level insights aggregated by brand.
    pub async fn brand_insights(
        &self,
        city: &str,
        commercial_type: &str,
        categories: &[&str],
        price_range: Option<u32>,
    ) -> Result<BrandInsightsReport, AtlasError> {
        self.insights("brands", city, commercial_type, categories, price_range)
            .await
    }

    /// City-level insights aggregated by street, neighborhood, and
    /// postcode.
    pub async fn area_insights(
        &self,
        city: &str,
        commercial_type: &str,
        categories: &[&str],
        price_range: Option<u32>,
    ) -> Result<AreaInsightsReport, AtlasError> {
        self.insights("areas", city, commercial_type, categories, price_range)
            .await
    }

    /// Shared plumbing for the three insights endpoints, which differ
    /// only in the aggregation level path segment.
    async fn insights<T: DeserializeOwned>(
        &self,
        level: &str,
        city: &str,
        commercial_type: &str,
        categories: &[&str],
        price_range: Option<u32>,
    ) -> Result<T, AtlasError> {
        if price_range.is_some_and(|range| range < 1) {
            return Err(AtlasError::invalid("price_range must be at least 1"));
        }

        let mut query = Vec::new();
        for category in categories {
            query.push(("categories", category.to_string()));
        }
        if let Some(range) = price_range {
            query.push(("price_range", range.to_string()));
        }

        self.get_json(
            &format!("/competition/insights/{level}/{city}/{commercial_type}"),
            &query,
        )
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
    async fn nearby_competition_rejects_bad_coordinates() {
        let result = client()
            .nearby_competition(120.0, 0.0, "New York", "Restaurant")
            .await;
        assert!(matches!(result, Err(AtlasError::Validation { .. })));
    }

    #[tokio::test]
    async fn nearby_competition_rejects_out_of_range_radius() {
        for radius in [0, 10_001] {
            let result = client()
                .nearby_competition_filtered(
                    40.748611,
                    -73.9856,
                    "New York",
                    "Restaurant",
                    radius,
                    &[],
                    &[],
                )
                .await;
            assert!(
                matches!(result, Err(AtlasError::Validation { .. })),
                "radius_meters={radius} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn insights_reject_zero_price_range() {
        let result = client()
            .category_insights("Houston", "Restaurant", &[], Some(0))
            .await;
        assert!(matches!(result, Err(AtlasError::Validation { .. })));
    }
}
