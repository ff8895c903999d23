//! Competition endpoint family models.

use serde::{Deserialize, Serialize};

/// Echo of the parameters sent to the nearby-competition endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitionRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub commercial_type: String,
    pub radius_meters: u32,
    pub brand_filters: Option<Vec<String>>,
    pub category_filters: Option<Vec<String>>,
}

/// A commercial outlet near the queried coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outlet {
    pub brand_name: String,
    pub address: String,
    pub category_tags: Vec<String>,
    pub rating: f64,
    pub number_of_reviews: Option<i64>,
    /// Rating rank of this outlet among outlets in the radius, 0..1.
    pub rating_percentile: f64,
    pub orders_percentile: f64,
    pub latitude: f64,
    pub longitude: f64,
}

/// Payload of the nearby-competition endpoint: the outlets in the search
/// radius plus derived human-readable summary statements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitionPayload {
    pub data: Vec<Outlet>,
    pub insights: Vec<String>,
}

/// Envelope returned by the nearby-competition endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyCompetition {
    pub request: CompetitionRequest,
    pub response: CompetitionPayload,
}

/// Outlet counts bucketed by price range (1 = cheapest, 4 = priciest).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBins {
    pub price_1: Option<i64>,
    pub price_2: Option<i64>,
    pub price_3: Option<i64>,
    pub price_4: Option<i64>,
}

/// Open-outlet counts per hour of day, one 24-entry histogram per weekday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatingHours {
    pub sunday: Vec<i64>,
    pub monday: Vec<i64>,
    pub tuesday: Vec<i64>,
    pub wednesday: Vec<i64>,
    pub thursday: Vec<i64>,
    pub friday: Vec<i64>,
    pub saturday: Vec<i64>,
}

/// Echo of the parameters sent to an insights endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightsRequest {
    pub city: String,
    pub commercial_type: String,
    pub categories: Option<Vec<String>>,
    pub price_range: Option<u32>,
}

/// Aggregates for one category tag within a city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStat {
    pub category_tag: String,
    pub avg_rating: f64,
    pub avg_number_of_reviews: f64,
    pub outlet_count: i64,
    pub price_bins: PriceBins,
}

/// How often two category tags appear on the same outlet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPair {
    pub category_1: String,
    pub category_2: String,
    pub pair_occurrences: i64,
}

/// City-level insights aggregated by category.
///
/// The `max_*` / `min_*` fields are headline statements naming the
/// leading (or trailing) category for each measure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryInsights {
    pub max_outlets: String,
    pub max_avg_rating: String,
    pub max_avg_reviews: String,
    pub min_avg_rating: String,
    pub category_stats: Vec<CategoryStat>,
    pub category_by_pairwise_occurrence: Vec<CategoryPair>,
}

/// Envelope returned by the category-insights endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryInsightsReport {
    pub request: InsightsRequest,
    pub response: CategoryInsights,
}

/// Aggregates for one brand within a city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandStat {
    pub brand_name: String,
    pub avg_rating: f64,
    pub avg_number_of_reviews: f64,
    pub outlet_count: i64,
    pub category_tags: Vec<String>,
    pub price_bins: PriceBins,
}

/// City-level insights aggregated by brand, ranked three ways.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandInsights {
    pub max_outlets: String,
    pub max_avg_rating: String,
    pub max_avg_reviews: String,
    pub outlet_count: i64,
    pub brand_stats_by_outlet_count: Vec<BrandStat>,
    pub brand_stats_by_avg_rating: Vec<BrandStat>,
    pub brand_stats_by_avg_number_of_reviews: Vec<BrandStat>,
    pub outlet_counts_by_price: PriceBins,
    pub operating_hours_outlet_count: i64,
    pub operating_hours: OperatingHours,
}

/// Envelope returned by the brand-insights endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandInsightsReport {
    pub request: InsightsRequest,
    pub response: BrandInsights,
}

/// Aggregates for one street.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreetStat {
    pub street: String,
    pub avg_rating: f64,
    pub avg_number_of_reviews: f64,
    pub brand_count: i64,
}

/// Aggregates for one neighborhood.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeighborhoodStat {
    pub neighborhood: String,
    pub avg_rating: f64,
    pub avg_number_of_reviews: f64,
    pub brand_count: i64,
}

/// Aggregates for one postcode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostcodeStat {
    pub postcode: String,
    pub avg_rating: f64,
    pub avg_number_of_reviews: f64,
    pub brand_count: i64,
}

/// City-level insights aggregated by street, neighborhood, and postcode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaInsights {
    pub street_stats: Vec<StreetStat>,
    pub neighborhood_stats: Vec<NeighborhoodStat>,
    pub postcode_stats: Vec<PostcodeStat>,
}

/// Envelope returned by the area-insights endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaInsightsReport {
    pub request: InsightsRequest,
    pub response: AreaInsights,
}
