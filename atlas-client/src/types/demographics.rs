//! Socio-demographics endpoint family models.
//!
//! City statistics are a flat record of averaged figures; area and
//! sales-territory profiles use nested statistics where each leaf is a
//! [`Statistic`] triple comparing the queried area to the whole city.

use serde::{Deserialize, Serialize};

use crate::domain::Mobility;
use crate::types::geojson::FeatureCollection;

/// Echo of the parameters sent to the city-stats endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityStatsRequest {
    pub city: String,
}

/// Summarized city-wide statistics.
///
/// Every field is optional: the API omits figures that are unavailable
/// for a city rather than sending nulls or zeros.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityStats {
    pub average_individual_income: Option<f64>,
    pub median_household_income: Option<f64>,
    pub population_total: Option<i64>,
    pub population_youth: Option<i64>,
    pub population_middle_age: Option<i64>,
    pub population_senior: Option<i64>,
    /// Residents commuting by personal transport.
    pub work_transportation_self_mobility: Option<i64>,
    pub household_income_low: Option<i64>,
    pub household_income_medium: Option<i64>,
    pub household_income_high: Option<i64>,
    pub households_total: Option<i64>,
    pub households_family_total: Option<i64>,
    pub average_household_composition: Option<f64>,
}

/// Payload of the city-stats endpoint: raw figures plus derived
/// human-readable summary statements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityStatsPayload {
    pub data: CityStats,
    pub insights: Vec<String>,
}

/// Envelope returned by the city-stats endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityStatsReport {
    pub request: CityStatsRequest,
    pub response: CityStatsPayload,
}

/// A single statistic for an area: the local value, the city-wide
/// benchmark, and the local share of the city total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistic {
    pub value: Option<f64>,
    pub city: Option<f64>,
    pub share: Option<f64>,
}

/// Household counts bucketed by median income band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulationAffluence {
    pub low_median_household_income: Option<Statistic>,
    pub medium_median_household_income: Option<Statistic>,
    pub high_median_household_income: Option<Statistic>,
}

/// Population figures by age band and affluence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Demographics {
    pub total_population: Option<Statistic>,
    pub youth_population: Option<Statistic>,
    pub middle_aged_population: Option<Statistic>,
    pub senior_population: Option<Statistic>,
    pub self_mobilizing_population: Option<Statistic>,
    pub population_affluence: Option<PopulationAffluence>,
}

/// Average and median for one income measure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeStats {
    pub avg: Option<Statistic>,
    pub median: Option<Statistic>,
}

/// Household and individual income figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
    pub household: Option<IncomeStats>,
    pub individual: Option<IncomeStats>,
}

/// Household composition figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseholdComposition {
    pub household_count: Option<Statistic>,
    pub households_with_family_count: Option<Statistic>,
    pub avg_persons_per_household: Option<Statistic>,
}

/// Nested sociodemographic profile for an area or territory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocioDemographics {
    pub demographics: Option<Demographics>,
    pub income: Option<Income>,
    pub household_composition: Option<HouseholdComposition>,
}

/// Area-level statistics: the profile, which administrative areas it
/// covers, and the area geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaStats {
    pub sociodemographic: Option<SocioDemographics>,
    pub areas_covered: Option<Vec<String>>,
    pub geometry: Option<FeatureCollection>,
}

/// Echo of the parameters sent to a sales-territory endpoint.
///
/// Exactly one of `time_minutes` / `distance_meters` is set, depending
/// on which variant was called.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesTerritoryRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub mode_of_mobility: Option<Mobility>,
    pub time_minutes: Option<u32>,
    pub distance_meters: Option<u32>,
}

/// Payload of a sales-territory call: the isochrone (or radius) polygon
/// with the sociodemographic profile valid inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesTerritoryPayload {
    pub data: Option<SocioDemographics>,
    pub areas_covered: Option<Vec<String>>,
    pub geometry: FeatureCollection,
}

/// Envelope returned by the sales-territory endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesTerritory {
    pub request: SalesTerritoryRequest,
    pub response: SalesTerritoryPayload,
}
