//! Atlas commercial-intelligence API client.
//!
//! A typed async client for the Atlas API, which exposes geospatial
//! commercial-intelligence data: city statistics, nearby competition,
//! sales territory isochrones, brand and category insights, reverse
//! geocoding, and administrative boundaries.
//!
//! The client is a thin adapter: it attaches the API key to each request,
//! validates what can be checked locally (coordinates, ranges), performs
//! one HTTPS call per method, and deserializes the JSON response into
//! typed structures. All data computation happens server-side.
//!
//! ```no_run
//! use atlas_client::{AtlasClient, AtlasConfig};
//!
//! # async fn run() -> Result<(), atlas_client::AtlasError> {
//! let client = AtlasClient::new(AtlasConfig::new("my-api-key"))?;
//!
//! let cities = client.list_cities().await?;
//! let stats = client.city_stats("Houston").await?;
//! println!("{} cities, Houston population: {:?}",
//!     cities.len(),
//!     stats.response.data.population_total);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod domain;
pub mod error;
pub mod types;

pub use client::{AtlasClient, AtlasConfig};
pub use domain::{Mobility, Point};
pub use error::AtlasError;
