//! Typed request and response models for the Atlas API.
//!
//! Each endpoint family has its own module. Structures map directly to
//! the JSON the API returns; unknown fields are ignored, and a missing
//! required field fails deserialization (surfaced by the client as a
//! validation error). Fields the API may omit are `Option`.

pub mod cities;
pub mod competition;
pub mod demographics;
pub mod geojson;
