//! WGS84 coordinate type.

use std::fmt;

/// Error returned when constructing a point from out-of-bounds coordinates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid coordinates: {reason}")]
pub struct InvalidPoint {
    reason: &'static str,
}

/// A WGS84 coordinate pair.
///
/// Latitude is in [-90, 90] degrees and longitude in [-180, 180]. This
/// type guarantees that any `Point` value is within bounds by
/// construction, so endpoint methods validate coordinates exactly once,
/// before any network call.
///
/// # Examples
///
/// ```
/// use atlas_client::domain::Point;
///
/// let nyc = Point::new(40.748611, -73.985600).unwrap();
/// assert_eq!(nyc.latitude(), 40.748611);
///
/// // Out-of-bounds latitude is rejected
/// assert!(Point::new(90.5, 0.0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct Point {
    latitude: f64,
    longitude: f64,
}

impl Point {
    /// Construct a point, checking WGS84 bounds.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidPoint> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(InvalidPoint {
                reason: "latitude must be in [-90, 90] degrees",
            });
        }

        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidPoint {
                reason: "longitude must be in [-180, 180] degrees",
            });
        }

        Ok(Point {
            latitude,
            longitude,
        })
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}, {})", self.latitude, self.longitude)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_in_bounds() {
        assert!(Point::new(0.0, 0.0).is_ok());
        assert!(Point::new(40.748611, -73.985600).is_ok());
        assert!(Point::new(-90.0, -180.0).is_ok());
        assert!(Point::new(90.0, 180.0).is_ok());
    }

    #[test]
    fn rejects_out_of_bounds_latitude() {
        assert!(Point::new(90.001, 0.0).is_err());
        assert!(Point::new(-91.0, 0.0).is_err());
        assert!(Point::new(1000.0, 0.0).is_err());
    }

    #[test]
    fn rejects_out_of_bounds_longitude() {
        assert!(Point::new(0.0, 180.001).is_err());
        assert!(Point::new(0.0, -181.0).is_err());
    }

    #[test]
    fn rejects_non_finite() {
        assert!(Point::new(f64::NAN, 0.0).is_err());
        assert!(Point::new(0.0, f64::INFINITY).is_err());
        assert!(Point::new(f64::NEG_INFINITY, 0.0).is_err());
    }

    #[test]
    fn accessors_roundtrip() {
        let p = Point::new(29.76, -95.36).unwrap();
        assert_eq!(p.latitude(), 29.76);
        assert_eq!(p.longitude(), -95.36);
    }

    #[test]
    fn debug_and_display() {
        let p = Point::new(1.5, -2.5).unwrap();
        assert_eq!(format!("{:?}", p), "Point(1.5, -2.5)");
        assert_eq!(format!("{}", p), "(1.5, -2.5)");
    }
}
