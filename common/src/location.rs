//! Location related module
//!
//! The receiver is at a fixed location, every distance is measured from there.
//!

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{direction, distance, Units};

/// Actual location
///
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Location {
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lon: f64,
}

impl Location {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Both coordinates are within their valid range
    ///
    #[inline]
    pub fn is_valid(&self) -> bool {
        (-90. ..=90.).contains(&self.lat) && (-180. ..=180.).contains(&self.lon)
    }

    /// Distance from here to `(lat, lon)`
    ///
    #[inline]
    pub fn distance_to(&self, lat: f64, lon: f64, units: Units) -> f64 {
        distance(self.lat, self.lon, lat, lon, units)
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let ns = if self.lat < 0. { 'S' } else { 'N' };
        let ew = if self.lon < 0. { 'W' } else { 'E' };
        write!(f, "{:.4}{} {:.4}{}", self.lat.abs(), ns, self.lon.abs(), ew)
    }
}

/// Compass label for an optional heading, `Unknown` without one.
///
#[inline]
pub fn bearing_label(heading: Option<f64>) -> &'static str {
    heading.map(direction).unwrap_or("Unknown")
}
