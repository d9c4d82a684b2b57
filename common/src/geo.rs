//! Geodesic helpers.
//!
//! Distances use the haversine formula on a spherical Earth, which is more than enough at the
//! scale of a single receiver (a few tens of miles).
//!

use crate::Units;

/// Earth radius in kilometers
pub const EARTH_RADIUS: f64 = 6_371.0;

/// Compass points, clockwise from North
pub const COMPASS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Width of one compass sector in degrees
const SECTOR: f64 = 360. / 16.;

/// Great-circle distance between two points, in km.
///
#[inline]
pub fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin() * (d_lat / 2.0).sin()
        + lat1.to_radians().cos()
            * lat2.to_radians().cos()
            * (d_lon / 2.0).sin()
            * (d_lon / 2.0).sin();

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS * c
}

/// Great-circle distance between two points, converted into `units`.
///
#[inline]
pub fn distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64, units: Units) -> f64 {
    units.from_km(haversine(lat1, lon1, lat2, lon2))
}

/// Map a heading in degrees onto one of the 16 compass points.
///
/// Values outside `[0, 360)` wrap around, half-way values round to the even sector.
///
#[inline]
pub fn direction(heading: f64) -> &'static str {
    let idx = (heading / SECTOR).round_ties_even() as i64;
    COMPASS[idx.rem_euclid(16) as usize]
}
