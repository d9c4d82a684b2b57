//! `TrackedAircraft` is what we actually display.
//!
//! All the display strings are computed once when the snapshot is fetched, the renderer only
//! truncates them to their column width.
//!

use serde::Serialize;

use skywatch_common::{bearing_label, Units};

use crate::{AircraftReport, NA};

/// Enriched view of an `AircraftReport`.
///
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrackedAircraft {
    /// Canonical hex code, if any
    pub hex: Option<String>,
    /// Callsign or `N/A`
    pub flight: String,
    /// Raw altitude or `N/A`
    pub altitude: String,
    /// Converted ground speed or `N/A`
    pub speed: String,
    /// Distance from the reference point, in display units
    pub distance: f64,
    /// Formatted distance
    pub distance_display: String,
    /// Registered owner or `Unknown`
    pub owner: String,
    /// Heading with one decimal or `N/A`
    pub heading: String,
    /// Compass point or `Unknown`
    pub direction: String,
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lon: f64,
}

impl TrackedAircraft {
    /// Build the display view of `report`, which is `distance` away from us.
    ///
    /// NOTE: zero altitude and zero speed are displayed as missing, an aircraft on the ground
    ///       is not distinguishable from one with no data.
    ///
    pub fn new(report: &AircraftReport, distance: f64, units: Units, owner: &str) -> Self {
        let altitude = match &report.altitude {
            Some(alt) if alt.is_set() => alt.to_string(),
            _ => NA.to_string(),
        };

        let speed = units.from_knots(report.speed.unwrap_or(0.));
        let speed = if speed != 0. {
            format!("{:.1} {}", speed, units.speed_label())
        } else {
            NA.to_string()
        };

        let heading = report
            .heading
            .map(|h| format!("{:.1}", h))
            .unwrap_or_else(|| NA.to_string());

        TrackedAircraft {
            hex: report.hex.clone(),
            flight: report.flight.clone().unwrap_or_else(|| NA.to_string()),
            altitude,
            speed,
            distance,
            distance_display: format!("{:.1} {}", distance, units),
            owner: owner.to_string(),
            heading,
            direction: bearing_label(report.heading).to_string(),
            lat: report.position.lat,
            lon: report.position.lon,
        }
    }

    /// Hex code or `N/A`
    ///
    #[inline]
    pub fn hex(&self) -> &str {
        self.hex.as_deref().unwrap_or(NA)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use skywatch_common::{Location, KM_TO_MI};

    use super::*;
    use crate::{Altitude, UNKNOWN};

    fn report() -> AircraftReport {
        AircraftReport {
            hex: Some("A1B2C3".to_string()),
            flight: Some("UAL123".to_string()),
            altitude: Some(Altitude::Feet(35000.)),
            speed: Some(450.),
            heading: Some(270.46),
            position: Location::new(40.7, -74.0),
        }
    }

    #[test]
    fn test_tracked_full() {
        let t = TrackedAircraft::new(&report(), 12.345, Units::Miles, "UNITED AIRLINES INC");
        assert_eq!("A1B2C3", t.hex());
        assert_eq!("UAL123", t.flight);
        assert_eq!("35000", t.altitude);
        assert_eq!(format!("{:.1} mph", 450. * KM_TO_MI), t.speed);
        assert_eq!("12.3 mi", t.distance_display);
        assert_eq!("270.5", t.heading);
        assert_eq!("W", t.direction);
        assert_eq!("UNITED AIRLINES INC", t.owner);
    }

    #[test]
    fn test_tracked_missing() {
        let r = AircraftReport {
            hex: None,
            flight: None,
            altitude: None,
            speed: None,
            heading: None,
            position: Location::new(40.7, -74.0),
        };
        let t = TrackedAircraft::new(&r, 3., Units::Kilometers, UNKNOWN);
        assert_eq!(NA, t.hex());
        assert_eq!(NA, t.flight);
        assert_eq!(NA, t.altitude);
        assert_eq!(NA, t.speed);
        assert_eq!(NA, t.heading);
        assert_eq!(UNKNOWN, t.direction);
        assert_eq!(UNKNOWN, t.owner);
        assert_eq!("3.0 km", t.distance_display);
    }

    #[test]
    fn test_tracked_zero_is_missing() {
        let mut r = report();
        r.altitude = Some(Altitude::Feet(0.));
        r.speed = Some(0.);
        let t = TrackedAircraft::new(&r, 3., Units::Miles, UNKNOWN);
        assert_eq!(NA, t.altitude);
        assert_eq!(NA, t.speed);
    }

    #[rstest]
    #[case(Units::Miles, "279.6 mph")]
    #[case(Units::Kilometers, "833.4 km/h")]
    #[case(Units::NauticalMiles, "450.0 kt")]
    fn test_tracked_speed_units(#[case] units: Units, #[case] speed: &str) {
        let t = TrackedAircraft::new(&report(), 3., units, UNKNOWN);
        assert_eq!(speed, t.speed);
    }

    #[test]
    fn test_tracked_ground() {
        let mut r = report();
        r.altitude = Some(Altitude::Other("ground".to_string()));
        let t = TrackedAircraft::new(&r, 1., Units::NauticalMiles, UNKNOWN);
        assert_eq!("ground", t.altitude);
        assert_eq!("1.0 nm", t.distance_display);
    }
}
