//! An `AircraftReport` is an `Aircraft` we can place on a map.
//!

use skywatch_common::Location;

use crate::{Aircraft, Altitude, FormatError};

/// Validated aircraft entry, rebuilt from every snapshot.
///
#[derive(Clone, Debug, PartialEq)]
pub struct AircraftReport {
    /// Canonical (trimmed, uppercase) hex code
    pub hex: Option<String>,
    /// Trimmed callsign, never empty
    pub flight: Option<String>,
    /// Barometric altitude
    pub altitude: Option<Altitude>,
    /// Ground speed in knots
    pub speed: Option<f64>,
    /// Heading in degrees
    pub heading: Option<f64>,
    /// Current position
    pub position: Location,
}

/// Uppercase and strip an ICAO address.
///
#[inline]
pub fn canonical_hex(hex: &str) -> String {
    hex.trim().to_uppercase()
}

impl TryFrom<&Aircraft> for AircraftReport {
    type Error = FormatError;

    fn try_from(value: &Aircraft) -> Result<Self, Self::Error> {
        let (lat, lon) = match (value.lat, value.lon) {
            (Some(lat), Some(lon)) => (lat, lon),
            _ => return Err(FormatError::NoPosition),
        };
        let position = Location::new(lat, lon);
        if !position.is_valid() {
            return Err(FormatError::InvalidPosition { lat, lon });
        }

        let flight = value
            .flight
            .as_deref()
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(String::from);

        Ok(AircraftReport {
            hex: value.hex.as_deref().map(canonical_hex),
            flight,
            altitude: value.alt_baro.clone(),
            speed: value.gs,
            heading: value.track,
            position,
        })
    }
}
