//! Module to load the `aircraft.json` file served by dump1090/readsb.
//!
//! Documentation is taken from [readsb](https://github.com/wiedehopf/readsb/blob/dev/README-json.md).
//!
//! We only deserialize the fields we use, everything else is ignored.  Every field is
//! optional, a receiver sends only what it has decoded so far.
//!

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::FormatError;

/// This is the main container sent by the receiver.
///
#[derive(Debug, Default, Deserialize)]
pub struct Snapshot {
    /// UNIX timestamp of the file, in seconds
    pub now: Option<f64>,
    /// Total number of Mode S messages processed
    pub messages: Option<u64>,
    /// Currently visible aircraft
    #[serde(default)]
    pub aircraft: Vec<Aircraft>,
}

impl Snapshot {
    /// Deserialize from json
    ///
    #[tracing::instrument(skip(input))]
    pub fn from_json(input: &str) -> Result<Self, FormatError> {
        let data: Snapshot = serde_json::from_str(input)?;
        trace!("{} aircraft", data.aircraft.len());
        Ok(data)
    }
}

/// Barometric altitude, either in feet or `"ground"`.
///
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Altitude {
    Feet(f64),
    Other(String),
}

impl Altitude {
    /// Zero and empty values are considered as missing, exactly like an absent field.
    ///
    #[inline]
    pub fn is_set(&self) -> bool {
        match self {
            Altitude::Feet(ft) => *ft != 0.,
            Altitude::Other(s) => !s.trim().is_empty(),
        }
    }
}

impl Display for Altitude {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Altitude::Feet(ft) => write!(f, "{}", ft),
            Altitude::Other(s) => write!(f, "{}", s.trim()),
        }
    }
}

/// One aircraft entry.
///
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Aircraft {
    /// ICAO 24-bit address, `~` prefix for non-ICAO ones
    pub hex: Option<String>,
    /// Callsign, space-padded to 8 chars
    pub flight: Option<String>,
    /// Barometric altitude in feet
    pub alt_baro: Option<Altitude>,
    /// Ground speed in knots
    pub gs: Option<f64>,
    /// True track over ground in degrees
    pub track: Option<f64>,
    /// Latitude
    pub lat: Option<f64>,
    /// Longitude
    pub lon: Option<f64>,
}
