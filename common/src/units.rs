//! Display units.
//!
//! Every distance is computed in kilometers and converted for display with the unit's factor.
//! Ground speed is reported in knots and converted with `from_knots()`.
//!

use serde::{Deserialize, Serialize};
use strum::EnumString;

/// One kilometer in statute miles
pub const KM_TO_MI: f64 = 0.621371;

/// One kilometer in nautical miles
pub const KM_TO_NM: f64 = 1. / 1.852;
/// One knot in km/h
pub const KNOT_TO_KMH: f64 = 1.852;

/// Supported display units.
///
/// ```rust
/// use skywatch_common::Units;
///
/// let u: Units = "nm".parse().unwrap();
/// assert_eq!(Units::NauticalMiles, u);
/// assert_eq!("nm", u.to_string());
/// ```
///
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Deserialize,
    EnumString,
    Eq,
    PartialEq,
    Serialize,
    strum::Display,
)]
#[strum(ascii_case_insensitive)]
pub enum Units {
    #[default]
    #[serde(rename = "mi")]
    #[strum(serialize = "mi")]
    Miles,
    #[serde(rename = "km")]
    #[strum(serialize = "km")]
    Kilometers,
    #[serde(rename = "nm")]
    #[strum(serialize = "nm")]
    NauticalMiles,
}

impl Units {
    /// Conversion factor from kilometers.
    ///
    #[inline]
    pub fn factor(&self) -> f64 {
        match self {
            Units::Miles => KM_TO_MI,
            Units::Kilometers => 1.,
            Units::NauticalMiles => KM_TO_NM,
        }
    }

    /// Label used after a speed value.
    ///
    #[inline]
    pub fn speed_label(&self) -> &'static str {
        match self {
            Units::Miles => "mph",
            Units::Kilometers => "km/h",
            Units::NauticalMiles => "kt",
        }
    }

    /// Convert a value expressed in kilometers.
    ///
    #[inline]
    pub fn from_km(&self, km: f64) -> f64 {
        km * self.factor()
    }

    /// Convert a speed in knots into the speed unit matching `speed_label()`.
    ///
    /// NOTE: in miles the knots are multiplied by the km to miles factor, not converted to
    ///       mph.
    ///
    #[inline]
    pub fn from_knots(&self, kt: f64) -> f64 {
        match self {
            Units::Miles => kt * KM_TO_MI,
            Units::Kilometers => kt * KNOT_TO_KMH,
            Units::NauticalMiles => kt,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("mi", Units::Miles)]
    #[case("KM", Units::Kilometers)]
    #[case("nm", Units::NauticalMiles)]
    fn test_units_parse(#[case] input: &str, #[case] u: Units) {
        let r: Units = input.parse().unwrap();
        assert_eq!(u, r);
    }

    #[test]
    fn test_units_bad() {
        assert!("furlong".parse::<Units>().is_err());
    }

    #[rstest]
    #[case(Units::Miles, 450. * KM_TO_MI)]
    #[case(Units::Kilometers, 833.4)]
    #[case(Units::NauticalMiles, 450.)]
    fn test_units_from_knots(#[case] u: Units, #[case] speed: f64) {
        assert!((u.from_knots(450.) - speed).abs() < 1e-9);
    }

    #[test]
    fn test_units_from_km() {
        assert_eq!(1., Units::Kilometers.from_km(1.));
        assert_eq!(KM_TO_MI * 10., Units::Miles.from_km(10.));
        assert!((Units::NauticalMiles.from_km(1.852) - 1.).abs() < 1e-9);
    }
}
