//! Module to deal with the sources of data we need:
//!
//! - the receiver feed (a dump1090/readsb `aircraft.json` over HTTP)
//! - the owner registry (a CSV file loaded once)
//!
//! The feed is hidden behind the `Fetchable` trait so the tracker does not care where the
//! aircraft come from.
//!

use std::fmt::Debug;

use tracing::{error, trace};

use skywatch_common::{Location, Units};
use skywatch_formats::{AircraftReport, Snapshot, TrackedAircraft};

// Re-export these modules for a shorted import path.
//
pub use error::*;
pub use feed::*;
pub use registry::*;

mod error;
mod feed;
mod registry;

#[macro_use]
mod macros;

/// Where we are and how far we look.
///
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Reference {
    /// Receiver location
    pub home: Location,
    /// Display units, `radius` is expressed in these
    pub units: Units,
    /// Maximum distance for an aircraft to be displayed
    pub radius: f64,
}

impl Reference {
    /// Distance of `report` from home, `None` if outside of `(0, radius]`.
    ///
    #[inline]
    pub fn within(&self, report: &AircraftReport) -> Option<f64> {
        let dist = self
            .home
            .distance_to(report.position.lat, report.position.lon, self.units);
        (dist > 0. && dist <= self.radius).then_some(dist)
    }
}

/// This trait enables us to manage different ways of connecting and fetching data under
/// a single interface.
///
pub trait Fetchable: Debug {
    /// Return source's name
    fn name(&self) -> String;
    /// Fetch actual data, already filtered and enriched
    fn fetch(
        &self,
        registry: &OwnerRegistry,
        reference: &Reference,
    ) -> Result<Vec<TrackedAircraft>, FeedError>;
}

/// Filter a snapshot down to the aircraft within range and add the display fields.
///
/// Entries without a valid position or outside of the radius are dropped, the order of the
/// snapshot is kept.
///
#[tracing::instrument(skip(snap, registry))]
pub fn enrich(
    snap: &Snapshot,
    registry: &OwnerRegistry,
    reference: &Reference,
) -> Vec<TrackedAircraft> {
    let list: Vec<TrackedAircraft> = snap
        .aircraft
        .iter()
        .filter_map(|a| AircraftReport::try_from(a).ok())
        .filter_map(|r| {
            let dist = reference.within(&r)?;
            let owner = r
                .hex
                .as_deref()
                .map(|hex| registry.owner(hex))
                .unwrap_or(skywatch_formats::UNKNOWN);
            Some(TrackedAircraft::new(&r, dist, reference.units, owner))
        })
        .collect();
    trace!("{}/{} aircraft in range", list.len(), snap.aircraft.len());
    list
}

/// Fetch from `src`, any error is logged and gives an empty list.
///
#[tracing::instrument(skip(registry))]
pub fn fetch_or_empty(
    src: &dyn Fetchable,
    registry: &OwnerRegistry,
    reference: &Reference,
) -> Vec<TrackedAircraft> {
    src.fetch(registry, reference).unwrap_or_else(|e| {
        error!("Error fetching aircraft data from {}: {e}", src.name());
        vec![]
    })
}

pub fn version() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
