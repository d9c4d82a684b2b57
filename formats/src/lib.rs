//! Definition of the data formats
//!
//! This module makes the link between what the receiver sends us (the `aircraft.json` file
//! served by [dump1090] or [readsb]) and what we display.
//!
//! - `Snapshot`/`Aircraft`: the raw payload, every field is optional
//! - `AircraftReport`: an aircraft with a valid position
//! - `TrackedAircraft`: a report enriched with distance, owner and display strings
//!
//! [dump1090]: https://github.com/flightaware/dump1090
//! [readsb]: https://github.com/wiedehopf/readsb
//!

// Re-export for convenience
//
pub use aircraft::*;
pub use error::*;
pub use report::*;
pub use tracked::*;

mod aircraft;
mod error;
mod report;
mod tracked;

/// Placeholder for missing values
pub const NA: &str = "N/A";

/// Placeholder for unknown owners or directions
pub const UNKNOWN: &str = "Unknown";

pub fn version() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
