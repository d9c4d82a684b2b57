//! This library is there to share some common code amongst all skywatch modules.
//!
//! - `geo`: great-circle distance and compass directions
//! - `location`: reference point of the receiver
//! - `units`: display units and their conversion from kilometers
//! - `config`: generic HCL configuration file loader
//! - `logging`: tracing initialisation
//!

mod config;
mod geo;
mod location;
mod logging;
mod units;

#[macro_use]
mod macros;

use clap::{crate_name, crate_version};
pub use config::*;
pub use geo::*;
pub use location::*;
pub use logging::*;
pub use units::*;

const NAME: &str = crate_name!();
const VERSION: &str = crate_version!();

pub fn version() -> String {
    format!("{}/{}", NAME, VERSION)
}
