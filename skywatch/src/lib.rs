//! Library part of the `skywatch` utility.
//!
//! `skywatch` polls a dump1090/readsb receiver, keeps the aircraft within a given radius of
//! the receiver and displays them, closest first, in a full-screen terminal table.  Aircraft
//! closer than the proximity distance are flagged as alerts.
//!
//! - `tracker`: the pipeline state (current list, unique aircraft, refresh timer)
//! - `display`: the screen layout, as a `ratatui` widget
//! - `runtime`: the event loop
//! - `list`: one-shot listing for scripts
//!

pub use cli::*;
pub use config::*;
pub use display::*;
pub use error::*;
pub use list::*;
pub use runtime::*;
pub use tracker::*;

mod cli;
mod config;
mod display;
mod error;
mod list;
mod runtime;
mod tracker;
