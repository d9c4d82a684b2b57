//! Module describing all possible commands and sub-commands to the `skywatch` main driver
//!
//! We have four commands:
//!
//! - `watch` (the default) runs the full-screen display until `q` is pressed
//! - `list` fetches the feed once and prints a table of what is in range
//! - `completion` is here just to configure the various shells completion system
//! - `version`
//!
//! Every option given here overrides the corresponding parameter in the configuration file.
//!

use std::path::PathBuf;

use clap::{crate_authors, crate_description, crate_name, crate_version, Parser};
use clap_complete::shells::Shell;

use skywatch_common::Units;

/// CLI options
#[derive(Debug, Parser)]
#[command(disable_version_flag = true)]
#[clap(name = crate_name!(), about = crate_description!())]
#[clap(version = crate_version!(), author = crate_authors!())]
pub struct Opts {
    /// configuration file.
    #[clap(short = 'c', long)]
    pub config: Option<PathBuf>,
    /// Latitude of the receiver.
    #[clap(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,
    /// Longitude of the receiver.
    #[clap(long, allow_hyphen_values = true)]
    pub lon: Option<f64>,
    /// URL of the `aircraft.json` file.
    #[clap(short = 'u', long)]
    pub url: Option<String>,
    /// Owner registry (CSV).
    #[clap(short = 'O', long)]
    pub owners: Option<PathBuf>,
    /// Display radius.
    #[clap(short = 'r', long)]
    pub radius: Option<f64>,
    /// Proximity alert distance.
    #[clap(short = 'p', long)]
    pub proximity: Option<f64>,
    /// Display units (mi, km, nm).
    #[clap(short = 'U', long)]
    pub units: Option<Units>,
    /// Log file.
    #[clap(short = 'L', long)]
    pub log_file: Option<PathBuf>,
    /// Verbose mode, logs also go to stderr outside of `watch`.
    #[clap(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// Sub-commands (see below).
    #[clap(subcommand)]
    pub subcmd: Option<SubCommand>,
}

// ------

/// All sub-commands:
///
/// `completion SHELL`
/// `list [--json]`
/// `version`
/// `watch`
///
#[derive(Debug, Parser)]
pub enum SubCommand {
    /// Generate Completion stuff
    Completion(ComplOpts),
    /// Fetch once and list aircraft in range
    List(ListOpts),
    /// List all package versions
    Version,
    /// Continuously display aircraft in range (default)
    Watch,
}

// ------

/// Options to generate completion files at runtime
///
#[derive(Debug, Parser)]
pub struct ComplOpts {
    #[clap(value_parser)]
    pub shell: Shell,
}

// ------

/// Options for `list`
///
#[derive(Debug, Parser)]
pub struct ListOpts {
    /// Output JSON instead of a table.
    #[clap(long)]
    pub json: bool,
}
