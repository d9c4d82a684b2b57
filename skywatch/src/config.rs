//! Configuration module
//!
//! The configuration file is in HCL and lives in `$HOME/.config/skywatch/skywatch.hcl` unless
//! specified with `-c`.  Without one we run with the defaults below, which are probably not
//! where your receiver is.
//!
//! ```hcl
//! version = 1
//! location = { lat = 40.7, lon = -74.0 }
//! url = "http://receiver.local/run/readsb/aircraft.json"
//! owners = "/var/lib/skywatch/MASTER.txt"
//! units = "mi"
//! radius = 15
//! proximity = 5
//! refresh = 5
//! ```
//!
//! Version History:
//!
//! - v1 is the initial version
//!

use std::path::{Path, PathBuf};
use std::time::Duration;

use eyre::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use skywatch_common::{ConfigFile, Location, Units, Versioned};
use skywatch_sources::{OwnerColumns, Reference, DEF_TIMEOUT, DEF_URL};

use crate::cli::Opts;
use crate::error::Status;

/// Project tag, used as directory name
pub const TAG: &str = "skywatch";

/// Config filename
pub const CONFIG: &str = "skywatch.hcl";

/// Current version
pub const CVERSION: usize = 1;

/// Default owner registry
const DEF_OWNERS: &str = "./master.csv";
/// Default log file
const DEF_LOG: &str = "skywatch.log";
/// Default display radius
const DEF_RADIUS: f64 = 15.;
/// Default proximity alert
const DEF_PROXIMITY: f64 = 5.;
/// Default delay between fetches, in seconds
const DEF_REFRESH: u64 = 5;

/// Configuration file content
///
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Version of the file format
    pub version: usize,
    /// Receiver location
    pub location: Location,
    /// URL of the `aircraft.json` file
    pub url: String,
    /// Owner registry (CSV)
    pub owners: PathBuf,
    /// Columns to use in the owner registry
    pub owner_columns: OwnerColumns,
    /// Display units
    pub units: Units,
    /// Maximum distance, in `units`
    pub radius: f64,
    /// Proximity alert distance, in `units`
    pub proximity: f64,
    /// Delay between two fetches, in seconds
    pub refresh: u64,
    /// Timeout for one fetch, in seconds
    pub timeout: u64,
    /// Log file
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            version: CVERSION,
            location: Location::default(),
            url: String::from(DEF_URL),
            owners: PathBuf::from(DEF_OWNERS),
            owner_columns: OwnerColumns::default(),
            units: Units::default(),
            radius: DEF_RADIUS,
            proximity: DEF_PROXIMITY,
            refresh: DEF_REFRESH,
            timeout: DEF_TIMEOUT.as_secs(),
            log_file: PathBuf::from(DEF_LOG),
        }
    }
}

impl Versioned for Config {
    fn version(&self) -> usize {
        self.version
    }
}

impl Config {
    /// Load the given file or the default one, falling back to the built-in defaults if there
    /// is no default file.
    ///
    #[tracing::instrument]
    pub fn load(fname: Option<&Path>) -> Result<Config> {
        let cfg = ConfigFile::<Config>::load_or_default(TAG, CONFIG, fname)?.into_inner();
        if cfg.version() != CVERSION {
            return Err(Status::BadFileVersion(cfg.version()).into());
        }
        Ok(cfg)
    }
}

/// This holds our context, everything is immutable once the program is started.
///
#[derive(Clone, Debug)]
pub struct Context {
    /// Receiver location, units and display radius
    pub reference: Reference,
    /// Proximity alert distance
    pub proximity: f64,
    /// Delay between fetches
    pub refresh: Duration,
    /// Feed URL
    pub url: String,
    /// Timeout for one fetch
    pub timeout: Duration,
    /// Owner registry
    pub owners: PathBuf,
    /// Columns of the owner registry
    pub owner_columns: OwnerColumns,
    /// Log file
    pub log_file: PathBuf,
}

impl Context {
    /// Merge the configuration file and the command-line options, the latter winning.
    ///
    #[tracing::instrument(skip(opts))]
    pub fn new(cfg: Config, opts: &Opts) -> Result<Context> {
        trace!("context::new");

        let home = Location::new(
            opts.lat.unwrap_or(cfg.location.lat),
            opts.lon.unwrap_or(cfg.location.lon),
        );
        if !home.is_valid() {
            return Err(Status::InvalidLocation(home.lat, home.lon).into());
        }

        let radius = opts.radius.unwrap_or(cfg.radius);
        if !(radius > 0.) {
            return Err(Status::BadParameter(format!("radius must be positive ({radius})")).into());
        }
        let proximity = opts.proximity.unwrap_or(cfg.proximity);
        if !(proximity >= 0.) {
            return Err(
                Status::BadParameter(format!("proximity can not be negative ({proximity})")).into(),
            );
        }
        if cfg.refresh == 0 {
            return Err(Status::BadParameter("refresh must be at least 1s".to_string()).into());
        }
        if cfg.timeout == 0 {
            return Err(Status::BadParameter("timeout must be at least 1s".to_string()).into());
        }

        let ctx = Context {
            reference: Reference {
                home,
                units: opts.units.unwrap_or(cfg.units),
                radius,
            },
            proximity,
            refresh: Duration::from_secs(cfg.refresh),
            url: opts.url.clone().unwrap_or(cfg.url),
            timeout: Duration::from_secs(cfg.timeout),
            owners: opts.owners.clone().unwrap_or(cfg.owners),
            owner_columns: cfg.owner_columns,
            log_file: opts.log_file.clone().unwrap_or(cfg.log_file),
        };
        debug!("ctx={ctx:?}");
        Ok(ctx)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use tempfile::NamedTempFile;

    use super::*;

    const SAMPLE: &str = r##"
version = 1
location = { lat = 40.7, lon = -74.0 }
url = "http://receiver.local/run/readsb/aircraft.json"
owners = "/tmp/MASTER.txt"
owner_columns = { hex = "icao", name = "operator" }
units = "nm"
radius = 25
proximity = 3.5
refresh = 2
"##;

    fn opts(args: &[&str]) -> Opts {
        let mut all = vec!["skywatch"];
        all.extend_from_slice(args);
        Opts::try_parse_from(all).unwrap()
    }

    #[test]
    fn test_config_parse() -> Result<()> {
        let cfg = ConfigFile::<Config>::parse(SAMPLE)?;
        assert_eq!(CVERSION, cfg.version());
        assert_eq!(Location::new(40.7, -74.0), cfg.location);
        assert_eq!(Units::NauticalMiles, cfg.units);
        assert_eq!(25., cfg.radius);
        assert_eq!(3.5, cfg.proximity);
        assert_eq!(2, cfg.refresh);
        assert_eq!("icao", cfg.owner_columns.hex);
        // not in the file
        assert_eq!(5, cfg.timeout);
        assert_eq!(PathBuf::from(DEF_LOG), cfg.log_file);
        Ok(())
    }

    #[test]
    fn test_config_sample() -> Result<()> {
        let cfg = ConfigFile::<Config>::parse(include_str!("../skywatch.hcl"))?;
        let def = Config::default();
        assert_eq!(CVERSION, cfg.version());
        assert_eq!(def.url, cfg.url);
        assert_eq!(def.owner_columns, cfg.owner_columns);
        assert_eq!(def.units, cfg.units);
        assert_eq!(def.refresh, cfg.refresh);
        Ok(())
    }

    #[test]
    fn test_config_load_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        write!(file, "{}", SAMPLE)?;

        let cfg = Config::load(Some(file.path()))?;
        assert_eq!("http://receiver.local/run/readsb/aircraft.json", cfg.url);
        Ok(())
    }

    #[test]
    fn test_config_bad_version() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        write!(file, "version = 2\nradius = 10\n")?;

        let cfg = Config::load(Some(file.path()));
        assert!(cfg.is_err());
        Ok(())
    }

    #[test]
    fn test_context_defaults() -> Result<()> {
        let ctx = Context::new(Config::default(), &opts(&[]))?;
        assert_eq!(Units::Miles, ctx.reference.units);
        assert_eq!(15., ctx.reference.radius);
        assert_eq!(5., ctx.proximity);
        assert_eq!(Duration::from_secs(5), ctx.refresh);
        assert_eq!(Duration::from_secs(5), ctx.timeout);
        assert_eq!(DEF_URL, ctx.url);
        Ok(())
    }

    #[test]
    fn test_context_overrides() -> Result<()> {
        let cfg = ConfigFile::<Config>::parse(SAMPLE)?;
        let ctx = Context::new(
            cfg,
            &opts(&["--lat", "-33.9", "--lon", "151.2", "-u", "http://x/a.json", "-p", "1"]),
        )?;
        assert_eq!(Location::new(-33.9, 151.2), ctx.reference.home);
        assert_eq!(Units::NauticalMiles, ctx.reference.units);
        assert_eq!(25., ctx.reference.radius);
        assert_eq!(1., ctx.proximity);
        assert_eq!("http://x/a.json", ctx.url);
        assert_eq!(PathBuf::from("/tmp/MASTER.txt"), ctx.owners);
        Ok(())
    }

    #[test]
    fn test_context_invalid() {
        assert!(Context::new(Config::default(), &opts(&["--lat", "95"])).is_err());
        assert!(Context::new(Config::default(), &opts(&["-r", "0"])).is_err());
        assert!(Context::new(Config::default(), &opts(&["--proximity=-1"])).is_err());

        let cfg = Config {
            refresh: 0,
            ..Default::default()
        };
        assert!(Context::new(cfg, &opts(&[])).is_err());
    }
}
