//! This is the `ConfigFile` struct.
//!
//! This is for finding the right default locations for configuration files.  This is a
//! configuration file/struct neutral loading engine, storing only the base directory and with
//! `load()` read the proper file or the default one.
//!
//! This encapsulates the configuration file, available with `.inner()` or `.into_inner()`.
//!

use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use eyre::{eyre, Result};
use serde::de::DeserializeOwned;
use tracing::{debug, trace, warn};

use crate::makepath;

/// Every configuration file carries a version number so we can detect old files.
///
pub trait Versioned {
    fn version(&self) -> usize;
}

/// Generic configuration file, `T` being the actual content.
///
#[derive(Debug)]
pub struct ConfigFile<T: Debug + DeserializeOwned + Versioned> {
    /// Tag is the project name.
    tag: String,
    /// This is the base directory for all files.
    basedir: PathBuf,
    /// Default filename inside `basedir`.
    fname: String,
    inner: T,
}

impl<T> ConfigFile<T>
where
    T: Debug + DeserializeOwned + Versioned,
{
    /// Find the base directory for `tag`.
    ///
    /// `$HOME/.config/<tag>` on UNIX, `%LOCALAPPDATA%\<tag>` on Windows.
    ///
    #[tracing::instrument]
    pub fn basedir(tag: &str) -> Result<PathBuf> {
        let base = BaseDirs::new().ok_or_else(|| eyre!("No home directory, can not continue"))?;

        #[cfg(unix)]
        let base: PathBuf = makepath!(base.home_dir(), ".config", tag);

        #[cfg(windows)]
        let base: PathBuf = makepath!(base.data_local_dir(), tag);

        debug!("base = {base:?}");
        Ok(base)
    }

    /// Returns the path of the default config directory
    ///
    pub fn config_path(&self) -> PathBuf {
        self.basedir.clone()
    }

    /// Returns the path of the default config file
    ///
    pub fn default_file(&self) -> PathBuf {
        self.config_path().join(&self.fname)
    }

    /// Project tag
    ///
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Load the file and return a struct T in the right format.
    ///
    /// Use the following search path:
    /// - file specified on CLI
    /// - default basedir (base on $HOME or $LOCALAPPDATA)
    ///
    /// An explicit file does not need a home directory, its own directory is used as base.
    ///
    #[tracing::instrument]
    pub fn load(tag: &str, fname: &str, file: Option<&Path>) -> Result<ConfigFile<T>> {
        let file = match file {
            Some(file) => file.to_path_buf(),
            None => Self::basedir(tag)?.join(fname),
        };

        if !file.exists() {
            return Err(eyre!("Unknown config file {:?}", file));
        }
        let file = file.canonicalize()?;
        let basedir = file
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| eyre!("no parent directory for {file:?}"))?;

        trace!("Loading config file {file:?} from {basedir:?}");
        let data = fs::read_to_string(&file)?;
        let inner = Self::parse(&data)?;

        Ok(ConfigFile {
            tag: String::from(tag),
            basedir,
            fname: String::from(fname),
            inner,
        })
    }

    /// Parse HCL content.
    ///
    #[tracing::instrument(skip(data))]
    pub fn parse(data: &str) -> Result<T> {
        let data: T = hcl::from_str(data)?;
        debug!("struct data = {data:?}");
        Ok(data)
    }

    /// Return the inner configuration file
    ///
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Consume and return the inner configuration
    ///
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T> ConfigFile<T>
where
    T: Debug + Default + DeserializeOwned + Versioned,
{
    /// Same as `load()` except that a missing default file is not an error, we use the
    /// built-in defaults instead.  An explicitly given file must exist.
    ///
    #[tracing::instrument]
    pub fn load_or_default(tag: &str, fname: &str, file: Option<&Path>) -> Result<ConfigFile<T>> {
        if file.is_some() {
            return Self::load(tag, fname, file);
        }

        let basedir = Self::basedir(tag)?;
        if basedir.join(fname).exists() {
            return Self::load(tag, fname, None);
        }

        warn!("No configuration file in {basedir:?}, using defaults");
        Ok(ConfigFile {
            tag: String::from(tag),
            basedir,
            fname: String::from(fname),
            inner: T::default(),
        })
    }
}
