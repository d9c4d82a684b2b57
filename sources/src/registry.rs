//! Owner registry.
//!
//! This is a static mapping between the ICAO address (hex code) of an aircraft and the name
//! of its registered owner.  The default layout is the one of the FAA aircraft registry
//! (`MASTER.txt`, a CSV file with a `MODE S CODE HEX` and a `NAME` column) but the column
//! names are configurable.
//!
//! The registry is loaded once at startup and is read-only afterwards.
//!

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, trace};

use skywatch_formats::{canonical_hex, UNKNOWN};

use crate::RegistryError;

/// Default column holding the hex code
const DEF_HEX: &str = "MODE S CODE HEX";
/// Default column holding the owner name
const DEF_NAME: &str = "NAME";

/// Names of the two columns we need.
///
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct OwnerColumns {
    /// Column holding the hex code
    pub hex: String,
    /// Column holding the owner name
    pub name: String,
}

impl Default for OwnerColumns {
    fn default() -> Self {
        OwnerColumns {
            hex: String::from(DEF_HEX),
            name: String::from(DEF_NAME),
        }
    }
}

/// Hex code to owner mapping.
///
#[derive(Clone, Debug, Default)]
pub struct OwnerRegistry {
    owners: HashMap<String, String>,
}

impl OwnerRegistry {
    /// Load the registry from a CSV file.
    ///
    #[tracing::instrument]
    pub fn load(path: &Path, columns: &OwnerColumns) -> Result<Self, RegistryError> {
        trace!("open {path:?}");

        let file = File::open(path).map_err(|source| RegistryError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let reg = Self::from_reader(file, columns)?;
        info!("Loaded {} owners from {path:?}", reg.len());
        Ok(reg)
    }

    /// Same as `load()` but any error gives an empty registry: every lookup will then
    /// return `Unknown`.
    ///
    #[tracing::instrument]
    pub fn load_or_empty(path: &Path, columns: &OwnerColumns) -> Self {
        Self::load(path, columns).unwrap_or_else(|e| {
            error!("Error loading owner data: {e}");
            Self::default()
        })
    }

    /// Read CSV data with a header line.
    ///
    /// Identifiers are stripped and uppercased, the last occurrence of a given identifier wins.
    /// Rows with an empty identifier or owner are ignored.
    ///
    pub fn from_reader<R: Read>(rdr: R, columns: &OwnerColumns) -> Result<Self, RegistryError> {
        let mut rdr = ReaderBuilder::new()
            .flexible(true)
            .trim(Trim::All)
            .from_reader(rdr);

        let headers = rdr.headers()?.clone();
        let position = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| RegistryError::MissingColumn(name.to_string()))
        };
        let hex_idx = position(&columns.hex)?;
        let name_idx = position(&columns.name)?;
        debug!("hex={hex_idx} name={name_idx}");

        let mut owners = HashMap::new();
        for rec in rdr.records() {
            let rec = rec?;
            let (Some(hex), Some(name)) = (rec.get(hex_idx), rec.get(name_idx)) else {
                continue;
            };
            if hex.is_empty() || name.is_empty() {
                continue;
            }
            owners.insert(canonical_hex(hex), name.to_string());
        }
        Ok(OwnerRegistry { owners })
    }

    /// Owner of `hex`, `Unknown` if not registered.
    ///
    #[inline]
    pub fn owner(&self, hex: &str) -> &str {
        self.owners
            .get(&canonical_hex(hex))
            .map(String::as_str)
            .unwrap_or(UNKNOWN)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}

impl FromIterator<(String, String)> for OwnerRegistry {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        let owners = iter
            .into_iter()
            .map(|(hex, name)| (canonical_hex(&hex), name))
            .collect();
        OwnerRegistry { owners }
    }
}
