//! Error module
//!

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Status {
    #[error("Bad file version {0}")]
    BadFileVersion(usize),
    #[error("Invalid receiver location {0}, {1}")]
    InvalidLocation(f64, f64),
    #[error("Bad configuration parameter: {0}")]
    BadParameter(String),
}
