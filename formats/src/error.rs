use thiserror::Error;

/// Custom error type for the formats, allow us to differentiate between errors.
///
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("No position")]
    NoPosition,
    #[error("Invalid position {lat}, {lon}")]
    InvalidPosition { lat: f64, lon: f64 },
}
