use thiserror::Error;

/// Errors raised when constructing model types from raw input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("invalid indicator code: {0:?}")]
    InvalidIndicatorCode(String),
    #[error("invalid country code: {0:?}")]
    InvalidCountryCode(String),
    #[error("invalid year range: start {start} is after end {end}")]
    InvalidYearRange { start: i32, end: i32 },
}
