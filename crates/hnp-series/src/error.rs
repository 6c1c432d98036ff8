use hnp_model::IndicatorCode;
use thiserror::Error;

/// Errors from resolving against the series index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeriesError {
    /// The requested series was never in the index. Indicates the caller
    /// and the index are out of sync; a hard failure, not an empty state.
    #[error("unknown indicator: {0}")]
    UnknownIndicator(IndicatorCode),

    /// The series exists but has no observation in any year. Callers
    /// should render an empty state rather than retry.
    #[error("no data available for indicator: {0}")]
    NoDataAvailable(IndicatorCode),
}

pub type Result<T> = std::result::Result<T, SeriesError>;
