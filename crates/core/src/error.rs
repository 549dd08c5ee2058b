//! Planning error model.

use thiserror::Error;

/// Result type used across the planning layer.
pub type PlanningResult<T> = Result<T, PlanningError>;

/// Planning-level error.
///
/// Every failure a tool call can surface maps onto one of these variants; the
/// tool boundary reports [`PlanningError::kind`] plus the message, never a panic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanningError {
    /// Caller input was malformed or out of range (e.g. empty lead-time list).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The historical-data provider was unreachable, answered with a non-2xx
    /// status, or returned content that could not be decoded.
    #[error("failed to fetch historical data: {0}")]
    DataFetch(String),

    /// The provider answered but no usable demand records remained.
    #[error("no historical data: {0}")]
    NoHistoricalData(String),

    /// Unexpected failure inside a component.
    #[error("internal error: {0}")]
    Internal(String),
}

impl PlanningError {
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    pub fn data_fetch(msg: impl Into<String>) -> Self {
        Self::DataFetch(msg.into())
    }

    pub fn no_historical_data(msg: impl Into<String>) -> Self {
        Self::NoHistoricalData(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Stable, wire-facing error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidParameter(_) => "invalid_parameter",
            Self::DataFetch(_) => "data_fetch_error",
            Self::NoHistoricalData(_) => "no_historical_data",
            Self::Internal(_) => "internal_error",
        }
    }

    /// The human-readable detail without the variant prefix.
    pub fn detail(&self) -> &str {
        match self {
            Self::InvalidParameter(m)
            | Self::DataFetch(m)
            | Self::NoHistoricalData(m)
            | Self::Internal(m) => m,
        }
    }
}
