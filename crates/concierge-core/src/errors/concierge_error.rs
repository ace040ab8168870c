use super::{AnalyticsError, ConfigError};

/// Top-level error aggregating subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum ConciergeError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("analytics error: {0}")]
    Analytics(#[from] AnalyticsError),
}

pub type ConciergeResult<T> = Result<T, ConciergeError>;
