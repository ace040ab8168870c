//! Error handling for the concierge engine.
//! One error enum per subsystem, `thiserror` only.

pub mod analytics_error;
pub mod concierge_error;
pub mod config_error;

pub use analytics_error::AnalyticsError;
pub use concierge_error::{ConciergeError, ConciergeResult};
pub use config_error::ConfigError;
