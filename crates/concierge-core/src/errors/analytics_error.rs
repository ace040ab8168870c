/// Analytics read-model errors.
#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    #[error("malformed decision payload: {reason}")]
    MalformedPayload { reason: String },

    #[error("score mapping is not an object")]
    NotAnObject,
}
