//! Crate-level error types.
//!
//! [`OrderViewError`] unifies every error source (configuration, terminal
//! I/O, HTTP, JSON) behind a single enum so callers can match on the variant
//! they care about while still using the `?` operator for easy propagation.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, OrderViewError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum OrderViewError {
    /// An environment variable held an unusable value.
    #[error("configuration error: {0}")]
    Config(String),

    /// Terminal or log file I/O failed.
    #[error("io error: {0}")]
    Io(String),

    /// The HTTP request could not be sent or its body could not be read.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The order server answered with a status that is neither 2xx nor 404.
    #[error("unexpected status {0} from order server")]
    UnexpectedStatus(u16),

    /// JSON deserialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
