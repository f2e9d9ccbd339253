//! Error types for counter configuration and host input.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CounterError {
    /// Visibility threshold outside `[0, 1]`.
    #[error("invalid visibility threshold: {0} (expected 0.0..=1.0)")]
    InvalidThreshold(f64),

    /// Default duration must be finite and non-negative.
    #[error("invalid default duration: {0} ms")]
    InvalidDuration(f64),

    /// Root margin percent/pixel value is not finite.
    #[error("invalid root margin: {0}")]
    InvalidRootMargin(String),

    /// Host lookup of an element's source failed; the element stays observed.
    #[error("source lookup for {key} failed: {reason}")]
    Resolver { key: String, reason: String },

    /// Host supplied a malformed payload (adapter boundary).
    #[error("malformed {what}: {reason}")]
    Malformed { what: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, CounterError>;
