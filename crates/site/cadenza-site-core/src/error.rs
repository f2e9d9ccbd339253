use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SiteError {
    #[error("invalid {field}: {value} (expected a finite, non-negative number)")]
    InvalidTiming { field: &'static str, value: f64 },

    #[error("invalid {field}: {value} (expected a finite number)")]
    NotFinite { field: &'static str, value: f64 },

    #[error("invalid contact email: {0:?}")]
    InvalidEmail(String),

    #[error(transparent)]
    Trigger(#[from] cadenza_counter_core::CounterError),

    /// Host supplied a malformed payload (adapter boundary).
    #[error("malformed {what}: {reason}")]
    Malformed { what: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, SiteError>;
