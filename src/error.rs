use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LcgError {
    /// A generator parameter is outside the domain the recurrence is defined on.
    #[error("invalid parameter {name}={value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: i64,
        reason: &'static str,
    },

    /// Histogram edges that cannot describe a set of bins.
    #[error("invalid histogram bins: {message}")]
    InvalidBins { message: &'static str },
}
