//! Error types for filmdex-core.

use thiserror::Error;

/// Errors raised by catalog loading and query-boundary validation.
#[derive(Error, Debug)]
pub enum Error {
    /// Rating value outside the 0-100 viewer scale.
    #[error("Rating value out of range: {0} (expected 0-100)")]
    RatingOutOfRange(u8),

    /// Non-finite rating threshold passed to a query.
    #[error("Threshold '{name}' must be finite, got {value}")]
    InvalidThreshold {
        /// Parameter name as it appears in the query signature.
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// Inverted rating range passed to a query.
    #[error("Invalid rating range: min {min} exceeds max {max}")]
    InvalidRange {
        /// Lower bound as given by the caller.
        min: f64,
        /// Upper bound as given by the caller.
        max: f64,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error while reading a catalog file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for catalog and query operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::RatingOutOfRange(117);
        assert_eq!(
            err.to_string(),
            "Rating value out of range: 117 (expected 0-100)"
        );
    }

    #[test]
    fn test_threshold_display() {
        let err = Error::InvalidThreshold {
            name: "min_rating",
            value: f64::NAN,
        };
        assert_eq!(err.to_string(), "Threshold 'min_rating' must be finite, got NaN");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
