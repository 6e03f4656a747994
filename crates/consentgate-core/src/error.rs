//! Error types for Consent Gate

use thiserror::Error;

/// Main error type for Consent Gate operations
///
/// The gate state machine itself never fails at runtime; these cover
/// construction and the file-backed collaborators (disclosure, preferences).
#[derive(Error, Debug)]
pub enum GateError {
    /// Threshold was negative, NaN or infinite
    #[error("Invalid threshold: {0}")]
    InvalidThreshold(f64),

    /// Disclosure document is structurally unusable
    #[error("Invalid disclosure: {0}")]
    InvalidDisclosure(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using GateError
pub type GateResult<T> = Result<T, GateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GateError::InvalidThreshold(-1.0);
        assert_eq!(format!("{}", err), "Invalid threshold: -1");

        let err = GateError::InvalidDisclosure("empty title".to_string());
        assert_eq!(format!("{}", err), "Invalid disclosure: empty title");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: GateError = io_err.into();
        assert!(matches!(err, GateError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: GateError = json_err.into();
        assert!(matches!(err, GateError::Serialization(_)));
    }
}
