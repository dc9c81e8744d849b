//! Error types for quantities and configuration loading.

use std::path::PathBuf;
use unit_algebra_core::{ConversionError, DescriptorError};

/// Result type for quantity operations
pub type QuantityResult<T> = Result<T, QuantityError>;

/// Error type for quantity operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QuantityError {
    /// Operands could not be combined, typically because their units are not compatible.
    #[error("Binary operation error: cannot {operation} {left} and {right}; {reason}")]
    BinaryOperation {
        operation: &'static str,
        left: String,
        right: String,
        reason: String,
    },

    #[error("Incompatible units: cannot express {quantity} in {unit}; expected an instance of {expected}")]
    IncompatibleUnits {
        quantity: String,
        unit: String,
        expected: String,
    },

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Descriptor(#[from] DescriptorError),
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration error: failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: failed to parse settings")]
    Parse(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_conversion_errors_are_transparent() {
        let inner = ConversionError::UndefinedConverter("Mass".to_string());
        let err = QuantityError::from(inner.clone());
        assert_eq!(err.to_string(), inner.to_string());
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err = ConfigError::Io {
            path: PathBuf::from("settings.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("settings.toml"));
        assert!(err.source().is_some());
    }
}
