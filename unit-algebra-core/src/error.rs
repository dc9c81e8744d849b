//! Error types for descriptor algebra and unit conversion.

/// Result type for descriptor operations
pub type DescriptorResult<T> = Result<T, DescriptorError>;

/// Error type for descriptor operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DescriptorError {
    /// Generic and concrete descriptors were combined.
    #[error("Binary operation error: cannot {operation} {left} with {right}")]
    BinaryOperation {
        operation: &'static str,
        left: String,
        right: String,
    },

    #[error("Exponent error: invalid exponent {0}; expected a finite number")]
    InvalidExponent(f64),

    /// A descriptor could not be coerced into the requested shape.
    #[error("Descriptor type error: cannot create {expected} from {descriptor}")]
    WrongDescriptorType {
        expected: &'static str,
        descriptor: String,
    },
}

/// Result type for converter and registry operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Error type for converter and registry operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    #[error("Undefined converter: a converter has not been defined for {0}")]
    UndefinedConverter(String),

    #[error("Registration conflict: {0} has already got a converter")]
    RegistrationConflict(String),

    /// Operands are not instances of the converter's generic, or a unit is missing from a
    /// conversion table.
    #[error("Unit conversion error: cannot convert from {from} to {to}; {reason}")]
    UnitConversion {
        from: String,
        to: String,
        reason: String,
    },

    #[error("Converter dependency error: converter for {converter} depends on a converter for {dependency}")]
    MissingDependency {
        converter: String,
        dependency: String,
    },

    #[error("Unsupported converter: converter for {converter} is not supported; {reason}")]
    Unsupported { converter: String, reason: String },

    /// A relative conversion function panicked or produced a non-finite value.
    #[error("Conversion function error in converter for {converter}: {reason}")]
    ConversionFunction { converter: String, reason: String },
}

impl ConversionError {
    pub(crate) fn unit_conversion(
        from: impl ToString,
        to: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        ConversionError::UnitConversion {
            from: from.to_string(),
            to: to.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_descriptor() {
        let err = ConversionError::UndefinedConverter("(Length^2)".to_string());
        assert!(err.to_string().contains("(Length^2)"));

        let err = ConversionError::unit_conversion("m", "s", "expected an instance of Length");
        assert_eq!(
            err.to_string(),
            "Unit conversion error: cannot convert from m to s; expected an instance of Length"
        );
    }

    #[test]
    fn test_descriptor_errors_are_comparable() {
        assert_eq!(
            DescriptorError::InvalidExponent(f64::INFINITY),
            DescriptorError::InvalidExponent(f64::INFINITY)
        );
    }
}
