//! Error types shared between the field calculations and the demo driver.

use std::io;

use thiserror::Error;

use crate::math::Scalar;

/// Raised by the strict `try_*` field calculations.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FieldError {
    /// The distance from the source was zero, negative or NaN.
    #[error("distance must be positive, got {0} m")]
    NonPositiveDistance(Scalar),
    /// A source quantity (charge or current) was infinite or NaN.
    #[error("{name} must be finite, got {value}")]
    NonFiniteInput {
        /// Name of the offending quantity.
        name: &'static str,
        /// Value that was rejected.
        value: Scalar,
    },
}

/// Top-level error returned by [`crate::demo::run`].
#[derive(Debug, Error)]
pub enum DemoError {
    /// Writing a report line failed.
    #[error("failed to write demo output: {0}")]
    Io(#[from] io::Error),
    /// A strict-mode field calculation rejected its inputs.
    #[error(transparent)]
    Field(#[from] FieldError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_rejected_value() {
        assert_eq!(
            FieldError::NonPositiveDistance(0.0).to_string(),
            "distance must be positive, got 0 m"
        );
        let err = FieldError::NonFiniteInput { name: "charge", value: Scalar::INFINITY };
        assert_eq!(err.to_string(), "charge must be finite, got inf");
    }

    #[test]
    fn field_errors_convert_transparently() {
        let err: DemoError = FieldError::NonPositiveDistance(-1.0).into();
        assert!(matches!(err, DemoError::Field(FieldError::NonPositiveDistance(d)) if d == -1.0));
        assert_eq!(err.to_string(), "distance must be positive, got -1 m");
    }
}
