//! Error types for row marshaling and character conversion.

use std::panic::Location;
use thiserror::Error;

/// Result type alias for datastream operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Causes carried by [`Error::Internal`].
///
/// Both indicate a mismatch between what the host sent and what this client
/// understands, so the field (and the row read that hit it) is unreliable.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InternalError {
    /// An unrecognized native type id or type name reached the factory.
    #[error("Illegal argument: {message}")]
    IllegalArgument { message: String },

    /// No conversion table exists for the CCSID.
    #[error("Unsupported encoding: CCSID {ccsid}")]
    UnsupportedEncoding { ccsid: u32 },
}

/// Error type for datastream operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A value of an unsupported kind was offered to a field, or a getter
    /// was invoked against a type that cannot represent it.
    #[error("Data type mismatch: {message}")]
    DataTypeMismatch { message: String },

    /// A JDBC type code has no server-side representation.
    #[error("Data type not valid: JDBC type {jdbc_type}")]
    InvalidDataType { jdbc_type: i32 },

    /// Protocol or table mismatch between host and client.
    #[error("Internal error: {0}")]
    Internal(#[from] InternalError),

    /// Column not found.
    #[error("Column not found: {name}")]
    ColumnNotFound { name: String },

    /// Field index out of range (indexes are 1-based).
    #[error("Descriptor index not valid: {index} (fields: {count})")]
    DescriptorIndexInvalid { index: usize, count: usize },

    /// A field was read before any row was positioned.
    #[error("No current row")]
    NoCurrentRow,

    /// Row index outside the current row buffer.
    #[error("Row index {index} not valid (rows: {count})")]
    RowIndexInvalid { index: usize, count: usize },

    /// Numeric value does not fit the field.
    #[error("Numeric value out of range: {message}")]
    OutOfRange { message: String },

    /// Malformed field bytes.
    #[error("Protocol error: {message}")]
    Protocol { message: String },

    /// Buffer too small.
    #[error("Buffer too small: need {needed} bytes, have {available} filed at {location}")]
    BufferTooSmall {
        needed: usize,
        available: usize,
        location: &'static Location<'static>,
    },

    /// Bad configuration property.
    #[error("Invalid property {name}={value}")]
    InvalidProperty { name: String, value: String },
}

impl Error {
    /// Create a protocol error.
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    /// Create a data type mismatch error.
    pub fn mismatch(message: impl Into<String>) -> Self {
        Self::DataTypeMismatch {
            message: message.into(),
        }
    }

    /// Create an out of range error.
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::OutOfRange {
            message: message.into(),
        }
    }

    /// Create an internal error wrapping an illegal argument.
    pub fn illegal_argument(message: impl Into<String>) -> Self {
        Self::Internal(InternalError::IllegalArgument {
            message: message.into(),
        })
    }

    /// Create an internal error for a CCSID without a table.
    pub fn unsupported_encoding(ccsid: u32) -> Self {
        Self::Internal(InternalError::UnsupportedEncoding { ccsid })
    }

    /// Whether this error signals a host/client mismatch.
    pub fn is_internal(&self) -> bool {
        matches!(self, Error::Internal(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_wrapping() {
        let err = Error::unsupported_encoding(290);
        assert!(err.is_internal());
        assert_eq!(
            err.to_string(),
            "Internal error: Unsupported encoding: CCSID 290"
        );

        let err = Error::illegal_argument("native type 999");
        assert!(matches!(
            err,
            Error::Internal(InternalError::IllegalArgument { .. })
        ));
    }

    #[test]
    fn test_recoverable_errors_are_not_internal() {
        assert!(!Error::mismatch("LOB to int").is_internal());
        assert!(!Error::InvalidDataType { jdbc_type: 1111 }.is_internal());
        assert!(!Error::ColumnNotFound {
            name: "X".to_string()
        }
        .is_internal());
    }
}
