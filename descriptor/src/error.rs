//! Descriptor validation and parse errors.

use std::fmt;

use crate::descriptor::CodeSet;

/// Result type for descriptor operations.
pub type DescriptorResult<T> = Result<T, DescriptorError>;

/// Errors that can occur when parsing or validating a descriptor.
///
/// Loading fails atomically: no error leaves a partially-built descriptor
/// behind, and a previously loaded descriptor is never touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    /// The descriptor string held fewer than the required 9 integer tokens.
    MissingTokens { expected: usize, found: usize },

    /// A token could not be parsed as a decimal, octal, or hex integer.
    InvalidInteger { index: usize, token: String },

    /// A code set's sequence length is outside `1..=4`.
    InvalidByteCount { set: CodeSet, count: usize },
}

impl fmt::Display for DescriptorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTokens { expected, found } => {
                write!(
                    f,
                    "descriptor needs {expected} integer fields, found {found}"
                )
            }
            Self::InvalidInteger { index, token } => {
                write!(f, "descriptor field {index} is not an integer: {token:?}")
            }
            Self::InvalidByteCount { set, count } => {
                write!(
                    f,
                    "code set {} byte count {count} outside 1..=4",
                    set.index()
                )
            }
        }
    }
}

impl std::error::Error for DescriptorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_missing_tokens() {
        let err = DescriptorError::MissingTokens {
            expected: 9,
            found: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains('9'), "should mention expected count");
        assert!(msg.contains('4'), "should mention found count");
    }

    #[test]
    fn error_display_invalid_integer() {
        let err = DescriptorError::InvalidInteger {
            index: 3,
            token: "0xZZ".to_owned(),
        };
        let msg = err.to_string();
        assert!(msg.contains('3'), "should mention the field index");
        assert!(msg.contains("0xZZ"), "should quote the token");
    }

    #[test]
    fn error_display_invalid_byte_count() {
        let err = DescriptorError::InvalidByteCount {
            set: CodeSet::Set2,
            count: 7,
        };
        let msg = err.to_string();
        assert!(msg.contains('2'), "should mention the code set");
        assert!(msg.contains('7'), "should mention the count");
    }

    #[test]
    fn error_equality() {
        let err1 = DescriptorError::MissingTokens {
            expected: 9,
            found: 0,
        };
        let err2 = DescriptorError::MissingTokens {
            expected: 9,
            found: 0,
        };
        let err3 = DescriptorError::MissingTokens {
            expected: 9,
            found: 1,
        };
        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }

    #[test]
    fn error_is_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<DescriptorError>();
    }
}
