//! Error types for document number validation.
//!
//! Errors here are validation verdicts, not exceptional conditions: every
//! failure is a deterministic function of the input and carries enough
//! detail to tell the user what to fix.

use crate::DocumentKind;
use std::fmt;

/// Errors that can occur during CPF/CNPJ validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The input string was empty.
    Empty,

    /// The input contains no digits at all (only separators/whitespace).
    NoDigits,

    /// An invalid character was found in the input.
    ///
    /// Only digits (0-9), dots, hyphens, slashes, and spaces are allowed
    /// by the strict parser.
    InvalidCharacter {
        /// The position in the input string (0-indexed).
        position: usize,
        /// The invalid character that was found.
        character: char,
    },

    /// The digit count is neither 11 (CPF) nor 14 (CNPJ).
    InvalidLength {
        /// The actual number of digits provided.
        length: usize,
    },

    /// All digits are identical (e.g. `111.111.111-11`).
    ///
    /// These sequences satisfy the check-digit equations but are
    /// known-invalid registry numbers.
    RepeatedDigits {
        /// The kind the length classified as.
        kind: DocumentKind,
    },

    /// One of the two check digits does not match.
    ///
    /// This usually indicates a typo in the document number.
    InvalidCheckDigit {
        /// The kind the length classified as.
        kind: DocumentKind,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "document number is empty"),

            Self::NoDigits => write!(f, "document number contains no digits"),

            Self::InvalidCharacter {
                position,
                character,
            } => {
                write!(
                    f,
                    "invalid character '{}' at position {} (only digits, dots, hyphens, slashes, and spaces allowed)",
                    character.escape_default(),
                    position
                )
            }

            Self::InvalidLength { length } => {
                write!(
                    f,
                    "document number must be 11 or 14 digits, got {}",
                    length
                )
            }

            Self::RepeatedDigits { kind } => {
                write!(f, "invalid {}: all digits are identical", kind)
            }

            Self::InvalidCheckDigit { kind } => {
                write!(f, "invalid {}: check digits do not match", kind)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ValidationError::Empty.to_string(),
            "document number is empty"
        );

        assert_eq!(
            ValidationError::InvalidLength { length: 10 }.to_string(),
            "document number must be 11 or 14 digits, got 10"
        );

        assert_eq!(
            ValidationError::InvalidCharacter {
                position: 5,
                character: 'x'
            }
            .to_string(),
            "invalid character 'x' at position 5 (only digits, dots, hyphens, slashes, and spaces allowed)"
        );

        assert_eq!(
            ValidationError::InvalidCheckDigit {
                kind: DocumentKind::Cpf
            }
            .to_string(),
            "invalid CPF: check digits do not match"
        );

        assert_eq!(
            ValidationError::RepeatedDigits {
                kind: DocumentKind::Cnpj
            }
            .to_string(),
            "invalid CNPJ: all digits are identical"
        );
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ValidationError>();
    }
}
