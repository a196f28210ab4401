//! Main validation orchestration for CPF/CNPJ numbers.
//!
//! This module provides the primary `validate` function that combines
//! parsing, length routing, and check-digit validation into a single
//! operation.
//!
//! # Performance
//!
//! - No string allocations during validation
//! - Single-pass digit extraction into a fixed array
//! - O(n) complexity where n is the input length

use crate::checksum;
use crate::document::{DocumentKind, ValidatedDocument, MAX_DOCUMENT_DIGITS};
use crate::error::ValidationError;

/// Validates a CPF or CNPJ number string.
///
/// This is the primary validation function. It performs:
/// 1. Strict input parsing (digits plus `.`, `-`, `/`, and space)
/// 2. Length routing: 11 digits is a CPF, 14 a CNPJ, anything else rejects
/// 3. Repeated-digit rejection
/// 4. Check-digit validation for the routed kind
///
/// Exactly one kind is ever produced; a number can never validate as both.
///
/// # Example
///
/// ```
/// use doc_validator::{validate, DocumentKind};
///
/// let doc = validate("529.982.247-25").unwrap();
/// assert_eq!(doc.kind(), DocumentKind::Cpf);
/// assert_eq!(doc.last_four(), "4725");
///
/// let doc = validate("11.222.333/0001-81").unwrap();
/// assert_eq!(doc.kind(), DocumentKind::Cnpj);
///
/// // Invalid check digit
/// assert!(validate("529.982.247-26").is_err());
/// ```
pub fn validate(input: &str) -> Result<ValidatedDocument, ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::Empty);
    }

    let mut digits = [0u8; MAX_DOCUMENT_DIGITS];
    let mut count = 0usize;

    for (pos, c) in input.chars().enumerate() {
        match c {
            '0'..='9' => {
                if count >= MAX_DOCUMENT_DIGITS {
                    return Err(ValidationError::InvalidLength { length: count + 1 });
                }
                digits[count] = (c as u8) - b'0';
                count += 1;
            }
            '.' | '-' | '/' | ' ' => {
                // Allowed separators, skip them
            }
            _ => {
                return Err(ValidationError::InvalidCharacter {
                    position: pos,
                    character: c,
                });
            }
        }
    }

    if count == 0 {
        return Err(ValidationError::NoDigits);
    }

    check_digits(&digits, count)
}

/// Validates a pre-parsed slice of digits (values 0-9).
///
/// Use this when digits have already been extracted, e.g. in batch
/// processing or after [`crate::input::extract_digits`].
///
/// # Example
///
/// ```
/// use doc_validator::{validate_digits, DocumentKind};
///
/// let digits = [5, 2, 9, 9, 8, 2, 2, 4, 7, 2, 5];
/// let doc = validate_digits(&digits).unwrap();
/// assert_eq!(doc.kind(), DocumentKind::Cpf);
/// ```
pub fn validate_digits(digits: &[u8]) -> Result<ValidatedDocument, ValidationError> {
    let count = digits.len();

    if count == 0 {
        return Err(ValidationError::Empty);
    }

    if count > MAX_DOCUMENT_DIGITS {
        return Err(ValidationError::InvalidLength { length: count });
    }

    let mut fixed = [0u8; MAX_DOCUMENT_DIGITS];
    fixed[..count].copy_from_slice(digits);

    check_digits(&fixed, count)
}

/// Runs length routing and check-digit validation over extracted digits.
fn check_digits(
    digits: &[u8; MAX_DOCUMENT_DIGITS],
    count: usize,
) -> Result<ValidatedDocument, ValidationError> {
    let kind = DocumentKind::from_digit_count(count)
        .ok_or(ValidationError::InvalidLength { length: count })?;

    let slice = &digits[..count];

    if checksum::all_identical(slice) {
        return Err(ValidationError::RepeatedDigits { kind });
    }

    let ok = match kind {
        DocumentKind::Cpf => checksum::validate_cpf(slice),
        DocumentKind::Cnpj => checksum::validate_cnpj(slice),
    };

    if !ok {
        return Err(ValidationError::InvalidCheckDigit { kind });
    }

    Ok(ValidatedDocument::new(kind, *digits, count as u8))
}

/// Quickly checks if a document number is valid without detailed errors.
///
/// # Example
///
/// ```
/// use doc_validator::is_valid;
///
/// assert!(is_valid("529.982.247-25"));
/// assert!(!is_valid("529.982.247-26"));
/// ```
#[inline]
pub fn is_valid(input: &str) -> bool {
    validate(input).is_ok()
}

/// Checks that the input is a valid CPF specifically.
///
/// An input that validates as a CNPJ returns false here.
///
/// # Example
///
/// ```
/// use doc_validator::is_valid_cpf;
///
/// assert!(is_valid_cpf("52998224725"));
/// assert!(!is_valid_cpf("11111111111"));
/// assert!(!is_valid_cpf("11222333000181")); // valid, but a CNPJ
/// ```
#[inline]
pub fn is_valid_cpf(input: &str) -> bool {
    matches!(validate(input), Ok(doc) if doc.kind() == DocumentKind::Cpf)
}

/// Checks that the input is a valid CNPJ specifically.
///
/// # Example
///
/// ```
/// use doc_validator::is_valid_cnpj;
///
/// assert!(is_valid_cnpj("11222333000181"));
/// assert!(!is_valid_cnpj("11222333000180"));
/// ```
#[inline]
pub fn is_valid_cnpj(input: &str) -> bool {
    matches!(validate(input), Ok(doc) if doc.kind() == DocumentKind::Cnpj)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CPF_VALID: &str = "52998224725";
    const CPF_VALID_FORMATTED: &str = "529.982.247-25";
    const CNPJ_VALID: &str = "11222333000181";
    const CNPJ_VALID_FORMATTED: &str = "11.222.333/0001-81";

    #[test]
    fn test_validate_cpf() {
        let doc = validate(CPF_VALID).unwrap();
        assert_eq!(doc.kind(), DocumentKind::Cpf);
        assert_eq!(doc.length(), 11);
        assert_eq!(doc.last_four(), "4725");
    }

    #[test]
    fn test_validate_cnpj() {
        let doc = validate(CNPJ_VALID).unwrap();
        assert_eq!(doc.kind(), DocumentKind::Cnpj);
        assert_eq!(doc.length(), 14);
        assert_eq!(doc.last_four(), "0181");
    }

    #[test]
    fn test_validate_formatted() {
        let doc = validate(CPF_VALID_FORMATTED).unwrap();
        assert_eq!(doc.kind(), DocumentKind::Cpf);

        let doc = validate(CNPJ_VALID_FORMATTED).unwrap();
        assert_eq!(doc.kind(), DocumentKind::Cnpj);

        // Mixed and spaced separators
        let doc = validate("529 982 247 25").unwrap();
        assert_eq!(doc.kind(), DocumentKind::Cpf);
    }

    #[test]
    fn test_invalid_check_digit() {
        let err = validate("52998224726").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidCheckDigit {
                kind: DocumentKind::Cpf
            }
        );

        let err = validate("11222333000180").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidCheckDigit {
                kind: DocumentKind::Cnpj
            }
        );
    }

    #[test]
    fn test_repeated_digits() {
        let err = validate("11111111111").unwrap_err();
        assert_eq!(
            err,
            ValidationError::RepeatedDigits {
                kind: DocumentKind::Cpf
            }
        );

        let err = validate("00000000000000").unwrap_err();
        assert_eq!(
            err,
            ValidationError::RepeatedDigits {
                kind: DocumentKind::Cnpj
            }
        );
    }

    #[test]
    fn test_invalid_length() {
        // 10 digits: rejected regardless of checksum
        let err = validate("5299822472").unwrap_err();
        assert_eq!(err, ValidationError::InvalidLength { length: 10 });

        // 12 digits: also neither CPF nor CNPJ
        let err = validate("529982247251").unwrap_err();
        assert_eq!(err, ValidationError::InvalidLength { length: 12 });

        // 15 digits: over the maximum
        let err = validate("112223330001815").unwrap_err();
        assert_eq!(err, ValidationError::InvalidLength { length: 15 });
    }

    #[test]
    fn test_invalid_character() {
        let err = validate("529.982.247-2X").unwrap_err();
        match err {
            ValidationError::InvalidCharacter { character, .. } => {
                assert_eq!(character, 'X');
            }
            _ => panic!("Expected InvalidCharacter"),
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(validate("").unwrap_err(), ValidationError::Empty);
    }

    #[test]
    fn test_only_separators() {
        assert_eq!(validate("..--//").unwrap_err(), ValidationError::NoDigits);
        assert_eq!(validate("    ").unwrap_err(), ValidationError::NoDigits);
    }

    #[test]
    fn test_validate_digits() {
        let digits = [5, 2, 9, 9, 8, 2, 2, 4, 7, 2, 5];
        let doc = validate_digits(&digits).unwrap();
        assert_eq!(doc.kind(), DocumentKind::Cpf);

        let digits = [1, 1, 2, 2, 2, 3, 3, 3, 0, 0, 0, 1, 8, 1];
        let doc = validate_digits(&digits).unwrap();
        assert_eq!(doc.kind(), DocumentKind::Cnpj);
    }

    #[test]
    fn test_validate_digits_bad_lengths() {
        assert_eq!(
            validate_digits(&[]).unwrap_err(),
            ValidationError::Empty
        );
        assert_eq!(
            validate_digits(&[1; 15]).unwrap_err(),
            ValidationError::InvalidLength { length: 15 }
        );
        assert_eq!(
            validate_digits(&[1, 2, 3]).unwrap_err(),
            ValidationError::InvalidLength { length: 3 }
        );
    }

    #[test]
    fn test_is_valid() {
        assert!(is_valid(CPF_VALID));
        assert!(is_valid(CNPJ_VALID_FORMATTED));
        assert!(!is_valid("52998224726"));
        assert!(!is_valid(""));
    }

    #[test]
    fn test_kind_specific_checks() {
        assert!(is_valid_cpf(CPF_VALID));
        assert!(!is_valid_cpf(CNPJ_VALID));
        assert!(is_valid_cnpj(CNPJ_VALID));
        assert!(!is_valid_cnpj(CPF_VALID));
    }

    #[test]
    fn test_known_registry_numbers() {
        // Well-known valid test documents
        assert!(is_valid_cpf("12345678909"));
        assert!(is_valid_cnpj("00000000000191"));
    }
}
