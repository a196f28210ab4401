//! Check-digit algorithms for Brazilian CPF and CNPJ numbers.
//!
//! Both document types end in two check digits computed from the preceding
//! digits via a weighted-sum modulo-11 scheme. The weights differ: CPF uses
//! a single descending run, CNPJ uses a fixed sawtooth vector.
//!
//! All functions here operate on raw digit slices (values 0-9) and are pure;
//! parsing and length routing live in [`crate::validate`].

use crate::document::{CNPJ_DIGITS, CPF_DIGITS};

/// Weight vector for the first CNPJ check digit (applied to digits 1-12).
const CNPJ_WEIGHTS_FIRST: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Weight vector for the second CNPJ check digit (applied to digits 1-13).
const CNPJ_WEIGHTS_SECOND: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Computes a CPF check digit for the given prefix.
///
/// The prefix is weighted with descending factors starting at
/// `prefix.len() + 1` down to 2, so a 9-digit prefix yields the first check
/// digit (weights 10..2) and a 10-digit prefix yields the second
/// (weights 11..2).
///
/// # Example
///
/// ```
/// use doc_validator::checksum::cpf_check_digit;
///
/// // First check digit of the reference CPF 529.982.247-25
/// let prefix = [5, 2, 9, 9, 8, 2, 2, 4, 7];
/// assert_eq!(cpf_check_digit(&prefix), 2);
/// ```
#[inline]
pub fn cpf_check_digit(prefix: &[u8]) -> u8 {
    let mut weight = (prefix.len() + 1) as u64;
    let mut sum: u64 = 0;

    for &d in prefix {
        sum += d as u64 * weight;
        weight -= 1;
    }

    let rev = 11 - (sum % 11);
    if rev >= 10 {
        0
    } else {
        rev as u8
    }
}

/// Computes a CNPJ check digit for the given prefix.
///
/// A 12-digit prefix yields the first check digit, a 13-digit prefix the
/// second. Other prefix lengths have no defined weight vector and return 0;
/// callers route lengths before getting here.
///
/// # Example
///
/// ```
/// use doc_validator::checksum::cnpj_check_digit;
///
/// // First check digit of the reference CNPJ 11.222.333/0001-81
/// let prefix = [1, 1, 2, 2, 2, 3, 3, 3, 0, 0, 0, 1];
/// assert_eq!(cnpj_check_digit(&prefix), 8);
/// ```
#[inline]
pub fn cnpj_check_digit(prefix: &[u8]) -> u8 {
    let weights: &[u32] = match prefix.len() {
        12 => &CNPJ_WEIGHTS_FIRST,
        13 => &CNPJ_WEIGHTS_SECOND,
        _ => return 0,
    };

    let sum: u32 = prefix
        .iter()
        .zip(weights)
        .map(|(&d, &w)| d as u32 * w)
        .sum();

    let rem = sum % 11;
    if rem < 2 {
        0
    } else {
        (11 - rem) as u8
    }
}

/// Returns true if every digit in the slice is the same.
///
/// Sequences like `111.111.111-11` satisfy the check-digit equations but are
/// rejected as known-invalid.
#[inline]
pub fn all_identical(digits: &[u8]) -> bool {
    match digits.first() {
        Some(&first) => digits.iter().all(|&d| d == first),
        None => false,
    }
}

/// Validates an 11-digit CPF.
///
/// Rejects wrong lengths, all-identical sequences, and check-digit
/// mismatches. No partial result: any mismatch is definitive.
///
/// # Example
///
/// ```
/// use doc_validator::checksum::validate_cpf;
///
/// let valid = [5, 2, 9, 9, 8, 2, 2, 4, 7, 2, 5];
/// assert!(validate_cpf(&valid));
///
/// let corrupted = [5, 2, 9, 9, 8, 2, 2, 4, 7, 2, 6];
/// assert!(!validate_cpf(&corrupted));
/// ```
#[inline]
pub fn validate_cpf(digits: &[u8]) -> bool {
    if digits.len() != CPF_DIGITS || all_identical(digits) {
        return false;
    }

    cpf_check_digit(&digits[..9]) == digits[9] && cpf_check_digit(&digits[..10]) == digits[10]
}

/// Validates a 14-digit CNPJ.
///
/// Same structure as [`validate_cpf`] with the CNPJ weight vectors.
///
/// # Example
///
/// ```
/// use doc_validator::checksum::validate_cnpj;
///
/// let valid = [1, 1, 2, 2, 2, 3, 3, 3, 0, 0, 0, 1, 8, 1];
/// assert!(validate_cnpj(&valid));
/// ```
#[inline]
pub fn validate_cnpj(digits: &[u8]) -> bool {
    if digits.len() != CNPJ_DIGITS || all_identical(digits) {
        return false;
    }

    cnpj_check_digit(&digits[..12]) == digits[12] && cnpj_check_digit(&digits[..13]) == digits[13]
}
