//! Privacy masking and comparison utilities.
//!
//! CPF and CNPJ numbers identify a person or company directly, so logs and
//! customer-facing screens should never carry the full number. This module
//! masks everything but the last four digits while keeping the familiar
//! punctuation, and provides constant-time comparison for stored ids.

use crate::format;
use crate::ValidatedDocument;

/// Masks a validated document, showing only the last four digits.
///
/// The standard punctuation is kept so the masked value still reads as a
/// CPF or CNPJ: `***.***.*47-25`, `**.***.***/**01-81`.
///
/// # Example
///
/// ```
/// use doc_validator::{validate, mask};
///
/// let doc = validate("529.982.247-25").unwrap();
/// assert_eq!(doc.masked(), "***.***.*47-25");
/// ```
#[inline]
pub fn mask_document(doc: &ValidatedDocument) -> String {
    mask_digits(doc.digits())
}

/// Masks a raw document number string.
///
/// Useful before validation, e.g. when logging a rejected entry. Strips
/// non-digit characters first; fewer than five digits mask entirely.
///
/// # Example
///
/// ```
/// use doc_validator::mask::mask_string;
///
/// assert_eq!(mask_string("529.982.247-25"), "***.***.*47-25");
/// assert_eq!(mask_string("123"), "***");
/// ```
#[inline]
pub fn mask_string(input: &str) -> String {
    let digits: Vec<u8> = input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .map(|c| (c as u8) - b'0')
        .collect();

    mask_digits(&digits)
}

/// Masks all but the last four digits, then applies the display layout.
fn mask_digits(digits: &[u8]) -> String {
    let len = digits.len();

    if len <= 4 {
        return "*".repeat(len);
    }

    let mut flat = String::with_capacity(len);
    for _ in 0..len - 4 {
        flat.push('*');
    }
    for &d in &digits[len - 4..] {
        flat.push((b'0' + d) as char);
    }

    // Re-use the progressive layout, routing by length like the display
    // path does; '*' takes the place of a hidden digit.
    let breaks: &[(usize, char)] = if len <= 11 {
        &[(3, '.'), (6, '.'), (9, '-')]
    } else {
        &[(2, '.'), (5, '.'), (8, '/'), (12, '-')]
    };

    let mut result = String::with_capacity(len + breaks.len());
    for (i, c) in flat.chars().enumerate() {
        if let Some(&(_, sep)) = breaks.iter().find(|&&(pos, _)| pos == i) {
            if i > 0 {
                result.push(sep);
            }
        }
        result.push(c);
    }

    result
}

/// Extracts just the last four digits from a document number string.
///
/// Returns an empty string if there are fewer than four digits.
#[inline]
pub fn last_four_from_string(input: &str) -> String {
    let digits = format::strip_formatting(input);
    if digits.len() >= 4 {
        digits[digits.len() - 4..].to_string()
    } else {
        String::new()
    }
}

/// Constant-time comparison of two byte slices.
///
/// Takes the same amount of time regardless of where (or if) the slices
/// differ. Use when comparing a submitted document number against a
/// stored one.
///
/// # Example
///
/// ```
/// use doc_validator::mask::constant_time_eq;
///
/// assert!(constant_time_eq(b"52998224725", b"52998224725"));
/// assert!(!constant_time_eq(b"52998224725", b"52998224726"));
/// ```
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut diff: u8 = 0;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }

    diff == 0
}

/// Constant-time comparison of two strings.
#[inline]
pub fn constant_time_eq_str(a: &str, b: &str) -> bool {
    constant_time_eq(a.as_bytes(), b.as_bytes())
}
