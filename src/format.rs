//! Display masking for CPF/CNPJ numbers.
//!
//! This module inserts the standard punctuation as digits accumulate,
//! suitable for reformatting an input field on every keystroke.
//!
//! # Format Conventions
//!
//! - **CPF** (11 digits): `XXX.XXX.XXX-XX`
//! - **CNPJ** (14 digits): `XX.XXX.XXX/XXXX-XX`
//!
//! Separators appear only once enough digits exist to reach them; the
//! output never ends in punctuation.
//!
//! # Example
//!
//! ```
//! use doc_validator::format::format_document;
//!
//! assert_eq!(format_document("529"), "529");
//! assert_eq!(format_document("5299"), "529.9");
//! assert_eq!(format_document("52998224725"), "529.982.247-25");
//! assert_eq!(format_document("11222333000181"), "11.222.333/0001-81");
//! ```

use crate::document::{CPF_DIGITS, MAX_DOCUMENT_DIGITS};

/// Digit indices that get a separator inserted before them, CPF layout.
const CPF_BREAKS: [(usize, char); 3] = [(3, '.'), (6, '.'), (9, '-')];

/// Digit indices that get a separator inserted before them, CNPJ layout.
const CNPJ_BREAKS: [(usize, char); 4] = [(2, '.'), (5, '.'), (8, '/'), (12, '-')];

/// Applies a break table to a digit iterator.
fn apply_breaks<I: Iterator<Item = char>>(digits: I, breaks: &[(usize, char)]) -> String {
    let mut result = String::with_capacity(MAX_DOCUMENT_DIGITS + breaks.len());

    for (i, c) in digits.enumerate() {
        if let Some(&(_, sep)) = breaks.iter().find(|&&(pos, _)| pos == i) {
            if i > 0 {
                result.push(sep);
            }
        }
        result.push(c);
    }

    result
}

/// Formats up to 11 digits in the CPF pattern `XXX.XXX.XXX-XX`.
///
/// Non-digit characters are stripped first; input is truncated to 11
/// digits. Separators are progressive: `"5299"` becomes `"529.9"`, never
/// `"529."`.
///
/// # Example
///
/// ```
/// use doc_validator::format::format_cpf;
///
/// assert_eq!(format_cpf("52998224725"), "529.982.247-25");
/// assert_eq!(format_cpf("529982"), "529.982");
/// assert_eq!(format_cpf(""), "");
/// ```
pub fn format_cpf(input: &str) -> String {
    let digits = input.chars().filter(|c| c.is_ascii_digit()).take(CPF_DIGITS);
    apply_breaks(digits, &CPF_BREAKS)
}

/// Formats up to 14 digits in the CNPJ pattern `XX.XXX.XXX/XXXX-XX`.
///
/// # Example
///
/// ```
/// use doc_validator::format::format_cnpj;
///
/// assert_eq!(format_cnpj("11222333000181"), "11.222.333/0001-81");
/// assert_eq!(format_cnpj("112223330"), "11.222.333/0");
/// ```
pub fn format_cnpj(input: &str) -> String {
    let digits = input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(MAX_DOCUMENT_DIGITS);
    apply_breaks(digits, &CNPJ_BREAKS)
}

/// Formats arbitrary input, routing by digit count.
///
/// Strips non-digits, truncates to 14 digits, then treats the result as a
/// CPF-in-progress while 11 or fewer digits exist and as a
/// CNPJ-in-progress for 12-14. Callers re-run this on every edit, since
/// the user may cross the 11-digit boundary mid-entry.
///
/// # Example
///
/// ```
/// use doc_validator::format::format_document;
///
/// // 11 digits or fewer: CPF layout, never a slash
/// assert_eq!(format_document("52998224725"), "529.982.247-25");
/// // 12 digits: the same leading digits reflow into the CNPJ layout
/// assert_eq!(format_document("529982247257"), "52.998.224/7257");
/// ```
pub fn format_document(input: &str) -> String {
    let count = input.chars().filter(|c| c.is_ascii_digit()).count();

    if count <= CPF_DIGITS {
        format_cpf(input)
    } else {
        format_cnpj(input)
    }
}

/// Strips all formatting from a document number, leaving only digits.
///
/// Unlike the strict parser in [`crate::validate`], this accepts and
/// discards any non-digit character. No truncation is applied.
///
/// # Example
///
/// ```
/// use doc_validator::format::strip_formatting;
///
/// assert_eq!(strip_formatting("529.982.247-25"), "52998224725");
/// assert_eq!(strip_formatting("11.222.333/0001-81"), "11222333000181");
/// ```
pub fn strip_formatting(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Validates that a string contains only document number characters.
///
/// Valid characters are digits (0-9), dots, hyphens, slashes, and spaces.
///
/// # Example
///
/// ```
/// use doc_validator::format::is_valid_format;
///
/// assert!(is_valid_format("529.982.247-25"));
/// assert!(is_valid_format("11.222.333/0001-81"));
/// assert!(!is_valid_format("529a982"));
/// ```
pub fn is_valid_format(input: &str) -> bool {
    input
        .chars()
        .all(|c| c.is_ascii_digit() || c == '.' || c == '-' || c == '/' || c == ' ')
}
