//! Live-entry transform and submission gate for form fields.
//!
//! A form wires its text field to [`reformat`]: on every keystroke or paste
//! it passes the raw field value in and writes the returned display string
//! back. On submit it passes the displayed value to [`submit`] (or
//! [`outcome`] for a wire-shaped record). Everything here is a pure function
//! of the input string; no UI framework types appear anywhere.
//!
//! # Example
//!
//! ```
//! use doc_validator::input::{reformat, submit};
//! use doc_validator::DocumentKind;
//!
//! // Per-edit reformatting
//! let state = reformat("5299822");
//! assert_eq!(state.display, "529.982.2");
//! assert_eq!(state.pending_kind, DocumentKind::Cpf);
//!
//! // Submission recomputes from the displayed value
//! let doc = submit("529.982.247-25").unwrap();
//! assert_eq!(doc.kind(), DocumentKind::Cpf);
//! ```

use crate::document::{DocumentKind, ValidatedDocument, CPF_DIGITS, MAX_DOCUMENT_DIGITS};
use crate::error::ValidationError;
use crate::format;
use crate::validate::validate_digits;

/// Extracts the digit string from arbitrary input.
///
/// Strips every character that is not ASCII 0-9 and truncates to at most
/// 14 digits. This is the entry point of the typing pipeline; pasted text
/// with letters, punctuation, or excess digits all normalize here.
///
/// # Example
///
/// ```
/// use doc_validator::input::extract_digits;
///
/// assert_eq!(extract_digits("529.982.247-25"), "52998224725");
/// assert_eq!(extract_digits("cpf: 529"), "529");
/// assert_eq!(extract_digits("112223330001819999"), "11222333000181");
/// ```
pub fn extract_digits(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(MAX_DOCUMENT_DIGITS)
        .collect()
}

/// The state of a document field after one edit.
///
/// Produced by [`reformat`]; `display` goes back into the text field,
/// `digits` and `pending_kind` are advisory until submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputState {
    /// The extracted digits, at most 14.
    pub digits: String,
    /// The progressively masked display string.
    pub display: String,
    /// The kind the entry is heading towards: CPF while 11 or fewer
    /// digits exist, CNPJ for 12-14.
    pub pending_kind: DocumentKind,
}

/// Recomputes digits and display mask from the raw field value.
///
/// This is the per-edit transform `(rawInput) -> (digits, maskedDisplay)`.
/// It is idempotent: feeding the returned display back in produces the
/// same state, so the caller can reassign the field unconditionally.
///
/// # Example
///
/// ```
/// use doc_validator::input::reformat;
/// use doc_validator::DocumentKind;
///
/// let state = reformat("112223330001");
/// assert_eq!(state.display, "11.222.333/0001");
/// assert_eq!(state.pending_kind, DocumentKind::Cnpj);
///
/// // Crossing back under the boundary reflows to the CPF layout
/// let state = reformat("11222333");
/// assert_eq!(state.display, "112.223.33");
/// assert_eq!(state.pending_kind, DocumentKind::Cpf);
/// ```
pub fn reformat(raw: &str) -> InputState {
    let digits = extract_digits(raw);

    let pending_kind = if digits.len() <= CPF_DIGITS {
        DocumentKind::Cpf
    } else {
        DocumentKind::Cnpj
    };

    let display = match pending_kind {
        DocumentKind::Cpf => format::format_cpf(&digits),
        DocumentKind::Cnpj => format::format_cnpj(&digits),
    };

    InputState {
        digits,
        display,
        pending_kind,
    }
}

/// Validates the displayed value on form submission.
///
/// Digits are recomputed from the given string; no state cached from
/// intermediate edits is trusted. 11 digits run the CPF rules, 14 the
/// CNPJ rules, any other count rejects with
/// [`ValidationError::InvalidLength`].
///
/// # Example
///
/// ```
/// use doc_validator::input::submit;
/// use doc_validator::ValidationError;
///
/// assert!(submit("11.222.333/0001-81").is_ok());
///
/// // 10 digits: rejected regardless of checksum
/// assert_eq!(
///     submit("5299822472").unwrap_err(),
///     ValidationError::InvalidLength { length: 10 }
/// );
/// ```
pub fn submit(raw: &str) -> Result<ValidatedDocument, ValidationError> {
    let digits: Vec<u8> = raw
        .chars()
        .filter(|c| c.is_ascii_digit())
        .map(|c| (c as u8) - b'0')
        .take(MAX_DOCUMENT_DIGITS)
        .collect();

    if digits.is_empty() {
        return if raw.is_empty() {
            Err(ValidationError::Empty)
        } else {
            Err(ValidationError::NoDigits)
        };
    }

    validate_digits(&digits)
}

/// The classification carried by a [`SubmitOutcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum OutcomeKind {
    /// Valid CPF.
    Cpf,
    /// Valid CNPJ.
    Cnpj,
    /// Rejected entry.
    Invalid,
}

/// The record handed to the form-submission flow.
///
/// Exactly one of CPF/CNPJ is ever set; a rejected entry carries
/// `Invalid` with the digits and display as entered. With the `serde`
/// feature the record serializes with camelCase field names.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SubmitOutcome {
    /// Classification verdict.
    pub kind: OutcomeKind,
    /// The extracted digits, at most 14.
    pub digits: String,
    /// The progressively masked display string.
    pub display_masked: String,
}

/// Runs the submission gate and packages the result as a wire record.
///
/// # Example
///
/// ```
/// use doc_validator::input::{outcome, OutcomeKind};
///
/// let out = outcome("529.982.247-25");
/// assert_eq!(out.kind, OutcomeKind::Cpf);
/// assert_eq!(out.digits, "52998224725");
///
/// let out = outcome("5299822472");
/// assert_eq!(out.kind, OutcomeKind::Invalid);
/// ```
pub fn outcome(raw: &str) -> SubmitOutcome {
    let state = reformat(raw);

    let kind = match submit(raw) {
        Ok(doc) => match doc.kind() {
            DocumentKind::Cpf => OutcomeKind::Cpf,
            DocumentKind::Cnpj => OutcomeKind::Cnpj,
        },
        Err(_) => OutcomeKind::Invalid,
    };

    SubmitOutcome {
        kind,
        digits: state.digits,
        display_masked: state.display,
    }
}
