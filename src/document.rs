//! Core types for validated Brazilian tax-id documents.
//!
//! This module provides the `DocumentKind` enum for classifying a number as
//! CPF or CNPJ and the `ValidatedDocument` struct for holding validated
//! digits securely.

use std::fmt;
use zeroize::Zeroize;

/// Number of digits in a CPF (natural-person tax id).
pub const CPF_DIGITS: usize = 11;

/// Number of digits in a CNPJ (legal-entity tax id).
pub const CNPJ_DIGITS: usize = 14;

/// Maximum number of digits in any supported document number.
pub const MAX_DOCUMENT_DIGITS: usize = CNPJ_DIGITS;

/// The two Brazilian tax-id document kinds.
///
/// Classification is derived from digit count alone: 11 digits is a CPF,
/// 14 digits is a CNPJ. No other length maps to a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum DocumentKind {
    /// CPF - individual taxpayer registry, 11 digits with 2 check digits.
    Cpf,
    /// CNPJ - legal-entity registry, 14 digits with 2 check digits.
    Cnpj,
}

impl DocumentKind {
    /// Returns the exact digit count for this document kind.
    #[inline]
    pub const fn digit_count(&self) -> usize {
        match self {
            Self::Cpf => CPF_DIGITS,
            Self::Cnpj => CNPJ_DIGITS,
        }
    }

    /// Classifies a digit count as a document kind.
    ///
    /// Only exact lengths classify; anything else returns `None`.
    #[inline]
    pub const fn from_digit_count(count: usize) -> Option<Self> {
        match count {
            CPF_DIGITS => Some(Self::Cpf),
            CNPJ_DIGITS => Some(Self::Cnpj),
            _ => None,
        }
    }

    /// Returns the uppercase acronym for the document kind.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Cpf => "CPF",
            Self::Cnpj => "CNPJ",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A validated CPF or CNPJ with secure memory handling.
///
/// The digits are stored in a fixed-size array that is zeroed when the
/// struct is dropped, so a tax id does not linger in freed memory.
///
/// # Privacy
///
/// - The full number is private and only accessible via controlled methods
/// - `Debug` and `Display` output is masked
/// - Memory is zeroed on drop using the `zeroize` crate
#[derive(Clone)]
pub struct ValidatedDocument {
    /// The classified document kind.
    kind: DocumentKind,
    /// The full number as digits (0-9).
    digits: [u8; MAX_DOCUMENT_DIGITS],
    /// Number of actual digits (11 or 14).
    digit_count: u8,
}

impl ValidatedDocument {
    /// Creates a new ValidatedDocument.
    ///
    /// Internal constructor; use [`crate::validate`] to create instances.
    #[inline]
    pub(crate) fn new(
        kind: DocumentKind,
        digits: [u8; MAX_DOCUMENT_DIGITS],
        digit_count: u8,
    ) -> Self {
        Self {
            kind,
            digits,
            digit_count,
        }
    }

    /// Returns the classified document kind.
    #[inline]
    pub const fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// Returns the number of digits (11 for CPF, 14 for CNPJ).
    #[inline]
    pub const fn length(&self) -> usize {
        self.digit_count as usize
    }

    /// Returns the last four digits as a string.
    ///
    /// Safe for logging and display.
    #[inline]
    pub fn last_four(&self) -> String {
        let len = self.digit_count as usize;
        self.digits[len - 4..len]
            .iter()
            .map(|&d| (b'0' + d) as char)
            .collect()
    }

    /// Returns the bare digit string.
    ///
    /// # Privacy Warning
    ///
    /// This exposes the full document number. Never log the result; for
    /// display purposes use [`masked`](Self::masked) instead.
    #[inline]
    pub fn number(&self) -> String {
        self.digits[..self.digit_count as usize]
            .iter()
            .map(|&d| (b'0' + d) as char)
            .collect()
    }

    /// Returns the fully punctuated display form.
    ///
    /// `XXX.XXX.XXX-XX` for CPF, `XX.XXX.XXX/XXXX-XX` for CNPJ.
    #[inline]
    pub fn formatted(&self) -> String {
        crate::format::format_document(&self.number())
    }

    /// Returns the number masked for safe display.
    ///
    /// Shows only the last four digits, keeping the separators:
    /// `***.***.*47-25`.
    #[inline]
    pub fn masked(&self) -> String {
        crate::mask::mask_document(self)
    }

    /// Returns the raw digit slice (for internal use).
    #[inline]
    pub(crate) fn digits(&self) -> &[u8] {
        &self.digits[..self.digit_count as usize]
    }
}

impl fmt::Debug for ValidatedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Mask the number in debug output
        f.debug_struct("ValidatedDocument")
            .field("kind", &self.kind)
            .field("number", &self.masked())
            .field("length", &self.digit_count)
            .finish()
    }
}

impl fmt::Display for ValidatedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Always display masked
        write!(f, "{} {}", self.kind, self.masked())
    }
}

impl Drop for ValidatedDocument {
    fn drop(&mut self) {
        self.digits.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CPF: [u8; 11] = [5, 2, 9, 9, 8, 2, 2, 4, 7, 2, 5];
    const CNPJ: [u8; 14] = [1, 1, 2, 2, 2, 3, 3, 3, 0, 0, 0, 1, 8, 1];

    fn make_cpf() -> ValidatedDocument {
        let mut digits = [0u8; MAX_DOCUMENT_DIGITS];
        digits[..11].copy_from_slice(&CPF);
        ValidatedDocument::new(DocumentKind::Cpf, digits, 11)
    }

    fn make_cnpj() -> ValidatedDocument {
        ValidatedDocument::new(DocumentKind::Cnpj, CNPJ, 14)
    }

    #[test]
    fn test_kind_digit_counts() {
        assert_eq!(DocumentKind::Cpf.digit_count(), 11);
        assert_eq!(DocumentKind::Cnpj.digit_count(), 14);
    }

    #[test]
    fn test_kind_from_digit_count() {
        assert_eq!(DocumentKind::from_digit_count(11), Some(DocumentKind::Cpf));
        assert_eq!(DocumentKind::from_digit_count(14), Some(DocumentKind::Cnpj));
        assert_eq!(DocumentKind::from_digit_count(0), None);
        assert_eq!(DocumentKind::from_digit_count(10), None);
        assert_eq!(DocumentKind::from_digit_count(12), None);
        assert_eq!(DocumentKind::from_digit_count(15), None);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(DocumentKind::Cpf.name(), "CPF");
        assert_eq!(DocumentKind::Cnpj.to_string(), "CNPJ");
    }

    #[test]
    fn test_document_accessors() {
        let doc = make_cpf();
        assert_eq!(doc.kind(), DocumentKind::Cpf);
        assert_eq!(doc.length(), 11);
        assert_eq!(doc.last_four(), "4725");
        assert_eq!(doc.number(), "52998224725");
    }

    #[test]
    fn test_document_formatted() {
        assert_eq!(make_cpf().formatted(), "529.982.247-25");
        assert_eq!(make_cnpj().formatted(), "11.222.333/0001-81");
    }

    #[test]
    fn test_debug_is_masked() {
        let doc = make_cpf();
        let debug = format!("{:?}", doc);
        assert!(!debug.contains("52998224725"));
        assert!(debug.contains("*"));
    }

    #[test]
    fn test_display_is_masked() {
        let doc = make_cnpj();
        let display = format!("{}", doc);
        assert!(display.contains("CNPJ"));
        assert!(!display.contains("11222333000181"));
    }

    #[test]
    fn test_document_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ValidatedDocument>();
        assert_send_sync::<DocumentKind>();
    }
}
