//! Document number generation for testing purposes.
//!
//! Generates CPF/CNPJ numbers whose check digits are computed with the
//! real algorithms, so they pass validation. They are not registered
//! numbers and must only be used as test fixtures.
//!
//! # Example
//!
//! ```
//! use doc_validator::generate::{generate_cpf_deterministic, DocumentGenerator};
//! use doc_validator::{is_valid, DocumentKind};
//!
//! // Deterministic, no randomness required
//! let cpf = generate_cpf_deterministic();
//! assert!(is_valid(&cpf));
//!
//! // Builder form
//! let cnpj = DocumentGenerator::new(DocumentKind::Cnpj).generate_deterministic();
//! assert_eq!(cnpj.len(), 14);
//! ```

use crate::checksum::{all_identical, cnpj_check_digit, cpf_check_digit};
use crate::DocumentKind;

#[cfg(feature = "generate")]
use rand::Rng;

/// Deterministic base digits for generated CPFs.
const CPF_BASE: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

/// Deterministic base digits for generated CNPJs (branch 0001).
const CNPJ_BASE: [u8; 12] = [1, 1, 2, 2, 2, 3, 3, 3, 0, 0, 0, 1];

/// Appends the two CPF check digits to a 9-digit base.
fn complete_cpf(mut base: [u8; 9]) -> String {
    // A repeated base would produce a known-invalid repeated number
    if all_identical(&base) {
        base[8] = (base[8] + 1) % 10;
    }

    let mut digits = base.to_vec();
    digits.push(cpf_check_digit(&digits));
    digits.push(cpf_check_digit(&digits));
    digits.iter().map(|&d| (b'0' + d) as char).collect()
}

/// Appends the two CNPJ check digits to a 12-digit base.
fn complete_cnpj(mut base: [u8; 12]) -> String {
    if all_identical(&base) {
        base[11] = (base[11] + 1) % 10;
    }

    let mut digits = base.to_vec();
    digits.push(cnpj_check_digit(&digits));
    digits.push(cnpj_check_digit(&digits));
    digits.iter().map(|&d| (b'0' + d) as char).collect()
}

/// Generates a fixed valid CPF (deterministic, no randomness).
///
/// # Example
///
/// ```
/// use doc_validator::generate::generate_cpf_deterministic;
///
/// assert_eq!(generate_cpf_deterministic(), "12345678909");
/// ```
pub fn generate_cpf_deterministic() -> String {
    complete_cpf(CPF_BASE)
}

/// Generates a fixed valid CNPJ (deterministic, no randomness).
///
/// # Example
///
/// ```
/// use doc_validator::generate::generate_cnpj_deterministic;
///
/// assert_eq!(generate_cnpj_deterministic(), "11222333000181");
/// ```
pub fn generate_cnpj_deterministic() -> String {
    complete_cnpj(CNPJ_BASE)
}

/// Generates a fixed valid document of the given kind.
pub fn generate_document_deterministic(kind: DocumentKind) -> String {
    match kind {
        DocumentKind::Cpf => generate_cpf_deterministic(),
        DocumentKind::Cnpj => generate_cnpj_deterministic(),
    }
}

/// Generates a random valid CPF.
///
/// Requires the `generate` feature (which enables the `rand` dependency).
///
/// # Example
///
/// ```
/// # #[cfg(feature = "generate")]
/// # {
/// use doc_validator::generate::generate_cpf;
///
/// let cpf = generate_cpf();
/// assert!(doc_validator::is_valid_cpf(&cpf));
/// # }
/// ```
#[cfg(feature = "generate")]
pub fn generate_cpf() -> String {
    let mut rng = rand::thread_rng();
    let mut base = [0u8; 9];
    for d in &mut base {
        *d = rng.gen_range(0..10);
    }
    complete_cpf(base)
}

/// Generates a random valid CNPJ.
///
/// The branch number is fixed at 0001, which is how head-office CNPJs
/// are issued.
///
/// Requires the `generate` feature.
#[cfg(feature = "generate")]
pub fn generate_cnpj() -> String {
    let mut rng = rand::thread_rng();
    let mut base = [0u8; 12];
    for d in &mut base[..8] {
        *d = rng.gen_range(0..10);
    }
    base[8..12].copy_from_slice(&[0, 0, 0, 1]);
    complete_cnpj(base)
}

/// Generates a random valid document of the given kind.
///
/// Requires the `generate` feature.
#[cfg(feature = "generate")]
pub fn generate_document(kind: DocumentKind) -> String {
    match kind {
        DocumentKind::Cpf => generate_cpf(),
        DocumentKind::Cnpj => generate_cnpj(),
    }
}

/// Builder-style generator for a document kind.
///
/// # Example
///
/// ```
/// use doc_validator::generate::DocumentGenerator;
/// use doc_validator::DocumentKind;
///
/// let gen = DocumentGenerator::new(DocumentKind::Cpf);
/// assert!(doc_validator::is_valid(&gen.generate_deterministic()));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DocumentGenerator {
    kind: DocumentKind,
}

impl DocumentGenerator {
    /// Creates a generator for the given document kind.
    #[inline]
    pub fn new(kind: DocumentKind) -> Self {
        Self { kind }
    }

    /// Returns the kind this generator produces.
    #[inline]
    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// Generates the fixed deterministic document for this kind.
    pub fn generate_deterministic(&self) -> String {
        generate_document_deterministic(self.kind)
    }

    /// Generates a random document for this kind.
    ///
    /// Requires the `generate` feature.
    #[cfg(feature = "generate")]
    pub fn generate(&self) -> String {
        generate_document(self.kind)
    }

    /// Generates a batch of random documents.
    ///
    /// Requires the `generate` feature.
    #[cfg(feature = "generate")]
    pub fn generate_many(&self, count: usize) -> Vec<String> {
        (0..count).map(|_| self.generate()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{is_valid_cnpj, is_valid_cpf, validate};

    #[test]
    fn test_deterministic_cpf() {
        let cpf = generate_cpf_deterministic();
        assert_eq!(cpf, "12345678909");
        assert!(is_valid_cpf(&cpf));
    }

    #[test]
    fn test_deterministic_cnpj() {
        let cnpj = generate_cnpj_deterministic();
        assert_eq!(cnpj, "11222333000181");
        assert!(is_valid_cnpj(&cnpj));
    }

    #[test]
    fn test_deterministic_by_kind() {
        assert_eq!(
            validate(&generate_document_deterministic(DocumentKind::Cpf))
                .unwrap()
                .kind(),
            DocumentKind::Cpf
        );
        assert_eq!(
            validate(&generate_document_deterministic(DocumentKind::Cnpj))
                .unwrap()
                .kind(),
            DocumentKind::Cnpj
        );
    }

    #[test]
    fn test_repeated_base_is_nudged() {
        assert!(is_valid_cpf(&complete_cpf([7; 9])));
        assert!(is_valid_cnpj(&complete_cnpj([0; 12])));
    }

    #[test]
    fn test_generator_builder() {
        let gen = DocumentGenerator::new(DocumentKind::Cnpj);
        assert_eq!(gen.kind(), DocumentKind::Cnpj);
        assert_eq!(gen.generate_deterministic().len(), 14);
    }

    #[cfg(feature = "generate")]
    #[test]
    fn test_random_cpfs_validate() {
        for _ in 0..100 {
            let cpf = generate_cpf();
            assert!(is_valid_cpf(&cpf), "generated CPF failed: {}", cpf);
        }
    }

    #[cfg(feature = "generate")]
    #[test]
    fn test_random_cnpjs_validate() {
        for _ in 0..100 {
            let cnpj = generate_cnpj();
            assert!(is_valid_cnpj(&cnpj), "generated CNPJ failed: {}", cnpj);
            assert_eq!(&cnpj[8..12], "0001");
        }
    }

    #[cfg(feature = "generate")]
    #[test]
    fn test_generate_many() {
        let docs = DocumentGenerator::new(DocumentKind::Cpf).generate_many(10);
        assert_eq!(docs.len(), 10);
        assert!(docs.iter().all(|d| is_valid_cpf(d)));
    }
}
