//! # doc_validator
//!
//! Brazilian CPF/CNPJ document number validation and masking library.
//!
//! ## Features
//!
//! - Check-digit validation for CPF (11 digits) and CNPJ (14 digits)
//! - Length-based classification: 11 digits is a CPF, 14 a CNPJ
//! - Progressive input masking (`XXX.XXX.XXX-XX`, `XX.XXX.XXX/XXXX-XX`)
//! - Privacy masking for display and logs
//! - Pure form-field transform and submission gate, free of UI dependencies
//!
//! ## Quick Start
//!
//! ```rust
//! use doc_validator::{validate, is_valid, DocumentKind};
//!
//! // Validate a document number
//! let doc = validate("529.982.247-25").unwrap();
//! assert_eq!(doc.kind(), DocumentKind::Cpf);
//! assert_eq!(doc.last_four(), "4725");
//!
//! // Safe for logging - never exposes the full number
//! println!("Document: {}", doc.masked()); // "***.***.*47-25"
//!
//! // Quick boolean checks
//! assert!(is_valid("52998224725"));
//! assert!(!is_valid("52998224726"));
//! ```
//!
//! ## Input Masking
//!
//! ```rust
//! use doc_validator::format;
//!
//! // Separators appear progressively as digits accumulate
//! assert_eq!(format::format_document("5299"), "529.9");
//! assert_eq!(format::format_document("52998224725"), "529.982.247-25");
//!
//! // A 12th digit reflows the entry into the CNPJ layout
//! assert_eq!(format::format_document("529982247257"), "52.998.224/7257");
//!
//! // Strip formatting
//! assert_eq!(format::strip_formatting("529.982.247-25"), "52998224725");
//! ```
//!
//! ## Form Wiring
//!
//! ```rust
//! use doc_validator::input::{reformat, outcome, OutcomeKind};
//!
//! // Per keystroke: raw field value in, display string back out
//! let state = reformat("1122233300");
//! assert_eq!(state.display, "112.223.330-0");
//!
//! // On submit: digits are recomputed from the displayed value
//! let out = outcome("11.222.333/0001-81");
//! assert_eq!(out.kind, OutcomeKind::Cnpj);
//! assert_eq!(out.digits, "11222333000181");
//! ```
//!
//! ## Test Document Generation
//!
//! ```rust
//! use doc_validator::generate::generate_cpf_deterministic;
//! use doc_validator::is_valid;
//!
//! // Deterministic fixture, no randomness
//! let cpf = generate_cpf_deterministic();
//! assert!(is_valid(&cpf));
//! ```
//!
//! ## Batch Processing
//!
//! ```rust
//! use doc_validator::{BatchValidator, batch};
//!
//! let mut batch_validator = BatchValidator::new();
//! let docs = vec!["52998224725", "11222333000181", "invalid"];
//!
//! let results = batch_validator.validate_all(&docs);
//! assert_eq!(results.len(), 3);
//!
//! let (valid_count, _) = batch::count_valid(&docs);
//! assert_eq!(valid_count, 2);
//! ```
//!
//! ## Streaming Validation
//!
//! ```rust
//! use doc_validator::stream::ValidateExt;
//!
//! let docs = vec!["52998224725", "invalid", "11222333000181"];
//! let valid_docs: Vec<_> = docs.iter()
//!     .copied()
//!     .validate_valid_only()
//!     .collect();
//!
//! assert_eq!(valid_docs.len(), 2);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serializable submission outcomes |
//! | `generate` | Test document generation |
//! | `cli` | Command-line tool |
//! | `parallel` | Rayon-based parallelism |
//!
//! ## Privacy
//!
//! CPF/CNPJ numbers are personal data:
//!
//! - Digits stored in fixed-size arrays, not heap strings
//! - Automatic memory zeroization when `ValidatedDocument` is dropped
//! - `Debug` and `Display` show masked numbers only
//! - Constant-time comparison for sensitive operations
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod batch;
pub mod checksum;
pub mod document;
pub mod error;
pub mod format;
pub mod generate;
pub mod input;
pub mod mask;
pub mod stream;
pub mod validate;

// Re-export main types at crate root
pub use batch::BatchValidator;
pub use document::{
    DocumentKind, ValidatedDocument, CNPJ_DIGITS, CPF_DIGITS, MAX_DOCUMENT_DIGITS,
};
pub use error::ValidationError;
pub use validate::{is_valid, is_valid_cnpj, is_valid_cpf, validate, validate_digits};

// Re-export mask utilities
pub use mask::{constant_time_eq, constant_time_eq_str, mask_string};
