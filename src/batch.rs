//! Batch processing for bulk document validation.
//!
//! Backfills and registry imports often need to validate many CPF/CNPJ
//! numbers at once. This module provides batch validation with optional
//! parallel processing using rayon.

use crate::error::ValidationError;
use crate::validate::validate;
use crate::ValidatedDocument;

/// Batch validator for processing multiple document numbers.
///
/// # Example
///
/// ```
/// use doc_validator::BatchValidator;
///
/// let mut batch = BatchValidator::new();
/// let docs = vec!["52998224725", "11222333000181", "11111111111"];
/// let results = batch.validate_all(&docs);
///
/// assert!(results[0].is_ok());
/// assert!(results[1].is_ok());
/// assert!(results[2].is_err());
/// ```
#[derive(Debug, Default)]
pub struct BatchValidator {
    // Reserved for future optimizations (e.g., thread-local buffers)
    _private: (),
}

impl BatchValidator {
    /// Creates a new batch validator.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a batch of document numbers.
    ///
    /// Returns a vector of results in the same order as the input.
    pub fn validate_all<S: AsRef<str>>(
        &mut self,
        docs: &[S],
    ) -> Vec<Result<ValidatedDocument, ValidationError>> {
        docs.iter().map(|d| validate(d.as_ref())).collect()
    }

    /// Validates a batch and returns only the valid documents.
    ///
    /// Invalid entries are silently filtered out.
    pub fn validate_valid_only<S: AsRef<str>>(&mut self, docs: &[S]) -> Vec<ValidatedDocument> {
        docs.iter()
            .filter_map(|d| validate(d.as_ref()).ok())
            .collect()
    }

    /// Validates a batch and partitions into valid and invalid.
    ///
    /// Returns a tuple of (valid_documents, indexed_errors).
    pub fn validate_partitioned<S: AsRef<str>>(
        &mut self,
        docs: &[S],
    ) -> (Vec<ValidatedDocument>, Vec<(usize, ValidationError)>) {
        let mut valid = Vec::new();
        let mut invalid = Vec::new();

        for (i, doc) in docs.iter().enumerate() {
            match validate(doc.as_ref()) {
                Ok(d) => valid.push(d),
                Err(e) => invalid.push((i, e)),
            }
        }

        (valid, invalid)
    }

    /// Validates documents in parallel using rayon.
    ///
    /// Typically faster for large batches (>1000 entries) on multi-core
    /// systems.
    ///
    /// # Feature
    ///
    /// Requires the `parallel` feature to be enabled.
    #[cfg(feature = "parallel")]
    pub fn validate_parallel<S: AsRef<str> + Sync>(
        &mut self,
        docs: &[S],
    ) -> Vec<Result<ValidatedDocument, ValidationError>> {
        use rayon::prelude::*;
        docs.par_iter().map(|d| validate(d.as_ref())).collect()
    }

    /// Validates documents in parallel, returning only valid ones.
    ///
    /// # Feature
    ///
    /// Requires the `parallel` feature to be enabled.
    #[cfg(feature = "parallel")]
    pub fn validate_parallel_valid_only<S: AsRef<str> + Sync>(
        &mut self,
        docs: &[S],
    ) -> Vec<ValidatedDocument> {
        use rayon::prelude::*;
        docs.par_iter()
            .filter_map(|d| validate(d.as_ref()).ok())
            .collect()
    }
}

/// Validates a slice of document numbers without creating a BatchValidator.
///
/// # Example
///
/// ```
/// use doc_validator::batch::validate_batch;
///
/// let docs = ["52998224725", "11222333000181"];
/// let results = validate_batch(&docs);
/// assert!(results.iter().all(|r| r.is_ok()));
/// ```
#[inline]
pub fn validate_batch<S: AsRef<str>>(
    docs: &[S],
) -> Vec<Result<ValidatedDocument, ValidationError>> {
    docs.iter().map(|d| validate(d.as_ref())).collect()
}

/// Validates a slice of document numbers in parallel.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
#[inline]
pub fn validate_batch_parallel<S: AsRef<str> + Sync>(
    docs: &[S],
) -> Vec<Result<ValidatedDocument, ValidationError>> {
    use rayon::prelude::*;
    docs.par_iter().map(|d| validate(d.as_ref())).collect()
}

/// Counts valid and invalid documents in a batch.
///
/// Faster than validating all and then counting, as it doesn't allocate
/// for results.
///
/// # Example
///
/// ```
/// use doc_validator::batch::count_valid;
///
/// let docs = ["52998224725", "11111111111", "11222333000181"];
/// let (valid, invalid) = count_valid(&docs);
/// assert_eq!(valid, 2);
/// assert_eq!(invalid, 1);
/// ```
#[inline]
pub fn count_valid<S: AsRef<str>>(docs: &[S]) -> (usize, usize) {
    let mut valid = 0;
    let mut invalid = 0;

    for doc in docs {
        if validate(doc.as_ref()).is_ok() {
            valid += 1;
        } else {
            invalid += 1;
        }
    }

    (valid, invalid)
}

/// Counts valid and invalid documents in parallel.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
#[inline]
pub fn count_valid_parallel<S: AsRef<str> + Sync>(docs: &[S]) -> (usize, usize) {
    use rayon::prelude::*;

    let valid: usize = docs
        .par_iter()
        .filter(|d| validate(d.as_ref()).is_ok())
        .count();

    (valid, docs.len() - valid)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_CPF: &str = "52998224725";
    const VALID_CNPJ: &str = "11222333000181";
    const INVALID: &str = "11111111111";

    #[test]
    fn test_batch_validate_all() {
        let mut batch = BatchValidator::new();
        let docs = vec![VALID_CPF, VALID_CNPJ, INVALID, "12345678909"];
        let results = batch.validate_all(&docs);

        assert_eq!(results.len(), 4);
        assert!(results[0].is_ok());
        assert!(results[1].is_ok());
        assert!(results[2].is_err());
        assert!(results[3].is_ok());
    }

    #[test]
    fn test_batch_valid_only() {
        let mut batch = BatchValidator::new();
        let docs = vec![VALID_CPF, INVALID, VALID_CNPJ];
        let valid = batch.validate_valid_only(&docs);

        assert_eq!(valid.len(), 2);
    }

    #[test]
    fn test_batch_partitioned() {
        let mut batch = BatchValidator::new();
        let docs = vec![VALID_CPF, INVALID, VALID_CNPJ, "bad"];
        let (valid, invalid) = batch.validate_partitioned(&docs);

        assert_eq!(valid.len(), 2);
        assert_eq!(invalid.len(), 2);
        assert_eq!(invalid[0].0, 1); // Index of first invalid
        assert_eq!(invalid[1].0, 3); // Index of second invalid
    }

    #[test]
    fn test_validate_batch_fn() {
        let docs = [VALID_CPF, VALID_CNPJ];
        let results = validate_batch(&docs);
        assert!(results.iter().all(|r| r.is_ok()));
    }

    #[test]
    fn test_count_valid() {
        let docs = [VALID_CPF, INVALID, VALID_CNPJ, "bad"];
        let (valid, invalid) = count_valid(&docs);
        assert_eq!(valid, 2);
        assert_eq!(invalid, 2);
    }

    #[test]
    fn test_empty_batch() {
        let mut batch = BatchValidator::new();
        let docs: Vec<&str> = vec![];
        let results = batch.validate_all(&docs);
        assert!(results.is_empty());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_validation() {
        let mut batch = BatchValidator::new();
        let docs: Vec<String> = (0..1000).map(|_| VALID_CPF.to_string()).collect();

        let results = batch.validate_parallel(&docs);
        assert_eq!(results.len(), 1000);
        assert!(results.iter().all(|r| r.is_ok()));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_count_valid_parallel() {
        let docs: Vec<&str> = vec![VALID_CPF, INVALID, VALID_CNPJ, "bad"];
        let (valid, invalid) = count_valid_parallel(&docs);
        assert_eq!(valid, 2);
        assert_eq!(invalid, 2);
    }
}
