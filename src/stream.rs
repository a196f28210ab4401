//! Streaming validation for processing document numbers as they arrive.
//!
//! Iterator adapters for validating CPF/CNPJ numbers lazily, useful when
//! scanning large files or database exports without collecting everything
//! first.
//!
//! # Example
//!
//! ```
//! use doc_validator::stream::ValidateExt;
//!
//! let docs = vec!["52998224725", "11222333000181", "invalid"];
//! let valid_count = docs.iter()
//!     .copied()
//!     .validate_documents()
//!     .filter(|r| r.is_ok())
//!     .count();
//!
//! assert_eq!(valid_count, 2);
//! ```

use crate::error::ValidationError;
use crate::validate::validate;
use crate::ValidatedDocument;

/// A streaming validator that wraps an iterator of document number strings.
///
/// This struct is created by the `validate_documents` method on iterators.
#[derive(Debug, Clone)]
pub struct ValidateStream<I> {
    inner: I,
}

impl<I> ValidateStream<I> {
    /// Creates a new ValidateStream wrapping the given iterator.
    #[inline]
    pub fn new(inner: I) -> Self {
        Self { inner }
    }

    /// Consumes the stream and returns the inner iterator.
    #[inline]
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I, S> Iterator for ValidateStream<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Result<ValidatedDocument, ValidationError>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|s| validate(s.as_ref()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I, S> ExactSizeIterator for ValidateStream<I>
where
    I: ExactSizeIterator<Item = S>,
    S: AsRef<str>,
{
}

impl<I, S> DoubleEndedIterator for ValidateStream<I>
where
    I: DoubleEndedIterator<Item = S>,
    S: AsRef<str>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|s| validate(s.as_ref()))
    }
}

/// A streaming validator that only yields valid documents.
///
/// Invalid entries are silently skipped.
#[derive(Debug, Clone)]
pub struct ValidOnlyStream<I> {
    inner: I,
}

impl<I> ValidOnlyStream<I> {
    /// Creates a new ValidOnlyStream wrapping the given iterator.
    #[inline]
    pub fn new(inner: I) -> Self {
        Self { inner }
    }
}

impl<I, S> Iterator for ValidOnlyStream<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = ValidatedDocument;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next() {
                Some(s) => {
                    if let Ok(doc) = validate(s.as_ref()) {
                        return Some(doc);
                    }
                    // Invalid entry, continue to next
                }
                None => return None,
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.inner.size_hint();
        (0, upper) // Lower bound is 0 since all might be invalid
    }
}

/// A streaming validator that yields documents with their original index.
///
/// Useful when you need to report which rows of an import failed.
#[derive(Debug, Clone)]
pub struct IndexedValidateStream<I> {
    inner: I,
    index: usize,
}

impl<I> IndexedValidateStream<I> {
    /// Creates a new IndexedValidateStream.
    #[inline]
    pub fn new(inner: I) -> Self {
        Self { inner, index: 0 }
    }
}

impl<I, S> Iterator for IndexedValidateStream<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = (usize, Result<ValidatedDocument, ValidationError>);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|s| {
            let result = validate(s.as_ref());
            let index = self.index;
            self.index += 1;
            (index, result)
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Extension trait for adding document validation to any iterator.
///
/// Automatically implemented for all iterators over string-like types.
pub trait ValidateExt: Iterator + Sized {
    /// Validates each document number yielded by the iterator.
    ///
    /// Returns a new iterator yielding
    /// `Result<ValidatedDocument, ValidationError>`.
    ///
    /// # Example
    ///
    /// ```
    /// use doc_validator::stream::ValidateExt;
    ///
    /// let docs = ["52998224725", "11222333000181"];
    /// for result in docs.iter().copied().validate_documents() {
    ///     if let Ok(doc) = result {
    ///         println!("Valid {}", doc.kind());
    ///     }
    /// }
    /// ```
    fn validate_documents(self) -> ValidateStream<Self>;

    /// Validates and yields only valid documents.
    ///
    /// Invalid entries are silently filtered out.
    ///
    /// # Example
    ///
    /// ```
    /// use doc_validator::stream::ValidateExt;
    ///
    /// let docs = ["52998224725", "invalid", "11222333000181"];
    /// let valid: Vec<_> = docs.iter().copied().validate_valid_only().collect();
    /// assert_eq!(valid.len(), 2);
    /// ```
    fn validate_valid_only(self) -> ValidOnlyStream<Self>;

    /// Validates with index tracking.
    ///
    /// Returns tuples of (index, result) for reporting which entries
    /// succeeded or failed.
    ///
    /// # Example
    ///
    /// ```
    /// use doc_validator::stream::ValidateExt;
    ///
    /// let docs = ["52998224725", "invalid"];
    /// for (idx, result) in docs.iter().copied().validate_indexed() {
    ///     match result {
    ///         Ok(_) => println!("Row {} is valid", idx),
    ///         Err(e) => println!("Row {} failed: {}", idx, e),
    ///     }
    /// }
    /// ```
    fn validate_indexed(self) -> IndexedValidateStream<Self>;
}

impl<I: Iterator + Sized> ValidateExt for I {
    #[inline]
    fn validate_documents(self) -> ValidateStream<Self> {
        ValidateStream::new(self)
    }

    #[inline]
    fn validate_valid_only(self) -> ValidOnlyStream<Self> {
        ValidOnlyStream::new(self)
    }

    #[inline]
    fn validate_indexed(self) -> IndexedValidateStream<Self> {
        IndexedValidateStream::new(self)
    }
}

/// Creates a validation stream from a slice of strings.
///
/// Convenience function for creating a stream without using the trait.
#[inline]
pub fn validate_stream<'a, S: AsRef<str> + 'a>(
    docs: &'a [S],
) -> ValidateStream<impl Iterator<Item = &'a S>> {
    ValidateStream::new(docs.iter())
}
