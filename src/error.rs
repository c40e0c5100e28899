//! Error types for bararan.
//!
//! All errors are strongly typed using thiserror. The taxonomy keeps the
//! two user-facing outcomes distinct: a transport/store failure
//! (`LexiconError::Fetch`) is never conflated with an empty lookup result
//! (`LexiconError::NotFound`).

use thiserror::Error;

use crate::store::StoreError;

/// Validation errors that occur before a request is issued.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The search query was empty or whitespace-only.
    ///
    /// Callers are expected to suppress the request instead of building one;
    /// the builder rejects the input defensively.
    #[error("Search query cannot be empty")]
    EmptyQuery,

    /// The lookup identifier was empty.
    #[error("Lookup identifier cannot be empty")]
    EmptyIdentifier,
}

/// Top-level error type for lexicon operations.
#[derive(Debug, Error)]
pub enum LexiconError {
    /// Transport failure or non-success response from the content store.
    #[error("Fetch failed: {0}")]
    Fetch(#[from] StoreError),

    /// The resolver found no word for the given identifier.
    #[error("Word not found: {identifier}")]
    NotFound {
        /// The raw identifier that failed to resolve.
        identifier: String,
    },

    /// Input validation failed before any request was issued.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl LexiconError {
    /// Creates a not-found error for the given identifier.
    #[must_use]
    pub fn not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            identifier: identifier.into(),
        }
    }

    /// Returns true if this is a fetch (transport/store) failure.
    #[must_use]
    pub const fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch(_))
    }

    /// Returns true if this is a not-found outcome.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result type alias for lexicon operations.
pub type LexiconResult<T> = Result<T, LexiconError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = LexiconError::not_found("doesnotexist");
        let msg = format!("{err}");
        assert!(msg.contains("not found"));
        assert!(msg.contains("doesnotexist"));
    }

    #[test]
    fn test_not_found_is_distinct_from_fetch() {
        let not_found = LexiconError::not_found("x");
        assert!(not_found.is_not_found());
        assert!(!not_found.is_fetch());

        let fetch: LexiconError = StoreError::Status { status: 500 }.into();
        assert!(fetch.is_fetch());
        assert!(!fetch.is_not_found());
    }

    #[test]
    fn test_validation_from() {
        let err: LexiconError = ValidationError::EmptyQuery.into();
        assert!(err.is_validation());
        assert!(format!("{err}").contains("empty"));
    }
}
