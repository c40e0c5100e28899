//! Content-store boundary.
//!
//! The store is an external collaborator; the core only reads from it. The
//! [`ContentStore`] trait is the whole interface: a filtered/populated
//! search and a by-id fetch. Backends:
//! - [`HttpStore`]: the real headless-CMS REST endpoint
//! - [`MemoryStore`]: thread-safe in-memory backend for tests, the seeded
//!   demo corpus, and as a reference implementation

pub mod http;
pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::query::{Populate, WordQuery};
use crate::word::{Word, WordId};

pub use http::HttpStore;
pub use memory::MemoryStore;

/// Errors surfaced by a content-store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The transport could not reach the store.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The store answered with a non-success status.
    #[error("Store returned status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// The response body was not the expected `{ "data": ... }` envelope.
    #[error("Malformed response envelope: {0}")]
    Envelope(String),

    /// A record with this id already exists (in-memory backend writes,
    /// used only by seeding).
    #[error("Duplicate word id: {0}")]
    DuplicateId(WordId),

    /// Backend-internal failure.
    #[error("Store backend error: {0}")]
    Backend(String),
}

/// Read interface over the word collection.
///
/// Implementations must be safe to share across concurrent searches; the
/// core never issues writes through this trait.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Runs a filtered, populated search and returns matching records in
    /// store-assigned order.
    async fn search(&self, query: &WordQuery) -> Result<Vec<Word>, StoreError>;

    /// Fetches a single record by id. Returns `Ok(None)` when the id is
    /// unknown; transport failures are errors.
    async fn fetch_by_id(
        &self,
        id: WordId,
        populate: Populate,
    ) -> Result<Option<Word>, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time test: the store trait must stay object-safe.
    fn _assert_content_store_object_safe(_: &dyn ContentStore) {}

    #[test]
    fn test_store_error_display() {
        let err = StoreError::Status { status: 502 };
        assert!(err.to_string().contains("502"));

        let err = StoreError::Connection("refused".to_string());
        assert!(err.to_string().contains("refused"));
    }
}
