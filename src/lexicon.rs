//! Lexicon facade: search and detail lookup wired over one store.
//!
//! This is the piece the presenter talks to. `search` returns list-view
//! hits with their aggregated neighbors; `lookup` resolves a path
//! identifier to one record, aggregates its neighbors, and (for
//! translation records) expands each connection into its full record with
//! one concurrent fetch per neighbor. An individual neighbor fetch that
//! fails is dropped from the expansion, not escalated; the primary word
//! still renders.

use std::sync::Arc;

use futures::future::join_all;
use tracing::warn;

use crate::aggregate::NeighborSummary;
use crate::error::LexiconResult;
use crate::query::{Populate, SchemaVariant, WordQuery};
use crate::resolve::Resolver;
use crate::store::ContentStore;
use crate::word::{Word, WordEntry};

/// One search result with its presentation-ready neighbor set.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    /// The matching record.
    pub word: Word,
    /// Its aggregated neighbors (list-view population).
    pub neighbors: NeighborSummary,
}

/// A resolved detail view.
#[derive(Debug, Clone, PartialEq)]
pub struct WordDetail {
    /// The resolved record.
    pub word: Word,
    /// Its aggregated neighbors.
    pub neighbors: NeighborSummary,
    /// Full records for each connected word (translation schema only;
    /// empty for lexemes). Neighbors whose fetch failed are absent.
    pub expanded: Vec<Word>,
}

/// Search and lookup over one content store.
#[derive(Clone)]
pub struct Lexicon {
    store: Arc<dyn ContentStore>,
    resolver: Resolver,
    schema: SchemaVariant,
}

impl Lexicon {
    /// Creates a lexicon over the given store and schema variant.
    #[must_use]
    pub fn new(store: Arc<dyn ContentStore>, schema: SchemaVariant) -> Self {
        let resolver = Resolver::new(Arc::clone(&store));
        Self {
            store,
            resolver,
            schema,
        }
    }

    /// The schema variant searches run against.
    #[must_use]
    pub const fn schema(&self) -> SchemaVariant {
        self.schema
    }

    /// Searches for a trimmed, non-empty query string and aggregates each
    /// hit's neighbors for list rendering.
    ///
    /// # Errors
    ///
    /// [`crate::error::LexiconError::Fetch`] on store failure,
    /// [`crate::error::LexiconError::Validation`] for blank input.
    pub async fn search(&self, query: &str) -> LexiconResult<Vec<SearchHit>> {
        let request = WordQuery::search(self.schema, query)?;
        let words = self.store.search(&request).await?;
        Ok(words
            .into_iter()
            .map(|word| {
                let neighbors = NeighborSummary::collect(&word);
                SearchHit { word, neighbors }
            })
            .collect())
    }

    /// Resolves a detail-path identifier and builds the detail view.
    ///
    /// # Errors
    ///
    /// [`crate::error::LexiconError::NotFound`] when nothing matches,
    /// [`crate::error::LexiconError::Fetch`] when the primary fetch fails.
    pub async fn lookup(&self, identifier: &str) -> LexiconResult<WordDetail> {
        let word = self.resolver.lookup(identifier).await?;
        let neighbors = NeighborSummary::collect(&word);
        let expanded = self.expand_connections(&word).await;
        Ok(WordDetail {
            word,
            neighbors,
            expanded,
        })
    }

    /// Fetches the full record of every connected word concurrently.
    ///
    /// Partial failure is tolerated: a neighbor whose fetch errors or whose
    /// record has vanished is logged and excluded.
    async fn expand_connections(&self, word: &Word) -> Vec<Word> {
        let WordEntry::Translation(entry) = &word.entry else {
            return Vec::new();
        };

        let fetches = entry.connections.iter().map(|connection| {
            let store = Arc::clone(&self.store);
            let id = connection.id;
            async move { (id, store.fetch_by_id(id, Populate::Detail).await) }
        });

        let mut expanded = Vec::with_capacity(entry.connections.len());
        for (id, outcome) in join_all(fetches).await {
            match outcome {
                Ok(Some(neighbor)) => expanded.push(neighbor),
                Ok(None) => {
                    warn!(%id, "connected word vanished from store, dropping from detail view");
                }
                Err(err) => {
                    warn!(%id, error = %err, "neighbor fetch failed, dropping from detail view");
                }
            }
        }
        expanded
    }
}
