//! Debounced search session.
//!
//! One session per search surface. Every keystroke is noted with
//! [`SearchSession::note_input`], which bumps an atomic generation counter
//! and hands back a ticket; [`SearchSession::run`] awaits the debounce
//! window and only issues the fetch for tickets that are still current.
//! Responses are re-checked against the latest generation before being
//! surfaced, so an older, slower response can never overwrite a newer one.
//! That stale-response guard is part of the session contract.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::error::LexiconResult;
use crate::query::{SchemaVariant, WordQuery};
use crate::store::ContentStore;
use crate::word::Word;

/// Default debounce window: input quiescence required before a search is
/// issued.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Ticket for one noted keystroke.
#[derive(Debug, Clone)]
pub struct QueryTicket {
    generation: u64,
    text: String,
}

impl QueryTicket {
    /// The raw input this ticket was issued for.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Outcome of running one ticket.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionUpdate {
    /// Current results for the query the user is still looking at.
    Results {
        /// The trimmed query the results correspond to.
        query: String,
        /// Matching records in store-assigned order.
        words: Vec<Word>,
    },
    /// Empty input: prior results should be cleared. No fetch was issued.
    Cleared,
    /// The ticket was superseded by newer input; discard this update.
    Stale,
}

/// Debounced, stale-guarded search session over a content store.
///
/// No shared mutable state beyond the generation counter, so concurrent
/// `run` calls are safe.
pub struct SearchSession {
    store: Arc<dyn ContentStore>,
    schema: SchemaVariant,
    debounce: Duration,
    generation: AtomicU64,
}

impl SearchSession {
    /// Creates a session with the default 300 ms debounce window.
    #[must_use]
    pub fn new(store: Arc<dyn ContentStore>, schema: SchemaVariant) -> Self {
        Self::with_debounce(store, schema, DEFAULT_DEBOUNCE)
    }

    /// Creates a session with a custom debounce window.
    #[must_use]
    pub fn with_debounce(
        store: Arc<dyn ContentStore>,
        schema: SchemaVariant,
        debounce: Duration,
    ) -> Self {
        Self {
            store,
            schema,
            debounce,
            generation: AtomicU64::new(0),
        }
    }

    /// Notes a keystroke: restarts the debounce clock by superseding every
    /// previously issued ticket.
    pub fn note_input(&self, text: &str) -> QueryTicket {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        QueryTicket {
            generation,
            text: text.to_string(),
        }
    }

    fn is_current(&self, ticket: &QueryTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.generation
    }

    /// Runs one ticket: awaits the debounce window, issues the search if
    /// the ticket is still current, and re-checks currency before
    /// surfacing the response.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::LexiconError::Fetch`] when the store fails;
    /// superseded tickets yield [`SessionUpdate::Stale`] instead of an
    /// error.
    pub async fn run(&self, ticket: QueryTicket) -> LexiconResult<SessionUpdate> {
        tokio::time::sleep(self.debounce).await;
        if !self.is_current(&ticket) {
            return Ok(SessionUpdate::Stale);
        }

        let trimmed = ticket.text.trim();
        if trimmed.is_empty() {
            debug!("empty query, clearing results without a fetch");
            return Ok(SessionUpdate::Cleared);
        }

        let query = WordQuery::search(self.schema, trimmed)?;
        let words = self.store.search(&query).await?;

        if !self.is_current(&ticket) {
            debug!(
                request_id = %query.request_id,
                query = trimmed,
                "discarding stale search response"
            );
            return Ok(SessionUpdate::Stale);
        }

        Ok(SessionUpdate::Results {
            query: trimmed.to_string(),
            words,
        })
    }

    /// The configured debounce window.
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        self.debounce
    }
}
