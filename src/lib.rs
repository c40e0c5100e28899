//! # Bararan
//!
//! Query and aggregation core of a small bilingual dictionary browser.
//! The word collection lives in an external headless content store; this
//! crate owns the data model, search-query construction, neighbor
//! aggregation, identifier resolution and the debounced search session
//! that sits between a presenter and the store.
//!
//! ## Core Concepts
//!
//! - **Word**: one record in the store, either a lexeme (lemma + typed,
//!   directed relations) or a translation pair (original/Armenian word +
//!   undirected connections)
//! - **WordQuery**: opaque request descriptor, filter expression plus
//!   population directive
//! - **NeighborSummary**: a word's relations/connections merged,
//!   deduplicated and grouped for display
//! - **SearchSession**: debounced, stale-guarded search loop
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use bararan::{Lexicon, MemoryStore, SchemaVariant, seed};
//!
//! let store = Arc::new(MemoryStore::new());
//! seed::seed_translations(&store)?;
//!
//! let lexicon = Lexicon::new(store, SchemaVariant::Translation);
//! let hits = lexicon.search("house").await?;
//! let detail = lexicon.lookup("maison").await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregate;
pub mod config;
pub mod error;
pub mod i18n;
pub mod lexicon;
pub mod query;
pub mod resolve;
pub mod seed;
pub mod session;
pub mod store;
pub mod word;

// Re-export primary types at crate root for convenience
pub use aggregate::{
    preview, Neighbor, NeighborSummary, Preview, RelationGroup, COMPACT_GROUP_LIMIT,
    LIST_PREVIEW_LIMIT,
};
pub use config::Config;
pub use error::{LexiconError, LexiconResult, ValidationError};
pub use i18n::{translate, Locale};
pub use lexicon::{Lexicon, SearchHit, WordDetail};
pub use query::{Filter, Populate, SchemaVariant, TextField, WordQuery};
pub use resolve::{Resolver, WordIdentifier};
pub use session::{QueryTicket, SearchSession, SessionUpdate, DEFAULT_DEBOUNCE};
pub use store::{ContentStore, HttpStore, MemoryStore, StoreError};
pub use word::{Word, WordEntry, WordId};
