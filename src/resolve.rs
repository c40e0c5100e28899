//! Identifier resolution for word-detail lookups.
//!
//! A detail-path identifier is either a numeric primary key or a textual
//! key (original or Armenian form). Classification follows `^[0-9]+$`: an
//! all-ASCII-digit identifier is looked up by id, anything else goes
//! through an exact-match key query across both text-key fields.

use std::sync::{Arc, OnceLock};

use regex::Regex;
use tracing::debug;

use crate::error::{LexiconError, LexiconResult, ValidationError};
use crate::query::{Populate, WordQuery};
use crate::store::ContentStore;
use crate::word::{Word, WordId};

static NUMERIC_ID: OnceLock<Regex> = OnceLock::new();

fn numeric_id_regex() -> &'static Regex {
    NUMERIC_ID.get_or_init(|| {
        Regex::new(r"^[0-9]+$").expect("numeric id pattern is a valid literal regex")
    })
}

/// A classified detail-path identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordIdentifier {
    /// All-ASCII-digit identifier: a store primary key.
    Id(WordId),
    /// Anything else: a textual key resolved by exact match.
    Key(String),
}

impl WordIdentifier {
    /// Classifies a raw identifier.
    ///
    /// All-digit strings are ids; digit strings beyond the id space are
    /// still classified as ids (they saturate and will simply not resolve).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyIdentifier`] for empty input.
    pub fn classify(raw: &str) -> Result<Self, ValidationError> {
        if raw.is_empty() {
            return Err(ValidationError::EmptyIdentifier);
        }
        if numeric_id_regex().is_match(raw) {
            // Out-of-range digit strings denote no assignable id.
            let id = raw.parse::<u64>().map(WordId::new).unwrap_or(WordId::new(u64::MAX));
            return Ok(Self::Id(id));
        }
        Ok(Self::Key(raw.to_string()))
    }
}

/// Stateless resolver from path identifiers to word records.
///
/// Holds only the shared store handle; safe to call concurrently for
/// different identifiers.
#[derive(Clone)]
pub struct Resolver {
    store: Arc<dyn ContentStore>,
}

impl Resolver {
    /// Creates a resolver over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    /// Resolves an identifier to exactly one word record, fetched with the
    /// detail population shape.
    ///
    /// When a textual key matches several records, the first record in
    /// store-assigned order wins and later matches are silently ignored
    /// (textual keys are not guaranteed unique).
    ///
    /// # Errors
    ///
    /// - [`LexiconError::NotFound`] when no record matches
    /// - [`LexiconError::Fetch`] on store failure
    /// - [`LexiconError::Validation`] for empty input
    pub async fn lookup(&self, raw: &str) -> LexiconResult<Word> {
        match WordIdentifier::classify(raw)? {
            WordIdentifier::Id(id) => {
                debug!(identifier = raw, %id, "resolving by id");
                self.store
                    .fetch_by_id(id, Populate::Detail)
                    .await?
                    .ok_or_else(|| LexiconError::not_found(raw))
            }
            WordIdentifier::Key(key) => {
                debug!(identifier = raw, "resolving by textual key");
                let query = WordQuery::exact_key(&key)?;
                let mut matches = self.store.search(&query).await?;
                if matches.is_empty() {
                    return Err(LexiconError::not_found(raw));
                }
                Ok(matches.swap_remove(0))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_digit_identifiers_are_ids() {
        assert_eq!(
            WordIdentifier::classify("42").unwrap(),
            WordIdentifier::Id(WordId::new(42))
        );
        assert_eq!(
            WordIdentifier::classify("0").unwrap(),
            WordIdentifier::Id(WordId::new(0))
        );
    }

    #[test]
    fn test_non_digit_identifiers_are_keys() {
        assert_eq!(
            WordIdentifier::classify("maison").unwrap(),
            WordIdentifier::Key("maison".to_string())
        );
        // Mixed content is a key, not an id.
        assert_eq!(
            WordIdentifier::classify("42a").unwrap(),
            WordIdentifier::Key("42a".to_string())
        );
        // Non-ASCII digits do not denote store ids.
        assert_eq!(
            WordIdentifier::classify("٤٢").unwrap(),
            WordIdentifier::Key("٤٢".to_string())
        );
        assert!(matches!(
            WordIdentifier::classify("տուն").unwrap(),
            WordIdentifier::Key(_)
        ));
    }

    #[test]
    fn test_empty_identifier_is_rejected() {
        assert!(WordIdentifier::classify("").is_err());
    }

    #[test]
    fn test_oversized_digit_string_is_still_an_id() {
        let id = WordIdentifier::classify("99999999999999999999999999").unwrap();
        assert!(matches!(id, WordIdentifier::Id(_)));
    }
}
