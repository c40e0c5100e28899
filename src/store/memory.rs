//! In-memory content-store backend.
//!
//! Thread-safe reference implementation of [`ContentStore`]: records live in
//! an id-ordered map behind an `RwLock`, and filters are interpreted
//! directly instead of being rendered to the wire. Records are stored fully
//! populated, so population directives are satisfied trivially. Used by the
//! seeded demo corpus and the end-to-end tests.

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::query::{Populate, WordQuery};
use crate::store::{ContentStore, StoreError};
use crate::word::{Word, WordId};

fn lock_err(context: &'static str) -> StoreError {
    StoreError::Backend(format!("poisoned lock: {context}"))
}

/// Thread-safe in-memory word store.
///
/// Store-assigned order is ascending id order, which is also the order
/// search results are returned in.
#[derive(Debug, Default)]
pub struct MemoryStore {
    words: RwLock<BTreeMap<WordId, Word>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record. Only seeding writes to the store; the lookup core
    /// never does.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateId`] if the id is already present.
    pub fn insert(&self, word: Word) -> Result<(), StoreError> {
        let mut words = self.words.write().map_err(|_| lock_err("insert"))?;
        if words.contains_key(&word.id) {
            return Err(StoreError::DuplicateId(word.id));
        }
        words.insert(word.id, word);
        Ok(())
    }

    /// Number of stored records.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the lock is poisoned.
    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.words.read().map_err(|_| lock_err("len"))?.len())
    }

    /// Returns true if the store holds no records.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the lock is poisoned.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    /// Returns true if a record with this id is present.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the lock is poisoned.
    pub fn contains(&self, id: WordId) -> Result<bool, StoreError> {
        Ok(self
            .words
            .read()
            .map_err(|_| lock_err("contains"))?
            .contains_key(&id))
    }

    /// Records that predate the translation schema: lexeme records in a
    /// store that already carries translation records.
    ///
    /// The upstream cleanup job deletes these; the lookup core never
    /// mutates the store, so they are surfaced as a read-only audit
    /// instead.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the lock is poisoned.
    pub fn legacy_records(&self) -> Result<Vec<Word>, StoreError> {
        let words = self.words.read().map_err(|_| lock_err("legacy_records"))?;
        if !words.values().any(Word::is_translation) {
            return Ok(Vec::new());
        }
        Ok(words
            .values()
            .filter(|word| word.is_lexeme())
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn search(&self, query: &WordQuery) -> Result<Vec<Word>, StoreError> {
        let words = self.words.read().map_err(|_| lock_err("search"))?;
        Ok(words
            .values()
            .filter(|word| query.filter.matches(word))
            .cloned()
            .collect())
    }

    async fn fetch_by_id(
        &self,
        id: WordId,
        _populate: Populate,
    ) -> Result<Option<Word>, StoreError> {
        let words = self.words.read().map_err(|_| lock_err("fetch_by_id"))?;
        Ok(words.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{SchemaVariant, WordQuery};
    use crate::word::{LexemeEntry, TranslationEntry};

    fn lexeme(id: u64, lemma: &str) -> Word {
        Word::lexeme(
            WordId::new(id),
            LexemeEntry {
                lemma: lemma.to_string(),
                part_of_speech: None,
                lemma_part: None,
                affix: None,
                affix_number: None,
                affix_type: None,
                root: None,
                root_number: None,
                stem: None,
                ordinal: None,
                notes: None,
                language: None,
                relations_from: Vec::new(),
                relations_to: Vec::new(),
            },
        )
    }

    fn translation(id: u64, original: &str) -> Word {
        Word::translation(
            WordId::new(id),
            TranslationEntry {
                original_word: original.to_string(),
                original_language: None,
                armenian_word: None,
                original_example_sentence: None,
                armenian_example_sentence: None,
                author: None,
                translator: None,
                book: None,
                connections: Vec::new(),
            },
        )
    }

    #[tokio::test]
    async fn test_search_returns_matches_in_id_order() {
        let store = MemoryStore::new();
        store.insert(lexeme(3, "տներ")).unwrap();
        store.insert(lexeme(1, "տուն")).unwrap();
        store.insert(lexeme(2, "տան")).unwrap();

        let query = WordQuery::search(SchemaVariant::Lexical, "տ").unwrap();
        let hits = store.search(&query).await.unwrap();
        let ids: Vec<u64> = hits.iter().map(|w| w.id.as_u64()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_fetch_by_id_misses_return_none() {
        let store = MemoryStore::new();
        store.insert(lexeme(1, "տուն")).unwrap();

        let hit = store
            .fetch_by_id(WordId::new(1), Populate::Detail)
            .await
            .unwrap();
        assert!(hit.is_some());

        let miss = store
            .fetch_by_id(WordId::new(99), Populate::Detail)
            .await
            .unwrap();
        assert!(miss.is_none());
    }

    #[test]
    fn test_duplicate_insert_is_rejected() {
        let store = MemoryStore::new();
        store.insert(lexeme(1, "տուն")).unwrap();
        let err = store.insert(lexeme(1, "տան")).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId(id) if id == WordId::new(1)));
    }

    #[test]
    fn test_legacy_records_need_translation_era() {
        let store = MemoryStore::new();
        store.insert(lexeme(1, "տուն")).unwrap();
        // Lexeme-only store: nothing is legacy yet.
        assert!(store.legacy_records().unwrap().is_empty());

        store.insert(translation(101, "house")).unwrap();
        let legacy = store.legacy_records().unwrap();
        assert_eq!(legacy.len(), 1);
        assert_eq!(legacy[0].id, WordId::new(1));
    }
}
