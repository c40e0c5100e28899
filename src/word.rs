//! Word records and their relation/connection sub-records.
//!
//! The store carries two generations of word records in one collection: the
//! early lexeme schema (a lemma with typed, directed relations to other
//! lemmas) and the later translation schema (an original/Armenian word pair
//! with undirected connections to its cross-language equivalents). Both are
//! modeled as payload variants of a single [`Word`], dispatched on which
//! required field the record carries.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// The store serializes absent relation lists as `null`; read them as
/// empty.
fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Opaque numeric word identifier, unique within the store.
///
/// Identity is stable across requests within a session. Textual keys
/// (`lemma`, `originalWord`, `armenianWord`) are not guaranteed unique; only
/// the id is.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct WordId(u64);

impl WordId {
    /// Creates a word id from its raw store value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw numeric value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for WordId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// A language attached to a lexeme record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageRef {
    /// Human-readable language name, e.g. "Armenian".
    pub name: String,
    /// ISO-ish language code, e.g. "hy".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// A named reference entity (author or translator). Only the name is
/// populated in list views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    /// Display name.
    pub name: String,
}

/// A book reference. Only the title is populated in list views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRef {
    /// Book title.
    pub title: String,
}

/// Minimal embedded word reference inside a relation edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRef {
    /// Id of the referenced word.
    pub id: WordId,
    /// Its lemma, for display without a second fetch.
    pub lemma: String,
}

/// A directed relation edge leaving the fetched word (`word -> to_word`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutboundRelation {
    /// Id of the relation record itself.
    pub id: u64,
    /// Free-text relation label, e.g. "stem" or "derived".
    pub relation_type: String,
    /// Optional relation strength.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Optional editorial comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// The neighbor the edge points to.
    pub to_word: WordRef,
}

/// A directed relation edge arriving at the fetched word (`from_word -> word`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InboundRelation {
    /// Id of the relation record itself.
    pub id: u64,
    /// Free-text relation label, e.g. "stem" or "derived".
    pub relation_type: String,
    /// Optional relation strength.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Optional editorial comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// The neighbor the edge comes from.
    pub from_word: WordRef,
}

/// Minimal embedded reference to a connected word (translation schema).
///
/// Connections are stored as plain reference lists on each participant; the
/// store does not enforce symmetry, so either display field may be absent on
/// sparsely populated records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionRef {
    /// Id of the connected word.
    pub id: WordId,
    /// Its original-language form, if populated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_word: Option<String>,
    /// Its Armenian form, if populated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub armenian_word: Option<String>,
}

impl ConnectionRef {
    /// Display label for a connection: the Armenian form, falling back to
    /// the original form, falling back to the id.
    #[must_use]
    pub fn label(&self) -> String {
        self.armenian_word
            .clone()
            .or_else(|| self.original_word.clone())
            .unwrap_or_else(|| self.id.to_string())
    }
}

/// Lexeme-schema payload: a lemma with derivational metadata and typed,
/// directed relations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexemeEntry {
    /// Canonical dictionary form; the primary search key.
    pub lemma: String,
    /// Part-of-speech label, e.g. "noun".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,
    /// Lemma segment annotation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lemma_part: Option<String>,
    /// Affix annotation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affix: Option<String>,
    /// Affix number annotation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affix_number: Option<String>,
    /// Affix type annotation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affix_type: Option<String>,
    /// Root annotation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    /// Root number annotation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_number: Option<String>,
    /// Stem annotation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stem: Option<String>,
    /// Ordinal annotation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordinal: Option<String>,
    /// Free-form notes (may contain markup; rendering is the presenter's
    /// concern).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// The lemma's language, when populated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<LanguageRef>,
    /// Edges leaving this word.
    #[serde(
        default,
        deserialize_with = "null_to_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub relations_from: Vec<OutboundRelation>,
    /// Edges arriving at this word.
    #[serde(
        default,
        deserialize_with = "null_to_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub relations_to: Vec<InboundRelation>,
}

/// Translation-schema payload: an original/Armenian word pair with
/// provenance metadata and undirected connections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationEntry {
    /// The word in its source language; the primary search key.
    pub original_word: String,
    /// Name of the source language, e.g. "en".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_language: Option<String>,
    /// The Armenian equivalent; the secondary search key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub armenian_word: Option<String>,
    /// Example sentence in the source language.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_example_sentence: Option<String>,
    /// Example sentence in Armenian.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub armenian_example_sentence: Option<String>,
    /// Author of the source text, when populated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<NamedRef>,
    /// Translator, when populated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translator: Option<NamedRef>,
    /// Source book, when populated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book: Option<BookRef>,
    /// Undirected connections to cross-language equivalents.
    #[serde(
        default,
        deserialize_with = "null_to_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub connections: Vec<ConnectionRef>,
}

/// The schema-variant payload of a word record.
///
/// Deserialization dispatches on the required field: records carrying
/// `lemma` are lexemes, records carrying `originalWord` are translation
/// pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WordEntry {
    /// Early schema: lemma + typed relations.
    Lexeme(LexemeEntry),
    /// Later schema: original/Armenian pair + connections.
    Translation(TranslationEntry),
}

impl WordEntry {
    /// Returns the lexeme payload, if this is a lexeme record.
    #[must_use]
    pub const fn as_lexeme(&self) -> Option<&LexemeEntry> {
        match self {
            Self::Lexeme(entry) => Some(entry),
            Self::Translation(_) => None,
        }
    }

    /// Returns the translation payload, if this is a translation record.
    #[must_use]
    pub const fn as_translation(&self) -> Option<&TranslationEntry> {
        match self {
            Self::Translation(entry) => Some(entry),
            Self::Lexeme(_) => None,
        }
    }
}

/// A word record as returned by the content store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    /// Store-assigned numeric id.
    pub id: WordId,
    /// When the record was created, if the store returned it.
    #[serde(
        default,
        rename = "createdAt",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    /// When the record was last updated, if the store returned it.
    #[serde(
        default,
        rename = "updatedAt",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
    /// Schema-variant payload.
    #[serde(flatten)]
    pub entry: WordEntry,
}

impl Word {
    /// Creates a lexeme-schema word.
    #[must_use]
    pub fn lexeme(id: WordId, entry: LexemeEntry) -> Self {
        Self {
            id,
            created_at: None,
            updated_at: None,
            entry: WordEntry::Lexeme(entry),
        }
    }

    /// Creates a translation-schema word.
    #[must_use]
    pub fn translation(id: WordId, entry: TranslationEntry) -> Self {
        Self {
            id,
            created_at: None,
            updated_at: None,
            entry: WordEntry::Translation(entry),
        }
    }

    /// Primary display label: the lemma for lexemes, the Armenian form
    /// (falling back to the original form) for translation pairs.
    #[must_use]
    pub fn display_label(&self) -> &str {
        match &self.entry {
            WordEntry::Lexeme(entry) => &entry.lemma,
            WordEntry::Translation(entry) => entry
                .armenian_word
                .as_deref()
                .unwrap_or(&entry.original_word),
        }
    }

    /// Returns true if this record predates the translation schema.
    #[must_use]
    pub const fn is_lexeme(&self) -> bool {
        matches!(self.entry, WordEntry::Lexeme(_))
    }

    /// Returns true if this is a translation-schema record.
    #[must_use]
    pub const fn is_translation(&self) -> bool {
        matches!(self.entry, WordEntry::Translation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexeme_json() -> &'static str {
        r#"{
            "id": 1,
            "lemma": "տուն",
            "part_of_speech": "noun",
            "language": { "name": "Armenian", "code": "hy" },
            "relations_from": [
                {
                    "id": 10,
                    "relation_type": "stem",
                    "comment": "Genitive form",
                    "to_word": { "id": 2, "lemma": "տան" }
                }
            ]
        }"#
    }

    fn translation_json() -> &'static str {
        r#"{
            "id": 101,
            "originalWord": "house",
            "originalLanguage": "en",
            "armenianWord": "տուն",
            "book": { "title": "Readings" },
            "connections": [
                { "id": 102, "originalWord": "home", "armenianWord": "տուն" }
            ]
        }"#
    }

    #[test]
    fn test_lexeme_deserializes_as_lexeme_variant() {
        let word: Word = serde_json::from_str(lexeme_json()).unwrap();
        assert_eq!(word.id, WordId::new(1));
        let entry = word.entry.as_lexeme().expect("lexeme variant");
        assert_eq!(entry.lemma, "տուն");
        assert_eq!(entry.part_of_speech.as_deref(), Some("noun"));
        assert_eq!(entry.relations_from.len(), 1);
        assert_eq!(entry.relations_from[0].to_word.lemma, "տան");
        assert_eq!(word.display_label(), "տուն");
    }

    #[test]
    fn test_translation_deserializes_as_translation_variant() {
        let word: Word = serde_json::from_str(translation_json()).unwrap();
        assert_eq!(word.id, WordId::new(101));
        let entry = word.entry.as_translation().expect("translation variant");
        assert_eq!(entry.original_word, "house");
        assert_eq!(entry.armenian_word.as_deref(), Some("տուն"));
        assert_eq!(entry.connections.len(), 1);
        assert_eq!(entry.connections[0].id, WordId::new(102));
        assert_eq!(word.display_label(), "տուն");
    }

    #[test]
    fn test_display_label_falls_back_to_original_word() {
        let word: Word = serde_json::from_str(
            r#"{ "id": 7, "originalWord": "maison" }"#,
        )
        .unwrap();
        assert_eq!(word.display_label(), "maison");
    }

    #[test]
    fn test_connection_label_fallback_chain() {
        let full = ConnectionRef {
            id: WordId::new(1),
            original_word: Some("home".into()),
            armenian_word: Some("տուն".into()),
        };
        assert_eq!(full.label(), "տուն");

        let original_only = ConnectionRef {
            id: WordId::new(2),
            original_word: Some("home".into()),
            armenian_word: None,
        };
        assert_eq!(original_only.label(), "home");

        let bare = ConnectionRef {
            id: WordId::new(3),
            original_word: None,
            armenian_word: None,
        };
        assert_eq!(bare.label(), "3");
    }

    #[test]
    fn test_word_roundtrip() {
        let word: Word = serde_json::from_str(translation_json()).unwrap();
        let json = serde_json::to_string(&word).unwrap();
        let back: Word = serde_json::from_str(&json).unwrap();
        assert_eq!(word, back);
    }

    #[test]
    fn test_null_edge_lists_read_as_empty() {
        let word: Word = serde_json::from_str(
            r#"{ "id": 9, "originalWord": "roof", "connections": null }"#,
        )
        .unwrap();
        let entry = word.entry.as_translation().expect("translation variant");
        assert!(entry.connections.is_empty());

        let word: Word = serde_json::from_str(
            r#"{ "id": 10, "lemma": "տանիք", "relations_from": null, "relations_to": null }"#,
        )
        .unwrap();
        let entry = word.entry.as_lexeme().expect("lexeme variant");
        assert!(entry.relations_from.is_empty());
        assert!(entry.relations_to.is_empty());
    }

    #[test]
    fn test_timestamps_are_optional() {
        let word: Word = serde_json::from_str(
            r#"{
                "id": 5,
                "lemma": "տներ",
                "createdAt": "2024-03-01T12:00:00Z"
            }"#,
        )
        .unwrap();
        assert!(word.created_at.is_some());
        assert!(word.updated_at.is_none());
    }
}
