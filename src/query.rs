//! Search-query construction.
//!
//! A [`WordQuery`] is the opaque request descriptor handed to the content
//! store: a filter expression over the schema's text fields plus a
//! population directive naming which related entities must be embedded in
//! the response. The same [`Filter`] renders to the store's bracketed
//! query-string dialect and evaluates directly against in-memory records,
//! so both backends share one query definition.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::word::{Word, WordEntry};

/// Which generation of the word schema a search targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaVariant {
    /// Early schema: search over `lemma`.
    Lexical,
    /// Later schema: search over `originalWord` OR `armenianWord`.
    Translation,
}

/// A searchable/filterable text field of a word record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextField {
    /// Lexeme-schema primary key field.
    Lemma,
    /// Translation-schema primary key field.
    OriginalWord,
    /// Translation-schema secondary key field.
    ArmenianWord,
}

impl TextField {
    /// The field name as the store spells it.
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Lemma => "lemma",
            Self::OriginalWord => "originalWord",
            Self::ArmenianWord => "armenianWord",
        }
    }

    /// Extracts this field's value from a record, if the record's schema
    /// carries it.
    #[must_use]
    pub fn value_of(self, word: &Word) -> Option<&str> {
        match (self, &word.entry) {
            (Self::Lemma, WordEntry::Lexeme(entry)) => Some(&entry.lemma),
            (Self::OriginalWord, WordEntry::Translation(entry)) => {
                Some(&entry.original_word)
            }
            (Self::ArmenianWord, WordEntry::Translation(entry)) => {
                entry.armenian_word.as_deref()
            }
            _ => None,
        }
    }
}

/// A store filter expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    /// Case-insensitive substring containment.
    Contains {
        /// Field to match against.
        field: TextField,
        /// Needle; matching is containment, not prefix or fuzzy.
        value: String,
    },
    /// Exact equality.
    Equals {
        /// Field to match against.
        field: TextField,
        /// Expected value.
        value: String,
    },
    /// Any branch matches.
    Or(Vec<Filter>),
}

impl Filter {
    /// Evaluates the filter against a record.
    ///
    /// Containment is case-insensitive (Unicode lowercasing, which also
    /// folds Armenian script); equality is exact. A field absent from the
    /// record's schema never matches.
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        match self {
            Self::Contains { field, value } => field.value_of(word).is_some_and(|actual| {
                actual.to_lowercase().contains(&value.to_lowercase())
            }),
            Self::Equals { field, value } => {
                field.value_of(word).is_some_and(|actual| actual == value)
            }
            Self::Or(branches) => branches.iter().any(|branch| branch.matches(word)),
        }
    }

    fn append_pairs(&self, prefix: &str, out: &mut Vec<(String, String)>) {
        match self {
            Self::Contains { field, value } => out.push((
                format!("{prefix}[{}][$contains]", field.wire_name()),
                value.clone(),
            )),
            Self::Equals { field, value } => out.push((
                format!("{prefix}[{}][$eq]", field.wire_name()),
                value.clone(),
            )),
            Self::Or(branches) => {
                for (index, branch) in branches.iter().enumerate() {
                    branch.append_pairs(&format!("{prefix}[$or][{index}]"), out);
                }
            }
        }
    }

    /// Renders the filter into the store's bracketed query pairs, rooted at
    /// `filters`.
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        self.append_pairs("filters", &mut out);
        out
    }
}

/// A static population directive: which related entities/fields the store
/// must embed in the response. Shapes are versioned per view; list views
/// embed only what list rendering needs, detail views embed everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Populate {
    /// Lexical list view: language plus both relation directions with their
    /// endpoint words.
    LexemeList,
    /// Translation list view: author/translator/book display names only,
    /// plus connections with id and both display-word fields.
    TranslationList,
    /// Detail view: everything.
    Detail,
}

impl Populate {
    /// Renders the directive into query pairs.
    #[must_use]
    pub fn to_query_pairs(self) -> Vec<(String, String)> {
        let owned = |pairs: &[(&str, &str)]| {
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect()
        };
        match self {
            Self::LexemeList => owned(&[
                ("populate[language]", "true"),
                ("populate[relations_from][populate][to_word]", "true"),
                ("populate[relations_to][populate][from_word]", "true"),
            ]),
            Self::TranslationList => owned(&[
                ("populate[author][fields][0]", "name"),
                ("populate[translator][fields][0]", "name"),
                ("populate[book][fields][0]", "title"),
                ("populate[connections][fields][0]", "id"),
                ("populate[connections][fields][1]", "originalWord"),
                ("populate[connections][fields][2]", "armenianWord"),
            ]),
            Self::Detail => owned(&[("populate", "*")]),
        }
    }

    /// The list-view directive for a schema variant.
    #[must_use]
    pub const fn list_view(schema: SchemaVariant) -> Self {
        match schema {
            SchemaVariant::Lexical => Self::LexemeList,
            SchemaVariant::Translation => Self::TranslationList,
        }
    }
}

/// Opaque request descriptor consumable by a content store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordQuery {
    /// Correlation id for tracing; fresh per request.
    pub request_id: Uuid,
    /// Filter expression.
    pub filter: Filter,
    /// Population directive.
    pub populate: Populate,
}

impl WordQuery {
    /// Builds the search query for a trimmed, non-empty user query string:
    /// an OR-combined case-insensitive substring filter over the schema's
    /// primary/secondary text fields, with the list-view population shape.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyQuery`] for empty or whitespace-only
    /// input; callers should suppress the request instead of issuing one.
    pub fn search(schema: SchemaVariant, query: &str) -> Result<Self, ValidationError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ValidationError::EmptyQuery);
        }

        let filter = match schema {
            SchemaVariant::Lexical => Filter::Contains {
                field: TextField::Lemma,
                value: query.to_string(),
            },
            SchemaVariant::Translation => Filter::Or(vec![
                Filter::Contains {
                    field: TextField::OriginalWord,
                    value: query.to_string(),
                },
                Filter::Contains {
                    field: TextField::ArmenianWord,
                    value: query.to_string(),
                },
            ]),
        };

        Ok(Self {
            request_id: Uuid::new_v4(),
            filter,
            populate: Populate::list_view(schema),
        })
    }

    /// Builds the textual-key lookup query: an exact-equality OR filter
    /// across `originalWord` and `armenianWord`, with the detail population
    /// shape.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyIdentifier`] for empty input.
    pub fn exact_key(key: &str) -> Result<Self, ValidationError> {
        if key.is_empty() {
            return Err(ValidationError::EmptyIdentifier);
        }

        Ok(Self {
            request_id: Uuid::new_v4(),
            filter: Filter::Or(vec![
                Filter::Equals {
                    field: TextField::OriginalWord,
                    value: key.to_string(),
                },
                Filter::Equals {
                    field: TextField::ArmenianWord,
                    value: key.to_string(),
                },
            ]),
            populate: Populate::Detail,
        })
    }

    /// Renders filter and population directive into one query-pair list.
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = self.filter.to_query_pairs();
        pairs.extend(self.populate.to_query_pairs());
        pairs
    }
}
