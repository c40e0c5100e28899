//! Demo/bootstrap corpus for the in-memory store.
//!
//! Mirrors the content store's bootstrap data: an Armenian lexeme graph
//! around տուն and a translation-pair corpus around house/տուն. Both
//! seeders are idempotent: a store that already holds records is left
//! untouched.

use crate::store::{MemoryStore, StoreError};
use crate::word::{
    BookRef, ConnectionRef, InboundRelation, LanguageRef, LexemeEntry, NamedRef,
    OutboundRelation, TranslationEntry, Word, WordId, WordRef,
};

fn lexeme_entry(lemma: &str, part_of_speech: &str, notes: &str) -> LexemeEntry {
    LexemeEntry {
        lemma: lemma.to_string(),
        part_of_speech: Some(part_of_speech.to_string()),
        lemma_part: None,
        affix: None,
        affix_number: None,
        affix_type: None,
        root: None,
        root_number: None,
        stem: None,
        ordinal: None,
        notes: Some(notes.to_string()),
        language: Some(LanguageRef {
            name: "Armenian".to_string(),
            code: Some("hy".to_string()),
        }),
        relations_from: Vec::new(),
        relations_to: Vec::new(),
    }
}

fn outbound(
    id: u64,
    relation_type: &str,
    comment: &str,
    to: (u64, &str),
) -> OutboundRelation {
    OutboundRelation {
        id,
        relation_type: relation_type.to_string(),
        weight: None,
        comment: Some(comment.to_string()),
        to_word: WordRef {
            id: WordId::new(to.0),
            lemma: to.1.to_string(),
        },
    }
}

fn inbound(
    id: u64,
    relation_type: &str,
    comment: &str,
    from: (u64, &str),
) -> InboundRelation {
    InboundRelation {
        id,
        relation_type: relation_type.to_string(),
        weight: None,
        comment: Some(comment.to_string()),
        from_word: WordRef {
            id: WordId::new(from.0),
            lemma: from.1.to_string(),
        },
    }
}

/// Seeds the lexeme graph: տուն with its stem forms (տան, տանը, տներ,
/// տներում) and derived forms (տնակ, տնային), plus տնակ → տնակային.
///
/// Relation edges are stored pre-populated on both endpoints, the way the
/// store returns them to list/detail views.
///
/// # Errors
///
/// Propagates [`StoreError`] from the underlying store.
pub fn seed_lexemes(store: &MemoryStore) -> Result<(), StoreError> {
    if !store.is_empty()? {
        return Ok(());
    }

    let mut tun = lexeme_entry("տուն", "noun", "A dwelling place, home");
    let mut tan = lexeme_entry("տան", "noun", "Genitive form of տուն");
    let mut tany = lexeme_entry("տանը", "noun", "Definite form of տան");
    let mut tner = lexeme_entry("տներ", "noun", "Plural form of տուն");
    let mut tnerum = lexeme_entry("տներում", "noun", "Locative plural form of տուն");
    let mut tnak = lexeme_entry("տնակ", "noun", "Diminutive form of տուն");
    let mut tnayin = lexeme_entry("տնային", "adjective", "Adjective form of տուն");
    let mut tnakayin =
        lexeme_entry("տնակային", "adjective", "Adjective form of տնակ");

    tun.relations_from = vec![
        outbound(1, "stem", "Genitive form", (2, "տան")),
        outbound(2, "stem", "Definite genitive form", (3, "տանը")),
        outbound(3, "stem", "Plural form", (4, "տներ")),
        outbound(4, "stem", "Locative plural form", (5, "տներում")),
        outbound(5, "derived", "Diminutive form", (6, "տնակ")),
        outbound(6, "derived", "Adjective form", (7, "տնային")),
    ];
    tan.relations_to = vec![inbound(1, "stem", "Genitive form", (1, "տուն"))];
    tany.relations_to = vec![inbound(2, "stem", "Definite genitive form", (1, "տուն"))];
    tner.relations_to = vec![inbound(3, "stem", "Plural form", (1, "տուն"))];
    tnerum.relations_to = vec![inbound(4, "stem", "Locative plural form", (1, "տուն"))];
    tnak.relations_to = vec![inbound(5, "derived", "Diminutive form", (1, "տուն"))];
    tnak.relations_from = vec![outbound(
        7,
        "derived",
        "Adjective form of diminutive",
        (8, "տնակային"),
    )];
    tnayin.relations_to = vec![inbound(6, "derived", "Adjective form", (1, "տուն"))];
    tnakayin.relations_to = vec![inbound(
        7,
        "derived",
        "Adjective form of diminutive",
        (6, "տնակ"),
    )];

    let words = [
        (1, tun),
        (2, tan),
        (3, tany),
        (4, tner),
        (5, tnerum),
        (6, tnak),
        (7, tnayin),
        (8, tnakayin),
    ];
    for (id, entry) in words {
        store.insert(Word::lexeme(WordId::new(id), entry))?;
    }
    Ok(())
}

fn translation_entry(
    original_word: &str,
    original_language: &str,
    armenian_word: &str,
) -> TranslationEntry {
    TranslationEntry {
        original_word: original_word.to_string(),
        original_language: Some(original_language.to_string()),
        armenian_word: Some(armenian_word.to_string()),
        original_example_sentence: None,
        armenian_example_sentence: None,
        author: None,
        translator: None,
        book: None,
        connections: Vec::new(),
    }
}

fn connection(id: u64, original: &str, armenian: &str) -> ConnectionRef {
    ConnectionRef {
        id: WordId::new(id),
        original_word: Some(original.to_string()),
        armenian_word: Some(armenian.to_string()),
    }
}

/// Seeds the translation-pair corpus: house/տուն connected to its
/// cross-language equivalents home, дом and maison.
///
/// Connections are kept symmetric here, though the model tolerates
/// asymmetric data.
///
/// # Errors
///
/// Propagates [`StoreError`] from the underlying store.
pub fn seed_translations(store: &MemoryStore) -> Result<(), StoreError> {
    if store.contains(WordId::new(101))? {
        return Ok(());
    }

    let mut house = translation_entry("house", "en", "տուն");
    house.original_example_sentence = Some("The house stands on a hill.".to_string());
    house.armenian_example_sentence = Some("Տունը բլրի վրա է կանգնած։".to_string());
    house.author = Some(NamedRef {
        name: "Hovhannes Tumanyan".to_string(),
    });
    house.translator = Some(NamedRef {
        name: "Anahit Sahakyan".to_string(),
    });
    house.book = Some(BookRef {
        title: "Selected Readings".to_string(),
    });
    house.connections = vec![
        connection(102, "home", "տուն"),
        connection(103, "дом", "տուն"),
        connection(104, "maison", "տուն"),
    ];

    let mut home = translation_entry("home", "en", "տուն");
    home.connections = vec![connection(101, "house", "տուն")];

    let mut dom = translation_entry("дом", "ru", "տուն");
    dom.connections = vec![connection(101, "house", "տուն")];

    let mut maison = translation_entry("maison", "fr", "տուն");
    maison.connections = vec![connection(101, "house", "տուն")];

    let words = [(101, house), (102, home), (103, dom), (104, maison)];
    for (id, entry) in words {
        store.insert(Word::translation(WordId::new(id), entry))?;
    }
    Ok(())
}

/// Seeds both corpora into one store: the legacy lexeme graph alongside the
/// translation pairs, the mixed state the audit view exists for.
///
/// # Errors
///
/// Propagates [`StoreError`] from the underlying store.
pub fn seed_all(store: &MemoryStore) -> Result<(), StoreError> {
    seed_lexemes(store)?;
    seed_translations(store)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_lexemes_is_idempotent() {
        let store = MemoryStore::new();
        seed_lexemes(&store).unwrap();
        let count = store.len().unwrap();
        seed_lexemes(&store).unwrap();
        assert_eq!(store.len().unwrap(), count);
        assert_eq!(count, 8);
    }

    #[test]
    fn test_seed_translations_is_idempotent() {
        let store = MemoryStore::new();
        seed_translations(&store).unwrap();
        let count = store.len().unwrap();
        seed_translations(&store).unwrap();
        assert_eq!(store.len().unwrap(), count);
        assert_eq!(count, 4);
    }

    #[test]
    fn test_seed_all_produces_mixed_store() {
        let store = MemoryStore::new();
        seed_all(&store).unwrap();
        assert_eq!(store.len().unwrap(), 12);
        assert_eq!(store.legacy_records().unwrap().len(), 8);
    }
}
