//! Neighbor aggregation.
//!
//! Normalizes a fetched word's raw edge data into a presentation-ready
//! structure: directed typed relations are merged across both directions and
//! grouped by relation type in first-seen order; undirected connections are
//! flattened and deduplicated by neighbor id. Truncation ("+N more") is a
//! presentation policy applied by the caller; the aggregator always exposes
//! the full ordered lists and counts.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::word::{Word, WordEntry, WordId};

/// List-context preview limit for undirected connections.
pub const LIST_PREVIEW_LIMIT: usize = 5;

/// Per-group preview limit in the compact typed-relation view.
pub const COMPACT_GROUP_LIMIT: usize = 3;

/// One aggregated neighbor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    /// Id of the neighboring word.
    pub id: WordId,
    /// Display label for the neighbor.
    pub label: String,
    /// Relation weight, when the edge carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Editorial comment, when the edge carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Neighbors of one relation type, in source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationGroup {
    /// The relation-type label, e.g. "stem".
    pub relation_type: String,
    /// Neighbor tuples in source order.
    pub neighbors: Vec<Neighbor>,
}

/// Presentation-ready neighbor set of a word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeighborSummary {
    /// Typed, directed relations grouped by relation type in first-seen
    /// order. Neighbors reachable through both directions appear once per
    /// direction, since the directions are semantically distinct.
    Typed(Vec<RelationGroup>),
    /// Undirected connections, deduplicated by neighbor id (first
    /// occurrence wins).
    Linked(Vec<Neighbor>),
}

impl NeighborSummary {
    /// Aggregates the neighbor data of a fetched word.
    ///
    /// Collection is a single pass over the record's own edge lists, so
    /// self-loops contribute one tuple per direction they appear in and can
    /// never expand further. A word with no edges yields empty groups/list.
    #[must_use]
    pub fn collect(word: &Word) -> Self {
        match &word.entry {
            WordEntry::Lexeme(entry) => {
                let mut groups: IndexMap<&str, Vec<Neighbor>> = IndexMap::new();
                let outbound = entry.relations_from.iter().map(|rel| {
                    (
                        rel.relation_type.as_str(),
                        Neighbor {
                            id: rel.to_word.id,
                            label: rel.to_word.lemma.clone(),
                            weight: rel.weight,
                            comment: rel.comment.clone(),
                        },
                    )
                });
                let inbound = entry.relations_to.iter().map(|rel| {
                    (
                        rel.relation_type.as_str(),
                        Neighbor {
                            id: rel.from_word.id,
                            label: rel.from_word.lemma.clone(),
                            weight: rel.weight,
                            comment: rel.comment.clone(),
                        },
                    )
                });
                for (relation_type, neighbor) in outbound.chain(inbound) {
                    groups.entry(relation_type).or_default().push(neighbor);
                }
                Self::Typed(
                    groups
                        .into_iter()
                        .map(|(relation_type, neighbors)| RelationGroup {
                            relation_type: relation_type.to_string(),
                            neighbors,
                        })
                        .collect(),
                )
            }
            WordEntry::Translation(entry) => {
                let mut seen = IndexSet::new();
                let mut neighbors = Vec::new();
                for connection in &entry.connections {
                    if seen.insert(connection.id) {
                        neighbors.push(Neighbor {
                            id: connection.id,
                            label: connection.label(),
                            weight: None,
                            comment: None,
                        });
                    }
                }
                Self::Linked(neighbors)
            }
        }
    }

    /// Total neighbor count across all groups.
    #[must_use]
    pub fn total(&self) -> usize {
        match self {
            Self::Typed(groups) => groups.iter().map(|group| group.neighbors.len()).sum(),
            Self::Linked(neighbors) => neighbors.len(),
        }
    }

    /// Returns true if the word has no neighbors at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// A truncated view over a neighbor list: the shown prefix plus how many
/// were hidden.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preview<'a> {
    /// The neighbors to show.
    pub shown: &'a [Neighbor],
    /// How many neighbors were hidden: `total - shown.len()`, never
    /// negative.
    pub more: usize,
}

/// Applies the display truncation policy to a neighbor list.
#[must_use]
pub fn preview(neighbors: &[Neighbor], limit: usize) -> Preview<'_> {
    let shown = &neighbors[..neighbors.len().min(limit)];
    Preview {
        shown,
        more: neighbors.len() - shown.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::{
        ConnectionRef, InboundRelation, LexemeEntry, OutboundRelation, TranslationEntry,
        WordRef,
    };

    fn bare_lexeme(lemma: &str) -> LexemeEntry {
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
        }
    }

    fn outbound(id: u64, relation_type: &str, to: (u64, &str)) -> OutboundRelation {
        OutboundRelation {
            id,
            relation_type: relation_type.to_string(),
            weight: None,
            comment: None,
            to_word: WordRef {
                id: WordId::new(to.0),
                lemma: to.1.to_string(),
            },
        }
    }

    fn inbound(id: u64, relation_type: &str, from: (u64, &str)) -> InboundRelation {
        InboundRelation {
            id,
            relation_type: relation_type.to_string(),
            weight: None,
            comment: None,
            from_word: WordRef {
                id: WordId::new(from.0),
                lemma: from.1.to_string(),
            },
        }
    }

    fn connection(id: u64, armenian: &str) -> ConnectionRef {
        ConnectionRef {
            id: WordId::new(id),
            original_word: None,
            armenian_word: Some(armenian.to_string()),
        }
    }

    #[test]
    fn test_groups_keep_first_seen_order() {
        let mut entry = bare_lexeme("տուն");
        entry.relations_from = vec![
            outbound(1, "stem", (2, "տան")),
            outbound(2, "derived", (6, "տնակ")),
            outbound(3, "stem", (4, "տներ")),
        ];
        let word = Word::lexeme(WordId::new(1), entry);

        let NeighborSummary::Typed(groups) = NeighborSummary::collect(&word) else {
            panic!("expected typed summary");
        };
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].relation_type, "stem");
        assert_eq!(groups[1].relation_type, "derived");
        assert_eq!(
            groups[0]
                .neighbors
                .iter()
                .map(|n| n.label.as_str())
                .collect::<Vec<_>>(),
            vec!["տան", "տներ"]
        );
    }

    #[test]
    fn test_both_directions_flatten_without_loss_or_duplication() {
        let mut entry = bare_lexeme("տնակ");
        entry.relations_to = vec![inbound(5, "derived", (1, "տուն"))];
        entry.relations_from = vec![outbound(7, "derived", (8, "տնակային"))];
        let word = Word::lexeme(WordId::new(6), entry);

        let summary = NeighborSummary::collect(&word);
        assert_eq!(summary.total(), 2);
        let NeighborSummary::Typed(groups) = summary else {
            panic!("expected typed summary");
        };
        // Outbound edges come first, then inbound, grouped under one label.
        assert_eq!(groups.len(), 1);
        assert_eq!(
            groups[0]
                .neighbors
                .iter()
                .map(|n| n.label.as_str())
                .collect::<Vec<_>>(),
            vec!["տնակային", "տուն"]
        );
    }

    #[test]
    fn test_same_neighbor_in_both_directions_is_kept_twice() {
        let mut entry = bare_lexeme("տուն");
        entry.relations_from = vec![outbound(1, "stem", (2, "տան"))];
        entry.relations_to = vec![inbound(9, "stem", (2, "տան"))];
        let word = Word::lexeme(WordId::new(1), entry);

        assert_eq!(NeighborSummary::collect(&word).total(), 2);
    }

    #[test]
    fn test_self_loop_contributes_one_tuple_per_direction() {
        let mut entry = bare_lexeme("տուն");
        entry.relations_from = vec![outbound(1, "stem", (1, "տուն"))];
        let word = Word::lexeme(WordId::new(1), entry);

        let summary = NeighborSummary::collect(&word);
        assert_eq!(summary.total(), 1);
    }

    #[test]
    fn test_connections_are_deduplicated_by_id() {
        let mut entry = TranslationEntry {
            original_word: "house".to_string(),
            original_language: None,
            armenian_word: Some("տուն".to_string()),
            original_example_sentence: None,
            armenian_example_sentence: None,
            author: None,
            translator: None,
            book: None,
            connections: Vec::new(),
        };
        entry.connections = vec![
            connection(102, "տուն"),
            connection(103, "տուն"),
            connection(102, "տուն"),
        ];
        let word = Word::translation(WordId::new(101), entry);

        let NeighborSummary::Linked(neighbors) = NeighborSummary::collect(&word) else {
            panic!("expected linked summary");
        };
        assert_eq!(neighbors.len(), 2);
        assert_eq!(neighbors[0].id, WordId::new(102));
        assert_eq!(neighbors[1].id, WordId::new(103));
    }

    #[test]
    fn test_no_edges_yields_empty_summary() {
        let word = Word::lexeme(WordId::new(1), bare_lexeme("տուն"));
        let summary = NeighborSummary::collect(&word);
        assert!(summary.is_empty());
        assert_eq!(summary.total(), 0);
    }

    #[test]
    fn test_preview_invariant() {
        let neighbors: Vec<Neighbor> = (0..7)
            .map(|i| Neighbor {
                id: WordId::new(i),
                label: format!("w{i}"),
                weight: None,
                comment: None,
            })
            .collect();

        let truncated = preview(&neighbors, LIST_PREVIEW_LIMIT);
        assert_eq!(truncated.shown.len(), 5);
        assert_eq!(truncated.more, 2);
        assert_eq!(truncated.shown.len() + truncated.more, neighbors.len());

        let all = preview(&neighbors, 100);
        assert_eq!(all.shown.len(), 7);
        assert_eq!(all.more, 0);
    }

    #[test]
    fn test_weight_and_comment_carry_through() {
        let mut entry = bare_lexeme("տուն");
        entry.relations_from = vec![OutboundRelation {
            id: 1,
            relation_type: "stem".to_string(),
            weight: Some(0.9),
            comment: Some("Genitive form".to_string()),
            to_word: WordRef {
                id: WordId::new(2),
                lemma: "տան".to_string(),
            },
        }];
        let word = Word::lexeme(WordId::new(1), entry);

        let NeighborSummary::Typed(groups) = NeighborSummary::collect(&word) else {
            panic!("expected typed summary");
        };
        assert_eq!(groups[0].neighbors[0].weight, Some(0.9));
        assert_eq!(
            groups[0].neighbors[0].comment.as_deref(),
            Some("Genitive form")
        );
    }
}
