//! Content name extraction from utterances.
//!
//! The dialogue manager tags a span of the utterance (usually the word that
//! introduces the name, such as "song" or "playlist") and the name itself is
//! whatever follows. This is a text-slicing heuristic, not a parser, so it sits
//! behind [`ContentExtractor`] and the playback code never looks at offsets.

use crate::types::{Entity, Utterance};

/// Entity type the generic content intent tags names with.
pub const CONTENT_NAME_ENTITY: &str = "name_content";

/// Pulls the name of the requested content out of an utterance.
pub trait ContentExtractor {
    /// Returns `None` when nothing usable is left after slicing.
    fn extract(&self, utterance: &Utterance) -> Option<String>;
}

/// Which edge of the tagged span the name starts at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanEdge {
    /// Text after the entity, e.g. "play song *imagine*".
    End,
    /// Text from the entity onward, for when the entity already covers the name.
    Start,
}

/// Slices relative to the first entity of the utterance.
#[derive(Debug, Clone, Copy)]
pub struct EntitySpan {
    pub edge: SpanEdge,
}

impl EntitySpan {
    pub fn after_end() -> Self {
        EntitySpan { edge: SpanEdge::End }
    }

    pub fn from_start() -> Self {
        EntitySpan {
            edge: SpanEdge::Start,
        }
    }
}

impl ContentExtractor for EntitySpan {
    fn extract(&self, utterance: &Utterance) -> Option<String> {
        let raw = match utterance.entities.first() {
            Some(entity) => slice_at_entity(&utterance.text, entity, self.edge)
                .unwrap_or_else(|| drop_first_word(&utterance.text)),
            None => drop_first_word(&utterance.text),
        };
        non_empty(raw)
    }
}

/// Looks for an entity of a given type among all entities and slices from its
/// start; without one, the first word of the utterance is dropped.
#[derive(Debug, Clone)]
pub struct NamedEntity {
    pub entity_type: String,
}

impl NamedEntity {
    pub fn content_name() -> Self {
        NamedEntity {
            entity_type: CONTENT_NAME_ENTITY.to_string(),
        }
    }
}

impl ContentExtractor for NamedEntity {
    fn extract(&self, utterance: &Utterance) -> Option<String> {
        let raw = utterance
            .entities
            .iter()
            .find(|e| e.entity == self.entity_type)
            .and_then(|e| slice_at_entity(&utterance.text, e, SpanEdge::Start))
            .unwrap_or_else(|| drop_first_word(&utterance.text));
        non_empty(raw)
    }
}

/// Slices the text at one edge of the entity and strips one leading separator.
///
/// Falls back to the other edge when the requested offset is missing; returns
/// `None` only when the entity carries no offsets at all.
pub fn slice_at_entity(text: &str, entity: &Entity, edge: SpanEdge) -> Option<String> {
    let offset = match edge {
        SpanEdge::End => entity.end.or(entity.start)?,
        SpanEdge::Start => entity.start.or(entity.end)?,
    };
    Some(strip_one_separator(&slice_chars_from(text, offset)).to_string())
}

/// Everything from the `offset`-th character on. Offsets past the end yield "".
pub fn slice_chars_from(text: &str, offset: usize) -> String {
    text.chars().skip(offset).collect()
}

/// Removes exactly one leading whitespace character, if there is one.
pub fn strip_one_separator(text: &str) -> &str {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_whitespace() => chars.as_str(),
        _ => text,
    }
}

/// Drops the first space-delimited token: "play imagine dragons" -> "imagine dragons".
pub fn drop_first_word(text: &str) -> String {
    text.split(' ').skip(1).collect::<Vec<_>>().join(" ")
}

fn non_empty(raw: String) -> Option<String> {
    if raw.trim().is_empty() { None } else { Some(raw) }
}

