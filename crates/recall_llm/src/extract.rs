//! Flashcard extractor: strict JSON, then bracketed-array search, then a single
//! fallback record. Never fails.

use regex::Regex;
use serde_json::Value;

use crate::types::Flashcard;

/// Question used for the fallback record when no array can be extracted.
pub const FALLBACK_QUESTION: &str = "Summary";

/// Fallback answers are capped to this many characters.
pub const FALLBACK_ANSWER_MAX_CHARS: usize = 2000;

lazy_static::lazy_static! {
    // First `[` to last `]`, across lines.
    static ref BRACKETED_ARRAY: Regex = Regex::new(r"(?s)\[.*\]").unwrap();
}

/// Turn raw model output into flashcards. `batch_stamp` prefixes every id in
/// this batch; ids are `"{batch_stamp}-{index}"`.
pub fn extract_flashcards(raw: &str, batch_stamp: u128) -> Vec<Flashcard> {
    match extract_array(raw) {
        Some(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| Flashcard {
                id: card_id(batch_stamp, index),
                question: string_field(item, "question"),
                answer: string_field(item, "answer"),
            })
            .collect(),
        None => {
            tracing::debug!(len = raw.len(), "no JSON array in flashcard output, using fallback");
            vec![Flashcard {
                id: card_id(batch_stamp, 0),
                question: FALLBACK_QUESTION.to_string(),
                answer: truncate_chars(raw, FALLBACK_ANSWER_MAX_CHARS),
            }]
        }
    }
}

/// The JSON array in `raw`, if any.
pub fn extract_array(raw: &str) -> Option<Vec<Value>> {
    let trimmed = raw.trim();
    if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(trimmed) {
        return Some(items);
    }
    let found = BRACKETED_ARRAY.find(trimmed)?;
    match serde_json::from_str::<Value>(found.as_str()) {
        Ok(Value::Array(items)) => Some(items),
        _ => None,
    }
}

fn card_id(batch_stamp: u128, index: usize) -> String {
    format!("{}-{}", batch_stamp, index)
}

fn string_field(item: &Value, key: &str) -> String {
    item.get(key)
        .and_then(Value::as_str)
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}
