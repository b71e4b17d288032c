//! Mock perspective generation.
//!
//! [`generate_perspective`] is a deterministic template fill standing in
//! for a real inference call. It is the single substitution point for a
//! future model-backed generator: everything downstream (persistence,
//! deep-dive, dictionary) consumes only the [`PerspectiveBundle`] shape.

use serde::{Deserialize, Serialize};

use crate::cards;
use crate::entry::EntryContent;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum characters of the fact quoted in the acceptance sentence.
pub const FACT_QUOTE_CHARS: usize = 30;

/// Maximum characters of the feeling quoted in the acceptance sentence.
pub const FEELING_QUOTE_CHARS: usize = 20;

/// Marker appended when a quoted field was truncated.
pub const TRUNCATION_MARKER: &str = "...";

/// Stand-in for an empty fact.
pub const FACT_FALLBACK: &str = "それ";

/// Stand-in for an empty feeling.
pub const FEELING_FALLBACK: &str = "複雑な気持ち";

/// Fixed confirmation question returned with every bundle.
pub const CONFIRM_QUESTION: &str =
    "一番引っかかったのは「出来事そのもの」より「そのときの自分の反応」？";

/// Fixed deep-dive question returned with every bundle.
pub const DEEP_QUESTION: &str = "この出来事で「考えが止まった瞬間」はどこ？";

/// Fixed suggested value-tag label returned with every bundle.
pub const SUGGESTED_VALUE_TAG: &str = "自分のペースを守ること";

/// Card tags the mock generator always offers, in presentation order.
const MOCK_CARD_TAGS: [char; 3] = ['D', 'C', 'F'];

// ---------------------------------------------------------------------------
// Bundle shape
// ---------------------------------------------------------------------------

/// One perspective prompt inside a bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerspectiveItem {
    /// Single-letter card tag.
    #[serde(rename = "type")]
    pub tag: char,
    /// Card display label.
    pub label: String,
    /// The question posed to the writer.
    pub content: String,
}

/// The fixed-shape set of prompts derived from one diary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerspectiveBundle {
    /// Acceptance sentence reflecting the entry back to the writer.
    pub acceptance: String,
    /// Yes/no confirmation question.
    pub confirm_question: String,
    /// Ordered perspective prompts (always three in the mock).
    pub perspectives: Vec<PerspectiveItem>,
    /// The one question offered for the deep-dive step.
    pub deep_question: String,
    /// Suggested label for the value tag the writer may save.
    pub value_tag: String,
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Quote up to `max` characters of `text`, appending the truncation
/// marker only when characters were actually dropped.
fn quote(text: &str, max: usize, fallback: &str) -> String {
    if text.is_empty() {
        return fallback.to_string();
    }
    // Character-based, not byte-based: entries are predominantly Japanese.
    let mut chars = text.char_indices();
    match chars.nth(max) {
        Some((cut, _)) => format!("{}{TRUNCATION_MARKER}", &text[..cut]),
        None => text.to_string(),
    }
}

/// Derive the mock perspective bundle for an entry.
///
/// Deterministic: the same content always yields an identical bundle.
pub fn generate_perspective(content: &EntryContent) -> PerspectiveBundle {
    let fact = quote(&content.fact, FACT_QUOTE_CHARS, FACT_FALLBACK);
    let feeling = quote(&content.feeling, FEELING_QUOTE_CHARS, FEELING_FALLBACK);

    let perspectives = MOCK_CARD_TAGS
        .iter()
        .map(|&tag| {
            // The mock tags are all present in the catalog.
            let card = cards::card(tag).unwrap_or(&cards::PERSPECTIVE_CARDS[0]);
            PerspectiveItem {
                tag: card.tag,
                label: card.label.to_string(),
                content: card.question.to_string(),
            }
        })
        .collect();

    PerspectiveBundle {
        acceptance: format!("{fact}が起きて、{feeling}を感じたんだね。"),
        confirm_question: CONFIRM_QUESTION.to_string(),
        perspectives,
        deep_question: DEEP_QUESTION.to_string(),
        value_tag: SUGGESTED_VALUE_TAG.to_string(),
    }
}
