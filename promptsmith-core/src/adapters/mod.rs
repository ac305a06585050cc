//! Per-model prompt formatters
//!
//! Every adapter is a stateless unit struct bound to one [`ModelId`] and one
//! prompt type. Formatting is a pure function of the prompt: clauses are
//! emitted in a fixed order, each only when its source field is present, and
//! adapters whose clauses can all be absent fall back to a fixed sentence.

use promptsmith_config::ModelId;

pub mod audio;
pub mod image;
pub mod text;
pub mod video;
pub mod voice;

/// Formats a prompt of type `P` for a single target model
pub trait PromptAdapter<P>: Send + Sync {
    /// Model this adapter formats for
    fn model(&self) -> ModelId;

    fn compile(&self, prompt: &P) -> String;
}

/// The value of an optional attribute, treating an empty string as absent.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.is_empty())
}

/// Same as [`present`] for attributes stored as plain strings.
pub(crate) fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}

/// Joins the non-empty items of a list attribute with `separator`, or `None`
/// when no item has content.
pub(crate) fn listed(items: &[String], separator: &str) -> Option<String> {
    let kept: Vec<&str> = items
        .iter()
        .map(String::as_str)
        .filter(|item| !item.is_empty())
        .collect();
    (!kept.is_empty()).then(|| kept.join(separator))
}

/// Title-cases every word: the first letter after a non-letter is uppercased
/// and the remaining letters lowercased (`"code-generation"` becomes
/// `"Code-Generation"`).
pub(crate) fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut at_word_start = true;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

/// Joins `parts` with `separator`, or returns `fallback` when there are none.
pub(crate) fn join_or(parts: &[String], separator: &str, fallback: &str) -> String {
    if parts.is_empty() {
        fallback.to_string()
    } else {
        parts.join(separator)
    }
}

/// Joins `parts` as sentences: `". "` between them and a closing period.
pub(crate) fn sentences(parts: &[String]) -> String {
    format!("{}.", parts.join(". "))
}
