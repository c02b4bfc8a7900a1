//! Document pre-processing: protect verbatim user text, drop structural
//! whitespace, then put the protected text back.
//!
//! The format gives whitespace no meaning outside `[...]` spans, so a written
//! document can be re-indented freely without changing what it decodes to.
//! A span may cover several lines but brackets do not nest; a `]` inside
//! user text ends the span early.

use std::sync::OnceLock;

use regex::Regex;
use tracing::warn;

use crate::core::USER_TEXT_MARKER;

fn verbatim_span_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[[^\]]*\]").expect("valid regex"))
}

/// Removes every `[...]` span, returning the remaining text and the spans
/// (brackets included) in order of appearance.
#[must_use]
pub fn extract_verbatim(text: &str) -> (String, Vec<String>) {
    let mut remaining = String::with_capacity(text.len());
    let mut spans = Vec::new();
    let mut last = 0;
    for span in verbatim_span_regex().find_iter(text) {
        remaining.push_str(&text[last..span.start()]);
        spans.push(span.as_str().to_owned());
        last = span.end();
    }
    remaining.push_str(&text[last..]);
    (remaining, spans)
}

/// Deletes every whitespace character.
#[must_use]
pub fn compact_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Puts each span back right after the next `user_text:=` marker.
///
/// Spans left over once the markers run out are dropped.
#[must_use]
pub fn reinsert_verbatim(compacted: &str, spans: &[String]) -> String {
    let extra: usize = spans.iter().map(String::len).sum();
    let mut out = String::with_capacity(compacted.len() + extra);
    let mut pending = spans.iter();
    let mut last = 0;
    for (index, matched) in compacted.match_indices(USER_TEXT_MARKER) {
        let end = index + matched.len();
        out.push_str(&compacted[last..end]);
        if let Some(span) = pending.next() {
            out.push_str(span);
        }
        last = end;
    }
    out.push_str(&compacted[last..]);

    let dropped = pending.count();
    if dropped > 0 {
        warn!(dropped, "verbatim spans without a user_text marker were dropped");
    }
    out
}

/// Runs extraction, compaction and reinsertion. Idempotent on its own output.
#[must_use]
pub fn canonicalize(text: &str) -> String {
    let (remaining, spans) = extract_verbatim(text);
    reinsert_verbatim(&compact_whitespace(&remaining), &spans)
}
