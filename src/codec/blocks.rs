//! Splitting of canonical text into `<tag>...<tag>` blocks and entry tokens.
//!
//! Open and close markers are identical, so a block ends at the first later
//! occurrence of its own marker. Same-named blocks therefore cannot nest;
//! this is a constraint of the format, not something the scanner recovers
//! from. Bracketed user text is skipped while searching for markers and
//! separators.

use tracing::trace;

use crate::core::{VERBATIM_CLOSE, VERBATIM_OPEN};

const ENTRY_SEPARATOR: u8 = b';';

/// One `<anchor>body<anchor>` span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagBlock<'a> {
    pub anchor: &'a str,
    pub body: &'a str,
}

/// Partitions `text` into consecutive shortest same-tag blocks.
///
/// Text outside blocks and opening tags without a matching close are skipped.
#[must_use]
pub fn split_blocks(text: &str) -> Vec<TagBlock<'_>> {
    let bytes = text.as_bytes();
    let mut blocks = Vec::new();
    let mut cursor = 0;

    while let Some(open) = find_outside_verbatim(bytes, cursor, b"<") {
        let Some(close_rel) = text[open + 1..].find('>') else {
            break;
        };
        let anchor_end = open + 1 + close_rel;
        let anchor = &text[open + 1..anchor_end];
        if anchor.is_empty() || anchor.contains('<') || anchor.contains(VERBATIM_OPEN) {
            cursor = open + 1;
            continue;
        }

        let marker = &text[open..=anchor_end];
        let body_start = anchor_end + 1;
        match find_outside_verbatim(bytes, body_start, marker.as_bytes()) {
            Some(end) => {
                blocks.push(TagBlock {
                    anchor,
                    body: &text[body_start..end],
                });
                cursor = end + marker.len();
            }
            None => {
                trace!(anchor, "skipping unterminated tag");
                cursor = body_start;
            }
        }
    }

    blocks
}

/// Splits a field body on `;`, keeping `;` inside user text. Empty tokens are
/// dropped.
#[must_use]
pub fn split_entries(body: &str) -> Vec<&str> {
    let bytes = body.as_bytes();
    let mut tokens = Vec::new();
    let mut start = 0;
    while let Some(separator) = find_outside_verbatim(bytes, start, &[ENTRY_SEPARATOR]) {
        push_token(&mut tokens, &body[start..separator]);
        start = separator + 1;
    }
    push_token(&mut tokens, &body[start..]);
    tokens
}

fn push_token<'a>(tokens: &mut Vec<&'a str>, token: &'a str) {
    if !token.is_empty() {
        tokens.push(token);
    }
}

/// Byte offset of the next `needle` at or after `from`, jumping over closed
/// `[...]` spans. An unclosed `[` is ordinary text.
fn find_outside_verbatim(bytes: &[u8], from: usize, needle: &[u8]) -> Option<usize> {
    let open = VERBATIM_OPEN as u8;
    let close = VERBATIM_CLOSE as u8;
    let mut index = from;
    while index < bytes.len() {
        if bytes[index..].starts_with(needle) {
            return Some(index);
        }
        if bytes[index] == open {
            if let Some(rel) = bytes[index + 1..].iter().position(|&b| b == close) {
                index += rel + 2;
                continue;
            }
        }
        index += 1;
    }
    None
}
