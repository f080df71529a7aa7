//! Tagged block discovery
//!
//! Blocks are found line by line. A block is a begin marker for an
//! identifier followed, on a later line, by the matching end marker. A begin
//! marker without an end marker (or an end marker on its own) is not a block;
//! such leftovers are ignored rather than reported.

use serde::{Deserialize, Serialize};

use crate::fingerprint::Fingerprint;
use crate::marker::{MarkerMatcher, begin_identifier, embedded_fingerprint};

/// A generated block found in source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedBlock {
    /// Logical identifier of the fragment that produced this block.
    pub id: String,
    /// Fingerprint from the begin marker, `None` if it was edited beyond recognition.
    pub fingerprint: Option<Fingerprint>,
    /// 0-based line index of the begin marker.
    pub start_line: usize,
    /// 0-based line index of the end marker (inclusive).
    pub end_line: usize,
    /// Lines between the markers, joined with `\n`.
    pub content: String,
}

impl TaggedBlock {
    /// Number of lines the block occupies, markers included.
    pub fn line_count(&self) -> usize {
        self.end_line - self.start_line + 1
    }

    /// Whether this block was generated from exactly `payload`.
    pub fn is_current(&self, payload: &str) -> bool {
        self.fingerprint
            .as_ref()
            .is_some_and(|fp| fp.matches(payload))
    }

    fn from_lines(id: &str, lines: &[&str], start: usize, end: usize) -> Self {
        let content = lines[start + 1..end]
            .iter()
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect::<Vec<_>>()
            .join("\n");
        Self {
            id: id.to_string(),
            fingerprint: embedded_fingerprint(lines[start]),
            start_line: start,
            end_line: end,
            content,
        }
    }
}

/// Index of the first begin or end marker for the matcher's identifier after `from`.
fn next_marker(matcher: &MarkerMatcher, lines: &[&str], from: usize) -> Option<usize> {
    (from + 1..lines.len()).find(|&i| matcher.is_begin(lines[i]) || matcher.is_end(lines[i]))
}

/// Find every well-formed block for `id`, in file order.
///
/// More than one result means the file was edited by hand; callers treat
/// that as stale.
pub fn find_blocks(text: &str, id: &str) -> Vec<TaggedBlock> {
    let matcher = MarkerMatcher::new(id);
    let lines: Vec<&str> = text.split('\n').collect();
    let mut blocks = Vec::new();
    let mut index = 0;

    while index < lines.len() {
        if !matcher.is_begin(lines[index]) {
            index += 1;
            continue;
        }
        match next_marker(&matcher, &lines, index) {
            Some(end) if matcher.is_end(lines[end]) => {
                blocks.push(TaggedBlock::from_lines(id, &lines, index, end));
                index = end + 1;
            }
            // Orphaned begin marker; the later one takes over.
            Some(begin) => index = begin,
            None => break,
        }
    }

    blocks
}

/// Find the first well-formed block for `id`.
pub fn find_block(text: &str, id: &str) -> Option<TaggedBlock> {
    find_blocks(text, id).into_iter().next()
}

/// Whether a well-formed block for `id` exists in `text`.
pub fn has_block(text: &str, id: &str) -> bool {
    find_block(text, id).is_some()
}

/// Find every well-formed block of any identifier, in file order.
pub fn parse_blocks(text: &str) -> Vec<TaggedBlock> {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut blocks = Vec::new();
    let mut index = 0;

    while index < lines.len() {
        let Some(id) = begin_identifier(lines[index]) else {
            index += 1;
            continue;
        };
        let matcher = MarkerMatcher::new(id);
        match next_marker(&matcher, &lines, index) {
            Some(end) if matcher.is_end(lines[end]) => {
                blocks.push(TaggedBlock::from_lines(id, &lines, index, end));
                index = end + 1;
            }
            _ => index += 1,
        }
    }

    blocks
}
