//! Tagged block merging
//!
//! [`add_or_update`] and [`remove`] are the whole lifecycle of a generated
//! block. Both are pure functions from text to a [`MergeResult`]; callers
//! persist the result only when [`MergeResult::changed`] is true.
//!
//! Replacing a stale block reuses the position of the old block instead of
//! locating the anchor again, so an anchor that was edited away after the
//! first insertion does not prevent updates. Only a fresh insertion needs
//! the anchor.

use serde::{Deserialize, Serialize};

use crate::anchor::AnchorRule;
use crate::block::{TaggedBlock, find_blocks};
use crate::error::Result;
use crate::fingerprint::Fingerprint;
use crate::marker::{CommentStyle, validate_identifier};

/// Outcome of a merge or removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeResult {
    /// The resulting text.
    pub contents: String,
    /// New generated content was written (insertion or replacement).
    pub did_merge: bool,
    /// A previously generated block was removed (replacement or removal).
    pub did_clear: bool,
}

impl MergeResult {
    fn unchanged(text: &str) -> Self {
        Self {
            contents: text.to_string(),
            did_merge: false,
            did_clear: false,
        }
    }

    /// Whether `contents` differs from the input and should be written.
    pub fn changed(&self) -> bool {
        self.did_merge || self.did_clear
    }

    /// Chain a follow-up result computed from `self.contents`.
    ///
    /// The contents of `next` win; the flags accumulate.
    pub fn then(self, next: MergeResult) -> MergeResult {
        MergeResult {
            contents: next.contents,
            did_merge: self.did_merge || next.did_merge,
            did_clear: self.did_clear || next.did_clear,
        }
    }
}

/// How a file relates to the payload a fragment wants in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockStatus {
    /// No block for the identifier exists.
    Missing,
    /// Exactly one block exists and was generated from the payload.
    Current,
    /// A block exists but was generated from something else, or is duplicated.
    Stale,
}

/// Classify `text` against the desired `payload` for `id` without changing it.
pub fn status(text: &str, id: &str, payload: &str) -> BlockStatus {
    match find_blocks(text, id).as_slice() {
        [] => BlockStatus::Missing,
        [block] if block.is_current(payload) => BlockStatus::Current,
        _ => BlockStatus::Stale,
    }
}

/// Insert the block for `id`, refresh it if its payload changed, or do nothing.
///
/// # Errors
///
/// Fails with [`crate::Error::InvalidIdentifier`] for identifiers that cannot
/// be embedded in a marker, and with the anchor errors of
/// [`AnchorRule::locate`] when a fresh insertion is needed and the anchor is
/// missing or ambiguous. On error no text is produced.
pub fn add_or_update(
    text: &str,
    id: &str,
    rule: &AnchorRule,
    style: CommentStyle,
    payload: &str,
) -> Result<MergeResult> {
    validate_identifier(id)?;

    let fingerprint = Fingerprint::of(payload);
    let blocks = find_blocks(text, id);
    let lines: Vec<&str> = text.split('\n').collect();

    if let [block] = blocks.as_slice() {
        if block.fingerprint.as_ref() == Some(&fingerprint) {
            tracing::debug!(id, %fingerprint, "Block is up to date");
            return Ok(MergeResult::unchanged(text));
        }
    }

    if let Some(first) = blocks.first() {
        tracing::debug!(
            id,
            line = first.start_line + 1,
            stale = blocks.len(),
            %fingerprint,
            "Replacing generated block"
        );
        let crlf = lines[first.start_line].ends_with('\r');
        let rendered = render_block(style, id, &fingerprint, payload, crlf);
        return Ok(MergeResult {
            contents: rebuild(&lines, &blocks, Some((first.start_line, rendered.as_slice()))),
            did_merge: true,
            did_clear: true,
        });
    }

    let anchor = rule.locate(text)?;
    tracing::debug!(
        id,
        anchor = anchor.line + 1,
        insert_at = anchor.insert_at + 1,
        %fingerprint,
        "Inserting generated block"
    );
    let crlf = anchor.text.ends_with('\r');
    let rendered = render_block(style, id, &fingerprint, payload, crlf);
    Ok(MergeResult {
        contents: rebuild(&lines, &[], Some((anchor.insert_at, rendered.as_slice()))),
        did_merge: true,
        did_clear: false,
    })
}

/// Strip every block for `id`, restoring the lines around it untouched.
pub fn remove(text: &str, id: &str) -> MergeResult {
    let blocks = find_blocks(text, id);
    if blocks.is_empty() {
        tracing::debug!(id, "No generated block to remove");
        return MergeResult::unchanged(text);
    }

    tracing::debug!(id, count = blocks.len(), "Removing generated block");
    let lines: Vec<&str> = text.split('\n').collect();
    MergeResult {
        contents: rebuild(&lines, &blocks, None),
        did_merge: false,
        did_clear: true,
    }
}

/// Marker lines plus payload lines, with the host file's line ending.
fn render_block(
    style: CommentStyle,
    id: &str,
    fingerprint: &Fingerprint,
    payload: &str,
    crlf: bool,
) -> Vec<String> {
    let eol = if crlf { "\r" } else { "" };
    std::iter::once(style.begin_marker(id, fingerprint))
        .chain(
            payload
                .split('\n')
                .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string()),
        )
        .chain(std::iter::once(style.end_marker(id)))
        .map(|line| format!("{line}{eol}"))
        .collect()
}

/// Reassemble `lines`, skipping every line covered by `removed` and splicing
/// `insert` in front of the line at its index.
fn rebuild(lines: &[&str], removed: &[TaggedBlock], insert: Option<(usize, &[String])>) -> String {
    let dropped = |index: usize| {
        removed
            .iter()
            .any(|block| (block.start_line..=block.end_line).contains(&index))
    };

    let mut out: Vec<&str> = Vec::with_capacity(lines.len() + insert.map_or(0, |(_, l)| l.len()));
    for (index, line) in lines.iter().enumerate() {
        if let Some((at, rendered)) = insert {
            if at == index {
                out.extend(rendered.iter().map(String::as_str));
            }
        }
        if !dropped(index) {
            out.push(line);
        }
    }
    if let Some((at, rendered)) = insert {
        if at >= lines.len() {
            out.extend(rendered.iter().map(String::as_str));
        }
    }

    out.join("\n")
}
