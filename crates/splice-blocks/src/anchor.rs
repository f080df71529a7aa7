//! Anchor location
//!
//! An [`AnchorRule`] names exactly one line of a file. Rules are matched line
//! by line, case-sensitively, and must match exactly once: zero matches and
//! several matches are both errors, because inserting at a guessed line would
//! silently corrupt the host file.
//!
//! Lines inside existing generated blocks are not part of the host file as far
//! as anchors are concerned. They never match, offsets do not count them, and
//! an insertion point never falls between a block's markers.

use regex::Regex;

use crate::block::parse_blocks;
use crate::error::{Error, Result};

/// A line pattern plus where, relative to the matched line, new lines go.
///
/// An offset of `0` inserts before the matched line, `1` inserts directly
/// after it, and larger offsets count further down. Offsets count host lines
/// only and skip over generated blocks. Offsets past the end of the text
/// insert at the end.
#[derive(Debug, Clone)]
pub struct AnchorRule {
    pattern: Regex,
    offset: usize,
}

/// The resolved insertion point of an [`AnchorRule`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// 0-based index of the matched line.
    pub line: usize,
    /// 0-based line index at which generated lines are inserted.
    pub insert_at: usize,
    /// The matched line, verbatim.
    pub text: String,
}

impl AnchorRule {
    /// Compile a rule that inserts before the line matching `pattern`.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|source| Error::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self::from_regex(regex))
    }

    /// Insert before the line matching `pattern`.
    pub fn before(pattern: &str) -> Result<Self> {
        Self::new(pattern)
    }

    /// Insert directly after the line matching `pattern`.
    pub fn after(pattern: &str) -> Result<Self> {
        Ok(Self::new(pattern)?.with_offset(1))
    }

    /// Match `needle` as a literal substring.
    pub fn literal(needle: &str) -> Self {
        // An escaped literal is always a valid pattern.
        Self::from_regex(Regex::new(&regex::escape(needle)).expect("escaped literal"))
    }

    /// Wrap an already compiled regex.
    pub fn from_regex(pattern: Regex) -> Self {
        Self { pattern, offset: 0 }
    }

    /// Set the line offset from the matched line.
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// The source of the pattern, as written.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Locate the single line this rule names in `text`.
    ///
    /// # Errors
    ///
    /// [`Error::AnchorNotFound`] when no line matches and
    /// [`Error::AnchorAmbiguous`] when more than one does. Both carry `text`
    /// verbatim.
    pub fn locate(&self, text: &str) -> Result<Anchor> {
        let lines: Vec<&str> = text.split('\n').collect();
        let host = host_lines(text, lines.len());
        let matched: Vec<usize> = host
            .iter()
            .enumerate()
            .filter(|(_, index)| self.pattern.is_match(lines[**index]))
            .map(|(position, _)| position)
            .collect();

        match matched.as_slice() {
            [] => Err(Error::AnchorNotFound {
                pattern: self.pattern().to_string(),
                contents: text.to_string(),
            }),
            [position] => {
                let line = host[*position];
                // Directly before the target host line, after any blocks
                // already sitting in front of it.
                let insert_at = host
                    .get(*position + self.offset)
                    .copied()
                    .unwrap_or(lines.len());
                Ok(Anchor {
                    line,
                    insert_at,
                    text: lines[line].to_string(),
                })
            }
            _ => Err(Error::AnchorAmbiguous {
                pattern: self.pattern().to_string(),
                lines: matched.iter().map(|position| host[*position] + 1).collect(),
                contents: text.to_string(),
            }),
        }
    }
}

/// Indices of the lines of `text` that sit outside every generated block.
fn host_lines(text: &str, line_count: usize) -> Vec<usize> {
    let spans: Vec<(usize, usize)> = parse_blocks(text)
        .iter()
        .map(|block| (block.start_line, block.end_line))
        .collect();
    (0..line_count)
        .filter(|&index| !spans.iter().any(|&(start, end)| (start..=end).contains(&index)))
        .collect()
}

/// Locate the single line `rule` names in `text`.
///
/// Free-function form of [`AnchorRule::locate`].
pub fn locate(text: &str, rule: &AnchorRule) -> Result<Anchor> {
    rule.locate(text)
}
