//! Fully configured fragments

use splice_blocks::{AnchorRule, CommentStyle, Fragment, Result, validate_identifier};

/// A literal payload placed by a caller-supplied rule.
#[derive(Debug, Clone)]
pub struct CustomFragment {
    tag: String,
    anchor: AnchorRule,
    comment: CommentStyle,
    payload: String,
}

impl CustomFragment {
    pub fn new(
        tag: impl Into<String>,
        anchor: AnchorRule,
        comment: CommentStyle,
        payload: impl Into<String>,
    ) -> Self {
        Self {
            tag: tag.into(),
            anchor,
            comment,
            payload: payload.into(),
        }
    }

    /// Build from configuration values, compiling `pattern`.
    pub fn from_pattern(
        tag: &str,
        pattern: &str,
        offset: usize,
        comment: CommentStyle,
        payload: &str,
    ) -> Result<Self> {
        validate_identifier(tag)?;
        let anchor = AnchorRule::new(pattern)?.with_offset(offset);
        Ok(Self::new(tag, anchor, comment, payload))
    }
}

impl Fragment for CustomFragment {
    fn id(&self) -> &str {
        &self.tag
    }

    fn anchor(&self) -> &AnchorRule {
        &self.anchor
    }

    fn comment(&self) -> CommentStyle {
        self.comment
    }

    fn payload(&self) -> String {
        self.payload.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use splice_blocks::{Error, apply_fragment};

    #[test]
    fn from_pattern_rejects_bad_input() {
        let bad_regex = CustomFragment::from_pattern("t", "(", 0, CommentStyle::Hash, "x");
        assert!(matches!(bad_regex, Err(Error::InvalidPattern { .. })));

        let bad_tag = CustomFragment::from_pattern("bad tag", "x", 0, CommentStyle::Hash, "x");
        assert!(matches!(bad_tag, Err(Error::InvalidIdentifier(_))));
    }

    #[test]
    fn applies_after_configured_line() {
        let fragment =
            CustomFragment::from_pattern("env", r"^export PATH", 1, CommentStyle::Hash, "export X=1")
                .unwrap();
        let merged = apply_fragment("#!/bin/sh\nexport PATH=/bin\nrun", &fragment).unwrap();
        let lines: Vec<&str> = merged.contents.lines().collect();
        assert_eq!(lines[1], "export PATH=/bin");
        assert!(lines[2].starts_with("# @generated begin env - splice"));
        assert_eq!(lines[3], "export X=1");
        assert_eq!(lines[4], "# @generated end env");
        assert_eq!(lines[5], "run");
    }
}
