//! Top-level entries in an iOS `Info.plist`

use regex::Regex;
use splice_blocks::{AnchorRule, CommentStyle, Fragment};
use std::sync::LazyLock;

use super::escape_xml;

/// Closing tag of the root `<dict>`. Nested dictionaries are indented, so only
/// the root one closes at column 0.
static ROOT_DICT_CLOSE: LazyLock<AnchorRule> = LazyLock::new(|| {
    AnchorRule::from_regex(Regex::new(r"^</dict>\s*$").expect("Invalid dict regex"))
});

/// A `<key>..</key>` / `<string>..</string>` pair in the root dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoPlistEntry {
    tag: String,
    key: String,
    value: String,
}

impl InfoPlistEntry {
    pub fn new(tag: impl Into<String>, key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            key: key.into(),
            value: value.into(),
        }
    }
}

impl Fragment for InfoPlistEntry {
    fn id(&self) -> &str {
        &self.tag
    }

    fn anchor(&self) -> &AnchorRule {
        &ROOT_DICT_CLOSE
    }

    fn comment(&self) -> CommentStyle {
        CommentStyle::Xml
    }

    fn payload(&self) -> String {
        format!(
            "\t<key>{}</key>\n\t<string>{}</string>",
            escape_xml(&self.key),
            escape_xml(&self.value)
        )
    }
}
