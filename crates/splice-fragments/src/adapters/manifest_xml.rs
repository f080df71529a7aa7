//! `<meta-data>` entries in `AndroidManifest.xml`

use regex::Regex;
use splice_blocks::{AnchorRule, CommentStyle, Fragment};
use std::sync::LazyLock;

use super::escape_xml;

/// Last line of the `<application>` element.
static APPLICATION_CLOSE: LazyLock<AnchorRule> = LazyLock::new(|| {
    AnchorRule::from_regex(Regex::new(r"^\s*</application>").expect("Invalid application regex"))
});

/// A `<meta-data android:name=".." android:value=".."/>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestMetaData {
    tag: String,
    name: String,
    value: String,
}

impl ManifestMetaData {
    pub fn new(tag: impl Into<String>, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            name: name.into(),
            value: value.into(),
        }
    }
}

impl Fragment for ManifestMetaData {
    fn id(&self) -> &str {
        &self.tag
    }

    fn anchor(&self) -> &AnchorRule {
        &APPLICATION_CLOSE
    }

    fn comment(&self) -> CommentStyle {
        CommentStyle::Xml
    }

    fn payload(&self) -> String {
        format!(
            "    <meta-data android:name=\"{}\" android:value=\"{}\"/>",
            escape_xml(&self.name),
            escape_xml(&self.value)
        )
    }
}
