//! Begin/end marker rendering and matching
//!
//! Generated blocks are delimited by a pair of comment lines:
//!
//! ```text
//! # @generated begin react-native-maps - splice (DO NOT MODIFY) sha256:<hex>
//!   pod 'react-native-google-maps'
//! # @generated end react-native-maps
//! ```
//!
//! The comment syntax depends on the host file, but matching ignores it so a
//! block can be found and removed knowing only its identifier.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::error::{Error, Result};
use crate::fingerprint::Fingerprint;

/// Name written into every begin marker.
pub const GENERATOR: &str = "splice";

/// Matches any begin marker and captures the identifier.
static ANY_BEGIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@generated begin (\S+) - ").expect("Invalid begin marker regex"));

/// Captures the fingerprint token from a begin marker line.
static FINGERPRINT_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"sha256:[0-9a-f]{64}").expect("Invalid fingerprint regex"));

static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.:/-]*$").expect("Invalid identifier regex")
});

/// Comment syntax used to render markers for a given file type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommentStyle {
    /// `# comment` (Ruby, Podfile, shell, properties)
    #[default]
    Hash,
    /// `// comment` (Swift, Kotlin, Gradle, C-family)
    DoubleSlash,
    /// `<!-- comment -->` (XML manifests, plists)
    Xml,
}

impl CommentStyle {
    fn open(&self) -> &'static str {
        match self {
            Self::Hash => "# ",
            Self::DoubleSlash => "// ",
            Self::Xml => "<!-- ",
        }
    }

    fn close(&self) -> &'static str {
        match self {
            Self::Xml => " -->",
            Self::Hash | Self::DoubleSlash => "",
        }
    }

    /// Render the begin marker for `id` carrying `fingerprint`.
    pub fn begin_marker(&self, id: &str, fingerprint: &Fingerprint) -> String {
        format!(
            "{}@generated begin {id} - {GENERATOR} (DO NOT MODIFY) {fingerprint}{}",
            self.open(),
            self.close()
        )
    }

    /// Render the end marker for `id`.
    pub fn end_marker(&self, id: &str) -> String {
        format!("{}@generated end {id}{}", self.open(), self.close())
    }
}

/// Check that `id` can be embedded in a single marker line.
pub fn validate_identifier(id: &str) -> Result<()> {
    if IDENTIFIER.is_match(id) {
        Ok(())
    } else {
        Err(Error::InvalidIdentifier(id.to_string()))
    }
}

/// Comment-agnostic matcher for the markers of one identifier.
#[derive(Debug, Clone)]
pub(crate) struct MarkerMatcher {
    begin: Regex,
    end: Regex,
}

impl MarkerMatcher {
    pub(crate) fn new(id: &str) -> Self {
        let id = regex::escape(id);
        // Escaped input always yields a valid pattern.
        let begin = Regex::new(&format!("@generated begin {id} - ")).expect("escaped begin marker");
        let end = Regex::new(&format!(r"@generated end {id}(?:\s*-->)?\s*$")).expect("escaped end marker");
        Self { begin, end }
    }

    pub(crate) fn is_begin(&self, line: &str) -> bool {
        self.begin.is_match(line)
    }

    pub(crate) fn is_end(&self, line: &str) -> bool {
        self.end.is_match(line)
    }
}

/// Identifier named by a begin marker line, if the line is one.
pub(crate) fn begin_identifier(line: &str) -> Option<&str> {
    ANY_BEGIN
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Fingerprint embedded in a begin marker line, if readable.
pub(crate) fn embedded_fingerprint(line: &str) -> Option<Fingerprint> {
    FINGERPRINT_TOKEN
        .find(line)
        .and_then(|m| Fingerprint::parse(m.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(CommentStyle::Hash, "# @generated end maps")]
    #[case(CommentStyle::DoubleSlash, "// @generated end maps")]
    #[case(CommentStyle::Xml, "<!-- @generated end maps -->")]
    fn end_marker_per_style(#[case] style: CommentStyle, #[case] expected: &str) {
        assert_eq!(style.end_marker("maps"), expected);
    }

    #[test]
    fn begin_marker_embeds_fingerprint() {
        let fp = Fingerprint::of("payload");
        let marker = CommentStyle::Xml.begin_marker("maps-key", &fp);
        assert!(marker.starts_with("<!-- @generated begin maps-key - splice (DO NOT MODIFY) sha256:"));
        assert!(marker.ends_with(" -->"));
        assert_eq!(embedded_fingerprint(&marker), Some(fp));
    }

    #[rstest]
    #[case(CommentStyle::Hash)]
    #[case(CommentStyle::DoubleSlash)]
    #[case(CommentStyle::Xml)]
    fn matcher_recognizes_rendered_markers(#[case] style: CommentStyle) {
        let matcher = MarkerMatcher::new("react-native-maps");
        let fp = Fingerprint::of("x");
        assert!(matcher.is_begin(&style.begin_marker("react-native-maps", &fp)));
        assert!(matcher.is_end(&style.end_marker("react-native-maps")));
    }

    #[test]
    fn matcher_does_not_confuse_prefixed_identifiers() {
        let matcher = MarkerMatcher::new("react-native-maps");
        let fp = Fingerprint::of("x");
        let style = CommentStyle::DoubleSlash;
        assert!(!matcher.is_begin(&style.begin_marker("react-native-maps-import", &fp)));
        assert!(!matcher.is_end(&style.end_marker("react-native-maps-import")));
    }

    #[test]
    fn matcher_tolerates_carriage_return() {
        let matcher = MarkerMatcher::new("maps");
        assert!(matcher.is_end("# @generated end maps\r"));
    }

    #[test]
    fn matcher_escapes_regex_metacharacters() {
        let matcher = MarkerMatcher::new("a.b");
        assert!(matcher.is_end("# @generated end a.b"));
        assert!(!matcher.is_end("# @generated end aXb"));
    }

    #[test]
    fn begin_identifier_extracts_tag() {
        let line = "  // @generated begin swift-init - splice (DO NOT MODIFY) sha256:00";
        assert_eq!(begin_identifier(line), Some("swift-init"));
        assert_eq!(begin_identifier("// ordinary comment"), None);
    }

    #[rstest]
    #[case("react-native-maps", true)]
    #[case("com.google:maps/key_1", true)]
    #[case("", false)]
    #[case("-leading-dash", false)]
    #[case("has space", false)]
    #[case("multi\nline", false)]
    fn identifier_validation(#[case] id: &str, #[case] valid: bool) {
        assert_eq!(validate_identifier(id).is_ok(), valid);
    }
}
