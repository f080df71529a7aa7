//! CocoaPods dependencies in a `Podfile`

use splice_blocks::{AnchorRule, CommentStyle, Fragment};
use std::sync::LazyLock;

/// Pods go in the app target, just above the autolinking call.
static USE_NATIVE_MODULES: LazyLock<AnchorRule> =
    LazyLock::new(|| AnchorRule::literal("use_native_modules"));

/// Where a pod comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PodSource {
    /// Whatever the spec repo resolves.
    #[default]
    Any,
    /// `pod 'Name', '<requirement>'`
    Version(String),
    /// `pod 'Name', path: '<path>'`
    Path(String),
    /// Options written verbatim after the name, e.g. a computed `path:`.
    Raw(String),
}

/// A `pod '<name>'` line in the app target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodDependency {
    tag: String,
    name: String,
    source: PodSource,
}

impl PodDependency {
    pub fn new(tag: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            name: name.into(),
            source: PodSource::Any,
        }
    }

    pub fn with_source(mut self, source: PodSource) -> Self {
        self.source = source;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Fragment for PodDependency {
    fn id(&self) -> &str {
        &self.tag
    }

    fn anchor(&self) -> &AnchorRule {
        &USE_NATIVE_MODULES
    }

    fn comment(&self) -> CommentStyle {
        CommentStyle::Hash
    }

    fn payload(&self) -> String {
        let options = match &self.source {
            PodSource::Any => String::new(),
            PodSource::Version(requirement) => format!(", '{requirement}'"),
            PodSource::Path(path) => format!(", path: '{path}'"),
            PodSource::Raw(raw) => format!(", {raw}"),
        };
        format!("  pod '{}'{options}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(PodSource::Any, "  pod 'GoogleMaps'")]
    #[case(PodSource::Version("~> 8.4".into()), "  pod 'GoogleMaps', '~> 8.4'")]
    #[case(PodSource::Path("../vendor/maps".into()), "  pod 'GoogleMaps', path: '../vendor/maps'")]
    #[case(PodSource::Raw(":modular_headers => true".into()), "  pod 'GoogleMaps', :modular_headers => true")]
    fn payload_by_source(#[case] source: PodSource, #[case] expected: &str) {
        let pod = PodDependency::new("maps", "GoogleMaps").with_source(source);
        assert_eq!(pod.payload(), expected);
    }

    #[test]
    fn anchors_before_autolinking() {
        let pod = PodDependency::new("maps", "GoogleMaps");
        let anchor = pod
            .anchor()
            .locate("target 'App' do\n  config = use_native_modules!(config_command)\nend")
            .unwrap();
        assert_eq!(anchor.insert_at, 1);
        assert_eq!(pod.comment(), CommentStyle::Hash);
    }
}
