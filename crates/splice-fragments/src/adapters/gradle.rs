//! Gradle dependencies in an app `build.gradle`

use regex::Regex;
use splice_blocks::{AnchorRule, CommentStyle, Fragment};
use std::sync::LazyLock;

/// First line inside the `dependencies {` block.
static DEPENDENCIES_BLOCK: LazyLock<AnchorRule> = LazyLock::new(|| {
    AnchorRule::from_regex(Regex::new(r"^\s*dependencies\s*\{").expect("Invalid dependencies regex"))
        .with_offset(1)
});

/// A `<configuration> "<notation>"` line in the app's dependencies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradleDependency {
    tag: String,
    configuration: String,
    notation: String,
}

impl GradleDependency {
    pub fn new(
        tag: impl Into<String>,
        configuration: impl Into<String>,
        notation: impl Into<String>,
    ) -> Self {
        Self {
            tag: tag.into(),
            configuration: configuration.into(),
            notation: notation.into(),
        }
    }

    /// An `implementation` dependency.
    pub fn implementation(tag: impl Into<String>, notation: impl Into<String>) -> Self {
        Self::new(tag, "implementation", notation)
    }
}

impl Fragment for GradleDependency {
    fn id(&self) -> &str {
        &self.tag
    }

    fn anchor(&self) -> &AnchorRule {
        &DEPENDENCIES_BLOCK
    }

    fn comment(&self) -> CommentStyle {
        CommentStyle::DoubleSlash
    }

    fn payload(&self) -> String {
        format!("    {} \"{}\"", self.configuration, self.notation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_quotes_notation() {
        let dep = GradleDependency::new("location", "api", "com.google.android.gms:play-services-location:21.0.1");
        assert_eq!(
            dep.payload(),
            "    api \"com.google.android.gms:play-services-location:21.0.1\""
        );
    }

    #[test]
    fn anchor_skips_lookalikes() {
        let dep = GradleDependency::implementation("x", "a:b:1");
        let text = "// dependencies { are listed below\nandroid {\n}\ndependencies {\n}";
        let anchor = dep.anchor().locate(text).unwrap();
        assert_eq!(anchor.line, 3);
        assert_eq!(anchor.insert_at, 4);
    }
}
