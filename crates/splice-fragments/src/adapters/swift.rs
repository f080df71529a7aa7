//! Swift `AppDelegate` fragments

use regex::Regex;
use splice_blocks::{AnchorRule, CommentStyle, Fragment};
use std::sync::LazyLock;

use super::{guard_import, indent_lines};

/// Imports go just above the application entry point attribute.
static APP_ENTRY_POINT: LazyLock<AnchorRule> = LazyLock::new(|| {
    AnchorRule::from_regex(
        Regex::new(r"^\s*@(UIApplicationMain|main)\b").expect("Invalid entry point regex"),
    )
});

/// Initializers run just before control returns to the React Native delegate.
static DID_FINISH_LAUNCHING: LazyLock<AnchorRule> = LazyLock::new(|| {
    AnchorRule::from_regex(
        Regex::new(r"\bsuper\.application\(\w+?, didFinishLaunchingWithOptions: \w+?\)")
            .expect("Invalid didFinishLaunching regex"),
    )
});

/// `import <Module>`, optionally only when the module is available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwiftImport {
    tag: String,
    module: String,
    guarded: bool,
}

impl SwiftImport {
    pub fn new(tag: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            module: module.into(),
            guarded: false,
        }
    }

    /// Wrap the import in `#if canImport(<Module>)`.
    pub fn guarded(mut self) -> Self {
        self.guarded = true;
        self
    }
}

impl Fragment for SwiftImport {
    fn id(&self) -> &str {
        &self.tag
    }

    fn anchor(&self) -> &AnchorRule {
        &APP_ENTRY_POINT
    }

    fn comment(&self) -> CommentStyle {
        CommentStyle::DoubleSlash
    }

    fn payload(&self) -> String {
        let import = format!("import {}", self.module);
        if self.guarded {
            guard_import(&self.module, &import)
        } else {
            import
        }
    }
}

/// A statement run in `application(_:didFinishLaunchingWithOptions:)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwiftInitializer {
    tag: String,
    statement: String,
    guard_module: Option<String>,
}

impl SwiftInitializer {
    pub fn new(tag: impl Into<String>, statement: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            statement: statement.into(),
            guard_module: None,
        }
    }

    /// Only run the statement when `module` can be imported.
    pub fn guarded_by(mut self, module: impl Into<String>) -> Self {
        self.guard_module = Some(module.into());
        self
    }
}

impl Fragment for SwiftInitializer {
    fn id(&self) -> &str {
        &self.tag
    }

    fn anchor(&self) -> &AnchorRule {
        &DID_FINISH_LAUNCHING
    }

    fn comment(&self) -> CommentStyle {
        CommentStyle::DoubleSlash
    }

    fn payload(&self) -> String {
        let body = match &self.guard_module {
            Some(module) => guard_import(module, &self.statement),
            None => self.statement.clone(),
        };
        indent_lines(&body, "    ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("@UIApplicationMain")]
    #[case("@main")]
    #[case("  @main")]
    fn entry_point_attributes(#[case] line: &str) {
        let text = format!("import Expo\n\n{line}\nclass AppDelegate {{}}");
        assert_eq!(APP_ENTRY_POINT.locate(&text).unwrap().line, 2);
    }

    #[test]
    fn entry_point_ignores_longer_attributes() {
        assert!(APP_ENTRY_POINT.locate("@mainActor\nclass A {}").is_err());
    }

    #[test]
    fn did_finish_launching_matches_react_delegate() {
        let line = "    return super.application(application, didFinishLaunchingWithOptions: launchOptions)";
        assert!(DID_FINISH_LAUNCHING.locate(line).is_ok());
        assert!(
            DID_FINISH_LAUNCHING
                .locate("return super.application(app, open: url, options: options)")
                .is_err()
        );
    }

    #[test]
    fn import_payloads() {
        assert_eq!(SwiftImport::new("t", "GoogleMaps").payload(), "import GoogleMaps");
        assert_eq!(
            SwiftImport::new("t", "GoogleMaps").guarded().payload(),
            "#if canImport(GoogleMaps)\nimport GoogleMaps\n#endif"
        );
    }

    #[test]
    fn initializer_payload_is_indented() {
        let init = SwiftInitializer::new("t", "FirebaseApp.configure()");
        assert_eq!(init.payload(), "    FirebaseApp.configure()");

        let guarded = init.guarded_by("FirebaseCore");
        assert_eq!(
            guarded.payload(),
            "    #if canImport(FirebaseCore)\n    FirebaseApp.configure()\n    #endif"
        );
    }
}
