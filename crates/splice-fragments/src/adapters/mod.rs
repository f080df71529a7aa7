//! Fragment adapters, one per kind of generated content
//!
//! | Adapter | Host file | Inserted |
//! |---|---|---|
//! | [`PodDependency`] | `Podfile` | before `use_native_modules!` |
//! | [`GradleDependency`] | app `build.gradle` | first line of `dependencies {` |
//! | [`SwiftImport`] | `AppDelegate.swift` | before `@UIApplicationMain` / `@main` |
//! | [`SwiftInitializer`] | `AppDelegate.swift` | before `super.application(_, didFinishLaunchingWithOptions:)` |
//! | [`ManifestMetaData`] | `AndroidManifest.xml` | before `</application>` |
//! | [`InfoPlistEntry`] | `Info.plist` | before the top-level `</dict>` |
//! | [`CustomFragment`] | any | wherever its rule says |

mod custom;
mod gradle;
mod manifest_xml;
mod plist;
mod pod;
mod swift;

pub use custom::CustomFragment;
pub use gradle::GradleDependency;
pub use manifest_xml::ManifestMetaData;
pub use plist::InfoPlistEntry;
pub use pod::{PodDependency, PodSource};
pub use swift::{SwiftImport, SwiftInitializer};

/// Prefix every line of `text` with `indent`.
pub(crate) fn indent_lines(text: &str, indent: &str) -> String {
    text.lines()
        .map(|line| format!("{indent}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wrap `body` in a `#if canImport(<module>)` guard.
pub(crate) fn guard_import(module: &str, body: &str) -> String {
    format!("#if canImport({module})\n{body}\n#endif")
}

/// Escape `value` for an XML attribute or text node.
pub(crate) fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
