//! Format-agnostic configuration loading

use serde::de::DeserializeOwned;
use std::path::Path;

use crate::{Error, Result, io};

/// Format-agnostic configuration store.
///
/// Detects the format from the file extension and deserializes
/// transparently.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Load configuration from a file.
    ///
    /// Format is detected from file extension:
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    /// - `.yaml`, `.yml` -> YAML
    pub fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let content = io::read_text(path)?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");
        tracing::debug!(path = %path.display(), extension, "Loading config");
        self.parse(&content, extension, path)
    }

    /// Parse `content` as the format named by `extension`.
    ///
    /// `origin` is only used in error messages.
    pub fn parse<T: DeserializeOwned>(&self, content: &str, extension: &str, origin: &Path) -> Result<T> {
        let parse_error = |format: &str, message: String| Error::ConfigParse {
            path: origin.to_path_buf(),
            format: format.into(),
            message,
        };

        match extension.to_lowercase().as_str() {
            "toml" => toml::from_str(content).map_err(|e| parse_error("TOML", e.to_string())),
            "json" => serde_json::from_str(content).map_err(|e| parse_error("JSON", e.to_string())),
            "yaml" | "yml" => {
                serde_yaml::from_str(content).map_err(|e| parse_error("YAML", e.to_string()))
            }
            _ => Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }
}
