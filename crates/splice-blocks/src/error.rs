//! Error types for splice-blocks

/// Result type for splice-blocks operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while locating anchors or merging blocks.
///
/// Anchor errors carry the full text that was searched so callers can report
/// exactly which file contents failed to match.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to match \"{pattern}\" in contents:\n{contents}")]
    AnchorNotFound { pattern: String, contents: String },

    #[error("Anchor \"{pattern}\" is ambiguous, it matched lines {lines:?} in contents:\n{contents}")]
    AnchorAmbiguous {
        pattern: String,
        /// 1-based line numbers of every matching line
        lines: Vec<usize>,
        contents: String,
    },

    #[error("Invalid anchor pattern \"{pattern}\": {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid block identifier \"{0}\": expected an alphanumeric start followed by [A-Za-z0-9_.:/-]")]
    InvalidIdentifier(String),
}

impl Error {
    /// Whether this error came from anchor location (missing or ambiguous).
    pub fn is_anchor_error(&self) -> bool {
        matches!(
            self,
            Self::AnchorNotFound { .. } | Self::AnchorAmbiguous { .. }
        )
    }
}
