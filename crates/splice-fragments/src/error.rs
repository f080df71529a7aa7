//! Error types for splice-fragments

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Blocks(#[from] splice_blocks::Error),

    #[error("Filesystem error: {0}")]
    Fs(#[from] splice_fs::Error),

    #[error("Invalid configuration at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Missing required field `{field}` in [{section}]")]
    MissingField {
        section: &'static str,
        field: &'static str,
    },

    #[error("Tag \"{tag}\" is planned more than once for {}", file.display())]
    DuplicateTag { file: PathBuf, tag: String },
}
