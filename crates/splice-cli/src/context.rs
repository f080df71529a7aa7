//! Project context
//!
//! Ties a loaded manifest to the directory its file paths are relative to.

use std::path::{Path, PathBuf};

use splice_fragments::{Manifest, Plan};

use crate::error::{CliError, Result};

/// A loaded configuration and its project root.
#[derive(Debug)]
pub struct Project {
    pub root: PathBuf,
    pub config: PathBuf,
    pub manifest: Manifest,
}

impl Project {
    /// Load `config`, resolving the root from `root` or the config's directory.
    pub fn load(config: &Path, root: Option<&Path>) -> Result<Self> {
        if !config.is_file() {
            return Err(CliError::user(format!(
                "No configuration found at {}",
                config.display()
            )));
        }
        let manifest = Manifest::load(config)?;
        let root = resolve_root(config, root);
        tracing::debug!(root = %root.display(), "Resolved project root");
        Ok(Self {
            root,
            config: config.to_path_buf(),
            manifest,
        })
    }

    pub fn plan(&self) -> Result<Plan> {
        Ok(self.manifest.plan()?)
    }

    /// Absolute location of a project-relative path.
    pub fn path(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }
}

/// The explicit root if given, else the directory holding `config`.
pub fn resolve_root(config: &Path, root: Option<&Path>) -> PathBuf {
    match root {
        Some(root) => root.to_path_buf(),
        None => match config.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn root_defaults_to_config_dir() {
        assert_eq!(
            resolve_root(Path::new("app/splice.toml"), None),
            PathBuf::from("app")
        );
        assert_eq!(resolve_root(Path::new("splice.toml"), None), PathBuf::from("."));
        assert_eq!(
            resolve_root(Path::new("app/splice.toml"), Some(Path::new("elsewhere"))),
            PathBuf::from("elsewhere")
        );
    }

    #[test]
    fn missing_config_is_user_error() {
        let temp = TempDir::new().unwrap();
        let err = Project::load(&temp.path().join("splice.toml"), None).unwrap_err();
        assert!(matches!(err, CliError::User { .. }));
        assert!(err.to_string().contains("No configuration found"));
    }

    #[test]
    fn load_resolves_paths_against_root() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("splice.toml");
        std::fs::write(&config, "[android]\n").unwrap();

        let project = Project::load(&config, None).unwrap();
        assert_eq!(project.root, temp.path());
        assert_eq!(
            project.path(Path::new("android/app/build.gradle")),
            temp.path().join("android/app/build.gradle")
        );
        assert_eq!(project.plan().unwrap().len(), 1);
    }
}
