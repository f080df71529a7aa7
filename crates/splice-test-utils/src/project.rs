//! [`TestProject`] builder for on-disk scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::fixtures_dir;

/// A temporary project directory with helpers for setup and assertion.
///
/// # Example
///
/// ```rust,no_run
/// use splice_test_utils::TestProject;
///
/// let project = TestProject::native();
/// project.write("splice.toml", "[android]\ngoogle_maps_api_key = \"k\"\n");
/// project.assert_file_contains("ios/Podfile", "use_native_modules!");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// An empty project directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// A copy of the native fixture project, `splice.toml` included.
    pub fn native() -> Self {
        let project = Self::new();
        copy_dir(&fixtures_dir(), project.root());
        project
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `relative` inside the project.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write `content` to `relative`, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
    }

    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read(&self, relative: &str) -> String {
        let path = self.path(relative);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Could not read file {}: {e}", path.display()))
    }

    /// Assert that the file at `relative` contains `content`.
    pub fn assert_file_contains(&self, relative: &str, content: &str) {
        let file_content = self.read(relative);
        assert!(
            file_content.contains(content),
            "Expected {relative} to contain {content:?}\nActual:\n{file_content}"
        );
    }

    /// Assert that the file at `relative` does **not** contain `content`.
    pub fn assert_file_not_contains(&self, relative: &str, content: &str) {
        let file_content = self.read(relative);
        assert!(
            !file_content.contains(content),
            "Expected {relative} NOT to contain {content:?}\nActual:\n{file_content}"
        );
    }
}

fn copy_dir(from: &Path, to: &Path) {
    fs::create_dir_all(to).unwrap();
    for entry in fs::read_dir(from).unwrap() {
        let entry = entry.unwrap();
        let target = to.join(entry.file_name());
        if entry.file_type().unwrap().is_dir() {
            copy_dir(&entry.path(), &target);
        } else {
            fs::copy(entry.path(), &target).unwrap();
        }
    }
}
