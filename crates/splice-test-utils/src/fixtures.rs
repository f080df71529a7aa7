//! Access to the golden native project under `test-fixtures/native`.

use std::fs;
use std::path::PathBuf;

/// Root of the native fixture project.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../test-fixtures/native")
}

/// Absolute path of `relative` inside the fixture project.
pub fn fixture_path(relative: &str) -> PathBuf {
    fixtures_dir().join(relative)
}

/// Read a fixture file.
///
/// # Panics
/// Panics if the fixture does not exist.
pub fn read_fixture(relative: &str) -> String {
    let path = fixture_path(relative);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Could not read fixture {}: {e}", path.display()))
}
