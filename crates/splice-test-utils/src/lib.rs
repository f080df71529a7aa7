//! Shared test utilities for the splice workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`fixtures`]: golden native files under `test-fixtures/native`
//! - [`project`]: [`TestProject`] builder over a temporary copy of them

pub mod fixtures;
pub mod project;

pub use fixtures::{fixture_path, fixtures_dir, read_fixture};
pub use project::TestProject;
