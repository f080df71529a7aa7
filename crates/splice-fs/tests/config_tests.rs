use pretty_assertions::assert_eq;
use rstest::rstest;
use serde::Deserialize;
use splice_fs::{ConfigStore, Error};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[derive(Debug, Deserialize, PartialEq)]
struct TestConfig {
    name: String,
    count: i32,
}

#[rstest]
#[case("splice.toml", "name = \"test\"\ncount = 42")]
#[case("splice.json", r#"{"name": "test", "count": 42}"#)]
#[case("splice.yaml", "name: test\ncount: 42")]
#[case("splice.yml", "name: test\ncount: 42")]
fn test_load_by_extension(#[case] file_name: &str, #[case] content: &str) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(file_name);
    fs::write(&path, content).unwrap();

    let config: TestConfig = ConfigStore::new().load(&path).unwrap();

    assert_eq!(
        config,
        TestConfig {
            name: "test".to_string(),
            count: 42
        }
    );
}

#[test]
fn test_load_unsupported_extension() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("splice.ini");
    fs::write(&path, "name=test").unwrap();

    let result: Result<TestConfig, _> = ConfigStore::new().load(&path);
    assert!(matches!(result, Err(Error::UnsupportedFormat { .. })));
}

#[test]
fn test_parse_error_names_format_and_path() {
    let result: Result<TestConfig, _> =
        ConfigStore::new().parse("name = ", "toml", Path::new("splice.toml"));

    let err = result.unwrap_err();
    let message = err.to_string();
    assert!(message.contains("TOML"), "unexpected message: {message}");
    assert!(message.contains("splice.toml"), "unexpected message: {message}");
}
