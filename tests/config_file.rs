//! Integration tests for loading generation configs from disk.

use delve::{generate, DelveError, DelveResult, GenerationConfig};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

#[test]
fn test_partial_config_file_uses_defaults() -> DelveResult<()> {
    let file = write_config(r#"{ "seed": 31, "width": 64, "height": 40, "corridor_width": 1 }"#);
    let config = GenerationConfig::from_json_file(file.path())?;

    assert_eq!(config.seed, 31);
    assert_eq!(config.width, 64);
    assert_eq!(config.height, 40);
    assert_eq!(config.corridor_width, 1);
    assert_eq!(config.min_room_size, GenerationConfig::default().min_room_size);

    let layout = generate(&config)?;
    assert_eq!(layout.grid().width(), 64);
    assert_eq!(layout.config(), &config);
    Ok(())
}

#[test]
fn test_saved_config_reproduces_layout() -> DelveResult<()> {
    let original = GenerationConfig::new(555).with_size(70, 30).with_max_depth(4);
    let file = write_config(&original.to_json()?);

    let loaded = GenerationConfig::from_json_file(file.path())?;
    assert_eq!(loaded, original);
    assert_eq!(generate(&loaded)?, generate(&original)?);
    Ok(())
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let result = GenerationConfig::from_json_file(dir.path().join("missing.json"));
    assert!(matches!(result, Err(DelveError::Io(_))));
}

#[test]
fn test_invalid_values_load_but_fail_generation() -> DelveResult<()> {
    let file = write_config(r#"{ "min_room_size": 12, "max_room_size": 6 }"#);
    let config = GenerationConfig::from_json_file(file.path())?;

    let err = generate(&config).unwrap_err();
    assert!(matches!(err, DelveError::InvalidConfig(_)));
    assert!(err.to_string().contains("min_room_size"));
    Ok(())
}

#[test]
fn test_wrong_field_type_is_serde_error() {
    let file = write_config(r#"{ "width": "wide" }"#);
    let result = GenerationConfig::from_json_file(file.path());
    assert!(matches!(result, Err(DelveError::Serde(_))));
}
