//! Tests for HovertipError

use super::*;

#[test]
fn test_no_config_dir_display() {
    let msg = HovertipError::NoConfigDir.to_string();
    assert!(msg.contains("No configuration directory"));
}

#[test]
fn test_io_error_from_std_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test error");
    let err = HovertipError::from(io_err);
    assert!(matches!(err, HovertipError::Io(_)));
    assert!(err.to_string().contains("test error"));
}

#[test]
fn test_config_parse_from_toml_error() {
    let toml_err = toml::from_str::<toml::Table>("grace_ms = = 3").unwrap_err();
    let err = HovertipError::from(toml_err);
    assert!(matches!(err, HovertipError::ConfigParse(_)));
    assert!(err.to_string().starts_with("Invalid configuration"));
}
