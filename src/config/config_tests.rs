//! Tests for config loading

use std::io::Write;

use tempfile::NamedTempFile;

use super::*;

#[test]
fn test_config_path_ends_with_hovertip_config() {
    if let Some(path) = config_path() {
        assert!(path.ends_with(".config/hovertip/config.toml"));
    }
}

#[test]
fn test_load_config_from_path_reads_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[tooltip]\ngrace_ms = 60").unwrap();

    let config = load_config_from_path(file.path()).unwrap();

    assert_eq!(config.tooltip.grace_ms, 60);
    assert_eq!(config.tooltip.default_show_delay_ms, DEFAULT_SHOW_DELAY_MS);
}

#[test]
fn test_load_config_from_missing_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_config_from_path(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(HovertipError::Io(_))));
}

#[test]
fn test_load_config_from_malformed_file_is_parse_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[tooltip\ngrace_ms = 60").unwrap();

    let result = load_config_from_path(file.path());

    assert!(matches!(result, Err(HovertipError::ConfigParse(_))));
}

#[test]
fn test_missing_default_location_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config_at(&dir.path().join("config.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_malformed_file_falls_back_to_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[tooltip]\ngrace_ms = \"soon\"").unwrap();

    let loaded = load_config_at(file.path());
    assert!(matches!(loaded, Err(HovertipError::ConfigParse(_))));

    assert_eq!(or_default(loaded), Config::default());
}

#[test]
fn test_valid_file_is_kept_by_fallback() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[tooltip]\nhit_margin = 4.0").unwrap();

    let config = or_default(load_config_at(file.path()));

    assert_eq!(config.tooltip.hit_margin, 4.0);
}

#[test]
fn test_load_config_or_default_never_fails() {
    let config = load_config_or_default();
    assert!(config.tooltip.margin() >= 0.0);
}

#[test]
fn test_parse_empty_config_gives_defaults() {
    assert_eq!(parse_config("").unwrap(), Config::default());
}

#[test]
fn test_render_config_round_trips_through_parse() {
    let config = Config {
        tooltip: TooltipConfig {
            grace_ms: 90,
            hit_margin: 3.5,
            default_show_delay_ms: 700,
        },
    };

    let rendered = render_config(&config).unwrap();

    assert!(rendered.contains("[tooltip]"));
    assert!(rendered.contains("grace_ms = 90"));
    assert_eq!(parse_config(&rendered).unwrap(), config);
}
