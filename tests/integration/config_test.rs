//! Configuration file tests.

use std::io::Write;

use cmdrun::config::Config;
use cmdrun::logger::{ColorMode, Level};
use tempfile::NamedTempFile;

#[test]
fn test_load_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[log]
level = "Error"
timestamps = true
color = "always"

[log.colors]
error = "dark_red"
"#
    )
    .unwrap();

    let config = Config::load_from_file(file.path()).unwrap();
    assert_eq!(config.log.level, Level::Error);
    assert!(config.log.timestamps);
    assert_eq!(config.log.color, ColorMode::Always);
    assert_eq!(config.log.colors.error.as_deref(), Some("dark_red"));
}

#[test]
fn test_malformed_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[log\nlevel = ").unwrap();

    let err = Config::load_from_file(file.path()).unwrap_err();
    assert_eq!(err.category(), "Configuration Error");
}
