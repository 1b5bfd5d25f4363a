//! Loading calculator configuration from disk.

use std::io::Write;

use bizmetrics_config::{CalculatorConfig, ConfigError};
use tempfile::Builder;

fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn loads_toml_file() {
    let file = write_temp(
        ".toml",
        r#"
precision = 4

[coefficients]
investment_variable = 0.1
price = -0.05
"#,
    );

    let config = CalculatorConfig::from_file(file.path()).unwrap();
    assert_eq!(config.precision, 4);
    assert_eq!(config.coefficient("investment_variable"), Some(0.1));
    assert_eq!(config.coefficient("price"), Some(-0.05));
}

#[test]
fn loads_json_file() {
    let file = write_temp(".json", r#"{"coefficients": {"search": 0.35}}"#);

    let config = CalculatorConfig::from_file(file.path()).unwrap();
    assert_eq!(config.precision, bizmetrics_config::DEFAULT_PRECISION);
    assert_eq!(config.coefficient("search"), Some(0.35));
}

#[test]
fn empty_file_gives_defaults() {
    let file = write_temp(".toml", "");
    let config = CalculatorConfig::from_file(file.path()).unwrap();
    assert_eq!(config, CalculatorConfig::default());
}

#[test]
fn rejects_invalid_values_in_file() {
    let file = write_temp(".toml", "precision = 99\n");
    let err = CalculatorConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Validation { .. }));
}

#[test]
fn rejects_unknown_extension() {
    let file = write_temp(".yaml", "precision: 2\n");
    let err = CalculatorConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
}

#[test]
fn reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");

    let err = CalculatorConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("missing.toml"));
}
