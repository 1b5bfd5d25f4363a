//! Calculator configuration.

use std::collections::BTreeMap;
use std::path::Path;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult, ValidationError};

/// Decimal places used for reporting when none are configured.
pub const DEFAULT_PRECISION: u32 = 2;

/// Largest accepted reporting precision.
pub const MAX_PRECISION: u32 = 10;

fn default_precision() -> u32 {
    DEFAULT_PRECISION
}

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML document.
    Toml,
    /// JSON document.
    Json,
}

impl ConfigFormat {
    /// Picks the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedFormat(format!(
                "{} (expected .toml or .json)",
                path.display()
            ))),
        }
    }
}

/// Settings for a business metrics calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Decimal places used when results are rounded for reporting.
    #[serde(default = "default_precision")]
    pub precision: u32,

    /// Regression coefficients keyed by variable name.
    #[serde(default)]
    pub coefficients: BTreeMap<String, f64>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            coefficients: BTreeMap::new(),
        }
    }
}

impl CalculatorConfig {
    /// Creates an empty configuration with default precision.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a coefficient.
    #[must_use]
    pub fn with_coefficient(mut self, variable: impl Into<String>, value: f64) -> Self {
        self.coefficients.insert(variable.into(), value);
        self
    }

    /// Sets the reporting precision.
    #[must_use]
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Returns the coefficient for `variable`, if configured.
    #[must_use]
    pub fn coefficient(&self, variable: &str) -> Option<f64> {
        self.coefficients.get(variable).copied()
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a JSON document.
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a `.toml` or `.json` file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        debug!("Loading calculator configuration from {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = match format {
            ConfigFormat::Toml => Self::from_toml_str(&content)?,
            ConfigFormat::Json => Self::from_json_str(&content)?,
        };

        if config.coefficients.is_empty() {
            warn!(
                "Configuration {} defines no coefficients; coefficient-based metrics will fail",
                path.display()
            );
        }
        info!(
            "Loaded {} coefficient(s) from {} (precision {})",
            config.coefficients.len(),
            path.display(),
            config.precision
        );

        Ok(config)
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialization(e.to_string()))
    }

    /// Checks every field and reports all failures at once.
    pub fn validate(&self) -> ConfigResult<()> {
        let mut errors = Vec::new();

        if self.precision > MAX_PRECISION {
            errors.push(ValidationError::new(
                "precision",
                format!("must be at most {MAX_PRECISION}, got {}", self.precision),
            ));
        }

        for (name, value) in &self.coefficients {
            if name.trim().is_empty() {
                errors.push(ValidationError::new(
                    "coefficients",
                    "variable names must not be empty",
                ));
            }
            if !value.is_finite() {
                errors.push(ValidationError::new(
                    format!("coefficients.{name}"),
                    format!("must be a finite number, got {value}"),
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::from_validation_errors(errors))
        }
    }
}
