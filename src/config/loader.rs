//! Configuration file loader.

use std::io::ErrorKind;
use std::path::Path;

use tracing::warn;

use super::error::{ConfigError, ConfigResult};
use super::types::BenchConfig;
use super::validation::{ValidationResult, Validator};

/// Loads, validates, and saves benchmark configuration files.
///
/// Validators registered with [`with_validator`](Self::with_validator)
/// run on every successful parse; their warnings are logged and their
/// errors abort the load.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Validators applied to every loaded configuration.
    validators: Vec<Box<dyn Validator>>,
}

impl ConfigLoader {
    /// Create a loader with no validators registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a validator.
    #[must_use]
    pub fn with_validator<V: Validator + 'static>(mut self, validator: V) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] for a missing file, and an error
    /// when the file cannot be read, parsed, or validated.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> ConfigResult<BenchConfig> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                ConfigError::NotFound(path.to_path_buf())
            } else {
                ConfigError::Io {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;
        self.load_str(&content)
    }

    /// Parse and validate configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error when the TOML is malformed or validation fails.
    pub fn load_str(&self, content: &str) -> ConfigResult<BenchConfig> {
        let config: BenchConfig = toml::from_str(content)?;
        self.validate(&config)?;
        Ok(config)
    }

    /// Load configuration, treating a missing file as "use the defaults".
    ///
    /// # Errors
    ///
    /// Returns an error when the file exists but fails to load.
    pub fn load_or_default<P: AsRef<Path>>(&self, path: P) -> ConfigResult<BenchConfig> {
        match self.load(path) {
            Err(ConfigError::NotFound(_)) => Ok(BenchConfig::default()),
            other => other,
        }
    }

    /// Write `config` to `path` as pretty-printed TOML.
    ///
    /// # Errors
    ///
    /// Returns an error when serialization or the write fails.
    pub fn save<P: AsRef<Path>>(&self, config: &BenchConfig, path: P) -> ConfigResult<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(config)?;
        std::fs::write(path, content).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Run every registered validator, logging warnings and collecting
    /// errors across all of them before deciding.
    fn validate(&self, config: &BenchConfig) -> ConfigResult<()> {
        let mut findings = ValidationResult::new();
        for validator in &self.validators {
            findings.merge(validator.validate(config));
        }

        for warning in findings.warnings() {
            warn!(field = %warning.field, "{}", warning.message);
        }

        if findings.is_valid() {
            Ok(())
        } else {
            let messages: Vec<&str> = findings
                .errors()
                .iter()
                .map(|e| e.message.as_str())
                .collect();
            Err(ConfigError::Invalid(messages.join("; ")))
        }
    }
}
