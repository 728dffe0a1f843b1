//! Configuration validation.
//!
//! Validators inspect a parsed [`BenchConfig`] before a run starts. Hard
//! errors reject the configuration; warnings are surfaced to the caller
//! without failing the load.

use std::collections::BTreeSet;

use super::types::BenchConfig;

/// A single finding from a validator, tied to the field that produced it.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: String,
    /// Human-readable description of the problem.
    pub message: String,
}

impl ValidationError {
    /// Create a finding for `field`.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Findings accumulated over one validation pass.
///
/// Errors and warnings are tracked separately; only errors make the
/// result invalid.
#[derive(Debug, Default)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
    warnings: Vec<ValidationError>,
}

impl ValidationResult {
    /// Create an empty, valid result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a hard error.
    pub fn push_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Record a warning.
    pub fn push_warning(&mut self, warning: ValidationError) {
        self.warnings.push(warning);
    }

    /// Whether the configuration passed (warnings permitted).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Hard errors recorded so far.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Warnings recorded so far.
    #[must_use]
    pub fn warnings(&self) -> &[ValidationError] {
        &self.warnings
    }

    /// Fold another result into this one, keeping severities apart.
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

/// Trait for configuration validators.
pub trait Validator: std::fmt::Debug + Send + Sync {
    /// Inspect `config` and report findings.
    fn validate(&self, config: &BenchConfig) -> ValidationResult;
}

/// Sizes above this draw a warning: the quadratic sort makes such runs
/// take minutes per measurement.
const SIZE_WARN_THRESHOLD: usize = 100_000;

/// Checks the run parameters every benchmark needs to hold.
#[derive(Debug, Default)]
pub struct BasicValidator;

impl BasicValidator {
    /// Create a new basic validator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Validator for BasicValidator {
    fn validate(&self, config: &BenchConfig) -> ValidationResult {
        let mut result = ValidationResult::new();
        let bench = &config.bench;

        // The harness divides accumulated time by the repetition count.
        if bench.repetitions == 0 {
            result.push_error(ValidationError::new(
                "bench.repetitions",
                "repetitions must be at least 1",
            ));
        }

        if bench.sizes.is_empty() {
            result.push_error(ValidationError::new(
                "bench.sizes",
                "at least one input size is required",
            ));
        }

        let mut seen = BTreeSet::new();
        for &size in &bench.sizes {
            if size > SIZE_WARN_THRESHOLD {
                result.push_warning(ValidationError::new(
                    "bench.sizes",
                    format!("size {size} will make the quadratic sorts very slow"),
                ));
            }
            if !seen.insert(size) {
                result.push_warning(ValidationError::new(
                    "bench.sizes",
                    format!("size {size} is listed more than once"),
                ));
            }
        }

        result
    }
}
