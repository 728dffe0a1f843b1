//! # Configuration System
//!
//! TOML-based configuration for the benchmark suite: parsing, validation,
//! and defaults that reproduce the fixed legacy run (seven input sizes,
//! five repetitions, CSV on stdout).
//!
//! ## Features
//!
//! - TOML configuration file parsing with full-section defaults
//! - Type-safe configuration with pluggable validation
//! - Warnings logged without failing the load
//!
//! ## Example Configuration
//!
//! ```toml
//! [bench]
//! sizes = [100, 500, 1000]
//! repetitions = 5
//!
//! [output]
//! format = "csv"
//!
//! [logging]
//! level = "info"
//! format = "pretty"
//! ```

mod error;
mod loader;
mod types;
mod validation;

pub use error::{ConfigError, ConfigResult};
pub use loader::ConfigLoader;
pub use types::{
    BenchConfig, BenchSection, LogFormat, LogLevel, LoggingConfig, OutputConfig, OutputFormat,
};
pub use validation::{BasicValidator, ValidationError, ValidationResult, Validator};
