//! Configuration type definitions.

use serde::{Deserialize, Serialize};

/// Root configuration structure for the benchmark suite.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BenchConfig {
    /// Benchmark run parameters.
    pub bench: BenchSection,

    /// Output configuration.
    pub output: OutputConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Benchmark section configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchSection {
    /// Input sizes to measure, in run order.
    pub sizes: Vec<usize>,

    /// Measured repetitions per (algorithm, size) pair.
    pub repetitions: u32,

    /// Unmeasured warmup iterations per (algorithm, size) pair.
    pub warmup_runs: u32,
}

impl BenchSection {
    /// Input sizes measured when no configuration file overrides them.
    pub const DEFAULT_SIZES: [usize; 7] = [100, 500, 1000, 2500, 5000, 10000, 20000];

    /// Repetitions averaged per measurement by default.
    pub const DEFAULT_REPETITIONS: u32 = 5;
}

impl Default for BenchSection {
    fn default() -> Self {
        Self {
            sizes: Self::DEFAULT_SIZES.to_vec(),
            repetitions: Self::DEFAULT_REPETITIONS,
            warmup_runs: 0,
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Result format written to stdout.
    pub format: OutputFormat,

    /// Print a per-algorithm summary table to stderr after the run.
    pub summary: bool,
}

/// Result output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// CSV rows streamed as measurements complete (default).
    #[default]
    Csv,
    /// One JSON document written after the run.
    Json,
}

/// Logging configuration.
///
/// Logs always go to stderr; stdout is reserved for benchmark results.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum severity emitted.
    pub level: LogLevel,

    /// Renderer for log lines.
    pub format: LogFormat,
}

/// Log verbosity threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Everything, including per-iteration detail.
    Trace,
    /// Per-measurement diagnostics.
    Debug,
    /// Run lifecycle messages (default).
    #[default]
    Info,
    /// Configuration warnings and recoverable problems.
    Warn,
    /// Fatal failures only.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        };
        f.write_str(name)
    }
}

/// Log line rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line, for log collectors.
    Json,
    /// Multi-line human-readable output (default).
    #[default]
    Pretty,
    /// Single-line human-readable output.
    Compact,
}
