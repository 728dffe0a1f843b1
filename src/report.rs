//! Benchmark result records and reporting.
//!
//! Produces the CSV rows consumed by downstream tooling, JSON for CI
//! integration, and a human-readable summary table.

use std::collections::BTreeMap;
use std::io::Write;

use crate::harness::TimedRun;

/// A single benchmark measurement.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Measurement {
    /// Algorithm label as it appears in the CSV output.
    pub algorithm: String,
    /// Number of elements in the input sequence.
    pub input_size: usize,
    /// Measured repetitions behind the mean.
    pub repetitions: u32,
    /// Total measured time across all repetitions, in microseconds.
    pub total_us: u64,
    /// Truncated mean time per repetition, in microseconds.
    pub mean_us: u64,
}

impl Measurement {
    /// Record a measurement from a completed timed run.
    pub fn new(algorithm: &str, input_size: usize, run: &TimedRun) -> Self {
        Self {
            algorithm: algorithm.to_string(),
            input_size,
            repetitions: run.repetitions,
            total_us: run.total.as_micros() as u64,
            mean_us: run.mean_micros(),
        }
    }

    /// Render the measurement as one CSV data row.
    pub fn csv_row(&self) -> String {
        format!("{},{},{}", self.algorithm, self.input_size, self.mean_us)
    }
}

/// Accumulates measurements and produces reports.
#[derive(Debug, serde::Serialize)]
pub struct BenchReport {
    /// RFC 3339 UTC timestamp taken when the report was opened.
    pub timestamp: String,
    /// Measurements in run order.
    pub measurements: Vec<Measurement>,
}

impl Default for BenchReport {
    fn default() -> Self {
        Self::new()
    }
}

impl BenchReport {
    /// CSV header row preceding the data rows.
    ///
    /// The exact byte sequence is wire format for downstream consumers.
    pub const CSV_HEADER: &'static str = "Algoritmo,TamanhoN,TempoMedioMicrosegundos";

    /// Create an empty report stamped with the current time.
    pub fn new() -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            measurements: Vec::new(),
        }
    }

    /// Append a measurement.
    pub fn add(&mut self, m: Measurement) {
        self.measurements.push(m);
    }

    /// Number of measurements collected so far.
    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    /// Whether the report holds no measurements.
    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }

    /// Write the full CSV document: the header plus one row per
    /// measurement, in collection order.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the underlying writer.
    pub fn write_csv<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{}", Self::CSV_HEADER)?;
        for m in &self.measurements {
            writeln!(out, "{}", m.csv_row())?;
        }
        Ok(())
    }

    /// Produce a per-algorithm summary table as a string.
    pub fn summary(&self) -> String {
        let mut groups: BTreeMap<&str, Vec<&Measurement>> = BTreeMap::new();
        for m in &self.measurements {
            groups.entry(&m.algorithm).or_default().push(m);
        }

        let mut out = String::new();
        out.push_str(&format!("\nBenchmark report ({})\n\n", self.timestamp));

        for (algorithm, measurements) in &groups {
            out.push_str(&format!("── {} ──\n", algorithm));
            out.push_str(&format!("  {:>10} {:>16}\n", "Size", "Mean (us)"));
            out.push_str(&format!("  {}\n", "─".repeat(27)));
            for m in measurements {
                out.push_str(&format!("  {:>10} {:>16}\n", m.input_size, m.mean_us));
            }
            out.push('\n');
        }
        out
    }

    /// Serialize the report to JSON for CI integration.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
