//! Benchmark driver.
//!
//! Walks the configured input sizes and times each algorithm per size:
//! both sorts against copies of one generated sequence, then both
//! searches against a second sequence with a guaranteed-absent target.
//! Results stream to the output writer as CSV rows, or are collected and
//! written as one JSON document.

use std::io::Write;

use thiserror::Error;
use tracing::{debug, info};

use crate::algorithms::{binary_search, insertion_sort, linear_search, merge_sort};
use crate::config::{BenchConfig, OutputFormat};
use crate::dataset::{random_permutation, ABSENT_TARGET};
use crate::harness::Harness;
use crate::report::{BenchReport, Measurement};

// Row labels are wire format: downstream CSV consumers match on these
// exact strings.

/// CSV label for the insertion sort rows.
pub const LABEL_INSERTION_SORT: &str = "InsertionSort";
/// CSV label for the merge sort rows.
pub const LABEL_MERGE_SORT: &str = "MergeSort";
/// CSV label for the linear search rows.
pub const LABEL_LINEAR_SEARCH: &str = "BuscaSequencial";
/// CSV label for the binary search rows.
pub const LABEL_BINARY_SEARCH: &str = "BuscaBinaria";

/// Errors produced while running the benchmark suite.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// Failed to write results to the output stream.
    #[error("failed to write benchmark results: {0}")]
    Write(#[from] std::io::Error),

    /// Failed to encode the JSON report.
    #[error("failed to encode benchmark report: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Drives the full benchmark suite described by a configuration.
#[derive(Debug)]
pub struct BenchRunner {
    /// Run parameters.
    config: BenchConfig,
}

impl BenchRunner {
    /// Create a runner for the given configuration.
    pub fn new(config: BenchConfig) -> Self {
        Self { config }
    }

    /// Run every (algorithm, size) measurement and write results to `out`.
    ///
    /// CSV output streams one row per measurement as soon as it completes;
    /// JSON output is written in full after the last measurement. The
    /// returned report holds every measurement in run order either way.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails or the JSON report
    /// cannot be encoded.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<BenchReport, RunnerError> {
        let bench = &self.config.bench;
        let harness = Harness::new(bench.repetitions).with_warmup(bench.warmup_runs);
        let mut rng = rand::rng();
        let mut report = BenchReport::new();

        info!(
            sizes = bench.sizes.len(),
            repetitions = bench.repetitions,
            "starting benchmark run"
        );

        if self.config.output.format == OutputFormat::Csv {
            writeln!(out, "{}", BenchReport::CSV_HEADER)?;
        }

        for &size in &bench.sizes {
            debug!(size, "generating sort input");
            let sort_input = random_permutation(&mut rng, size);

            let sorts: [(&str, fn(&mut [i32])); 2] = [
                (LABEL_INSERTION_SORT, insertion_sort),
                (LABEL_MERGE_SORT, merge_sort),
            ];
            for (label, algo) in sorts {
                let run = harness.time_sort(algo, &sort_input);
                self.record(out, &mut report, Measurement::new(label, size, &run))?;
            }

            debug!(size, "generating search input");
            let mut search_input = random_permutation(&mut rng, size);

            let run = harness.time_search(linear_search, &search_input, &ABSENT_TARGET);
            self.record(
                out,
                &mut report,
                Measurement::new(LABEL_LINEAR_SEARCH, size, &run),
            )?;

            // Binary search precondition; not part of any timed window.
            search_input.sort_unstable();

            let run = harness.time_search(binary_search, &search_input, &ABSENT_TARGET);
            self.record(
                out,
                &mut report,
                Measurement::new(LABEL_BINARY_SEARCH, size, &run),
            )?;
        }

        if self.config.output.format == OutputFormat::Json {
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
        out.flush()?;

        info!(measurements = report.len(), "benchmark run complete");
        Ok(report)
    }

    /// Record one measurement: stream it in CSV mode, always collect it.
    fn record<W: Write>(
        &self,
        out: &mut W,
        report: &mut BenchReport,
        m: Measurement,
    ) -> Result<(), RunnerError> {
        debug!(
            algorithm = %m.algorithm,
            size = m.input_size,
            mean_us = m.mean_us,
            "measurement complete"
        );
        if self.config.output.format == OutputFormat::Csv {
            writeln!(out, "{}", m.csv_row())?;
            out.flush()?;
        }
        report.add(m);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config(sizes: Vec<usize>, format: OutputFormat) -> BenchConfig {
        let mut config = BenchConfig::default();
        config.bench.sizes = sizes;
        config.bench.repetitions = 2;
        config.output.format = format;
        config
    }

    #[test]
    fn test_csv_layout_and_row_order() {
        let runner = BenchRunner::new(small_config(vec![4, 8], OutputFormat::Csv));
        let mut out = Vec::new();
        let report = runner.run(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], BenchReport::CSV_HEADER);
        assert_eq!(lines.len(), 1 + 8);
        assert_eq!(report.len(), 8);

        let labels: Vec<&str> = lines[1..]
            .iter()
            .map(|l| l.split(',').next().unwrap())
            .collect();
        assert_eq!(
            labels,
            vec![
                LABEL_INSERTION_SORT,
                LABEL_MERGE_SORT,
                LABEL_LINEAR_SEARCH,
                LABEL_BINARY_SEARCH,
                LABEL_INSERTION_SORT,
                LABEL_MERGE_SORT,
                LABEL_LINEAR_SEARCH,
                LABEL_BINARY_SEARCH,
            ]
        );
    }

    #[test]
    fn test_rows_parse_as_label_size_micros() {
        let runner = BenchRunner::new(small_config(vec![16], OutputFormat::Csv));
        let mut out = Vec::new();
        runner.run(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        for row in text.lines().skip(1) {
            let fields: Vec<&str> = row.split(',').collect();
            assert_eq!(fields.len(), 3, "malformed row: {row}");
            assert_eq!(fields[1].parse::<usize>().unwrap(), 16);
            let _mean: u64 = fields[2].parse().unwrap();
        }
    }

    #[test]
    fn test_zero_size_is_handled_gracefully() {
        let runner = BenchRunner::new(small_config(vec![0], OutputFormat::Csv));
        let mut out = Vec::new();
        let report = runner.run(&mut out).unwrap();

        assert_eq!(report.len(), 4);
        let text = String::from_utf8(out).unwrap();
        assert!(text.lines().skip(1).all(|row| row.contains(",0,")));
    }

    #[test]
    fn test_json_mode_emits_single_document() {
        let runner = BenchRunner::new(small_config(vec![4], OutputFormat::Json));
        let mut out = Vec::new();
        let report = runner.run(&mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["measurements"].as_array().unwrap().len(), 4);
        assert_eq!(report.len(), 4);

        // No CSV header sneaks into JSON output.
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains(BenchReport::CSV_HEADER));
    }

    #[test]
    fn test_report_matches_streamed_rows() {
        let runner = BenchRunner::new(small_config(vec![8], OutputFormat::Csv));
        let mut streamed = Vec::new();
        let report = runner.run(&mut streamed).unwrap();

        let mut rendered = Vec::new();
        report.write_csv(&mut rendered).unwrap();

        assert_eq!(streamed, rendered);
    }
}
