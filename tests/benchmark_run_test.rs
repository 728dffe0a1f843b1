//! End-to-end tests for the benchmark driver and binary.

use std::process::Command;

use algobench::config::{BenchConfig, OutputFormat};
use algobench::runner::{
    BenchRunner, LABEL_BINARY_SEARCH, LABEL_INSERTION_SORT, LABEL_LINEAR_SEARCH, LABEL_MERGE_SORT,
};

fn test_config(sizes: &[usize]) -> BenchConfig {
    let mut config = BenchConfig::default();
    config.bench.sizes = sizes.to_vec();
    config.bench.repetitions = 2;
    config
}

#[test]
fn test_csv_run_layout() {
    let sizes = [16, 64, 256];
    let runner = BenchRunner::new(test_config(&sizes));
    let mut out = Vec::new();
    let report = runner.run(&mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("Algoritmo,TamanhoN,TempoMedioMicrosegundos")
    );

    let rows: Vec<&str> = lines.collect();
    assert_eq!(rows.len(), 12);
    assert_eq!(report.len(), 12);

    for (i, row) in rows.iter().enumerate() {
        let fields: Vec<&str> = row.split(',').collect();
        assert_eq!(fields.len(), 3, "malformed row: {row}");

        let expected_label = match i % 4 {
            0 => LABEL_INSERTION_SORT,
            1 => LABEL_MERGE_SORT,
            2 => LABEL_LINEAR_SEARCH,
            _ => LABEL_BINARY_SEARCH,
        };
        assert_eq!(fields[0], expected_label);
        assert_eq!(fields[1].parse::<usize>().unwrap(), sizes[i / 4]);
        fields[2].parse::<u64>().unwrap();
    }
}

#[test]
fn test_json_run_document() {
    let mut config = test_config(&[8, 32]);
    config.output.format = OutputFormat::Json;

    let runner = BenchRunner::new(config);
    let mut out = Vec::new();
    runner.run(&mut out).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert!(!value["timestamp"].as_str().unwrap().is_empty());

    let measurements = value["measurements"].as_array().unwrap();
    assert_eq!(measurements.len(), 8);
    for m in measurements {
        assert!(m["algorithm"].is_string());
        assert!(m["input_size"].is_u64());
        assert_eq!(m["repetitions"], 2);
        assert!(m["mean_us"].is_u64());
    }
}

#[test]
fn test_summary_covers_all_algorithms() {
    let runner = BenchRunner::new(test_config(&[32]));
    let mut out = Vec::new();
    let report = runner.run(&mut out).unwrap();

    let summary = report.summary();
    for label in [
        LABEL_INSERTION_SORT,
        LABEL_MERGE_SORT,
        LABEL_LINEAR_SEARCH,
        LABEL_BINARY_SEARCH,
    ] {
        assert!(summary.contains(label), "summary missing {label}");
    }
}

#[test]
fn test_binary_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("algobench.toml"),
        r#"
[bench]
sizes = [8, 32]
repetitions = 2

[logging]
level = "warn"
"#,
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_algobench"))
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success(), "exit: {:?}", output.status);

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "Algoritmo,TamanhoN,TempoMedioMicrosegundos");
    assert_eq!(lines.len(), 1 + 8);
}

#[test]
fn test_binary_rejects_invalid_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("algobench.toml"),
        r#"
[bench]
repetitions = 0
"#,
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_algobench"))
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("validation"), "stderr: {stderr}");
}
