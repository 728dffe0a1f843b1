//! Benchmark suite binary entry point.

use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use algobench::config::{
    BasicValidator, BenchConfig, ConfigLoader, ConfigResult, LogFormat, LoggingConfig,
};
use algobench::runner::BenchRunner;

/// Configuration file consulted in the working directory.
const CONFIG_PATH: &str = "algobench.toml";

fn main() -> ExitCode {
    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            // Logging is configured from the file being loaded here, so
            // this failure can only go to bare stderr.
            eprintln!("algobench: {err}");
            return ExitCode::FAILURE;
        },
    };

    init_logging(&config.logging);

    let print_summary = config.output.summary;
    let runner = BenchRunner::new(config);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match runner.run(&mut out) {
        Ok(report) => {
            if print_summary {
                eprint!("{}", report.summary());
            }
            ExitCode::SUCCESS
        },
        Err(err) => {
            error!(%err, "benchmark run failed");
            ExitCode::FAILURE
        },
    }
}

/// Load `algobench.toml` from the working directory, falling back to the
/// built-in defaults when the file is absent.
fn load_config() -> ConfigResult<BenchConfig> {
    ConfigLoader::new()
        .with_validator(BasicValidator::new())
        .load_or_default(CONFIG_PATH)
}

/// Install the global tracing subscriber.
///
/// Logs go to stderr so stdout stays a clean result stream. `RUST_LOG`
/// overrides the configured level when set.
fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_string()));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match config.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Compact => builder.compact().init(),
    }
}
