//! Benchmark binary for integer parsing
//!
//! Usage: `benchmark [config.json]`. Results are printed to stdout as JSON,
//! progress is logged to stderr (set `RUST_LOG=info` to see it).

use bounded_atoi::bench;
use bounded_atoi::config::BenchConfig;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = match BenchConfig::load(path.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            log::error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let full_results = bench::run(&config);

    match serde_json::to_string(&full_results) {
        Ok(json) => println!("{}", json),
        Err(err) => {
            log::error!("failed to serialize results: {}", err);
            return ExitCode::FAILURE;
        }
    }

    if full_results.correctness {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
