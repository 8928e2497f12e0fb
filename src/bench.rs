//! Benchmark harness for integer parsing implementations
//!
//! Times the bounded parser variants against the baselines, first on each
//! configured sample string and then on a random mixed-length workload.

use crate::atoi::{BoundedParser, PositiveParser, UncheckedParser};
use crate::baselines::{NaiveParser, StdParser};
use crate::config::BenchConfig;
use crate::IntParse;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::hint::black_box;
use std::time::Instant;

const WARMUP_PARSES: usize = 1000;

#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkResult {
    pub algorithm: String,
    /// The sample string, or "random" for the mixed workload
    pub input: String,
    pub parses_per_second: f64,
    pub total_parses: u64,
    pub duration_ms: f64,
    /// Wrapping sum of every parsed value, keeps the work observable
    pub checksum: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct FullResults {
    pub results: Vec<BenchmarkResult>,
    pub correctness: bool,
}

/// Inputs every checked parser must agree on
pub const CORRECTNESS_CASES: &[(&[u8], Option<u64>)] = &[
    (b"0", Some(0)),
    (b"1", Some(1)),
    (b"123", Some(123)),
    (b"+123", Some(123)),
    (b"007", Some(7)),
    (b"18446744073709551615", Some(u64::MAX)),
    (b"", None),
    (b"+", None),
    (b"-", None),
    (b"abc", None),
    (b"12a34", None),
    (b"-1", None),
    (b"-0", None),
    (b" 123", None),
    (b"123 ", None),
    (b"18446744073709551616", None),
    (b"99999999999999999999", None),
];

/// Which part of the correctness cases a parser is held to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    /// Every case, signs included
    Signed,
    /// Checked parser without sign handling: signed inputs must be rejected
    DigitRun,
    /// Only the valid unsigned digit runs
    Unchecked,
}

/// Check a parser against the correctness cases.
pub fn verify_correctness<P: IntParse<u64>>(
    name: &str,
    parser: &P,
    mode: Verification,
) -> bool {
    for &(input, expected) in CORRECTNESS_CASES {
        let signed = matches!(input.first(), Some(&(b'+' | b'-')));
        let expected = match mode {
            Verification::Signed => expected,
            Verification::DigitRun if signed => None,
            Verification::DigitRun => expected,
            Verification::Unchecked if signed || expected.is_none() => continue,
            Verification::Unchecked => expected,
        };
        let result = parser.parse(input);
        if result != expected {
            log::warn!(
                "{}: parse({:?}) = {:?}, expected {:?}",
                name,
                String::from_utf8_lossy(input),
                result,
                expected
            );
            return false;
        }
    }
    log::debug!("{}: correctness ok", name);
    true
}

pub fn generate_test_data<R: Rng>(rng: &mut R, count: usize) -> Vec<Vec<u8>> {
    let mut data = Vec::with_capacity(count);

    // Mix of different number lengths for realistic workload
    let buckets: [(usize, u64, u64); 6] = [
        (20, 0, 10),
        (20, 10, 1000),
        (20, 1000, 1_000_000),
        (20, 1_000_000, 10_000_000_000),
        (15, 10_000_000_000, 1_000_000_000_000_000),
        (5, 1_000_000_000_000_000, u64::MAX),
    ];
    for (percent, low, high) in buckets {
        for _ in 0..count * percent / 100 {
            data.push(rng.gen_range(low..high).to_string().into_bytes());
        }
    }

    // Leading zeros (less common)
    while data.len() < count {
        let n: u64 = rng.gen_range(1..1000);
        data.push(format!("{:06}", n).into_bytes());
    }

    data
}

/// Time `passes` rounds of parsing every input in `data`.
pub fn measure<P: IntParse<u64>>(
    name: &str,
    label: &str,
    parser: &P,
    data: &[Vec<u8>],
    passes: u64,
) -> BenchmarkResult {
    // Warmup
    for input in data.iter().cycle().take(WARMUP_PARSES.max(data.len())) {
        black_box(parser.parse(black_box(input)));
    }

    let start = Instant::now();
    let mut checksum = 0u64;
    for _ in 0..passes {
        for input in data {
            let value = black_box(parser.parse(black_box(input))).unwrap_or(0);
            checksum = checksum.wrapping_add(value);
        }
    }
    let elapsed = start.elapsed();

    let total_parses = passes * data.len() as u64;
    let secs = elapsed.as_secs_f64();
    let parses_per_second = if secs > 0.0 {
        total_parses as f64 / secs
    } else {
        0.0
    };

    let result = BenchmarkResult {
        algorithm: name.to_string(),
        input: label.to_string(),
        parses_per_second,
        total_parses,
        duration_ms: secs * 1000.0,
        checksum,
    };
    log::info!(
        "{} iterations of {}, input '{}' took {:.2} ms",
        result.total_parses,
        result.algorithm,
        result.input,
        result.duration_ms
    );
    result
}

fn measure_all<P: IntParse<u64>>(
    name: &str,
    parser: &P,
    config: &BenchConfig,
    random: &[Vec<u8>],
    results: &mut Vec<BenchmarkResult>,
) {
    for sample in &config.samples {
        let data = [sample.clone().into_bytes()];
        results.push(measure(name, sample, parser, &data, config.iterations));
    }
    if !random.is_empty() {
        results.push(measure(name, "random", parser, random, config.random_passes as u64));
    }
}

/// Verify every parser, then benchmark them all.
///
/// Nothing is timed when any parser fails verification.
pub fn run(config: &BenchConfig) -> FullResults {
    let correctness = verify_correctness("std", &StdParser, Verification::Signed)
        && verify_correctness("naive", &NaiveParser, Verification::Signed)
        && verify_correctness("bounded", &BoundedParser, Verification::Signed)
        && verify_correctness("positive", &PositiveParser, Verification::DigitRun)
        && verify_correctness("unchecked", &UncheckedParser, Verification::Unchecked);

    if !correctness {
        log::error!("correctness check failed, skipping timings");
        return FullResults {
            results: vec![],
            correctness: false,
        };
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let random = generate_test_data(&mut rng, config.random_inputs);
    log::debug!(
        "{} samples, {} random inputs (seed {})",
        config.samples.len(),
        random.len(),
        config.seed
    );

    let mut results = Vec::new();
    measure_all("std", &StdParser, config, &random, &mut results);
    measure_all("naive", &NaiveParser, config, &random, &mut results);
    measure_all("bounded", &BoundedParser, config, &random, &mut results);
    measure_all("positive", &PositiveParser, config, &random, &mut results);
    measure_all("unchecked", &UncheckedParser, config, &random, &mut results);

    FullResults {
        results,
        correctness: true,
    }
}
