// CPU Bench - Free and Open Source Software Statement
//
// This project, cpu-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/math.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// Math-function throughput benchmark: sine, cosine, natural log and square
// root per inner iteration, counted as four operations.

use crate::Result;
use crate::benchmark::config::BenchmarkConfig;
use crate::benchmark::timing::{CancelFlag, Measurement, run_timed};
use std::hint::black_box;

/// Operations per inner iteration
pub const OPS_PER_ITERATION: u64 = 4;

/// One batch: `iterations` rounds of sin, cos, ln and sqrt.
/// Log and sqrt take `i + 1` so every argument is strictly positive.
pub fn math_batch(iterations: u64) -> f64 {
    let mut acc = 0.0f64;
    for i in 0..iterations {
        let x = black_box(i as f64);
        acc += x.sin() + x.cos() + (x + 1.0).ln() + (x + 1.0).sqrt();
    }
    acc
}

pub fn run(config: &BenchmarkConfig, cancel: &CancelFlag) -> Result<Measurement> {
    let iterations = config.math_iterations;
    run_timed(config.duration, cancel, || {
        black_box(math_batch(iterations));
        Ok(iterations * OPS_PER_ITERATION)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_math_batch_is_finite() {
        let acc = math_batch(10_000);
        assert!(acc.is_finite());
        // i = 0: sin 0 + cos 0 + ln 1 + sqrt 1
        assert_eq!(math_batch(1), 2.0);
    }

    #[test]
    fn test_counts_four_ops_per_iteration() {
        let config = BenchmarkConfig::default().with_duration(Duration::from_millis(100));
        let measurement = run(&config, &CancelFlag::new()).unwrap();
        assert!(measurement.batches > 0);
        assert_eq!(
            measurement.units,
            measurement.batches * config.math_iterations * OPS_PER_ITERATION
        );
    }
}
