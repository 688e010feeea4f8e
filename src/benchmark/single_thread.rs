// CPU Bench - Free and Open Source Software Statement
//
// This project, cpu-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/single_thread.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// Single-thread compute benchmark: the Leibniz series in a tight loop on the
// calling thread. Only whole batches are counted.

use crate::Result;
use crate::benchmark::config::BenchmarkConfig;
use crate::benchmark::timing::{CancelFlag, Measurement, run_timed};
use crate::core::workload::leibniz_pi;
use std::hint::black_box;

pub fn run(config: &BenchmarkConfig, cancel: &CancelFlag) -> Result<Measurement> {
    let iterations = config.single_thread_iterations;
    run_timed(config.duration, cancel, || {
        black_box(leibniz_pi(iterations));
        Ok(iterations)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_counts_whole_batches_only() {
        let config = BenchmarkConfig {
            duration: Duration::from_millis(200),
            single_thread_iterations: 10_000,
            ..BenchmarkConfig::default()
        };
        let measurement = run(&config, &CancelFlag::new()).unwrap();
        assert!(measurement.batches > 0);
        assert_eq!(measurement.units, measurement.batches * 10_000);
        assert!(measurement.throughput() > 0.0);
    }

    #[test]
    fn test_longer_runs_complete_at_least_as_many_batches() {
        let base = BenchmarkConfig {
            single_thread_iterations: 10_000,
            ..BenchmarkConfig::default()
        };
        let short = run(&base.clone().with_duration(Duration::from_millis(50)), &CancelFlag::new()).unwrap();
        let long = run(&base.with_duration(Duration::from_millis(250)), &CancelFlag::new()).unwrap();
        assert!(long.batches >= short.batches);
    }
}
