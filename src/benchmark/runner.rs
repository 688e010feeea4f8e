// CPU Bench - Free and Open Source Software Statement
//
// This project, cpu-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/runner.rs
// Version: 2.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file implements the benchmark driver. It runs the seven benchmarks one
// after another for the configured duration, prints a progress and a result
// line for each and records one throughput value per benchmark in the result
// set it was handed.

use crate::Result;
use crate::benchmark::config::BenchmarkConfig;
use crate::benchmark::report::{render_progress, render_result};
use crate::benchmark::results::ResultSet;
use crate::benchmark::timing::{CancelFlag, Measurement};
use crate::benchmark::{math, memory, multi_process, multi_thread, primes, single_thread, sorting};
use crate::core::host::logical_cores;
use crate::core::types::BenchmarkKind;
use crate::error::BenchError;
use log::{debug, info};

const LOG_TARGET: &str = "cpu_bench::runner";

/// Main benchmark runner
pub struct BenchmarkRunner {
    config: BenchmarkConfig,
    logical_cores: usize,
}

impl BenchmarkRunner {
    pub fn new(config: BenchmarkConfig) -> Self {
        Self {
            config,
            logical_cores: logical_cores(),
        }
    }

    /// Run every benchmark in order and return `results` with one entry
    /// added per benchmark. The first failure aborts the remaining ones.
    pub fn run(&self, mut results: ResultSet, cancel: &CancelFlag) -> Result<ResultSet> {
        info!(target: LOG_TARGET,
            "🧪 Starting {} benchmarks, {:?} each, {} logical cores",
            BenchmarkKind::ALL.len(), self.config.duration, self.logical_cores
        );

        for kind in BenchmarkKind::ALL {
            if cancel.is_cancelled() {
                return Err(BenchError::Interrupted);
            }

            println!("{}", render_progress(kind, self.workers_for(kind)));
            let measurement = self.run_one(kind, cancel).map_err(|err| {
                // A failure observed after an interrupt is part of the interrupt
                if err.is_interrupted() || cancel.is_cancelled() {
                    BenchError::Interrupted
                } else {
                    BenchError::Benchmark {
                        name: kind.label(),
                        source: Box::new(err),
                    }
                }
            })?;

            let value = measurement.throughput();
            info!(target: LOG_TARGET,
                "{}: {} batches, {} units in {:.3}s",
                kind.label(), measurement.batches, measurement.units, measurement.elapsed.as_secs_f64()
            );
            println!("{}", render_result(kind, value));
            results.record(kind.key(), value)?;
        }

        debug!(target: LOG_TARGET, "Collected {} results", results.len());
        Ok(results)
    }

    /// Run a single benchmark and return its raw measurement
    pub fn run_one(&self, kind: BenchmarkKind, cancel: &CancelFlag) -> Result<Measurement> {
        match kind {
            BenchmarkKind::SingleThread => single_thread::run(&self.config, cancel),
            BenchmarkKind::MultiProcess => multi_process::run(&self.config, cancel),
            BenchmarkKind::MultiThread => {
                multi_thread::run_with_threads(&self.config, self.logical_cores, cancel)
            }
            BenchmarkKind::Math => math::run(&self.config, cancel),
            BenchmarkKind::Memory => memory::run(&self.config, cancel),
            BenchmarkKind::Primes => primes::run(&self.config, cancel),
            BenchmarkKind::Sorting => sorting::run(&self.config, cancel),
        }
    }

    fn workers_for(&self, kind: BenchmarkKind) -> Option<usize> {
        match kind {
            BenchmarkKind::MultiProcess => Some(self.config.worker_processes(self.logical_cores)),
            BenchmarkKind::MultiThread => Some(self.logical_cores),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_run_stops_before_first_benchmark_when_cancelled() {
        let cancel = CancelFlag::new();
        cancel.cancel();
        let runner = BenchmarkRunner::new(BenchmarkConfig::default());
        let result = runner.run(ResultSet::new(), &cancel);
        assert!(matches!(result, Err(BenchError::Interrupted)));
    }

    #[test]
    fn test_run_one_in_process_benchmarks() {
        let config = BenchmarkConfig::default()
            .with_duration(Duration::from_millis(100))
            .with_memory_array_len(10_000)
            .with_io_wait(None);
        let runner = BenchmarkRunner::new(config);
        let cancel = CancelFlag::new();
        for kind in [
            BenchmarkKind::SingleThread,
            BenchmarkKind::MultiThread,
            BenchmarkKind::Math,
            BenchmarkKind::Memory,
            BenchmarkKind::Primes,
            BenchmarkKind::Sorting,
        ] {
            let measurement = runner.run_one(kind, &cancel).unwrap();
            assert!(measurement.throughput() > 0.0, "{:?} reported no throughput", kind);
        }
    }

    #[test]
    fn test_failing_benchmark_aborts_run_and_is_named() {
        let config = BenchmarkConfig::default()
            .with_duration(Duration::from_millis(50))
            .with_worker_command(crate::benchmark::pool::WorkerCommand::new(
                "/nonexistent/cpubench-worker",
            ));
        let runner = BenchmarkRunner::new(config);

        let err = runner.run(ResultSet::new(), &CancelFlag::new()).unwrap_err();
        match err {
            BenchError::Benchmark { name, source } => {
                assert_eq!(name, BenchmarkKind::MultiProcess.label());
                assert!(matches!(*source, BenchError::WorkerSpawn { .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_entry_in_seeded_results_is_rejected() {
        let runner = BenchmarkRunner::new(
            BenchmarkConfig::default().with_duration(Duration::from_millis(20)),
        );
        let mut results = ResultSet::new();
        results.record(BenchmarkKind::SingleThread.key(), 1.0).unwrap();

        let err = runner.run(results, &CancelFlag::new()).unwrap_err();
        assert!(matches!(err, BenchError::DuplicateResult { .. }));
    }
}
