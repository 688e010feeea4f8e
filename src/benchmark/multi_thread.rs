// CPU Bench - Free and Open Source Software Statement
//
// This project, cpu-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/multi_thread.rs
// Version: 1.0.2
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// Multi-thread compute benchmark. Every batch spawns one scoped thread per
// logical core; each thread runs a shortened series with a short sleep every
// `io_wait_every` terms and writes its result into its own slot of a shared
// buffer. The batch ends when the whole cohort has joined.
//
// Tree Location:
// - src/benchmark/multi_thread.rs (multi-thread benchmark)
// - Depends on: crossbeam, log

use crate::Result;
use crate::benchmark::config::BenchmarkConfig;
use crate::benchmark::timing::{CancelFlag, Measurement, run_timed};
use crate::core::workload::leibniz_pi_with_io_wait;
use crate::error::BenchError;
use log::{debug, info};
use std::time::Duration;

const LOG_TARGET: &str = "cpu_bench::multi_thread";

/// Value of a result slot no thread has written yet
pub const UNWRITTEN: f64 = f64::NAN;

/// Workload of one thread in the cohort
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CohortWork {
    pub iterations: u64,
    pub io_wait_every: u64,
    pub io_wait: Option<Duration>,
}

/// Run one batch: one thread per slot of `results`, each writing only its
/// own slot. Slots are reset to [`UNWRITTEN`] first and checked after the
/// join, so a slot a thread failed to fill is reported as an error.
pub fn run_cohort(work: CohortWork, results: &mut [f64]) -> Result<()> {
    results.fill(UNWRITTEN);

    crossbeam::scope(|scope| -> Result<()> {
        for (index, slot) in results.iter_mut().enumerate() {
            scope
                .builder()
                .name(format!("bench-thread-{}", index))
                .spawn(move |_| {
                    *slot = leibniz_pi_with_io_wait(work.iterations, work.io_wait_every, work.io_wait);
                })
                .map_err(|source| BenchError::ThreadSpawn { index, source })?;
        }
        Ok(())
    })
    .map_err(|_| BenchError::ThreadPanicked)??;

    let missing = results.iter().filter(|value| value.is_nan()).count();
    if missing > 0 {
        return Err(BenchError::IncompleteBatch {
            missing,
            total: results.len(),
        });
    }
    Ok(())
}

/// Run the benchmark with a cohort of `threads` threads per batch
pub fn run_with_threads(
    config: &BenchmarkConfig,
    threads: usize,
    cancel: &CancelFlag,
) -> Result<Measurement> {
    let threads = threads.max(1);
    let work = CohortWork {
        iterations: config.multi_thread_iterations,
        io_wait_every: config.io_wait_every,
        io_wait: config.io_wait,
    };
    info!(target: LOG_TARGET, "Thread cohort size {}, I/O wait {:?}", threads, work.io_wait);

    let mut results = vec![UNWRITTEN; threads];
    let per_batch = work.iterations * threads as u64;
    let measurement = run_timed(config.duration, cancel, || {
        run_cohort(work, &mut results)?;
        Ok(per_batch)
    })?;

    debug!(target: LOG_TARGET, "Last cohort results: {:?}", results);
    Ok(measurement)
}


// Changelog:
// - v1.0.2 (2025-07-04): io_wait is optional so the sleep can be dropped.
// - v1.0.1 (2025-07-03): Result slots reset to NaN and verified after join.
// - v1.0.0 (2025-07-02): Initial multi-thread benchmark on crossbeam scopes.
