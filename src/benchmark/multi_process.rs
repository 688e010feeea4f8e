// CPU Bench - Free and Open Source Software Statement
//
// This project, cpu-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/multi_process.rs
// Version: 1.0.1
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// Multi-process compute benchmark. A pool of min(logical cores, 16) worker
// processes is started once; every batch hands each worker the same series
// job and waits for all of them. The pool is closed and joined after the
// timed loop whether or not the loop succeeded.
//
// Tree Location:
// - src/benchmark/multi_process.rs (multi-process benchmark)
// - Depends on: log

use crate::Result;
use crate::benchmark::config::BenchmarkConfig;
use crate::benchmark::pool::{ProcessPool, WorkerCommand};
use crate::benchmark::timing::{CancelFlag, Measurement, run_timed};
use crate::benchmark::worker::WorkRequest;
use crate::core::host::logical_cores;
use log::{debug, info, warn};
use std::time::Duration;

const LOG_TARGET: &str = "cpu_bench::multi_process";

pub fn run(config: &BenchmarkConfig, cancel: &CancelFlag) -> Result<Measurement> {
    let command = match &config.worker_command {
        Some(command) => command.clone(),
        None => WorkerCommand::current_exe()?,
    };
    let processes = config.worker_processes(logical_cores());
    run_with_pool(
        &command,
        processes,
        config.multi_process_iterations,
        config.duration,
        cancel,
    )
}

/// Time pool-wide batches of `iterations` terms per worker on a fresh pool
/// of `processes` workers launched with `command`.
pub fn run_with_pool(
    command: &WorkerCommand,
    processes: usize,
    iterations: u64,
    duration: Duration,
    cancel: &CancelFlag,
) -> Result<Measurement> {
    let mut pool = ProcessPool::spawn(command, processes)?;
    info!(target: LOG_TARGET, "Process pool size {} ({:?})", pool.size(), command.program());

    let jobs = vec![WorkRequest { iterations }; pool.size()];
    let per_batch = iterations * pool.size() as u64;

    let outcome = run_timed(duration, cancel, || {
        let responses = pool.map(&jobs)?;
        debug!(target: LOG_TARGET, "Batch answered by {} workers", responses.len());
        Ok(per_batch)
    });
    let shutdown = pool.join();

    match (outcome, shutdown) {
        (Ok(measurement), Ok(())) => Ok(measurement),
        (Ok(_), Err(cleanup)) => Err(cleanup),
        (Err(err), Ok(())) => Err(err),
        (Err(err), Err(cleanup)) => {
            warn!(target: LOG_TARGET, "Process pool shutdown also failed: {}", cleanup);
            Err(err)
        }
    }
}

// Changelog:
// - v1.0.1 (2025-07-04): Shutdown errors never replace the timed loop's error.
// - v1.0.0 (2025-07-02): Initial multi-process benchmark.
