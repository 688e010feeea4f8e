// CPU Bench - Free and Open Source Software Statement
//
// This project, cpu-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/mod.rs
// Version: 2.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file declares the benchmark module: the seven timed micro-benchmarks,
// the shared timed loop, the multi-process worker pool, the driver and the
// stdout report.
//
// Tree Location:
// - src/benchmark/mod.rs (benchmark module entry point)
// - Submodules: config, timing, results, runner, report, pool, worker,
//   single_thread, multi_process, multi_thread, math, memory, primes, sorting

pub mod config;
pub mod math;
pub mod memory;
pub mod multi_process;
pub mod multi_thread;
pub mod pool;
pub mod primes;
pub mod report;
pub mod results;
pub mod runner;
pub mod single_thread;
pub mod sorting;
pub mod timing;
pub mod worker;

// Re-export key benchmark types and functions
pub use config::BenchmarkConfig;
pub use pool::{ProcessPool, WorkerCommand};
pub use results::ResultSet;
pub use runner::BenchmarkRunner;
pub use timing::{CancelFlag, Measurement, run_timed};

// Changelog:
// - v2.0.0 (2025-07-02): Replaced hashing benchmarks with the CPU/memory suite.
//   - Dropped jobs and profiler submodules.
//   - Added the seven benchmark submodules plus timing, results, report,
//     pool and worker.
// - v1.0.0 (2025-06-14): Initial benchmark module creation.
