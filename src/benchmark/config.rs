// CPU Bench - Free and Open Source Software Statement
//
// This project, cpu-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/config.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file holds the per-run benchmark configuration: the duration every
// benchmark runs for and the workload size constants. The CLI always uses
// the defaults; the builder methods exist for embedders and tests.
//
// Tree Location:
// - src/benchmark/config.rs (benchmark configuration)
// - Depends on: std

use crate::benchmark::pool::WorkerCommand;
use std::time::Duration;

/// Hard cap on multi-process pool size
pub const MAX_WORKER_PROCESSES: usize = 16;

/// Configuration for benchmark execution
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Target wall-clock duration of each benchmark
    pub duration: Duration,

    /// Series terms per single-thread batch
    pub single_thread_iterations: u64,

    /// Series terms per worker per multi-process batch
    pub multi_process_iterations: u64,

    pub max_worker_processes: usize,

    /// How to launch a multi-process worker; `None` re-executes the
    /// current binary with the hidden `worker` subcommand
    pub worker_command: Option<WorkerCommand>,

    /// Series terms per thread per multi-thread batch
    pub multi_thread_iterations: u64,

    /// Sleep cadence of the multi-thread workload, in series terms
    pub io_wait_every: u64,

    /// Simulated I/O wait; `None` makes the multi-thread benchmark purely
    /// compute-bound
    pub io_wait: Option<Duration>,

    /// Inner iterations per math batch (4 operations each)
    pub math_iterations: u64,

    /// Elements in the memory-access array
    pub memory_array_len: usize,

    /// Elements per sort
    pub sort_array_len: usize,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_secs(5),
            single_thread_iterations: 1_000_000,
            multi_process_iterations: 1_000_000,
            max_worker_processes: MAX_WORKER_PROCESSES,
            worker_command: None,
            multi_thread_iterations: 100_000,
            io_wait_every: 1_000,
            io_wait: Some(Duration::from_millis(1)),
            math_iterations: 10_000,
            memory_array_len: 1_000_000,
            sort_array_len: 10_000,
        }
    }
}

impl BenchmarkConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn with_worker_command(mut self, command: WorkerCommand) -> Self {
        self.worker_command = Some(command);
        self
    }

    #[must_use]
    pub fn with_io_wait(mut self, io_wait: Option<Duration>) -> Self {
        self.io_wait = io_wait;
        self
    }

    #[must_use]
    pub fn with_memory_array_len(mut self, len: usize) -> Self {
        self.memory_array_len = len;
        self
    }

    #[must_use]
    pub fn with_sort_array_len(mut self, len: usize) -> Self {
        self.sort_array_len = len;
        self
    }

    /// Worker processes for a host with `hardware_threads` logical cores
    pub fn worker_processes(&self, hardware_threads: usize) -> usize {
        hardware_threads.min(self.max_worker_processes).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_workloads() {
        let config = BenchmarkConfig::default();
        assert_eq!(config.duration, Duration::from_secs(5));
        assert_eq!(config.single_thread_iterations, 1_000_000);
        assert_eq!(config.multi_thread_iterations, 100_000);
        assert_eq!(config.io_wait_every, 1_000);
        assert_eq!(config.memory_array_len, 1_000_000);
        assert_eq!(config.sort_array_len, 10_000);
    }

    #[test]
    fn test_worker_processes_is_capped() {
        let config = BenchmarkConfig::default();
        assert_eq!(config.worker_processes(1), 1);
        assert_eq!(config.worker_processes(4), 4);
        assert_eq!(config.worker_processes(16), 16);
        assert_eq!(config.worker_processes(64), 16);
        assert_eq!(config.worker_processes(0), 1);
    }

    #[test]
    fn test_builder_overrides() {
        let config = BenchmarkConfig::new()
            .with_duration(Duration::from_millis(500))
            .with_io_wait(None)
            .with_memory_array_len(1_000);
        assert_eq!(config.duration, Duration::from_millis(500));
        assert_eq!(config.io_wait, None);
        assert_eq!(config.memory_array_len, 1_000);
    }
}
