// CPU Bench - Free and Open Source Software Statement
//
// This project, cpu-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/error.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file defines the error taxonomy of the benchmark harness. It separates
// user interruption from unexpected faults so the binary can map each class
// to its own notice and exit code.
//
// Tree Location:
// - src/error.rs (harness error types)
// - Depends on: thiserror, serde_json

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("Benchmark interrupted by user")]
    Interrupted,

    #[error("Failed to launch worker process {program:?}")]
    WorkerSpawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Pipe I/O with worker {worker} failed")]
    WorkerIo {
        worker: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("Worker stdio failed")]
    WorkerStdio {
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed message on worker channel")]
    WorkerProtocol {
        #[from]
        source: serde_json::Error,
    },

    #[error("Worker {worker} closed its output before answering")]
    WorkerDisconnected { worker: usize },

    #[error("Worker {worker} exited with {status}")]
    WorkerExit { worker: usize, status: String },

    #[error("Failed to spawn benchmark thread {index}")]
    ThreadSpawn {
        index: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("A benchmark thread panicked")]
    ThreadPanicked,

    #[error("Thread cohort finished with {missing} of {total} result slots unwritten")]
    IncompleteBatch { missing: usize, total: usize },

    #[error("Result {key} was already recorded")]
    DuplicateResult { key: String },

    #[error("{name} benchmark failed: {source}")]
    Benchmark {
        name: &'static str,
        #[source]
        source: Box<BenchError>,
    },

    #[error("Benchmark task failed: {message}")]
    Runtime { message: String },
}

impl BenchError {
    /// True when the error (or the one it wraps) is a user interruption.
    pub fn is_interrupted(&self) -> bool {
        match self {
            BenchError::Interrupted => true,
            BenchError::Benchmark { source, .. } => source.is_interrupted(),
            _ => false,
        }
    }
}
