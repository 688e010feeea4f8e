// CPU Bench - Free and Open Source Software Statement
//
// This project, cpu-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/worker.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file implements the worker side of the multi-process benchmark. A
// worker reads newline-delimited JSON requests on stdin, computes the series
// for the requested number of terms and writes one JSON response per request
// on stdout. It exits cleanly when stdin is closed.
//
// Tree Location:
// - src/benchmark/worker.rs (multi-process worker loop)
// - Depends on: serde, serde_json, log

use crate::Result;
use crate::core::workload::leibniz_pi;
use crate::error::BenchError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Write};

const LOG_TARGET: &str = "cpu_bench::worker";

/// One unit of work sent to a worker process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkRequest {
    pub iterations: u64,
}

/// Result of one [`WorkRequest`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkResponse {
    pub value: f64,
}

/// The cross-process work function. Pure: same request, same response.
pub fn work(request: WorkRequest) -> WorkResponse {
    WorkResponse {
        value: leibniz_pi(request.iterations),
    }
}

/// Answer requests from `input` on `output` until `input` reaches EOF.
/// Returns the number of requests served.
pub fn serve<R: BufRead, W: Write>(input: R, mut output: W) -> Result<u64> {
    let mut served = 0u64;
    for line in input.lines() {
        let line = line.map_err(|source| BenchError::WorkerStdio { source })?;
        if line.trim().is_empty() {
            continue;
        }

        let request: WorkRequest = serde_json::from_str(&line)?;
        let response = work(request);

        let mut encoded = serde_json::to_vec(&response)?;
        encoded.push(b'\n');
        output
            .write_all(&encoded)
            .and_then(|_| output.flush())
            .map_err(|source| BenchError::WorkerStdio { source })?;
        served += 1;
    }

    debug!(target: LOG_TARGET, "Input closed after {} requests", served);
    Ok(served)
}

/// Worker entry point used by the hidden `worker` subcommand
pub fn serve_stdio() -> Result<u64> {
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    serve(stdin, stdout)
}
