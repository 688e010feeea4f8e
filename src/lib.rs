// CPU Bench - Free and Open Source Software Statement
//
// This project, cpu-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/lib.rs
// Version: 2.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file serves as the main library entry point for cpu-bench. It exports
// the modules and types the binary and the integration tests use.
//
// Tree Location:
// - src/lib.rs (root library file)
// - Exports modules: benchmark, core, error, utils

pub mod benchmark;
pub mod core;
pub mod error;
pub mod utils;

// Re-export commonly used types at the crate root for convenience
pub use crate::benchmark::{BenchmarkConfig, BenchmarkRunner, CancelFlag, ResultSet};
pub use crate::core::{BenchmarkKind, HostInfo};
pub use crate::error::BenchError;

pub type Result<T> = std::result::Result<T, BenchError>;

// Changelog:
// - v2.0.0 (2025-07-02): Library root for the benchmark harness.
//   - Removed miner, pool, help and tui exports.
//   - Result now carries the typed BenchError instead of a boxed error.
// - v1.0.0 (2025-06-14): Initial modular breakout from monolithic main.rs.
