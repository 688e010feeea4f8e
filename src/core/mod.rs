// CPU Bench - Free and Open Source Software Statement
//
// This project, cpu-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/mod.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file is the module declaration for the core functionality of the
// benchmark harness. It declares submodules and re-exports key types for use
// throughout the project.

pub mod host;
pub mod types;
pub mod workload;

// Re-export the most commonly used items
pub use host::{HostInfo, logical_cores};
pub use types::{Args, BenchmarkKind, Command};
pub use workload::{is_prime, leibniz_pi, leibniz_pi_with_io_wait};
