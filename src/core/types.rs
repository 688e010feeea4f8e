// CPU Bench - Free and Open Source Software Statement
//
// This project, cpu-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/types.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file defines core data structures for the benchmark harness: the
// command-line arguments and the list of benchmarks with their result keys,
// display labels and units.
//
// Tree Location:
// - src/core/types.rs (core data structures)
// - Depends on: clap

use clap::{Parser, Subcommand};

/// Command-line arguments for the benchmark harness
#[derive(Parser, Debug)]
#[command(
    name = "cpubench",
    version,
    disable_help_subcommand = true,
    about = "CPU and memory throughput fingerprint",
    long_about = "Runs seven fixed-duration micro-benchmarks in sequence:\n\
                  single-thread compute, multi-process compute, multi-thread compute (I/O-bound),\n\
                  math functions, memory access, prime search and sorting.\n\n\
                  Each benchmark runs for 5 seconds and reports a throughput value. The final\n\
                  composite score is the plain average of all seven values.\n\n\
                  Logging goes to stderr and is controlled with RUST_LOG (default: warn)."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Serve multi-process benchmark jobs over stdin/stdout
    #[command(hide = true)]
    Worker,
}

/// The seven benchmarks, in the order the runner executes them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BenchmarkKind {
    SingleThread,
    MultiProcess,
    MultiThread,
    Math,
    Memory,
    Primes,
    Sorting,
}

impl BenchmarkKind {
    pub const ALL: [BenchmarkKind; 7] = [
        BenchmarkKind::SingleThread,
        BenchmarkKind::MultiProcess,
        BenchmarkKind::MultiThread,
        BenchmarkKind::Math,
        BenchmarkKind::Memory,
        BenchmarkKind::Primes,
        BenchmarkKind::Sorting,
    ];

    /// Key under which the result is stored in the result set
    pub const fn key(&self) -> &'static str {
        match self {
            BenchmarkKind::SingleThread => "single_thread_ops_per_sec",
            BenchmarkKind::MultiProcess => "multi_process_ops_per_sec",
            BenchmarkKind::MultiThread => "multi_thread_ops_per_sec",
            BenchmarkKind::Math => "math_ops_per_sec",
            BenchmarkKind::Memory => "memory_accesses_per_sec",
            BenchmarkKind::Primes => "primes_per_sec",
            BenchmarkKind::Sorting => "sorts_per_sec",
        }
    }

    /// Label used on progress and result lines
    pub const fn label(&self) -> &'static str {
        match self {
            BenchmarkKind::SingleThread => "Single-thread compute",
            BenchmarkKind::MultiProcess => "Multi-process compute",
            BenchmarkKind::MultiThread => "Multi-thread compute (I/O-bound)",
            BenchmarkKind::Math => "Math operations",
            BenchmarkKind::Memory => "Memory access",
            BenchmarkKind::Primes => "Prime generation",
            BenchmarkKind::Sorting => "Sorting",
        }
    }

    pub const fn unit(&self) -> &'static str {
        match self {
            BenchmarkKind::SingleThread
            | BenchmarkKind::MultiProcess
            | BenchmarkKind::MultiThread
            | BenchmarkKind::Math => "ops/sec",
            BenchmarkKind::Memory => "accesses/sec",
            BenchmarkKind::Primes => "primes/sec",
            BenchmarkKind::Sorting => "sorts/sec",
        }
    }
}


// Changelog:
// - v1.0.0 (2025-07-02): Replaced miner types with harness types.
//   - Args now has no user-facing flags; the hidden worker subcommand is the
//     entry point for multi-process benchmark workers.
//   - Added BenchmarkKind with result keys, labels and units.
