// CPU Bench - Free and Open Source Software Statement
//
// This project, cpu-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/primes.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// Prime-search throughput benchmark. Successive integers from 2 are tested
// by trial division; the metric is primes found per second, not numbers
// tested.

use crate::Result;
use crate::benchmark::config::BenchmarkConfig;
use crate::benchmark::timing::{CancelFlag, Measurement, run_timed};
use crate::core::workload::is_prime;

/// Cursor over the integers with a running prime count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeSearch {
    cursor: u64,
    found: u64,
}

impl Default for PrimeSearch {
    fn default() -> Self {
        Self { cursor: 2, found: 0 }
    }
}

impl PrimeSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Test the current number, then advance by one. Returns true if the
    /// tested number was prime.
    pub fn step(&mut self) -> bool {
        let prime = is_prime(self.cursor);
        if prime {
            self.found += 1;
        }
        self.cursor += 1;
        prime
    }

    /// Next number to be tested
    pub fn cursor(&self) -> u64 {
        self.cursor
    }

    pub fn found(&self) -> u64 {
        self.found
    }
}

pub fn run(config: &BenchmarkConfig, cancel: &CancelFlag) -> Result<Measurement> {
    let mut search = PrimeSearch::new();
    run_timed(config.duration, cancel, || Ok(u64::from(search.step())))
}
