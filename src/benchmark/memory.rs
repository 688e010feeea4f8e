// CPU Bench - Free and Open Source Software Statement
//
// This project, cpu-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/memory.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// Memory-access throughput benchmark. One array of random values is
// allocated up front and rewritten in place on every scan. The array stays
// warm in cache after the first pass; that is the measured behaviour.
//
// Tree Location:
// - src/benchmark/memory.rs (memory-access benchmark)
// - Depends on: rand

use crate::Result;
use crate::benchmark::config::BenchmarkConfig;
use crate::benchmark::timing::{CancelFlag, Measurement, run_timed};
use rand::Rng;

/// Fixed-size array scanned read-modify-write
pub struct MemoryScanner {
    data: Vec<f64>,
}

impl MemoryScanner {
    /// Allocate `len` uniform random values in `[0, 1)`
    pub fn new(len: usize) -> Self {
        let mut rng = rand::thread_rng();
        let data = (0..len).map(|_| rng.r#gen::<f64>()).collect();
        Self { data }
    }

    /// One full pass: each element becomes `sin(v) * cos(v)`.
    /// Returns the number of elements accessed.
    pub fn scan(&mut self) -> u64 {
        for value in self.data.iter_mut() {
            *value = value.sin() * value.cos();
        }
        self.data.len() as u64
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.data
    }
}

pub fn run(config: &BenchmarkConfig, cancel: &CancelFlag) -> Result<Measurement> {
    let mut scanner = MemoryScanner::new(config.memory_array_len);
    run_timed(config.duration, cancel, || Ok(scanner.scan()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_length_is_invariant_across_scans() {
        let mut scanner = MemoryScanner::new(10_000);
        for _ in 0..25 {
            assert_eq!(scanner.scan(), 10_000);
        }
        assert_eq!(scanner.len(), 10_000);
    }

    #[test]
    fn test_scan_applies_transform_in_place() {
        let mut scanner = MemoryScanner::new(64);
        let before = scanner.values().to_vec();
        scanner.scan();
        for (old, new) in before.iter().zip(scanner.values()) {
            assert_eq!(*new, old.sin() * old.cos());
        }
    }

    #[test]
    fn test_counts_one_access_per_element() {
        let config = BenchmarkConfig::default()
            .with_duration(Duration::from_millis(100))
            .with_memory_array_len(50_000);
        let measurement = run(&config, &CancelFlag::new()).unwrap();
        assert!(measurement.batches > 0);
        assert_eq!(measurement.units, measurement.batches * 50_000);
    }
}
