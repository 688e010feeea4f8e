// CPU Bench - Free and Open Source Software Statement
//
// This project, cpu-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/sorting.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// Sort-throughput benchmark: generate a fresh random array and sort it
// completely, once per batch.

use crate::Result;
use crate::benchmark::config::BenchmarkConfig;
use crate::benchmark::timing::{CancelFlag, Measurement, run_timed};
use rand::Rng;
use std::hint::black_box;

/// `len` random values, sorted ascending
pub fn random_sorted(rng: &mut impl Rng, len: usize) -> Vec<f64> {
    let mut values: Vec<f64> = (0..len).map(|_| rng.r#gen::<f64>()).collect();
    values.sort_unstable_by(f64::total_cmp);
    values
}

pub fn run(config: &BenchmarkConfig, cancel: &CancelFlag) -> Result<Measurement> {
    let mut rng = rand::thread_rng();
    let len = config.sort_array_len;
    run_timed(config.duration, cancel, || {
        black_box(random_sorted(&mut rng, len));
        Ok(1)
    })
}
