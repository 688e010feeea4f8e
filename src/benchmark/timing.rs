// CPU Bench - Free and Open Source Software Statement
//
// This project, cpu-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/timing.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file implements the time-boxed batch loop shared by every benchmark,
// the measurement it produces and the cancel flag checked between batches.
//
// Tree Location:
// - src/benchmark/timing.rs (timed batch loop)
// - Depends on: std

use crate::Result;
use crate::error::BenchError;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Shared stop signal, checked only at batch boundaries
#[derive(Debug, Clone, Default)]
pub struct CancelFlag {
    cancelled: Arc<AtomicBool>,
}

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Work done by one benchmark call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Units of work (iterations, operations, accesses, primes, sorts)
    pub units: u64,

    /// Fully completed batches
    pub batches: u64,

    /// Wall-clock time from loop start until the last batch finished
    pub elapsed: Duration,
}

impl Measurement {
    /// Units per second, 0 when no time elapsed
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.units as f64 / secs
        } else {
            0.0
        }
    }
}

/// Run `batch` until `duration` has elapsed and return the totals.
///
/// The deadline is checked before each batch, never inside one, so the
/// elapsed time may overrun `duration` by up to one batch. `batch` returns
/// the number of units of work it completed.
pub fn run_timed<F>(duration: Duration, cancel: &CancelFlag, mut batch: F) -> Result<Measurement>
where
    F: FnMut() -> Result<u64>,
{
    let start = Instant::now();
    let mut units = 0u64;
    let mut batches = 0u64;

    while start.elapsed() < duration {
        if cancel.is_cancelled() {
            return Err(BenchError::Interrupted);
        }
        units += batch()?;
        batches += 1;
    }

    Ok(Measurement {
        units,
        batches,
        elapsed: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_run_timed_counts_units_and_batches() {
        let cancel = CancelFlag::new();
        let measurement = run_timed(Duration::from_millis(50), &cancel, || {
            thread::sleep(Duration::from_millis(5));
            Ok(3)
        })
        .expect("timed loop should complete");

        assert!(measurement.batches > 0);
        assert_eq!(measurement.units, measurement.batches * 3);
        assert!(measurement.elapsed >= Duration::from_millis(50));
        assert!(measurement.throughput() > 0.0);
    }

    #[test]
    fn test_run_timed_allows_one_batch_overrun() {
        let cancel = CancelFlag::new();
        let measurement = run_timed(Duration::from_millis(10), &cancel, || {
            thread::sleep(Duration::from_millis(40));
            Ok(1)
        })
        .expect("timed loop should complete");

        assert_eq!(measurement.batches, 1);
        assert!(measurement.elapsed >= Duration::from_millis(40));
    }

    #[test]
    fn test_run_timed_zero_duration_runs_nothing() {
        let cancel = CancelFlag::new();
        let measurement = run_timed(Duration::ZERO, &cancel, || Ok(1)).expect("no batches");
        assert_eq!(measurement.batches, 0);
        assert_eq!(measurement.units, 0);
    }

    #[test]
    fn test_run_timed_stops_on_cancel_at_batch_boundary() {
        let cancel = CancelFlag::new();
        let inner = cancel.clone();
        let mut calls = 0;
        let result = run_timed(Duration::from_secs(10), &cancel, || {
            calls += 1;
            if calls == 3 {
                inner.cancel();
            }
            Ok(1)
        });

        assert!(matches!(result, Err(BenchError::Interrupted)));
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_run_timed_propagates_batch_error() {
        let cancel = CancelFlag::new();
        let result = run_timed(Duration::from_secs(10), &cancel, || {
            Err(BenchError::ThreadPanicked)
        });
        assert!(matches!(result, Err(BenchError::ThreadPanicked)));
    }

    #[test]
    fn test_throughput_without_elapsed_time_is_zero() {
        let measurement = Measurement {
            units: 10,
            batches: 1,
            elapsed: Duration::ZERO,
        };
        assert_eq!(measurement.throughput(), 0.0);
    }
}
