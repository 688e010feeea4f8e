// CPU Bench - Free and Open Source Software Statement
//
// This project, cpu-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/workload.rs
// Version: 1.0.1
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file contains the pure compute kernels timed by the benchmarks: the
// Leibniz series for pi (plain and with simulated I/O wait) and the trial
// division primality test. None of them touch shared state, so the same
// function can run in a thread or in a separate worker process.
//
// Tree Location:
// - src/core/workload.rs (benchmark compute kernels)
// - Depends on: std

use std::hint::black_box;
use std::thread;
use std::time::Duration;

/// Approximate pi with `iterations` terms of the Leibniz series.
pub fn leibniz_pi(iterations: u64) -> f64 {
    let mut sum = 0.0f64;
    for i in 0..iterations {
        sum += leibniz_term(black_box(i));
    }
    sum * 4.0
}

/// Same series as [`leibniz_pi`], sleeping for `wait` before every
/// `cadence`-th term (including the first) to stand in for blocking I/O.
pub fn leibniz_pi_with_io_wait(iterations: u64, cadence: u64, wait: Option<Duration>) -> f64 {
    let cadence = cadence.max(1);
    let mut sum = 0.0f64;
    for i in 0..iterations {
        sum += leibniz_term(black_box(i));
        if let (Some(wait), 0) = (wait, i % cadence) {
            thread::sleep(wait);
        }
    }
    sum * 4.0
}

#[inline(always)]
fn leibniz_term(i: u64) -> f64 {
    let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
    sign / (2 * i + 1) as f64
}

/// Trial division up to the integer square root.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut divisor = 2u64;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leibniz_converges_to_pi() {
        let pi = leibniz_pi(1_000_000);
        assert!((pi - std::f64::consts::PI).abs() < 1e-5);
    }

    #[test]
    fn test_leibniz_first_terms() {
        assert_eq!(leibniz_pi(0), 0.0);
        assert_eq!(leibniz_pi(1), 4.0);
        let two_terms = 4.0 * (1.0 - 1.0 / 3.0);
        assert!((leibniz_pi(2) - two_terms).abs() < 1e-12);
    }

    #[test]
    fn test_io_wait_variant_matches_plain_series() {
        let plain = leibniz_pi(5_000);
        let waited = leibniz_pi_with_io_wait(5_000, 1_000, Some(Duration::from_micros(10)));
        let unwaited = leibniz_pi_with_io_wait(5_000, 1_000, None);
        assert_eq!(plain, waited);
        assert_eq!(plain, unwaited);
    }

    #[test]
    fn test_io_wait_sleeps_once_per_cadence() {
        // Terms 0, 1000 and 2000 each sleep
        let start = std::time::Instant::now();
        leibniz_pi_with_io_wait(3_000, 1_000, Some(Duration::from_millis(20)));
        assert!(start.elapsed() >= Duration::from_millis(60));
    }

    #[test]
    fn test_is_prime_small_values() {
        let primes: Vec<u64> = (0..30).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn test_is_prime_squares_and_large_prime() {
        assert!(!is_prime(49));
        assert!(!is_prime(7919 * 7919));
        assert!(is_prime(7919));
        assert!(is_prime(1_000_003));
    }
}

// Changelog:
// - v1.0.1 (2025-07-04): Loop bound in is_prime uses division to avoid overflow.
// - v1.0.0 (2025-07-02): Initial compute kernels.
//   - Leibniz series (plain and I/O-wait variants) and trial-division primality.
