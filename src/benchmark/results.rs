// CPU Bench - Free and Open Source Software Statement
//
// This project, cpu-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/results.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file implements the result set collected by the runner: one named
// throughput value per benchmark, kept in insertion order, plus the
// composite score.
//
// Tree Location:
// - src/benchmark/results.rs (result aggregation)
// - Depends on: std

use crate::Result;
use crate::error::BenchError;

/// Ordered benchmark results, append-only
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    entries: Vec<(String, f64)>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a result. A key can only be recorded once.
    pub fn record(&mut self, key: impl Into<String>, value: f64) -> Result<()> {
        let key = key.into();
        if self.get(&key).is_some() {
            return Err(BenchError::DuplicateResult { key });
        }
        self.entries.push((key, value));
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| *value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Unweighted arithmetic mean of every stored value, `None` when empty.
    /// Units differ between benchmarks; this is a coarse fingerprint.
    pub fn composite_score(&self) -> Option<f64> {
        if self.entries.is_empty() {
            return None;
        }
        let sum: f64 = self.entries.iter().map(|(_, v)| v).sum();
        Some(sum / self.entries.len() as f64)
    }
}
