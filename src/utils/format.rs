// CPU Bench - Free and Open Source Software Statement
//
// This project, cpu-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/format.rs
// Version: 1.1.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file provides utility functions for formatting benchmark output. It
// formats throughput values with thousands separators, turns result keys into
// readable labels and renders durations for the banner.
//
// Tree Location:
// - src/utils/format.rs (formatting utilities)
// - Depends on: std

use std::time::Duration;

/// Utility functions for formatting benchmark statistics
pub struct FormatUtils;

impl FormatUtils {
    /// Format a value with comma thousands separators and two decimals,
    /// e.g. `1234567.891` -> `1,234,567.89`
    pub fn format_thousands(value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        let fixed = format!("{:.2}", value.abs());
        let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

        let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
        for (i, digit) in integer.chars().enumerate() {
            if i > 0 && (integer.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }

        // "-0.00" is not worth a sign
        let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
        format!("{}{}.{}", sign, grouped, fraction)
    }

    /// Format a throughput value followed by its unit
    pub fn format_rate(value: f64, unit: &str) -> String {
        format!("{} {}", Self::format_thousands(value), unit)
    }

    /// Turn a snake_case result key into a title-cased label,
    /// e.g. `memory_accesses_per_sec` -> `Memory Accesses Per Sec`
    pub fn humanize_key(key: &str) -> String {
        key.split('_')
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => {
                        first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                    }
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Format duration for human-readable output (seconds, minutes)
    pub fn format_duration(duration: Duration) -> String {
        let secs = duration.as_secs_f64();
        if secs < 60.0 {
            if duration.subsec_millis() == 0 {
                format!("{}s", duration.as_secs())
            } else {
                format!("{:.1}s", secs)
            }
        } else {
            format!("{}m {}s", duration.as_secs() / 60, duration.as_secs() % 60)
        }
    }

    /// Format a byte count in GiB
    pub fn format_gib(bytes: u64) -> String {
        format!("{:.1} GiB", bytes as f64 / (1024.0 * 1024.0 * 1024.0))
    }
}


// Changelog:
// - v1.1.0 (2025-07-02): Reworked for benchmark output.
//   - Added format_thousands, format_rate, humanize_key and format_gib.
//   - format_duration now renders plain durations instead of "ago" stamps.
// - v1.0.0 (2025-06-14): Extracted from monolithic main.rs.
