// CPU Bench - Free and Open Source Software Statement
//
// This project, cpu-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/report.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file renders everything the harness prints on stdout: the header
// banner, the per-benchmark progress and result lines, the summary block and
// the composite score. Rendering is kept separate from printing so the text
// can be checked in tests.
//
// Tree Location:
// - src/benchmark/report.rs (stdout report)
// - Depends on: utils/format

use crate::benchmark::results::ResultSet;
use crate::core::host::HostInfo;
use crate::core::types::BenchmarkKind;
use crate::utils::format::FormatUtils;
use std::time::Duration;

const RULE_WIDTH: usize = 50;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Header banner with host details and per-test duration
pub fn render_header(host: &HostInfo, duration: Duration) -> String {
    let mut out = String::new();
    out.push_str(&rule());
    out.push_str("\n🧪 CPU performance benchmark\n");
    out.push_str(&rule());
    out.push('\n');
    if !host.cpu_brand.is_empty() {
        out.push_str(&format!("CPU: {}\n", host.cpu_brand));
    }
    out.push_str(&format!(
        "CPU cores: {} logical / {} physical\n",
        host.logical_cores, host.physical_cores
    ));
    if host.total_memory > 0 {
        out.push_str(&format!("Memory: {}\n", FormatUtils::format_gib(host.total_memory)));
    }
    if let Some(os) = &host.os_version {
        out.push_str(&format!("OS: {}\n", os));
    }
    out.push_str(&format!(
        "Test duration: {} per test\n",
        FormatUtils::format_duration(duration)
    ));
    out
}

/// Line printed before a benchmark starts
pub fn render_progress(kind: BenchmarkKind, workers: Option<usize>) -> String {
    match workers {
        Some(count) => format!("Testing {} performance ({} workers)...", kind.label(), count),
        None => format!("Testing {} performance...", kind.label()),
    }
}

/// Line printed after a benchmark finishes
pub fn render_result(kind: BenchmarkKind, value: f64) -> String {
    format!("{}: {}", kind.label(), FormatUtils::format_rate(value, kind.unit()))
}

/// Summary block: one humanized line per stored result
pub fn render_summary(results: &ResultSet) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&rule());
    out.push_str("\n📊 Results summary:\n");
    out.push_str(&rule());
    out.push('\n');
    for (key, value) in results.iter() {
        out.push_str(&format!(
            "{}: {}\n",
            FormatUtils::humanize_key(key),
            FormatUtils::format_thousands(value)
        ));
    }
    out
}

/// Composite score line, `None` for an empty result set
pub fn render_composite(results: &ResultSet) -> Option<String> {
    results
        .composite_score()
        .map(|score| format!("\n🏆 Composite score: {}", FormatUtils::format_thousands(score)))
}

pub fn print_summary(results: &ResultSet) {
    print!("{}", render_summary(results));
    if let Some(line) = render_composite(results) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_host() -> HostInfo {
        HostInfo {
            logical_cores: 8,
            physical_cores: 4,
            cpu_brand: "Test CPU 9000".to_string(),
            total_memory: 16 * 1024 * 1024 * 1024,
            os_version: None,
        }
    }

    #[test]
    fn test_header_lists_host_and_duration() {
        let header = render_header(&sample_host(), Duration::from_secs(5));
        assert!(header.contains("CPU: Test CPU 9000"));
        assert!(header.contains("8 logical / 4 physical"));
        assert!(header.contains("Memory: 16.0 GiB"));
        assert!(header.contains("Test duration: 5s per test"));
        assert!(!header.contains("OS:"));
    }

    #[test]
    fn test_result_line_has_separators_and_unit() {
        let line = render_result(BenchmarkKind::Memory, 123_456_789.126);
        assert_eq!(line, "Memory access: 123,456,789.13 accesses/sec");
    }

    #[test]
    fn test_progress_line_mentions_worker_count() {
        assert_eq!(
            render_progress(BenchmarkKind::MultiProcess, Some(4)),
            "Testing Multi-process compute performance (4 workers)..."
        );
        assert_eq!(
            render_progress(BenchmarkKind::Sorting, None),
            "Testing Sorting performance..."
        );
    }

    #[test]
    fn test_summary_lists_every_result_with_humanized_label() {
        let mut results = ResultSet::new();
        for (i, kind) in BenchmarkKind::ALL.iter().enumerate() {
            results.record(kind.key(), (i + 1) as f64 * 1000.0).unwrap();
        }
        let summary = render_summary(&results);
        for kind in BenchmarkKind::ALL {
            assert!(summary.contains(&FormatUtils::humanize_key(kind.key())));
        }
        assert!(summary.contains("Single Thread Ops Per Sec: 1,000.00"));
        assert!(summary.contains("Sorts Per Sec: 7,000.00"));

        let composite = render_composite(&results).unwrap();
        assert!(composite.contains("4,000.00"));
    }

    #[test]
    fn test_composite_absent_for_empty_results() {
        assert!(render_composite(&ResultSet::new()).is_none());
    }
}
