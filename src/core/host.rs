// CPU Bench - Free and Open Source Software Statement
//
// This project, cpu-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/host.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file collects the host description printed in the header banner:
// logical and physical core counts, CPU brand, total memory and OS version.
//
// Tree Location:
// - src/core/host.rs (host information)
// - Depends on: num_cpus, sysinfo

use sysinfo::{CpuRefreshKind, MemoryRefreshKind, RefreshKind, System};

/// Snapshot of the machine being benchmarked
#[derive(Debug, Clone)]
pub struct HostInfo {
    /// Logical execution units (sizes thread cohorts and process pools)
    pub logical_cores: usize,

    pub physical_cores: usize,

    /// CPU brand string, empty if the platform does not report one
    pub cpu_brand: String,

    /// Total memory in bytes
    pub total_memory: u64,

    pub os_version: Option<String>,
}

impl HostInfo {
    pub fn detect() -> Self {
        let sys = System::new_with_specifics(
            RefreshKind::nothing()
                .with_cpu(CpuRefreshKind::nothing())
                .with_memory(MemoryRefreshKind::everything()),
        );

        let cpu_brand = sys
            .cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .unwrap_or_default();

        Self {
            logical_cores: logical_cores(),
            physical_cores: num_cpus::get_physical(),
            cpu_brand,
            total_memory: sys.total_memory(),
            os_version: System::long_os_version(),
        }
    }
}

/// Logical core count reported by the host, never zero.
pub fn logical_cores() -> usize {
    num_cpus::get().max(1)
}

// Changelog:
// - v1.0.0 (2025-07-02): Initial host detection for the header banner.
