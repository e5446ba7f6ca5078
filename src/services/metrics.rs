//! # System Metrics
//!
//! Point-in-time resource snapshot carried in the composite health response.
//! No smoothing, no history; every request samples fresh.

use serde::{Deserialize, Serialize};
use sysinfo::{Disks, MINIMUM_CPU_UPDATE_INTERVAL, ProcessesToUpdate, System};

/// Resource usage of the host and the current process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemMetrics {
    pub cpu_percent: f32,
    pub memory_percent: f32,
    pub memory_mb: f64,
    pub disk_percent: f32,
    pub pid: u32,
    pub threads: usize,
}

/// Takes a snapshot of the current system resource usage.
///
/// CPU usage needs two samples a short interval apart to be meaningful, so
/// this holds the request for [`MINIMUM_CPU_UPDATE_INTERVAL`]. Thread counts
/// are only available on Linux; elsewhere `threads` is reported as 0 to keep
/// the response shape stable.
pub async fn system_metrics() -> SystemMetrics {
    let mut sys = System::new();

    sys.refresh_cpu_usage();
    tokio::time::sleep(MINIMUM_CPU_UPDATE_INTERVAL).await;
    sys.refresh_cpu_usage();
    sys.refresh_memory();

    let threads = sysinfo::get_current_pid()
        .ok()
        .and_then(|pid| {
            sys.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);
            sys.process(pid)
                .and_then(|process| process.tasks())
                .map(|tasks| tasks.len())
        })
        .unwrap_or(0);

    let total_memory = sys.total_memory();
    let used_memory = sys.used_memory();
    let memory_percent = if total_memory == 0 {
        0.0
    } else {
        used_memory as f32 / total_memory as f32 * 100.0
    };

    let disks = Disks::new_with_refreshed_list();
    let (disk_total, disk_available) = disks
        .list()
        .iter()
        .fold((0u64, 0u64), |(total, available), disk| {
            (total + disk.total_space(), available + disk.available_space())
        });
    let disk_percent = if disk_total == 0 {
        0.0
    } else {
        (disk_total - disk_available) as f32 / disk_total as f32 * 100.0
    };

    SystemMetrics {
        cpu_percent: sys.global_cpu_usage(),
        memory_percent,
        memory_mb: used_memory as f64 / (1024.0 * 1024.0),
        disk_percent,
        pid: std::process::id(),
        threads,
    }
}
