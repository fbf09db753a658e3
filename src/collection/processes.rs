//! Data collection for per-process CPU usage.
//!
//! Both profiles go through sysinfo here. CPU usage is computed from the difference
//! between two refreshes, so a sample always costs at least
//! [`sysinfo::MINIMUM_CPU_UPDATE_INTERVAL`].

use itertools::Itertools;
use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, System};

use crate::utils::general::partial_ordering_desc;

/// The default number of processes listed in a check line.
pub const DEFAULT_TOP_COUNT: usize = 5;

/// A process name and its CPU usage.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessCpu {
    /// The name of the process.
    pub name: String,

    /// CPU usage as a percentage of one core. This can go past 100 for
    /// multithreaded processes.
    pub cpu_percent: f32,
}

impl ProcessCpu {
    pub fn new(name: impl Into<String>, cpu_percent: f32) -> Self {
        Self {
            name: name.into(),
            cpu_percent,
        }
    }
}

/// Samples every process' CPU usage via sysinfo.
pub fn sysinfo_process_cpu(sys: &mut System) -> Vec<ProcessCpu> {
    let refresh_kind = ProcessRefreshKind::nothing().with_cpu();

    sys.refresh_processes_specifics(ProcessesToUpdate::All, true, refresh_kind);
    std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
    sys.refresh_processes_specifics(ProcessesToUpdate::All, true, refresh_kind);

    sys.processes()
        .values()
        // Linux threads show up as their own entries; they're already counted in their parent.
        .filter(|process| process.thread_kind().is_none())
        .map(|process| {
            let name = if process.name().is_empty() {
                process
                    .exe()
                    .and_then(|exe| exe.file_stem())
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_else(|| format!("pid{}", process.pid().as_u32()))
            } else {
                process.name().to_string_lossy().into_owned()
            };

            ProcessCpu::new(name, process.cpu_usage())
        })
        .collect()
}

/// Sorts processes by CPU usage, highest first. The sort is stable, so processes
/// with equal usage keep their relative order.
pub fn sort_by_cpu(processes: &mut [ProcessCpu]) {
    processes.sort_by(|a, b| partial_ordering_desc(a.cpu_percent, b.cpu_percent));
}

/// Formats the `count` busiest processes as space-separated `name=percent` pairs.
pub fn summarize_top(processes: &[ProcessCpu], count: usize) -> String {
    let mut sorted = processes.to_vec();
    sort_by_cpu(&mut sorted);

    sorted
        .iter()
        .take(count)
        .map(|process| {
            // Spaces would break the pair format, so squash them.
            let name = process.name.split_whitespace().join("_");
            format!("{name}={:.1}", process.cpu_percent)
        })
        .join(" ")
}
