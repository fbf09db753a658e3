//! The load source for systems without `/proc`, such as macOS and the BSDs.
//!
//! Load comes from the system's own load average call, and processors are counted
//! as physical cores, matching what a hardware profiler reports.

use std::path::PathBuf;

use sysinfo::{CpuRefreshKind, System};

use super::{
    common::{checked_load, LoadSource},
    error::{CollectionError, CollectionResult},
    processes::{sysinfo_process_cpu, ProcessCpu},
    snapshot::SnapshotCommand,
    Profile,
};

const DEFAULT_LOG_FILE_NAME: &str = "loadcheck.log";

#[derive(Debug)]
pub struct ProfilerSource {
    system: System,
}

impl Default for ProfilerSource {
    fn default() -> Self {
        Self {
            system: System::new(),
        }
    }
}

impl LoadSource for ProfilerSource {
    fn profile(&self) -> Profile {
        Profile::Profiler
    }

    fn load_average(&mut self) -> CollectionResult<f64> {
        cfg_if::cfg_if! {
            if #[cfg(target_family = "unix")] {
                // The API for sysinfo apparently wants you to call it like this, rather than
                // using a &System.
                let sysinfo::LoadAvg { one, .. } = System::load_average();
                checked_load(one)
            } else {
                Err(CollectionError::Unsupported)
            }
        }
    }

    fn processor_count(&mut self) -> CollectionResult<usize> {
        if let Some(cores) = System::physical_core_count().filter(|&cores| cores > 0) {
            return Ok(cores);
        }

        debug!("No physical core count available, falling back to logical processors.");

        self.system.refresh_cpu_list(CpuRefreshKind::nothing());
        match self.system.cpus().len() {
            0 => Err(CollectionError::from_str("no processors were reported")),
            count => Ok(count),
        }
    }

    fn process_cpu(&mut self) -> CollectionResult<Vec<ProcessCpu>> {
        Ok(sysinfo_process_cpu(&mut self.system))
    }

    fn default_snapshot(&self) -> SnapshotCommand {
        SnapshotCommand::new("top", ["-l", "1"])
    }

    fn default_log_path(&self) -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join(DEFAULT_LOG_FILE_NAME)
    }
}
