//! The load source for systems exposing `/proc/loadavg`.

use std::{fs, path::PathBuf};

use sysinfo::{CpuRefreshKind, System};

use super::{
    common::{checked_load, LoadSource},
    error::{CollectionError, CollectionResult},
    processes::{sysinfo_process_cpu, ProcessCpu},
    snapshot::SnapshotCommand,
    Profile,
};

/// Where the kernel exposes load averages.
pub const PROC_LOADAVG: &str = "/proc/loadavg";

const DEFAULT_LOG_PATH: &str = "/var/log/loadcheck.log";

/// Reads the load average from the kernel's pseudo-file and counts logical processors.
#[derive(Debug)]
pub struct ProcSource {
    loadavg_path: PathBuf,
    system: System,
}

impl Default for ProcSource {
    fn default() -> Self {
        Self::with_loadavg_path(PROC_LOADAVG)
    }
}

impl ProcSource {
    /// Reads load averages from `path` rather than [`PROC_LOADAVG`].
    pub fn with_loadavg_path(path: impl Into<PathBuf>) -> Self {
        Self {
            loadavg_path: path.into(),
            system: System::new(),
        }
    }
}

impl LoadSource for ProcSource {
    fn profile(&self) -> Profile {
        Profile::Proc
    }

    fn load_average(&mut self) -> CollectionResult<f64> {
        let contents = fs::read_to_string(&self.loadavg_path)?;
        parse_loadavg(&contents)
    }

    fn processor_count(&mut self) -> CollectionResult<usize> {
        self.system.refresh_cpu_list(CpuRefreshKind::nothing());

        match self.system.cpus().len() {
            0 => Err(CollectionError::from_str(
                "no logical processors were reported",
            )),
            count => Ok(count),
        }
    }

    fn process_cpu(&mut self) -> CollectionResult<Vec<ProcessCpu>> {
        Ok(sysinfo_process_cpu(&mut self.system))
    }

    fn default_snapshot(&self) -> SnapshotCommand {
        SnapshotCommand::new("top", ["-b", "-n", "1"])
    }

    fn default_log_path(&self) -> PathBuf {
        PathBuf::from(DEFAULT_LOG_PATH)
    }
}

/// Parses the 1-minute load average, the first field of `/proc/loadavg`.
///
/// The file looks like `0.52 0.58 0.59 1/467 12345`.
pub fn parse_loadavg(contents: &str) -> CollectionResult<f64> {
    let field = contents
        .split_whitespace()
        .next()
        .ok_or_else(|| CollectionError::parsing("the load average file was empty"))?;

    let load = field.parse::<f64>().map_err(|err| {
        CollectionError::parsing(format!("'{field}' is not a valid load average: {err}"))
    })?;

    checked_load(load)
}
