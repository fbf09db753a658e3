//! Common code amongst all load sources.

use std::path::PathBuf;

use super::{
    error::CollectionResult, processes::ProcessCpu, snapshot::SnapshotCommand, Profile,
};

/// The trait representing what a per-platform load source should implement.
pub trait LoadSource {
    /// The profile this source implements.
    fn profile(&self) -> Profile;

    /// Return the 1-minute load average.
    fn load_average(&mut self) -> CollectionResult<f64>;

    /// Return the number of processors the threshold is scaled by. This is never zero.
    fn processor_count(&mut self) -> CollectionResult<usize>;

    /// Return the CPU usage of every process, in no particular order.
    fn process_cpu(&mut self) -> CollectionResult<Vec<ProcessCpu>>;

    /// The utility used to dump the process table when none is configured.
    fn default_snapshot(&self) -> SnapshotCommand;

    /// Where the log file goes when none is configured.
    fn default_log_path(&self) -> PathBuf;

    /// Return a full snapshot of the process table as text.
    fn process_snapshot(&mut self, command: &SnapshotCommand) -> CollectionResult<String> {
        command.capture()
    }
}

/// Validates a sampled load average.
pub(crate) fn checked_load(load: f64) -> CollectionResult<f64> {
    if load.is_finite() && load >= 0.0 {
        Ok(load)
    } else {
        Err(super::error::CollectionError::parsing(format!(
            "'{load}' is not a valid load average"
        )))
    }
}
