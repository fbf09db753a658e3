//! The check itself: a single pass from taking the lock to building the status line.

pub mod journal;
pub mod lock;
pub mod status;

use self::{
    journal::Journal,
    lock::{is_holder_alive, LockFile},
    status::{CheckLine, CheckStatus},
};
use crate::{
    collection::{processes::summarize_top, LoadSource, SnapshotCommand},
    constants::THRESHOLD_PRECISION,
    options::CheckOptions,
    utils::{
        error::{CheckError, Result},
        general::round_to_places,
    },
};

/// The load and processor count sampled at the start of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadSample {
    pub load: f64,
    pub processors: usize,
}

/// The outcome of a run: the line to print and the code to exit with.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    pub line: CheckLine,
    pub exit_code: u8,
}

impl CheckReport {
    pub fn status(&self) -> CheckStatus {
        self.line.status
    }
}

/// The load allowed for `processors` processors at `rate` per processor, rounded
/// to two decimal places.
pub fn compute_threshold(rate: f64, processors: usize) -> f64 {
    round_to_places(rate * processors as f64, THRESHOLD_PRECISION)
}

/// Runs one check against the given options and source.
pub struct Checker<'a> {
    options: &'a CheckOptions,
    source: &'a mut dyn LoadSource,
    journal: Journal,
    snapshot: SnapshotCommand,
}

impl<'a> Checker<'a> {
    pub fn new(options: &'a CheckOptions, source: &'a mut dyn LoadSource) -> Self {
        let journal = Journal::new(
            options
                .log_file
                .clone()
                .unwrap_or_else(|| source.default_log_path()),
        );
        let snapshot = options
            .snapshot
            .clone()
            .unwrap_or_else(|| source.default_snapshot());

        Self {
            options,
            source,
            journal,
            snapshot,
        }
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Runs the check. Failures are recorded in the log and turned into an
    /// UNKNOWN report rather than returned.
    pub fn run(&mut self) -> CheckReport {
        debug!(
            "Running the '{}' profile, logging to {}.",
            self.source.profile(),
            self.journal.path().display()
        );

        match self.try_run() {
            Ok(report) => report,
            Err(err) => self.report_failure(err),
        }
    }

    fn try_run(&mut self) -> Result<CheckReport> {
        let lock = LockFile::acquire(&self.options.lock_file)?;

        self.check_dependencies()?;

        let sample = self.sample()?;
        let threshold = compute_threshold(self.options.rate, sample.processors);
        debug!(
            "Load is {:.2} against a threshold of {threshold:.2} ({} per CPU for {} processors).",
            sample.load, self.options.rate, sample.processors
        );

        let status = if sample.load > threshold {
            self.record_exceedance(&sample, threshold);
            CheckStatus::Warning
        } else {
            CheckStatus::Ok
        };

        let summary = self.top_summary();

        if let Err(err) = lock.release() {
            warn!("{err}");
        }

        Ok(CheckReport {
            line: CheckLine {
                status,
                check_name: self.options.check_name.clone(),
                summary,
                load: Some(sample.load),
            },
            exit_code: 0,
        })
    }

    fn check_dependencies(&self) -> Result<()> {
        match self.snapshot.resolve() {
            Some(path) => {
                debug!("Found '{}' at {}.", self.snapshot.program, path.display());
                Ok(())
            }
            None => Err(CheckError::MissingDependency {
                program: self.snapshot.program.clone(),
            }),
        }
    }

    fn sample(&mut self) -> Result<LoadSample> {
        let load = self.source.load_average()?;
        let processors = self.source.processor_count()?;

        Ok(LoadSample { load, processors })
    }

    /// Logs the exceedance line followed by the full process snapshot. Problems
    /// writing the log don't change the check's status.
    fn record_exceedance(&mut self, sample: &LoadSample, threshold: f64) {
        let message = format!(
            "Load of {:.2} exceeds limit of {threshold:.2}, or {} per CPU for {} processors",
            sample.load, self.options.rate, sample.processors
        );
        if let Err(err) = self.journal.append_line(&message) {
            warn!("Failed to write to {}: {err}", self.journal.path().display());
            return;
        }

        let written = match self.source.process_snapshot(&self.snapshot) {
            Ok(snapshot) => self.journal.append_block(&snapshot),
            Err(err) => {
                warn!("Unable to capture a process snapshot: {err}");
                self.journal.append_line(&format!(
                    "Unable to capture process snapshot with '{}': {err}",
                    self.snapshot
                ))
            }
        };

        if let Err(err) = written {
            warn!("Failed to write to {}: {err}", self.journal.path().display());
        }
    }

    fn top_summary(&mut self) -> String {
        match self.source.process_cpu() {
            Ok(processes) => summarize_top(&processes, self.options.top_count),
            Err(err) => {
                warn!("Unable to sample process CPU usage: {err}");
                String::new()
            }
        }
    }

    fn report_failure(&self, err: CheckError) -> CheckReport {
        if let CheckError::LockConflict {
            path,
            holder: Some(pid),
        } = &err
        {
            if is_holder_alive(*pid) == Some(false) {
                warn!(
                    "Lock holder pid {pid} is no longer running; remove {} if the previous run crashed.",
                    path.display()
                );
            }
        }

        if let Err(log_err) = self.journal.append_line(&format!("Aborted, {err}")) {
            warn!(
                "Failed to write to {}: {log_err}",
                self.journal.path().display()
            );
        }

        CheckReport {
            line: CheckLine {
                status: CheckStatus::Unknown,
                check_name: self.options.check_name.clone(),
                summary: err.to_string(),
                load: None,
            },
            exit_code: err.exit_code(),
        }
    }
}
