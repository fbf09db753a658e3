//! This is the main file to house data collection functions.
//!
//! Sampling is split into two profiles behind [`LoadSource`]: [`ProcSource`] for
//! systems with `/proc/loadavg`, and [`ProfilerSource`] for everything else.

pub mod common;
pub mod error;
pub mod processes;
pub mod procfs;
pub mod profiler;
pub mod snapshot;

use std::{fmt, path::Path, str::FromStr};

use serde::Deserialize;

pub use self::{
    common::LoadSource, procfs::ProcSource, profiler::ProfilerSource, snapshot::SnapshotCommand,
};

/// How load and processor counts are sampled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Picks [`Profile::Proc`] if `/proc/loadavg` exists, otherwise [`Profile::Profiler`].
    #[default]
    Auto,
    Proc,
    Profiler,
}

impl Profile {
    /// Resolves [`Profile::Auto`] to a concrete profile for this system.
    pub fn detect(self) -> Profile {
        match self {
            Profile::Auto => {
                if Path::new(procfs::PROC_LOADAVG).exists() {
                    Profile::Proc
                } else {
                    Profile::Profiler
                }
            }
            profile => profile,
        }
    }

    /// Creates the [`LoadSource`] for this profile, detecting one if needed.
    pub fn source(self) -> Box<dyn LoadSource> {
        match self.detect() {
            Profile::Proc => Box::new(ProcSource::default()),
            Profile::Profiler | Profile::Auto => Box::new(ProfilerSource::default()),
        }
    }
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Profile::Auto),
            "proc" => Ok(Profile::Proc),
            "profiler" => Ok(Profile::Profiler),
            _ => Err(format!("'{s}' is not a valid profile")),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Profile::Auto => "auto",
            Profile::Proc => "proc",
            Profile::Profiler => "profiler",
        })
    }
}
