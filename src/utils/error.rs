use std::path::PathBuf;

use thiserror::Error;

use crate::{check::lock::Pid, collection::error::CollectionError};

/// A type alias for handling errors related to a check run.
pub type Result<T> = std::result::Result<T, CheckError>;

/// An error that ends a check run early.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The lock file already existed, so another run is either in progress or hung.
    #[error("lock file '{}' {}, possible hang", .path.display(), describe_holder(.holder))]
    LockConflict { path: PathBuf, holder: Option<Pid> },

    /// The process snapshot utility could not be found.
    #[error("required utility '{program}' was not found")]
    MissingDependency { program: String },

    /// The load or processor count could not be sampled.
    #[error("unable to sample load, {0}")]
    Sample(#[from] CollectionError),

    /// The lock file could not be created, written, or removed.
    #[error("unable to use lock file '{}', {source}", .path.display())]
    LockIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CheckError {
    /// The process exit code for this error. This is a separate namespace from the
    /// status code printed in the check line.
    pub fn exit_code(&self) -> u8 {
        match self {
            CheckError::LockConflict { .. } => 1,
            CheckError::MissingDependency { .. } => 2,
            CheckError::Sample(_) | CheckError::LockIo { .. } => 3,
        }
    }
}

fn describe_holder(holder: &Option<Pid>) -> String {
    match holder {
        Some(pid) => format!("is held by pid {pid}"),
        None => "already exists".to_string(),
    }
}
