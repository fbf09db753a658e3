//! A single-instance guard backed by a lock file holding the owner's pid.

use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::utils::error::{CheckError, Result};

/// A process ID as written to the lock file.
pub type Pid = u32;

/// Ownership of a lock file. The file is removed when this is dropped, so error
/// paths and panics after acquisition still clean up.
#[derive(Debug)]
pub struct LockFile {
    path: PathBuf,
    released: bool,
}

impl LockFile {
    /// Atomically creates the lock file at `path` and writes the current pid into it.
    ///
    /// If the file already exists, this returns [`CheckError::LockConflict`] and
    /// leaves the existing file untouched.
    pub fn acquire(path: &Path) -> Result<Self> {
        let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                return Err(CheckError::LockConflict {
                    path: path.to_path_buf(),
                    holder: read_holder(path),
                });
            }
            Err(err) => return Err(lock_io(path, err)),
        };

        // Hold the guard before writing so a failed write still removes the file.
        let lock = LockFile {
            path: path.to_path_buf(),
            released: false,
        };
        write!(file, "{}", std::process::id())
            .and_then(|()| file.sync_all())
            .map_err(|err| lock_io(path, err))?;

        debug!("Acquired lock file {}.", path.display());

        Ok(lock)
    }

    /// The path of the held lock file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Removes the lock file.
    pub fn release(mut self) -> Result<()> {
        self.released = true;
        remove_lock(&self.path).map_err(|err| lock_io(&self.path, err))?;
        debug!("Released lock file {}.", self.path.display());

        Ok(())
    }
}

impl Drop for LockFile {
    fn drop(&mut self) {
        if !self.released {
            if let Err(err) = remove_lock(&self.path) {
                warn!(
                    "Failed to remove lock file {}: {err}",
                    self.path.display()
                );
            }
        }
    }
}

fn lock_io(path: &Path, source: io::Error) -> CheckError {
    CheckError::LockIo {
        path: path.to_path_buf(),
        source,
    }
}

fn remove_lock(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err),
    }
}

/// Reads the pid stored in an existing lock file, if it is readable and well-formed.
pub fn read_holder(path: &Path) -> Option<Pid> {
    fs::read_to_string(path).ok()?.trim().parse().ok()
}

/// Returns whether a process with the given pid is currently running. Returns `None`
/// if this can't be determined on this platform.
pub fn is_holder_alive(pid: Pid) -> Option<bool> {
    cfg_if::cfg_if! {
        if #[cfg(target_family = "unix")] {
            let pid = libc::pid_t::try_from(pid).ok()?;

            // SAFETY: kill with a signal of 0 performs error checking only and sends nothing.
            let res = unsafe { libc::kill(pid, 0) };
            if res == 0 {
                Some(true)
            } else {
                // EPERM means the process exists but belongs to someone else.
                Some(io::Error::last_os_error().raw_os_error() == Some(libc::EPERM))
            }
        } else {
            let _ = pid;
            None
        }
    }
}
