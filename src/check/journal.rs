//! The append-only log file that records load warnings and aborted runs.

use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

use time::{macros::format_description, OffsetDateTime};

/// A handle to the append-only log file. The file is opened per write and never
/// truncated or rotated.
#[derive(Debug, Clone)]
pub struct Journal {
    path: PathBuf,
}

impl Journal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends a single line prefixed with the current timestamp.
    pub fn append_line(&self, message: &str) -> io::Result<()> {
        self.append(&format!("{} - {message}\n", timestamp()))
    }

    /// Appends a block of text verbatim, adding a trailing newline if it lacks one.
    pub fn append_block(&self, block: &str) -> io::Result<()> {
        if block.ends_with('\n') || block.is_empty() {
            self.append(block)
        } else {
            self.append(&format!("{block}\n"))
        }
    }

    fn append(&self, contents: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(contents.as_bytes())?;
        file.flush()
    }
}

/// The current time as `YYYY-MM-DD HH:MM:SS`, in local time if the offset can be
/// determined and UTC otherwise.
pub fn timestamp() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());

    now.format(&format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second]"
    ))
    .unwrap_or_else(|_| now.unix_timestamp().to_string())
}
