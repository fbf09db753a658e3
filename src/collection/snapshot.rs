//! Running the external utility that dumps the full process table.

use std::{
    env,
    ffi::OsStr,
    fmt,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::anyhow;
use itertools::Itertools;
use serde::Deserialize;

use super::error::{CollectionError, CollectionResult};

/// A program and its arguments whose stdout is copied into the log when load is
/// too high.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SnapshotCommand {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl SnapshotCommand {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Finds the program, either as a path to an executable or by searching `PATH`.
    pub fn resolve(&self) -> Option<PathBuf> {
        let program = Path::new(&self.program);

        if program.components().count() > 1 {
            return is_executable(program).then(|| program.to_path_buf());
        }

        let path_var = env::var_os("PATH")?;
        env::split_paths(&path_var)
            .map(|dir| dir.join(OsStr::new(&self.program)))
            .find(|candidate| is_executable(candidate))
    }

    /// Runs the program and returns its stdout.
    pub fn capture(&self) -> CollectionResult<String> {
        let output = Command::new(&self.program).args(&self.args).output()?;

        if !output.status.success() {
            return Err(CollectionError::General(anyhow!(
                "'{}' exited with {}",
                self,
                output.status
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl fmt::Display for SnapshotCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.args.is_empty() {
            f.write_str(&self.program)
        } else {
            write!(f, "{} {}", self.program, self.args.iter().join(" "))
        }
    }
}

fn is_executable(path: &Path) -> bool {
    cfg_if::cfg_if! {
        if #[cfg(target_family = "unix")] {
            use std::os::unix::fs::PermissionsExt;

            path.metadata()
                .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
                .unwrap_or(false)
        } else {
            path.is_file()
        }
    }
}
