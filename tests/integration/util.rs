use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
    process::Command,
};

use tempfile::TempDir;

const LOADCHECK_EXE_PATH: &str = env!("CARGO_BIN_EXE_loadcheck");
const DEFAULT_CFG: &str = "./tests/valid_configs/empty_config.toml";

pub fn abs_path(path: &str) -> OsString {
    let path = Path::new(path);

    if path.exists() {
        path.canonicalize().unwrap().into_os_string()
    } else {
        // We are going to trust that the path given is valid...
        path.to_owned().into_os_string()
    }
}

/// Returns the [`Command`] of a binary invocation of loadcheck.
pub fn loadcheck_command(args: &[&str]) -> Command {
    let mut cmd = Command::new(LOADCHECK_EXE_PATH);

    let mut prev = "";
    for arg in args.iter() {
        if prev == "-C" {
            // This is the config file; make sure we set it to absolute path!
            cmd.arg(abs_path(arg));
        } else {
            cmd.arg(arg);
        }

        prev = arg;
    }

    cmd
}

/// Returns whether `program` can be found on `PATH`.
pub fn on_path(program: &str) -> bool {
    env::var_os("PATH")
        .map(|paths| env::split_paths(&paths).any(|dir| dir.join(program).is_file()))
        .unwrap_or(false)
}

/// A scratch directory holding the lock and log files for one run, so runs don't
/// step on each other or on a real installation.
pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn lock_path(&self) -> PathBuf {
        self.dir.path().join("loadcheck.lock")
    }

    pub fn log_path(&self) -> PathBuf {
        self.dir.path().join("loadcheck.log")
    }

    pub fn log_contents(&self) -> String {
        std::fs::read_to_string(self.log_path()).unwrap_or_default()
    }

    /// Returns a [`Command`] using the given config file, with the lock and log
    /// files pointed into the sandbox.
    pub fn command(&self, config: &str) -> Command {
        let mut cmd = loadcheck_command(&["-C", config]);
        cmd.arg("--lock_file")
            .arg(self.lock_path())
            .arg("--log_file")
            .arg(self.log_path());

        cmd
    }

    /// Like [`Sandbox::command`], but with an empty config file.
    pub fn no_cfg_command(&self) -> Command {
        self.command(DEFAULT_CFG)
    }
}
