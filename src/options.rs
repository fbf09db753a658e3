//! How options are set: arguments take priority over the config file, which takes
//! priority over defaults.

/// Argument parsing via clap. This file is also pulled into the build script.
pub mod args;
pub mod config;
mod error;

use std::{
    fs,
    path::{Path, PathBuf},
};

pub use self::{
    args::LoadcheckArgs,
    config::Config,
    error::{OptionError, OptionResult},
};
use crate::{
    collection::{processes::DEFAULT_TOP_COUNT, Profile, SnapshotCommand},
    constants::*,
};

/// The resolved settings of a single check run.
#[derive(Clone, Debug, PartialEq)]
pub struct CheckOptions {
    /// The allowed load per processor.
    pub rate: f64,
    pub check_name: String,
    pub verbose: bool,
    pub profile: Profile,

    /// The log file. `None` uses the profile's default.
    pub log_file: Option<PathBuf>,
    pub lock_file: PathBuf,
    pub top_count: usize,

    /// The process snapshot utility. `None` uses the profile's default.
    pub snapshot: Option<SnapshotCommand>,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            rate: DEFAULT_PER_CORE_THRESHOLD,
            check_name: DEFAULT_CHECK_NAME.to_string(),
            verbose: false,
            profile: Profile::default(),
            log_file: None,
            lock_file: default_lock_path(),
            top_count: DEFAULT_TOP_COUNT,
            snapshot: None,
        }
    }
}

/// The default lock file location, in the system temporary directory.
pub fn default_lock_path() -> PathBuf {
    std::env::temp_dir().join(DEFAULT_LOCK_FILE_NAME)
}

/// Returns the config file path, and whether it was explicitly given.
pub fn get_config_path(override_config_path: Option<&Path>) -> Option<(PathBuf, bool)> {
    if let Some(conf_loc) = override_config_path {
        return Some((conf_loc.to_path_buf(), true));
    }

    dirs::config_dir().map(|path| (path.join(DEFAULT_CONFIG_FILE_LOCATION), false))
}

/// Reads the config file. A missing file at the default location is treated as an
/// empty config, but a missing file that was explicitly asked for is an error.
pub fn get_config(config_path: Option<(PathBuf, bool)>) -> OptionResult<Config> {
    let Some((path, explicit)) = config_path else {
        return Ok(Config::default());
    };

    match fs::read_to_string(&path) {
        Ok(config_string) => {
            debug!("Reading config file from {}.", path.display());
            Ok(toml_edit::de::from_str(&config_string)?)
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound && !explicit => {
            Ok(Config::default())
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Err(OptionError::config(
            format!("the config file '{}' does not exist", path.display()),
        )),
        Err(err) => Err(OptionError::unreadable_config(&path, &err)),
    }
}

/// Reads the config file the arguments point to and merges both into [`CheckOptions`].
pub fn init_options(args: &LoadcheckArgs) -> OptionResult<CheckOptions> {
    let config_path = get_config_path(
        args.general_args
            .config_location
            .as_deref()
            .map(Path::new),
    );
    let config = get_config(config_path)?;

    build_options(args, &config)
}

/// Merges arguments and a parsed config into [`CheckOptions`].
pub fn build_options(args: &LoadcheckArgs, config: &Config) -> OptionResult<CheckOptions> {
    let defaults = CheckOptions::default();

    Ok(CheckOptions {
        rate: get_rate(args, config)?,
        check_name: get_check_name(config)?,
        verbose: args.general_args.verbose,
        profile: get_profile(args, config)?,
        log_file: args
            .path_args
            .log_file
            .as_ref()
            .or(config.log_file.as_ref())
            .map(PathBuf::from),
        lock_file: args
            .path_args
            .lock_file
            .as_ref()
            .or(config.lock_file.as_ref())
            .map(PathBuf::from)
            .unwrap_or(defaults.lock_file),
        top_count: get_top_count(config)?,
        snapshot: get_snapshot(config)?,
    })
}

fn get_rate(args: &LoadcheckArgs, config: &Config) -> OptionResult<f64> {
    let rate = if let Some(rate) = &args.general_args.rate {
        let rate = rate
            .trim()
            .parse::<f64>()
            .map_err(|_| OptionError::invalid_arg_value("rate"))?;

        if !is_valid_rate(rate) {
            return Err(OptionError::arg(
                "'--rate' must be a non-negative, finite number.",
            ));
        }

        rate
    } else if let Some(rate) = config.rate {
        if !is_valid_rate(rate) {
            return Err(OptionError::config(
                "'rate' must be a non-negative, finite number.",
            ));
        }

        rate
    } else {
        DEFAULT_PER_CORE_THRESHOLD
    };

    Ok(rate)
}

#[inline]
fn is_valid_rate(rate: f64) -> bool {
    rate.is_finite() && rate >= 0.0
}

fn get_check_name(config: &Config) -> OptionResult<String> {
    match &config.check_name {
        Some(name) if name.trim().is_empty() || name.contains(char::is_whitespace) => {
            Err(OptionError::invalid_config_value("check_name"))
        }
        Some(name) => Ok(name.clone()),
        None => Ok(DEFAULT_CHECK_NAME.to_string()),
    }
}

fn get_profile(args: &LoadcheckArgs, config: &Config) -> OptionResult<Profile> {
    if let Some(profile) = &args.general_args.profile {
        profile
            .parse()
            .map_err(|_| OptionError::invalid_arg_value("profile"))
    } else {
        Ok(config.profile.unwrap_or_default())
    }
}

fn get_top_count(config: &Config) -> OptionResult<usize> {
    match config.top_count {
        Some(0) => Err(OptionError::config("'top_count' must be at least 1.")),
        Some(count) => Ok(count),
        None => Ok(DEFAULT_TOP_COUNT),
    }
}

fn get_snapshot(config: &Config) -> OptionResult<Option<SnapshotCommand>> {
    match &config.snapshot {
        Some(snapshot) if snapshot.program.trim().is_empty() => {
            Err(OptionError::invalid_config_value("snapshot.program"))
        }
        snapshot => Ok(snapshot.clone()),
    }
}
