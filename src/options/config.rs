//! The TOML config file.

use serde::Deserialize;

use crate::collection::{Profile, SnapshotCommand};

/// Everything that can be set from the config file. Any of these left unset fall
/// back to arguments, then to defaults.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The allowed load per processor.
    pub(crate) rate: Option<f64>,

    /// The check identifier printed in the status line.
    pub(crate) check_name: Option<String>,

    pub(crate) log_file: Option<String>,
    pub(crate) lock_file: Option<String>,
    pub(crate) profile: Option<Profile>,

    /// How many processes to list in the status line.
    pub(crate) top_count: Option<usize>,

    /// Overrides the profile's process snapshot utility.
    pub(crate) snapshot: Option<SnapshotCommand>,
}
