use std::{borrow::Cow, io, path::Path};

/// A problem with the options a check was started with, either from the config
/// file or from the arguments.
///
/// These are user-facing, so they should say what is wrong and where to fix it.
/// Use _single quotes_ (e.g. `'bad'`) when highlighting values.
#[derive(Debug, PartialEq)]
pub enum OptionError {
    Config(Cow<'static, str>),
    Argument(Cow<'static, str>),
}

impl OptionError {
    /// Create a new [`OptionError::Config`].
    pub(crate) fn config<R: Into<Cow<'static, str>>>(reason: R) -> Self {
        OptionError::Config(reason.into())
    }

    /// Create a new [`OptionError::Config`] for a key with an invalid value.
    pub(crate) fn invalid_config_value(key: &str) -> Self {
        OptionError::Config(Cow::Owned(format!(
            "'{key}' was set with an invalid value, please update it in your config file."
        )))
    }

    /// Create a new [`OptionError::Config`] for a config file that exists but can't be read.
    pub(crate) fn unreadable_config(path: &Path, err: &io::Error) -> Self {
        OptionError::Config(Cow::Owned(format!(
            "the config file '{}' could not be read, {err}",
            path.display()
        )))
    }

    /// Create a new [`OptionError::Argument`].
    pub(crate) fn arg<R: Into<Cow<'static, str>>>(reason: R) -> Self {
        OptionError::Argument(reason.into())
    }

    /// Create a new [`OptionError::Argument`] for a flag with an invalid value.
    pub(crate) fn invalid_arg_value(flag: &str) -> Self {
        OptionError::Argument(Cow::Owned(format!(
            "'--{flag}' was set with an invalid value, please update your arguments."
        )))
    }
}

pub type OptionResult<T> = Result<T, OptionError>;

impl std::fmt::Display for OptionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionError::Config(reason) => write!(f, "Configuration file error: {reason}"),
            OptionError::Argument(reason) => write!(f, "Argument error: {reason}"),
        }
    }
}

impl std::error::Error for OptionError {}

impl From<toml_edit::de::Error> for OptionError {
    fn from(err: toml_edit::de::Error) -> Self {
        OptionError::Config(err.to_string().into())
    }
}
