//! Errors to do with sampling load, processors, and processes.

use std::{borrow::Cow, num::ParseFloatError};

use anyhow::anyhow;
use thiserror::Error;

/// An error to do with data collection.
#[derive(Debug, Error)]
pub enum CollectionError {
    /// An error when there is an IO exception.
    #[error(transparent)]
    InvalidIo(#[from] std::io::Error),

    /// An error around parsing something the system gave us.
    #[error("parsing error, {0}")]
    Parsing(Cow<'static, str>),

    /// A general error to propagate back up. A wrapper around [`anyhow::Error`].
    #[error(transparent)]
    General(anyhow::Error),

    /// The collection is unsupported.
    #[error("loadcheck does not support this type of data collection for this platform")]
    Unsupported,
}

impl CollectionError {
    pub(crate) fn from_str(msg: &'static str) -> Self {
        Self::General(anyhow!(msg))
    }

    pub(crate) fn parsing<R: Into<Cow<'static, str>>>(reason: R) -> Self {
        Self::Parsing(reason.into())
    }
}

impl From<ParseFloatError> for CollectionError {
    fn from(err: ParseFloatError) -> Self {
        CollectionError::Parsing(err.to_string().into())
    }
}

/// A [`Result`] with the error type being a [`CollectionError`].
pub type CollectionResult<T> = Result<T, CollectionError>;
