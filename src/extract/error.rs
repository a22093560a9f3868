//! Errors when extracting names from zone files.

use crate::zonefile;
use std::path::{Path, PathBuf};
use std::{error, fmt, io};

//------------ Error ---------------------------------------------------------

/// Extracting names from a set of zone files failed.
#[derive(Debug)]
pub enum Error {
    /// The configuration is not usable.
    Config(&'static str),

    /// The file name pattern is invalid.
    Pattern(glob::PatternError),

    /// Reading or writing a file failed.
    Io {
        /// The file in question.
        path: PathBuf,

        /// What went wrong.
        err: io::Error,
    },

    /// Reading a zone file failed.
    Zone {
        /// The zone file.
        path: PathBuf,

        /// What went wrong.
        err: zonefile::Error,
    },

    /// A worker task failed.
    Join(tokio::task::JoinError),
}

impl Error {
    pub(crate) fn io(path: &Path, err: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            err,
        }
    }
}

impl From<glob::PatternError> for Error {
    fn from(err: glob::PatternError) -> Self {
        Error::Pattern(err)
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(err: tokio::task::JoinError) -> Self {
        Error::Join(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Config(msg) => write!(f, "invalid configuration: {msg}"),
            Error::Pattern(err) => write!(f, "invalid file pattern: {err}"),
            Error::Io { path, err } => {
                write!(f, "{}: {err}", path.display())
            }
            Error::Zone { path, err } => {
                write!(f, "{}: {err}", path.display())
            }
            Error::Join(err) => write!(f, "worker failed: {err}"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Config(_) => None,
            Error::Pattern(err) => Some(err),
            Error::Io { err, .. } => Some(err),
            Error::Zone { err, .. } => Some(err),
            Error::Join(err) => Some(err),
        }
    }
}
