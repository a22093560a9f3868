//! Errors when reading zone files.

use super::scanner::State;
use crate::iana::Rtype;
use std::{error, fmt, io};

//------------ Error ---------------------------------------------------------

/// An error happened while reading a zone file.
///
/// The error knows the kind of problem and the line where it was detected.
/// For problems with a record, this is the line where the record started.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    line: usize,
}

impl Error {
    pub(crate) fn new(kind: ErrorKind, line: usize) -> Self {
        Error { kind, line }
    }

    /// Returns the kind of error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Converts the error into its kind.
    pub fn into_kind(self) -> ErrorKind {
        self.kind
    }

    /// Returns the line number the error was detected at.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the category of the error.
    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    /// Returns whether reading cannot continue after this error.
    ///
    /// This is true for lexical errors. All other errors only affect the
    /// record they happened in.
    pub fn is_fatal(&self) -> bool {
        self.category() == ErrorCategory::Lexical
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self.kind {
            ErrorKind::Io(ref err) => Some(err),
            _ => None,
        }
    }
}

//------------ ErrorKind -----------------------------------------------------

/// The kind of problem encountered while reading a zone file.
#[derive(Debug)]
pub enum ErrorKind {
    /// The input ended while a string, escape, or group was still open.
    ///
    /// The value is the state the tokenizer was in.
    UnexpectedEof(State),

    /// Reading from the source failed.
    Io(io::Error),

    /// A token before the record type is neither TTL, class, nor type.
    ///
    /// This includes line feeds, comments, and parentheses appearing before
    /// the type. The value is the token’s text.
    UnknownType(String),

    /// The record ended without any record data.
    MissingData {
        /// The owner of the record.
        owner: String,

        /// The type of the record.
        rtype: Rtype,
    },

    /// The input ended in the middle of a record.
    IncompleteRecord {
        /// The owner of the record.
        owner: String,
    },
}

impl ErrorKind {
    /// Returns the category of the error kind.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ErrorKind::UnexpectedEof(_) | ErrorKind::Io(_) => {
                ErrorCategory::Lexical
            }
            ErrorKind::UnknownType(_) => ErrorCategory::Classification,
            ErrorKind::MissingData { .. }
            | ErrorKind::IncompleteRecord { .. } => ErrorCategory::Structural,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorKind::UnexpectedEof(state) => {
                write!(f, "unexpected end of input in {}", state.describe())
            }
            ErrorKind::Io(err) => write!(f, "read error: {err}"),
            ErrorKind::UnknownType(token) => {
                write!(f, "unknown record type '{}'", token.escape_debug())
            }
            ErrorKind::MissingData { owner, rtype } => {
                write!(f, "missing data for '{owner}' of type {rtype}")
            }
            ErrorKind::IncompleteRecord { owner } => {
                write!(f, "incomplete record for '{owner}' at end of input")
            }
        }
    }
}

//------------ ErrorCategory -------------------------------------------------

/// The broad category of an error.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorCategory {
    /// The text could not be split into tokens.
    Lexical,

    /// A token could not be classified.
    Classification,

    /// The tokens do not form a complete record.
    Structural,
}
