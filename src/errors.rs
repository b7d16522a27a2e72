use std::io;
use thiserror::Error;

/// Error type covering every file-manager operation.
///
/// The user-facing messages stay deliberately coarse ("Invalid input" /
/// "Operation failed"); these variants keep the underlying cause for
/// diagnostics. The mapping to printed messages lives in [`crate::run`].
#[derive(Error, Debug)]
pub enum FmError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("unexpected arguments after '{0}'")]
    UnexpectedArguments(&'static str),

    #[error("wrong argument count for '{0}'")]
    WrongArgumentCount(&'static str),

    #[error("unknown os flag: {0}")]
    UnknownFlag(String),

    #[error("missing os flag")]
    MissingFlag,

    #[error("not a directory: {0}")]
    NotADirectory(String),

    #[error("invalid path: {0}")]
    InvalidPath(String),

    #[error("home directory is not set")]
    NoHomeDirectory,

    #[error("query not supported on this platform")]
    UnsupportedQuery,

    #[error("copied but source was not removed: {0}")]
    SourceNotRemoved(io::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("input error: {0}")]
    Input(String),

    #[error("interrupted")]
    Interrupted,
}

pub type FmResult<T> = Result<T, FmError>;
