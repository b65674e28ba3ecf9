//! Error types for sysfs-pin.
//!
//! All errors implement `std::error::Error` and provide human-readable messages.
//! Every variant names the pin or control file involved, so the Display text
//! doubles as the diagnostic emitted on the failure path.
//!
//! Two families matter to most callers:
//!
//! - invalid input ([`Error::is_invalid_input`]): rejected before any
//!   filesystem access took place
//! - I/O failures ([`Error::is_open_failure`], [`Error::is_write_failure`],
//!   [`Error::is_read_failure`]): the pseudo-filesystem refused the operation

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Primary error type for pin operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The port number, or a path derived from it, does not fit its budget.
    ///
    /// Nothing was written: a truncated port string would address the
    /// wrong physical pin.
    #[error("invalid gpio port \"gpio{port}\": {reason}")]
    InvalidPort {
        /// The rejected port number.
        port: u32,
        /// Which budget was exceeded.
        reason: String,
    },

    /// A control file could not be opened.
    ///
    /// Typical causes are missing permissions, a pin that is not exported
    /// yet, or a kernel without the sysfs GPIO interface.
    #[error("failed to open {}: {kind}", path.display())]
    Open {
        /// The control file that failed to open.
        path: PathBuf,
        /// The underlying I/O error kind.
        kind: io::ErrorKind,
    },

    /// The write call accepted fewer bytes than the token holds.
    #[error("short write to {}: wrote {written} of {expected} bytes", path.display())]
    ShortWrite {
        /// The control file being written.
        path: PathBuf,
        /// Bytes the kernel accepted.
        written: usize,
        /// Length of the token.
        expected: usize,
    },

    /// The write call itself reported an error.
    #[error("failed to write {}: {kind}", path.display())]
    Write {
        /// The control file being written.
        path: PathBuf,
        /// The underlying I/O error kind.
        kind: io::ErrorKind,
    },

    /// The read call itself reported an error.
    ///
    /// Non-numeric file content is not an error; see
    /// [`parse_leading_digits`](crate::pin::parse_leading_digits).
    #[error("failed to read {}: {kind}", path.display())]
    Read {
        /// The control file being read.
        path: PathBuf,
        /// The underlying I/O error kind.
        kind: io::ErrorKind,
    },

    /// A direction outside `in` / `out`.
    #[error("invalid gpio direction {value:?}")]
    InvalidDirection {
        /// The rejected direction as given by the caller.
        value: String,
    },

    /// A logic level outside `0` / `1`.
    #[error("invalid gpio value \"{value}\"")]
    InvalidValue {
        /// The rejected value.
        value: i64,
    },
}

/// Result type alias for pin operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new `InvalidPort` error.
    #[must_use]
    pub fn invalid_port(port: u32, reason: impl Into<String>) -> Self {
        Self::InvalidPort {
            port,
            reason: reason.into(),
        }
    }

    /// Create a new `Open` error from the failed `open` call.
    #[must_use]
    pub fn open(path: &Path, err: &io::Error) -> Self {
        Self::Open {
            path: path.to_path_buf(),
            kind: err.kind(),
        }
    }

    /// Create a new `ShortWrite` error.
    #[must_use]
    pub fn short_write(path: &Path, written: usize, expected: usize) -> Self {
        Self::ShortWrite {
            path: path.to_path_buf(),
            written,
            expected,
        }
    }

    /// Create a new `Write` error from the failed `write` call.
    #[must_use]
    pub fn write(path: &Path, err: &io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            kind: err.kind(),
        }
    }

    /// Create a new `Read` error from the failed `read` call.
    #[must_use]
    pub fn read(path: &Path, err: &io::Error) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            kind: err.kind(),
        }
    }

    /// Create a new `InvalidDirection` error.
    #[must_use]
    pub fn invalid_direction(value: impl Into<String>) -> Self {
        Self::InvalidDirection {
            value: value.into(),
        }
    }

    /// Create a new `InvalidValue` error.
    #[must_use]
    pub const fn invalid_value(value: i64) -> Self {
        Self::InvalidValue { value }
    }

    /// Check if the error was raised before touching the filesystem.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidPort { .. } | Self::InvalidDirection { .. } | Self::InvalidValue { .. }
        )
    }

    /// Check if a control file could not be opened.
    #[must_use]
    pub const fn is_open_failure(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Check if a write did not land in full.
    ///
    /// Covers both a short write and a failing write call.
    #[must_use]
    pub const fn is_write_failure(&self) -> bool {
        matches!(self, Self::ShortWrite { .. } | Self::Write { .. })
    }

    /// Check if the read call failed.
    #[must_use]
    pub const fn is_read_failure(&self) -> bool {
        matches!(self, Self::Read { .. })
    }

    /// Get the I/O error kind for open, write and read failures.
    #[must_use]
    pub const fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::Open { kind, .. } | Self::Write { kind, .. } | Self::Read { kind, .. } => {
                Some(*kind)
            }
            _ => None,
        }
    }

    /// Get the control file involved, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Open { path, .. }
            | Self::ShortWrite { path, .. }
            | Self::Write { path, .. }
            | Self::Read { path, .. } => Some(path),
            _ => None,
        }
    }
}
