//! Controller configuration.
//!
//! The defaults describe the stock Linux interface: the GPIO class directory
//! at `/sys/class/gpio` and the fixed string budgets a pin number and its
//! control paths must fit in.
//!
//! # Example
//!
//! ```
//! use sysfs_pin::GpioConfig;
//!
//! let config = GpioConfig::new();
//! assert_eq!(config.root().to_str(), Some("/sys/class/gpio"));
//! assert_eq!(config.max_port_digits(), 3);
//! assert_eq!(config.max_path_len(), 39);
//! ```

use std::path::{Path, PathBuf};

/// Root of the sysfs GPIO class directory.
pub const DEFAULT_ROOT: &str = "/sys/class/gpio";

/// Usable digits in a port string (4-byte buffer with terminator).
pub const MAX_PORT_DIGITS: usize = 3;

/// Usable characters in a control path (40-byte buffer with terminator).
pub const DEFAULT_MAX_PATH_LEN: usize = 39;

/// Bytes read from a `value` file: one digit plus terminator.
pub const VALUE_BUF_LEN: usize = 2;

/// Where the pseudo-filesystem lives and how long its paths may get.
///
/// The port-digit budget is [`MAX_PORT_DIGITS`] for every configuration.
/// Only the root and the path budget can be changed, through the builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GpioConfig {
    root: PathBuf,
    max_path_len: usize,
}

impl Default for GpioConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            max_path_len: DEFAULT_MAX_PATH_LEN,
        }
    }
}

impl GpioConfig {
    /// Create a configuration for the stock `/sys/class/gpio` interface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the controller at a different root directory.
    ///
    /// The path budget is not adjusted; a longer root leaves room for fewer
    /// pins. Use [`with_max_path_len`](Self::with_max_path_len) alongside.
    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Set the path budget.
    #[must_use]
    pub const fn with_max_path_len(mut self, max_path_len: usize) -> Self {
        self.max_path_len = max_path_len;
        self
    }

    /// Directory holding `export`, `unexport` and the `gpio<N>` directories.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maximum number of decimal digits in a port number.
    #[must_use]
    pub const fn max_port_digits(&self) -> usize {
        MAX_PORT_DIGITS
    }

    /// Maximum length of the longest control path, `<root>/gpio<N>/direction`.
    #[must_use]
    pub const fn max_path_len(&self) -> usize {
        self.max_path_len
    }
}
