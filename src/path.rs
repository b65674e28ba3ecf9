//! Control-file path synthesis.
//!
//! Every operation turns a port number into one or more paths under the
//! configured root:
//!
//! ```text
//! <root>/export
//! <root>/unexport
//! <root>/gpio<N>/
//! <root>/gpio<N>/direction
//! <root>/gpio<N>/value
//! ```
//!
//! The port string and the per-pin paths are checked against the budgets in
//! [`GpioConfig`] before they are handed out. Nothing is ever truncated.

use crate::config::{GpioConfig, MAX_PORT_DIGITS};
use crate::error::{Error, Result};
use std::path::PathBuf;

/// Name of the system-wide export control file.
pub const EXPORT_FILE: &str = "export";
/// Name of the system-wide unexport control file.
pub const UNEXPORT_FILE: &str = "unexport";
/// Name of the per-pin direction file.
pub const DIRECTION_FILE: &str = "direction";
/// Name of the per-pin value file.
pub const VALUE_FILE: &str = "value";

/// Validated path set for a single pin.
#[derive(Debug, Clone)]
pub struct PinPaths<'a> {
    config: &'a GpioConfig,
    port: u32,
    port_str: String,
}

impl<'a> PinPaths<'a> {
    /// Format the port string and check it against the digit budget.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPort`] if the decimal form of `port` has more
    /// than [`MAX_PORT_DIGITS`] digits, whatever the configuration.
    pub fn new(config: &'a GpioConfig, port: u32) -> Result<Self> {
        let port_str = port.to_string();
        if port_str.len() > MAX_PORT_DIGITS {
            return Err(Error::invalid_port(
                port,
                format!("port string exceeds {MAX_PORT_DIGITS} digits"),
            ));
        }
        Ok(Self {
            config,
            port,
            port_str,
        })
    }

    /// The port number.
    #[must_use]
    pub const fn port(&self) -> u32 {
        self.port
    }

    /// The decimal port string written to `export` / `unexport`.
    #[must_use]
    pub fn port_str(&self) -> &str {
        &self.port_str
    }

    /// `<root>/export`.
    #[must_use]
    pub fn export(&self) -> PathBuf {
        self.config.root().join(EXPORT_FILE)
    }

    /// `<root>/unexport`.
    #[must_use]
    pub fn unexport(&self) -> PathBuf {
        self.config.root().join(UNEXPORT_FILE)
    }

    /// `<root>/gpio<N>`, whose existence means the pin is exported.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPort`] if the path exceeds the path budget.
    pub fn pin_dir(&self) -> Result<PathBuf> {
        self.bounded(self.config.root().join(format!("gpio{}", self.port_str)))
    }

    /// `<root>/gpio<N>/direction`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPort`] if the path exceeds the path budget.
    pub fn direction(&self) -> Result<PathBuf> {
        self.pin_file(DIRECTION_FILE)
    }

    /// `<root>/gpio<N>/value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPort`] if the path exceeds the path budget.
    pub fn value(&self) -> Result<PathBuf> {
        self.pin_file(VALUE_FILE)
    }

    fn pin_file(&self, name: &str) -> Result<PathBuf> {
        let dir = self.config.root().join(format!("gpio{}", self.port_str));
        self.bounded(dir.join(name))
    }

    fn bounded(&self, path: PathBuf) -> Result<PathBuf> {
        let len = path.as_os_str().len();
        if len > self.config.max_path_len() {
            return Err(Error::invalid_port(
                self.port,
                format!(
                    "path {} is {len} bytes, budget is {}",
                    path.display(),
                    self.config.max_path_len()
                ),
            ));
        }
        Ok(path)
    }
}
