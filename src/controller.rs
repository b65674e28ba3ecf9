//! Pin lifecycle, direction and value operations.
//!
//! [`PinController`] holds only its [`GpioConfig`]. Every call re-derives
//! the pin's state from the pseudo-filesystem, so a pin exported or
//! unexported by another process is seen on the next call.
//!
//! Per pin, the filesystem moves through:
//!
//! ```text
//! Unexported --export--> Exported --set_direction--> Configured
//!     ^                                                  |
//!     +-------------------unexport----------------- read / write
//! ```
//!
//! Reading or writing a pin that is not exported is not checked up front;
//! the open of its control file fails and is reported as
//! [`Error::Open`](crate::Error::Open).
//!
//! # Example
//!
//! ```no_run
//! use sysfs_pin::{Level, PinController, PinHandle};
//!
//! let gpio = PinController::new();
//! let led = PinHandle::output(17);
//!
//! gpio.open(&led)?;
//! gpio.write_level(&led, Level::High)?;
//! assert_eq!(gpio.read(&led)?, 1);
//! gpio.close(&led)?;
//! # Ok::<(), sysfs_pin::Error>(())
//! ```

use crate::config::{GpioConfig, VALUE_BUF_LEN};
use crate::error::{Error, Result};
use crate::path::PinPaths;
use crate::pin::{parse_leading_digits, Direction, Level, PinHandle};
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, error, instrument, warn};

/// Stateless controller for sysfs GPIO pins.
///
/// # Thread Safety
///
/// The controller is `Send` and `Sync`, but it adds no ordering of its own.
/// Callers driving the same pin from several threads or processes must
/// serialize externally.
#[derive(Debug, Clone, Default)]
pub struct PinController {
    config: GpioConfig,
}

impl PinController {
    /// Create a controller for the stock `/sys/class/gpio` interface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a controller with a custom configuration.
    #[must_use]
    pub const fn with_config(config: GpioConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &GpioConfig {
        &self.config
    }

    /// Check whether the root's `export` control file exists.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.config.root().join(crate::path::EXPORT_FILE).exists()
    }

    /// Check whether the pin's `gpio<N>` directory exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPort`] if the port or its directory path
    /// exceeds the configured budgets.
    pub fn is_exported(&self, pin: &PinHandle) -> Result<bool> {
        let pin_dir = PinPaths::new(&self.config, pin.port())
            .and_then(|paths| paths.pin_dir())
            .map_err(|e| report("check export of", pin.port(), e))?;
        Ok(fs::metadata(pin_dir).is_ok())
    }

    /// Export the pin so its control files appear.
    ///
    /// Exporting a pin that is already exported logs a warning and succeeds
    /// without writing anything.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidPort`] if the port or its paths exceed the budgets
    /// - [`Error::Open`] if the `export` file cannot be opened
    /// - [`Error::ShortWrite`] / [`Error::Write`] if the port string does
    ///   not land in full
    #[instrument(level = "debug", skip(self, pin), fields(port = pin.port()))]
    pub fn export(&self, pin: &PinHandle) -> Result<()> {
        self.export_inner(pin)
            .map_err(|e| report("export", pin.port(), e))
    }

    fn export_inner(&self, pin: &PinHandle) -> Result<()> {
        let paths = PinPaths::new(&self.config, pin.port())?;
        if fs::metadata(paths.pin_dir()?).is_ok() {
            warn!("gpio{} is already exported", pin.port());
            return Ok(());
        }

        write_token(&paths.export(), paths.port_str())?;
        debug!("gpio{} exported", pin.port());
        Ok(())
    }

    /// Unexport the pin so its control files disappear.
    ///
    /// Unexporting a pin that is not exported logs a warning and succeeds
    /// without writing anything.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidPort`] if the port or its paths exceed the budgets
    /// - [`Error::Open`] if the `unexport` file cannot be opened
    /// - [`Error::ShortWrite`] / [`Error::Write`] if the port string does
    ///   not land in full
    #[instrument(level = "debug", skip(self, pin), fields(port = pin.port()))]
    pub fn unexport(&self, pin: &PinHandle) -> Result<()> {
        self.unexport_inner(pin)
            .map_err(|e| report("unexport", pin.port(), e))
    }

    fn unexport_inner(&self, pin: &PinHandle) -> Result<()> {
        let paths = PinPaths::new(&self.config, pin.port())?;
        if fs::metadata(paths.pin_dir()?).is_err() {
            warn!("gpio{} is already unexported", pin.port());
            return Ok(());
        }

        write_token(&paths.unexport(), paths.port_str())?;
        debug!("gpio{} unexported", pin.port());
        Ok(())
    }

    /// Write the handle's recorded direction to the pin.
    ///
    /// The pin must already be exported; this is not checked beyond the
    /// open of its `direction` file.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidPort`] if the `direction` path exceeds the budget
    /// - [`Error::Open`] if the `direction` file cannot be opened
    /// - [`Error::ShortWrite`] / [`Error::Write`] if the token does not
    ///   land in full
    #[instrument(level = "debug", skip(self, pin), fields(port = pin.port()))]
    pub fn set_direction(&self, pin: &PinHandle) -> Result<()> {
        self.write_direction(pin.port(), pin.direction())
            .map_err(|e| report("set direction of", pin.port(), e))
    }

    /// Record a new direction in the handle and write it to the pin.
    ///
    /// The handle is updated even when the write fails.
    ///
    /// # Errors
    ///
    /// Same as [`set_direction`](Self::set_direction).
    pub fn change_direction(&self, pin: &mut PinHandle, direction: Direction) -> Result<()> {
        pin.record_direction(direction);
        self.set_direction(pin)
    }

    fn write_direction(&self, port: u32, direction: Direction) -> Result<()> {
        let paths = PinPaths::new(&self.config, port)?;
        write_token(&paths.direction()?, direction.as_token())?;
        debug!("gpio{port} direction set to {direction}");
        Ok(())
    }

    /// Export the pin, then write its direction.
    ///
    /// The `direction` path is checked against the budget before the
    /// export, so an over-budget pin is rejected with nothing written.
    /// Otherwise stops at the first failure and returns it unchanged. A
    /// failed direction write leaves the pin exported.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPort`] if any of the pin's paths exceed the budgets,
    /// or any error from [`export`](Self::export) or
    /// [`set_direction`](Self::set_direction).
    #[instrument(level = "debug", skip(self, pin), fields(port = pin.port()))]
    pub fn open(&self, pin: &PinHandle) -> Result<()> {
        PinPaths::new(&self.config, pin.port())
            .and_then(|paths| paths.direction())
            .map_err(|e| report("open", pin.port(), e))?;
        self.export(pin)?;
        self.set_direction(pin)
    }

    /// Release the pin. Identical to [`unexport`](Self::unexport).
    ///
    /// # Errors
    ///
    /// Any error from [`unexport`](Self::unexport).
    pub fn close(&self, pin: &PinHandle) -> Result<()> {
        self.unexport(pin)
    }

    /// Read the pin's `value` file.
    ///
    /// At most two bytes are read and their leading digits parsed, so
    /// `"1\n"` reads as 1 and content starting with a non-digit reads as 0.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidPort`] if the `value` path exceeds the budget
    /// - [`Error::Open`] if the `value` file cannot be opened
    /// - [`Error::Read`] if the read call fails
    #[instrument(level = "debug", skip(self, pin), fields(port = pin.port()))]
    pub fn read(&self, pin: &PinHandle) -> Result<u32> {
        self.read_inner(pin.port())
            .map_err(|e| report("read", pin.port(), e))
    }

    fn read_inner(&self, port: u32) -> Result<u32> {
        let paths = PinPaths::new(&self.config, port)?;
        let path = paths.value()?;
        let mut file = File::open(&path).map_err(|e| Error::open(&path, &e))?;

        let mut buf = [0u8; VALUE_BUF_LEN];
        let n = file.read(&mut buf).map_err(|e| Error::read(&path, &e))?;
        Ok(parse_leading_digits(&buf[..n]))
    }

    /// Read the pin and classify the result as a [`Level`].
    ///
    /// # Errors
    ///
    /// Any error from [`read`](Self::read), or [`Error::InvalidValue`] if
    /// the pin reads as something other than 0 or 1.
    pub fn read_level(&self, pin: &PinHandle) -> Result<Level> {
        Level::try_from(self.read(pin)?).map_err(|e| report("read level of", pin.port(), e))
    }

    /// Write a raw value to the pin. Only 0 and 1 are accepted.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidValue`] if `value` is neither 0 nor 1; nothing is
    ///   written
    /// - any error from [`write_level`](Self::write_level)
    pub fn write(&self, pin: &PinHandle, value: i32) -> Result<()> {
        let level = Level::try_from(value).map_err(|e| report("write", pin.port(), e))?;
        self.write_level(pin, level)
    }

    /// Drive the pin to `level`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidPort`] if the `value` path exceeds the budget
    /// - [`Error::Open`] if the `value` file cannot be opened
    /// - [`Error::ShortWrite`] / [`Error::Write`] if the token does not
    ///   land in full
    #[instrument(level = "debug", skip(self, pin), fields(port = pin.port()))]
    pub fn write_level(&self, pin: &PinHandle, level: Level) -> Result<()> {
        self.write_level_inner(pin.port(), level)
            .map_err(|e| report("write", pin.port(), e))
    }

    fn write_level_inner(&self, port: u32, level: Level) -> Result<()> {
        let paths = PinPaths::new(&self.config, port)?;
        write_token(&paths.value()?, level.as_token())?;
        debug!("gpio{port} driven {level}");
        Ok(())
    }
}

/// Write `token` to a control file with a single `write` call.
///
/// The file is never created. The handle is dropped on every exit path.
fn write_token(path: &Path, token: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|e| Error::open(path, &e))?;
    write_once(&mut file, path, token)
}

/// Issue one `write` of `token` and require the full length to land.
///
/// `path` only labels the error.
fn write_once<W: Write>(writer: &mut W, path: &Path, token: &str) -> Result<()> {
    let written = writer
        .write(token.as_bytes())
        .map_err(|e| Error::write(path, &e))?;
    if written != token.len() {
        return Err(Error::short_write(path, written, token.len()));
    }
    Ok(())
}

fn report(op: &str, port: u32, err: Error) -> Error {
    error!("failed to {op} gpio{port}: {err}");
    err
}
