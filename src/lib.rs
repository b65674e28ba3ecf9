//! sysfs-pin: GPIO pin control through the Linux sysfs interface
//!
//! Linux exposes each GPIO pin as a directory of small text files under
//! `/sys/class/gpio`. This crate turns a pin number into the right sequence
//! of file operations on that tree, with idempotent export/unexport and a
//! distinct error for every way those operations can fail.
//!
//! # Control Files
//!
//! | Path | Access | Content |
//! |------|--------|---------|
//! | `<root>/export` | write | port number, e.g. `17` |
//! | `<root>/unexport` | write | port number |
//! | `<root>/gpio<N>/` | stat | exists while the pin is exported |
//! | `<root>/gpio<N>/direction` | write | `in` or `out` |
//! | `<root>/gpio<N>/value` | read/write | `0` or `1` |
//!
//! # Quick Start
//!
//! ```no_run
//! use sysfs_pin::{Level, PinController, PinHandle};
//!
//! let gpio = PinController::new();
//! let button = PinHandle::input(4);
//! let led = PinHandle::output(17);
//!
//! gpio.open(&button)?;
//! gpio.open(&led)?;
//!
//! let pressed = gpio.read_level(&button)? == Level::High;
//! gpio.write_level(&led, Level::from(pressed))?;
//!
//! gpio.close(&led)?;
//! gpio.close(&button)?;
//! # Ok::<(), sysfs_pin::Error>(())
//! ```
//!
//! # Error Handling
//!
//! All operations that can fail return [`Result<T, Error>`]. Inputs that
//! cannot be valid (a port wider than three digits, a level other than 0 or
//! 1) are rejected before the filesystem is touched. Failures are also
//! emitted as `tracing` events; install a subscriber to see them.
//!
//! # State
//!
//! Nothing is cached. Whether a pin is exported is decided by a `stat` of
//! its directory on every call, so changes made by other processes are
//! picked up immediately.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod controller;
pub mod error;
pub mod path;
pub mod pin;

// Re-export main types for convenience
pub use config::GpioConfig;
pub use controller::PinController;
pub use error::{Error, Result};
pub use pin::{Direction, Level, PinHandle};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Check if we're running on Linux.
#[must_use]
pub const fn is_linux() -> bool {
    cfg!(target_os = "linux")
}

/// Check if the sysfs GPIO interface is present at `/sys/class/gpio`.
#[must_use]
pub fn is_available() -> bool {
    PinController::new().is_available()
}
