//! Pin handles and the tokens written to a pin's control files.
//!
//! A [`PinHandle`] is a plain value: a port number and the direction the
//! caller wants. It does not track whether the pin is exported; the
//! pseudo-filesystem is the only source of truth for that.
//!
//! # Example
//!
//! ```
//! use sysfs_pin::pin::{Direction, Level, PinHandle};
//!
//! let led = PinHandle::new(17, Direction::Output);
//! assert_eq!(led.port(), 17);
//! assert_eq!(led.direction().as_token(), "out");
//! assert_eq!(Level::try_from(1_i32), Ok(Level::High));
//! ```

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Whether a pin senses input or drives output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Pin reads an external signal.
    Input,
    /// Pin drives its line.
    Output,
}

impl Direction {
    /// The token written to the `direction` file.
    #[must_use]
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::Input => "in",
            Self::Output => "out",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_end() {
            "in" => Ok(Self::Input),
            "out" => Ok(Self::Output),
            _ => Err(Error::invalid_direction(s)),
        }
    }
}

/// Raw direction codes: 0 is input, 1 is output.
impl TryFrom<i32> for Direction {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Input),
            1 => Ok(Self::Output),
            other => Err(Error::invalid_direction(other.to_string())),
        }
    }
}

/// Logic level of a pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Logic 0.
    Low,
    /// Logic 1.
    High,
}

impl Level {
    /// The token written to the `value` file.
    #[must_use]
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::Low => "0",
            Self::High => "1",
        }
    }

    /// The integer a read of this level yields.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        match self {
            Self::Low => 0,
            Self::High => 1,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::High => write!(f, "high"),
        }
    }
}

impl TryFrom<i32> for Level {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Low),
            1 => Ok(Self::High),
            other => Err(Error::invalid_value(i64::from(other))),
        }
    }
}

impl TryFrom<u32> for Level {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Low),
            1 => Ok(Self::High),
            other => Err(Error::invalid_value(i64::from(other))),
        }
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Self::High
        } else {
            Self::Low
        }
    }
}

/// A pin number and the direction it should be configured for.
///
/// The port never changes once the handle exists. The direction changes
/// only through [`PinController::set_direction`](crate::PinController::set_direction),
/// which also writes it to the pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PinHandle {
    port: u32,
    direction: Direction,
}

impl PinHandle {
    /// Create a handle. No filesystem access happens here.
    #[must_use]
    pub const fn new(port: u32, direction: Direction) -> Self {
        Self { port, direction }
    }

    /// Shorthand for an input pin.
    #[must_use]
    pub const fn input(port: u32) -> Self {
        Self::new(port, Direction::Input)
    }

    /// Shorthand for an output pin.
    #[must_use]
    pub const fn output(port: u32) -> Self {
        Self::new(port, Direction::Output)
    }

    /// The hardware pin number.
    #[must_use]
    pub const fn port(&self) -> u32 {
        self.port
    }

    /// The recorded direction.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    pub(crate) fn record_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }
}

impl fmt::Display for PinHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gpio{} ({})", self.port, self.direction)
    }
}

/// Parse the leading ASCII digits of a `value` file buffer.
///
/// Parsing stops at the first non-digit, so a trailing newline or NUL is
/// ignored. A buffer that does not start with a digit yields 0.
#[must_use]
pub fn parse_leading_digits(buf: &[u8]) -> u32 {
    buf.iter()
        .take_while(|b| b.is_ascii_digit())
        .fold(0u32, |acc, b| {
            acc.saturating_mul(10).saturating_add(u32::from(b - b'0'))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_tokens() {
        assert_eq!(Direction::Input.as_token(), "in");
        assert_eq!(Direction::Output.as_token(), "out");
        assert_eq!(Direction::Output.to_string(), "out");
    }

    #[test]
    fn test_direction_from_str() {
        assert_eq!("in".parse::<Direction>(), Ok(Direction::Input));
        assert_eq!("out\n".parse::<Direction>(), Ok(Direction::Output));

        let err = "sideways".parse::<Direction>().err();
        assert_eq!(err, Some(Error::invalid_direction("sideways")));
    }

    #[test]
    fn test_direction_raw_codes() {
        assert_eq!(Direction::try_from(0), Ok(Direction::Input));
        assert_eq!(Direction::try_from(1), Ok(Direction::Output));
        assert!(matches!(
            Direction::try_from(2),
            Err(Error::InvalidDirection { .. })
        ));
        assert!(Direction::try_from(-1).is_err());
    }

    #[test]
    fn test_level_tokens() {
        assert_eq!(Level::Low.as_token(), "0");
        assert_eq!(Level::High.as_token(), "1");
        assert_eq!(Level::High.as_u32(), 1);
        assert_eq!(Level::Low.to_string(), "low");
    }

    #[test]
    fn test_level_from_int() {
        assert_eq!(Level::try_from(0i32), Ok(Level::Low));
        assert_eq!(Level::try_from(1u32), Ok(Level::High));
        assert_eq!(Level::try_from(2i32), Err(Error::invalid_value(2)));
        assert_eq!(Level::try_from(-1i32), Err(Error::invalid_value(-1)));
    }

    #[test]
    fn test_level_from_bool() {
        assert_eq!(Level::from(true), Level::High);
        assert_eq!(Level::from(false), Level::Low);
    }

    #[test]
    fn test_handle_accessors() {
        let pin = PinHandle::output(23);
        assert_eq!(pin.port(), 23);
        assert_eq!(pin.direction(), Direction::Output);
        assert_eq!(PinHandle::input(4).direction(), Direction::Input);
        assert_eq!(pin.to_string(), "gpio23 (out)");
    }

    #[test]
    fn test_record_direction() {
        let mut pin = PinHandle::input(5);
        pin.record_direction(Direction::Output);
        assert_eq!(pin.direction(), Direction::Output);
        assert_eq!(pin.port(), 5);
    }

    #[test]
    fn test_parse_digit_with_newline() {
        assert_eq!(parse_leading_digits(b"0\n"), 0);
        assert_eq!(parse_leading_digits(b"1\n"), 1);
        assert_eq!(parse_leading_digits(b"1"), 1);
        assert_eq!(parse_leading_digits(b"1\0"), 1);
    }

    #[test]
    fn test_parse_garbage_is_zero() {
        assert_eq!(parse_leading_digits(b""), 0);
        assert_eq!(parse_leading_digits(b"x1"), 0);
        assert_eq!(parse_leading_digits(b"\n1"), 0);
        assert_eq!(parse_leading_digits(b"-1"), 0);
    }

    #[test]
    fn test_parse_stops_at_first_non_digit() {
        assert_eq!(parse_leading_digits(b"12"), 12);
        assert_eq!(parse_leading_digits(b"7a9"), 7);
    }

    #[test]
    fn test_parse_saturates() {
        assert_eq!(parse_leading_digits(b"99999999999999"), u32::MAX);
    }
}
