//! 24-hour clock times and wall-clock sources.
//!
//! ## Usage
//!
//! ```
//! use tessera_time_wheel::TimeOfDay;
//!
//! let time: TimeOfDay = "07:45".parse().unwrap();
//! assert_eq!((time.hour(), time.minute()), (7, 45));
//! assert_eq!(time.to_string(), "07:45");
//! ```

use std::{fmt, str::FromStr};

use chrono::Timelike;
use thiserror::Error;

/// Errors raised when building or parsing a [`TimeOfDay`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    #[error("expected a time formatted as HH:MM, got {0:?}")]
    Malformed(String),
    #[error("hour {0} is outside 0-23")]
    HourOutOfRange(u32),
    #[error("minute {0} is outside 0-59")]
    MinuteOutOfRange(u32),
}

/// A time of day on a 24-hour clock, minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// 00:00.
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0 };
    /// 12:00.
    pub const NOON: Self = Self {
        hour: 12,
        minute: 0,
    };

    /// Creates a time, rejecting hours above 23 and minutes above 59.
    pub fn new(hour: u8, minute: u8) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::HourOutOfRange(hour.into()));
        }
        if minute > 59 {
            return Err(TimeError::MinuteOutOfRange(minute.into()));
        }
        Ok(Self { hour, minute })
    }

    /// Builds a time from wheel selections, saturating each field.
    pub(crate) fn from_clamped(hour: i32, minute: i32) -> Self {
        Self {
            hour: hour.clamp(0, 23) as u8,
            minute: minute.clamp(0, 59) as u8,
        }
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u8 {
        self.minute
    }
}

impl Default for TimeOfDay {
    fn default() -> Self {
        Self::NOON
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || TimeError::Malformed(s.to_owned());
        let (hour, minute) = s.split_once(':').ok_or_else(malformed)?;
        let hour = parse_field(hour).ok_or_else(malformed)?;
        let minute = parse_field(minute).ok_or_else(malformed)?;
        if hour > 23 {
            return Err(TimeError::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(TimeError::MinuteOutOfRange(minute));
        }
        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
        })
    }
}

fn parse_field(field: &str) -> Option<u32> {
    if field.is_empty() || field.len() > 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

/// Source of the current wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> TimeOfDay;
}

/// Reads the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> TimeOfDay {
        let now = chrono::Local::now();
        TimeOfDay::from_clamped(now.hour() as i32, now.minute() as i32)
    }
}

/// Always reports the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub TimeOfDay);

impl Clock for FixedClock {
    fn now(&self) -> TimeOfDay {
        self.0
    }
}
