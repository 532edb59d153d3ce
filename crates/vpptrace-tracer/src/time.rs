use std::fmt;
use std::ops::{Add, Sub};

use crate::ParseError;

const MICROS_PER_SEC: i64 = 1_000_000;

/// Signed time interval, with microsecond resolution.
///
/// Trace timestamps are expressed as durations elapsed since VPP started.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration {
    micros: i64,
}

impl Duration {
    /// Zero-length duration.
    pub const ZERO: Self = Self { micros: 0 };

    /// Creates a duration from a number of microseconds.
    pub const fn from_micros(micros: i64) -> Self {
        Self { micros }
    }

    /// Creates a duration from a number of seconds.
    pub const fn from_secs(secs: i64) -> Self {
        Self {
            micros: secs * MICROS_PER_SEC,
        }
    }

    /// Returns the total number of microseconds of this duration.
    pub const fn as_micros(&self) -> i64 {
        self.micros
    }

    /// Returns whether this duration is negative.
    pub const fn is_negative(&self) -> bool {
        self.micros < 0
    }

    /// Decodes a trace timestamp of the form `HH:MM:SS:uuuuuu`.
    ///
    /// Exactly four colon-separated fields are expected, the last one being
    /// made of six digits of microseconds.
    pub fn parse_timestamp(timestamp: &str) -> Result<Self, ParseError> {
        let invalid = || ParseError::Timestamp(timestamp.to_owned());

        let fields = timestamp.split(':').collect::<Vec<_>>();

        let [hours, minutes, secs, micros] = fields.as_slice() else {
            return Err(invalid());
        };

        if micros.len() != 6 {
            return Err(invalid());
        }

        let [hours, minutes, secs, micros] = [hours, minutes, secs, micros].map(|field| {
            field
                .bytes()
                .all(|b| b.is_ascii_digit())
                .then(|| field.parse::<i64>().ok())
                .flatten()
        });

        let (Some(hours), Some(minutes), Some(secs), Some(micros)) = (hours, minutes, secs, micros)
        else {
            return Err(invalid());
        };

        let total_secs = hours
            .checked_mul(3600)
            .and_then(|s| s.checked_add(minutes.checked_mul(60)?))
            .and_then(|s| s.checked_add(secs))
            .ok_or_else(invalid)?;

        total_secs
            .checked_mul(MICROS_PER_SEC)
            .and_then(|us| us.checked_add(micros))
            .map(Self::from_micros)
            .ok_or_else(invalid)
    }
}

impl Add for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_micros(self.micros + rhs.micros)
    }
}

impl Sub for Duration {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_micros(self.micros - rhs.micros)
    }
}

impl TryFrom<Duration> for std::time::Duration {
    type Error = std::num::TryFromIntError;

    fn try_from(duration: Duration) -> Result<Self, Self::Error> {
        u64::try_from(duration.micros).map(std::time::Duration::from_micros)
    }
}

impl From<std::time::Duration> for Duration {
    /// Saturates at `i64::MAX` microseconds.
    fn from(duration: std::time::Duration) -> Self {
        Self::from_micros(i64::try_from(duration.as_micros()).unwrap_or(i64::MAX))
    }
}

/// Formats the duration the way VPP formats trace timestamps.
impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };

        let abs = self.micros.unsigned_abs();
        let micros = abs % 1_000_000;
        let secs = abs / 1_000_000;

        write!(
            f,
            "{sign}{:02}:{:02}:{:02}:{micros:06}",
            secs / 3600,
            (secs / 60) % 60,
            secs % 60,
        )
    }
}
