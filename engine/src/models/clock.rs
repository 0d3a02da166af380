use std::fmt;

use chrono::{Duration, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Seconds in one day.
const SECONDS_PER_DAY: i64 = 86_400;

/// A wall-clock time of day with minute resolution.
///
/// `ClockTime` represents both the wake-up time supplied by the caller and
/// the recommended bedtime produced by the engine. Seconds are intentionally
/// absent: the inputs come from an hour/minute picker and the output is
/// displayed as an hour/minute pair.
///
/// # Examples
///
/// ```
/// use restwell_engine::models::ClockTime;
///
/// let wake = ClockTime::from_hm_opt(7, 0).unwrap();
/// assert_eq!(wake.seconds_since_midnight(), 25_200);
/// assert_eq!(wake.to_string(), "7:00 AM");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
}

impl ClockTime {
    /// The wake-up time used when the caller has no stored preference: 07:00.
    pub const DEFAULT_WAKE: ClockTime = ClockTime { hour: 7, minute: 0 };

    /// Create a clock time from an hour (0-23) and minute (0-59).
    ///
    /// Returns `None` when either component is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use restwell_engine::models::ClockTime;
    ///
    /// assert!(ClockTime::from_hm_opt(23, 59).is_some());
    /// assert!(ClockTime::from_hm_opt(24, 0).is_none());
    /// ```
    pub fn from_hm_opt(hour: u32, minute: u32) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self { hour, minute })
        } else {
            None
        }
    }

    /// Hour of day, 0-23.
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Minute of hour, 0-59.
    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Seconds elapsed since midnight: `hour*3600 + minute*60`.
    ///
    /// This is the wake-time feature encoding expected by the sleep model.
    pub fn seconds_since_midnight(&self) -> u32 {
        self.hour * 3600 + self.minute * 60
    }

    /// Convert to a `chrono::NaiveTime` at second zero.
    pub fn to_naive(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0)
            .unwrap_or(NaiveTime::MIN)
    }

    /// Create from a `chrono::NaiveTime`, truncating seconds.
    pub fn from_naive(time: NaiveTime) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
        }
    }

    /// Subtract a duration in seconds, wrapping across midnight.
    ///
    /// The subtraction is performed on an absolute timestamp (the clock time
    /// anchored on a reference date) so a result earlier than midnight rolls
    /// to the previous day without any special-casing. The duration is
    /// reduced modulo 24 hours first; only the clock components of the
    /// result are observable.
    ///
    /// # Examples
    ///
    /// ```
    /// use restwell_engine::models::ClockTime;
    ///
    /// let wake = ClockTime::from_hm_opt(7, 0).unwrap();
    /// let bedtime = wake.minus_seconds(8 * 3600);
    /// assert_eq!(bedtime, ClockTime::from_hm_opt(23, 0).unwrap());
    /// ```
    pub fn minus_seconds(&self, seconds: i64) -> Self {
        let delta = seconds.rem_euclid(SECONDS_PER_DAY);
        let anchor = NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap_or(NaiveDate::MIN)
            .and_time(self.to_naive());
        let shifted = anchor - Duration::seconds(delta);
        Self::from_naive(shifted.time())
    }
}

impl fmt::Display for ClockTime {
    /// Short 12-hour rendering, e.g. `11:00 PM`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_naive().format("%-I:%M %p"))
    }
}
