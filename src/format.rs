//! Clock-time rendering for fractional hours.

use core::fmt;

use crate::math::round;

/// How [`ClockTime`] folds hours into a clock face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClockFormat {
    /// 00 to 23
    #[default]
    TwentyFourHour,
    /// 00 to 11 with no AM/PM marker, so 13:15 reads as 01:15
    TwelveHourUnmarked,
}

/// Hours, minutes and seconds on a clock face.
///
/// Times outside a single day wrap around: -1.5 hours reads as 22:30.
///
/// # Example
/// ```
/// # use sunriset::{ClockFormat, ClockTime};
/// let sunset = ClockTime::from_hours(20.3612, ClockFormat::TwentyFourHour);
/// assert_eq!(sunset.to_string(), "20:21:40");
///
/// let unmarked = ClockTime::from_hours(20.3612, ClockFormat::TwelveHourUnmarked);
/// assert_eq!(unmarked.to_string(), "08:21:40");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl ClockTime {
    /// Rounds fractional `hours` to the nearest second and folds it onto the clock.
    ///
    /// Non-finite input reads as midnight.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_hours(hours: f64, format: ClockFormat) -> Self {
        if !hours.is_finite() {
            return Self::default_midnight();
        }

        let total = round(hours * 3600.0) as i64;
        let face = match format {
            ClockFormat::TwentyFourHour => 24,
            ClockFormat::TwelveHourUnmarked => 12,
        };
        let within_day = total.rem_euclid(face * 3600);

        Self {
            hours: (within_day / 3600) as u8,
            minutes: (within_day % 3600 / 60) as u8,
            seconds: (within_day % 60) as u8,
        }
    }

    const fn default_midnight() -> Self {
        Self {
            hours: 0,
            minutes: 0,
            seconds: 0,
        }
    }

    /// Gets the hour on the clock face.
    #[must_use]
    pub const fn hours(&self) -> u8 {
        self.hours
    }

    /// Gets the minutes (0-59).
    #[must_use]
    pub const fn minutes(&self) -> u8 {
        self.minutes
    }

    /// Gets the seconds (0-59).
    #[must_use]
    pub const fn seconds(&self) -> u8 {
        self.seconds
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}
