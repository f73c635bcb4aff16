//! Time base for the solar model.
//!
//! Calendar dates are converted into a continuous day count relative to
//! 2000 Jan 0.0 UT (that is, 1999-12-31 00:00 UT), the epoch the orbital
//! elements in [`crate::ephemeris`] are calibrated for.

#![allow(clippy::unreadable_literal)]

use core::fmt;

use crate::Result;
use crate::error::check_calendar_date;

#[cfg(feature = "chrono")]
use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// A calendar date in the Gregorian calendar.
///
/// The day-count identity behind [`CalendarDate::day_offset`] is exact for the
/// years 1801 through 2099. Outside that range results drift by whole days; no
/// error is raised. Use [`CalendarDate::checked`] to validate caller input.
///
/// # Example
/// ```
/// # use sunriset::CalendarDate;
/// let date = CalendarDate::new(2024, 6, 21);
/// assert_eq!(date.to_string(), "2024-06-21");
/// assert!(CalendarDate::checked(2024, 13, 1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    /// Creates a date without validation.
    #[must_use]
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Creates a date after checking it lies in the supported range.
    ///
    /// # Errors
    /// Returns `InvalidDate` for a year outside 1801-2099, a month outside
    /// 1-12 or a day outside 1-31.
    pub fn checked(year: i32, month: u32, day: u32) -> Result<Self> {
        check_calendar_date(year, month, day)?;
        Ok(Self::new(year, month, day))
    }

    /// Gets the year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Gets the month (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Gets the day of month (1-31).
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Days since 2000 Jan 0.0 UT at 0h UT of this date.
    ///
    /// # Example
    /// ```
    /// # use sunriset::CalendarDate;
    /// assert_eq!(CalendarDate::new(2000, 1, 1).day_offset().days(), 1.0);
    /// assert_eq!(CalendarDate::new(1999, 12, 31).day_offset().days(), 0.0);
    /// ```
    #[must_use]
    pub fn day_offset(&self) -> DayOffset {
        let days = days_since_2000_jan_0(self.year, self.month, self.day);
        DayOffset::from_days(days as f64)
    }

    /// Creates a date from any chrono type implementing `Datelike`.
    #[cfg(feature = "chrono")]
    #[allow(clippy::needless_pass_by_value)]
    pub fn from_date_like<D: Datelike>(date: D) -> Self {
        Self::new(date.year(), date.month(), date.day())
    }

    /// Converts to a chrono `NaiveDate`.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the date does not exist in the calendar (e.g. February 30th).
    #[cfg(feature = "chrono")]
    pub fn to_naive_date(&self) -> Result<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .ok_or(crate::Error::invalid_date("date does not exist in the calendar"))
    }

    /// Midnight UT at the start of this date, the zero point of
    /// [`HoursUtc`](crate::HoursUtc) values computed for it.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the date does not exist in the calendar.
    #[cfg(feature = "chrono")]
    pub fn utc_midnight(&self) -> Result<DateTime<Utc>> {
        let midnight = self
            .to_naive_date()?
            .and_hms_opt(0, 0, 0)
            .ok_or(crate::Error::invalid_date("midnight is not representable"))?;
        Ok(midnight.and_utc())
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[cfg(feature = "chrono")]
impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self::from_date_like(date)
    }
}

/// Continuous day count since 2000 Jan 0.0 UT.
///
/// The fractional part encodes the time of day: 0.5 is noon UT.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct DayOffset(f64);

impl DayOffset {
    /// Creates a day offset from a raw number of days.
    #[must_use]
    pub const fn from_days(days: f64) -> Self {
        Self(days)
    }

    /// Gets the raw number of days.
    #[must_use]
    pub const fn days(&self) -> f64 {
        self.0
    }

    /// Shifts this 0h UT offset to 12h local mean solar time at `longitude`.
    ///
    /// This is the instant the solvers sample the ephemeris at, so a single
    /// evaluation covers the whole local day.
    #[must_use]
    pub fn local_noon(self, longitude: f64) -> Self {
        Self(self.0 + 0.5 - longitude / 360.0)
    }
}

/// Closed-form day count from 2000 Jan 0.0, valid for 1801-2099.
///
/// The integer divisions truncate toward zero; all operands are positive in
/// the supported range. Widened to `i64` so any `i32` year and `u32` month or
/// day yields a finite, if meaningless, count.
#[allow(clippy::cast_lossless)]
const fn days_since_2000_jan_0(year: i32, month: u32, day: u32) -> i64 {
    let y = year as i64;
    let m = month as i64;
    let d = day as i64;
    367 * y - (7 * (y + (m + 9) / 12)) / 4 + (275 * m) / 9 + d - 730_530
}
