//! Error types and caller-side validation helpers.
//!
//! The solvers themselves never fail: polar day and polar night are ordinary
//! results. These errors only come from the validating constructors and from
//! chrono conversions.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// First calendar year the time base is accurate for.
pub const MIN_SUPPORTED_YEAR: i32 = 1801;

/// Last calendar year the time base is accurate for.
pub const MAX_SUPPORTED_YEAR: i32 = 2099;

/// Errors reported by input validation.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Latitude outside [-90°, 90°] or not a number.
    InvalidLatitude {
        /// Rejected latitude in degrees.
        value: f64,
    },
    /// Longitude outside [-180°, 180°] or not a number.
    InvalidLongitude {
        /// Rejected longitude in degrees.
        value: f64,
    },
    /// Custom horizon altitude outside [-90°, 90°] or not a number.
    InvalidAltitude {
        /// Rejected altitude in degrees.
        value: f64,
    },
    /// Calendar date outside what the solver supports or chrono can represent.
    InvalidDate {
        /// Which constraint the date broke.
        message: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(f, "latitude {value}° is outside [-90°, 90°]")
            }
            Self::InvalidLongitude { value } => {
                write!(f, "longitude {value}° is outside [-180°, 180°]")
            }
            Self::InvalidAltitude { value } => {
                write!(f, "altitude {value}° is outside [-90°, 90°]")
            }
            Self::InvalidDate { message } => write!(f, "invalid date: {message}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Latitude rejected by [`check_latitude`].
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Longitude rejected by [`check_longitude`].
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Altitude rejected by [`check_altitude`].
    #[must_use]
    pub const fn invalid_altitude(value: f64) -> Self {
        Self::InvalidAltitude { value }
    }

    /// Date rejected by [`check_calendar_date`] or a chrono conversion.
    #[must_use]
    pub const fn invalid_date(message: &'static str) -> Self {
        Self::InvalidDate { message }
    }
}

/// `true` for finite values within ±`limit`; NaN never passes.
fn within(value: f64, limit: f64) -> bool {
    (-limit..=limit).contains(&value)
}

/// Checks a latitude in degrees.
///
/// # Errors
/// Returns `InvalidLatitude` outside -90 to +90 degrees or for NaN.
pub fn check_latitude(latitude: f64) -> Result<()> {
    within(latitude, 90.0)
        .then_some(())
        .ok_or(Error::invalid_latitude(latitude))
}

/// Checks a longitude in degrees.
///
/// # Errors
/// Returns `InvalidLongitude` outside -180 to +180 degrees or for NaN.
pub fn check_longitude(longitude: f64) -> Result<()> {
    within(longitude, 180.0)
        .then_some(())
        .ok_or(Error::invalid_longitude(longitude))
}

/// Checks latitude first, then longitude.
///
/// # Errors
/// Returns the first of `InvalidLatitude` or `InvalidLongitude` that applies.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude).and_then(|()| check_longitude(longitude))
}

/// Checks a target altitude in degrees.
///
/// # Errors
/// Returns `InvalidAltitude` outside -90 to +90 degrees or for NaN.
pub fn check_altitude(altitude: f64) -> Result<()> {
    within(altitude, 90.0)
        .then_some(())
        .ok_or(Error::invalid_altitude(altitude))
}

/// Checks calendar date components against the supported range.
///
/// Day is checked against 1-31 only; month lengths are not enforced because
/// the day-count identity accepts overflowing days.
///
/// # Errors
/// Returns `InvalidDate` for a year outside 1801-2099, a month outside 1-12
/// or a day outside 1-31.
pub fn check_calendar_date(year: i32, month: u32, day: u32) -> Result<()> {
    let problem = if !(MIN_SUPPORTED_YEAR..=MAX_SUPPORTED_YEAR).contains(&year) {
        Some("year must be between 1801 and 2099")
    } else if !(1..=12).contains(&month) {
        Some("month must be between 1 and 12")
    } else if !(1..=31).contains(&day) {
        Some("day must be between 1 and 31")
    } else {
        None
    };

    problem.map_or(Ok(()), |message| Err(Error::invalid_date(message)))
}
