//! Sunrise, sunset and twilight crossing times.
//!
//! Samples the ephemeris once, at 12h local mean solar time, and solves the
//! diurnal-arc equation for the requested altitude:
//!
//! ```text
//! cos(H) = (sin(h) - sin(φ)·sin(δ)) / (cos(φ)·cos(δ))
//! ```
//!
//! A ratio outside (-1, 1) means the sun never crosses the altitude that day,
//! reported as [`Crossing::AlwaysAbove`] or [`Crossing::AlwaysBelow`]. Times are
//! accurate to about one minute for 1801-2099.

use log::trace;

use crate::ephemeris::{local_sidereal_time, solar_ephemeris};
use crate::math::{acosd, cosd, reduce_to_180, sind};
use crate::{CalendarDate, Crossing, Horizon, HoursUtc, ObserverLocation};

#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone};

/// Calculate rise, south and set times for one of the standard or a custom horizon.
///
/// Times are hours UT relative to 0h UT of `date` and are not wrapped: for
/// observers far from Greenwich they can be negative or exceed 24.
///
/// # Example
/// ```
/// use sunriset::{riseset, CalendarDate, Crossing, Horizon, ObserverLocation};
///
/// let london = ObserverLocation::new(51.510, -0.117);
/// let result = riseset::sunrise_sunset_utc(
///     CalendarDate::new(2024, 6, 21),
///     london,
///     Horizon::SunriseSunset,
/// );
///
/// if let Crossing::NormalCrossing { rise, set, .. } = result {
///     assert!((rise.hours() - 3.72).abs() < 0.05);
///     assert!((set.hours() - 20.36).abs() < 0.05);
/// }
/// ```
#[must_use]
pub fn sunrise_sunset_utc(
    date: CalendarDate,
    location: ObserverLocation,
    horizon: Horizon,
) -> Crossing<HoursUtc> {
    sunrise_sunset_utc_for_altitude(date, location, horizon.altitude(), horizon.upper_limb())
}

/// Calculate rise, south and set times for an arbitrary altitude.
///
/// # Arguments
/// * `date` - Calendar date
/// * `location` - Observer location; the longitude matters here
/// * `altitude` - Altitude in degrees the sun should cross
/// * `upper_limb` - Time the upper limb of the disk instead of its centre
#[must_use]
pub fn sunrise_sunset_utc_for_altitude(
    date: CalendarDate,
    location: ObserverLocation,
    altitude: f64,
    upper_limb: bool,
) -> Crossing<HoursUtc> {
    let latitude = location.latitude();
    let longitude = location.longitude();

    let d = date.day_offset().local_noon(longitude);
    let sidereal_time = local_sidereal_time(d, longitude);
    let sun = solar_ephemeris(d);

    let south = 12.0 - reduce_to_180(sidereal_time - sun.right_ascension) / 15.0;

    let altitude = if upper_limb {
        altitude - sun.apparent_radius
    } else {
        altitude
    };

    let cos_hour_angle = (sind(altitude) - sind(latitude) * sind(sun.declination))
        / (cosd(latitude) * cosd(sun.declination));

    if cos_hour_angle >= 1.0 {
        trace!("sun stays below {altitude:.4}° on {date} at {location}");
        Crossing::AlwaysBelow {
            south: HoursUtc::from_hours(south),
        }
    } else if cos_hour_angle <= -1.0 {
        trace!("sun stays above {altitude:.4}° on {date} at {location}");
        Crossing::AlwaysAbove {
            south: HoursUtc::from_hours(south),
        }
    } else {
        let hour_angle = acosd(cos_hour_angle) / 15.0;
        Crossing::NormalCrossing {
            rise: HoursUtc::from_hours(south - hour_angle),
            south: HoursUtc::from_hours(south),
            set: HoursUtc::from_hours(south + hour_angle),
        }
    }
}

/// Calculate rise, south and set instants as timezone-aware datetimes.
///
/// The calendar date is taken from `date` in its own timezone, and the
/// resulting instants are returned in that timezone. The time-of-day part
/// of `date` is ignored.
///
/// # Errors
/// Returns `InvalidDate` if the calendar date cannot be represented at midnight UT.
///
/// # Example
/// ```rust
/// use sunriset::{riseset, Horizon, ObserverLocation};
/// use chrono::{DateTime, FixedOffset, Timelike};
///
/// let date = "2024-06-20T12:00:00-04:00".parse::<DateTime<FixedOffset>>().unwrap();
/// let new_york = ObserverLocation::new(40.712, -74.005);
/// let result = riseset::sunrise_sunset(date, new_york, Horizon::SunriseSunset).unwrap();
///
/// let sunset = result.set().unwrap();
/// assert_eq!(sunset.date_naive(), date.date_naive());
/// assert_eq!(sunset.hour(), 20);
/// ```
#[cfg(feature = "chrono")]
#[allow(clippy::needless_pass_by_value)]
pub fn sunrise_sunset<Tz: TimeZone>(
    date: DateTime<Tz>,
    location: ObserverLocation,
    horizon: Horizon,
) -> crate::Result<Crossing<DateTime<Tz>>> {
    let calendar_date = CalendarDate::from_date_like(date.date_naive());
    let midnight = calendar_date.utc_midnight()?;
    let timezone = date.timezone();

    let crossing = sunrise_sunset_utc(calendar_date, location, horizon);
    Ok(crossing.map(|hours| {
        let millis = crate::math::round(hours.hours() * 3_600_000.0) as i64;
        (midnight + chrono::Duration::milliseconds(millis)).with_timezone(&timezone)
    }))
}
