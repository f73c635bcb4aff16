//! Day length: how long the sun spends above an altitude threshold.
//!
//! Works from the Sun's ecliptic longitude alone and never touches sidereal
//! time or right ascension, so it stays well defined for polar day (24 hours)
//! and polar night (0 hours). The longitude only shifts the instant the
//! ephemeris is sampled at.

use crate::ephemeris::{apparent_radius, obliquity_of_ecliptic, sun_position};
use crate::math::{acosd, cosd, sind, sqrt};
use crate::{CalendarDate, Horizon, ObserverLocation};

/// Hours the sun spends above `horizon` on `date`.
///
/// # Example
/// ```
/// use sunriset::{daylength, CalendarDate, Horizon, ObserverLocation};
///
/// let hours = daylength::day_length(
///     CalendarDate::new(2024, 6, 21),
///     ObserverLocation::new(70.0, 0.0),
///     Horizon::SunriseSunset,
/// );
/// assert_eq!(hours, 24.0);
/// ```
#[must_use]
pub fn day_length(date: CalendarDate, location: ObserverLocation, horizon: Horizon) -> f64 {
    day_length_for_altitude(date, location, horizon.altitude(), horizon.upper_limb())
}

/// Hours the sun spends above an arbitrary altitude on `date`.
///
/// # Arguments
/// * `date` - Calendar date
/// * `location` - Observer location; the latitude is what matters here
/// * `altitude` - Altitude in degrees
/// * `upper_limb` - Measure to the upper limb of the disk instead of its centre
#[must_use]
pub fn day_length_for_altitude(
    date: CalendarDate,
    location: ObserverLocation,
    altitude: f64,
    upper_limb: bool,
) -> f64 {
    let latitude = location.latitude();
    let d = date.day_offset().local_noon(location.longitude());

    let sun = sun_position(d);
    let sin_declination = sind(obliquity_of_ecliptic(d)) * sind(sun.longitude);
    let cos_declination = sqrt(1.0 - sin_declination * sin_declination);

    let altitude = if upper_limb {
        altitude - apparent_radius(sun.distance)
    } else {
        altitude
    };

    let cos_hour_angle = (sind(altitude) - sind(latitude) * sin_declination)
        / (cosd(latitude) * cos_declination);

    if cos_hour_angle >= 1.0 {
        0.0
    } else if cos_hour_angle <= -1.0 {
        24.0
    } else {
        (2.0 / 15.0) * acosd(cos_hour_angle)
    }
}

/// Length of the morning (or evening) twilight band down to `horizon`, in hours.
///
/// Half the difference between the day length at `horizon` and the ordinary
/// sunrise/sunset day length.
#[must_use]
pub fn twilight_duration(date: CalendarDate, location: ObserverLocation, horizon: Horizon) -> f64 {
    (day_length(date, location, horizon) - day_length(date, location, Horizon::SunriseSunset))
        / 2.0
}
