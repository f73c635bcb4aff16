//! Low-precision solar ephemeris and sidereal time.
//!
//! A Keplerian orbit with mean elements calibrated for epoch 2000.0, good to
//! about one arc minute over 1801-2099. The Sun's ecliptic latitude is taken
//! as zero throughout.
//!
//! Reference: P. Schlyter, "How to compute planetary positions"
//! <https://stjarnhimlen.se/comp/ppcomp.html>

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]

use crate::math::{atan2d, cosd, reduce_to_360, sind, sqrt};
use crate::time::DayOffset;

/// Mean anomaly of the Sun at the epoch (degrees).
const MEAN_ANOMALY_EPOCH: f64 = 356.0470;

/// Daily motion of the mean anomaly (degrees/day).
const MEAN_ANOMALY_RATE: f64 = 0.9856002585;

/// Longitude of perihelion at the epoch (degrees).
const PERIHELION_EPOCH: f64 = 282.9404;

/// Daily drift of the longitude of perihelion (degrees/day).
const PERIHELION_RATE: f64 = 4.70935e-5;

/// Apparent solar radius at 1 AU (degrees).
const SOLAR_RADIUS_AT_1_AU: f64 = 0.2666;

/// The Sun's position in ecliptic coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticPosition {
    /// True ecliptic longitude in degrees, [0, 360)
    pub longitude: f64,
    /// Earth-Sun distance in astronomical units
    pub distance: f64,
}

/// Everything the solvers need to know about the Sun at one instant.
///
/// Depends only on the day offset, never on the observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarEphemeris {
    /// True ecliptic longitude in degrees, [0, 360)
    pub ecliptic_longitude: f64,
    /// Earth-Sun distance in astronomical units
    pub distance: f64,
    /// Right ascension in degrees, [0, 360)
    pub right_ascension: f64,
    /// Declination in degrees
    pub declination: f64,
    /// Apparent angular radius of the solar disk in degrees
    pub apparent_radius: f64,
}

/// Obliquity of the ecliptic in degrees.
#[must_use]
pub fn obliquity_of_ecliptic(d: DayOffset) -> f64 {
    23.4393 - 3.563e-7 * d.days()
}

/// Apparent angular radius of the Sun in degrees at `distance` AU.
#[must_use]
pub fn apparent_radius(distance: f64) -> f64 {
    SOLAR_RADIUS_AT_1_AU / distance
}

/// Computes the Sun's ecliptic longitude and distance.
///
/// Kepler's equation is solved with the single-step small-eccentricity
/// approximation `E = M + e·sin(M)·(1 + e·cos(M))`.
#[must_use]
pub fn sun_position(d: DayOffset) -> EclipticPosition {
    let days = d.days();

    // Mean elements; the Sun's mean longitude is m + w
    let m = reduce_to_360(MEAN_ANOMALY_EPOCH + MEAN_ANOMALY_RATE * days);
    let w = PERIHELION_EPOCH + PERIHELION_RATE * days;
    let e = 0.016709 - 1.151e-9 * days;

    // Eccentric anomaly in degrees
    let ecc = m + e.to_degrees() * sind(m) * (1.0 + e * cosd(m));

    // Position in the orbital plane
    let x = cosd(ecc) - e;
    let y = sqrt(1.0 - e * e) * sind(ecc);

    let distance = sqrt(x * x + y * y);
    let true_anomaly = atan2d(y, x);

    EclipticPosition {
        longitude: reduce_to_360(true_anomaly + w),
        distance,
    }
}

/// Computes the Sun's equatorial coordinates, distance and apparent radius.
#[must_use]
pub fn solar_ephemeris(d: DayOffset) -> SolarEphemeris {
    let EclipticPosition {
        longitude,
        distance,
    } = sun_position(d);

    // Ecliptic rectangular coordinates (z = 0)
    let x = distance * cosd(longitude);
    let y_ecl = distance * sind(longitude);

    // Rotate about the x axis by the obliquity
    let obliquity = obliquity_of_ecliptic(d);
    let z = y_ecl * sind(obliquity);
    let y = y_ecl * cosd(obliquity);

    SolarEphemeris {
        ecliptic_longitude: longitude,
        distance,
        right_ascension: reduce_to_360(atan2d(y, x)),
        declination: atan2d(z, sqrt(x * x + y * y)),
        apparent_radius: apparent_radius(distance),
    }
}

/// Greenwich mean sidereal time at 0h UT, in degrees.
///
/// Generalised as GMST0 = GMST - UT so it can be evaluated at any instant of
/// the day: it equals the Sun's mean longitude plus 180°.
#[must_use]
pub fn greenwich_sidereal_time_0h(d: DayOffset) -> f64 {
    reduce_to_360(
        (180.0 + MEAN_ANOMALY_EPOCH + PERIHELION_EPOCH)
            + (MEAN_ANOMALY_RATE + PERIHELION_RATE) * d.days(),
    )
}

/// Local sidereal time at `longitude` for a local-noon day offset, in degrees.
#[must_use]
pub fn local_sidereal_time(d: DayOffset, longitude: f64) -> f64 {
    reduce_to_360(greenwich_sidereal_time_0h(d) + 180.0 + longitude)
}
