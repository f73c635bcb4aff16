//! Core data types for sunrise, sunset and twilight calculations.

use core::fmt;
use core::hash::{Hash, Hasher};

use crate::Result;
use crate::error::{check_altitude, check_coordinates};
use crate::math::floor;

/// Observer position on the Earth's surface.
///
/// Latitude is positive north, longitude positive east, both in degrees. The
/// solvers accept any value; out-of-range coordinates simply produce
/// meaningless times. Use [`ObserverLocation::checked`] to validate input.
///
/// # Example
/// ```
/// # use sunriset::ObserverLocation;
/// let london = ObserverLocation::new(51.510, -0.117);
/// assert_eq!(london.latitude(), 51.510);
/// assert!(ObserverLocation::checked(95.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverLocation {
    latitude: f64,
    longitude: f64,
}

impl ObserverLocation {
    /// Creates a location without validation.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Creates a location after checking both coordinates.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
    pub fn checked(latitude: f64, longitude: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self::new(latitude, longitude))
    }

    /// Gets the latitude in degrees (positive north).
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees (positive east).
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for ObserverLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}°, {:.3}°)", self.latitude, self.longitude)
    }
}

/// Altitude thresholds the sun's crossing times are computed for.
///
/// Rise/set is timed on the sun's upper limb, twilight boundaries on the
/// centre of the disk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Horizon {
    /// Sunrise/sunset: upper limb at -35 arc minutes (mean horizontal refraction)
    SunriseSunset,
    /// Civil twilight (sun centre 6° below horizon)
    CivilTwilight,
    /// Nautical twilight (sun centre 12° below horizon)
    NauticalTwilight,
    /// Astronomical twilight (sun centre 18° below horizon)
    AstronomicalTwilight,
    /// Custom altitude, optionally timed on the upper limb
    Custom {
        /// Target altitude in degrees
        altitude: f64,
        /// Time the upper limb instead of the centre
        upper_limb: bool,
    },
}

impl Horizon {
    /// The four fixed thresholds, from the horizon downwards.
    pub const STANDARD: [Self; 4] = [
        Self::SunriseSunset,
        Self::CivilTwilight,
        Self::NauticalTwilight,
        Self::AstronomicalTwilight,
    ];

    /// Gets the target altitude in degrees.
    ///
    /// Negative values are below the horizon.
    #[must_use]
    pub const fn altitude(&self) -> f64 {
        match self {
            Self::SunriseSunset => -35.0 / 60.0,
            Self::CivilTwilight => -6.0,
            Self::NauticalTwilight => -12.0,
            Self::AstronomicalTwilight => -18.0,
            Self::Custom { altitude, .. } => *altitude,
        }
    }

    /// Whether crossings are timed on the upper limb of the solar disk.
    #[must_use]
    pub const fn upper_limb(&self) -> bool {
        match self {
            Self::SunriseSunset => true,
            Self::CivilTwilight | Self::NauticalTwilight | Self::AstronomicalTwilight => false,
            Self::Custom { upper_limb, .. } => *upper_limb,
        }
    }

    /// Creates a custom horizon with the specified altitude.
    ///
    /// # Errors
    /// Returns `InvalidAltitude` if altitude is outside -90 to +90 degrees.
    pub fn custom(altitude: f64, upper_limb: bool) -> Result<Self> {
        check_altitude(altitude)?;
        Ok(Self::Custom {
            altitude,
            upper_limb,
        })
    }
}

impl Eq for Horizon {}

impl Hash for Horizon {
    fn hash<H: Hasher>(&self, state: &mut H) {
        core::mem::discriminant(self).hash(state);
        if let Self::Custom {
            altitude,
            upper_limb,
        } = self
        {
            // adding +0.0 folds -0.0 into +0.0, matching PartialEq
            (altitude + 0.0).to_bits().hash(state);
            upper_limb.hash(state);
        }
    }
}

/// Hours relative to 0h UT of the calculation date.
///
/// Crossing times are not wrapped into a single day:
/// - Negative values fall on the previous day
/// - 0.0 to < 24.0 falls on the requested date
/// - ≥ 24.0 falls on the next day
///
/// # Example
/// ```
/// # use sunriset::HoursUtc;
/// let sunset = HoursUtc::from_hours(27.5); // 03:30 UT the next day
/// assert_eq!(sunset.day_and_hours(), (1, 3.5));
/// assert_eq!(sunset.offset_by(-7.0).hours(), 20.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct HoursUtc(f64);

impl HoursUtc {
    /// Creates a new `HoursUtc` from hours since midnight UT.
    #[must_use]
    pub const fn from_hours(hours: f64) -> Self {
        Self(hours)
    }

    /// Gets the raw hours value.
    ///
    /// Can be negative (previous day) or ≥ 24.0 (next day).
    #[must_use]
    pub const fn hours(&self) -> f64 {
        self.0
    }

    /// Adds a fixed offset in hours, e.g. a timezone or daylight-saving offset.
    #[must_use]
    pub fn offset_by(self, hours: f64) -> Self {
        Self(self.0 + hours)
    }

    /// Splits into whole days relative to the calculation date and hours
    /// within that day, in [0, 24).
    ///
    /// Non-finite values come back unchanged with a day offset of zero.
    #[must_use]
    pub fn day_and_hours(&self) -> (i32, f64) {
        let hours = self.0;
        if !hours.is_finite() {
            return (0, hours);
        }

        let days = floor(hours / 24.0);
        // the division can round so the remainder lands just outside [0, 24)
        let (days, within) = match hours - days * 24.0 {
            h if h < 0.0 => (days - 1.0, h + 24.0),
            h if h >= 24.0 => (days + 1.0, h - 24.0),
            h => (days, h),
        };

        // float-to-int casts saturate at the i32 bounds
        (days as i32, within)
    }
}

/// Outcome of solving for the sun crossing an altitude threshold on one day.
///
/// The degenerate variants are ordinary results, not errors: they carry the
/// time the sun is due south so callers still have an anchor for the day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Crossing<T = HoursUtc> {
    /// The sun rises through and sets below the threshold
    NormalCrossing {
        /// Upward crossing
        rise: T,
        /// Sun due south (local meridian transit)
        south: T,
        /// Downward crossing
        set: T,
    },
    /// The sun stays above the threshold all day (polar day)
    AlwaysAbove {
        /// Sun due south (highest point)
        south: T,
    },
    /// The sun stays below the threshold all day (polar night)
    AlwaysBelow {
        /// Sun due south (highest point, still below threshold)
        south: T,
    },
}

impl<T> Crossing<T> {
    /// Gets the time the sun is due south.
    pub const fn south(&self) -> &T {
        match self {
            Self::NormalCrossing { south, .. }
            | Self::AlwaysAbove { south }
            | Self::AlwaysBelow { south } => south,
        }
    }

    /// Gets the rise time if the sun crosses the threshold.
    pub const fn rise(&self) -> Option<&T> {
        if let Self::NormalCrossing { rise, .. } = self {
            Some(rise)
        } else {
            None
        }
    }

    /// Gets the set time if the sun crosses the threshold.
    pub const fn set(&self) -> Option<&T> {
        if let Self::NormalCrossing { set, .. } = self {
            Some(set)
        } else {
            None
        }
    }

    /// Checks if the sun rises and sets through the threshold.
    pub const fn is_normal(&self) -> bool {
        matches!(self, Self::NormalCrossing { .. })
    }

    /// Checks if the sun stays above the threshold all day.
    pub const fn is_always_above(&self) -> bool {
        matches!(self, Self::AlwaysAbove { .. })
    }

    /// Checks if the sun stays below the threshold all day.
    pub const fn is_always_below(&self) -> bool {
        matches!(self, Self::AlwaysBelow { .. })
    }

    /// Maps every contained time with `f`, keeping the variant.
    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> Crossing<U> {
        match self {
            Self::NormalCrossing { rise, south, set } => Crossing::NormalCrossing {
                rise: f(rise),
                south: f(south),
                set: f(set),
            },
            Self::AlwaysAbove { south } => Crossing::AlwaysAbove { south: f(south) },
            Self::AlwaysBelow { south } => Crossing::AlwaysBelow { south: f(south) },
        }
    }
}

impl Crossing<HoursUtc> {
    /// Start and end of the interval the sun spends above the threshold.
    ///
    /// Polar day spans south ± 12 hours; polar night collapses to the
    /// instant the sun is due south.
    #[must_use]
    pub fn extent(&self) -> (HoursUtc, HoursUtc) {
        match *self {
            Self::NormalCrossing { rise, set, .. } => (rise, set),
            Self::AlwaysAbove { south } => (south.offset_by(-12.0), south.offset_by(12.0)),
            Self::AlwaysBelow { south } => (south, south),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizon_altitudes() {
        assert_eq!(Horizon::SunriseSunset.altitude(), -35.0 / 60.0);
        assert_eq!(Horizon::CivilTwilight.altitude(), -6.0);
        assert_eq!(Horizon::NauticalTwilight.altitude(), -12.0);
        assert_eq!(Horizon::AstronomicalTwilight.altitude(), -18.0);

        assert!(Horizon::SunriseSunset.upper_limb());
        assert!(!Horizon::CivilTwilight.upper_limb());
        assert!(!Horizon::NauticalTwilight.upper_limb());
        assert!(!Horizon::AstronomicalTwilight.upper_limb());

        let custom = Horizon::custom(-3.0, true).unwrap();
        assert_eq!(custom.altitude(), -3.0);
        assert!(custom.upper_limb());

        assert!(Horizon::custom(-95.0, false).is_err());
        assert!(Horizon::custom(95.0, false).is_err());
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_horizon_hash_normalizes_zero_sign() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(Horizon::Custom {
            altitude: 0.0,
            upper_limb: false,
        });
        set.insert(Horizon::Custom {
            altitude: -0.0,
            upper_limb: false,
        });
        set.insert(Horizon::Custom {
            altitude: 0.0,
            upper_limb: true,
        });

        assert_eq!(set.len(), 2, "hashing should treat +0.0 and -0.0 equally");
    }

    #[test]
    fn test_observer_location() {
        let loc = ObserverLocation::new(-33.85, 151.2);
        assert_eq!(loc.latitude(), -33.85);
        assert_eq!(loc.longitude(), 151.2);

        assert!(ObserverLocation::checked(90.0, 180.0).is_ok());
        assert!(ObserverLocation::checked(0.0, 181.0).is_err());
        assert!(ObserverLocation::checked(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_hours_utc_day_and_hours() {
        assert_eq!(HoursUtc::from_hours(12.5).day_and_hours(), (0, 12.5));
        assert_eq!(HoursUtc::from_hours(24.0).day_and_hours(), (1, 0.0));
        assert_eq!(HoursUtc::from_hours(-3.0).day_and_hours(), (-1, 21.0));
        assert_eq!(HoursUtc::from_hours(-50.5).day_and_hours(), (-3, 21.5));
    }

    #[test]
    fn test_crossing_accessors() {
        let normal = Crossing::NormalCrossing {
            rise: HoursUtc::from_hours(6.0),
            south: HoursUtc::from_hours(12.0),
            set: HoursUtc::from_hours(18.0),
        };
        assert!(normal.is_normal());
        assert_eq!(normal.rise(), Some(&HoursUtc::from_hours(6.0)));
        assert_eq!(normal.set(), Some(&HoursUtc::from_hours(18.0)));
        assert_eq!(normal.south().hours(), 12.0);
        assert_eq!(
            normal.extent(),
            (HoursUtc::from_hours(6.0), HoursUtc::from_hours(18.0))
        );

        let above = Crossing::AlwaysAbove {
            south: HoursUtc::from_hours(11.5),
        };
        assert!(above.is_always_above());
        assert_eq!(above.rise(), None);
        assert_eq!(
            above.extent(),
            (HoursUtc::from_hours(-0.5), HoursUtc::from_hours(23.5))
        );

        let below = Crossing::AlwaysBelow {
            south: HoursUtc::from_hours(12.25),
        };
        assert!(below.is_always_below());
        assert_eq!(below.set(), None);
        assert_eq!(
            below.extent(),
            (HoursUtc::from_hours(12.25), HoursUtc::from_hours(12.25))
        );
    }

    #[test]
    fn test_crossing_map_keeps_variant() {
        let below = Crossing::AlwaysBelow {
            south: HoursUtc::from_hours(12.0),
        };
        let local = below.map(|h| h.hours() + 2.0);
        assert_eq!(local, Crossing::AlwaysBelow { south: 14.0 });
    }
}
