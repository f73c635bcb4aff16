//! Cached solar day for one location.
//!
//! [`SolarDay`] keeps the last computed [`SolarDaySnapshot`] and hands out
//! crossing times in local clock hours. The snapshot is recomputed lazily, in
//! full, the first time a value is read after the date or location changed.
//! Timezone and daylight-saving offsets are added on read and never force a
//! recomputation.
//!
//! The facade is meant to be owned by a single caller. For batch work across
//! many dates or locations call [`crate::riseset`] and [`crate::daylength`]
//! directly; they are pure and can run in parallel.

use log::debug;

use crate::daylength::day_length;
use crate::riseset::sunrise_sunset_utc;
use crate::{CalendarDate, Crossing, Horizon, HoursUtc, ObserverLocation};

/// Supplies "today" to a [`SolarDay`].
///
/// Lets callers choose between a fixed date, the host clock, or any other
/// source without the facade reading a global clock itself.
pub trait DateSource {
    /// The calendar date to compute for.
    fn today(&self) -> CalendarDate;
}

impl DateSource for CalendarDate {
    fn today(&self) -> CalendarDate {
        *self
    }
}

/// Reads the current date from the host's local clock.
#[cfg(feature = "clock")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(feature = "clock")]
impl DateSource for SystemClock {
    fn today(&self) -> CalendarDate {
        CalendarDate::from_date_like(chrono::Local::now().date_naive())
    }
}

/// All crossings and day lengths for one date and location, in UT.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarDaySnapshot {
    date: CalendarDate,
    location: ObserverLocation,
    crossings: [Crossing<HoursUtc>; 4],
    day_lengths: [f64; 4],
}

impl SolarDaySnapshot {
    /// Computes all four crossings and all four day lengths.
    #[must_use]
    pub fn compute(date: CalendarDate, location: ObserverLocation) -> Self {
        Self {
            date,
            location,
            crossings: Horizon::STANDARD.map(|h| sunrise_sunset_utc(date, location, h)),
            day_lengths: Horizon::STANDARD.map(|h| day_length(date, location, h)),
        }
    }

    /// Gets the date this snapshot was computed for.
    #[must_use]
    pub const fn date(&self) -> CalendarDate {
        self.date
    }

    /// Gets the location this snapshot was computed for.
    #[must_use]
    pub const fn location(&self) -> ObserverLocation {
        self.location
    }

    /// Gets the crossing for one of the standard horizons.
    ///
    /// Returns `None` for [`Horizon::Custom`], which snapshots do not cover.
    #[must_use]
    pub fn crossing(&self, horizon: Horizon) -> Option<Crossing<HoursUtc>> {
        standard_index(horizon).map(|i| self.crossings[i])
    }

    /// Gets the day length in hours for one of the standard horizons.
    ///
    /// Returns `None` for [`Horizon::Custom`], which snapshots do not cover.
    #[must_use]
    pub fn day_length(&self, horizon: Horizon) -> Option<f64> {
        standard_index(horizon).map(|i| self.day_lengths[i])
    }

    /// Sunrise/sunset crossing.
    #[must_use]
    pub const fn sunrise_sunset(&self) -> Crossing<HoursUtc> {
        self.crossings[0]
    }

    /// Civil twilight crossing.
    #[must_use]
    pub const fn civil_twilight(&self) -> Crossing<HoursUtc> {
        self.crossings[1]
    }

    /// Nautical twilight crossing.
    #[must_use]
    pub const fn nautical_twilight(&self) -> Crossing<HoursUtc> {
        self.crossings[2]
    }

    /// Astronomical twilight crossing.
    #[must_use]
    pub const fn astronomical_twilight(&self) -> Crossing<HoursUtc> {
        self.crossings[3]
    }
}

const fn standard_index(horizon: Horizon) -> Option<usize> {
    match horizon {
        Horizon::SunriseSunset => Some(0),
        Horizon::CivilTwilight => Some(1),
        Horizon::NauticalTwilight => Some(2),
        Horizon::AstronomicalTwilight => Some(3),
        Horizon::Custom { .. } => None,
    }
}

/// Sunrise, sunset and twilight times for one location, in local clock hours.
///
/// # Example
/// ```
/// use sunriset::{CalendarDate, ObserverLocation, SolarDay};
///
/// let mut day = SolarDay::new(
///     ObserverLocation::new(51.510, -0.117),
///     0.0,
///     CalendarDate::new(2024, 6, 21),
/// )
/// .with_daylight_saving(1.0);
///
/// let sunrise = day.sunrise(); // 04:43 BST
/// assert!((sunrise - 4.72).abs() < 0.02);
/// assert!(day.is_computed());
/// ```
#[derive(Debug, Clone)]
pub struct SolarDay {
    location: ObserverLocation,
    date: CalendarDate,
    timezone_offset: f64,
    daylight_saving: f64,
    snapshot: Option<SolarDaySnapshot>,
}

impl SolarDay {
    /// Creates a facade; nothing is computed until the first read.
    ///
    /// # Arguments
    /// * `location` - Observer location
    /// * `timezone_offset` - Standard-time offset from UT in hours (east positive)
    /// * `date` - Calendar date to compute for
    #[must_use]
    pub const fn new(location: ObserverLocation, timezone_offset: f64, date: CalendarDate) -> Self {
        Self {
            location,
            date,
            timezone_offset,
            daylight_saving: 0.0,
            snapshot: None,
        }
    }

    /// Sets the daylight-saving offset in hours.
    #[must_use]
    pub const fn with_daylight_saving(mut self, hours: f64) -> Self {
        self.daylight_saving = hours;
        self
    }

    /// Gets the observer location.
    #[must_use]
    pub const fn location(&self) -> ObserverLocation {
        self.location
    }

    /// Gets the calendar date.
    #[must_use]
    pub const fn date(&self) -> CalendarDate {
        self.date
    }

    /// Gets the timezone offset in hours.
    #[must_use]
    pub const fn timezone_offset(&self) -> f64 {
        self.timezone_offset
    }

    /// Gets the daylight-saving offset in hours.
    #[must_use]
    pub const fn daylight_saving(&self) -> f64 {
        self.daylight_saving
    }

    /// Whether a valid snapshot is cached.
    #[must_use]
    pub const fn is_computed(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Changes the date, invalidating the cached snapshot if it differs.
    pub fn set_date(&mut self, date: CalendarDate) {
        if date != self.date {
            self.invalidate();
            self.date = date;
        }
    }

    /// Changes the location, invalidating the cached snapshot if it differs.
    pub fn set_location(&mut self, location: ObserverLocation) {
        if location != self.location {
            self.invalidate();
            self.location = location;
        }
    }

    /// Changes the timezone offset; applied on read, so nothing is recomputed.
    pub fn set_timezone_offset(&mut self, hours: f64) {
        self.timezone_offset = hours;
    }

    /// Changes the daylight-saving offset; applied on read, so nothing is recomputed.
    pub fn set_daylight_saving(&mut self, hours: f64) {
        self.daylight_saving = hours;
    }

    /// Drops the cached snapshot so the next read recomputes it.
    pub fn invalidate(&mut self) {
        if self.snapshot.take().is_some() {
            debug!("invalidated solar day for {} at {}", self.date, self.location);
        }
    }

    /// Recomputes the snapshot now.
    pub fn update(&mut self) {
        self.recompute();
    }

    /// Takes the date from `source` and recomputes the snapshot now.
    pub fn refresh<S: DateSource + ?Sized>(&mut self, source: &S) {
        self.date = source.today();
        self.recompute();
    }

    /// Gets the cached snapshot, computing it first if necessary.
    pub fn snapshot(&mut self) -> &SolarDaySnapshot {
        let (date, location) = (self.date, self.location);
        self.snapshot.get_or_insert_with(|| {
            debug!("computing solar day for {date} at {location}");
            SolarDaySnapshot::compute(date, location)
        })
    }

    /// Gets the full crossing for a standard horizon, in local hours.
    ///
    /// Returns `None` for [`Horizon::Custom`].
    pub fn crossing(&mut self, horizon: Horizon) -> Option<Crossing<f64>> {
        let offset = self.local_offset();
        self.snapshot()
            .crossing(horizon)
            .map(|c| c.map(|h| h.offset_by(offset).hours()))
    }

    /// Sunrise in local hours.
    ///
    /// During polar day this is 12 hours before the sun is due south; during
    /// polar night it is the moment the sun is due south.
    pub fn sunrise(&mut self) -> f64 {
        self.start(0)
    }

    /// Sunset in local hours; see [`SolarDay::sunrise`] for polar days and nights.
    pub fn sunset(&mut self) -> f64 {
        self.end(0)
    }

    /// Start of civil twilight in local hours.
    pub fn civil_twilight_start(&mut self) -> f64 {
        self.start(1)
    }

    /// End of civil twilight in local hours.
    pub fn civil_twilight_end(&mut self) -> f64 {
        self.end(1)
    }

    /// Start of nautical twilight in local hours.
    pub fn nautical_twilight_start(&mut self) -> f64 {
        self.start(2)
    }

    /// End of nautical twilight in local hours.
    pub fn nautical_twilight_end(&mut self) -> f64 {
        self.end(2)
    }

    /// Start of astronomical twilight in local hours.
    pub fn astronomical_twilight_start(&mut self) -> f64 {
        self.start(3)
    }

    /// End of astronomical twilight in local hours.
    pub fn astronomical_twilight_end(&mut self) -> f64 {
        self.end(3)
    }

    /// Hours between sunrise and sunset.
    pub fn day_length(&mut self) -> f64 {
        self.snapshot().day_lengths[0]
    }

    /// Day length including civil twilight, in hours.
    pub fn civil_day_length(&mut self) -> f64 {
        self.snapshot().day_lengths[1]
    }

    /// Day length including nautical twilight, in hours.
    pub fn nautical_day_length(&mut self) -> f64 {
        self.snapshot().day_lengths[2]
    }

    /// Day length including astronomical twilight, in hours.
    pub fn astronomical_day_length(&mut self) -> f64 {
        self.snapshot().day_lengths[3]
    }

    /// Length of one civil twilight band (morning or evening), in hours.
    pub fn civil_twilight_duration(&mut self) -> f64 {
        self.twilight_duration(1)
    }

    /// Length of one nautical twilight band (morning or evening), in hours.
    pub fn nautical_twilight_duration(&mut self) -> f64 {
        self.twilight_duration(2)
    }

    /// Length of one astronomical twilight band (morning or evening), in hours.
    pub fn astronomical_twilight_duration(&mut self) -> f64 {
        self.twilight_duration(3)
    }

    fn recompute(&mut self) {
        self.snapshot = None;
        self.snapshot();
    }

    fn local_offset(&self) -> f64 {
        self.timezone_offset + self.daylight_saving
    }

    fn start(&mut self, index: usize) -> f64 {
        let offset = self.local_offset();
        self.snapshot().crossings[index].extent().0.offset_by(offset).hours()
    }

    fn end(&mut self, index: usize) -> f64 {
        let offset = self.local_offset();
        self.snapshot().crossings[index].extent().1.offset_by(offset).hours()
    }

    fn twilight_duration(&mut self, index: usize) -> f64 {
        let lengths = self.snapshot().day_lengths;
        (lengths[index] - lengths[0]) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONDON: ObserverLocation = ObserverLocation::new(51.510, -0.117);
    const MIDSUMMER: CalendarDate = CalendarDate::new(2024, 6, 21);

    #[test]
    fn test_lazy_computation() {
        let mut day = SolarDay::new(LONDON, 0.0, MIDSUMMER);
        assert!(!day.is_computed());

        let sunrise = day.sunrise();
        assert!(day.is_computed());
        assert!((sunrise - 3.7188).abs() < 1e-3);
    }

    #[test]
    fn test_offsets_do_not_invalidate() {
        let mut day = SolarDay::new(LONDON, 0.0, MIDSUMMER);
        let utc_sunset = day.sunset();

        day.set_timezone_offset(1.0);
        day.set_daylight_saving(1.0);
        assert!(day.is_computed());
        assert!((day.sunset() - (utc_sunset + 2.0)).abs() < 1e-12);
    }

    #[test]
    fn test_input_changes_invalidate() {
        let mut day = SolarDay::new(LONDON, 0.0, MIDSUMMER);
        day.update();

        day.set_date(MIDSUMMER);
        assert!(day.is_computed(), "same date keeps the snapshot");

        day.set_date(CalendarDate::new(2024, 12, 21));
        assert!(!day.is_computed());
        assert!(day.sunrise() > 8.0);

        day.set_location(ObserverLocation::new(70.0, 0.0));
        assert!(!day.is_computed());
        assert_eq!(day.day_length(), 0.0);
    }

    #[test]
    fn test_refresh_from_date_source() {
        let mut day = SolarDay::new(LONDON, 0.0, MIDSUMMER);
        day.refresh(&CalendarDate::new(2024, 12, 21));

        assert!(day.is_computed());
        assert_eq!(day.date(), CalendarDate::new(2024, 12, 21));
        assert_eq!(day.snapshot().date(), CalendarDate::new(2024, 12, 21));
    }

    #[test]
    fn test_polar_day_extent() {
        let mut day = SolarDay::new(ObserverLocation::new(70.0, 0.0), 1.0, MIDSUMMER);
        let south = *day.snapshot().sunrise_sunset().south();

        assert!((day.sunrise() - (south.hours() - 12.0 + 1.0)).abs() < 1e-12);
        assert!((day.sunset() - (south.hours() + 12.0 + 1.0)).abs() < 1e-12);
        assert_eq!(day.day_length(), 24.0);
        assert!(matches!(
            day.crossing(Horizon::SunriseSunset),
            Some(Crossing::AlwaysAbove { .. })
        ));
    }

    #[test]
    fn test_custom_horizon_not_cached() {
        let mut day = SolarDay::new(LONDON, 0.0, MIDSUMMER);
        let custom = Horizon::Custom {
            altitude: -3.0,
            upper_limb: false,
        };
        assert_eq!(day.crossing(custom), None);
        assert_eq!(day.snapshot().day_length(custom), None);
    }

    #[test]
    fn test_twilight_durations() {
        let mut day = SolarDay::new(LONDON, 0.0, CalendarDate::new(2024, 12, 21));
        let civil = day.civil_twilight_duration();
        let nautical = day.nautical_twilight_duration();
        let astronomical = day.astronomical_twilight_duration();

        assert!(civil > 0.5 && civil < 0.8, "civil {civil}");
        assert!(civil < nautical && nautical < astronomical);
        assert!((day.civil_day_length() - day.day_length() - 2.0 * civil).abs() < 1e-12);
    }
}
