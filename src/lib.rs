//! # Sunriset
//!
//! Sunrise, sunset and twilight times from a compact closed-form solar model.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! The sun's position comes from a Keplerian orbit with mean elements for
//! epoch 2000.0, sampled once per day at local noon. From it the crate solves
//! when the sun crosses the horizon and the civil, nautical and astronomical
//! twilight thresholds, and how long it stays above each of them. Results are
//! good to about one minute of time for the years 1801-2099.
//!
//! ## Features
//!
//! - Pure, allocation-free solvers usable from `no_std`
//! - Polar day and polar night reported as ordinary results, never as errors
//! - A lazily cached [`SolarDay`] facade that applies timezone and
//!   daylight-saving offsets on read
//! - Thread-safe: every solver is a stateless function of its inputs
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions (usually faster than `libm`)
//! - `chrono` (default): Enable `DateTime<Tz>` based convenience API
//! - `clock`: Enable [`SystemClock`], which reads today's date from the host
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono
//! sunriset = "0.1"
//!
//! # Minimal std (no chrono, smallest dependency tree)
//! sunriset = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # Minimal no_std (pure numeric API)
//! sunriset = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## References
//!
//! - Schlyter, P. How to compute planetary positions. <https://stjarnhimlen.se/comp/ppcomp.html>
//! - Schlyter, P. Computing rise and set times. <https://stjarnhimlen.se/comp/riset.html>
//!
//! ## Quick Start
//!
//! ### Crossing times (numeric API)
//! ```rust
//! use sunriset::{riseset, CalendarDate, Crossing, Horizon, ObserverLocation};
//!
//! let london = ObserverLocation::new(51.510, -0.117);
//! let result = riseset::sunrise_sunset_utc(
//!     CalendarDate::new(2024, 12, 21),
//!     london,
//!     Horizon::SunriseSunset,
//! );
//!
//! match result {
//!     Crossing::NormalCrossing { rise, south, set } => {
//!         println!("Sunrise: {:.4} h UT", rise.hours());
//!         println!("Due south: {:.4} h UT", south.hours());
//!         println!("Sunset: {:.4} h UT", set.hours());
//!     }
//!     _ => println!("No sunrise/sunset (polar day/night)"),
//! }
//! ```
//!
//! ### Cached local times
//! ```rust
//! use sunriset::{CalendarDate, ClockFormat, ClockTime, ObserverLocation, SolarDay};
//!
//! let mut day = SolarDay::new(
//!     ObserverLocation::new(60.167, 24.933), // Helsinki
//!     2.0,
//!     CalendarDate::new(2024, 9, 22),
//! )
//! .with_daylight_saving(1.0);
//!
//! let sunrise = ClockTime::from_hours(day.sunrise(), ClockFormat::TwentyFourHour);
//! println!("Sunrise: {sunrise}");
//! println!("Day length: {:.2} h", day.day_length());
//! ```
//!
//! ### Sunrise and Sunset (requires chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use sunriset::{riseset, Horizon, ObserverLocation};
//! use chrono::{DateTime, FixedOffset};
//!
//! let date = "2024-06-21T00:00:00-07:00".parse::<DateTime<FixedOffset>>().unwrap();
//! let san_francisco = ObserverLocation::new(37.7749, -122.4194);
//! let result = riseset::sunrise_sunset(date, san_francisco, Horizon::CivilTwilight).unwrap();
//!
//! if let (Some(dawn), Some(dusk)) = (result.rise(), result.set()) {
//!     println!("Civil dawn: {dawn}");
//!     println!("Civil dusk: {dusk}");
//! }
//! # }
//! ```
//!
//! ## Coordinate System
//!
//! - **Latitude**: positive north, -90° to +90°
//! - **Longitude**: positive east, -180° to +180°
//! - **Altitude**: 0° = geometric horizon, negative below it

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
)]
#![cfg_attr(test, allow(clippy::float_cmp))]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("enable either the `std` or the `libm` feature for floating-point math");

// Public API exports
pub use crate::ephemeris::SolarEphemeris;
pub use crate::error::{Error, Result};
pub use crate::format::{ClockFormat, ClockTime};
#[cfg(feature = "clock")]
pub use crate::session::SystemClock;
pub use crate::session::{DateSource, SolarDay, SolarDaySnapshot};
pub use crate::time::{CalendarDate, DayOffset};
pub use crate::types::{Crossing, Horizon, HoursUtc, ObserverLocation};

// Solver modules
pub mod daylength;
pub mod ephemeris;
pub mod riseset;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod format;
pub mod session;
pub mod time;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solvers_agree_on_day_length() {
        let date = CalendarDate::new(2024, 9, 22);
        let helsinki = ObserverLocation::new(60.167, 24.933);

        for horizon in Horizon::STANDARD {
            let crossing = riseset::sunrise_sunset_utc(date, helsinki, horizon);
            let (start, end) = crossing.extent();
            let arc = daylength::day_length(date, helsinki, horizon);
            assert!((end.hours() - start.hours() - arc).abs() < 1e-9);
        }
    }

    #[test]
    fn test_facade_matches_free_functions() {
        let date = CalendarDate::new(2024, 3, 20);
        let tokyo = ObserverLocation::new(35.683, 139.767);
        let mut day = SolarDay::new(tokyo, 9.0, date);

        let crossing = riseset::sunrise_sunset_utc(date, tokyo, Horizon::SunriseSunset);
        let rise = crossing.rise().map(|h| h.hours() + 9.0);
        assert_eq!(Some(day.sunrise()), rise);
        assert_eq!(
            day.day_length(),
            daylength::day_length(date, tokyo, Horizon::SunriseSunset)
        );
    }
}
