//! Example demonstrating usage without std/chrono dependencies.
//!
//! Everything below only touches the allocation-free numeric API, which is
//! what a `no_std` build with the `libm` feature provides. The example itself
//! prints with `std` for convenience.

use sunriset::{CalendarDate, Horizon, ObserverLocation, daylength, ephemeris, riseset};

fn main() {
    // Vienna: 48.21°N, 16.37°E, 2024-06-21
    let date = CalendarDate::new(2024, 6, 21);
    let vienna = ObserverLocation::new(48.21, 16.37);

    println!("Sunrise calculations without std/chrono dependencies\n");

    // The ephemeris is sampled once per day at local noon
    let d = date.day_offset().local_noon(vienna.longitude());
    let sun = ephemeris::solar_ephemeris(d);

    println!("Day offset: {:.4} days since 2000 Jan 0.0", d.days());
    println!("Sun at local noon:");
    println!("  Right ascension: {:.3}°", sun.right_ascension);
    println!("  Declination: {:.3}°", sun.declination);
    println!("  Distance: {:.5} AU", sun.distance);
    println!("  Apparent radius: {:.4}°\n", sun.apparent_radius);

    for horizon in Horizon::STANDARD {
        let (start, end) = riseset::sunrise_sunset_utc(date, vienna, horizon).extent();
        let length = daylength::day_length(date, vienna, horizon);
        println!(
            "{:?}: {:.3} - {:.3} h UT ({:.2} h)",
            horizon,
            start.hours(),
            end.hours(),
            length
        );
    }
}
