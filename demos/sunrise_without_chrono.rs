//! Example demonstrating sunrise/sunset calculation without the chrono library.
//!
//! This example shows how to use the numeric API when you don't want to depend on chrono.

use sunriset::{CalendarDate, Crossing, Horizon, ObserverLocation, daylength, riseset};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // San Francisco, June 21, 2023
    let date = CalendarDate::checked(2023, 6, 21)?;
    let location = ObserverLocation::checked(37.7749, -122.4194)?;

    let result = riseset::sunrise_sunset_utc(date, location, Horizon::SunriseSunset);

    match result {
        Crossing::NormalCrossing { rise, south, set } => {
            println!("San Francisco, {date} (UTC):");
            println!("  Sunrise:  {:.4} hours", rise.hours());
            println!("  South:    {:.4} hours", south.hours());
            println!("  Sunset:   {:.4} hours", set.hours());
            println!();

            // Sunset falls after midnight UT, on the next day
            let (day_offset, hours) = set.day_and_hours();
            println!("Sunset breakdown:");
            println!("  Day offset: {day_offset}");
            println!("  Hours in day: {hours:.2}");

            // Shift into Pacific Daylight Time
            println!("  Local (PDT): {:.2}", set.offset_by(-7.0).hours());
        }
        Crossing::AlwaysAbove { south } => {
            println!("Polar day - sun never sets");
            println!("  South: {} hours", south.hours());
        }
        Crossing::AlwaysBelow { south } => {
            println!("Polar night - sun never rises");
            println!("  South: {} hours", south.hours());
        }
    }

    // Example with a custom altitude, timed on the upper limb
    println!("\nWith custom altitude (-1.0°, upper limb):");
    let custom = Horizon::custom(-1.0, true)?;
    let custom_result = riseset::sunrise_sunset_utc(date, location, custom);
    if let (Some(rise), Some(set)) = (custom_result.rise(), custom_result.set()) {
        println!("  Sunrise: {:.4} hours", rise.hours());
        println!("  Sunset:  {:.4} hours", set.hours());
    }

    println!("\nDay lengths:");
    for horizon in Horizon::STANDARD {
        println!(
            "  {:?}: {:.2} hours",
            horizon,
            daylength::day_length(date, location, horizon)
        );
    }

    Ok(())
}
