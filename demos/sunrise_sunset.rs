//! Sunrise, sunset and twilight times for cities at very different latitudes.

use chrono::{DateTime, FixedOffset};
use sunriset::{Crossing, Horizon, ObserverLocation, riseset};

#[derive(Debug)]
struct City {
    name: &'static str,
    latitude: f64,
    longitude: f64,
    date: &'static str,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Local midnight of the winter solstice, in each city's own offset
    let cities = [
        City {
            name: "Longyearbyen, Norway (Arctic)",
            latitude: 78.22,
            longitude: 15.65,
            date: "2023-12-21T00:00:00+01:00",
        },
        City {
            name: "Anchorage, Alaska",
            latitude: 61.216667,
            longitude: -149.866667,
            date: "2023-12-21T00:00:00-09:00",
        },
        City {
            name: "Auckland, New Zealand",
            latitude: -36.840556,
            longitude: 174.74,
            date: "2023-12-21T00:00:00+13:00",
        },
        City {
            name: "Singapore",
            latitude: 1.283333,
            longitude: 103.833333,
            date: "2023-12-21T00:00:00+08:00",
        },
        City {
            name: "Brasília, Brazil",
            latitude: -15.8,
            longitude: -47.85,
            date: "2023-12-21T00:00:00-03:00",
        },
    ];

    for city in &cities {
        let date = city.date.parse::<DateTime<FixedOffset>>()?;
        let location = ObserverLocation::checked(city.latitude, city.longitude)?;

        println!("{} ({})", city.name, date.date_naive());
        for horizon in Horizon::STANDARD {
            let result = riseset::sunrise_sunset(date, location, horizon)?;
            print_result(horizon, &result);
        }
        println!();
    }

    Ok(())
}

fn print_result(horizon: Horizon, result: &Crossing<DateTime<FixedOffset>>) {
    let label = match horizon {
        Horizon::SunriseSunset => "Sunrise/sunset",
        Horizon::CivilTwilight => "Civil twilight",
        Horizon::NauticalTwilight => "Nautical twilight",
        Horizon::AstronomicalTwilight => "Astronomical twilight",
        Horizon::Custom { .. } => "Custom",
    };

    match result {
        Crossing::NormalCrossing { rise, south, set } => println!(
            "  {label:<22} {} - {} (sun due south {})",
            rise.format("%H:%M"),
            set.format("%H:%M"),
            south.format("%H:%M")
        ),
        Crossing::AlwaysAbove { south } => {
            println!("  {label:<22} all day (sun due south {})", south.format("%H:%M"));
        }
        Crossing::AlwaysBelow { south } => {
            println!("  {label:<22} never (sun due south {})", south.format("%H:%M"));
        }
    }
}
