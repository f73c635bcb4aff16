//! Print a day-length and twilight report for a few locations.
//!
//! Pass a date as `YYYY-MM-DD` to report on a different day:
//! `cargo run --example solar_report -- 2024-12-21`

use sunriset::{CalendarDate, ClockFormat, ClockTime, ObserverLocation, SolarDay};

struct Site {
    name: &'static str,
    location: ObserverLocation,
    timezone: f64,
    daylight_saving: f64,
}

const SITES: [Site; 4] = [
    Site {
        name: "London",
        location: ObserverLocation::new(51.510, -0.117),
        timezone: 0.0,
        daylight_saving: 1.0,
    },
    Site {
        name: "Mumbai",
        location: ObserverLocation::new(19.076, 72.878),
        timezone: 5.5,
        daylight_saving: 0.0,
    },
    Site {
        name: "Tromsø",
        location: ObserverLocation::new(69.649, 18.956),
        timezone: 1.0,
        daylight_saving: 1.0,
    },
    Site {
        name: "Wellington",
        location: ObserverLocation::new(-41.289, 174.777),
        timezone: 12.0,
        daylight_saving: 0.0,
    },
];

fn parse_date(text: &str) -> Result<CalendarDate, Box<dyn std::error::Error>> {
    let mut parts = text.splitn(3, '-');
    let mut next = || parts.next().ok_or("expected YYYY-MM-DD");
    let year = next()?.parse()?;
    let month = next()?.parse()?;
    let day = next()?.parse()?;
    Ok(CalendarDate::checked(year, month, day)?)
}

fn clock(hours: f64) -> ClockTime {
    ClockTime::from_hours(hours, ClockFormat::TwentyFourHour)
}

fn print_report(site: &Site, day: &mut SolarDay) {
    println!("{} {} on {}", site.name, site.location, day.date());
    println!("Day length:                 {:5.2} hours", day.day_length());
    println!("With civil twilight         {:5.2} hours", day.civil_day_length());
    println!("With nautical twilight      {:5.2} hours", day.nautical_day_length());
    println!("With astronomical twilight  {:5.2} hours", day.astronomical_day_length());
    println!("Length of twilight: civil   {:5.2} hours", day.civil_twilight_duration());
    println!("                  nautical  {:5.2} hours", day.nautical_twilight_duration());
    println!("              astronomical  {:5.2} hours", day.astronomical_twilight_duration());
    println!("Sun rises {}, sets {}", clock(day.sunrise()), clock(day.sunset()));
    println!(
        "Civil twilight starts {}, ends {}",
        clock(day.civil_twilight_start()),
        clock(day.civil_twilight_end())
    );
    println!(
        "Nautical twilight starts {}, ends {}",
        clock(day.nautical_twilight_start()),
        clock(day.nautical_twilight_end())
    );
    println!(
        "Astronomical twilight starts {}, ends {}",
        clock(day.astronomical_twilight_start()),
        clock(day.astronomical_twilight_end())
    );

    let sunrise = day.crossing(sunriset::Horizon::SunriseSunset);
    match sunrise {
        Some(crossing) if crossing.is_always_above() => println!("(midnight sun)"),
        Some(crossing) if crossing.is_always_below() => println!("(polar night)"),
        _ => {}
    }
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let date = match std::env::args().nth(1) {
        Some(text) => parse_date(&text)?,
        None => CalendarDate::new(2024, 6, 21),
    };

    for site in &SITES {
        let mut day = SolarDay::new(site.location, site.timezone, date)
            .with_daylight_saving(site.daylight_saving);
        print_report(site, &mut day);
    }

    Ok(())
}
