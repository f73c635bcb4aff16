//! Tests for the `DateTime<Tz>` convenience API.
#![cfg(feature = "chrono")]

use chrono::{DateTime, FixedOffset, NaiveDate, Timelike, Utc};
use sunriset::{CalendarDate, Crossing, Horizon, ObserverLocation, riseset};

fn local(datetime: &str) -> DateTime<FixedOffset> {
    datetime.parse().unwrap()
}

#[test]
fn test_times_land_on_the_local_date() {
    // UT times are negative for Sydney and Tokyo, past 24 for New York
    let cases = [
        ("2024-06-21T00:00:00+10:00", -33.85, 151.2, (7, 0), (16, 54)),
        ("2024-03-20T00:00:00+09:00", 35.683, 139.767, (5, 44), (17, 52)),
        ("2024-06-20T00:00:00-04:00", 40.712, -74.005, (5, 24), (20, 30)),
    ];

    for (datetime, latitude, longitude, rise_hm, set_hm) in cases {
        let date = local(datetime);
        let location = ObserverLocation::new(latitude, longitude);
        let result = riseset::sunrise_sunset(date, location, Horizon::SunriseSunset).unwrap();

        let Crossing::NormalCrossing { rise, south, set } = result else {
            panic!("{datetime}: expected a normal crossing");
        };
        assert_eq!(rise.date_naive(), date.date_naive(), "{datetime}");
        assert_eq!(set.date_naive(), date.date_naive(), "{datetime}");
        assert_eq!(rise.offset(), date.offset());
        assert_eq!((rise.hour(), rise.minute()), rise_hm, "{datetime}");
        assert_eq!((set.hour(), set.minute()), set_hm, "{datetime}");
        assert!(rise < south && south < set);
    }
}

#[test]
fn test_time_of_day_is_ignored() {
    let location = ObserverLocation::new(51.510, -0.117);
    let morning = riseset::sunrise_sunset(
        local("2024-06-21T00:00:00+01:00"),
        location,
        Horizon::CivilTwilight,
    )
    .unwrap();
    let evening = riseset::sunrise_sunset(
        local("2024-06-21T23:59:59+01:00"),
        location,
        Horizon::CivilTwilight,
    )
    .unwrap();

    assert_eq!(morning, evening);
}

#[test]
fn test_matches_numeric_api() {
    let location = ObserverLocation::new(64.15, -21.933);
    let date = CalendarDate::new(2024, 6, 21);
    let midnight = date.utc_midnight().unwrap();

    let numeric = riseset::sunrise_sunset_utc(date, location, Horizon::SunriseSunset);
    let timed = riseset::sunrise_sunset(midnight, location, Horizon::SunriseSunset).unwrap();

    let rise = numeric.rise().unwrap().hours();
    let expected = midnight + chrono::Duration::milliseconds((rise * 3_600_000.0).round() as i64);
    assert_eq!(timed.rise(), Some(&expected));

    // Reykjavik sunset falls just after midnight UT
    let set = timed.set().unwrap();
    assert_eq!(set.date_naive(), NaiveDate::from_ymd_opt(2024, 6, 22).unwrap());
}

#[test]
fn test_polar_states_are_preserved() {
    let arctic = ObserverLocation::new(70.0, 0.0);
    let summer = "2024-06-21T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
    let winter = "2024-12-21T12:00:00Z".parse::<DateTime<Utc>>().unwrap();

    let day = riseset::sunrise_sunset(summer, arctic, Horizon::SunriseSunset).unwrap();
    let Crossing::AlwaysAbove { south } = day else {
        panic!("expected polar day, got {day:?}");
    };
    assert_eq!((south.hour(), south.minute()), (12, 1));

    let night = riseset::sunrise_sunset(winter, arctic, Horizon::SunriseSunset).unwrap();
    assert!(night.is_always_below());
    assert!(night.rise().is_none());
}

#[test]
fn test_calendar_date_from_chrono() {
    let naive = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
    let date = CalendarDate::from(naive);
    assert_eq!(date.day_offset().days(), 8826.0);
    assert_eq!(CalendarDate::from_date_like(local("2024-02-29T23:00:00-05:00")), date);
}
