//! Tests for the numeric (non-chrono) API

use suncalc::time::JulianDate;
use suncalc::{HoursUtc, MoonTimes, SunTimes, illumination, moon, sun};

#[test]
fn test_moon_times_utc_basic() {
    let result = moon::moon_times_utc(2013, 3, 4, 50.5, 30.5).unwrap();

    if let MoonTimes::Crossings {
        rise: Some(rise),
        set: Some(set),
    } = result
    {
        // Moonrise late in the evening, moonset in the morning
        assert!((rise.hours() - 23.908).abs() < 0.001);
        assert!((set.hours() - 7.800).abs() < 0.001);
        assert_eq!(rise.day_and_hours().0, 0);
    } else {
        panic!("Expected rise and set, got {result:?}");
    }
}

#[test]
fn test_moon_always_up_and_down_is_exact() {
    let down = moon::moon_times_utc(2024, 1, 10, 78.0, 15.0).unwrap();
    assert_eq!(down, MoonTimes::AlwaysDown);
    assert!(down.rise().is_none() && down.set().is_none());

    let up = moon::moon_times_utc(2024, 1, 23, 78.0, 15.0).unwrap();
    assert_eq!(up, MoonTimes::AlwaysUp);
    assert!(up.rise().is_none() && up.set().is_none());
}

#[test]
fn test_moon_classification_matches_position() {
    // At noon of an always-up day the moon must be above the horizon
    let jd = JulianDate::from_utc(2024, 1, 23, 12, 0, 0.0).unwrap();
    let position = moon::moon_position_from_julian(jd, 78.0, 15.0).unwrap();
    assert!(position.apparent_altitude() > 0.0);

    let jd = JulianDate::from_utc(2024, 1, 10, 12, 0, 0.0).unwrap();
    let position = moon::moon_position_from_julian(jd, 78.0, 15.0).unwrap();
    assert!(position.apparent_altitude() < 0.0);
}

#[test]
fn test_moon_crossing_is_horizon_crossing() {
    let result = moon::moon_times_utc(2013, 3, 4, 50.5, 30.5).unwrap();
    let start = JulianDate::from_utc(2013, 3, 4, 0, 0, 0.0).unwrap();

    let rise = start.add_days(result.rise().unwrap().hours() / 24.0);
    let before = moon::moon_position_from_julian(rise.add_days(-0.5 / 24.0), 50.5, 30.5).unwrap();
    let after = moon::moon_position_from_julian(rise.add_days(0.5 / 24.0), 50.5, 30.5).unwrap();
    assert!(before.apparent_altitude() < after.apparent_altitude());
    assert!(!before.horizontal().is_above_horizon());
}

#[test]
fn test_sun_times_from_julian() {
    let jd = JulianDate::from_utc(2020, 12, 22, 12, 0, 0.0).unwrap();
    let times = sun::sun_times_from_julian(jd, 51.5, -0.1, 0.0, &SunTimes::standard()).unwrap();

    let sunrise = times.sunrise().unwrap().to_utc().unwrap();
    let sunset = times.sunset().unwrap().to_utc().unwrap();
    assert_eq!((sunrise.day(), sunrise.hour(), sunrise.minute()), (22, 8, 5));
    assert_eq!((sunset.day(), sunset.hour(), sunset.minute()), (22, 15, 55));

    // Convert to hours of the UTC day
    let midnight = JulianDate::from_utc(2020, 12, 22, 0, 0, 0.0).unwrap();
    let hours = times.map(|t| HoursUtc::from_hours((t.julian_date() - midnight.julian_date()) * 24.0));
    assert!((hours.solar_noon().hours() - 12.0066).abs() < 1e-3);
    assert_eq!(hours.nadir().day_and_hours().0, 0);
}

#[test]
fn test_illumination_from_julian() {
    let jd = JulianDate::from_utc(2020, 12, 30, 3, 28, 0.0).unwrap();
    let moon = illumination::moon_illumination_from_julian(jd);
    assert!(moon.fraction() > 0.99);

    let d = jd.days_since_j2000();
    let coordinates = moon::moon_coordinates(d);
    let same = illumination::illumination_from_coordinates(
        sun::sun_coordinates(d),
        coordinates.equatorial(),
        coordinates.distance(),
    );
    assert_eq!(moon, same);
}

#[test]
fn test_invalid_dates_rejected() {
    assert!(moon::moon_times_utc(2023, 2, 29, 0.0, 0.0).is_err());
    assert!(moon::moon_times_utc(2023, 13, 1, 0.0, 0.0).is_err());
    assert!(moon::moon_times_utc(2024, 2, 29, 0.0, 0.0).is_ok());
    assert!(JulianDate::from_julian_date(f64::NAN).is_err());
}
