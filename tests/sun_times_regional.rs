//! Sunlight phases across regions, time zones and seasons.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, TimeZone, Timelike, Utc};
use chrono_tz::{America::Los_Angeles, Australia::Sydney, Europe::London};
use suncalc::{SunTimes, sun};

fn minutes_between<Tz: TimeZone>(actual: &DateTime<Tz>, expected: &DateTime<Utc>) -> f64 {
    (actual.clone().with_timezone(&Utc) - *expected).num_seconds() as f64 / 60.0
}

#[test]
fn test_london_winter_solstice_against_almanac() {
    // NOAA solar calculator: sunrise 08:04:18, sunset 15:54:07 UTC. The low-order solar
    // series puts December solar noon about 1.5 minutes late, so both events land near 08:05:36
    // and 15:55:11, still inside the tolerance.
    let date = Utc.with_ymd_and_hms(2020, 12, 22, 12, 0, 0).unwrap();
    let times = sun::sun_times(date, 51.5, -0.1, 0.0, &SunTimes::standard()).unwrap();

    let sunrise = times.sunrise().unwrap();
    let sunset = times.sunset().unwrap();
    let expected_sunrise = Utc.with_ymd_and_hms(2020, 12, 22, 8, 4, 18).unwrap();
    let expected_sunset = Utc.with_ymd_and_hms(2020, 12, 22, 15, 54, 7).unwrap();

    assert!(minutes_between(sunrise, &expected_sunrise).abs() <= 2.0, "sunrise {sunrise}");
    assert!(minutes_between(sunset, &expected_sunset).abs() <= 2.0, "sunset {sunset}");

    let noon = times.solar_noon();
    assert_eq!((noon.hour(), noon.minute()), (12, 0));
}

#[test]
fn test_london_named_time_zone() {
    // Midsummer: results come back in British Summer Time
    let date = London.with_ymd_and_hms(2021, 6, 21, 13, 0, 0).unwrap();
    let times = sun::sun_times(date, 51.5, -0.1, 0.0, &SunTimes::standard()).unwrap();

    let sunrise = times.sunrise().unwrap();
    let sunset = times.sunset().unwrap();
    assert_eq!(sunrise.timezone(), London);
    assert_eq!(sunrise.offset().to_string(), "BST");
    assert_eq!((sunrise.hour(), sunset.hour()), (4, 21));
    assert_eq!(sunrise.day(), 21);
    assert_eq!(sunset.day(), 21);
}

#[test]
fn test_results_independent_of_input_zone() {
    let utc = Utc.with_ymd_and_hms(2023, 6, 21, 20, 0, 0).unwrap();
    let pacific = utc.with_timezone(&Los_Angeles);
    let fixed = utc.with_timezone(&FixedOffset::east_opt(5 * 3600).unwrap());

    let times_utc = sun::sun_times(utc, 37.7749, -122.4194, 0.0, &SunTimes::standard()).unwrap();
    let times_pacific =
        sun::sun_times(pacific, 37.7749, -122.4194, 0.0, &SunTimes::standard()).unwrap();
    let times_fixed =
        sun::sun_times(fixed, 37.7749, -122.4194, 0.0, &SunTimes::standard()).unwrap();

    for ((label, a), ((_, b), (_, c))) in times_utc
        .iter()
        .zip(times_pacific.iter().zip(times_fixed.iter()))
    {
        assert_eq!(a, b, "{label}");
        assert_eq!(a, c, "{label}");
    }

    // 05:48 PDT sunrise, 20:35 PDT sunset
    let sunrise = times_pacific.sunrise().unwrap();
    let sunset = times_pacific.sunset().unwrap();
    assert_eq!((sunrise.hour(), sunrise.minute() / 10), (5, 4));
    assert_eq!((sunset.hour(), sunset.minute() / 10), (20, 3));
}

#[test]
fn test_southern_hemisphere_summer() {
    let date = Sydney.with_ymd_and_hms(2023, 12, 21, 12, 0, 0).unwrap();
    let times = sun::sun_times(date, -33.87, 151.21, 0.0, &SunTimes::standard()).unwrap();

    let sunrise = times.sunrise().unwrap();
    let sunset = times.sunset().unwrap();
    // 05:41 and 20:05 AEDT
    assert_eq!((sunrise.hour(), sunrise.minute() / 10), (5, 4));
    assert_eq!((sunset.hour(), sunset.minute() / 10), (20, 0));

    let length = *sunset - *sunrise;
    assert!(length > Duration::hours(14) && length < Duration::hours(15));
}

#[test]
fn test_polar_day_and_night() {
    let summer = Utc.with_ymd_and_hms(2020, 6, 21, 12, 0, 0).unwrap();
    let times = sun::sun_times(summer, 78.0, 15.0, 0.0, &SunTimes::standard()).unwrap();
    assert_eq!(times.len(), 2);
    assert!(times.sunrise().is_none());
    assert!(times.sunset().is_none());
    assert!(times.get("solarNoon").is_some());
    assert!(times.get("nadir").is_some());
    assert_eq!(times.events().count(), 0);

    let winter = Utc.with_ymd_and_hms(2020, 12, 21, 12, 0, 0).unwrap();
    let times = sun::sun_times(winter, 78.0, 15.0, 0.0, &SunTimes::standard()).unwrap();
    assert!(times.sunrise().is_none());
    assert!(times.get("dawn").is_none());
    // Sun peaks around -11.4°: nautical twilight at best
    assert!(times.get("nauticalDawn").is_some());
    assert!(times.get("nightEnd").is_some());
    assert!(times.get("night").is_some());
}

#[test]
fn test_transit_symmetry_throughout_the_year() {
    let times = SunTimes::standard();
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    for day in (0..366).step_by(7) {
        let date = Utc.from_utc_datetime(
            &(start + Duration::days(day)).and_hms_opt(12, 0, 0).unwrap(),
        );
        let jd = suncalc::time::JulianDate::from_datetime(&date);
        let result = sun::sun_times_from_julian(jd, 45.0, 5.0, 0.0, &times).unwrap();
        let noon = result.solar_noon().julian_date();

        for time in &times {
            let rise = result.get(time.rise_label()).unwrap().julian_date();
            let set = result.get(time.set_label()).unwrap().julian_date();
            assert!(
                ((noon - rise) - (set - noon)).abs() < 1e-9,
                "{} on day {day}",
                time.rise_label()
            );
        }
    }
}

#[test]
fn test_custom_thresholds_are_ordered() {
    let times = SunTimes::standard()
        .with(-3.0, "blueHourEnd", "blueHour")
        .unwrap()
        .with(10.0, "morningLight", "eveningLight")
        .unwrap();
    let date = Utc.with_ymd_and_hms(2023, 9, 23, 12, 0, 0).unwrap();
    let result = sun::sun_times(date, 48.21, 16.37, 0.0, &times).unwrap();

    let get = |label: &str| *result.get(label).unwrap();
    assert!(get("dawn") < get("blueHourEnd"));
    assert!(get("blueHourEnd") < get("sunrise"));
    assert!(get("goldenHourEnd") < get("morningLight"));
    assert!(get("eveningLight") < get("goldenHour"));
    assert!(get("sunset") < get("blueHour"));
    assert!(get("blueHour") < get("dusk"));

    let labels: Vec<&str> = result.events().map(|(label, _)| label).collect();
    assert_eq!(labels.len(), 16);
    assert_eq!(&labels[12..], ["blueHourEnd", "blueHour", "morningLight", "eveningLight"]);
}

#[test]
fn test_invalid_coordinates() {
    let date = Utc.with_ymd_and_hms(2023, 6, 21, 12, 0, 0).unwrap();
    let times = SunTimes::standard();

    assert!(sun::sun_times(date, 90.5, 0.0, 0.0, &times).is_err());
    assert!(sun::sun_times(date, 0.0, -180.5, 0.0, &times).is_err());
    assert!(sun::sun_times(date, 0.0, 0.0, f64::NAN, &times).is_err());
    assert!(sun::sun_position(date, f64::INFINITY, 0.0).is_err());
}
