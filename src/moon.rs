//! Moon position and moon rise/set.
//!
//! The lunar model keeps only the largest periodic terms of longitude, latitude and
//! distance, which is enough for rise/set and phase purposes. Rise and set have no closed
//! form here: the apparent altitude is sampled hourly over the day and each pair of hours is
//! fitted with a parabola whose roots give the horizon crossings.

#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeDelta, TimeZone, Timelike};

use crate::coords::{
    altitude, azimuth, declination, parallactic_angle, right_ascension, sidereal_time,
};
use crate::error::check_coordinates;
use crate::math::{RAD, abs, cos, sin, sqrt};
use crate::time::JulianDate;
use crate::types::{EquatorialCoordinates, HoursUtc, MoonCoordinates, MoonPosition, MoonTimes};
use crate::Result;
#[cfg(feature = "chrono")]
use crate::Error;

/// Altitude of the moon's center at rise/set, compensating for its semi-diameter and
/// parallax.
const RISE_SET_ALTITUDE: f64 = 0.133 * RAD;

/// Hourly samples from the start of the day through the start of the next.
const SAMPLE_COUNT: usize = 25;

/// Geocentric coordinates of the moon for `d` days since J2000.0.
#[must_use]
pub fn moon_coordinates(d: f64) -> MoonCoordinates {
    let l = RAD * (218.316 + 13.176_396 * d); // ecliptic longitude
    let m = RAD * (134.963 + 13.064_993 * d); // mean anomaly
    let f = RAD * (93.272 + 13.229_350 * d); // mean distance

    let lng = l + RAD * 6.289 * sin(m);
    let lat = RAD * 5.128 * sin(f);
    let distance = 385_001.0 - 20_905.0 * cos(m);

    MoonCoordinates::new(
        EquatorialCoordinates::new(declination(lng, lat), right_ascension(lng, lat)),
        distance,
    )
}

/// Calculate the moon's position for an observer.
///
/// # Arguments
/// * `datetime` - Instant of observation, in any time zone
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180)
///
/// # Errors
/// Returns error for invalid coordinates
///
/// # Example
/// ```rust
/// use suncalc::moon;
/// use chrono::{DateTime, Utc};
///
/// let datetime = "2013-03-05T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
/// let position = moon::moon_position(datetime, 50.5, 30.5).unwrap();
///
/// assert!((position.distance() - 364_121.372_562_561_94).abs() < 1e-6);
/// assert!(position.apparent_altitude() > position.altitude());
/// ```
#[cfg(feature = "chrono")]
#[allow(clippy::needless_pass_by_value)]
pub fn moon_position<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<MoonPosition> {
    moon_position_from_julian(JulianDate::from_datetime(&datetime), latitude, longitude)
}

/// Calculate the moon's position for an observer from a Julian date.
///
/// # Errors
/// Returns error for invalid coordinates
pub fn moon_position_from_julian(
    jd: JulianDate,
    latitude: f64,
    longitude: f64,
) -> Result<MoonPosition> {
    check_coordinates(latitude, longitude)?;
    Ok(position(jd, RAD * latitude, RAD * -longitude))
}

fn position(jd: JulianDate, phi: f64, lw: f64) -> MoonPosition {
    let d = jd.days_since_j2000();
    let coordinates = moon_coordinates(d);
    let dec = coordinates.declination();
    let h = sidereal_time(d, lw) - coordinates.right_ascension();

    MoonPosition::new(
        azimuth(h, phi, dec),
        altitude(h, phi, dec),
        coordinates.distance(),
        parallactic_angle(h, phi, dec),
    )
}

/// Calculate moon rise and set for the local day of `date`.
///
/// The day starts at local midnight in the time zone of `date` and spans the following 24
/// hours; results are returned in the same time zone.
///
/// # Arguments
/// * `date` - Any instant within the day of interest
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180)
///
/// # Returns
/// Rise and/or set, or whether the moon stays above or below the horizon all day
///
/// # Errors
/// Returns error for invalid coordinates, or if the day lies outside chrono's range
///
/// # Example
/// ```rust
/// use suncalc::{MoonTimes, moon};
/// use chrono::{DateTime, FixedOffset};
///
/// let date = "2013-03-05T10:00:00+02:00".parse::<DateTime<FixedOffset>>().unwrap();
/// match moon::moon_times(date, 50.5, 30.5).unwrap() {
///     MoonTimes::Crossings { rise, set } => {
///         println!("Moonrise: {rise:?}");
///         println!("Moonset: {set:?}");
///     }
///     MoonTimes::AlwaysUp => println!("Moon up all day"),
///     MoonTimes::AlwaysDown => println!("Moon down all day"),
/// }
/// ```
#[cfg(feature = "chrono")]
#[allow(clippy::needless_pass_by_value)]
pub fn moon_times<Tz: TimeZone>(
    date: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<MoonTimes<DateTime<Tz>>> {
    check_coordinates(latitude, longitude)?;

    let day_start = local_day_start(&date)?;
    let start = JulianDate::from_datetime(&day_start);
    let tz = date.timezone();

    moon_crossings(start, latitude, longitude)
        .try_map(|hours| start.add_days(hours / 24.0).to_datetime(&tz))
}

/// Local midnight of the day containing `date`, as an offset from `date` itself.
#[cfg(feature = "chrono")]
fn local_day_start<Tz: TimeZone>(date: &DateTime<Tz>) -> Result<DateTime<Tz>> {
    let time = date.time();
    let since_midnight = TimeDelta::seconds(i64::from(time.num_seconds_from_midnight()))
        + TimeDelta::nanoseconds(i64::from(time.nanosecond()));

    date.clone()
        .checked_sub_signed(since_midnight)
        .ok_or(Error::invalid_datetime("start of day is out of range"))
}

/// Calculate moon rise and set for a UTC calendar day.
///
/// Core implementation for `no_std` compatibility (no chrono dependency). The day spans 24
/// hours from midnight UTC.
///
/// # Arguments
/// * `year` - Year (e.g., 2013)
/// * `month` - Month (1-12)
/// * `day` - Day of month (1-31)
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180)
///
/// # Returns
/// `MoonTimes<HoursUtc>` with times as hours since midnight UTC
///
/// # Errors
/// Returns error for invalid coordinates or dates
///
/// # Example
/// ```rust
/// use suncalc::moon;
///
/// let result = moon::moon_times_utc(2013, 3, 4, 50.5, 30.5).unwrap();
///
/// let rise = result.rise().unwrap();
/// let set = result.set().unwrap();
/// assert!((rise.hours() - 23.908).abs() < 1e-3);
/// assert!((set.hours() - 7.800).abs() < 1e-3);
/// ```
pub fn moon_times_utc(
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    longitude: f64,
) -> Result<MoonTimes<HoursUtc>> {
    check_coordinates(latitude, longitude)?;

    let start = JulianDate::from_utc(year, month, day, 0, 0, 0.0)?;
    Ok(moon_crossings(start, latitude, longitude).map(HoursUtc::from_hours))
}

/// Scans the 24 hours after `start`; crossing times are hours since `start`.
fn moon_crossings(start: JulianDate, latitude: f64, longitude: f64) -> MoonTimes<f64> {
    let phi = RAD * latitude;
    let lw = RAD * -longitude;

    let mut samples = [0.0; SAMPLE_COUNT];
    for (hour, sample) in samples.iter_mut().enumerate() {
        let instant = start.add_days(hour as f64 / 24.0);
        *sample = position(instant, phi, lw).apparent_altitude() - RISE_SET_ALTITUDE;
    }

    scan_crossings(&samples)
}

/// Finds horizon crossings in hourly altitude samples, already offset by the rise/set altitude.
///
/// A parabola is fitted through every other triple of samples. Windows without curvature are
/// skipped; their centre sample still decides whether a day without crossings is up or down.
fn scan_crossings(samples: &[f64; SAMPLE_COUNT]) -> MoonTimes<f64> {
    let mut rise = None;
    let mut set = None;
    let mut ye = 0.0;

    // Each window spans hours i-1..=i+1; consecutive windows share their edge sample.
    for i in (1..SAMPLE_COUNT - 1).step_by(2) {
        let (h0, h1, h2) = (samples[i - 1], samples[i], samples[i + 1]);

        let a = (h0 + h2) / 2.0 - h1;
        let b = (h2 - h0) / 2.0;
        if a == 0.0 {
            crate::trace!("flat moon altitude around hour {i}, window skipped");
            ye = h1;
            continue;
        }

        let xe = -b / (2.0 * a);
        ye = (a * xe + b) * xe + h1;
        let discriminant = b * b - 4.0 * a * h1;

        let mut roots = 0;
        let mut x1 = 0.0;
        let mut x2 = 0.0;
        if discriminant >= 0.0 {
            let dx = sqrt(discriminant) / (abs(a) * 2.0);
            x1 = xe - dx;
            x2 = xe + dx;
            if abs(x1) <= 1.0 {
                roots += 1;
            }
            if abs(x2) <= 1.0 {
                roots += 1;
            }
            if x1 < -1.0 {
                x1 = x2;
            }
        }

        let hour = i as f64;
        match roots {
            1 if h0 < 0.0 => rise = Some(hour + x1),
            1 => set = Some(hour + x1),
            2 if ye < 0.0 => {
                rise = Some(hour + x2);
                set = Some(hour + x1);
            }
            2 => {
                rise = Some(hour + x1);
                set = Some(hour + x2);
            }
            _ => {}
        }

        if rise.is_some() && set.is_some() {
            break;
        }
    }

    if rise.is_none() && set.is_none() {
        return if ye > 0.0 {
            crate::trace!("moon stays above the horizon");
            MoonTimes::AlwaysUp
        } else {
            crate::trace!("moon stays below the horizon");
            MoonTimes::AlwaysDown
        };
    }

    MoonTimes::Crossings { rise, set }
}
