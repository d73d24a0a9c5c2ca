//! Sun position and sunlight phases.
//!
//! Low-precision solar model (about 1 arcminute) with closed-form event times: solar transit
//! is approximated from the day count, and each altitude threshold is reached at the hour
//! angle solving the altitude equation for the sun's declination at transit.

#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone};

use crate::coords::{altitude, azimuth, declination, right_ascension, sidereal_time};
use crate::error::{check_coordinates, check_height};
use crate::math::{PI, RAD, TAU, acos, cos, round, sin, sqrt};
use crate::time::{J2000, JulianDate};
use crate::types::{EquatorialCoordinates, HorizontalCoordinates, SunEventTimes, SunTimes};
use crate::Result;

/// Julian day offset of mean solar transit at Greenwich.
const J0: f64 = 0.0009;

/// Ecliptic longitude of the Earth's perihelion.
const PERIHELION: f64 = RAD * 102.9372;

/// Mean anomaly of the sun for `d` days since J2000.0, in radians.
#[must_use]
pub fn solar_mean_anomaly(d: f64) -> f64 {
    RAD * (357.5291 + 0.985_600_28 * d)
}

/// Ecliptic longitude of the sun for mean anomaly `m`, in radians.
#[must_use]
pub fn ecliptic_longitude(m: f64) -> f64 {
    // equation of center
    let c = RAD * (1.9148 * sin(m) + 0.02 * sin(2.0 * m) + 0.0003 * sin(3.0 * m));
    m + c + PERIHELION + PI
}

/// Geocentric equatorial coordinates of the sun for `d` days since J2000.0.
///
/// The sun's ecliptic latitude is taken as zero.
#[must_use]
pub fn sun_coordinates(d: f64) -> EquatorialCoordinates {
    let l = ecliptic_longitude(solar_mean_anomaly(d));
    EquatorialCoordinates::new(declination(l, 0.0), right_ascension(l, 0.0))
}

/// Calculate the sun's position for an observer.
///
/// The altitude is geometric; no refraction is applied.
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
/// use suncalc::sun;
/// use chrono::{DateTime, FixedOffset};
///
/// let datetime = "2013-03-05T00:00:00Z".parse::<DateTime<FixedOffset>>().unwrap();
/// let position = sun::sun_position(datetime, 50.5, 30.5).unwrap();
///
/// assert!((position.azimuth() - -2.5003175907168385).abs() < 1e-10);
/// assert!((position.altitude() - -0.7000406838781611).abs() < 1e-10);
/// ```
#[cfg(feature = "chrono")]
#[allow(clippy::needless_pass_by_value)]
pub fn sun_position<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<HorizontalCoordinates> {
    sun_position_from_julian(JulianDate::from_datetime(&datetime), latitude, longitude)
}

/// Calculate the sun's position for an observer from a Julian date.
///
/// # Errors
/// Returns error for invalid coordinates
///
/// # Example
/// ```rust
/// use suncalc::{sun, time::JulianDate};
///
/// let jd = JulianDate::from_utc(2013, 3, 5, 0, 0, 0.0).unwrap();
/// let position = sun::sun_position_from_julian(jd, 50.5, 30.5).unwrap();
/// assert!(!position.is_above_horizon());
/// ```
pub fn sun_position_from_julian(
    jd: JulianDate,
    latitude: f64,
    longitude: f64,
) -> Result<HorizontalCoordinates> {
    check_coordinates(latitude, longitude)?;

    let lw = RAD * -longitude;
    let phi = RAD * latitude;
    let d = jd.days_since_j2000();

    let coordinates = sun_coordinates(d);
    let h = sidereal_time(d, lw) - coordinates.right_ascension();

    Ok(HorizontalCoordinates::new(
        azimuth(h, phi, coordinates.declination()),
        altitude(h, phi, coordinates.declination()),
    ))
}

/// Calculate sunlight phases for the day of `datetime`.
///
/// Results are returned in the time zone of `datetime`. Solar noon is the transit closest
/// to the given instant, so pass a time near local noon to get the events of that local
/// day; UTC midnight at western longitudes resolves to the previous day's transit.
///
/// # Arguments
/// * `datetime` - Instant within the day of interest
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180)
/// * `height` - Observer height above the horizon in meters (0 for none)
/// * `times` - Altitude thresholds to solve for
///
/// # Returns
/// Solar noon, nadir and every threshold crossing that happens on that day
///
/// # Errors
/// Returns error for invalid coordinates or height, or if a result lies outside chrono's
/// range
///
/// # Example
/// ```rust
/// use suncalc::{SunTimes, sun};
/// use chrono::{DateTime, Utc};
///
/// let date = "2020-12-22T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
/// let times = sun::sun_times(date, 51.5, -0.1, 0.0, &SunTimes::standard()).unwrap();
///
/// let sunrise = times.sunrise().unwrap();
/// let sunset = times.sunset().unwrap();
/// println!("Sunrise: {sunrise}, sunset: {sunset}");
/// println!("Solar noon: {}", times.solar_noon());
/// ```
#[cfg(feature = "chrono")]
#[allow(clippy::needless_pass_by_value)]
pub fn sun_times<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
    height: f64,
    times: &SunTimes,
) -> Result<SunEventTimes<DateTime<Tz>>> {
    let tz = datetime.timezone();
    sun_times_from_julian(
        JulianDate::from_datetime(&datetime),
        latitude,
        longitude,
        height,
        times,
    )?
    .try_map(|jd| jd.to_datetime(&tz))
}

/// Calculate sunlight phases from a Julian date.
///
/// Core implementation for `no_std` compatibility (no chrono dependency).
///
/// # Errors
/// Returns error for invalid coordinates or height
///
/// # Example
/// ```rust
/// use suncalc::{SunTimes, sun, time::JulianDate};
///
/// let jd = JulianDate::from_utc(2013, 3, 5, 0, 0, 0.0).unwrap();
/// let times = sun::sun_times_from_julian(jd, 50.5, 30.5, 0.0, &SunTimes::standard()).unwrap();
///
/// let noon = times.solar_noon().to_utc().unwrap();
/// assert_eq!((noon.hour(), noon.minute()), (10, 10));
/// assert_eq!(times.len(), 14);
/// ```
pub fn sun_times_from_julian(
    jd: JulianDate,
    latitude: f64,
    longitude: f64,
    height: f64,
    times: &SunTimes,
) -> Result<SunEventTimes<JulianDate>> {
    check_coordinates(latitude, longitude)?;
    check_height(height)?;

    let lw = RAD * -longitude;
    let phi = RAD * latitude;
    let dh = observer_angle(height);

    let d = jd.days_since_j2000();
    let n = julian_cycle(d, lw);
    let ds = approx_transit(0.0, lw, n);

    let m = solar_mean_anomaly(ds);
    let l = ecliptic_longitude(m);
    let dec = declination(l, 0.0);

    let j_noon = solar_transit_j(ds, m, l);
    let mut result = SunEventTimes::new(
        JulianDate::from_julian_date_unchecked(j_noon),
        JulianDate::from_julian_date_unchecked(j_noon - 0.5),
    );

    for time in times {
        let h0 = (time.angle() + dh) * RAD;
        let Some(w) = hour_angle(h0, phi, dec) else {
            crate::debug!(
                "sun does not reach {}° on this day ({}/{} omitted)",
                time.angle(),
                time.rise_label(),
                time.set_label()
            );
            continue;
        };

        let j_set = solar_transit_j(approx_transit(w, lw, n), m, l);
        let j_rise = j_noon - (j_set - j_noon);

        result.push(
            time.rise_label.clone(),
            JulianDate::from_julian_date_unchecked(j_rise),
        );
        result.push(
            time.set_label.clone(),
            JulianDate::from_julian_date_unchecked(j_set),
        );
    }

    Ok(result)
}

fn julian_cycle(d: f64, lw: f64) -> f64 {
    round(d - J0 - lw / TAU)
}

fn approx_transit(ht: f64, lw: f64, n: f64) -> f64 {
    J0 + (ht + lw) / TAU + n
}

fn solar_transit_j(ds: f64, m: f64, l: f64) -> f64 {
    J2000 + ds + 0.0053 * sin(m) - 0.0069 * sin(2.0 * l)
}

/// Hour angle at which the sun reaches altitude `h`, or `None` if it never does that day.
fn hour_angle(h: f64, phi: f64, dec: f64) -> Option<f64> {
    let x = (sin(h) - sin(phi) * sin(dec)) / (cos(phi) * cos(dec));
    (-1.0..=1.0).contains(&x).then(|| acos(x))
}

/// Dip of the horizon in degrees for an observer `height` meters up.
fn observer_angle(height: f64) -> f64 {
    -2.076 * sqrt(height) / 60.0
}
