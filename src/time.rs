//! Julian date conversions.
//!
//! All calculations run on a continuous Julian Day Number. This module converts civil
//! date/time values in the proleptic Gregorian calendar to and from that count. There is no
//! Julian/Gregorian cutover: 1582-10-10 is a valid date like any other.

#![allow(clippy::many_single_char_names)]

use crate::math::round;
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone, Utc};

/// Julian Day Number for the J2000.0 epoch (2000-01-01 12:00:00 UTC).
pub const J2000: f64 = 2_451_545.0;

/// Julian Day Number of the Unix epoch (1970-01-01 00:00:00 UTC).
#[cfg(feature = "chrono")]
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Seconds per day (86,400)
#[cfg(feature = "chrono")]
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Milliseconds per day, the resolution of conversions back to civil time.
const MILLIS_PER_DAY: i64 = 86_400_000;

/// Largest millisecond count accepted when converting back to civil time (~±285,000 years).
const MAX_MILLIS: f64 = 9.0e15;

/// A point in time as a continuous Julian Day Number (UTC based).
///
/// The fractional part encodes the time of day; `.0` is noon and `.5` is midnight.
///
/// # Example
/// ```
/// # use suncalc::time::{JulianDate, J2000};
/// let jd = JulianDate::from_utc(2000, 1, 1, 12, 0, 0.0).unwrap();
/// assert_eq!(jd.julian_date(), J2000);
/// assert_eq!(jd.days_since_j2000(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct JulianDate {
    jd: f64,
}

impl JulianDate {
    /// Creates a Julian date from year, month, day, hour, minute, and second in UTC.
    ///
    /// # Arguments
    /// * `year` - Proleptic Gregorian year (can be zero or negative)
    /// * `month` - Month (1-12)
    /// * `day` - Day of month (1-31)
    /// * `hour` - Hour (0-23)
    /// * `minute` - Minute (0-59)
    /// * `second` - Second (0-59, can include fractional seconds)
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if any component is outside its valid range or the day does
    /// not exist in the given month.
    ///
    /// # Example
    /// ```
    /// # use suncalc::time::JulianDate;
    /// let jd = JulianDate::from_utc(1970, 1, 1, 0, 0, 0.0).unwrap();
    /// assert_eq!(jd.julian_date(), 2_440_587.5);
    ///
    /// assert!(JulianDate::from_utc(2023, 2, 29, 0, 0, 0.0).is_err());
    /// ```
    pub fn from_utc(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_datetime("month must be between 1 and 12"));
        }
        if day < 1 || day > days_in_month(year, month) {
            return Err(Error::invalid_datetime("day is out of range for month"));
        }
        if hour > 23 {
            return Err(Error::invalid_datetime("hour must be between 0 and 23"));
        }
        if minute > 59 {
            return Err(Error::invalid_datetime("minute must be between 0 and 59"));
        }
        if !(0.0..60.0).contains(&second) {
            return Err(Error::invalid_datetime(
                "second must be between 0 and 59.999...",
            ));
        }

        let day_fraction =
            (f64::from(hour) + (f64::from(minute) + second / 60.0) / 60.0) / 24.0;
        let jd = julian_day_number(year, month, day) as f64 - 0.5 + day_fraction;
        Ok(Self { jd })
    }

    /// Wraps a raw Julian Day Number.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if the value is not finite.
    pub fn from_julian_date(jd: f64) -> Result<Self> {
        if !jd.is_finite() {
            return Err(Error::invalid_datetime("julian date must be finite"));
        }
        Ok(Self { jd })
    }

    /// Creates a Julian date from days since J2000.0.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if the value is not finite.
    pub fn from_days(days: f64) -> Result<Self> {
        Self::from_julian_date(days + J2000)
    }

    /// Wraps a Julian Day Number derived from an already valid date.
    pub(crate) const fn from_julian_date_unchecked(jd: f64) -> Self {
        Self { jd }
    }

    /// Gets the Julian Day Number.
    #[must_use]
    pub const fn julian_date(&self) -> f64 {
        self.jd
    }

    /// Gets the (fractional) number of days since J2000.0, the time argument of every
    /// position model in this crate.
    #[must_use]
    pub fn days_since_j2000(&self) -> f64 {
        self.jd - J2000
    }

    /// Returns this date shifted by a (fractional) number of days.
    #[must_use]
    pub fn add_days(self, days: f64) -> Self {
        Self { jd: self.jd + days }
    }

    /// Converts back to civil UTC date/time components.
    ///
    /// The result is rounded to the nearest millisecond.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if the date is too far from the present to be represented.
    ///
    /// # Example
    /// ```
    /// # use suncalc::time::JulianDate;
    /// let jd = JulianDate::from_utc(2020, 12, 22, 8, 5, 36.0).unwrap();
    /// let civil = jd.to_utc().unwrap();
    /// assert_eq!((civil.year(), civil.month(), civil.day()), (2020, 12, 22));
    /// assert_eq!((civil.hour(), civil.minute()), (8, 5));
    /// assert!((civil.second() - 36.0).abs() < 1e-3);
    /// ```
    pub fn to_utc(&self) -> Result<CivilDateTime> {
        // Milliseconds since the midnight that starts Julian day 0.
        let total_millis = round((self.jd + 0.5) * MILLIS_PER_DAY as f64);
        if !total_millis.is_finite() || total_millis.abs() > MAX_MILLIS {
            return Err(Error::invalid_datetime(
                "julian date is outside the representable range",
            ));
        }
        let total_millis = total_millis as i64;

        let jdn = total_millis.div_euclid(MILLIS_PER_DAY);
        let millis_of_day = total_millis.rem_euclid(MILLIS_PER_DAY);
        let (year, month, day) = civil_from_day_number(jdn)?;

        let hour = millis_of_day / 3_600_000;
        let minute = (millis_of_day / 60_000) % 60;
        let second = (millis_of_day % 60_000) as f64 / 1000.0;

        Ok(CivilDateTime {
            year,
            month,
            day,
            hour: hour as u32,
            minute: minute as u32,
            second,
        })
    }

    /// Creates a Julian date from a timezone-aware chrono `DateTime`.
    ///
    /// The offset is taken into account, so equal instants in different zones give equal
    /// Julian dates.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        let seconds = datetime.timestamp() as f64
            + f64::from(datetime.timestamp_subsec_nanos()) / 1e9;
        Self {
            jd: UNIX_EPOCH_JD + seconds / SECONDS_PER_DAY,
        }
    }

    /// Converts to a chrono `DateTime` in the given time zone, rounded to the millisecond.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if the instant is outside chrono's supported range.
    #[cfg(feature = "chrono")]
    pub fn to_datetime<Tz: TimeZone>(&self, tz: &Tz) -> Result<DateTime<Tz>> {
        let millis = round((self.jd - UNIX_EPOCH_JD) * MILLIS_PER_DAY as f64);
        if !millis.is_finite() || millis.abs() > MAX_MILLIS {
            return Err(Error::invalid_datetime(
                "julian date is outside the representable range",
            ));
        }
        let utc = DateTime::<Utc>::from_timestamp_millis(millis as i64).ok_or(
            Error::invalid_datetime("julian date is outside the representable range"),
        )?;
        Ok(utc.with_timezone(tz))
    }
}

/// Civil UTC date and time components of a [`JulianDate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CivilDateTime {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
}

impl CivilDateTime {
    /// Gets the proleptic Gregorian year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Gets the month (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Gets the day of month (1-31).
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Gets the hour (0-23).
    #[must_use]
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    /// Gets the minute (0-59).
    #[must_use]
    pub const fn minute(&self) -> u32 {
        self.minute
    }

    /// Gets the second including milliseconds (0 to < 60).
    #[must_use]
    pub const fn second(&self) -> f64 {
        self.second
    }
}

/// Julian Day Number of the civil date (the day starting at the preceding midnight is
/// `JDN - 0.5`). Proleptic Gregorian, valid for any `i32` year.
fn julian_day_number(year: i32, month: u32, day: u32) -> i64 {
    let a = (14 - i64::from(month)) / 12;
    let y = i64::from(year) + 4800 - a;
    let m = i64::from(month) + 12 * a - 3;

    i64::from(day) + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32_045
}

/// Inverse of [`julian_day_number`].
fn civil_from_day_number(jdn: i64) -> Result<(i32, u32, u32)> {
    let f = jdn + 1401 + ((4 * jdn + 274_277).div_euclid(146_097) * 3).div_euclid(4) - 38;
    let e = 4 * f + 3;
    let g = e.rem_euclid(1461).div_euclid(4);
    let h = 5 * g + 2;

    let day = h.rem_euclid(153).div_euclid(5) + 1;
    let month = (h.div_euclid(153) + 2).rem_euclid(12) + 1;
    let year = e.div_euclid(1461) - 4716 + (14 - month).div_euclid(12);

    let year = i32::try_from(year)
        .map_err(|_| Error::invalid_datetime("year is outside the representable range"))?;
    Ok((year, month as u32, day as u32))
}

const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}
