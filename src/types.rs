//! Core data types for sun and moon calculations.
//!
//! Angles are in radians unless an accessor says otherwise. Azimuths follow the astronomical
//! convention of the position models: measured from south, positive towards west.

use alloc::borrow::Cow;
use alloc::vec::Vec;

use crate::coords::astro_refraction;
use crate::error::check_threshold_angle;
use crate::math::{PI, floor, normalize_radians, radians_to_degrees};
use crate::{Error, Result};

/// Label of the solar transit, always present in [`SunEventTimes`].
pub const SOLAR_NOON: &str = "solarNoon";
/// Label of the instant half a day from solar transit, always present in [`SunEventTimes`].
pub const NADIR: &str = "nadir";
/// Rise label of the standard sunrise/sunset threshold.
pub const SUNRISE: &str = "sunrise";
/// Set label of the standard sunrise/sunset threshold.
pub const SUNSET: &str = "sunset";

/// Geocentric equatorial coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialCoordinates {
    declination: f64,
    right_ascension: f64,
}

impl EquatorialCoordinates {
    /// Creates equatorial coordinates from declination and right ascension in radians.
    #[must_use]
    pub const fn new(declination: f64, right_ascension: f64) -> Self {
        Self {
            declination,
            right_ascension,
        }
    }

    /// Gets the declination in radians.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }

    /// Gets the right ascension in radians (-π to π).
    #[must_use]
    pub const fn right_ascension(&self) -> f64 {
        self.right_ascension
    }
}

/// Moon coordinates: equatorial position plus distance from the Earth's center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonCoordinates {
    equatorial: EquatorialCoordinates,
    distance: f64,
}

impl MoonCoordinates {
    /// Creates moon coordinates from an equatorial position and a distance in kilometers.
    #[must_use]
    pub const fn new(equatorial: EquatorialCoordinates, distance: f64) -> Self {
        Self {
            equatorial,
            distance,
        }
    }

    /// Gets the equatorial coordinates.
    #[must_use]
    pub const fn equatorial(&self) -> EquatorialCoordinates {
        self.equatorial
    }

    /// Gets the declination in radians.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.equatorial.declination
    }

    /// Gets the right ascension in radians.
    #[must_use]
    pub const fn right_ascension(&self) -> f64 {
        self.equatorial.right_ascension
    }

    /// Gets the distance between the centers of Earth and Moon in kilometers.
    #[must_use]
    pub const fn distance(&self) -> f64 {
        self.distance
    }
}

/// Position in the observer's sky.
///
/// - Azimuth: 0 = south, π/2 = west, -π/2 = east (radians)
/// - Altitude: 0 = horizon, π/2 = zenith (radians)
///
/// # Example
/// ```
/// # use suncalc::types::HorizontalCoordinates;
/// let position = HorizontalCoordinates::new(0.0, 0.5);
/// assert!((position.compass_azimuth_degrees() - 180.0).abs() < 1e-10);
/// assert!(position.is_above_horizon());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalCoordinates {
    azimuth: f64,
    altitude: f64,
}

impl HorizontalCoordinates {
    /// Creates horizontal coordinates from azimuth (from south) and altitude in radians.
    #[must_use]
    pub const fn new(azimuth: f64, altitude: f64) -> Self {
        Self { azimuth, altitude }
    }

    /// Gets the azimuth in radians, measured from south towards west.
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Gets the altitude above the horizon in radians.
    #[must_use]
    pub const fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Gets the altitude above the horizon in degrees.
    #[must_use]
    pub const fn altitude_degrees(&self) -> f64 {
        radians_to_degrees(self.altitude)
    }

    /// Gets the azimuth in compass degrees (0° = north, increasing clockwise, 0° to 360°).
    #[must_use]
    pub fn compass_azimuth_degrees(&self) -> f64 {
        radians_to_degrees(normalize_radians(self.azimuth + PI))
    }

    /// Checks if the body is above the horizon (altitude > 0).
    #[must_use]
    pub fn is_above_horizon(&self) -> bool {
        self.altitude > 0.0
    }
}

/// Moon position as seen by an observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonPosition {
    azimuth: f64,
    altitude: f64,
    distance: f64,
    parallactic_angle: f64,
}

impl MoonPosition {
    /// Creates a moon position. Angles in radians, distance in kilometers.
    #[must_use]
    pub const fn new(azimuth: f64, altitude: f64, distance: f64, parallactic_angle: f64) -> Self {
        Self {
            azimuth,
            altitude,
            distance,
            parallactic_angle,
        }
    }

    /// Gets the azimuth in radians, measured from south towards west.
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Gets the geometric altitude in radians (no refraction).
    #[must_use]
    pub const fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Gets the apparent altitude in radians: geometric altitude lifted by atmospheric
    /// refraction.
    #[must_use]
    pub fn apparent_altitude(&self) -> f64 {
        self.altitude + astro_refraction(self.altitude)
    }

    /// Gets the distance to the moon in kilometers.
    #[must_use]
    pub const fn distance(&self) -> f64 {
        self.distance
    }

    /// Gets the parallactic angle in radians.
    #[must_use]
    pub const fn parallactic_angle(&self) -> f64 {
        self.parallactic_angle
    }

    /// Gets the position as plain horizontal coordinates (geometric altitude).
    #[must_use]
    pub const fn horizontal(&self) -> HorizontalCoordinates {
        HorizontalCoordinates::new(self.azimuth, self.altitude)
    }
}

/// Illuminated state of the moon.
///
/// - Fraction: 0.0 = new moon, 1.0 = full moon
/// - Phase: 0.0 = new moon, 0.25 = first quarter, 0.5 = full moon, 0.75 = last quarter
/// - Angle: midpoint angle of the illuminated limb, in radians, measured eastward from the
///   north point of the disk
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonIllumination {
    fraction: f64,
    phase: f64,
    angle: f64,
}

impl MoonIllumination {
    /// Creates a moon illumination value.
    #[must_use]
    pub const fn new(fraction: f64, phase: f64, angle: f64) -> Self {
        Self {
            fraction,
            phase,
            angle,
        }
    }

    /// Gets the illuminated fraction of the disk (0.0 to 1.0).
    #[must_use]
    pub const fn fraction(&self) -> f64 {
        self.fraction
    }

    /// Gets the phase (0.0 to < 1.0).
    #[must_use]
    pub const fn phase(&self) -> f64 {
        self.phase
    }

    /// Gets the bright limb angle in radians.
    #[must_use]
    pub const fn angle(&self) -> f64 {
        self.angle
    }

    /// Checks if the illuminated fraction is growing (phase before full moon).
    #[must_use]
    pub fn is_waxing(&self) -> bool {
        self.phase < 0.5
    }
}

/// One sun altitude threshold together with the labels of its morning and evening crossing.
#[derive(Debug, Clone, PartialEq)]
pub struct SunTime {
    angle: f64,
    pub(crate) rise_label: Cow<'static, str>,
    pub(crate) set_label: Cow<'static, str>,
}

impl SunTime {
    const fn predefined(angle: f64, rise_label: &'static str, set_label: &'static str) -> Self {
        Self {
            angle,
            rise_label: Cow::Borrowed(rise_label),
            set_label: Cow::Borrowed(set_label),
        }
    }

    /// Gets the sun altitude threshold in degrees.
    #[must_use]
    pub const fn angle(&self) -> f64 {
        self.angle
    }

    /// Gets the label of the morning crossing.
    #[must_use]
    pub fn rise_label(&self) -> &str {
        &self.rise_label
    }

    /// Gets the label of the evening crossing.
    #[must_use]
    pub fn set_label(&self) -> &str {
        &self.set_label
    }
}

/// Predefined thresholds, in the order they are reported.
const STANDARD_SUN_TIMES: [SunTime; 6] = [
    SunTime::predefined(-0.833, SUNRISE, SUNSET),
    SunTime::predefined(-0.3, "sunriseEnd", "sunsetStart"),
    SunTime::predefined(-6.0, "dawn", "dusk"),
    SunTime::predefined(-12.0, "nauticalDawn", "nauticalDusk"),
    SunTime::predefined(-18.0, "nightEnd", "night"),
    SunTime::predefined(6.0, "goldenHourEnd", "goldenHour"),
];

/// Immutable set of sun altitude thresholds for [`sun_times`](crate::sun::sun_times).
///
/// Built once before calculating and shared read-only afterwards. Adding a threshold
/// produces a new set.
///
/// # Example
/// ```
/// # use suncalc::SunTimes;
/// let times = SunTimes::standard()
///     .with(-3.0, "blueHourEnd", "blueHour")
///     .unwrap();
/// assert_eq!(times.len(), 7);
///
/// // Labels must be unique
/// assert!(times.clone().with(-4.0, "blueHourEnd", "other").is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SunTimes {
    times: Vec<SunTime>,
}

impl SunTimes {
    /// The six standard thresholds: sunrise/sunset (-0.833°), sunriseEnd/sunsetStart
    /// (-0.3°), dawn/dusk (-6°), nauticalDawn/nauticalDusk (-12°), nightEnd/night (-18°) and
    /// goldenHourEnd/goldenHour (6°).
    #[must_use]
    pub fn standard() -> Self {
        Self {
            times: STANDARD_SUN_TIMES.to_vec(),
        }
    }

    /// A set without any thresholds; only solar noon and nadir will be reported.
    #[must_use]
    pub const fn empty() -> Self {
        Self { times: Vec::new() }
    }

    /// Returns a new set with an additional threshold.
    ///
    /// # Arguments
    /// * `angle` - Sun altitude in degrees (-90 to +90)
    /// * `rise_label` - Label for the morning crossing
    /// * `set_label` - Label for the evening crossing
    ///
    /// # Errors
    /// Returns `InvalidAngle` for an out-of-range angle and `DuplicateLabel` if a label is
    /// already used, including the fixed `solarNoon` and `nadir` labels.
    pub fn with(
        mut self,
        angle: f64,
        rise_label: impl Into<Cow<'static, str>>,
        set_label: impl Into<Cow<'static, str>>,
    ) -> Result<Self> {
        check_threshold_angle(angle)?;
        let rise_label = rise_label.into();
        let set_label = set_label.into();

        if self.contains_label(&rise_label) {
            return Err(Error::duplicate_label(&rise_label));
        }
        if rise_label == set_label || self.contains_label(&set_label) {
            return Err(Error::duplicate_label(&set_label));
        }

        self.times.push(SunTime {
            angle,
            rise_label,
            set_label,
        });
        Ok(self)
    }

    /// Iterates over the thresholds in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, SunTime> {
        self.times.iter()
    }

    /// Gets the number of thresholds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Checks if the set has no thresholds.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    fn contains_label(&self, label: &str) -> bool {
        label == SOLAR_NOON
            || label == NADIR
            || self
                .times
                .iter()
                .any(|time| time.rise_label == label || time.set_label == label)
    }
}

impl Default for SunTimes {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> IntoIterator for &'a SunTimes {
    type Item = &'a SunTime;
    type IntoIter = core::slice::Iter<'a, SunTime>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Sun event times for one day: solar noon, nadir and every threshold crossing that
/// happens.
///
/// A threshold the sun does not reach that day (polar day or night, or e.g. golden hour in
/// winter at high latitude) has no entries; both its labels are absent.
#[derive(Debug, Clone, PartialEq)]
pub struct SunEventTimes<T> {
    solar_noon: T,
    nadir: T,
    events: Vec<(Cow<'static, str>, T)>,
}

impl<T> SunEventTimes<T> {
    pub(crate) const fn new(solar_noon: T, nadir: T) -> Self {
        Self {
            solar_noon,
            nadir,
            events: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, label: Cow<'static, str>, time: T) {
        self.events.push((label, time));
    }

    /// Gets the time of solar transit.
    pub const fn solar_noon(&self) -> &T {
        &self.solar_noon
    }

    /// Gets the time of nadir (half a day before solar noon).
    pub const fn nadir(&self) -> &T {
        &self.nadir
    }

    /// Looks up an event by label; `solarNoon` and `nadir` are always found.
    pub fn get(&self, label: &str) -> Option<&T> {
        match label {
            SOLAR_NOON => Some(&self.solar_noon),
            NADIR => Some(&self.nadir),
            _ => self
                .events
                .iter()
                .find(|(event, _)| event == label)
                .map(|(_, time)| time),
        }
    }

    /// Gets the standard sunrise, if the sun rises that day.
    pub fn sunrise(&self) -> Option<&T> {
        self.get(SUNRISE)
    }

    /// Gets the standard sunset, if the sun sets that day.
    pub fn sunset(&self) -> Option<&T> {
        self.get(SUNSET)
    }

    /// Iterates over the threshold crossings as `(label, time)`, excluding solar noon and
    /// nadir.
    pub fn events(&self) -> impl Iterator<Item = (&str, &T)> {
        self.events.iter().map(|(label, time)| (label.as_ref(), time))
    }

    /// Iterates over every entry as `(label, time)`, starting with solar noon and nadir.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        [(SOLAR_NOON, &self.solar_noon), (NADIR, &self.nadir)]
            .into_iter()
            .chain(self.events())
    }

    /// Gets the number of entries, counting solar noon and nadir.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        2 + self.events.len()
    }

    /// Converts every time with `f`.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> SunEventTimes<U> {
        SunEventTimes {
            solar_noon: f(self.solar_noon),
            nadir: f(self.nadir),
            events: self
                .events
                .into_iter()
                .map(|(label, time)| (label, f(time)))
                .collect(),
        }
    }

    /// Converts every time with a fallible `f`, stopping at the first error.
    ///
    /// # Errors
    /// Returns the first error produced by `f`.
    pub fn try_map<U, E>(
        self,
        mut f: impl FnMut(T) -> core::result::Result<U, E>,
    ) -> core::result::Result<SunEventTimes<U>, E> {
        let solar_noon = f(self.solar_noon)?;
        let nadir = f(self.nadir)?;
        let mut events = Vec::with_capacity(self.events.len());
        for (label, time) in self.events {
            events.push((label, f(time)?));
        }
        Ok(SunEventTimes {
            solar_noon,
            nadir,
            events,
        })
    }
}

/// Moon rise and set for one day.
///
/// Either at least one horizon crossing happens within the day, or the moon stays on one
/// side of the horizon for the whole day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoonTimes<T> {
    /// The moon crosses the horizon at least once; a missing time means that crossing does
    /// not happen within the day.
    Crossings {
        /// Time of moonrise
        rise: Option<T>,
        /// Time of moonset
        set: Option<T>,
    },
    /// The moon stays above the horizon all day.
    AlwaysUp,
    /// The moon stays below the horizon all day.
    AlwaysDown,
}

impl<T> MoonTimes<T> {
    /// Gets the moonrise time, if the moon rises that day.
    pub const fn rise(&self) -> Option<&T> {
        match self {
            Self::Crossings { rise, .. } => rise.as_ref(),
            _ => None,
        }
    }

    /// Gets the moonset time, if the moon sets that day.
    pub const fn set(&self) -> Option<&T> {
        match self {
            Self::Crossings { set, .. } => set.as_ref(),
            _ => None,
        }
    }

    /// Checks if the moon stays above the horizon all day.
    pub const fn is_always_up(&self) -> bool {
        matches!(self, Self::AlwaysUp)
    }

    /// Checks if the moon stays below the horizon all day.
    pub const fn is_always_down(&self) -> bool {
        matches!(self, Self::AlwaysDown)
    }

    /// Converts the rise and set times with `f`.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> MoonTimes<U> {
        match self {
            Self::Crossings { rise, set } => MoonTimes::Crossings {
                rise: rise.map(&mut f),
                set: set.map(&mut f),
            },
            Self::AlwaysUp => MoonTimes::AlwaysUp,
            Self::AlwaysDown => MoonTimes::AlwaysDown,
        }
    }

    /// Converts the rise and set times with a fallible `f`.
    ///
    /// # Errors
    /// Returns the first error produced by `f`.
    pub fn try_map<U, E>(
        self,
        mut f: impl FnMut(T) -> core::result::Result<U, E>,
    ) -> core::result::Result<MoonTimes<U>, E> {
        Ok(match self {
            Self::Crossings { rise, set } => MoonTimes::Crossings {
                rise: rise.map(&mut f).transpose()?,
                set: set.map(&mut f).transpose()?,
            },
            Self::AlwaysUp => MoonTimes::AlwaysUp,
            Self::AlwaysDown => MoonTimes::AlwaysDown,
        })
    }
}

/// Hours since midnight UTC that can extend beyond a single day.
///
/// Used for moon rise/set times without the chrono dependency.
/// Values represent hours since midnight UTC (0 UT) for the calculation date:
/// - 0.0 to < 24.0 indicates the current day
/// - ≥ 24.0 indicates the next day
/// - Negative values indicate the previous day
///
/// # Example
/// ```
/// # use suncalc::types::HoursUtc;
/// let time = HoursUtc::from_hours(23.908);
/// let (day_offset, hours) = time.day_and_hours();
/// assert_eq!(day_offset, 0);
/// assert!((hours - 23.908).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoursUtc(f64);

impl HoursUtc {
    /// Creates a new `HoursUtc` from hours since midnight UTC.
    #[must_use]
    pub const fn from_hours(hours: f64) -> Self {
        Self(hours)
    }

    /// Gets the raw hours value.
    #[must_use]
    pub const fn hours(&self) -> f64 {
        self.0
    }

    /// Gets the day offset and normalized hours (0.0 to < 24.0).
    ///
    /// # Example
    /// ```
    /// # use suncalc::types::HoursUtc;
    /// let time = HoursUtc::from_hours(24.25);
    /// let (day_offset, hours) = time.day_and_hours();
    /// assert_eq!(day_offset, 1);
    /// assert!((hours - 0.25).abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn day_and_hours(&self) -> (i32, f64) {
        let hours = self.0;
        if !hours.is_finite() {
            return (0, hours);
        }

        let mut day_offset_raw = floor(hours / 24.0);
        let mut normalized_hours = hours - day_offset_raw * 24.0;

        if normalized_hours < 0.0 {
            normalized_hours += 24.0;
            day_offset_raw -= 1.0;
        } else if normalized_hours >= 24.0 {
            normalized_hours -= 24.0;
            day_offset_raw += 1.0;
        }

        let day_offset = if day_offset_raw >= f64::from(i32::MAX) {
            i32::MAX
        } else if day_offset_raw <= f64::from(i32::MIN) {
            i32::MIN
        } else {
            day_offset_raw as i32
        };

        (day_offset, normalized_hours)
    }
}
