//! Coordinate transformations shared by the sun and moon models.
//!
//! Ecliptic → equatorial with a constant obliquity, equatorial → horizontal for an observer,
//! sidereal time and the refraction approximation. All angles are in radians.

use crate::math::{RAD, asin, atan2, cos, sin, tan};

/// Obliquity of the ecliptic (constant, radians).
pub const OBLIQUITY: f64 = RAD * 23.4397;

const SIDEREAL_AT_J2000: f64 = 280.16;
const SIDEREAL_RATE: f64 = 360.985_623_5;

/// Right ascension of a point given in ecliptic longitude `l` and latitude `b`.
#[must_use]
pub fn right_ascension(l: f64, b: f64) -> f64 {
    atan2(
        sin(l) * cos(OBLIQUITY) - tan(b) * sin(OBLIQUITY),
        cos(l),
    )
}

/// Declination of a point given in ecliptic longitude `l` and latitude `b`.
#[must_use]
pub fn declination(l: f64, b: f64) -> f64 {
    asin(sin(b) * cos(OBLIQUITY) + cos(b) * sin(OBLIQUITY) * sin(l))
}

/// Azimuth (from south, positive west) for hour angle `h`, latitude `phi` and declination
/// `dec`.
#[must_use]
pub fn azimuth(h: f64, phi: f64, dec: f64) -> f64 {
    atan2(sin(h), cos(h) * sin(phi) - tan(dec) * cos(phi))
}

/// Altitude above the horizon for hour angle `h`, latitude `phi` and declination `dec`.
#[must_use]
pub fn altitude(h: f64, phi: f64, dec: f64) -> f64 {
    asin(sin(phi) * sin(dec) + cos(phi) * cos(dec) * cos(h))
}

/// Local sidereal time for `d` days since J2000.0 and west longitude `lw` (radians).
///
/// Not reduced to a single turn; callers only take sines and cosines of derived angles.
#[must_use]
pub fn sidereal_time(d: f64, lw: f64) -> f64 {
    RAD * (SIDEREAL_AT_J2000 + SIDEREAL_RATE * d) - lw
}

/// Atmospheric refraction for a geometric altitude `h`, in radians.
///
/// Uses formula 16.4 of Meeus, Astronomical Algorithms (1998), with pressure 1013.25 mbar and
/// 10 °C. Altitudes below the horizon are clamped to it, keeping the formula well-behaved.
#[must_use]
pub fn astro_refraction(h: f64) -> f64 {
    let h = if h < 0.0 { 0.0 } else { h };
    0.000_296_7 / tan(h + 0.003_125_36 / (h + 0.089_011_79))
}

/// Parallactic angle for hour angle `h`, latitude `phi` and declination `dec`.
#[must_use]
pub fn parallactic_angle(h: f64, phi: f64, dec: f64) -> f64 {
    atan2(sin(h), tan(phi) * cos(dec) - sin(dec) * cos(h))
}
