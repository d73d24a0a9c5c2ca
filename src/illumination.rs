//! Lunar illumination.
//!
//! Based on chapter 48 of "Astronomical Algorithms" (Meeus, 1998): the phase angle follows
//! from the geocentric elongation between sun and moon, and the bright limb angle from their
//! equatorial positions.

#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone};

use crate::math::{PI, acos, atan2, cos, sin};
use crate::moon::moon_coordinates;
use crate::sun::sun_coordinates;
use crate::time::JulianDate;
use crate::types::{EquatorialCoordinates, MoonIllumination};

/// Mean distance from the Earth to the sun in kilometers.
const SUN_DISTANCE: f64 = 149_598_000.0;

/// Calculate the moon's illumination at an instant.
///
/// Illumination is the same for every observer, so no location is needed.
///
/// # Example
/// ```rust
/// use suncalc::illumination;
/// use chrono::{DateTime, Utc};
///
/// let datetime = "2013-03-05T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
/// let moon = illumination::moon_illumination(datetime);
///
/// assert!((moon.fraction() - 0.4848068202456374).abs() < 1e-10);
/// assert!((moon.phase() - 0.7548368838538762).abs() < 1e-10);
/// assert!(!moon.is_waxing());
/// ```
#[cfg(feature = "chrono")]
#[allow(clippy::needless_pass_by_value)]
#[must_use]
pub fn moon_illumination<Tz: TimeZone>(datetime: DateTime<Tz>) -> MoonIllumination {
    moon_illumination_from_julian(JulianDate::from_datetime(&datetime))
}

/// Calculate the moon's illumination from a Julian date.
#[must_use]
pub fn moon_illumination_from_julian(jd: JulianDate) -> MoonIllumination {
    let d = jd.days_since_j2000();
    let moon = moon_coordinates(d);
    illumination_from_coordinates(sun_coordinates(d), moon.equatorial(), moon.distance())
}

/// Illumination for given sun and moon positions and the Earth-moon distance in kilometers.
#[must_use]
pub fn illumination_from_coordinates(
    sun: EquatorialCoordinates,
    moon: EquatorialCoordinates,
    moon_distance: f64,
) -> MoonIllumination {
    let (sun_dec, sun_ra) = (sun.declination(), sun.right_ascension());
    let (moon_dec, moon_ra) = (moon.declination(), moon.right_ascension());

    // geocentric elongation of the moon from the sun
    let phi = acos(
        (sin(sun_dec) * sin(moon_dec) + cos(sun_dec) * cos(moon_dec) * cos(sun_ra - moon_ra))
            .clamp(-1.0, 1.0),
    );
    // selenocentric elongation of the earth from the sun
    let inc = atan2(
        SUN_DISTANCE * sin(phi),
        moon_distance - SUN_DISTANCE * cos(phi),
    );
    let angle = atan2(
        cos(sun_dec) * sin(sun_ra - moon_ra),
        sin(sun_dec) * cos(moon_dec) - cos(sun_dec) * sin(moon_dec) * cos(sun_ra - moon_ra),
    );

    let direction = if angle < 0.0 { -1.0 } else { 1.0 };
    let phase = 0.5 + 0.5 * inc * direction / PI;
    // conjunction with a zero limb angle lands on 1.0, which is the new moon at 0.0
    let phase = if phase >= 1.0 { phase - 1.0 } else { phase };

    MoonIllumination::new((1.0 + cos(inc)) / 2.0, phase, angle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> MoonIllumination {
        moon_illumination_from_julian(
            JulianDate::from_utc(year, month, day, hour, minute, 0.0).unwrap(),
        )
    }

    #[test]
    fn test_reference_illumination() {
        let moon = at(2013, 3, 5, 0, 0);
        assert!((moon.fraction() - 0.484_806_820_245_637_4).abs() < 1e-10);
        assert!((moon.phase() - 0.754_836_883_853_876_2).abs() < 1e-10);
        assert!((moon.angle() - 1.673_294_267_857_834_6).abs() < 1e-10);
    }

    #[test]
    fn test_phase_landmarks() {
        let new_moon = at(2020, 12, 14, 16, 17);
        assert!(new_moon.fraction() < 0.05);
        assert!(new_moon.phase() < 0.05 || new_moon.phase() > 0.95);

        let full_moon = at(2020, 12, 30, 3, 28);
        assert!(full_moon.fraction() > 0.95);
        assert!((full_moon.phase() - 0.5).abs() < 0.05);

        let first_quarter = at(2020, 12, 21, 23, 41);
        assert!((first_quarter.fraction() - 0.5).abs() < 0.05);
        assert!(first_quarter.is_waxing());
    }

    #[test]
    fn test_illumination_bounds() {
        let start = JulianDate::from_utc(2024, 1, 1, 0, 0, 0.0).unwrap();
        for step in 0..400 {
            let moon = moon_illumination_from_julian(start.add_days(f64::from(step) * 0.37));
            assert!((0.0..=1.0).contains(&moon.fraction()));
            assert!((0.0..1.0).contains(&moon.phase()));
            assert!((-PI..=PI).contains(&moon.angle()));
        }
    }

    #[test]
    fn test_opposition_geometry() {
        // Moon exactly opposite the sun on the celestial sphere
        let sun = EquatorialCoordinates::new(0.0, 0.0);
        let moon = EquatorialCoordinates::new(0.0, PI);
        let full = illumination_from_coordinates(sun, moon, 384_400.0);
        assert!(full.fraction() > 0.999);

        assert!((full.phase() - 0.5).abs() < 1e-3);

        let new = illumination_from_coordinates(sun, sun, 384_400.0);
        assert!(new.fraction() < 1e-9);
        assert!((0.0..1.0).contains(&new.phase()));
        assert!(new.phase() < 1e-9);
    }

    #[test]
    fn test_conjunction_phase_wraps_to_zero() {
        for (dec, ra) in [(0.3, 1.1), (-0.4, -2.5), (0.0, PI)] {
            let same = EquatorialCoordinates::new(dec, ra);
            let moon = illumination_from_coordinates(same, same, 384_400.0);
            assert!((0.0..1.0).contains(&moon.phase()), "{moon:?}");
            assert!(!moon.fraction().is_nan());
        }
    }
}
