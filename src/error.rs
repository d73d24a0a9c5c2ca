//! Error types for sun and moon calculations.

use alloc::string::String;
use core::fmt;

/// Shorthand for results carrying [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Input errors reported by the sun and moon calculations.
///
/// Only malformed input is an error. A threshold the sun never crosses on a given day, or a
/// moon that stays above or below the horizon, is reported in the result value instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Latitude outside -90°..=90°, or not a number.
    InvalidLatitude {
        /// Rejected latitude in degrees.
        value: f64,
    },
    /// Longitude outside -180°..=180°, or not a number.
    InvalidLongitude {
        /// Rejected longitude in degrees.
        value: f64,
    },
    /// Observer height that is negative or not finite.
    InvalidHeight {
        /// Rejected height in meters.
        value: f64,
    },
    /// Invalid sun altitude threshold for a sun time definition.
    InvalidAngle {
        /// Rejected angle in degrees.
        value: f64,
    },
    /// A sun time label that is already in use.
    DuplicateLabel {
        /// The label that clashed with an existing one.
        label: String,
    },
    /// Calendrically invalid date/time, or a Julian day that cannot be represented.
    InvalidDateTime {
        /// What was wrong with the input.
        message: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidHeight { value } => {
                write!(f, "invalid observer height {value} m (must not be negative)")
            }
            Self::InvalidAngle { value } => {
                write!(
                    f,
                    "invalid sun time angle {value}° (must be between -90° and +90°)"
                )
            }
            Self::DuplicateLabel { label } => {
                write!(f, "sun time label \"{label}\" is already defined")
            }
            Self::InvalidDateTime { message } => {
                write!(f, "invalid date/time: {message}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Latitude error for `value`.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Longitude error for `value`.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Height error for `value`.
    #[must_use]
    pub const fn invalid_height(value: f64) -> Self {
        Self::InvalidHeight { value }
    }

    /// Threshold angle error for `value`.
    #[must_use]
    pub const fn invalid_angle(value: f64) -> Self {
        Self::InvalidAngle { value }
    }

    /// Label clash error, copying `label`.
    #[must_use]
    pub fn duplicate_label(label: &str) -> Self {
        Self::DuplicateLabel {
            label: String::from(label),
        }
    }

    /// Date/time error with a static description.
    #[must_use]
    pub const fn invalid_datetime(message: &'static str) -> Self {
        Self::InvalidDateTime { message }
    }
}

/// Accepts latitudes from the south pole to the north pole, inclusive.
///
/// # Errors
/// `InvalidLatitude` for anything else, NaN included.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Accepts longitudes in -180°..=180°, east positive.
///
/// # Errors
/// `InvalidLongitude` for anything else, NaN included.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Checks an observer location, latitude first.
///
/// # Errors
/// The first failing check, see [`check_latitude`] and [`check_longitude`].
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

/// Validates the observer height above the horizon plane.
///
/// # Errors
/// Returns `InvalidHeight` if the height is negative or not finite.
pub fn check_height(height: f64) -> Result<()> {
    if !height.is_finite() || height < 0.0 {
        return Err(Error::invalid_height(height));
    }
    Ok(())
}

/// Validates a sun altitude threshold in degrees.
///
/// # Errors
/// Returns `InvalidAngle` if the angle is outside -90 to +90 degrees.
pub fn check_threshold_angle(angle: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&angle) {
        return Err(Error::invalid_angle(angle));
    }
    Ok(())
}
