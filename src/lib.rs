//! # SunCalc
//!
//! Sun and moon positions, sunlight phases, moon rise/set and lunar illumination.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! This library computes, for an observer at a given place and instant:
//! - **Sun position**: azimuth and altitude
//! - **Sunlight phases**: solar noon, nadir, sunrise/sunset, twilight boundaries and golden
//!   hour, with support for custom altitude thresholds and observer height
//! - **Moon position**: azimuth, altitude, distance and parallactic angle
//! - **Moon rise/set**: including days where the moon never rises or never sets
//! - **Moon illumination**: illuminated fraction, phase and bright limb angle
//!
//! The models are low-precision analytical series (about 1 arcminute for the sun, a few
//! arcminutes for the moon), well suited for event times to within a minute or two.
//!
//! ## Features
//!
//! - Runs on `std` or bare `no_std` targets; `chrono` support is optional
//! - Pure functions: no global state, results are immutable values
//! - Optional diagnostics through the `log` facade
//!
//! ## Feature Flags
//!
//! - `std` (default): platform math from the standard library
//! - `chrono` (default): functions taking and returning `DateTime<Tz>`
//! - `libm`: portable math for `no_std` builds
//! - `log`: Emit `debug`/`trace` events, e.g. for thresholds the sun never reaches
//!
//! Typical manifests:
//! ```toml
//! # std + chrono
//! suncalc = "0.1"
//!
//! # numeric API only
//! suncalc = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # no_std, needs `alloc`
//! suncalc = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## References
//!
//! - Meeus, J. (1998). Astronomical Algorithms, 2nd edition. Willmann-Bell.
//! - Astronomy Answers: Position of the Sun and Position of the Moon.
//!   <https://aa.quae.nl/en/reken/zonpositie.html>
//!
//! ## Quick Start
//!
//! ### Sunlight phases (with chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use suncalc::{SunTimes, sun};
//! use chrono::{DateTime, FixedOffset};
//!
//! let date = "2020-12-22T12:00:00+00:00".parse::<DateTime<FixedOffset>>().unwrap();
//! let times = sun::sun_times(date, 51.5, -0.1, 0.0, &SunTimes::standard()).unwrap();
//!
//! for (label, time) in times.iter() {
//!     println!("{label}: {time}");
//! }
//! # }
//! ```
//!
//! ### Sun position (numeric API, no chrono)
//! ```rust
//! use suncalc::{sun, time::JulianDate};
//!
//! let jd = JulianDate::from_utc(2013, 3, 5, 0, 0, 0.0).unwrap();
//! let position = sun::sun_position_from_julian(jd, 50.5, 30.5).unwrap();
//!
//! println!("Azimuth: {:.3}°", position.compass_azimuth_degrees());
//! println!("Altitude: {:.3}°", position.altitude_degrees());
//! ```
//!
//! ### Moon rise and set
//! ```rust
//! use suncalc::{MoonTimes, moon};
//!
//! match moon::moon_times_utc(2024, 1, 23, 78.0, 15.0).unwrap() {
//!     MoonTimes::Crossings { rise, set } => println!("rise {rise:?}, set {set:?}"),
//!     MoonTimes::AlwaysUp => println!("moon up all day"),
//!     MoonTimes::AlwaysDown => println!("moon down all day"),
//! }
//! ```
//!
//! ## Coordinate System
//!
//! - **Azimuth**: radians from south, positive towards west (`compass_azimuth_degrees()`
//!   converts to 0° = North, clockwise)
//! - **Altitude**: radians above the horizon (-π/2 to +π/2)

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
    clippy::many_single_char_names, // Formula variables follow the astronomical notation
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("either the `std` or the `libm` feature must be enabled");

extern crate alloc;

// Diagnostics; expand to nothing without the `log` feature
macro_rules! debug {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        ::log::debug!($($arg)+);
    };
}

macro_rules! trace {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        ::log::trace!($($arg)+);
    };
}

pub(crate) use {debug, trace};

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::types::{
    EquatorialCoordinates, HorizontalCoordinates, HoursUtc, MoonCoordinates, MoonIllumination,
    MoonPosition, MoonTimes, SunEventTimes, SunTime, SunTimes,
};

// Algorithm modules
pub mod illumination;
pub mod moon;
pub mod sun;

// Core modules
pub mod coords;
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;
