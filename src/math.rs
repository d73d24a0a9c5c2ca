//! Math backend for sun and moon calculations.
//!
//! Every function dispatches to the standard library when `std` is enabled and to `libm`
//! otherwise, so the astronomical code reads the same in both configurations.

#![allow(clippy::many_single_char_names)]

#[cfg(not(feature = "std"))]
use libm;

/// Half turn in radians.
pub const PI: f64 = core::f64::consts::PI;

/// Full turn in radians.
pub const TAU: f64 = core::f64::consts::TAU;

/// Radians per degree.
pub const RAD: f64 = PI / 180.0;

/// Converts radians to degrees.
#[inline]
pub const fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Normalizes an angle in radians to the range [0, 2π).
pub fn normalize_radians(radians: f64) -> f64 {
    let normalized = radians - TAU * floor(radians / TAU);
    if normalized >= TAU { 0.0 } else { normalized }
}

macro_rules! unary {
    ($($(#[$doc:meta])* $name:ident => $method:ident, $libm:ident;)+) => {$(
        $(#[$doc])*
        #[inline]
        pub fn $name(x: f64) -> f64 {
            #[cfg(feature = "std")]
            return x.$method();

            #[cfg(not(feature = "std"))]
            return libm::$libm(x);
        }
    )+};
}

unary! {
    /// Sine of `x` radians.
    sin => sin, sin;
    /// Cosine of `x` radians.
    cos => cos, cos;
    /// Tangent of `x` radians.
    tan => tan, tan;
    /// Arcsine in radians; NaN outside [-1, 1].
    asin => asin, asin;
    /// Arccosine in radians; NaN outside [-1, 1].
    acos => acos, acos;
    sqrt => sqrt, sqrt;
    floor => floor, floor;
    /// Rounds half away from zero, like `f64::round`.
    round => round, round;
    abs => abs, fabs;
}

/// Four-quadrant arctangent of `y / x`.
#[inline]
pub fn atan2(y: f64, x: f64) -> f64 {
    #[cfg(feature = "std")]
    return y.atan2(x);

    #[cfg(not(feature = "std"))]
    return libm::atan2(y, x);
}
