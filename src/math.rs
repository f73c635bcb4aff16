//! Mathematical utilities for the solar model: degree-based trigonometry and angle reduction.

#![allow(clippy::many_single_char_names)]

const INV_360: f64 = 1.0 / 360.0;

/// Reduces an angle in degrees into the range [0, 360).
///
/// Subtracts the appropriate integer multiple of 360, so negative inputs land
/// on the same canonical angle as their positive equivalents.
pub fn reduce_to_360(degrees: f64) -> f64 {
    let mut reduced = degrees - 360.0 * floor(degrees * INV_360);
    // floor() of a quotient that rounded up can leave a tiny negative remainder
    if reduced < 0.0 {
        reduced += 360.0;
    }
    if reduced >= 360.0 {
        reduced -= 360.0;
    }
    reduced
}

/// Reduces an angle in degrees into the range (-180, 180].
///
/// Used for differences of wrapping angles so the result is always the shorter arc.
pub fn reduce_to_180(degrees: f64) -> f64 {
    let reduced = reduce_to_360(degrees);
    if reduced > 180.0 {
        reduced - 360.0
    } else {
        reduced
    }
}

/// Sine of an angle given in degrees.
#[inline]
pub fn sind(degrees: f64) -> f64 {
    sin(degrees.to_radians())
}

/// Cosine of an angle given in degrees.
#[inline]
pub fn cosd(degrees: f64) -> f64 {
    cos(degrees.to_radians())
}

/// Arc cosine returning degrees.
#[inline]
pub fn acosd(x: f64) -> f64 {
    acos(x).to_degrees()
}

/// Two-argument arc tangent returning degrees.
#[inline]
pub fn atan2d(y: f64, x: f64) -> f64 {
    atan2(y, x).to_degrees()
}

/// Defines a wrapper that calls the inherent `f64` method under `std` and
/// the `libm` function of the same name otherwise.
macro_rules! float_fn {
    ($(#[$doc:meta] $name:ident($x:ident $(, $y:ident)?);)+) => {
        $(
            #[$doc]
            #[inline]
            pub fn $name($x: f64 $(, $y: f64)?) -> f64 {
                #[cfg(feature = "std")]
                return $x.$name($($y)?);

                #[cfg(not(feature = "std"))]
                return libm::$name($x $(, $y)?);
            }
        )+
    };
}

float_fn! {
    /// Sine of an angle in radians.
    sin(x);
    /// Cosine of an angle in radians.
    cos(x);
    /// Arc cosine in radians.
    acos(x);
    /// Arc tangent of `y / x` in radians, using both signs for the quadrant.
    atan2(y, x);
    /// Square root.
    sqrt(x);
    /// Largest integer not greater than `x`.
    floor(x);
    /// Nearest integer, halfway cases away from zero.
    round(x);
}
