// Copyright (c) 2025 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The ellipsoid module contains functions for calculating the derived
//! parameters and the local radii of curvature of an ellipsoid given its
//! Semimajor axis and flattening ratio.

#![allow(clippy::suboptimal_flops)]

pub mod wgs84;

use crate::Metres;

/// Calculate the Semiminor axis of an ellipsoid.
/// * `a` - the Semimajor axis of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use angle_sc::is_within_tolerance;
/// use nav_geoparams::ellipsoid::{calculate_minor_axis, wgs84};
///
/// // The WGS 84 Semiminor axis measured in metres.
/// let b = calculate_minor_axis(wgs84::A, wgs84::F);
/// assert!(is_within_tolerance(6_356_752.314_245, b.0, 1e-6));
/// ```
#[must_use]
pub fn calculate_minor_axis(a: Metres, f: f64) -> Metres {
    Metres(a.0 * (1.0 - f))
}

/// Calculate the square of the Eccentricity of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use angle_sc::is_within_tolerance;
/// use nav_geoparams::ellipsoid::{calculate_sq_eccentricity, wgs84};
///
/// // The WGS 84 sq_eccentricity.
/// assert!(is_within_tolerance(wgs84::E_2, calculate_sq_eccentricity(wgs84::F), 1e-12));
/// ```
#[must_use]
pub fn calculate_sq_eccentricity(f: f64) -> f64 {
    f * (2.0 - f)
}

/// Calculate the meridian radius of curvature of an ellipsoid, i.e. the
/// radius of curvature in the North-South direction.
/// * `a` - the Semimajor axis of an ellipsoid.
/// * `e_2` - the square of the Eccentricity of the ellipsoid.
/// * `sq_sin_lat` - the square of the sine of the geodetic latitude.
/// # Examples
/// ```
/// use nav_geoparams::Metres;
/// use nav_geoparams::ellipsoid::{calculate_meridian_radius, wgs84};
///
/// // The WGS 84 meridian radius of curvature at the equator: a(1 - e²).
/// let rm = calculate_meridian_radius(wgs84::A, wgs84::E_2, 0.0);
/// assert_eq!(Metres(wgs84::A.0 * (1.0 - wgs84::E_2)), rm);
/// ```
#[must_use]
pub fn calculate_meridian_radius(a: Metres, e_2: f64, sq_sin_lat: f64) -> Metres {
    let w = 1.0 - e_2 * sq_sin_lat;
    Metres(a.0 * (1.0 - e_2) / (libm::sqrt(w) * w))
}

/// Calculate the prime-vertical (normal) radius of curvature of an ellipsoid,
/// i.e. the radius of curvature in the East-West direction.
/// * `a` - the Semimajor axis of an ellipsoid.
/// * `e_2` - the square of the Eccentricity of the ellipsoid.
/// * `sq_sin_lat` - the square of the sine of the geodetic latitude.
/// # Examples
/// ```
/// use nav_geoparams::Metres;
/// use nav_geoparams::ellipsoid::{calculate_prime_vertical_radius, wgs84};
///
/// // The WGS 84 prime-vertical radius of curvature at the equator: a.
/// let rn = calculate_prime_vertical_radius(wgs84::A, wgs84::E_2, 0.0);
/// assert_eq!(wgs84::A, rn);
/// ```
#[must_use]
pub fn calculate_prime_vertical_radius(a: Metres, e_2: f64, sq_sin_lat: f64) -> Metres {
    Metres(a.0 / libm::sqrt(1.0 - e_2 * sq_sin_lat))
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_radii_at_equator() {
        let rm = calculate_meridian_radius(wgs84::A, wgs84::E_2, 0.0);
        let rn = calculate_prime_vertical_radius(wgs84::A, wgs84::E_2, 0.0);

        assert_eq!(wgs84::A.0 * (1.0 - wgs84::E_2), rm.0);
        assert_eq!(wgs84::A, rn);

        // the meridian radius is smallest at the equator
        assert!(rm.0 < rn.0);
    }

    #[test]
    fn test_radii_at_pole() {
        // sin²(lat) is one at the poles
        let rm = calculate_meridian_radius(wgs84::A, wgs84::E_2, 1.0);
        let rn = calculate_prime_vertical_radius(wgs84::A, wgs84::E_2, 1.0);

        // both radii equal the polar radius of curvature: a / √(1 - e²)
        let polar_radius = wgs84::A.0 / libm::sqrt(1.0 - wgs84::E_2);
        assert!(is_within_tolerance(polar_radius, rm.0, 1e-8));
        assert!(is_within_tolerance(polar_radius, rn.0, 1e-8));
        assert!(is_within_tolerance(rm.0, rn.0, 1e-8));
    }

    #[test]
    fn test_radii_increase_with_latitude() {
        let mut prev_rm = calculate_meridian_radius(wgs84::A, wgs84::E_2, 0.0);
        let mut prev_rn = calculate_prime_vertical_radius(wgs84::A, wgs84::E_2, 0.0);

        for i in 1..90 {
            let sin_lat = libm::sin((i as f64).to_radians());
            let sq_sin_lat = sin_lat * sin_lat;

            let rm = calculate_meridian_radius(wgs84::A, wgs84::E_2, sq_sin_lat);
            let rn = calculate_prime_vertical_radius(wgs84::A, wgs84::E_2, sq_sin_lat);

            assert!(prev_rm.0 < rm.0);
            assert!(prev_rn.0 < rn.0);
            assert!(rm.0 < rn.0);

            prev_rm = rm;
            prev_rn = rn;
        }
    }
}
