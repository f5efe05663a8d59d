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

//! The gravity module contains the WGS 84 normal gravity model: the
//! closed-form (Somigliana) expression for gravity on the surface of the
//! ellipsoid together with a free-air correction for altitude, see
//! [Gravity of Earth](https://en.wikipedia.org/wiki/Gravity_of_Earth).
//!
//! No input validation is performed; non-finite latitudes or altitudes
//! propagate NaN/∞ through the formulas.

#![allow(clippy::suboptimal_flops)]

use crate::ellipsoid::wgs84;
use crate::Metres;

/// Calculate normal gravity on the surface of the WGS 84 ellipsoid.
/// * `sq_sin_lat` - the square of the sine of the geodetic latitude.
///
/// returns the surface gravity in m/s².
/// # Examples
/// ```
/// use nav_geoparams::gravity::calculate_surface_gravity;
/// use nav_geoparams::ellipsoid::wgs84;
///
/// // Normal gravity at the equator.
/// assert_eq!(wgs84::G0, calculate_surface_gravity(0.0));
/// ```
#[must_use]
pub fn calculate_surface_gravity(sq_sin_lat: f64) -> f64 {
    wgs84::G0 * (1.0 + wgs84::K * sq_sin_lat) / libm::sqrt(1.0 - wgs84::E_2 * sq_sin_lat)
}

/// Calculate normal gravity at an altitude above the WGS 84 ellipsoid.
/// * `sq_sin_lat` - the square of the sine of the geodetic latitude.
/// * `altitude` - the altitude above the surface of the ellipsoid.
///
/// returns the local gravity in m/s².
/// # Examples
/// ```
/// use nav_geoparams::Metres;
/// use nav_geoparams::gravity::calculate_gravity;
/// use nav_geoparams::ellipsoid::wgs84;
///
/// // The altitude correction vanishes on the surface.
/// assert_eq!(wgs84::G0, calculate_gravity(0.0, Metres(0.0)));
/// ```
#[must_use]
pub fn calculate_gravity(sq_sin_lat: f64, altitude: Metres) -> f64 {
    let g1 = calculate_surface_gravity(sq_sin_lat);
    let h = altitude.0;
    let a = wgs84::A.0;
    g1 * (1.0 - (2.0 / a) * (1.0 + wgs84::F + wgs84::M - 2.0 * wgs84::F * sq_sin_lat) * h
        + 3.0 * h * h / (a * a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_surface_gravity_at_equator() {
        // both correction terms vanish, so the value is exact
        assert_eq!(wgs84::G0, calculate_surface_gravity(0.0));
        assert_eq!(wgs84::G0, calculate_gravity(0.0, Metres(0.0)));
    }

    #[test]
    fn test_surface_gravity_at_pole() {
        // sin²(lat) is one at the poles
        assert!(is_within_tolerance(
            9.832_184_937_8,
            calculate_surface_gravity(1.0),
            1e-6
        ));
        assert!(is_within_tolerance(
            9.832_184_937_8,
            calculate_gravity(1.0, Metres(0.0)),
            1e-6
        ));
    }

    #[test]
    fn test_gravity_decreases_with_altitude() {
        let g_surface = calculate_gravity(0.5, Metres(0.0));
        let g_1km = calculate_gravity(0.5, Metres(1_000.0));
        let g_10km = calculate_gravity(0.5, Metres(10_000.0));

        assert!(g_1km < g_surface);
        assert!(g_10km < g_1km);

        // the free-air gradient is roughly 3.1e-6 m/s² per metre
        assert!(is_within_tolerance(g_surface - 3.1e-3, g_1km, 1e-4));
    }
}
