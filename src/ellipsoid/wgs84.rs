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

//! The wgs84 module contains the WGS 84 geoid parameters together with the
//! constants of the WGS 84 normal gravity model, see
//! [Gravity of Earth](https://en.wikipedia.org/wiki/Gravity_of_Earth).
//!
//! The values are published to full double precision; downstream consumers
//! may rely on them matching the reference WGS 84 tables exactly.

use crate::Metres;

/// The WGS 84 Semimajor axis measured in metres.
/// This is the radius at the equator.
pub const A: Metres = Metres(6_378_137.0);

/// The WGS 84 flattening, a ratio.
/// `f = (a - b) / a` where `a` and `b` are the Semimajor and Semiminor axes.
pub const F: f64 = 0.003_352_810_664_75;

/// The WGS 84 Eccentricity of the ellipsoid.
pub const E: f64 = 0.081_819_190_842_621_5;

/// The WGS 84 square of the Eccentricity: `e² = 2f - f²`.
pub const E_2: f64 = 0.006_694_379_990_14;

/// The WGS 84 gravitational parameter of the Earth, in m³/s².
pub const GM: f64 = 3.986_004_418e14;

/// The WGS 84 rotation rate of the Earth relative to the inertial frame,
/// in rad/s.
pub const W_IE: f64 = 7.292_115e-5;

/// Normal gravity at the equator on the surface of the ellipsoid, in m/s².
pub const G0: f64 = 9.780_325_335_9;

/// The normal gravity formula constant, a ratio.
pub const K: f64 = 0.001_931_852_652_41;

/// The geodetic reference system constant: `m = w²a²b / GM`, a ratio.
pub const M: f64 = 0.003_449_786_506_84;

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_constant_consistency() {
        // e² = 2f - f², and e² = e·e
        assert!(is_within_tolerance(E_2, F * (2.0 - F), 1e-12));
        assert!(is_within_tolerance(E_2, E * E, 1e-12));

        // m = w²a²b / GM with b = a(1 - f)
        let b = A.0 * (1.0 - F);
        assert!(is_within_tolerance(
            M,
            W_IE * W_IE * A.0 * A.0 * b / GM,
            1e-8
        ));
    }
}
