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

//! nav-geoparams
//!
//! A library for calculating local Earth geometry and gravity on the
//! [WGS-84](https://en.wikipedia.org/wiki/World_Geodetic_System) ellipsoid
//! for navigation and inertial-sensing applications:
//!
//! - the meridian and prime-vertical (normal) radii of curvature at a
//!   geodetic latitude;
//! - the local normal gravity magnitude at a geodetic latitude and altitude,
//!   using the WGS-84 closed-form gravity model;
//! - the conversion of a geodetic position to an Earth-Centered Earth-Fixed
//!   (ECEF) Cartesian position.
//!
//! All calculations are pure, closed-form evaluations over the read-only
//! WGS-84 parameters: same input always yields the same output and any
//! number of calls may run concurrently without synchronisation.
//! Inputs are not range checked; non-finite values propagate NaN/∞ through
//! the formulas instead of raising errors.
//!
//! ## Design
//!
//! The `Ellipsoid` type holds the parameters of an ellipsoid of revolution.
//! The static `WGS84_ELLIPSOID` holds the published WGS-84 parameters, see
//! [`ellipsoid::wgs84`], which the top-level functions [`geo_param`],
//! [`earth_radius`] and [`lla2xyz`] evaluate against.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Angle`,
//!   `Degrees` and `Radians` and perform trigonometric calculations;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to define `LatLong`
//!   and the `Vector3d` Cartesian vector;
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres`.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications.

#![cfg_attr(not(test), no_std)]

extern crate angle_sc;
extern crate icao_units;
extern crate unit_sphere;

pub mod ellipsoid;
pub mod gravity;

pub use angle_sc::{Angle, Degrees, Radians};
pub use icao_units::si::Metres;
pub use unit_sphere::{LatLong, Vector3d};

use once_cell::sync::Lazy;

/// The parameters of an `Ellipsoid`.
#[derive(Clone, Debug, PartialEq)]
pub struct Ellipsoid {
    /// The Semimajor axis of the ellipsoid.
    a: Metres,
    /// The flattening of the ellipsoid, a ratio.
    f: f64,

    /// The Semiminor axis of the ellipsoid.
    b: Metres,
    /// The Eccentricity of the ellipsoid.
    e: f64,
    /// The square of the Eccentricity of the ellipsoid.
    e_2: f64,
    /// The gravitational parameter of the body, in m³/s².
    gm: f64,
    /// The rotation rate of the body relative to the inertial frame, in rad/s.
    w_ie: f64,
}

impl Ellipsoid {
    /// Constructor.
    /// * `a` - the Semimajor axis of the `Ellipsoid`.
    /// * `f` - the flattening of the `Ellipsoid`, a ratio.
    /// * `gm` - the gravitational parameter of the body, in m³/s².
    /// * `w_ie` - the rotation rate of the body, in rad/s.
    #[must_use]
    pub fn new(a: Metres, f: f64, gm: f64, w_ie: f64) -> Self {
        let e_2 = ellipsoid::calculate_sq_eccentricity(f);
        Self {
            a,
            f,
            b: ellipsoid::calculate_minor_axis(a, f),
            e: libm::sqrt(e_2),
            e_2,
            gm,
            w_ie,
        }
    }

    /// Construct an `Ellipsoid` with the WGS-84 parameters.
    ///
    /// The published constants are used verbatim, not derived from each
    /// other, so each parameter matches the reference WGS-84 tables.
    #[must_use]
    pub fn wgs84() -> Self {
        Self {
            a: ellipsoid::wgs84::A,
            f: ellipsoid::wgs84::F,
            b: ellipsoid::calculate_minor_axis(ellipsoid::wgs84::A, ellipsoid::wgs84::F),
            e: ellipsoid::wgs84::E,
            e_2: ellipsoid::wgs84::E_2,
            gm: ellipsoid::wgs84::GM,
            w_ie: ellipsoid::wgs84::W_IE,
        }
    }

    /// The Semimajor axis of the ellipsoid.
    #[must_use]
    pub const fn a(&self) -> Metres {
        self.a
    }

    /// The flattening of the ellipsoid, a ratio.
    #[must_use]
    pub const fn f(&self) -> f64 {
        self.f
    }

    /// The Semiminor axis of the ellipsoid.
    #[must_use]
    pub const fn b(&self) -> Metres {
        self.b
    }

    /// The Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn e(&self) -> f64 {
        self.e
    }

    /// The square of the Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn e_2(&self) -> f64 {
        self.e_2
    }

    /// The gravitational parameter of the body, in m³/s².
    #[must_use]
    pub const fn gm(&self) -> f64 {
        self.gm
    }

    /// The rotation rate of the body relative to the inertial frame, in rad/s.
    #[must_use]
    pub const fn w_ie(&self) -> f64 {
        self.w_ie
    }

    /// Calculate the meridian and prime-vertical radii of curvature of the
    /// ellipsoid at a geodetic latitude.
    /// * `lat` - the geodetic latitude.
    ///
    /// returns the meridian and prime-vertical radii of curvature in metres.
    #[must_use]
    pub fn radii_of_curvature(&self, lat: Angle) -> (Metres, Metres) {
        let sin_lat = lat.sin().0;
        let sq_sin_lat = sin_lat * sin_lat;
        (
            ellipsoid::calculate_meridian_radius(self.a, self.e_2, sq_sin_lat),
            ellipsoid::calculate_prime_vertical_radius(self.a, self.e_2, sq_sin_lat),
        )
    }

    /// Calculate the local Earth parameters at a geodetic position: the
    /// radii of curvature, the local gravity and the Earth rotation rate,
    /// together with the sine and cosine of the latitude for reuse by the
    /// caller.
    ///
    /// Note: the gravity value is calculated with the WGS-84 normal gravity
    /// model constants whatever the parameters of the `Ellipsoid`.
    /// * `position` - the geodetic position.
    #[must_use]
    pub fn geo_params(&self, position: &GeodeticPosition) -> GeoParams {
        let lat = position.lat();
        let sin_lat = lat.sin().0;
        let cos_lat = lat.cos().0;
        let sq_sin_lat = sin_lat * sin_lat;

        let (rm, rn) = self.radii_of_curvature(lat);
        GeoParams {
            rm,
            rn,
            gravity: gravity::calculate_gravity(sq_sin_lat, position.alt()),
            sin_lat,
            cos_lat,
            w_ie: self.w_ie,
        }
    }

    /// Convert a geodetic position to an ECEF Cartesian position.
    /// * `position` - the geodetic position.
    ///
    /// returns the ECEF position as a `Vector3d`, in metres.
    #[allow(clippy::suboptimal_flops)]
    #[must_use]
    pub fn to_ecef(&self, position: &GeodeticPosition) -> Vector3d {
        let sin_lat = position.lat().sin().0;
        let cos_lat = position.lat().cos().0;
        let sq_sin_lat = sin_lat * sin_lat;
        let alt = position.alt().0;

        // The prime-vertical radius, recomputed inline instead of through
        // `ellipsoid::calculate_prime_vertical_radius`: a known duplication,
        // kept so that this transform matches the reference formulas line
        // for line.
        let r = self.a.0 / libm::sqrt(1.0 - self.e_2 * sq_sin_lat);
        let rho = (r + alt) * cos_lat;
        Vector3d::new(
            rho * position.lon().cos().0,
            rho * position.lon().sin().0,
            (r * (1.0 - self.e_2) + alt) * sin_lat,
        )
    }
}

/// A static instance of the WGS-84 `Ellipsoid`.
pub static WGS84_ELLIPSOID: Lazy<Ellipsoid> = Lazy::new(Ellipsoid::wgs84);

/// A geodetic position: latitude, longitude and altitude above the surface
/// of the ellipsoid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeodeticPosition {
    /// The geodetic latitude.
    lat: Angle,
    /// The longitude.
    lon: Angle,
    /// The altitude above the surface of the ellipsoid.
    alt: Metres,
}

impl GeodeticPosition {
    /// Constructor.
    /// * `lat` - the geodetic latitude.
    /// * `lon` - the longitude.
    /// * `alt` - the altitude above the surface of the ellipsoid.
    #[must_use]
    pub const fn new(lat: Angle, lon: Angle, alt: Metres) -> Self {
        Self { lat, lon, alt }
    }

    /// Construct a `GeodeticPosition` from latitude and longitude in radians.
    /// @pre `lat` should lie in [-π/2, π/2]; it is not range checked.
    /// * `lat`, `lon` - the geodetic latitude and longitude in `Radians`.
    /// * `alt` - the altitude above the surface of the ellipsoid.
    #[must_use]
    pub fn from_radians(lat: Radians, lon: Radians, alt: Metres) -> Self {
        Self::new(Angle::from(lat), Angle::from(lon), alt)
    }

    /// The geodetic latitude.
    #[must_use]
    pub const fn lat(&self) -> Angle {
        self.lat
    }

    /// The longitude.
    #[must_use]
    pub const fn lon(&self) -> Angle {
        self.lon
    }

    /// The altitude above the surface of the ellipsoid.
    #[must_use]
    pub const fn alt(&self) -> Metres {
        self.alt
    }
}

impl From<(&LatLong, Metres)> for GeodeticPosition {
    /// Construct a `GeodeticPosition` from a `LatLong` in degrees and an
    /// altitude above the surface of the ellipsoid.
    fn from(params: (&LatLong, Metres)) -> Self {
        Self::new(
            Angle::from(params.0.lat()),
            Angle::from(params.0.lon()),
            params.1,
        )
    }
}

/// The local Earth parameters at a geodetic position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoParams {
    /// The meridian radius of curvature.
    rm: Metres,
    /// The prime-vertical (normal) radius of curvature.
    rn: Metres,
    /// The local gravity magnitude, in m/s².
    gravity: f64,
    /// The sine of the geodetic latitude.
    sin_lat: f64,
    /// The cosine of the geodetic latitude.
    cos_lat: f64,
    /// The rotation rate of the Earth relative to the inertial frame, in rad/s.
    w_ie: f64,
}

impl GeoParams {
    /// The meridian radius of curvature.
    #[must_use]
    pub const fn rm(&self) -> Metres {
        self.rm
    }

    /// The prime-vertical (normal) radius of curvature.
    #[must_use]
    pub const fn rn(&self) -> Metres {
        self.rn
    }

    /// The local gravity magnitude, in m/s².
    #[must_use]
    pub const fn gravity(&self) -> f64 {
        self.gravity
    }

    /// The sine of the geodetic latitude.
    #[must_use]
    pub const fn sin_lat(&self) -> f64 {
        self.sin_lat
    }

    /// The cosine of the geodetic latitude.
    #[must_use]
    pub const fn cos_lat(&self) -> f64 {
        self.cos_lat
    }

    /// The rotation rate of the Earth relative to the inertial frame, in rad/s.
    #[must_use]
    pub const fn w_ie(&self) -> f64 {
        self.w_ie
    }
}

/// Calculate the local Earth parameters at a geodetic position: the meridian
/// and prime-vertical radii of curvature, the local gravity, the sine and
/// cosine of the latitude and the Earth rotation rate.
/// * `position` - the geodetic position.
/// * `ellipsoid` - the `Ellipsoid`.
///
/// # Examples
/// ```
/// use nav_geoparams::*;
///
/// let pos = GeodeticPosition::from_radians(Radians(0.0), Radians(0.0), Metres(0.0));
/// let params = geo_param(&pos, &WGS84_ELLIPSOID);
///
/// // on the equator the correction terms vanish
/// assert_eq!(Metres(6_378_137.0), params.rn());
/// assert_eq!(9.7803253359, params.gravity());
/// assert_eq!(0.0, params.sin_lat());
/// assert_eq!(1.0, params.cos_lat());
/// ```
#[must_use]
pub fn geo_param(position: &GeodeticPosition, ellipsoid: &Ellipsoid) -> GeoParams {
    ellipsoid.geo_params(position)
}

/// Calculate the meridian and prime-vertical radii of curvature of the
/// ellipsoid at a geodetic latitude.
/// * `lat` - the geodetic latitude.
/// * `ellipsoid` - the `Ellipsoid`.
///
/// returns the meridian and prime-vertical radii of curvature in metres.
///
/// # Examples
/// ```
/// use nav_geoparams::*;
///
/// let (rm, rn) = earth_radius(Angle::from(Radians(0.0)), &WGS84_ELLIPSOID);
/// assert_eq!(Metres(6_378_137.0), rn);
/// assert!(rm.0 < rn.0);
/// ```
#[must_use]
pub fn earth_radius(lat: Angle, ellipsoid: &Ellipsoid) -> (Metres, Metres) {
    ellipsoid.radii_of_curvature(lat)
}

/// Convert a geodetic position to an ECEF Cartesian position.
/// * `position` - the geodetic position.
/// * `ellipsoid` - the `Ellipsoid`.
///
/// returns the ECEF position as a `Vector3d`, in metres.
///
/// # Examples
/// ```
/// use nav_geoparams::*;
///
/// let pos = GeodeticPosition::from_radians(Radians(0.0), Radians(0.0), Metres(0.0));
/// let ecef = lla2xyz(&pos, &WGS84_ELLIPSOID);
///
/// assert_eq!(6_378_137.0, ecef.x);
/// assert_eq!(0.0, ecef.y);
/// assert_eq!(0.0, ecef.z);
/// ```
#[must_use]
pub fn lla2xyz(position: &GeodeticPosition, ellipsoid: &Ellipsoid) -> Vector3d {
    ellipsoid.to_ecef(position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_ellipsoid_wgs84() {
        let geoid = Ellipsoid::wgs84();
        assert_eq!(ellipsoid::wgs84::A, geoid.a());
        assert_eq!(ellipsoid::wgs84::F, geoid.f());
        assert_eq!(
            ellipsoid::calculate_minor_axis(ellipsoid::wgs84::A, ellipsoid::wgs84::F),
            geoid.b()
        );
        assert_eq!(ellipsoid::wgs84::E, geoid.e());
        assert_eq!(ellipsoid::wgs84::E_2, geoid.e_2());
        assert_eq!(ellipsoid::wgs84::GM, geoid.gm());
        assert_eq!(ellipsoid::wgs84::W_IE, geoid.w_ie());
    }

    #[test]
    fn test_ellipsoid_new_derives_eccentricity() {
        let geoid = Ellipsoid::new(
            ellipsoid::wgs84::A,
            ellipsoid::wgs84::F,
            ellipsoid::wgs84::GM,
            ellipsoid::wgs84::W_IE,
        );

        // e² = 2f - f², so the derived values match the published constants
        assert!(is_within_tolerance(
            ellipsoid::wgs84::E_2,
            geoid.e_2(),
            1e-12
        ));
        assert!(is_within_tolerance(ellipsoid::wgs84::E, geoid.e(), 1e-12));
    }

    #[test]
    fn test_ellipsoid_traits() {
        let geoid = Ellipsoid::wgs84();

        let geoid_clone = geoid.clone();
        assert!(geoid_clone == geoid);

        println!("Ellipsoid: {:?}", geoid);
    }

    #[test]
    fn test_geodetic_position() {
        let pos = GeodeticPosition::from_radians(
            Radians(core::f64::consts::FRAC_PI_4),
            Radians(core::f64::consts::FRAC_PI_4),
            Metres(100.0),
        );
        assert_eq!(Metres(100.0), pos.alt());

        let latlong = LatLong::new(Degrees(45.0), Degrees(45.0));
        let pos_degrees = GeodeticPosition::from((&latlong, Metres(100.0)));

        assert!(is_within_tolerance(
            pos.lat().sin().0,
            pos_degrees.lat().sin().0,
            1e-15
        ));
        assert!(is_within_tolerance(
            pos.lon().cos().0,
            pos_degrees.lon().cos().0,
            1e-15
        ));

        let pos_clone = pos;
        assert_eq!(pos_clone, pos);
        println!("GeodeticPosition: {:?}", pos);
    }

    #[test]
    fn test_geo_params_at_equator() {
        let pos = GeodeticPosition::from_radians(Radians(0.0), Radians(0.0), Metres(0.0));
        let params = WGS84_ELLIPSOID.geo_params(&pos);

        assert_eq!(ellipsoid::wgs84::A, params.rn());
        assert_eq!(
            ellipsoid::wgs84::A.0 * (1.0 - ellipsoid::wgs84::E_2),
            params.rm().0
        );
        assert_eq!(ellipsoid::wgs84::G0, params.gravity());
        assert_eq!(0.0, params.sin_lat());
        assert_eq!(1.0, params.cos_lat());
        assert_eq!(ellipsoid::wgs84::W_IE, params.w_ie());
    }

    #[test]
    fn test_geo_params_purity() {
        let pos = GeodeticPosition::from_radians(Radians(0.7), Radians(-1.2), Metres(3_000.0));

        let params1 = WGS84_ELLIPSOID.geo_params(&pos);
        let params2 = WGS84_ELLIPSOID.geo_params(&pos);
        assert_eq!(params1, params2);

        let ecef1 = WGS84_ELLIPSOID.to_ecef(&pos);
        let ecef2 = WGS84_ELLIPSOID.to_ecef(&pos);
        assert_eq!(ecef1, ecef2);

        println!("GeoParams: {:?}", params1);
    }

    #[test]
    fn test_to_ecef_at_equator() {
        let pos = GeodeticPosition::from_radians(Radians(0.0), Radians(0.0), Metres(0.0));
        let ecef = WGS84_ELLIPSOID.to_ecef(&pos);

        assert_eq!(ellipsoid::wgs84::A.0, ecef.x);
        assert_eq!(0.0, ecef.y);
        assert_eq!(0.0, ecef.z);

        // altitude moves the position radially outwards on the equator
        let pos = GeodeticPosition::from_radians(Radians(0.0), Radians(0.0), Metres(1_000.0));
        let ecef = WGS84_ELLIPSOID.to_ecef(&pos);
        assert_eq!(ellipsoid::wgs84::A.0 + 1_000.0, ecef.x);
    }
}
