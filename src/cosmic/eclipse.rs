/*
    Tycho, small-satellite mission design
    Copyright (C) the Tycho developers

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU Affero General Public License for more details.

    You should have received a copy of the GNU Affero General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use super::epoch::{DAYS_PER_JULIAN_CENTURY, J2000_JD};
use super::OrbitalElements;
use crate::linalg::Vector3;
use std::f64::consts::PI;

/// Returns the fraction of a circular orbit spent in the cylindrical shadow of the central body.
///
/// The shadow is a cylinder of the body's radius, anti-sunward. `beta_deg` is the angle between
/// the orbit plane and the direction of the Sun: beyond asin(R / r), the orbit never enters the
/// shadow.
pub fn eclipse_fraction(sma_km: f64, beta_deg: f64, body_radius_km: f64) -> f64 {
    if sma_km <= body_radius_km || body_radius_km <= 0.0 {
        return 0.0;
    }
    let beta = beta_deg.to_radians();
    let beta_star = (body_radius_km / sma_km).asin();
    if beta.abs() >= beta_star {
        return 0.0;
    }
    let ratio = (sma_km.powi(2) - body_radius_km.powi(2)).sqrt() / (sma_km * beta.cos());
    ratio.clamp(-1.0, 1.0).acos() / PI
}

/// Worst case eclipse fraction, when the Sun lies in the orbit plane (β = 0).
pub fn max_eclipse_fraction(sma_km: f64, body_radius_km: f64) -> f64 {
    eclipse_fraction(sma_km, 0.0, body_radius_km)
}

/// Low precision unit vector from the Earth to the Sun in the mean equator frame (Astronomical
/// Almanac, about 0.01 degree accuracy between 1950 and 2050).
pub fn sun_direction(jd_ut1: f64) -> Vector3<f64> {
    let t = (jd_ut1 - J2000_JD) / DAYS_PER_JULIAN_CENTURY;
    let mean_longitude = 280.460 + 36_000.771 * t;
    let mean_anomaly = (357.529_109_2 + 35_999.050_34 * t).to_radians();
    let ecliptic_longitude = (mean_longitude
        + 1.914_666_471 * mean_anomaly.sin()
        + 0.019_994_643 * (2.0 * mean_anomaly).sin())
    .to_radians();
    let obliquity = (23.439_291 - 0.013_004_2 * t).to_radians();

    let (sin_l, cos_l) = ecliptic_longitude.sin_cos();
    Vector3::new(cos_l, obliquity.cos() * sin_l, obliquity.sin() * sin_l)
}

/// Angle between the orbit plane and the Sun direction, in degrees.
pub fn beta_angle_deg(elements: &OrbitalElements, sun_unit: &Vector3<f64>) -> f64 {
    let (sin_i, cos_i) = elements.inc_deg.to_radians().sin_cos();
    let (sin_raan, cos_raan) = elements.raan_deg.to_radians().sin_cos();
    let orbit_normal = Vector3::new(sin_i * sin_raan, -sin_i * cos_raan, cos_i);
    let sun = sun_unit.normalize();
    orbit_normal.dot(&sun).clamp(-1.0, 1.0).asin().to_degrees()
}
