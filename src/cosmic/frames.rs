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

use super::EARTH_RADIUS_KM;
use crate::linalg::Vector3;
use crate::utils::{between_pm_180, r3};
use serde_derive::{Deserialize, Serialize};
use std::fmt;

/// A point above a spherical body: geocentric latitude and longitude in degrees, altitude in km
/// above the equatorial radius.
///
/// This is NOT a WGS84 geodetic position: the body is a sphere of its equatorial radius.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Geodetic {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub altitude_km: f64,
}

impl Geodetic {
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_km: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_km,
        }
    }
}

impl fmt::Display for Geodetic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "lat.: {:.4} deg    long.: {:.4} deg    alt.: {:.3} km",
            self.latitude_deg, self.longitude_deg, self.altitude_km
        )
    }
}

/// Rotates an inertial position into the Earth-fixed frame, given the Greenwich sidereal angle
/// in radians.
pub fn eci_to_ecef(r_eci: &Vector3<f64>, gmst_rad: f64) -> Vector3<f64> {
    r3(gmst_rad) * r_eci
}

/// Rotates an Earth-fixed position into the inertial frame, given the Greenwich sidereal angle
/// in radians.
pub fn ecef_to_eci(r_ecef: &Vector3<f64>, gmst_rad: f64) -> Vector3<f64> {
    r3(-gmst_rad) * r_ecef
}

/// Converts an Earth-fixed position into latitude, longitude and altitude over a spherical Earth:
/// latitude = asin(z / r) and altitude = r - Re.
pub fn ecef_to_geodetic(r_ecef: &Vector3<f64>) -> Geodetic {
    ecef_to_geodetic_sphere(r_ecef, EARTH_RADIUS_KM)
}

/// Converts a body-fixed position into latitude, longitude and altitude over a sphere of the
/// provided radius.
pub fn ecef_to_geodetic_sphere(r_ecef: &Vector3<f64>, radius_km: f64) -> Geodetic {
    let rmag = r_ecef.norm();
    if rmag <= 0.0 {
        return Geodetic::new(0.0, 0.0, -radius_km);
    }
    Geodetic {
        latitude_deg: (r_ecef[2] / rmag).clamp(-1.0, 1.0).asin().to_degrees(),
        longitude_deg: between_pm_180(r_ecef[1].atan2(r_ecef[0]).to_degrees()),
        altitude_km: rmag - radius_km,
    }
}

/// Converts latitude, longitude and altitude over a spherical Earth into an Earth-fixed position.
pub fn geodetic_to_ecef(point: &Geodetic) -> Vector3<f64> {
    geodetic_to_ecef_sphere(point, EARTH_RADIUS_KM)
}

/// Converts latitude, longitude and altitude over a sphere of the provided radius into a
/// body-fixed position.
pub fn geodetic_to_ecef_sphere(point: &Geodetic, radius_km: f64) -> Vector3<f64> {
    let (sin_lat, cos_lat) = point.latitude_deg.to_radians().sin_cos();
    let (sin_lon, cos_lon) = point.longitude_deg.to_radians().sin_cos();
    let r = radius_km + point.altitude_km;
    Vector3::new(r * cos_lat * cos_lon, r * cos_lat * sin_lon, r * sin_lat)
}

/// Returns the sub-satellite point of an inertial position
pub fn eci_to_geodetic(r_eci: &Vector3<f64>, gmst_rad: f64) -> Geodetic {
    ecef_to_geodetic(&eci_to_ecef(r_eci, gmst_rad))
}
