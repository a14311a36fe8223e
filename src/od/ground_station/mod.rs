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

use crate::cosmic::frames::{geodetic_to_ecef, Geodetic};
use crate::io::ConfigRepr;
use crate::linalg::Vector3;
use crate::utils::between_0_360;
use serde_derive::{Deserialize, Serialize};
use std::fmt;

pub mod builtin;

/// Default elevation mask of a ground station, in degrees
pub const DEFAULT_MIN_ELEVATION_DEG: f64 = 5.0;

const fn default_min_elevation() -> f64 {
    DEFAULT_MIN_ELEVATION_DEG
}

const fn default_active() -> bool {
    true
}

/// GroundStation defines a fixed antenna on a spherical Earth.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GroundStation {
    pub id: String,
    pub name: String,
    /// in degrees
    pub latitude_deg: f64,
    /// in degrees
    pub longitude_deg: f64,
    /// in km
    pub altitude_km: f64,
    /// Elevation mask, in degrees
    #[serde(default = "default_min_elevation")]
    pub min_elevation_deg: f64,
    /// Inactive stations are ignored by the pass predictor
    #[serde(default = "default_active")]
    pub active: bool,
}

/// Azimuth, elevation and range of a target seen from a ground station.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AzElRange {
    /// Azimuth from North, positive towards East, in [0, 360) degrees
    pub azimuth_deg: f64,
    pub elevation_deg: f64,
    pub range_km: f64,
}

impl GroundStation {
    /// Initializes an active station with the default elevation mask.
    pub fn from_point(
        id: String,
        name: String,
        latitude_deg: f64,
        longitude_deg: f64,
        altitude_km: f64,
    ) -> Self {
        Self {
            id,
            name,
            latitude_deg,
            longitude_deg,
            altitude_km,
            min_elevation_deg: DEFAULT_MIN_ELEVATION_DEG,
            active: true,
        }
    }

    pub fn with_min_elevation(mut self, min_elevation_deg: f64) -> Self {
        self.min_elevation_deg = min_elevation_deg;
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn geodetic(&self) -> Geodetic {
        Geodetic::new(self.latitude_deg, self.longitude_deg, self.altitude_km)
    }

    /// Position of this station in the Earth fixed frame, in km
    pub fn position_ecef(&self) -> Vector3<f64> {
        geodetic_to_ecef(&self.geodetic())
    }

    /// Computes the azimuth, elevation and range of the provided Earth fixed position seen from
    /// this ground station, in the topocentric South-East-Zenith frame.
    pub fn azimuth_elevation_of(&self, target_ecef: &Vector3<f64>) -> AzElRange {
        self.azimuth_elevation_from(&self.position_ecef(), target_ecef)
    }

    /// Same as `azimuth_elevation_of` with the station position precomputed, so that scans over
    /// many samples only compute it once.
    pub(crate) fn azimuth_elevation_from(
        &self,
        station_ecef: &Vector3<f64>,
        target_ecef: &Vector3<f64>,
    ) -> AzElRange {
        let rho = target_ecef - station_ecef;
        let range_km = rho.norm();

        let (sin_lat, cos_lat) = self.latitude_deg.to_radians().sin_cos();
        let (sin_lon, cos_lon) = self.longitude_deg.to_radians().sin_cos();

        let south = sin_lat * cos_lon * rho.x + sin_lat * sin_lon * rho.y - cos_lat * rho.z;
        let east = -sin_lon * rho.x + cos_lon * rho.y;
        let zenith = cos_lat * cos_lon * rho.x + cos_lat * sin_lon * rho.y + sin_lat * rho.z;

        if range_km < f64::EPSILON {
            return AzElRange {
                azimuth_deg: 0.0,
                elevation_deg: 90.0,
                range_km,
            };
        }

        AzElRange {
            azimuth_deg: between_0_360(east.atan2(-south).to_degrees()),
            elevation_deg: (zenith / range_km).clamp(-1.0, 1.0).asin().to_degrees(),
            range_km,
        }
    }
}

impl AzElRange {
    /// Whether the target is at or above the provided elevation mask
    pub fn is_visible(&self, min_elevation_deg: f64) -> bool {
        self.elevation_deg >= min_elevation_deg
    }
}

impl Default for GroundStation {
    fn default() -> Self {
        Self::from_point(
            "UNDEFINED".to_string(),
            "UNDEFINED".to_string(),
            0.0,
            0.0,
            0.0,
        )
    }
}

impl ConfigRepr for GroundStation {}

impl fmt::Display for GroundStation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} [{}] (lat.: {:.4} deg    long.: {:.4} deg    alt.: {:.3} m    mask: {:.1} deg){}",
            self.name,
            self.id,
            self.latitude_deg,
            self.longitude_deg,
            self.altitude_km * 1e3,
            self.min_elevation_deg,
            if self.active { "" } else { " INACTIVE" }
        )
    }
}

impl fmt::Display for AzElRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "az.: {:.3} deg    el.: {:.3} deg    range: {:.3} km",
            self.azimuth_deg, self.elevation_deg, self.range_km
        )
    }
}
