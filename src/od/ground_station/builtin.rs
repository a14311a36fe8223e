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

use super::*;

impl GroundStation {
    pub fn dss65_madrid(min_elevation_deg: f64) -> Self {
        Self {
            id: "DSS-65".to_string(),
            name: "Madrid".to_string(),
            latitude_deg: 40.427_222,
            longitude_deg: 4.250_556,
            altitude_km: 0.834_939,
            min_elevation_deg,
            active: true,
        }
    }

    pub fn dss34_canberra(min_elevation_deg: f64) -> Self {
        Self {
            id: "DSS-34".to_string(),
            name: "Canberra".to_string(),
            latitude_deg: -35.398_333,
            longitude_deg: 148.981_944,
            altitude_km: 0.691_750,
            min_elevation_deg,
            active: true,
        }
    }

    pub fn dss13_goldstone(min_elevation_deg: f64) -> Self {
        Self {
            id: "DSS-13".to_string(),
            name: "Goldstone".to_string(),
            latitude_deg: 35.247_164,
            longitude_deg: 243.205,
            altitude_km: 1.071_149_04,
            min_elevation_deg,
            active: true,
        }
    }

    /// The three Deep Space Network complexes, all with the same elevation mask
    pub fn dsn(min_elevation_deg: f64) -> Vec<Self> {
        vec![
            Self::dss65_madrid(min_elevation_deg),
            Self::dss34_canberra(min_elevation_deg),
            Self::dss13_goldstone(min_elevation_deg),
        ]
    }
}
