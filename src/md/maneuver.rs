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

use super::transfer::perigee_lowering_delta_v_km_s;
use crate::cosmic::{Body, OrbitalElements};
use crate::io::ConfigRepr;
use serde_derive::{Deserialize, Serialize};
use std::fmt;

/// Perigee altitude from which the atmosphere reenters the spacecraft within days, in km
pub const DEORBIT_PERIGEE_ALTITUDE_KM: f64 = 200.0;

/// A single impulsive maneuver, or a yearly allocation when `per_year` is set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Maneuver {
    pub id: String,
    pub name: String,
    /// in m/s, per year of mission lifetime if `per_year` is set
    pub delta_v_m_s: f64,
    #[serde(default)]
    pub per_year: bool,
}

impl Maneuver {
    pub fn new(id: &str, name: &str, delta_v_m_s: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            delta_v_m_s,
            per_year: false,
        }
    }

    pub fn yearly(id: &str, name: &str, delta_v_m_s: f64) -> Self {
        Self {
            per_year: true,
            ..Self::new(id, name, delta_v_m_s)
        }
    }

    /// Delta-v of this maneuver over the mission lifetime, in m/s. Negative lifetimes and
    /// delta-v are treated as zero.
    pub fn total_delta_v_m_s(&self, lifetime_years: f64) -> f64 {
        let dv = self.delta_v_m_s.max(0.0);
        if self.per_year {
            dv * lifetime_years.max(0.0)
        } else {
            dv
        }
    }
}

impl ConfigRepr for Maneuver {}

impl fmt::Display for Maneuver {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} [{}]: {:.3} m/s{}",
            self.name,
            self.id,
            self.delta_v_m_s,
            if self.per_year { " per year" } else { "" }
        )
    }
}

/// Rule-of-thumb maneuver allocations of a low Earth orbit mission.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StandardManeuvers {
    /// Correction of the launcher dispersions, in m/s
    pub insertion_correction_m_s: f64,
    /// Drag make-up and phasing, in m/s per year
    pub station_keeping_m_s_per_year: f64,
    /// in m/s per year
    pub collision_avoidance_m_s_per_year: f64,
    /// Whether to lower the perigee for reentry at the end of the mission
    pub deorbit: bool,
}

impl Default for StandardManeuvers {
    fn default() -> Self {
        Self {
            insertion_correction_m_s: 10.0,
            station_keeping_m_s_per_year: 5.0,
            collision_avoidance_m_s_per_year: 1.0,
            deorbit: true,
        }
    }
}

impl StandardManeuvers {
    /// Builds the maneuver list of a mission on the provided Earth orbit. The deorbit burn is
    /// performed at apogee and lowers the perigee to 200 km altitude; it is omitted when the
    /// perigee is already below that.
    pub fn build(&self, elements: &OrbitalElements) -> Vec<Maneuver> {
        let mut maneuvers = vec![
            Maneuver::new(
                "insertion",
                "Insertion correction",
                self.insertion_correction_m_s,
            ),
            Maneuver::yearly(
                "station-keeping",
                "Station keeping",
                self.station_keeping_m_s_per_year,
            ),
            Maneuver::yearly(
                "collision-avoidance",
                "Collision avoidance",
                self.collision_avoidance_m_s_per_year,
            ),
        ];

        if self.deorbit {
            let dv_km_s = perigee_lowering_delta_v_km_s(
                elements,
                Body::Earth.equatorial_radius_km() + DEORBIT_PERIGEE_ALTITUDE_KM,
                Body::Earth.mu_km3_s2(),
            );
            if dv_km_s > 0.0 {
                maneuvers.push(Maneuver::new("deorbit", "Deorbit", dv_km_s * 1e3));
            } else if dv_km_s.is_nan() {
                warn!("no deorbit maneuver for invalid elements {elements}");
            }
        }

        maneuvers
    }
}
