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

use crate::cosmic::STD_GRAVITY;
use crate::io::ConfigRepr;
use enum_iterator::Sequence;
use serde_derive::{Deserialize, Serialize};
use std::fmt;

/// Families of small-satellite propulsion systems.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Sequence)]
pub enum PropulsionKind {
    ColdGas,
    /// Catalytic hydrazine
    Monopropellant,
    /// AF-M315E / LMP-103S class
    GreenMonopropellant,
    Bipropellant,
    Solid,
    HallEffect,
    GriddedIon,
    Electrospray,
}

impl PropulsionKind {
    /// Typical specific impulse of this kind of system, in seconds
    pub const fn typical_isp_s(&self) -> f64 {
        match *self {
            Self::ColdGas => 70.0,
            Self::Monopropellant => 220.0,
            Self::GreenMonopropellant => 250.0,
            Self::Bipropellant => 310.0,
            Self::Solid => 280.0,
            Self::HallEffect => 1_500.0,
            Self::GriddedIon => 3_000.0,
            Self::Electrospray => 2_000.0,
        }
    }

    /// Whether the system is electric, i.e. low thrust
    pub const fn is_electric(&self) -> bool {
        matches!(
            *self,
            Self::HallEffect | Self::GriddedIon | Self::Electrospray
        )
    }
}

impl fmt::Display for PropulsionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            Self::ColdGas => "cold gas",
            Self::Monopropellant => "monopropellant",
            Self::GreenMonopropellant => "green monopropellant",
            Self::Bipropellant => "bipropellant",
            Self::Solid => "solid motor",
            Self::HallEffect => "Hall effect",
            Self::GriddedIon => "gridded ion",
            Self::Electrospray => "electrospray",
        };
        write!(f, "{name}")
    }
}

/// The propulsion system of a spacecraft.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropulsionConfig {
    pub kind: PropulsionKind,
    /// Specific impulse, in seconds
    pub isp_s: f64,
    /// in kg
    pub propellant_mass_kg: f64,
}

impl PropulsionConfig {
    /// Initializes a propulsion system with the typical specific impulse of its kind
    pub fn from_kind(kind: PropulsionKind, propellant_mass_kg: f64) -> Self {
        Self {
            kind,
            isp_s: kind.typical_isp_s(),
            propellant_mass_kg,
        }
    }

    pub fn with_isp(mut self, isp_s: f64) -> Self {
        self.isp_s = isp_s;
        self
    }

    /// Effective exhaust velocity, in m/s
    pub fn exhaust_velocity_m_s(&self) -> f64 {
        self.isp_s * STD_GRAVITY
    }

    /// Delta-v available to a spacecraft of the provided dry mass, in m/s
    pub fn available_delta_v_m_s(&self, dry_mass_kg: f64) -> f64 {
        available_delta_v(self.isp_s, dry_mass_kg, self.propellant_mass_kg)
    }
}

impl ConfigRepr for PropulsionConfig {}

impl fmt::Display for PropulsionConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} (Isp = {:.1} s, propellant = {:.3} kg)",
            self.kind, self.isp_s, self.propellant_mass_kg
        )
    }
}

/// Tsiolkovsky's rocket equation: delta-v in m/s from the specific impulse and the dry and
/// propellant masses. Any non-positive input yields zero.
pub fn available_delta_v(isp_s: f64, dry_mass_kg: f64, propellant_mass_kg: f64) -> f64 {
    if !(isp_s > 0.0 && dry_mass_kg > 0.0 && propellant_mass_kg > 0.0) {
        return 0.0;
    }
    isp_s * STD_GRAVITY * ((dry_mass_kg + propellant_mass_kg) / dry_mass_kg).ln()
}

/// Propellant mass in kg needed to impart `delta_v_m_s` on a spacecraft whose mass at the end of
/// the burn is `dry_mass_kg`. Invalid specific impulse or dry mass, or a non-positive delta-v,
/// yield zero.
pub fn propellant_for_delta_v(delta_v_m_s: f64, isp_s: f64, dry_mass_kg: f64) -> f64 {
    if !(isp_s > 0.0 && dry_mass_kg > 0.0 && delta_v_m_s > 0.0) {
        return 0.0;
    }
    dry_mass_kg * (delta_v_m_s / (isp_s * STD_GRAVITY)).exp_m1()
}
