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

use super::Body;
use crate::linalg::Vector3;
use enum_iterator::Sequence;
use serde_derive::{Deserialize, Serialize};
use std::fmt;

/// Circular restricted three-body systems for which Lagrange points are computed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Sequence)]
pub enum ThreeBodySystem {
    SunEarth,
    EarthMoon,
}

impl ThreeBodySystem {
    pub const fn primary(&self) -> Body {
        match *self {
            Self::SunEarth => Body::Sun,
            Self::EarthMoon => Body::Earth,
        }
    }

    pub const fn secondary(&self) -> Body {
        match *self {
            Self::SunEarth => Body::Earth,
            Self::EarthMoon => Body::Moon,
        }
    }

    /// Mass ratio of the secondary to the total mass of the system
    pub fn mass_ratio(&self) -> f64 {
        let m1 = self.primary().mu_km3_s2();
        let m2 = self.secondary().mu_km3_s2();
        m2 / (m1 + m2)
    }

    /// Distance between the primary and the secondary, in km
    pub fn separation_km(&self) -> f64 {
        self.secondary().orbit_radius_km()
    }
}

impl fmt::Display for ThreeBodySystem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.primary(), self.secondary())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Sequence)]
pub enum LagrangePoint {
    L1,
    L2,
    L3,
    L4,
    L5,
}

impl LagrangePoint {
    /// Position of this Lagrange point in the frame rotating with the system, centered on the
    /// primary with the secondary on the +X axis, in km.
    ///
    /// L1 and L2 use the Hill sphere approximation, L3 the first order expansion in the mass
    /// ratio, and L4 and L5 form equilateral triangles with both bodies.
    pub fn position_km(&self, system: ThreeBodySystem) -> Vector3<f64> {
        let sep = system.separation_km();
        let mu = system.mass_ratio();
        let hill = sep * (mu / 3.0).cbrt();
        let (sin60, cos60) = 60.0_f64.to_radians().sin_cos();
        match *self {
            Self::L1 => Vector3::new(sep - hill, 0.0, 0.0),
            Self::L2 => Vector3::new(sep + hill, 0.0, 0.0),
            Self::L3 => Vector3::new(-sep * (1.0 + 5.0 * mu / 12.0), 0.0, 0.0),
            Self::L4 => Vector3::new(sep * cos60, sep * sin60, 0.0),
            Self::L5 => Vector3::new(sep * cos60, -sep * sin60, 0.0),
        }
    }

    /// Distance from the primary body, in km
    pub fn distance_from_primary_km(&self, system: ThreeBodySystem) -> f64 {
        self.position_km(system).norm()
    }

    /// Distance from the secondary body, in km
    pub fn distance_from_secondary_km(&self, system: ThreeBodySystem) -> f64 {
        (self.position_km(system) - Vector3::new(system.separation_km(), 0.0, 0.0)).norm()
    }

    /// Whether this point is linearly stable (only L4 and L5 are)
    pub const fn is_stable(&self) -> bool {
        matches!(*self, Self::L4 | Self::L5)
    }
}

impl fmt::Display for LagrangePoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self:?}")
    }
}
