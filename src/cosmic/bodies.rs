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

use super::{StateVector, AU_KM, EARTH_J2, EARTH_RADIUS_KM, MU_EARTH_KM3_S2, SECONDS_PER_DAY};
use crate::cosmic::epoch::J2000_JD;
use crate::errors::{AstroError, UnknownBodySnafu};
use crate::linalg::Vector3;
use crate::utils::between_0_360;
use enum_iterator::Sequence;
use serde_derive::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The celestial bodies known to the mission design tools.
///
/// Planets are modeled on circular, coplanar heliocentric orbits: the mission design tools only
/// need a first guess of the transfer geometry, not an ephemeris.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Sequence)]
pub enum Body {
    Sun,
    Mercury,
    Venus,
    Earth,
    Moon,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Body {
    /// Gravitational parameter in km^3/s^2
    pub const fn mu_km3_s2(&self) -> f64 {
        match *self {
            Self::Sun => 1.327_124_400_18e11,
            Self::Mercury => 2.203_2e4,
            Self::Venus => 3.248_59e5,
            Self::Earth => MU_EARTH_KM3_S2,
            Self::Moon => 4.904_869_5e3,
            Self::Mars => 4.282_837e4,
            Self::Jupiter => 1.266_865_34e8,
            Self::Saturn => 3.793_118_7e7,
            Self::Uranus => 5.793_939e6,
            Self::Neptune => 6.836_529e6,
        }
    }

    /// Mean equatorial radius in km
    pub const fn equatorial_radius_km(&self) -> f64 {
        match *self {
            Self::Sun => 695_700.0,
            Self::Mercury => 2_439.7,
            Self::Venus => 6_051.8,
            Self::Earth => EARTH_RADIUS_KM,
            Self::Moon => 1_737.4,
            Self::Mars => 3_396.19,
            Self::Jupiter => 71_492.0,
            Self::Saturn => 60_268.0,
            Self::Uranus => 25_559.0,
            Self::Neptune => 24_764.0,
        }
    }

    /// Second zonal harmonic (unnormalized)
    pub const fn j2(&self) -> f64 {
        match *self {
            Self::Sun => 0.0,
            Self::Mercury => 5.03e-5,
            Self::Venus => 4.458e-6,
            Self::Earth => EARTH_J2,
            Self::Moon => 2.033e-4,
            Self::Mars => 1.960_45e-3,
            Self::Jupiter => 1.473_6e-2,
            Self::Saturn => 1.629_8e-2,
            Self::Uranus => 3.343_43e-3,
            Self::Neptune => 3.411e-3,
        }
    }

    /// The body this one orbits, if any.
    pub const fn parent(&self) -> Option<Body> {
        match *self {
            Self::Sun => None,
            Self::Moon => Some(Self::Earth),
            _ => Some(Self::Sun),
        }
    }

    /// Mean distance to the parent body in km (zero for the Sun)
    pub fn orbit_radius_km(&self) -> f64 {
        match *self {
            Self::Sun => 0.0,
            Self::Mercury => 0.387_099_27 * AU_KM,
            Self::Venus => 0.723_335_66 * AU_KM,
            Self::Earth => 1.000_002_61 * AU_KM,
            Self::Moon => 384_400.0,
            Self::Mars => 1.523_710_34 * AU_KM,
            Self::Jupiter => 5.202_887_00 * AU_KM,
            Self::Saturn => 9.536_675_94 * AU_KM,
            Self::Uranus => 19.189_164_64 * AU_KM,
            Self::Neptune => 30.069_922_76 * AU_KM,
        }
    }

    /// Mean longitude at J2000 in degrees, from the JPL approximate planetary positions
    pub const fn mean_longitude_j2000_deg(&self) -> f64 {
        match *self {
            Self::Sun => 0.0,
            Self::Mercury => 252.250_323_50,
            Self::Venus => 181.979_099_50,
            Self::Earth => 100.464_571_66,
            Self::Moon => 218.316_65,
            Self::Mars => 355.446_567_95,
            Self::Jupiter => 34.396_440_51,
            Self::Saturn => 49.954_244_23,
            Self::Uranus => 313.238_104_51,
            Self::Neptune => 304.879_970_31,
        }
    }

    /// Mean motion around the parent body in rad/s, or zero for the Sun
    pub fn mean_motion_rad_s(&self) -> f64 {
        match self.parent() {
            Some(parent) => (parent.mu_km3_s2() / self.orbit_radius_km().powi(3)).sqrt(),
            None => 0.0,
        }
    }

    /// Orbital period around the parent body in seconds, infinite for the Sun
    pub fn orbital_period_s(&self) -> f64 {
        std::f64::consts::TAU / self.mean_motion_rad_s()
    }

    /// Radius of the sphere of influence (Laplace) in km, infinite for the Sun
    pub fn sphere_of_influence_km(&self) -> f64 {
        match self.parent() {
            Some(parent) => {
                self.orbit_radius_km() * (self.mu_km3_s2() / parent.mu_km3_s2()).powf(0.4)
            }
            None => f64::INFINITY,
        }
    }

    /// Returns the state of this body around its parent on its circular orbit, in the parent's
    /// orbital plane. The Sun sits at the origin.
    pub fn planar_state(&self, jd: f64) -> StateVector {
        let radius = self.orbit_radius_km();
        if radius <= 0.0 {
            return StateVector::new(Vector3::zeros(), Vector3::zeros());
        }
        let n = self.mean_motion_rad_s();
        let days = jd - J2000_JD;
        let longitude = (between_0_360(self.mean_longitude_j2000_deg())).to_radians()
            + n * days * SECONDS_PER_DAY;
        let (sin_l, cos_l) = longitude.sin_cos();
        let speed = n * radius;
        StateVector::new(
            Vector3::new(radius * cos_l, radius * sin_l, 0.0),
            Vector3::new(-speed * sin_l, speed * cos_l, 0.0),
        )
    }

    /// Returns the human name
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Sun => "Sun",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Earth => "Earth",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
        }
    }
}

impl Default for Body {
    fn default() -> Self {
        Self::Earth
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Body {
    type Err = AstroError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        enum_iterator::all::<Body>()
            .find(|body| body.name().eq_ignore_ascii_case(name.trim()))
            .or_else(|| name.trim().eq_ignore_ascii_case("luna").then_some(Body::Moon))
            .ok_or_else(|| {
                UnknownBodySnafu {
                    name: name.to_string(),
                }
                .build()
            })
    }
}
