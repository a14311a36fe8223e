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

use crate::linalg::Vector3;
use serde_derive::{Deserialize, Serialize};
use std::fmt;

mod porkchop;
mod universal;

pub use porkchop::{PorkchopCell, PorkchopConfig, PorkchopGrid};
pub use universal::universal;

/// Maximum number of Newton iterations of the Lambert solver
pub const MAX_ITERATIONS: usize = 100;
/// Convergence tolerance on the time of flight, in seconds
pub const LAMBERT_EPSILON_TIME: f64 = 1e-8;
/// Below this magnitude of A, the transfer plane is undefined (transfer of 180 degrees)
pub const LAMBERT_EPSILON_A: f64 = 1e-10;
/// Step of the finite difference derivative of the time of flight with respect to z
const FD_STEP_Z: f64 = 1e-4;
/// Largest Newton correction of z in a single iteration
const MAX_STEP_Z: f64 = 5.0;
const Z_MIN: f64 = -50.0;
const Z_MAX: f64 = 200.0;

/// Define the transfer kind for a Lambert.
///
/// `ShortWay` and `LongWay` select the geometric arc (below or above 180 degrees) regardless of
/// the orbit normal, so a short way transfer between retrograde positions is itself retrograde.
/// Only `Auto` reads the sign of (r1 × r2)·z, picking the arc flown prograde.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransferKind {
    /// Short way if the angular momentum of the transfer points north (prograde), long way otherwise
    #[default]
    Auto,
    ShortWay,
    LongWay,
}

impl TransferKind {
    /// Direction of motion: +1 for the short way and -1 for the long way
    fn direction_of_motion(self, r_init: &Vector3<f64>, r_final: &Vector3<f64>) -> f64 {
        match self {
            TransferKind::Auto => {
                if r_init.cross(r_final).z >= 0.0 {
                    1.0
                } else {
                    -1.0
                }
            }
            TransferKind::ShortWay => 1.0,
            TransferKind::LongWay => -1.0,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LambertSolution {
    /// Velocity at the initial position, in km/s
    pub v_init: Vector3<f64>,
    /// Velocity at the final position, in km/s
    pub v_final: Vector3<f64>,
    /// Angle swept between both positions, in degrees: below 180 on the short way and above on
    /// the long way, whatever the direction of the orbit normal
    pub transfer_angle_deg: f64,
    /// Converged universal variable (square of the change in eccentric anomaly when elliptical)
    pub z: f64,
    pub iterations: usize,
}

impl LambertSolution {
    /// Hyperbolic excess velocity needed to leave a body moving at `v_body`
    pub fn v_inf_init(&self, v_body: &Vector3<f64>) -> Vector3<f64> {
        self.v_init - v_body
    }

    /// Hyperbolic excess velocity on arrival at a body moving at `v_body`
    pub fn v_inf_final(&self, v_body: &Vector3<f64>) -> Vector3<f64> {
        self.v_final - v_body
    }

    /// Characteristic energy of the departure, in km^2/s^2
    pub fn c3_km2_s2(&self, v_body: &Vector3<f64>) -> f64 {
        self.v_inf_init(v_body).norm_squared()
    }
}

impl fmt::Display for LambertSolution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "v_init = [{:.6}, {:.6}, {:.6}] km/s    v_final = [{:.6}, {:.6}, {:.6}] km/s    dnu = {:.3} deg (z = {:.6}, {} iter.)",
            self.v_init.x,
            self.v_init.y,
            self.v_init.z,
            self.v_final.x,
            self.v_final.y,
            self.v_final.z,
            self.transfer_angle_deg,
            self.z,
            self.iterations
        )
    }
}

/// Stumpff functions c2 and c3 of the universal variable z.
///
/// Trigonometric for elliptical transfers (z > 0), hyperbolic for z < 0, and a truncated series
/// around zero (c2 = 1/2, c3 = 1/6 at the parabola).
pub fn stumpff(z: f64) -> (f64, f64) {
    if z > 1e-3 {
        let sqrt_z = z.sqrt();
        let (s, c) = sqrt_z.sin_cos();
        ((1.0 - c) / z, (sqrt_z - s) / (z * sqrt_z))
    } else if z < -1e-3 {
        let sqrt_z = (-z).sqrt();
        (
            (1.0 - sqrt_z.cosh()) / z,
            (sqrt_z.sinh() - sqrt_z) / (-z * sqrt_z),
        )
    } else {
        (
            0.5 - z / 24.0 + z * z / 720.0,
            1.0 / 6.0 - z / 120.0 + z * z / 5040.0,
        )
    }
}
