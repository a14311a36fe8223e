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

use super::{
    stumpff, LambertSolution, TransferKind, Vector3, FD_STEP_Z, LAMBERT_EPSILON_A,
    LAMBERT_EPSILON_TIME, MAX_ITERATIONS, MAX_STEP_Z, Z_MAX, Z_MIN,
};
use crate::errors::{
    DegeneratePositionSnafu, InvalidTimeOfFlightSnafu, LambertError, MaxIterReachedSnafu,
    TargetsTooCloseSnafu,
};
use snafu::ensure;
use std::f64::consts::TAU;

/// Solve the Lambert boundary problem with the universal variable formulation.
///
/// Given the initial and final radii, a time of flight, and a gravitational parameter, it returns
/// the initial and final velocities of the single revolution transfer. The universal variable z
/// is found with a Newton iteration whose derivative is a forward finite difference of the time
/// of flight (backward when the forward point is not reachable), with the correction clamped to
/// +/- 5 and z kept within [-50, 200].
///
/// The iteration stops when the time of flight matches to within 1e-8 seconds. Over interplanetary
/// durations this is a few ULP of the time of flight, so some transfers end in `MaxIterReached`.
///
/// # Errors
/// + `TargetsTooClose` if the transfer angle is 180 degrees (|A| < 1e-10), since the transfer plane
///   is undefined;
/// + `MaxIterReached` after 100 iterations;
/// + `InvalidTimeOfFlight` and `DegeneratePosition` for nonsensical inputs.
pub fn universal(
    r_init: Vector3<f64>,
    r_final: Vector3<f64>,
    tof_s: f64,
    mu_km3_s2: f64,
    kind: TransferKind,
) -> Result<LambertSolution, LambertError> {
    ensure!(
        tof_s > 0.0 && tof_s.is_finite(),
        InvalidTimeOfFlightSnafu { tof_s }
    );

    let r_init_norm = r_init.norm();
    let r_final_norm = r_final.norm();
    ensure!(
        r_init_norm > 0.0 && r_final_norm > 0.0,
        DegeneratePositionSnafu
    );

    // Angle in [0, π] between both positions, exactly π for antiparallel vectors
    let dnu = r_init.cross(&r_final).norm().atan2(r_init.dot(&r_final));
    let cos_dnu = dnu.cos();
    let dm = kind.direction_of_motion(&r_init, &r_final);

    let transfer_angle = if dm > 0.0 { dnu } else { TAU - dnu };

    let a = dm * (r_init_norm * r_final_norm * (1.0 + cos_dnu)).sqrt();
    ensure!(a.abs() >= LAMBERT_EPSILON_A, TargetsTooCloseSnafu { a });

    let sqrt_mu = mu_km3_s2.sqrt();

    // Auxiliary variable y, or None when this z is not reachable with this geometry
    let y_of = |z: f64| -> Option<(f64, f64, f64)> {
        let (c2, c3) = stumpff(z);
        let y = r_init_norm + r_final_norm + a * (z * c3 - 1.0) / c2.sqrt();
        if y < 0.0 || !y.is_finite() {
            None
        } else {
            Some((y, c2, c3))
        }
    };

    let tof_of = |y: f64, c2: f64, c3: f64| -> f64 {
        let chi = (y / c2).sqrt();
        (chi.powi(3) * c3 + a * y.sqrt()) / sqrt_mu
    };

    let mut z = 0.0;

    for iter in 0..MAX_ITERATIONS {
        let (y, c2, c3) = match y_of(z) {
            Some(aux) => aux,
            None => {
                z += 0.5;
                trace!("[lambert] iter {iter}: y < 0, z moved to {z}");
                continue;
            }
        };

        let cur_tof = tof_of(y, c2, c3);
        let residual = cur_tof - tof_s;

        trace!("[lambert] iter {iter}: z = {z:.12}  tof = {cur_tof:.9} s  residual = {residual:e} s");

        if residual.abs() < LAMBERT_EPSILON_TIME {
            let f = 1.0 - y / r_init_norm;
            let g = a * (y / mu_km3_s2).sqrt();
            let g_dot = 1.0 - y / r_final_norm;

            debug!(
                "[lambert] converged in {} iterations (z = {z}, dnu = {:.6} deg)",
                iter + 1,
                transfer_angle.to_degrees()
            );

            return Ok(LambertSolution {
                v_init: (r_final - f * r_init) / g,
                v_final: (g_dot * r_final - r_init) / g,
                transfer_angle_deg: transfer_angle.to_degrees(),
                z,
                iterations: iter + 1,
            });
        }

        let deriv = match y_of(z + FD_STEP_Z) {
            Some((y_fwd, c2_fwd, c3_fwd)) => (tof_of(y_fwd, c2_fwd, c3_fwd) - cur_tof) / FD_STEP_Z,
            None => match y_of(z - FD_STEP_Z) {
                Some((y_bwd, c2_bwd, c3_bwd)) => {
                    (cur_tof - tof_of(y_bwd, c2_bwd, c3_bwd)) / FD_STEP_Z
                }
                None => 0.0,
            },
        };

        // The time of flight increases with z: without a usable slope, take the largest step
        // towards the target.
        let step = if deriv > 0.0 && deriv.is_finite() {
            (-residual / deriv).clamp(-MAX_STEP_Z, MAX_STEP_Z)
        } else if residual < 0.0 {
            MAX_STEP_Z
        } else {
            -MAX_STEP_Z
        };

        z = (z + step).clamp(Z_MIN, Z_MAX);
    }

    MaxIterReachedSnafu {
        iter: MAX_ITERATIONS,
    }
    .fail()
}
