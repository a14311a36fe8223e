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

use crate::cosmic::{Body, OrbitalElements, EARTH_J2, EARTH_RADIUS_KM, MU_EARTH_KM3_S2};
use crate::utils::{between_0_tau, sign};
use serde_derive::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::fmt;

/// Maximum number of Newton-Raphson iterations when solving Kepler's equation.
pub const KEPLER_MAX_ITERATIONS: usize = 30;
/// Convergence threshold on the Newton-Raphson correction of the eccentric anomaly, in radians.
pub const KEPLER_TOLERANCE_RAD: f64 = 1e-12;

/// Converts the true anomaly into the eccentric anomaly, both in radians in [0, 2π).
pub fn true_to_eccentric_anomaly(ta_rad: f64, ecc: f64) -> f64 {
    let (sin_half, cos_half) = (ta_rad / 2.0).sin_cos();
    between_0_tau(2.0 * ((1.0 - ecc).sqrt() * sin_half).atan2((1.0 + ecc).sqrt() * cos_half))
}

/// Converts the eccentric anomaly into the true anomaly, both in radians in [0, 2π).
pub fn eccentric_to_true_anomaly(ea_rad: f64, ecc: f64) -> f64 {
    let (sin_half, cos_half) = (ea_rad / 2.0).sin_cos();
    between_0_tau(2.0 * ((1.0 + ecc).sqrt() * sin_half).atan2((1.0 - ecc).sqrt() * cos_half))
}

/// Kepler's equation: M = E - e sin(E)
pub fn eccentric_to_mean_anomaly(ea_rad: f64, ecc: f64) -> f64 {
    ea_rad - ecc * ea_rad.sin()
}

/// Solves Kepler's equation M = E - e sin(E) for the eccentric anomaly E, in radians.
///
/// Newton-Raphson is seeded with Danby's starter E₀ = M + 0.85 e sign(sin M), and stops once the
/// correction is below [KEPLER_TOLERANCE_RAD] or after [KEPLER_MAX_ITERATIONS] iterations. In the
/// latter case, the best estimate is returned without any failure signal: this only happens for
/// eccentricities close to one, outside of the validated range e ∈ [0, 0.9].
pub fn solve_kepler_equation(ma_rad: f64, ecc: f64) -> f64 {
    let ma_bounded = between_0_tau(ma_rad);
    // Whole revolutions are added back at the end so that E - e sin(E) matches the input M.
    let revolutions = ma_rad - ma_bounded;

    let mut ea = ma_bounded + 0.85 * ecc * sign(ma_bounded.sin());
    let mut converged = false;
    for _ in 0..KEPLER_MAX_ITERATIONS {
        let residual = ea - ecc * ea.sin() - ma_bounded;
        let delta = residual / (1.0 - ecc * ea.cos());
        ea -= delta;
        if delta.abs() < KEPLER_TOLERANCE_RAD {
            converged = true;
            break;
        }
    }
    if !converged {
        trace!("Kepler's equation not converged for M = {ma_rad} rad, e = {ecc}");
    }
    ea + revolutions
}

/// Converts the mean anomaly into the true anomaly, both in radians
pub fn mean_to_true_anomaly(ma_rad: f64, ecc: f64) -> f64 {
    eccentric_to_true_anomaly(solve_kepler_equation(ma_rad, ecc), ecc)
}

/// An analytical propagator of elliptical orbits around an oblate body: the anomaly follows
/// Kepler's equation, and the node and argument of periapsis drift linearly because of J2.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeplerJ2 {
    /// Gravitational parameter of the central body, in km^3/s^2
    pub mu_km3_s2: f64,
    /// Equatorial radius of the central body, in km
    pub radius_km: f64,
    /// Second zonal harmonic of the central body (zero for pure two-body motion)
    pub j2: f64,
}

impl KeplerJ2 {
    pub fn new(mu_km3_s2: f64, radius_km: f64, j2: f64) -> Self {
        Self {
            mu_km3_s2,
            radius_km,
            j2,
        }
    }

    /// Propagator around the Earth
    pub fn earth() -> Self {
        Self::new(MU_EARTH_KM3_S2, EARTH_RADIUS_KM, EARTH_J2)
    }

    /// Propagator around the provided body
    pub fn around(body: Body) -> Self {
        Self::new(body.mu_km3_s2(), body.equatorial_radius_km(), body.j2())
    }

    /// Pure two-body propagator (J2 disabled) around the provided body
    pub fn two_body(body: Body) -> Self {
        Self::new(body.mu_km3_s2(), body.equatorial_radius_km(), 0.0)
    }

    /// Propagates the elements by `dt_s` seconds (which may be negative).
    ///
    /// Elements which are not elliptical are returned with a NaN true anomaly.
    pub fn propagate(&self, elements: &OrbitalElements, dt_s: f64) -> OrbitalElements {
        if let Err(e) = elements.validate() {
            warn!("cannot propagate: {e}");
            return OrbitalElements {
                ta_deg: f64::NAN,
                ..*elements
            };
        }

        let ecc = elements.ecc;
        let n = elements.mean_motion_rad_s(self.mu_km3_s2);

        let ea0 = true_to_eccentric_anomaly(elements.ta_deg.to_radians(), ecc);
        let ma0 = eccentric_to_mean_anomaly(ea0, ecc);
        let ma = (ma0 + n * dt_s) % TAU;
        let ta = mean_to_true_anomaly(ma, ecc);

        let rates = self.secular_rates(elements);

        OrbitalElements::new(
            elements.sma_km,
            ecc,
            elements.inc_deg,
            elements.raan_deg + (rates.raan_rad_s * dt_s).to_degrees(),
            elements.aop_deg + (rates.aop_rad_s * dt_s).to_degrees(),
            ta.to_degrees(),
        )
    }
}

impl Default for KeplerJ2 {
    fn default() -> Self {
        Self::earth()
    }
}

impl fmt::Display for KeplerJ2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Kepler + J2 (mu = {} km^3/s^2, Re = {} km, J2 = {:e})",
            self.mu_km3_s2, self.radius_km, self.j2
        )
    }
}

/// Returns the elements propagated around the Earth by `dt_s` seconds
pub fn propagate(elements: &OrbitalElements, dt_s: f64) -> OrbitalElements {
    KeplerJ2::earth().propagate(elements, dt_s)
}

#[cfg(test)]
mod ut_kepler {
    use super::*;

    #[test]
    fn test_kepler_equation_residual() {
        for ecc_i in 0..=90 {
            let ecc = f64::from(ecc_i) / 100.0;
            for ma_i in 0..360 {
                let ma = f64::from(ma_i).to_radians();
                let ea = solve_kepler_equation(ma, ecc);
                let residual = (ea - ecc * ea.sin() - ma).abs();
                assert!(residual < 1e-10, "e = {ecc}, M = {ma}: {residual:e}");
            }
        }
    }

    #[test]
    fn test_kepler_equation_outside_one_rev() {
        let ecc = 0.4;
        for ma in [-3.0, -12.5, 7.0, 40.0] {
            let ea = solve_kepler_equation(ma, ecc);
            assert!((ea - ecc * ea.sin() - ma).abs() < 1e-10, "M = {ma}");
        }
    }

    #[test]
    fn test_circular_anomalies_are_equal() {
        let ta = 1.234;
        assert!((true_to_eccentric_anomaly(ta, 0.0) - ta).abs() < 1e-14);
        assert!((solve_kepler_equation(ta, 0.0) - ta).abs() < 1e-14);
    }

    #[test]
    fn test_anomaly_round_trip() {
        for ecc in [0.0, 0.1, 0.5, 0.85] {
            for ta_deg in [0.0_f64, 30.0, 179.0, 181.0, 300.0] {
                let ta = ta_deg.to_radians();
                let ea = true_to_eccentric_anomaly(ta, ecc);
                let ma = eccentric_to_mean_anomaly(ea, ecc);
                let back = mean_to_true_anomaly(ma, ecc);
                assert!((back - ta).abs() < 1e-9, "e = {ecc}, ν = {ta_deg}");
            }
        }
    }

    #[test]
    fn test_full_period_returns_home() {
        let prop = KeplerJ2::two_body(Body::Earth);
        let kep = OrbitalElements::new(26_600.0, 0.74, 63.4, 20.0, 270.0, 33.0);
        let later = prop.propagate(&kep, kep.period_s(prop.mu_km3_s2));
        assert!((later.ta_deg - kep.ta_deg).abs() < 1e-6);
        assert_eq!(later.raan_deg, kep.raan_deg);

        let half = prop.propagate(&kep.with_ta(0.0), kep.period_s(prop.mu_km3_s2) / 2.0);
        assert!((half.ta_deg - 180.0).abs() < 1e-6);
    }

    #[test]
    fn test_backward_propagation() {
        let prop = KeplerJ2::earth();
        let kep = OrbitalElements::new(7_000.0, 0.01, 98.0, 10.0, 20.0, 30.0);
        let there = prop.propagate(&kep, 5_000.0);
        let back = prop.propagate(&there, -5_000.0);
        assert!((back.ta_deg - kep.ta_deg).abs() < 1e-8);
        assert!((back.raan_deg - kep.raan_deg).abs() < 1e-10);
        assert!((back.aop_deg - kep.aop_deg).abs() < 1e-10);
    }

    #[test]
    fn test_invalid_elements() {
        let kep = OrbitalElements::new(7_000.0, 1.5, 98.0, 10.0, 20.0, 30.0);
        assert!(propagate(&kep, 60.0).ta_deg.is_nan());
    }
}
