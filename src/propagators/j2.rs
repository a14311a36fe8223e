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

use super::KeplerJ2;
use crate::cosmic::{OrbitalElements, SECONDS_PER_DAY, SUN_SYNC_RAAN_RATE_DEG_DAY};
use serde_derive::{Deserialize, Serialize};

/// Maximum difference between the nodal precession rate and the mean motion of the Sun for an
/// orbit to be considered sun-synchronous, in degrees per day.
pub const SUN_SYNC_TOLERANCE_DEG_DAY: f64 = 0.05;

/// First-order J2 secular drift rates of the orbital plane and of the line of apsides.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SecularRates {
    /// Nodal precession rate, in rad/s
    pub raan_rad_s: f64,
    /// Apsidal precession rate, in rad/s
    pub aop_rad_s: f64,
}

impl SecularRates {
    /// Nodal precession rate, in degrees per day
    pub fn raan_deg_day(&self) -> f64 {
        self.raan_rad_s.to_degrees() * SECONDS_PER_DAY
    }

    /// Apsidal precession rate, in degrees per day
    pub fn aop_deg_day(&self) -> f64 {
        self.aop_rad_s.to_degrees() * SECONDS_PER_DAY
    }
}

impl KeplerJ2 {
    /// Returns n J2 (Re / p)^2 in rad/s, the common factor of the secular rates
    fn j2_factor(&self, sma_km: f64, ecc: f64) -> f64 {
        let n = (self.mu_km3_s2 / sma_km.powi(3)).sqrt();
        let p = sma_km * (1.0 - ecc.powi(2));
        n * self.j2 * (self.radius_km / p).powi(2)
    }

    /// Computes the J2 secular drift of the node and of the argument of periapsis.
    ///
    /// dΩ/dt = -1.5 n J2 (Re/p)² cos(i) and dω/dt = 0.75 n J2 (Re/p)² (5 cos²(i) - 1).
    /// Non-elliptical elements return NaN rates.
    pub fn secular_rates(&self, elements: &OrbitalElements) -> SecularRates {
        if !elements.is_elliptical() {
            return SecularRates {
                raan_rad_s: f64::NAN,
                aop_rad_s: f64::NAN,
            };
        }
        let k = self.j2_factor(elements.sma_km, elements.ecc);
        let cos_i = elements.inc_deg.to_radians().cos();
        SecularRates {
            raan_rad_s: -1.5 * k * cos_i,
            aop_rad_s: 0.75 * k * (5.0 * cos_i.powi(2) - 1.0),
        }
    }

    /// Returns whether the nodal precession of these elements matches the mean motion of the Sun
    /// within [SUN_SYNC_TOLERANCE_DEG_DAY].
    pub fn is_sun_synchronous(&self, elements: &OrbitalElements) -> bool {
        let drift = self.secular_rates(elements).raan_deg_day();
        (drift - SUN_SYNC_RAAN_RATE_DEG_DAY).abs() <= SUN_SYNC_TOLERANCE_DEG_DAY
    }

    /// Returns the inclination in degrees for which the nodal precession matches the mean motion of
    /// the Sun, i.e. cos(i) = -Ω̇ / (1.5 n J2 (Re/p)²).
    ///
    /// Returns NaN when no such inclination exists (|cos(i)| > 1), typically for high orbits.
    pub fn sun_sync_inclination_deg(&self, sma_km: f64, ecc: f64) -> f64 {
        if sma_km <= 0.0 || !(0.0..1.0).contains(&ecc) {
            return f64::NAN;
        }
        let target_rad_s = SUN_SYNC_RAAN_RATE_DEG_DAY.to_radians() / SECONDS_PER_DAY;
        let cos_i = -target_rad_s / (1.5 * self.j2_factor(sma_km, ecc));
        if cos_i.abs() > 1.0 || !cos_i.is_finite() {
            debug!("no sun-synchronous inclination for sma = {sma_km} km, ecc = {ecc}");
            f64::NAN
        } else {
            cos_i.acos().to_degrees()
        }
    }
}

/// Returns the sun-synchronous inclination in degrees around the Earth, or NaN if none exists.
pub fn sun_sync_inclination(sma_km: f64, ecc: f64) -> f64 {
    KeplerJ2::earth().sun_sync_inclination_deg(sma_km, ecc)
}
