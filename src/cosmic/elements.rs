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
use crate::errors::{AstroError, NonPositiveMuSnafu, NonPositiveSmaSnafu, NotEllipticalSnafu};
use crate::linalg::Vector3;
use crate::propagators::{eccentric_to_mean_anomaly, true_to_eccentric_anomaly};
use crate::utils::{between_0_360, r1, r3};
use serde_derive::{Deserialize, Serialize};
use snafu::ensure;
use std::f64::consts::TAU;
use std::fmt;

/// Tolerance under which an orbit is considered circular or equatorial when converting from
/// Cartesian to Keplerian elements
const ECC_EPSILON: f64 = 1e-11;

/// Classical orbital elements of an elliptical orbit.
///
/// All angles are in degrees and wrapped in [0, 360). This is a value type: changing any element
/// returns a new instance.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    /// Semi-major axis, in km
    pub sma_km: f64,
    /// Eccentricity, only elliptical orbits (0 <= e < 1) are supported
    pub ecc: f64,
    /// Inclination, in degrees
    pub inc_deg: f64,
    /// Right ascension of the ascending node, in degrees
    pub raan_deg: f64,
    /// Argument of periapsis, in degrees
    pub aop_deg: f64,
    /// True anomaly, in degrees
    pub ta_deg: f64,
}

impl OrbitalElements {
    /// Builds new elements, wrapping all angles in [0, 360). No validation is performed, refer to
    /// [OrbitalElements::try_new] for a validated initializer.
    pub fn new(sma_km: f64, ecc: f64, inc_deg: f64, raan_deg: f64, aop_deg: f64, ta_deg: f64) -> Self {
        Self {
            sma_km,
            ecc,
            inc_deg: between_0_360(inc_deg),
            raan_deg: between_0_360(raan_deg),
            aop_deg: between_0_360(aop_deg),
            ta_deg: between_0_360(ta_deg),
        }
    }

    /// Builds new elements, returning an error if they do not describe an elliptical orbit.
    pub fn try_new(
        sma_km: f64,
        ecc: f64,
        inc_deg: f64,
        raan_deg: f64,
        aop_deg: f64,
        ta_deg: f64,
    ) -> Result<Self, AstroError> {
        let me = Self::new(sma_km, ecc, inc_deg, raan_deg, aop_deg, ta_deg);
        me.validate()?;
        Ok(me)
    }

    /// Circular orbit at the provided altitude above the equatorial radius of the body
    pub fn circular(altitude_km: f64, inc_deg: f64, raan_deg: f64, ta_deg: f64, body: Body) -> Self {
        Self::new(
            body.equatorial_radius_km() + altitude_km,
            0.0,
            inc_deg,
            raan_deg,
            0.0,
            ta_deg,
        )
    }

    /// Returns an error if these elements are not those of an elliptical orbit.
    pub fn validate(&self) -> Result<(), AstroError> {
        ensure!(
            self.sma_km > 0.0 && self.sma_km.is_finite(),
            NonPositiveSmaSnafu {
                sma_km: self.sma_km
            }
        );
        ensure!(
            (0.0..1.0).contains(&self.ecc),
            NotEllipticalSnafu { ecc: self.ecc }
        );
        Ok(())
    }

    /// Returns whether these elements describe an elliptical orbit (a > 0 and 0 <= e < 1)
    pub fn is_elliptical(&self) -> bool {
        self.validate().is_ok()
    }

    /// Returns a copy of these elements with the provided semi-major axis
    pub fn with_sma(self, sma_km: f64) -> Self {
        Self { sma_km, ..self }
    }

    /// Returns a copy of these elements with the provided eccentricity
    pub fn with_ecc(self, ecc: f64) -> Self {
        Self { ecc, ..self }
    }

    /// Returns a copy of these elements with the provided inclination
    pub fn with_inc(self, inc_deg: f64) -> Self {
        Self {
            inc_deg: between_0_360(inc_deg),
            ..self
        }
    }

    /// Returns a copy of these elements with the provided RAAN
    pub fn with_raan(self, raan_deg: f64) -> Self {
        Self {
            raan_deg: between_0_360(raan_deg),
            ..self
        }
    }

    /// Returns a copy of these elements with the provided argument of periapsis
    pub fn with_aop(self, aop_deg: f64) -> Self {
        Self {
            aop_deg: between_0_360(aop_deg),
            ..self
        }
    }

    /// Returns a copy of these elements with the provided true anomaly
    pub fn with_ta(self, ta_deg: f64) -> Self {
        Self {
            ta_deg: between_0_360(ta_deg),
            ..self
        }
    }

    /// Semi-latus rectum (semi parameter), in km
    pub fn semi_parameter_km(&self) -> f64 {
        self.sma_km * (1.0 - self.ecc.powi(2))
    }

    /// Periapsis radius, in km
    pub fn periapsis_km(&self) -> f64 {
        self.sma_km * (1.0 - self.ecc)
    }

    /// Apoapsis radius, in km
    pub fn apoapsis_km(&self) -> f64 {
        self.sma_km * (1.0 + self.ecc)
    }

    /// Current radius, in km
    pub fn rmag_km(&self) -> f64 {
        self.semi_parameter_km() / (1.0 + self.ecc * self.ta_deg.to_radians().cos())
    }

    /// Mean motion in rad/s
    pub fn mean_motion_rad_s(&self, mu_km3_s2: f64) -> f64 {
        (mu_km3_s2 / self.sma_km.powi(3)).sqrt()
    }

    /// Orbital period in seconds
    pub fn period_s(&self, mu_km3_s2: f64) -> f64 {
        TAU / self.mean_motion_rad_s(mu_km3_s2)
    }

    /// Eccentric anomaly in degrees
    pub fn ea_deg(&self) -> f64 {
        between_0_360(true_to_eccentric_anomaly(self.ta_deg.to_radians(), self.ecc).to_degrees())
    }

    /// Mean anomaly in degrees
    pub fn ma_deg(&self) -> f64 {
        let ea = true_to_eccentric_anomaly(self.ta_deg.to_radians(), self.ecc);
        between_0_360(eccentric_to_mean_anomaly(ea, self.ecc).to_degrees())
    }

    /// Argument of latitude (ω + ν) in degrees
    pub fn aol_deg(&self) -> f64 {
        between_0_360(self.aop_deg + self.ta_deg)
    }

    /// Converts these elements into a Cartesian state, refer to [keplerian_to_cartesian].
    pub fn to_cartesian(&self, mu_km3_s2: f64) -> StateVector {
        keplerian_to_cartesian(self, mu_km3_s2)
    }
}

impl fmt::Display for OrbitalElements {
    // Prints the Keplerian orbital elements with units
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "sma = {:.6} km\tecc = {:.6}\tinc = {:.6} deg\traan = {:.6} deg\taop = {:.6} deg\tta = {:.6} deg",
            self.sma_km, self.ecc, self.inc_deg, self.raan_deg, self.aop_deg, self.ta_deg
        )
    }
}

/// Position and velocity in an inertial frame. Derived on demand, never stored.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateVector {
    /// Position in km
    pub radius_km: Vector3<f64>,
    /// Velocity in km/s
    pub velocity_km_s: Vector3<f64>,
}

impl StateVector {
    pub fn new(radius_km: Vector3<f64>, velocity_km_s: Vector3<f64>) -> Self {
        Self {
            radius_km,
            velocity_km_s,
        }
    }

    /// A state filled with NaNs, returned when the inputs cannot describe a state.
    pub fn nan() -> Self {
        Self::new(
            Vector3::from_element(f64::NAN),
            Vector3::from_element(f64::NAN),
        )
    }

    /// Returns whether every component is finite
    pub fn is_finite(&self) -> bool {
        self.radius_km.iter().chain(self.velocity_km_s.iter()).all(|x| x.is_finite())
    }

    /// Magnitude of the position, in km
    pub fn rmag(&self) -> f64 {
        self.radius_km.norm()
    }

    /// Magnitude of the velocity, in km/s
    pub fn vmag(&self) -> f64 {
        self.velocity_km_s.norm()
    }

    /// Specific angular momentum vector, in km^2/s
    pub fn hvec(&self) -> Vector3<f64> {
        self.radius_km.cross(&self.velocity_km_s)
    }

    /// Magnitude of the specific angular momentum, in km^2/s
    pub fn hmag(&self) -> f64 {
        self.hvec().norm()
    }

    /// Specific mechanical energy, in km^2/s^2
    pub fn energy(&self, mu_km3_s2: f64) -> f64 {
        self.vmag().powi(2) / 2.0 - mu_km3_s2 / self.rmag()
    }

    /// Converts this state into Keplerian elements, refer to [cartesian_to_keplerian].
    pub fn to_keplerian(&self, mu_km3_s2: f64) -> OrbitalElements {
        cartesian_to_keplerian(self, mu_km3_s2)
    }
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "position = [{:.6}, {:.6}, {:.6}] km\tvelocity = [{:.6}, {:.6}, {:.6}] km/s",
            self.radius_km[0],
            self.radius_km[1],
            self.radius_km[2],
            self.velocity_km_s[0],
            self.velocity_km_s[1],
            self.velocity_km_s[2]
        )
    }
}

/// Converts Keplerian elements into an inertial Cartesian state.
///
/// The state is first built in the perifocal frame from (a, e, ν) and then rotated through the
/// 3-1-3 Euler sequence (Ω, i, ω). Only elliptical orbits (0 <= e < 1) are supported: any other
/// input returns a NaN state.
pub fn keplerian_to_cartesian(elements: &OrbitalElements, mu_km3_s2: f64) -> StateVector {
    if let Err(e) = elements.validate() {
        warn!("cannot convert to Cartesian: {e}");
        return StateVector::nan();
    }
    if mu_km3_s2 <= 0.0 {
        warn!(
            "cannot convert to Cartesian: {}",
            NonPositiveMuSnafu { mu_km3_s2 }.build()
        );
        return StateVector::nan();
    }

    let p = elements.semi_parameter_km();
    let (sin_ta, cos_ta) = elements.ta_deg.to_radians().sin_cos();
    let radius = p / (1.0 + elements.ecc * cos_ta);
    let sqrt_mu_p = (mu_km3_s2 / p).sqrt();

    let r_pqw = Vector3::new(radius * cos_ta, radius * sin_ta, 0.0);
    let v_pqw = Vector3::new(-sqrt_mu_p * sin_ta, sqrt_mu_p * (elements.ecc + cos_ta), 0.0);

    // Perifocal to inertial: the transpose of the 3-1-3 frame rotation
    let dcm = r3(-elements.raan_deg.to_radians())
        * r1(-elements.inc_deg.to_radians())
        * r3(-elements.aop_deg.to_radians());

    StateVector::new(dcm * r_pqw, dcm * v_pqw)
}

/// Converts an inertial Cartesian state into Keplerian elements (Vallado, RV2COE).
///
/// Circular orbits have their argument of periapsis set to zero and the true anomaly measured
/// from the node; equatorial orbits have their RAAN set to zero. Unbound states return elements
/// with NaN angles and the (invalid) eccentricity so that callers can detect them.
pub fn cartesian_to_keplerian(state: &StateVector, mu_km3_s2: f64) -> OrbitalElements {
    let r = state.radius_km;
    let v = state.velocity_km_s;
    let rmag = r.norm();
    let hvec = state.hvec();
    let hmag = hvec.norm();
    let node = Vector3::new(-hvec[1], hvec[0], 0.0);
    let node_mag = node.norm();

    let ecc_vec = ((v.norm_squared() - mu_km3_s2 / rmag) * r - r.dot(&v) * v) / mu_km3_s2;
    let ecc = ecc_vec.norm();
    let energy = state.energy(mu_km3_s2);
    let sma_km = -mu_km3_s2 / (2.0 * energy);

    if ecc >= 1.0 || energy >= 0.0 || hmag <= 0.0 {
        warn!("state is not on an elliptical orbit (ecc = {ecc})");
        return OrbitalElements {
            sma_km,
            ecc,
            inc_deg: f64::NAN,
            raan_deg: f64::NAN,
            aop_deg: f64::NAN,
            ta_deg: f64::NAN,
        };
    }

    let inc = (hvec[2] / hmag).clamp(-1.0, 1.0).acos();
    let equatorial = node_mag / hmag < ECC_EPSILON;
    let circular = ecc < ECC_EPSILON;

    let raan = if equatorial {
        0.0
    } else {
        node[1].atan2(node[0])
    };

    let (aop, ta) = match (circular, equatorial) {
        (false, false) => {
            let aop = (node.dot(&ecc_vec) / (node_mag * ecc)).clamp(-1.0, 1.0).acos();
            let aop = if ecc_vec[2] < 0.0 { TAU - aop } else { aop };
            (aop, true_anomaly(&ecc_vec, ecc, &r, rmag, &v))
        }
        (false, true) => {
            // Longitude of periapsis, measured in the direction of motion
            let mut lop = ecc_vec[1].atan2(ecc_vec[0]);
            if hvec[2] < 0.0 {
                lop = -lop;
            }
            (lop, true_anomaly(&ecc_vec, ecc, &r, rmag, &v))
        }
        (true, false) => {
            // Argument of latitude
            let aol = (node.dot(&r) / (node_mag * rmag)).clamp(-1.0, 1.0).acos();
            let aol = if r[2] < 0.0 { TAU - aol } else { aol };
            (0.0, aol)
        }
        (true, true) => {
            // True longitude
            let mut tlong = r[1].atan2(r[0]);
            if hvec[2] < 0.0 {
                tlong = -tlong;
            }
            (0.0, tlong)
        }
    };

    OrbitalElements::new(
        sma_km,
        ecc,
        inc.to_degrees(),
        raan.to_degrees(),
        aop.to_degrees(),
        ta.to_degrees(),
    )
}

fn true_anomaly(
    ecc_vec: &Vector3<f64>,
    ecc: f64,
    r: &Vector3<f64>,
    rmag: f64,
    v: &Vector3<f64>,
) -> f64 {
    let ta = (ecc_vec.dot(r) / (ecc * rmag)).clamp(-1.0, 1.0).acos();
    if r.dot(v) < 0.0 {
        TAU - ta
    } else {
        ta
    }
}

#[cfg(test)]
mod ut_elements {
    use super::*;
    use crate::cosmic::MU_EARTH_KM3_S2;

    macro_rules! f64_eq {
        ($x:expr, $val:expr, $tol:expr, $msg:expr) => {
            assert!(
                ($x - $val).abs() < $tol,
                "{}: {} != {} ({:.2e})",
                $msg,
                $x,
                $val,
                ($x - $val).abs()
            )
        };
    }

    #[test]
    fn test_kep_to_cart_vallado() {
        // Vallado, example 2-6: p = 11 067.790 km, e = 0.83285, i = 87.87, raan = 227.89,
        // aop = 53.38, ta = 92.335
        let ecc = 0.832_85;
        let sma = 11_067.790 / (1.0 - ecc * ecc);
        let kep = OrbitalElements::new(sma, ecc, 87.87, 227.89, 53.38, 92.335);
        let state = kep.to_cartesian(3.986_004_418e5);
        let exp_r = Vector3::new(6_525.368, 6_861.532, 6_449.119);
        let exp_v = Vector3::new(4.902_279, 5.533_140, -1.975_710);
        assert!((state.radius_km - exp_r).norm() < 1.0, "{state}");
        assert!((state.velocity_km_s - exp_v).norm() < 1e-3, "{state}");
    }

    #[test]
    fn test_round_trip() {
        let kep = OrbitalElements::new(8_191.93, 0.1, 12.85, 306.614, 314.19, 99.887_7);
        let back = kep.to_cartesian(MU_EARTH_KM3_S2).to_keplerian(MU_EARTH_KM3_S2);
        f64_eq!(back.sma_km, kep.sma_km, 1e-6, "sma");
        f64_eq!(back.ecc, kep.ecc, 1e-12, "ecc");
        f64_eq!(back.inc_deg, kep.inc_deg, 1e-9, "inc");
        f64_eq!(back.raan_deg, kep.raan_deg, 1e-9, "raan");
        f64_eq!(back.aop_deg, kep.aop_deg, 1e-7, "aop");
        f64_eq!(back.ta_deg, kep.ta_deg, 1e-7, "ta");
    }

    #[test]
    fn test_round_trip_circular_inclined() {
        let kep = OrbitalElements::new(7_000.0, 0.0, 51.6, 30.0, 0.0, 45.0);
        let back = kep.to_cartesian(MU_EARTH_KM3_S2).to_keplerian(MU_EARTH_KM3_S2);
        f64_eq!(back.sma_km, 7_000.0, 1e-6, "sma");
        f64_eq!(back.inc_deg, 51.6, 1e-9, "inc");
        f64_eq!(back.raan_deg, 30.0, 1e-9, "raan");
        f64_eq!(back.aol_deg(), 45.0, 1e-7, "aol");
    }

    #[test]
    fn test_hyperbolic_is_nan() {
        let kep = OrbitalElements::new(7_000.0, 1.2, 10.0, 0.0, 0.0, 0.0);
        assert!(!kep.is_elliptical());
        assert!(!kep.to_cartesian(MU_EARTH_KM3_S2).is_finite());
        assert_eq!(
            OrbitalElements::try_new(7_000.0, 1.0, 0.0, 0.0, 0.0, 0.0),
            Err(AstroError::NotElliptical { ecc: 1.0 })
        );
        assert_eq!(
            OrbitalElements::try_new(-7_000.0, 0.1, 0.0, 0.0, 0.0, 0.0),
            Err(AstroError::NonPositiveSma { sma_km: -7_000.0 })
        );
    }

    #[test]
    fn test_angles_wrapped() {
        let kep = OrbitalElements::new(7_000.0, 0.01, 98.0, -10.0, 370.0, 720.5);
        assert_eq!(kep.raan_deg, 350.0);
        assert!((kep.aop_deg - 10.0).abs() < 1e-12);
        assert!((kep.ta_deg - 0.5).abs() < 1e-12);
        assert_eq!(kep.with_ta(-90.0).ta_deg, 270.0);
    }

    #[test]
    fn test_anomalies() {
        let kep = OrbitalElements::new(10_000.0, 0.3, 20.0, 0.0, 0.0, 90.0);
        // cos E = (e + cos ν) / (1 + e cos ν) = 0.3
        f64_eq!(kep.ea_deg(), 0.3_f64.acos().to_degrees(), 1e-10, "ea");
        let ea = 0.3_f64.acos();
        f64_eq!(kep.ma_deg(), (ea - 0.3 * ea.sin()).to_degrees(), 1e-10, "ma");
        f64_eq!(kep.rmag_km(), kep.semi_parameter_km(), 1e-9, "radius at ν = 90");
    }
}
