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

use super::eclipse::eclipse_fraction;
use super::{Body, OrbitalElements};
use crate::propagators::KeplerJ2;
use serde_derive::{Deserialize, Serialize};
use std::fmt;

/// Orbit geometry derived from the classical elements, as displayed to mission designers.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DerivedOrbitalParams {
    pub period_s: f64,
    pub mean_motion_rad_s: f64,
    pub periapsis_km: f64,
    pub apoapsis_km: f64,
    /// Periapsis altitude above the equatorial radius, in km
    pub periapsis_altitude_km: f64,
    /// Apoapsis altitude above the equatorial radius, in km
    pub apoapsis_altitude_km: f64,
    pub periapsis_velocity_km_s: f64,
    pub apoapsis_velocity_km_s: f64,
    /// Specific mechanical energy, in km^2/s^2
    pub energy_km2_s2: f64,
    pub raan_drift_deg_day: f64,
    pub aop_drift_deg_day: f64,
    /// Fraction of the orbit spent in the shadow of the body
    pub eclipse_fraction: f64,
    pub max_eclipse_duration_s: f64,
    pub sun_synchronous: bool,
}

impl DerivedOrbitalParams {
    /// Derives the orbit parameters around the provided body, with the worst case eclipse (Sun in
    /// the orbit plane).
    pub fn new(elements: &OrbitalElements, body: Body) -> Self {
        Self::with_beta_angle(elements, body, 0.0)
    }

    /// Derives the orbit parameters around the provided body, with the eclipse computed for the
    /// provided beta angle in degrees. Non-elliptical elements return NaN parameters.
    pub fn with_beta_angle(elements: &OrbitalElements, body: Body, beta_deg: f64) -> Self {
        if let Err(e) = elements.validate() {
            warn!("cannot derive orbit parameters: {e}");
            return Self::nan();
        }

        let mu = body.mu_km3_s2();
        let radius = body.equatorial_radius_km();
        let prop = KeplerJ2::around(body);
        let rates = prop.secular_rates(elements);

        let periapsis_km = elements.periapsis_km();
        let apoapsis_km = elements.apoapsis_km();
        let vis_viva = |r: f64| (mu * (2.0 / r - 1.0 / elements.sma_km)).sqrt();
        let period_s = elements.period_s(mu);
        let eclipse_fraction = eclipse_fraction(elements.sma_km, beta_deg, radius);

        Self {
            period_s,
            mean_motion_rad_s: elements.mean_motion_rad_s(mu),
            periapsis_km,
            apoapsis_km,
            periapsis_altitude_km: periapsis_km - radius,
            apoapsis_altitude_km: apoapsis_km - radius,
            periapsis_velocity_km_s: vis_viva(periapsis_km),
            apoapsis_velocity_km_s: vis_viva(apoapsis_km),
            energy_km2_s2: -mu / (2.0 * elements.sma_km),
            raan_drift_deg_day: rates.raan_deg_day(),
            aop_drift_deg_day: rates.aop_deg_day(),
            eclipse_fraction,
            max_eclipse_duration_s: eclipse_fraction * period_s,
            sun_synchronous: body == Body::Earth && prop.is_sun_synchronous(elements),
        }
    }

    /// Parameters of an invalid orbit: every value is NaN
    pub fn nan() -> Self {
        Self {
            period_s: f64::NAN,
            mean_motion_rad_s: f64::NAN,
            periapsis_km: f64::NAN,
            apoapsis_km: f64::NAN,
            periapsis_altitude_km: f64::NAN,
            apoapsis_altitude_km: f64::NAN,
            periapsis_velocity_km_s: f64::NAN,
            apoapsis_velocity_km_s: f64::NAN,
            energy_km2_s2: f64::NAN,
            raan_drift_deg_day: f64::NAN,
            aop_drift_deg_day: f64::NAN,
            eclipse_fraction: f64::NAN,
            max_eclipse_duration_s: f64::NAN,
            sun_synchronous: false,
        }
    }
}

impl fmt::Display for DerivedOrbitalParams {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "period:          {:.3} min", self.period_s / 60.0)?;
        writeln!(
            f,
            "altitudes:       {:.3} km x {:.3} km",
            self.periapsis_altitude_km, self.apoapsis_altitude_km
        )?;
        writeln!(
            f,
            "velocities:      {:.6} km/s (peri.)    {:.6} km/s (apo.)",
            self.periapsis_velocity_km_s, self.apoapsis_velocity_km_s
        )?;
        writeln!(
            f,
            "J2 drift:        {:.6} deg/day (node)    {:.6} deg/day (apsides)",
            self.raan_drift_deg_day, self.aop_drift_deg_day
        )?;
        writeln!(
            f,
            "eclipse:         {:.2} % ({:.1} min)",
            self.eclipse_fraction * 100.0,
            self.max_eclipse_duration_s / 60.0
        )?;
        write!(f, "sun-synchronous: {}", self.sun_synchronous)
    }
}

#[cfg(test)]
mod ut_derived {
    use super::*;
    use crate::propagators::sun_sync_inclination;

    #[test]
    fn test_iss_like() {
        let kep = OrbitalElements::new(6_778.0, 0.0001, 51.6, 0.0, 0.0, 0.0);
        let params = DerivedOrbitalParams::new(&kep, Body::Earth);
        assert!((params.period_s / 60.0 - 92.56).abs() < 0.05, "{params}");
        assert!((params.periapsis_altitude_km - 399.185).abs() < 1e-2);
        assert!((params.apoapsis_altitude_km - 400.541).abs() < 1e-2);
        assert!(params.periapsis_velocity_km_s > params.apoapsis_velocity_km_s);
        assert!(params.raan_drift_deg_day < 0.0);
        assert!(params.eclipse_fraction > 0.35 && params.eclipse_fraction < 0.40);
        assert!(!params.sun_synchronous);
    }

    #[test]
    fn test_sun_synchronous_flag() {
        let sma = 6_378.137 + 700.0;
        let kep = OrbitalElements::new(sma, 0.0, sun_sync_inclination(sma, 0.0), 0.0, 0.0, 0.0);
        assert!(DerivedOrbitalParams::new(&kep, Body::Earth).sun_synchronous);
        // Same orbit around Mars is not Sun synchronous by the Earth's definition
        assert!(!DerivedOrbitalParams::new(&kep, Body::Mars).sun_synchronous);
    }

    #[test]
    fn test_invalid() {
        let kep = OrbitalElements::new(6_778.0, 1.1, 51.6, 0.0, 0.0, 0.0);
        let params = DerivedOrbitalParams::new(&kep, Body::Earth);
        assert!(params.period_s.is_nan());
        assert!(!params.sun_synchronous);
    }
}
