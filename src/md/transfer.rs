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

use crate::cosmic::{Body, OrbitalElements};
use crate::errors::{AstroError, NotHeliocentricSnafu};
use serde_derive::{Deserialize, Serialize};
use snafu::ensure;
use std::f64::consts::{PI, TAU};
use std::fmt;

/// A two-impulse Hohmann transfer between circular coplanar orbits.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HohmannTransfer {
    /// First burn, at the departure radius, in km/s
    pub dv1_km_s: f64,
    /// Second burn, circularizing at the arrival radius, in km/s
    pub dv2_km_s: f64,
    /// Half the period of the transfer ellipse, in seconds
    pub tof_s: f64,
}

impl HohmannTransfer {
    /// Computes the Hohmann transfer between the radii `r1_km` and `r2_km`. Burns are reported as
    /// magnitudes, so this also holds for a transfer to a lower orbit. Non-positive radii or
    /// gravitational parameter return NaN burns.
    pub fn new(r1_km: f64, r2_km: f64, mu_km3_s2: f64) -> Self {
        if !(r1_km > 0.0 && r2_km > 0.0 && mu_km3_s2 > 0.0) {
            warn!("invalid Hohmann transfer from {r1_km} km to {r2_km} km (mu = {mu_km3_s2})");
            return Self {
                dv1_km_s: f64::NAN,
                dv2_km_s: f64::NAN,
                tof_s: f64::NAN,
            };
        }
        let a_transfer = 0.5 * (r1_km + r2_km);
        let v1 = (mu_km3_s2 / r1_km).sqrt();
        let v2 = (mu_km3_s2 / r2_km).sqrt();
        let vp = vis_viva(r1_km, a_transfer, mu_km3_s2);
        let va = vis_viva(r2_km, a_transfer, mu_km3_s2);
        Self {
            dv1_km_s: (vp - v1).abs(),
            dv2_km_s: (v2 - va).abs(),
            tof_s: PI * (a_transfer.powi(3) / mu_km3_s2).sqrt(),
        }
    }

    pub fn total_km_s(&self) -> f64 {
        self.dv1_km_s + self.dv2_km_s
    }
}

impl fmt::Display for HohmannTransfer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Hohmann: {:.3} + {:.3} = {:.3} km/s in {:.2} h",
            self.dv1_km_s,
            self.dv2_km_s,
            self.total_km_s(),
            self.tof_s / 3600.0
        )
    }
}

/// Speed on an orbit of semi-major axis `sma_km` at radius `r_km`, in km/s
pub fn vis_viva(r_km: f64, sma_km: f64, mu_km3_s2: f64) -> f64 {
    (mu_km3_s2 * (2.0 / r_km - 1.0 / sma_km)).sqrt()
}

/// Single burn at apoapsis lowering the periapsis to `target_periapsis_km`, in km/s.
///
/// Zero if the periapsis is already at or below the target, NaN for non-elliptical elements.
pub fn perigee_lowering_delta_v_km_s(
    elements: &OrbitalElements,
    target_periapsis_km: f64,
    mu_km3_s2: f64,
) -> f64 {
    if let Err(e) = elements.validate() {
        warn!("cannot lower periapsis: {e}");
        return f64::NAN;
    }
    if elements.periapsis_km() <= target_periapsis_km {
        return 0.0;
    }
    let ra = elements.apoapsis_km();
    let v_before = vis_viva(ra, elements.sma_km, mu_km3_s2);
    let v_after = vis_viva(ra, 0.5 * (ra + target_periapsis_km.max(0.0)), mu_km3_s2);
    v_before - v_after
}

/// Pure inclination change at constant speed, in the units of `v`
pub fn plane_change_delta_v(v: f64, delta_inc_deg: f64) -> f64 {
    2.0 * v * (0.5 * delta_inc_deg.to_radians()).sin().abs()
}

/// Burn from a circular parking orbit of radius `r_park_km` onto a hyperbola leaving with the
/// excess speed `v_inf_km_s`, in km/s
pub fn departure_delta_v_km_s(v_inf_km_s: f64, r_park_km: f64, mu_km3_s2: f64) -> f64 {
    (v_inf_km_s.powi(2) + 2.0 * mu_km3_s2 / r_park_km).sqrt() - (mu_km3_s2 / r_park_km).sqrt()
}

/// Burn from an arrival hyperbola of excess speed `v_inf_km_s` into a circular orbit of radius
/// `r_orbit_km`, in km/s
pub fn capture_delta_v_km_s(v_inf_km_s: f64, r_orbit_km: f64, mu_km3_s2: f64) -> f64 {
    departure_delta_v_km_s(v_inf_km_s, r_orbit_km, mu_km3_s2)
}

/// Canonical patched conic transfer to the Moon: Hohmann from a circular parking orbit to the
/// mean lunar distance, then insertion into a circular lunar orbit.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LunarTransfer {
    /// Trans-lunar injection, in km/s
    pub tli_km_s: f64,
    /// Lunar orbit insertion, in km/s
    pub loi_km_s: f64,
    /// Excess speed with respect to the Moon on arrival, in km/s
    pub v_inf_arrival_km_s: f64,
    pub tof_s: f64,
}

impl LunarTransfer {
    pub fn new(parking_altitude_km: f64, lunar_orbit_altitude_km: f64) -> Self {
        let mu_earth = Body::Earth.mu_km3_s2();
        let r_park = Body::Earth.equatorial_radius_km() + parking_altitude_km;
        let r_moon = Body::Moon.orbit_radius_km();

        let hohmann = HohmannTransfer::new(r_park, r_moon, mu_earth);
        let v_apogee = vis_viva(r_moon, 0.5 * (r_park + r_moon), mu_earth);
        let v_moon = (mu_earth / r_moon).sqrt();
        let v_inf_arrival_km_s = (v_moon - v_apogee).abs();

        let r_llo = Body::Moon.equatorial_radius_km() + lunar_orbit_altitude_km;

        Self {
            tli_km_s: hohmann.dv1_km_s,
            loi_km_s: capture_delta_v_km_s(v_inf_arrival_km_s, r_llo, Body::Moon.mu_km3_s2()),
            v_inf_arrival_km_s,
            tof_s: hohmann.tof_s,
        }
    }

    pub fn total_km_s(&self) -> f64 {
        self.tli_km_s + self.loi_km_s
    }
}

impl fmt::Display for LunarTransfer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "TLI {:.3} km/s + LOI {:.3} km/s = {:.3} km/s in {:.2} days",
            self.tli_km_s,
            self.loi_km_s,
            self.total_km_s(),
            self.tof_s / 86_400.0
        )
    }
}

/// Hohmann transfer between the circular coplanar orbits of two planets.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InterplanetaryTransfer {
    pub departure: Body,
    pub arrival: Body,
    pub v_inf_departure_km_s: f64,
    pub v_inf_arrival_km_s: f64,
    pub tof_s: f64,
    /// Angle by which the arrival planet must lead the departure planet at launch, in degrees
    pub phase_angle_deg: f64,
    /// Time between two launch opportunities, in seconds
    pub synodic_period_s: f64,
}

impl InterplanetaryTransfer {
    /// Builds the Hohmann transfer between two planets orbiting the Sun.
    pub fn hohmann(departure: Body, arrival: Body) -> Result<Self, AstroError> {
        for body in [departure, arrival] {
            ensure!(body.parent() == Some(Body::Sun), NotHeliocentricSnafu { body });
        }

        let hohmann = HohmannTransfer::new(
            departure.orbit_radius_km(),
            arrival.orbit_radius_km(),
            Body::Sun.mu_km3_s2(),
        );

        let phase_angle_deg = (PI - arrival.mean_motion_rad_s() * hohmann.tof_s).to_degrees();

        Ok(Self {
            departure,
            arrival,
            v_inf_departure_km_s: hohmann.dv1_km_s,
            v_inf_arrival_km_s: hohmann.dv2_km_s,
            tof_s: hohmann.tof_s,
            phase_angle_deg,
            synodic_period_s: synodic_period_s(departure, arrival),
        })
    }

    /// Departure characteristic energy, in km^2/s^2
    pub fn c3_km2_s2(&self) -> f64 {
        self.v_inf_departure_km_s.powi(2)
    }

    /// Burn to leave a circular parking orbit at the provided altitude of the departure planet
    pub fn departure_delta_v_km_s(&self, parking_altitude_km: f64) -> f64 {
        departure_delta_v_km_s(
            self.v_inf_departure_km_s,
            self.departure.equatorial_radius_km() + parking_altitude_km,
            self.departure.mu_km3_s2(),
        )
    }

    /// Burn to capture into a circular orbit at the provided altitude of the arrival planet
    pub fn capture_delta_v_km_s(&self, orbit_altitude_km: f64) -> f64 {
        capture_delta_v_km_s(
            self.v_inf_arrival_km_s,
            self.arrival.equatorial_radius_km() + orbit_altitude_km,
            self.arrival.mu_km3_s2(),
        )
    }
}

impl fmt::Display for InterplanetaryTransfer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} -> {}: C3 = {:.3} km^2/s^2, v_inf arrival = {:.3} km/s, {:.1} days (phase {:.2} deg, every {:.1} days)",
            self.departure,
            self.arrival,
            self.c3_km2_s2(),
            self.v_inf_arrival_km_s,
            self.tof_s / 86_400.0,
            self.phase_angle_deg,
            self.synodic_period_s / 86_400.0
        )
    }
}

/// Synodic period of two bodies orbiting the same parent, in seconds (infinite if their periods
/// are equal)
pub fn synodic_period_s(a: Body, b: Body) -> f64 {
    let rel_rate = (a.mean_motion_rad_s() - b.mean_motion_rad_s()).abs();
    if rel_rate > 0.0 {
        TAU / rel_rate
    } else {
        f64::INFINITY
    }
}
