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

use super::{universal, TransferKind};
use crate::cosmic::epoch::julian_date_of;
use crate::cosmic::{Body, SECONDS_PER_DAY};
use crate::io::{epoch_from_str, epoch_to_str, ConfigRepr};
use crate::time::{Epoch, Unit};
use rayon::prelude::*;
use serde_derive::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use typed_builder::TypedBuilder;

/// Grid spacing when none is provided
pub const DEFAULT_STEP_DAYS: f64 = 5.0;

fn default_step_days() -> f64 {
    DEFAULT_STEP_DAYS
}

/// Departure date and time of flight grid of a planar heliocentric transfer.
///
/// Both planets are on circular coplanar orbits around the Sun, so the sweep is a first guess of
/// the launch window and not a mission design.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[builder(doc)]
pub struct PorkchopConfig {
    pub departure_body: Body,
    pub arrival_body: Body,
    /// First departure date of the grid
    #[serde(serialize_with = "epoch_to_str", deserialize_with = "epoch_from_str")]
    pub departure_start: Epoch,
    pub departure_span_days: f64,
    #[builder(default = DEFAULT_STEP_DAYS)]
    #[serde(default = "default_step_days")]
    pub departure_step_days: f64,
    pub tof_min_days: f64,
    pub tof_max_days: f64,
    #[builder(default = DEFAULT_STEP_DAYS)]
    #[serde(default = "default_step_days")]
    pub tof_step_days: f64,
    #[builder(default)]
    #[serde(default)]
    pub kind: TransferKind,
}

/// One solved transfer of the sweep
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PorkchopCell {
    #[serde(serialize_with = "epoch_to_str", deserialize_with = "epoch_from_str")]
    pub departure: Epoch,
    #[serde(serialize_with = "epoch_to_str", deserialize_with = "epoch_from_str")]
    pub arrival: Epoch,
    pub tof_days: f64,
    /// Departure characteristic energy, in km^2/s^2
    pub c3_km2_s2: f64,
    pub v_inf_departure_km_s: f64,
    pub v_inf_arrival_km_s: f64,
}

impl PorkchopCell {
    /// Sum of the departure and arrival hyperbolic excess speeds, in km/s
    pub fn total_v_inf_km_s(&self) -> f64 {
        self.v_inf_departure_km_s + self.v_inf_arrival_km_s
    }
}

/// Result of a sweep. Cells where the Lambert solver fails are skipped.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PorkchopGrid {
    pub departure_count: usize,
    pub tof_count: usize,
    pub cells: Vec<PorkchopCell>,
}

impl PorkchopGrid {
    /// Cell of lowest total hyperbolic excess speed
    pub fn best(&self) -> Option<&PorkchopCell> {
        self.cells.iter().min_by(|a, b| {
            a.total_v_inf_km_s()
                .partial_cmp(&b.total_v_inf_km_s())
                .unwrap_or(Ordering::Equal)
        })
    }

    /// Cell of lowest departure energy
    pub fn best_c3(&self) -> Option<&PorkchopCell> {
        self.cells.iter().min_by(|a, b| {
            a.c3_km2_s2
                .partial_cmp(&b.c3_km2_s2)
                .unwrap_or(Ordering::Equal)
        })
    }

    /// Number of grid points which could not be solved
    pub fn failed_count(&self) -> usize {
        self.departure_count * self.tof_count - self.cells.len()
    }
}

impl PorkchopConfig {
    /// Solves every cell of the grid in parallel.
    pub fn sweep(&self) -> PorkchopGrid {
        for body in [self.departure_body, self.arrival_body] {
            if body.parent() != Some(Body::Sun) {
                warn!("{body} does not orbit the Sun: no heliocentric transfer");
                return PorkchopGrid::default();
            }
        }

        if !(self.departure_span_days >= 0.0
            && self.departure_step_days > 0.0
            && self.tof_min_days > 0.0
            && self.tof_max_days >= self.tof_min_days
            && self.tof_step_days > 0.0)
        {
            warn!("invalid porkchop grid: {self:?}");
            return PorkchopGrid::default();
        }

        let departure_count = (self.departure_span_days / self.departure_step_days).floor() as usize + 1;
        let tof_count =
            ((self.tof_max_days - self.tof_min_days) / self.tof_step_days).floor() as usize + 1;

        let cells = (0..departure_count * tof_count)
            .into_par_iter()
            .filter_map(|idx| {
                let departure_days = (idx / tof_count) as f64 * self.departure_step_days;
                let tof_days = self.tof_min_days + (idx % tof_count) as f64 * self.tof_step_days;
                self.solve_cell(departure_days, tof_days)
            })
            .collect::<Vec<PorkchopCell>>();

        let grid = PorkchopGrid {
            departure_count,
            tof_count,
            cells,
        };

        debug!(
            "{} -> {}: solved {} of {} cells",
            self.departure_body,
            self.arrival_body,
            grid.cells.len(),
            departure_count * tof_count
        );

        grid
    }

    fn solve_cell(&self, departure_days: f64, tof_days: f64) -> Option<PorkchopCell> {
        let departure = self.departure_start + departure_days * Unit::Day;
        let jd = julian_date_of(departure);

        let dep_state = self.departure_body.planar_state(jd);
        let arr_state = self.arrival_body.planar_state(jd + tof_days);

        match universal(
            dep_state.radius_km,
            arr_state.radius_km,
            tof_days * SECONDS_PER_DAY,
            Body::Sun.mu_km3_s2(),
            self.kind,
        ) {
            Ok(sol) => {
                let v_inf_dep = sol.v_inf_init(&dep_state.velocity_km_s);
                let v_inf_arr = sol.v_inf_final(&arr_state.velocity_km_s);
                Some(PorkchopCell {
                    departure,
                    arrival: departure + tof_days * Unit::Day,
                    tof_days,
                    c3_km2_s2: v_inf_dep.norm_squared(),
                    v_inf_departure_km_s: v_inf_dep.norm(),
                    v_inf_arrival_km_s: v_inf_arr.norm(),
                })
            }
            Err(e) => {
                trace!("skipping departure {departure} with TOF {tof_days} days: {e}");
                None
            }
        }
    }
}

impl ConfigRepr for PorkchopConfig {}

impl fmt::Display for PorkchopCell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "depart {}  arrive {} ({:.1} days)  C3 = {:.3} km^2/s^2  v_inf = {:.3} + {:.3} km/s",
            self.departure,
            self.arrival,
            self.tof_days,
            self.c3_km2_s2,
            self.v_inf_departure_km_s,
            self.v_inf_arrival_km_s
        )
    }
}
