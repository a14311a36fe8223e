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

use super::GroundStation;
use crate::cosmic::epoch::gmst_of;
use crate::cosmic::frames::eci_to_ecef;
use crate::cosmic::{OrbitalElements, SECONDS_PER_DAY};
use crate::io::{epoch_from_str, epoch_to_str};
use crate::linalg::Vector3;
use crate::propagators::KeplerJ2;
use crate::time::{Epoch, Unit};
use enum_iterator::Sequence;
use rayon::prelude::*;
use serde_derive::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use typed_builder::TypedBuilder;

mod stats;
pub use stats::{ContactStatistics, LINK_EFFICIENCY};

/// Default sampling step of the pass predictor, in seconds
pub const DEFAULT_STEP_S: f64 = 30.0;
/// Passes shorter than this are not worth scheduling and are discarded, in seconds
pub const MIN_PASS_DURATION_S: f64 = 60.0;

/// Letter grade of a pass from its maximum elevation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Sequence)]
pub enum PassQuality {
    /// Maximum elevation of at least 60 degrees
    A,
    /// At least 30 degrees
    B,
    /// At least 10 degrees
    C,
    /// Below 10 degrees
    D,
}

impl PassQuality {
    pub fn from_max_elevation(max_elevation_deg: f64) -> Self {
        if max_elevation_deg >= 60.0 {
            Self::A
        } else if max_elevation_deg >= 30.0 {
            Self::B
        } else if max_elevation_deg >= 10.0 {
            Self::C
        } else {
            Self::D
        }
    }
}

impl fmt::Display for PassQuality {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// A contact window between the spacecraft and a ground station.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pass {
    pub station_id: String,
    pub station_name: String,
    /// Acquisition of signal
    #[serde(serialize_with = "epoch_to_str", deserialize_with = "epoch_from_str")]
    pub aos: Epoch,
    /// Loss of signal
    #[serde(serialize_with = "epoch_to_str", deserialize_with = "epoch_from_str")]
    pub los: Epoch,
    /// Sample of maximum elevation
    #[serde(serialize_with = "epoch_to_str", deserialize_with = "epoch_from_str")]
    pub tca: Epoch,
    pub max_elevation_deg: f64,
    pub aos_azimuth_deg: f64,
    pub los_azimuth_deg: f64,
    pub duration_s: f64,
    pub quality: PassQuality,
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:<12} AOS {} (az. {:>6.2} deg)  LOS {} (az. {:>6.2} deg)  max el. {:>5.2} deg  {:>6.1} min  [{}]",
            self.station_name,
            self.aos,
            self.aos_azimuth_deg,
            self.los,
            self.los_azimuth_deg,
            self.max_elevation_deg,
            self.duration_s / 60.0,
            self.quality
        )
    }
}

/// Scans a time span with a fixed step and returns the contact windows of each station.
///
/// The satellite is propagated with Kepler and J2 secular drift, rotated into the Earth fixed
/// frame with the sidereal angle of each sample, and its elevation computed from every active
/// station. A pass opens on the first sample at or above the station's elevation mask and closes
/// on the first sample below it, which is the loss of signal.
#[derive(Clone, Debug, TypedBuilder)]
#[builder(doc)]
pub struct PassPredictor {
    pub elements: OrbitalElements,
    /// Epoch of the elements and start of the scan
    pub epoch: Epoch,
    pub stations: Vec<GroundStation>,
    pub duration_days: f64,
    #[builder(default = DEFAULT_STEP_S)]
    pub step_s: f64,
    #[builder(default)]
    pub propagator: KeplerJ2,
}

/// One sample of the ground track
#[derive(Copy, Clone, Debug)]
struct TrackPoint {
    offset_s: f64,
    r_ecef: Vector3<f64>,
}

/// Pass being tracked while scanning
#[derive(Copy, Clone, Debug)]
struct OpenPass {
    aos_idx: usize,
    aos_azimuth_deg: f64,
    tca_idx: usize,
    max_elevation_deg: f64,
}

impl PassPredictor {
    /// Returns all of the passes over every active station, sorted by acquisition of signal.
    ///
    /// An empty station list, a non-positive duration or step, or non-elliptical elements
    /// return no pass.
    pub fn predict(&self) -> Vec<Pass> {
        if self.stations.is_empty() {
            warn!("no ground station provided, no pass to predict");
            return Vec::new();
        }
        if !(self.duration_days > 0.0 && self.step_s > 0.0)
            || !self.duration_days.is_finite()
            || !self.step_s.is_finite()
        {
            warn!(
                "invalid scan of {} days with a step of {} s",
                self.duration_days, self.step_s
            );
            return Vec::new();
        }
        if let Err(e) = self.elements.validate() {
            warn!("cannot predict passes: {e}");
            return Vec::new();
        }

        let track = self.ground_track();

        let per_station = self
            .stations
            .par_iter()
            .filter(|station| station.active)
            .map(|station| self.scan_station(station, &track))
            .collect::<Vec<Vec<Pass>>>();

        let mut passes = per_station.into_iter().flatten().collect::<Vec<Pass>>();
        passes.sort_by(|a, b| a.aos.partial_cmp(&b.aos).unwrap_or(Ordering::Equal));

        debug!(
            "{} passes over {} stations in {} days ({} samples)",
            passes.len(),
            self.stations.iter().filter(|s| s.active).count(),
            self.duration_days,
            track.len()
        );

        passes
    }

    /// Earth fixed positions of the spacecraft at each sample of the scan
    fn ground_track(&self) -> Vec<TrackPoint> {
        let duration_s = self.duration_days * SECONDS_PER_DAY;
        let num_samples = (duration_s / self.step_s).floor() as usize + 1;

        (0..num_samples)
            .map(|k| {
                let offset_s = k as f64 * self.step_s;
                let elements = self.propagator.propagate(&self.elements, offset_s);
                let r_eci = elements.to_cartesian(self.propagator.mu_km3_s2).radius_km;
                let gmst = gmst_of(self.epoch + offset_s * Unit::Second);
                TrackPoint {
                    offset_s,
                    r_ecef: eci_to_ecef(&r_eci, gmst),
                }
            })
            .collect()
    }

    fn scan_station(&self, station: &GroundStation, track: &[TrackPoint]) -> Vec<Pass> {
        let station_ecef = station.position_ecef();
        let mut passes = Vec::new();
        let mut open: Option<OpenPass> = None;
        let mut last_azimuth_deg = 0.0;

        for (idx, point) in track.iter().enumerate() {
            let aer = station.azimuth_elevation_from(&station_ecef, &point.r_ecef);
            last_azimuth_deg = aer.azimuth_deg;

            if aer.is_visible(station.min_elevation_deg) {
                if let Some(current) = open.as_mut() {
                    if aer.elevation_deg > current.max_elevation_deg {
                        current.max_elevation_deg = aer.elevation_deg;
                        current.tca_idx = idx;
                    }
                } else {
                    open = Some(OpenPass {
                        aos_idx: idx,
                        aos_azimuth_deg: aer.azimuth_deg,
                        tca_idx: idx,
                        max_elevation_deg: aer.elevation_deg,
                    });
                }
            } else if let Some(current) = open.take() {
                if let Some(pass) = self.close_pass(station, track, current, idx, aer.azimuth_deg) {
                    passes.push(pass);
                }
            }
        }

        // Still in view at the end of the span
        if let Some(current) = open.take() {
            let last_idx = track.len() - 1;
            if let Some(pass) = self.close_pass(station, track, current, last_idx, last_azimuth_deg)
            {
                passes.push(pass);
            }
        }

        trace!("{}: {} passes", station.name, passes.len());
        passes
    }

    fn close_pass(
        &self,
        station: &GroundStation,
        track: &[TrackPoint],
        open: OpenPass,
        los_idx: usize,
        los_azimuth_deg: f64,
    ) -> Option<Pass> {
        let aos_s = track[open.aos_idx].offset_s;
        let los_s = track[los_idx].offset_s;
        let duration_s = los_s - aos_s;
        if duration_s < MIN_PASS_DURATION_S {
            trace!(
                "{}: discarding {duration_s} s pass at +{aos_s} s",
                station.name
            );
            return None;
        }

        Some(Pass {
            station_id: station.id.clone(),
            station_name: station.name.clone(),
            aos: self.epoch + aos_s * Unit::Second,
            los: self.epoch + los_s * Unit::Second,
            tca: self.epoch + track[open.tca_idx].offset_s * Unit::Second,
            max_elevation_deg: open.max_elevation_deg,
            aos_azimuth_deg: open.aos_azimuth_deg,
            los_azimuth_deg,
            duration_s,
            quality: PassQuality::from_max_elevation(open.max_elevation_deg),
        })
    }
}
