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

use super::{epoch_from_str, epoch_to_str, ConfigError, ConfigRepr, InvalidConfigSnafu, InvalidScenarioSnafu};
use crate::cosmic::{Body, DerivedOrbitalParams, OrbitalElements};
use crate::dynamics::PropulsionConfig;
use crate::md::{DeltaVBudgetResult, Maneuver, StandardManeuvers};
use crate::od::passes::DEFAULT_STEP_S;
use crate::od::{GroundStation, PassPredictor};
use crate::time::Epoch;
use serde_derive::{Deserialize, Serialize};
use snafu::{ensure, ResultExt};
use std::path::Path;

fn default_step_s() -> f64 {
    DEFAULT_STEP_S
}

fn default_duration_days() -> f64 {
    1.0
}

/// Contact window scan settings
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScanSettings {
    #[serde(default = "default_duration_days")]
    pub duration_days: f64,
    #[serde(default = "default_step_s")]
    pub step_s: f64,
    /// Downlink rate, in megabits per second
    #[serde(default)]
    pub data_rate_mbps: f64,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            duration_days: default_duration_days(),
            step_s: default_step_s(),
            data_rate_mbps: 0.0,
        }
    }
}

/// Everything needed to evaluate a small-satellite mission: the orbit, the ground segment and the
/// propulsion budget.
///
/// When no maneuver is listed, the standard low Earth orbit allocations are used.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MissionScenario {
    pub name: String,
    #[serde(serialize_with = "epoch_to_str", deserialize_with = "epoch_from_str")]
    pub epoch: Epoch,
    pub elements: OrbitalElements,
    #[serde(default)]
    pub stations: Vec<GroundStation>,
    #[serde(default)]
    pub scan: ScanSettings,
    pub dry_mass_kg: f64,
    pub propulsion: PropulsionConfig,
    pub lifetime_years: f64,
    #[serde(default)]
    pub maneuvers: Option<Vec<Maneuver>>,
}

impl ConfigRepr for MissionScenario {}

impl MissionScenario {
    /// Loads a scenario from a YAML file and checks that it describes a mission which can be
    /// evaluated.
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let scenario = Self::load(path)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.elements.validate().context(InvalidScenarioSnafu)?;
        ensure!(
            self.dry_mass_kg > 0.0,
            InvalidConfigSnafu {
                msg: format!("dry mass must be positive, got {} kg", self.dry_mass_kg)
            }
        );
        ensure!(
            self.lifetime_years >= 0.0,
            InvalidConfigSnafu {
                msg: format!("lifetime must be non-negative, got {} years", self.lifetime_years)
            }
        );
        Ok(())
    }

    /// Elements of the scenario with their angles wrapped in [0, 360)
    pub fn orbital_elements(&self) -> OrbitalElements {
        let e = self.elements;
        OrbitalElements::new(e.sma_km, e.ecc, e.inc_deg, e.raan_deg, e.aop_deg, e.ta_deg)
    }

    pub fn derived(&self) -> DerivedOrbitalParams {
        DerivedOrbitalParams::new(&self.orbital_elements(), Body::Earth)
    }

    pub fn pass_predictor(&self) -> PassPredictor {
        PassPredictor::builder()
            .elements(self.orbital_elements())
            .epoch(self.epoch)
            .stations(self.stations.clone())
            .duration_days(self.scan.duration_days)
            .step_s(self.scan.step_s)
            .build()
    }

    /// Maneuvers of the scenario, or the standard allocations if none are listed
    pub fn maneuver_list(&self) -> Vec<Maneuver> {
        match &self.maneuvers {
            Some(maneuvers) => maneuvers.clone(),
            None => StandardManeuvers::default().build(&self.orbital_elements()),
        }
    }

    pub fn budget(&self) -> DeltaVBudgetResult {
        DeltaVBudgetResult::compute(
            &self.propulsion,
            self.dry_mass_kg,
            self.lifetime_years,
            &self.maneuver_list(),
        )
    }
}
