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

use super::Maneuver;
use crate::dynamics::{propellant_for_delta_v, PropulsionConfig};
use enum_iterator::Sequence;
use serde_derive::{Deserialize, Serialize};
use std::fmt;

/// Fraction of the maneuver subtotal added as a margin line item
pub const MARGIN_FRACTION: f64 = 0.10;
/// Margins above this percentage are nominal
pub const NOMINAL_MARGIN_PERCENT: f64 = 10.0;

/// Health of a delta-v budget from its margin.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Sequence)]
pub enum BudgetStatus {
    /// Margin above 10 %
    Nominal,
    /// Margin in (0, 10] %
    Warning,
    /// No margin left, or not enough delta-v
    Critical,
}

impl BudgetStatus {
    pub fn from_margin_percent(margin_percent: f64) -> Self {
        if margin_percent > NOMINAL_MARGIN_PERCENT {
            Self::Nominal
        } else if margin_percent > 0.0 {
            Self::Warning
        } else {
            Self::Critical
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let status = match *self {
            Self::Nominal => "NOMINAL",
            Self::Warning => "WARNING",
            Self::Critical => "CRITICAL",
        };
        write!(f, "{status}")
    }
}

/// One maneuver of the budget, in execution order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BudgetLine {
    pub id: String,
    pub name: String,
    /// Delta-v over the mission lifetime, in m/s
    pub delta_v_m_s: f64,
    /// Propellant burnt by this maneuver, in kg
    pub propellant_kg: f64,
    /// Propellant left in the tanks after this maneuver, in kg
    pub remaining_propellant_kg: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeltaVBudgetResult {
    /// Delta-v of the full tanks, in m/s
    pub available_delta_v_m_s: f64,
    /// Maneuvers followed by the margin line item
    pub lines: Vec<BudgetLine>,
    /// Sum of the maneuvers, without margin, in m/s
    pub subtotal_delta_v_m_s: f64,
    pub margin_delta_v_m_s: f64,
    /// Subtotal and margin, in m/s
    pub required_delta_v_m_s: f64,
    pub required_propellant_kg: f64,
    pub remaining_propellant_kg: f64,
    /// (available - required) / available, in percent
    pub margin_percent: f64,
    pub status: BudgetStatus,
}

impl DeltaVBudgetResult {
    /// Sequences the maneuvers against the propulsion system of a spacecraft of the provided
    /// dry mass, over the mission lifetime.
    ///
    /// Each maneuver's propellant is computed against the dry mass with the rocket equation and
    /// subtracted from the remaining propellant, which never goes below zero. A line item of 10 %
    /// of the maneuver subtotal is appended as margin.
    pub fn compute(
        propulsion: &PropulsionConfig,
        dry_mass_kg: f64,
        lifetime_years: f64,
        maneuvers: &[Maneuver],
    ) -> Self {
        let available_delta_v_m_s = propulsion.available_delta_v_m_s(dry_mass_kg);
        let mut remaining = propulsion.propellant_mass_kg.max(0.0);

        let mut burn = |id: &str, name: &str, delta_v_m_s: f64| -> BudgetLine {
            let propellant_kg = propellant_for_delta_v(delta_v_m_s, propulsion.isp_s, dry_mass_kg);
            remaining = (remaining - propellant_kg).max(0.0);
            BudgetLine {
                id: id.to_string(),
                name: name.to_string(),
                delta_v_m_s,
                propellant_kg,
                remaining_propellant_kg: remaining,
            }
        };

        let mut lines = maneuvers
            .iter()
            .map(|mnvr| burn(&mnvr.id, &mnvr.name, mnvr.total_delta_v_m_s(lifetime_years)))
            .collect::<Vec<BudgetLine>>();

        let subtotal_delta_v_m_s = lines.iter().map(|line| line.delta_v_m_s).sum::<f64>();
        let margin_delta_v_m_s = MARGIN_FRACTION * subtotal_delta_v_m_s;
        lines.push(burn("margin", "Margin (10%)", margin_delta_v_m_s));

        let required_delta_v_m_s = subtotal_delta_v_m_s + margin_delta_v_m_s;
        let required_propellant_kg = lines.iter().map(|line| line.propellant_kg).sum::<f64>();

        let margin_percent = if available_delta_v_m_s > 0.0 {
            100.0 * (available_delta_v_m_s - required_delta_v_m_s) / available_delta_v_m_s
        } else {
            warn!("no delta-v available with {propulsion} and a dry mass of {dry_mass_kg} kg");
            0.0
        };

        let status = BudgetStatus::from_margin_percent(margin_percent);

        debug!(
            "delta-v budget: {required_delta_v_m_s:.3} m/s required of {available_delta_v_m_s:.3} m/s ({margin_percent:.2} %, {status})"
        );

        Self {
            available_delta_v_m_s,
            lines,
            subtotal_delta_v_m_s,
            margin_delta_v_m_s,
            required_delta_v_m_s,
            required_propellant_kg,
            remaining_propellant_kg: remaining,
            margin_percent,
            status,
        }
    }
}

impl fmt::Display for DeltaVBudgetResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for line in &self.lines {
            writeln!(
                f,
                "{:<24} {:>10.3} m/s {:>10.4} kg (remaining {:.4} kg)",
                line.name, line.delta_v_m_s, line.propellant_kg, line.remaining_propellant_kg
            )?;
        }
        writeln!(
            f,
            "required {:.3} m/s / available {:.3} m/s",
            self.required_delta_v_m_s, self.available_delta_v_m_s
        )?;
        write!(f, "margin {:.2} % [{}]", self.margin_percent, self.status)
    }
}
