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

extern crate log;
extern crate pretty_env_logger;
extern crate tycho;

use clap::Parser;
use log::{error, info};
use std::env::{set_var, var};
use std::path::PathBuf;
use std::process::ExitCode;
use tycho::io::MissionScenario;
use tycho::od::ContactStatistics;

const LOG_VAR: &str = "TYCHO_LOG";

/// Small-satellite mission design: orbit geometry, ground contacts and delta-v budget.
#[derive(Parser, Debug)]
#[command(name = "tycho", version, about)]
struct Cli {
    /// Mission scenario YAML file
    scenario: PathBuf,
    /// Print every pass instead of the contact statistics only
    #[arg(short, long)]
    passes: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if var(LOG_VAR).is_err() {
        set_var(LOG_VAR, "INFO");
    }

    if pretty_env_logger::try_init_custom_env(LOG_VAR).is_err() {
        println!("could not init logger");
    }

    let scenario = match MissionScenario::from_yaml(&cli.scenario) {
        Ok(scenario) => scenario,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    info!("Loaded scenario `{}` from {}", scenario.name, cli.scenario.display());

    println!("== {} ==\n", scenario.name);
    println!("{}\n", scenario.orbital_elements());
    println!("{}\n", scenario.derived());

    let passes = scenario.pass_predictor().predict();
    if cli.passes {
        for pass in &passes {
            println!("{pass}");
        }
        println!();
    }
    let stats = ContactStatistics::from_passes(
        &passes,
        scenario.scan.duration_days,
        scenario.scan.data_rate_mbps,
    );
    println!(
        "Contacts over {} days with {} stations",
        scenario.scan.duration_days,
        scenario.stations.iter().filter(|gs| gs.active).count()
    );
    println!("{stats}\n");

    println!("Delta-v budget with {}", scenario.propulsion);
    println!("{}", scenario.budget());

    ExitCode::SUCCESS
}
