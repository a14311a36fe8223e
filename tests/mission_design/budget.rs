extern crate tycho;

use approx::assert_abs_diff_eq;
use tycho::dynamics::{PropulsionConfig, PropulsionKind};
use tycho::io::MissionScenario;
use tycho::md::prelude::*;
use tycho::OrbitalElements;

#[test]
fn cubesat_scenario_budget() {
    let _ = pretty_env_logger::try_init();

    let scenario = MissionScenario::from_yaml(crate::test_config("leo_cubesat.yaml"))
        .expect("could not load the scenario");
    let budget = scenario.budget();
    println!("{budget}");

    assert_abs_diff_eq!(budget.available_delta_v_m_s, 44.303, epsilon = 1e-3);
    // 5 + 3 x 2 + 3 x 1 plus ten percent
    assert_abs_diff_eq!(budget.subtotal_delta_v_m_s, 14.0, epsilon = 1e-12);
    assert_abs_diff_eq!(budget.required_delta_v_m_s, 15.4, epsilon = 1e-9);
    assert_abs_diff_eq!(
        budget.required_delta_v_m_s,
        budget.subtotal_delta_v_m_s + budget.margin_delta_v_m_s,
        epsilon = 1e-12
    );
    assert_eq!(budget.status, BudgetStatus::Nominal);

    assert_eq!(budget.lines.len(), 4);
    assert_eq!(budget.lines[3].id, "margin");
    let mut remaining = scenario.propulsion.propellant_mass_kg;
    for line in &budget.lines {
        assert!(line.remaining_propellant_kg <= remaining);
        assert!(line.propellant_kg >= 0.0);
        remaining = line.remaining_propellant_kg;
    }
    assert_eq!(budget.remaining_propellant_kg, remaining);
    assert!(remaining > 0.0);
}

#[test]
fn standard_allocations_exhaust_a_cold_gas_thruster() {
    let elements = OrbitalElements::new(6_928.137, 0.001, 97.59, 45.0, 90.0, 0.0);
    let maneuvers = StandardManeuvers::default().build(&elements);
    let ids = maneuvers.iter().map(|m| m.id.as_str()).collect::<Vec<&str>>();
    assert!(ids.contains(&"deorbit"));

    let propulsion = PropulsionConfig::from_kind(PropulsionKind::ColdGas, 0.8);
    let budget = DeltaVBudgetResult::compute(&propulsion, 12.0, 3.0, &maneuvers);

    // Deorbiting from 550 km costs more than a cold gas thruster provides
    assert!(budget.required_delta_v_m_s > budget.available_delta_v_m_s);
    assert!(budget.margin_percent < 0.0);
    assert_eq!(budget.status, BudgetStatus::Critical);
    assert_eq!(budget.remaining_propellant_kg, 0.0);
    assert!(budget.required_propellant_kg > propulsion.propellant_mass_kg);
}

#[test]
fn electric_propulsion_has_room() {
    let elements = OrbitalElements::new(6_928.137, 0.001, 97.59, 45.0, 90.0, 0.0);
    let maneuvers = StandardManeuvers::default().build(&elements);

    let propulsion = PropulsionConfig::from_kind(PropulsionKind::HallEffect, 2.0);
    let budget = DeltaVBudgetResult::compute(&propulsion, 100.0, 5.0, &maneuvers);
    assert!(budget.available_delta_v_m_s > 290.0);
    assert_eq!(budget.status, BudgetStatus::Nominal);
}
