//! The dimensioning pipeline: scenario in, sizing result and site layout out.
//!
//! Each call is an independent, synchronous computation over its inputs.
//! Identical inputs produce identical plans; nothing is cached or shared
//! between runs.

use log::{debug, info};
use serde::Serialize;

use crate::error::PlanningError;
use crate::layout::{Point, layout_sites};
use crate::scenario::Scenario;
use crate::sizing::{
    SizingResult, capacity_site_count, cell_area_km2, coverage_site_count,
    estimated_site_capacity_mbps, final_site_count, inter_site_distance_km,
};

/// Complete result of one planning run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkPlan {
    pub sizing: SizingResult,
    /// Site positions for visualization; may hold fewer than
    /// `sizing.final_site_count` entries when the candidate grid is
    /// exhausted by the zone bound (see [`layout_sites`]).
    pub sites: Vec<Point>,
}

/// Run the full dimensioning pipeline for a scenario.
///
/// Validates the inputs, inverts the propagation model for the cell radius,
/// sizes the network for coverage and for capacity, keeps the binding
/// constraint, and lays the sites out on the planning grid.
pub fn plan_network(scenario: &Scenario) -> Result<NetworkPlan, PlanningError> {
    scenario.validate()?;

    let budget = scenario.link_budget();
    let zone = scenario.zone_parameters();

    let cell_radius_km = budget.cell_radius_km()?;
    let cell_area = cell_area_km2(cell_radius_km);
    debug!(
        "cell radius {:.3} km ({} dB budget), cell area {:.3} km2",
        cell_radius_km, budget.max_path_loss_db, cell_area
    );

    let coverage = coverage_site_count(zone.area_km2, cell_area)?;
    let site_capacity_mbps =
        estimated_site_capacity_mbps(scenario.network.site_capacity_mbps, zone.channel_bandwidth);
    let capacity = capacity_site_count(&zone, site_capacity_mbps)?;
    let final_count = final_site_count(coverage, capacity);
    info!(
        "sized {} sites for {} km2 ({} for coverage, {} for capacity at {} Mbps/site)",
        final_count, zone.area_km2, coverage, capacity, site_capacity_mbps
    );

    let inter_site_km = inter_site_distance_km(cell_radius_km);
    let sites = layout_sites(final_count, inter_site_km, zone.area_km2);

    Ok(NetworkPlan {
        sizing: SizingResult {
            cell_radius_km,
            cell_area_km2: cell_area,
            coverage_site_count: coverage,
            capacity_site_count: capacity,
            final_site_count: final_count,
            inter_site_distance_km: inter_site_km,
        },
        sites,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DomainError, InputError};

    #[test]
    fn reference_scenario_matches_hand_computed_figures() {
        let plan = plan_network(&Scenario::example()).unwrap();
        let sizing = &plan.sizing;

        assert!((sizing.cell_radius_km - 1.2772415314811847).abs() < 1e-9);
        assert!((sizing.cell_area_km2 - 4.241499417325046).abs() < 1e-9);
        assert_eq!(sizing.coverage_site_count, 6);
        assert_eq!(sizing.capacity_site_count, 875);
        assert_eq!(sizing.final_site_count, 875);
        assert!((sizing.inter_site_distance_km - 2.2122472260624955).abs() < 1e-9);
        // Grid-exhaustion case: the 25 km² bound admits only 12 positions.
        assert_eq!(plan.sites.len(), 12);
    }

    #[test]
    fn planning_twice_gives_bit_identical_results() {
        let scenario = Scenario::example();
        let first = plan_network(&scenario).unwrap();
        let second = plan_network(&scenario).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn invalid_inputs_are_rejected_before_any_formula_runs() {
        let mut scenario = Scenario::example();
        scenario.zone.area_km2 = -25.0;
        assert!(matches!(
            plan_network(&scenario),
            Err(PlanningError::Input(InputError::NotPositive { .. }))
        ));
    }

    #[test]
    fn degenerate_mast_height_surfaces_as_a_domain_error() {
        let mut scenario = Scenario::example();
        scenario.network.base_station_height_m = 1.0;
        assert!(matches!(
            plan_network(&scenario),
            Err(PlanningError::Domain(DomainError::DegenerateSlope { .. }))
        ));
    }

    #[test]
    fn coverage_becomes_binding_without_subscriber_traffic() {
        let mut scenario = Scenario::example();
        scenario.traffic.user_density_per_km2 = 0.0;
        let plan = plan_network(&scenario).unwrap();
        assert_eq!(plan.sizing.capacity_site_count, 0);
        assert_eq!(plan.sizing.final_site_count, plan.sizing.coverage_site_count);
        assert_eq!(plan.sites.len(), plan.sizing.final_site_count as usize);
    }
}
