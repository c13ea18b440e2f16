//! Plain-text reporting: the dimensioning summary and the link-budget audit
//! table echoed back for display.

use crate::planner::NetworkPlan;
use crate::scenario::Scenario;

/// Name of the propagation model, echoed in the audit table.
pub const PROPAGATION_MODEL_NAME: &str = "Cost-231 Hata";

/// Link-budget parameters used for the run, as (name, value) rows for audit
/// display.
pub fn link_budget_table(scenario: &Scenario) -> Vec<(&'static str, String)> {
    vec![
        ("Frequency", format!("{} MHz", scenario.network.frequency_mhz)),
        (
            "Channel bandwidth",
            format!("{} MHz", scenario.network.channel_bandwidth_mhz.mhz()),
        ),
        ("Environment", scenario.zone.environment.label().to_string()),
        (
            "Max path loss",
            format!("{} dB", scenario.network.max_path_loss_db),
        ),
        ("Propagation model", PROPAGATION_MODEL_NAME.to_string()),
    ]
}

/// Render the full dimensioning report as plain text.
pub fn render_report(scenario: &Scenario, plan: &NetworkPlan) -> String {
    let sizing = &plan.sizing;
    let zone = scenario.zone_parameters();

    let mut out = String::new();
    out.push_str("=== Dimensioning results ===\n");
    out.push_str(&format!("Sites (eNodeB):          {}\n", sizing.final_site_count));
    out.push_str(&format!("Cell radius:             {:.2} km\n", sizing.cell_radius_km));
    out.push_str(&format!(
        "Inter-site distance:     {:.2} km\n",
        sizing.inter_site_distance_km
    ));
    out.push_str(&format!("Cell area:               {:.2} km2\n", sizing.cell_area_km2));
    out.push_str(&format!(
        "Coverage-driven sites:   {}\n",
        sizing.coverage_site_count
    ));
    out.push_str(&format!(
        "Capacity-driven sites:   {}\n",
        sizing.capacity_site_count
    ));
    out.push_str(&format!(
        "Active subscribers:      {}\n",
        zone.active_users() as u64
    ));
    out.push_str(&format!("Sites placed in layout:  {}\n", plan.sites.len()));

    out.push_str("\n=== Link budget ===\n");
    for (name, value) in link_budget_table(scenario) {
        out.push_str(&format!("{:<20} {}\n", format!("{name}:"), value));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::plan_network;

    #[test]
    fn audit_table_echoes_the_link_budget_inputs() {
        let rows = link_budget_table(&Scenario::example());
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0], ("Frequency", "1800 MHz".to_string()));
        assert_eq!(rows[1], ("Channel bandwidth", "10 MHz".to_string()));
        assert_eq!(rows[2], ("Environment", "urban".to_string()));
        assert_eq!(rows[3], ("Max path loss", "138.5 dB".to_string()));
        assert_eq!(rows[4], ("Propagation model", "Cost-231 Hata".to_string()));
    }

    #[test]
    fn report_carries_the_key_figures() {
        let scenario = Scenario::example();
        let plan = plan_network(&scenario).unwrap();
        let report = render_report(&scenario, &plan);
        assert!(report.contains("Sites (eNodeB):          875"));
        assert!(report.contains("Cell radius:             1.28 km"));
        assert!(report.contains("Active subscribers:      26250"));
        assert!(report.contains("Cost-231 Hata"));
    }
}
