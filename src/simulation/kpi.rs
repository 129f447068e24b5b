//! Scenario outcome KPI figures
//!
//! Populated with scenario-specific constants when a script completes;
//! purely narrative numbers for the results dashboard.

use super::types::ScenarioKind;

/// Summary figures published when a scenario completes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KpiReport {
    pub delays_prevented: u32,
    pub time_saved_hours: f32,
    pub cost_saved_usd: u32,
    pub sla_improvement_pct: u32,
    pub active_agents: u32,
}

impl KpiReport {
    /// The fixed outcome figures for a scenario
    pub fn for_scenario(kind: ScenarioKind) -> Self {
        match kind {
            ScenarioKind::SupplierDelay => Self {
                delays_prevented: 1,
                time_saved_hours: 4.0,
                cost_saved_usd: 250,
                sla_improvement_pct: 8,
                active_agents: 2,
            },
            ScenarioKind::TrafficJam => Self {
                delays_prevented: 1,
                time_saved_hours: 1.8,
                cost_saved_usd: 320,
                sla_improvement_pct: 15,
                active_agents: 2,
            },
            ScenarioKind::DocumentIssue => Self {
                delays_prevented: 1,
                time_saved_hours: 2.5,
                cost_saved_usd: 850,
                sla_improvement_pct: 12,
                active_agents: 3,
            },
        }
    }

    /// Get a summary string for display
    pub fn summary(&self) -> String {
        format!(
            "Delays prevented: {} | Time saved: {:.1}h | Cost saved: ${} | SLA: +{}% | Agents: {}",
            self.delays_prevented,
            self.time_saved_hours,
            self.cost_saved_usd,
            self.sla_improvement_pct,
            self.active_agents
        )
    }
}
