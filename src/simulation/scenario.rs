//! Scripted disruption scenarios
//!
//! Each scenario is a fixed, time-ordered narrative: monitoring agents come
//! online, an event is detected, impact is assessed, and a recommendation is
//! offered for the user to approve. Scripts are plain data — lists of
//! (delay, actions) steps — executed by the world through the cancellable
//! scheduler, so nothing here holds a timer of its own.

use super::agents::MessageKind;
use super::types::{ScenarioKind, Traffic, TruckId, TruckStatus};

/// A single scripted state mutation
#[derive(Debug, Clone)]
pub enum StepAction {
    /// Register a new working agent activity
    BeginActivity {
        id: &'static str,
        agent: &'static str,
        action: &'static str,
    },
    /// Complete an existing activity with a discovery/result description
    CompleteActivity {
        id: &'static str,
        action: &'static str,
    },
    /// Flag a truck as affected with a downgraded status and ETA
    DisruptTruck {
        truck: TruckId,
        status: TruckStatus,
        eta: &'static str,
    },
    /// Clear a truck's affected flag and reflect the applied mitigation
    RelieveTruck {
        truck: TruckId,
        status: TruckStatus,
        eta: &'static str,
        renamed: &'static str,
    },
    /// Fast-forward a truck to a scripted point on its route
    PlaceTruck {
        truck: TruckId,
        segment: usize,
        progress: f32,
    },
    /// Append an agent log message
    PushMessage {
        agent: &'static str,
        message: &'static str,
        kind: MessageKind,
    },
    /// Make the approve-recommendation action available to the user
    OfferRecommendation,
    /// Override the global traffic condition
    ForceTraffic(Traffic),
    /// Raise the document-issue panel (document scenario only)
    FlagDocumentIssue,
    /// Mark the document as fixed (document scenario only)
    MarkDocumentFixed,
    /// Hide the agent "thinking" indicator
    ClearThinking,
    /// End the scenario and publish its KPI figures
    CompleteScenario,
}

/// One step of a script: a delay relative to the script's start (or to the
/// approval action, for approval steps) plus the mutations to apply
#[derive(Debug, Clone)]
pub struct ScriptStep {
    pub delay: f32,
    pub actions: Vec<StepAction>,
}

/// Delay between approval and the scenario's completion step
pub const COMPLETION_DELAY_SECS: f32 = 10.0;

/// Delay before the document-fix activity completes after approval
pub const DOCUMENT_FIX_DELAY_SECS: f32 = 3.0;

/// How long the "thinking" indicator stays visible
pub const THINKING_CLEAR_SECS: f32 = 2.0;

/// Per-tick probability of a "thinking" flash during the document scenario
pub const THINKING_CHANCE: f64 = 0.1;

/// Rotating status lines for the document scenario's thinking indicator
pub const THINKING_MESSAGES: [&str; 5] = [
    "Document Intelligence Agent analyzing invoice data...",
    "Searching for matching customs codes in database...",
    "Cross-referencing with previous shipments...",
    "Analyzing document formatting anomalies...",
    "Checking digital signatures...",
];

const TRUCK_1: TruckId = TruckId(0);
const TRUCK_2: TruckId = TruckId(1);
const TRUCK_3: TruckId = TruckId(2);

/// The scripted steps for a scenario, starting the moment it is selected
pub fn script(kind: ScenarioKind) -> Vec<ScriptStep> {
    match kind {
        ScenarioKind::SupplierDelay => vec![
            ScriptStep {
                delay: 0.0,
                actions: vec![
                    StepAction::BeginActivity {
                        id: "sd-1",
                        agent: "Supplier Monitoring Agent",
                        action: "Monitoring supplier loading schedule",
                    },
                    StepAction::BeginActivity {
                        id: "sd-2",
                        agent: "Logistics Agent",
                        action: "Tracking shipment readiness",
                    },
                ],
            },
            ScriptStep {
                delay: 2.0,
                actions: vec![
                    StepAction::CompleteActivity {
                        id: "sd-1",
                        action: "Detected loading delay at Origin 2",
                    },
                    StepAction::BeginActivity {
                        id: "sd-3",
                        agent: "Risk Assessment Agent",
                        action: "Calculating impact on delivery timeline",
                    },
                    StepAction::DisruptTruck {
                        truck: TRUCK_2,
                        status: TruckStatus::Delayed,
                        eta: "65 min",
                    },
                    StepAction::PushMessage {
                        agent: "Supplier Monitoring Agent",
                        message: "Supplier at Origin 2 failed to load shipment on time. \
                                  Truck T002 delayed at origin.",
                        kind: MessageKind::Warning,
                    },
                    StepAction::OfferRecommendation,
                ],
            },
            ScriptStep {
                delay: 4.0,
                actions: vec![
                    StepAction::CompleteActivity {
                        id: "sd-3",
                        action: "Impact analysis complete: 4h delay predicted",
                    },
                    StepAction::BeginActivity {
                        id: "sd-4",
                        agent: "Strategy Agent",
                        action: "Evaluating rerouting options",
                    },
                ],
            },
        ],

        ScenarioKind::TrafficJam => vec![
            ScriptStep {
                delay: 0.0,
                actions: vec![
                    StepAction::BeginActivity {
                        id: "tj-1",
                        agent: "GPS Monitoring Agent",
                        action: "Tracking real-time vehicle positions",
                    },
                    StepAction::BeginActivity {
                        id: "tj-2",
                        agent: "Traffic Analysis Agent",
                        action: "Monitoring traffic conditions",
                    },
                ],
            },
            ScriptStep {
                delay: 1.0,
                actions: vec![StepAction::PlaceTruck {
                    truck: TRUCK_1,
                    segment: 1,
                    progress: 30.0,
                }],
            },
            ScriptStep {
                delay: 2.0,
                actions: vec![
                    StepAction::CompleteActivity {
                        id: "tj-2",
                        action: "Detected severe traffic jam on Route A",
                    },
                    StepAction::BeginActivity {
                        id: "tj-3",
                        agent: "Risk Detection Agent",
                        action: "Calculating delay impact",
                    },
                    StepAction::ForceTraffic(Traffic::Jam),
                    StepAction::DisruptTruck {
                        truck: TRUCK_1,
                        status: TruckStatus::Delayed,
                        eta: "120 min",
                    },
                    StepAction::PushMessage {
                        agent: "Risk Detection Agent",
                        message: "Detected traffic jam near Route A - expected delay: 2.5h.",
                        kind: MessageKind::Warning,
                    },
                    StepAction::OfferRecommendation,
                ],
            },
            ScriptStep {
                delay: 4.0,
                actions: vec![
                    StepAction::CompleteActivity {
                        id: "tj-3",
                        action: "Delay impact analysis complete",
                    },
                    StepAction::BeginActivity {
                        id: "tj-4",
                        agent: "Strategy Agent",
                        action: "Analyzing alternative routes",
                    },
                ],
            },
        ],

        ScenarioKind::DocumentIssue => vec![
            ScriptStep {
                delay: 0.0,
                actions: vec![
                    StepAction::BeginActivity {
                        id: "di-1",
                        agent: "Document Intelligence Agent",
                        action: "Scanning shipment documentation",
                    },
                    StepAction::BeginActivity {
                        id: "di-2",
                        agent: "Compliance Agent",
                        action: "Monitoring regulatory requirements",
                    },
                ],
            },
            ScriptStep {
                delay: 1.0,
                actions: vec![StepAction::PlaceTruck {
                    truck: TRUCK_3,
                    segment: 1,
                    progress: 40.0,
                }],
            },
            ScriptStep {
                delay: 2.0,
                actions: vec![
                    StepAction::CompleteActivity {
                        id: "di-1",
                        action: "Found documentation mismatch in customs code",
                    },
                    StepAction::BeginActivity {
                        id: "di-3",
                        agent: "Risk Assessment Agent",
                        action: "Evaluating customs clearance impact",
                    },
                    StepAction::DisruptTruck {
                        truck: TRUCK_3,
                        status: TruckStatus::Cautious,
                        eta: "90 min",
                    },
                    StepAction::FlagDocumentIssue,
                    StepAction::PushMessage {
                        agent: "Document Intelligence Agent",
                        message: "Mismatch detected in customs code for shipment #82491. \
                                  Flagged for manual verification.",
                        kind: MessageKind::Warning,
                    },
                    StepAction::OfferRecommendation,
                ],
            },
            ScriptStep {
                delay: 4.0,
                actions: vec![
                    StepAction::CompleteActivity {
                        id: "di-3",
                        action: "Clearance delay of 3.5h predicted",
                    },
                    StepAction::BeginActivity {
                        id: "di-4",
                        agent: "Insight Agent",
                        action: "Analyzing historical documentation issues",
                    },
                ],
            },
        ],
    }
}

/// The steps applied when the user approves the scenario's recommendation.
/// Delay 0 steps apply synchronously; the rest are armed on the scheduler.
pub fn approval(kind: ScenarioKind) -> Vec<ScriptStep> {
    match kind {
        ScenarioKind::SupplierDelay => vec![
            ScriptStep {
                delay: 0.0,
                actions: vec![
                    StepAction::PushMessage {
                        agent: "Logistics Agent",
                        message: "Recommending reroute of Truck T003 to pick up critical \
                                  components from Origin 2.",
                        kind: MessageKind::Recommendation,
                    },
                    StepAction::PushMessage {
                        agent: "Efficiency Agent",
                        message: "Potential delay avoided: 4h. Cost saved: $250.",
                        kind: MessageKind::Success,
                    },
                    StepAction::RelieveTruck {
                        truck: TRUCK_2,
                        status: TruckStatus::OnTime,
                        eta: "40 min",
                        renamed: "Truck 2 (Rerouted)",
                    },
                    StepAction::CompleteActivity {
                        id: "sd-4",
                        action: "Selected optimal rerouting solution",
                    },
                    StepAction::BeginActivity {
                        id: "sd-5",
                        agent: "Efficiency Agent",
                        action: "Calculating time and cost savings",
                    },
                ],
            },
            ScriptStep {
                delay: COMPLETION_DELAY_SECS,
                actions: vec![StepAction::CompleteScenario],
            },
        ],

        ScenarioKind::TrafficJam => vec![
            ScriptStep {
                delay: 0.0,
                actions: vec![
                    StepAction::PushMessage {
                        agent: "Strategy Agent",
                        message: "Rerouting to Alt Route B. ETA improves by 1.8h. \
                                  Fuel usage increases by 3%.",
                        kind: MessageKind::Recommendation,
                    },
                    StepAction::PushMessage {
                        agent: "Efficiency Agent",
                        message: "Delay minimized. Final delivery meets SLA.",
                        kind: MessageKind::Success,
                    },
                    StepAction::RelieveTruck {
                        truck: TRUCK_1,
                        status: TruckStatus::Rerouted,
                        eta: "60 min",
                        renamed: "Truck 1 (Rerouted)",
                    },
                    StepAction::CompleteActivity {
                        id: "tj-4",
                        action: "Selected Alt Route B as optimal solution",
                    },
                    StepAction::BeginActivity {
                        id: "tj-5",
                        agent: "Efficiency Agent",
                        action: "Calculating fuel usage and time impact",
                    },
                ],
            },
            ScriptStep {
                delay: COMPLETION_DELAY_SECS,
                actions: vec![StepAction::CompleteScenario],
            },
        ],

        ScenarioKind::DocumentIssue => vec![
            ScriptStep {
                delay: 0.0,
                actions: vec![
                    StepAction::PushMessage {
                        agent: "Compliance Agent",
                        message: "Suggested fix: pull correct documentation from supplier API. \
                                  Notify customs handling team.",
                        kind: MessageKind::Recommendation,
                    },
                    StepAction::PushMessage {
                        agent: "Insight Agent",
                        message: "3 similar issues detected this month. Recommend automated \
                                  document validation pre-arrival.",
                        kind: MessageKind::Info,
                    },
                    StepAction::MarkDocumentFixed,
                    StepAction::CompleteActivity {
                        id: "di-4",
                        action: "Identified 3 similar issues this month",
                    },
                    StepAction::BeginActivity {
                        id: "di-5",
                        agent: "Document Fix Agent",
                        action: "Retrieving correct customs code from supplier API",
                    },
                ],
            },
            ScriptStep {
                delay: DOCUMENT_FIX_DELAY_SECS,
                actions: vec![StepAction::CompleteActivity {
                    id: "di-5",
                    action: "Applied document correction",
                }],
            },
            ScriptStep {
                delay: COMPLETION_DELAY_SECS,
                actions: vec![StepAction::CompleteScenario],
            },
        ],
    }
}
