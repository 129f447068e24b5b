//! Scenario script validation tests
//!
//! These tests drive the three scripted disruption scenarios end to end:
//! detection, recommendation, approval, completion, cancellation on
//! reset/switch, and approval idempotence.

use logistics_sim::simulation::{
    ActivityStatus, KpiReport, MessageKind, ScenarioKind, SimWorld, TruckStatus,
    TICK_INTERVAL_SECS,
};

/// Advance the world by roughly the given number of simulated seconds
fn run_secs(world: &mut SimWorld, secs: f32) {
    let ticks = (secs / TICK_INTERVAL_SECS).ceil() as u32;
    for _ in 0..ticks {
        world.tick(TICK_INTERVAL_SECS);
    }
}

fn count_kind(world: &SimWorld, kind: MessageKind) -> usize {
    world.messages.iter().filter(|m| m.kind == kind).count()
}

#[test]
fn test_supplier_delay_detection_and_approval() {
    let mut world = SimWorld::new_with_seed(1).expect("world should build");
    world.select_scenario(ScenarioKind::SupplierDelay);

    // Two monitoring agents come online immediately.
    assert_eq!(world.activities.len(), 2);
    assert_eq!(
        world.activities.get("sd-1").unwrap().status,
        ActivityStatus::Working
    );

    // Past the 2s detection step: T002 is delayed at origin.
    run_secs(&mut world, 2.2);
    let t002 = &world.trucks[1];
    assert_eq!(t002.status, TruckStatus::Delayed);
    assert!(t002.is_affected);
    assert_eq!(t002.eta, "65 min");
    assert!(world.recommendation_available);

    let warnings: Vec<_> = world
        .messages
        .iter()
        .filter(|m| m.kind == MessageKind::Warning)
        .collect();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].message.contains("Origin 2"));

    // Past the 4s assessment step, then approve.
    run_secs(&mut world, 2.2);
    assert_eq!(
        world.activities.get("sd-3").unwrap().status,
        ActivityStatus::Completed
    );

    world.approve_recommendation();

    let t002 = &world.trucks[1];
    assert_eq!(t002.status, TruckStatus::OnTime);
    assert!(!t002.is_affected);
    assert_eq!(t002.eta, "40 min");
    assert_eq!(t002.name, "Truck 2 (Rerouted)");
    assert_eq!(count_kind(&world, MessageKind::Recommendation), 1);
    assert_eq!(count_kind(&world, MessageKind::Success), 1);
    assert!(!world.recommendation_available);
    assert!(!world.scenario_completed);

    // Completion fires 10s after approval.
    run_secs(&mut world, 10.2);
    assert!(world.scenario_completed);
    assert_eq!(
        world.kpi,
        KpiReport::for_scenario(ScenarioKind::SupplierDelay)
    );
}

#[test]
fn test_traffic_jam_scenario() {
    let mut world = SimWorld::new_with_seed(2).expect("world should build");
    world.select_scenario(ScenarioKind::TrafficJam);

    // The script places T001 en route at 1s, then detects the jam at 2s.
    run_secs(&mut world, 2.2);

    use logistics_sim::simulation::Traffic;
    assert_eq!(world.traffic, Traffic::Jam);

    let t001 = &world.trucks[0];
    assert!(t001.current_segment >= 1);
    assert_eq!(t001.status, TruckStatus::Delayed);
    assert!(t001.is_affected);
    assert_eq!(t001.eta, "120 min");
    assert!(world.recommendation_available);

    run_secs(&mut world, 2.2);
    world.approve_recommendation();

    let t001 = &world.trucks[0];
    assert_eq!(t001.status, TruckStatus::Rerouted);
    assert!(!t001.is_affected);
    assert_eq!(t001.eta, "60 min");
    assert_eq!(t001.name, "Truck 1 (Rerouted)");

    run_secs(&mut world, 10.2);
    assert!(world.scenario_completed);
    assert_eq!(world.kpi, KpiReport::for_scenario(ScenarioKind::TrafficJam));
}

#[test]
fn test_document_issue_scenario() {
    let mut world = SimWorld::new_with_seed(3).expect("world should build");
    world.select_scenario(ScenarioKind::DocumentIssue);

    run_secs(&mut world, 2.2);
    assert!(world.document_issue);
    assert!(!world.document_fixed);

    let t003 = &world.trucks[2];
    assert_eq!(t003.status, TruckStatus::Cautious);
    assert!(t003.is_affected);
    assert_eq!(t003.eta, "90 min");
    assert!(world
        .messages
        .iter()
        .any(|m| m.kind == MessageKind::Warning && m.message.contains("#82491")));

    run_secs(&mut world, 2.2);
    world.approve_recommendation();

    assert!(world.document_fixed);
    assert_eq!(count_kind(&world, MessageKind::Recommendation), 1);
    assert_eq!(count_kind(&world, MessageKind::Info), 1);
    assert_eq!(
        world.activities.get("di-5").unwrap().status,
        ActivityStatus::Working
    );

    // The document-fix activity completes 3s after approval.
    run_secs(&mut world, 3.2);
    let fix = world.activities.get("di-5").unwrap();
    assert_eq!(fix.status, ActivityStatus::Completed);
    assert_eq!(fix.action, "Applied document correction");

    run_secs(&mut world, 7.2);
    assert!(world.scenario_completed);
    assert_eq!(
        world.kpi,
        KpiReport::for_scenario(ScenarioKind::DocumentIssue)
    );
    assert_eq!(world.kpi.active_agents, 3);
}

#[test]
fn test_switching_scenarios_cancels_prior_timers() {
    let mut world = SimWorld::new_with_seed(4).expect("world should build");
    world.select_scenario(ScenarioKind::SupplierDelay);
    assert!(world.pending_steps() > 0);

    // Switch before the supplier script's 2s detection step fires.
    run_secs(&mut world, 0.3);
    world.select_scenario(ScenarioKind::TrafficJam);

    // Run well past every supplier-delay delay.
    run_secs(&mut world, 6.0);

    // Nothing from the supplier script may have leaked through.
    assert!(
        !world.messages.iter().any(|m| m.message.contains("Origin 2")),
        "stale supplier-delay timer fired after scenario switch"
    );
    assert!(world
        .activities
        .entries()
        .iter()
        .all(|a| a.id.starts_with("tj-")));
    assert!(!world.trucks[1].is_affected, "T002 belongs to the old script");

    // The traffic script itself ran normally.
    assert!(world.trucks[0].is_affected);
    assert!(world
        .messages
        .iter()
        .any(|m| m.message.contains("Route A")));
}

#[test]
fn test_approve_without_recommendation_is_a_noop() {
    let mut world = SimWorld::new_with_seed(5).expect("world should build");

    world.approve_recommendation();

    assert!(world.messages.is_empty());
    assert!(world.activities.is_empty());
    assert!(!world.scenario_completed);
    assert_eq!(world.kpi, KpiReport::default());
}

#[test]
fn test_double_approval_does_not_duplicate() {
    let mut world = SimWorld::new_with_seed(6).expect("world should build");
    world.select_scenario(ScenarioKind::SupplierDelay);
    run_secs(&mut world, 4.5);

    world.approve_recommendation();
    let messages_after_first = world.messages.len();
    let pending_after_first = world.pending_steps();

    world.approve_recommendation();

    assert_eq!(world.messages.len(), messages_after_first);
    assert_eq!(world.pending_steps(), pending_after_first);
}

#[test]
fn test_reset_mid_scenario_restores_everything() {
    let mut world = SimWorld::new_with_seed(8).expect("world should build");
    let initial_etas: Vec<String> = world.trucks.iter().map(|t| t.eta.clone()).collect();

    world.select_scenario(ScenarioKind::DocumentIssue);
    run_secs(&mut world, 2.5);
    assert!(world.trucks[2].is_affected);
    assert!(world.pending_steps() > 0);

    world.reset();

    assert!(world.scenario.is_none());
    assert_eq!(world.pending_steps(), 0);
    assert!(world.messages.is_empty());
    assert!(world.activities.is_empty());
    assert!(world.active_agents.is_empty());
    assert!(!world.recommendation_available);
    assert!(!world.document_issue);
    assert!(world.thinking.is_none());

    for (truck, eta) in world.trucks.iter().zip(&initial_etas) {
        assert_eq!(truck.status, TruckStatus::OnTime);
        assert!(!truck.is_affected);
        assert_eq!(truck.current_segment, 0);
        assert_eq!(truck.progress, 0.0);
        assert_eq!(&truck.eta, eta);
        let start = world
            .route_map
            .route(truck.route_id)
            .unwrap()
            .start_point()
            .unwrap();
        assert_eq!(truck.position, start);
    }

    // Stale timers stay cancelled: nothing fires after the reset.
    run_secs(&mut world, 10.0);
    assert!(world.messages.is_empty());
    assert!(world.activities.is_empty());
}
