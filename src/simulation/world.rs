//! Main simulation world that ties everything together
//!
//! `SimWorld` owns all mutable engine state and is the only place that
//! mutates it: the periodic `tick` drives truck motion and environmental
//! randomization, while the scheduler fires scripted scenario steps. The
//! two are logically independent; the tick keeps running throughout
//! scenario scripting.

use anyhow::{Context, Result};
use log::debug;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::Rng;
use rand::SeedableRng;

use super::agents::{ActivityLog, AgentMessage};
use super::kpi::KpiReport;
use super::route_map::RouteMap;
use super::scenario::{self, StepAction, THINKING_CHANCE, THINKING_CLEAR_SECS, THINKING_MESSAGES};
use super::scheduler::Scheduler;
use super::truck::SimTruck;
use super::types::{
    Point, RouteId, ScenarioKind, Traffic, TruckId, TruckStatus, Weather, TRAFFIC_FLIP_CHANCE,
    WEATHER_FLIP_CHANCE,
};

/// Static fleet configuration: (name, origin, destination, route, initial ETA)
const FLEET: [(&str, &str, &str, RouteId, &str); 5] = [
    ("Truck 1", "Origin 1", "Destination 2", RouteId(0), "45 min"),
    ("Truck 2", "Origin 2", "Central Hub", RouteId(1), "30 min"),
    ("Truck 3", "Central Hub", "Destination 1", RouteId(2), "75 min"),
    ("Truck 4", "Origin 3", "Central Hub", RouteId(3), "55 min"),
    ("Truck 5", "Central Hub", "Destination 2", RouteId(4), "15 min"),
];

/// The main simulation world
pub struct SimWorld {
    /// Static route network, shared read-only by every truck
    pub route_map: RouteMap,

    /// The tracked fleet, indexed by `TruckId`
    pub trucks: Vec<SimTruck>,

    /// Global weather condition
    pub weather: Weather,

    /// Global traffic condition
    pub traffic: Traffic,

    /// Append-only agent message log
    pub messages: Vec<AgentMessage>,

    /// Agent activity timeline for the live scenario
    pub activities: ActivityLog,

    /// Names of agents that have come online this scenario
    pub active_agents: Vec<&'static str>,

    /// Whether the approve-recommendation action is currently available
    pub recommendation_available: bool,

    /// The live scenario, if one is selected
    pub scenario: Option<ScenarioKind>,

    /// Whether the live scenario has run to completion
    pub scenario_completed: bool,

    /// Document scenario: an issue has been detected
    pub document_issue: bool,

    /// Document scenario: the issue has been fixed
    pub document_fixed: bool,

    /// Transient agent "thinking" indicator text
    pub thinking: Option<&'static str>,

    /// Outcome figures, populated when the scenario completes
    pub kpi: KpiReport,

    /// Simulation time in seconds
    pub time: f32,

    /// Pending scripted steps for the live scenario
    scheduler: Scheduler,

    /// Optional seeded RNG for reproducible environmental flips
    rng: Option<StdRng>,
}

impl SimWorld {
    fn new_internal(rng: Option<StdRng>) -> Result<Self> {
        let route_map = RouteMap::standard_network()?;

        let mut trucks = Vec::with_capacity(FLEET.len());
        for (index, (name, origin, destination, route_id, eta)) in FLEET.iter().enumerate() {
            let start = route_map
                .route(*route_id)
                .and_then(|r| r.start_point())
                .with_context(|| format!("fleet truck {} assigned to unusable route", name))?;
            trucks.push(SimTruck::new(
                TruckId(index),
                name,
                origin,
                destination,
                *route_id,
                eta,
                start,
            ));
        }

        Ok(Self {
            route_map,
            trucks,
            weather: Weather::Sunny,
            traffic: Traffic::Smooth,
            messages: Vec::new(),
            activities: ActivityLog::new(),
            active_agents: Vec::new(),
            recommendation_available: false,
            scenario: None,
            scenario_completed: false,
            document_issue: false,
            document_fixed: false,
            thinking: None,
            kpi: KpiReport::default(),
            time: 0.0,
            scheduler: Scheduler::new(),
            rng,
        })
    }

    pub fn new() -> Result<Self> {
        Self::new_internal(None)
    }

    /// Create a world with a seeded RNG for reproducible simulations
    pub fn new_with_seed(seed: u64) -> Result<Self> {
        Self::new_internal(Some(StdRng::seed_from_u64(seed)))
    }

    /// Roll a probability check, using the seeded RNG if available
    fn chance(&mut self, probability: f64) -> bool {
        let roll: f64 = match &mut self.rng {
            Some(rng) => rng.random(),
            None => rand::rng().random(),
        };
        roll < probability
    }

    /// Choose a random element from a slice, using the seeded RNG if available
    fn choose_random<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        if slice.is_empty() {
            return None;
        }
        match &mut self.rng {
            Some(rng) => slice.choose(rng),
            None => slice.choose(&mut rand::rng()),
        }
    }

    /// Number of scripted steps still armed on the scheduler
    pub fn pending_steps(&self) -> usize {
        self.scheduler.pending_count()
    }

    /// Main simulation tick
    pub fn tick(&mut self, delta_secs: f32) {
        self.time += delta_secs;

        // Fire due scripted steps before motion so scripted placements and
        // the motion update never interleave within one tick.
        for actions in self.scheduler.take_due(self.time) {
            for action in actions {
                self.apply_action(action);
            }
        }

        // Advance every truck along its route.
        for truck in &mut self.trucks {
            truck.advance(delta_secs, &self.route_map);
        }

        // Low-probability environmental flips.
        if self.chance(WEATHER_FLIP_CHANCE) {
            if let Some(&weather) =
                self.choose_random(&[Weather::Sunny, Weather::Cloudy, Weather::Rainy])
            {
                self.weather = weather;
            }
        }

        if self.chance(TRAFFIC_FLIP_CHANCE) {
            let mut choice = self
                .choose_random(&[Traffic::Smooth, Traffic::Moderate, Traffic::Jam])
                .copied()
                .unwrap_or(self.traffic);
            // The traffic scenario pins conditions to "jam" once its truck
            // is en route, so a random flip can't undercut the narrative.
            if self.traffic_jam_pinned() {
                choice = Traffic::Jam;
            }
            self.traffic = choice;
        }

        // Document scenario: occasionally flash a "thinking" status line
        // while the issue is open.
        if self.scenario == Some(ScenarioKind::DocumentIssue)
            && self.document_issue
            && !self.document_fixed
            && self.chance(THINKING_CHANCE)
        {
            if let Some(&message) = self.choose_random(&THINKING_MESSAGES) {
                self.thinking = Some(message);
                self.scheduler
                    .schedule(self.time + THINKING_CLEAR_SECS, vec![StepAction::ClearThinking]);
            }
        }
    }

    fn traffic_jam_pinned(&self) -> bool {
        self.scenario == Some(ScenarioKind::TrafficJam)
            && !self.scenario_completed
            && self
                .trucks
                .first()
                .is_some_and(|t| t.current_segment >= 1 && t.progress > 30.0)
    }

    /// Select a scenario: cancels anything pending, resets all state, and
    /// arms the new script. The monitoring activities register immediately.
    pub fn select_scenario(&mut self, kind: ScenarioKind) {
        self.reset();
        self.scenario = Some(kind);

        for step in scenario::script(kind) {
            if step.delay <= 0.0 {
                for action in step.actions {
                    self.apply_action(action);
                }
            } else {
                self.scheduler.schedule(self.time + step.delay, step.actions);
            }
        }
    }

    /// Approve the current recommendation.
    ///
    /// A no-op when no recommendation is available, so repeated calls can't
    /// duplicate messages or KPI figures.
    pub fn approve_recommendation(&mut self) {
        if !self.recommendation_available {
            debug!("approve ignored: no recommendation available");
            return;
        }
        let kind = match self.scenario {
            Some(kind) => kind,
            None => return,
        };
        self.recommendation_available = false;

        for step in scenario::approval(kind) {
            if step.delay <= 0.0 {
                for action in step.actions {
                    self.apply_action(action);
                }
            } else {
                self.scheduler.schedule(self.time + step.delay, step.actions);
            }
        }
    }

    /// Reset the engine to idle: cancel all pending steps, clear logs and
    /// flags, and restore every truck to its initial state.
    pub fn reset(&mut self) {
        self.scheduler.clear();
        self.messages.clear();
        self.activities.clear();
        self.active_agents.clear();
        self.recommendation_available = false;
        self.scenario = None;
        self.scenario_completed = false;
        self.document_issue = false;
        self.document_fixed = false;
        self.thinking = None;
        self.kpi = KpiReport::default();

        for truck in &mut self.trucks {
            truck.reset(&self.route_map);
        }
    }

    /// Apply one scripted mutation to the world state
    fn apply_action(&mut self, action: StepAction) {
        match action {
            StepAction::BeginActivity { id, agent, action } => {
                self.activities.begin(id, agent, action, self.time);
                if !self.active_agents.contains(&agent) {
                    self.active_agents.push(agent);
                }
            }
            StepAction::CompleteActivity { id, action } => {
                self.activities.complete(id, action, self.time);
            }
            StepAction::DisruptTruck { truck, status, eta } => {
                if let Some(truck) = self.trucks.get_mut(truck.0) {
                    truck.status = status;
                    truck.is_affected = true;
                    truck.eta = eta.to_string();
                }
            }
            StepAction::RelieveTruck {
                truck,
                status,
                eta,
                renamed,
            } => {
                if let Some(truck) = self.trucks.get_mut(truck.0) {
                    truck.status = status;
                    truck.is_affected = false;
                    truck.eta = eta.to_string();
                    truck.name = renamed.to_string();
                }
            }
            StepAction::PlaceTruck {
                truck,
                segment,
                progress,
            } => {
                let route_map = &self.route_map;
                if let Some(truck) = self.trucks.get_mut(truck.0) {
                    truck.place(segment, progress, route_map);
                }
            }
            StepAction::PushMessage {
                agent,
                message,
                kind,
            } => {
                self.messages.push(AgentMessage {
                    agent,
                    message,
                    kind,
                });
            }
            StepAction::OfferRecommendation => {
                self.recommendation_available = true;
            }
            StepAction::ForceTraffic(traffic) => {
                self.traffic = traffic;
            }
            StepAction::FlagDocumentIssue => {
                self.document_issue = true;
            }
            StepAction::MarkDocumentFixed => {
                self.document_fixed = true;
            }
            StepAction::ClearThinking => {
                self.thinking = None;
            }
            StepAction::CompleteScenario => {
                self.scenario_completed = true;
                if let Some(kind) = self.scenario {
                    self.kpi = KpiReport::for_scenario(kind);
                }
            }
        }
    }

    /// Print a summary of the world state
    pub fn print_summary(&self) {
        println!("=== Logistics Simulation Summary ===");
        println!("Time: {:.2}s", self.time);
        println!("Weather: {} | Traffic: {}", self.weather, self.traffic);
        match self.scenario {
            Some(kind) => println!(
                "Scenario: {}{}",
                kind,
                if self.scenario_completed {
                    " (completed)"
                } else {
                    ""
                }
            ),
            None => println!("Scenario: idle"),
        }
        println!();

        println!("--- Fleet ---");
        for truck in &self.trucks {
            let leg = truck
                .current_leg(&self.route_map)
                .map(|(from, to)| format!("{} -> {}", from, to))
                .unwrap_or_else(|| "?".to_string());
            println!(
                "  {} {}{}: {} | {} | segment {} @ {:.1}% | ETA {}",
                truck.id,
                truck.name,
                if truck.is_affected { " [!]" } else { "" },
                truck.status,
                leg,
                truck.current_segment,
                truck.progress,
                truck.eta
            );
        }

        if !self.activities.is_empty() {
            println!("--- Agent Activities ---");
            for activity in self.activities.entries() {
                println!(
                    "  [{}] {} ({}): {}",
                    activity.id, activity.agent, activity.status, activity.action
                );
            }
        }

        if !self.messages.is_empty() {
            println!("--- Agent Messages ---");
            for message in &self.messages {
                println!("  [{}] {}: {}", message.kind, message.agent, message.message);
            }
        }

        if self.recommendation_available {
            println!("Recommendation available - approve to apply mitigation");
        }
        if let Some(thinking) = self.thinking {
            println!("Agent thinking: {}", thinking);
        }
        if self.scenario_completed {
            println!("{}", self.kpi.summary());
        }
    }

    /// Draw a visual map of the [0,100]x[0,100] plane in the terminal
    pub fn draw_map(&self) {
        const WIDTH: usize = 72;
        const HEIGHT: usize = 24;

        let mut grid = vec![vec![' '; WIDTH]; HEIGHT];

        let to_grid = |p: Point| -> (usize, usize) {
            let col = (p.x / 100.0 * (WIDTH - 1) as f32).round() as usize;
            let row = (p.y / 100.0 * (HEIGHT - 1) as f32).round() as usize;
            (row.min(HEIGHT - 1), col.min(WIDTH - 1))
        };

        // Route curves first, then landmarks, then trucks on top.
        for route in &self.route_map.routes {
            for point in &route.path_coordinates {
                let (row, col) = to_grid(*point);
                if grid[row][col] == ' ' {
                    grid[row][col] = '.';
                }
            }
        }

        for location in &self.route_map.locations {
            let (row, col) = to_grid(location.point);
            grid[row][col] = if location.name == "Central Hub" {
                'H'
            } else if location.name.starts_with("Origin") {
                'O'
            } else if location.name.starts_with("Destination") {
                'D'
            } else {
                '+'
            };
        }

        for (index, truck) in self.trucks.iter().enumerate() {
            let (row, col) = to_grid(truck.position);
            grid[row][col] = char::from_digit(index as u32 + 1, 10).unwrap_or('T');
        }

        println!("\n=== Route Map ===");
        println!("Legend: O=Origin, D=Destination, H=Hub, +=Checkpoint, 1-5=Truck, .=Route");
        println!();
        for row in &grid {
            let line: String = row.iter().collect();
            println!("{}", line);
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::types::TICK_INTERVAL_SECS;

    #[test]
    fn fleet_starts_at_route_origins() {
        let world = SimWorld::new().unwrap();
        assert_eq!(world.trucks.len(), 5);

        for truck in &world.trucks {
            let start = world
                .route_map
                .route(truck.route_id)
                .unwrap()
                .start_point()
                .unwrap();
            assert_eq!(truck.position, start);
            assert_eq!(truck.current_segment, 0);
            assert_eq!(truck.progress, 0.0);
            assert_eq!(truck.status, TruckStatus::OnTime);
        }
    }

    #[test]
    fn seeded_worlds_evolve_identically() {
        let mut a = SimWorld::new_with_seed(42).unwrap();
        let mut b = SimWorld::new_with_seed(42).unwrap();

        for _ in 0..500 {
            a.tick(TICK_INTERVAL_SECS);
            b.tick(TICK_INTERVAL_SECS);
        }

        assert_eq!(a.weather, b.weather);
        assert_eq!(a.traffic, b.traffic);
        for (ta, tb) in a.trucks.iter().zip(&b.trucks) {
            assert_eq!(ta.position, tb.position);
            assert_eq!(ta.current_segment, tb.current_segment);
        }
    }

    #[test]
    fn tick_fires_due_scheduled_steps() {
        let mut world = SimWorld::new_with_seed(1).unwrap();
        world.select_scenario(ScenarioKind::SupplierDelay);

        // Monitoring agents register immediately, the rest stays armed.
        assert_eq!(world.activities.len(), 2);
        assert!(world.pending_steps() > 0);

        // Advance past the 2s detection step.
        for _ in 0..20 {
            world.tick(TICK_INTERVAL_SECS);
        }

        assert!(world.activities.len() >= 3);
        assert!(world.recommendation_available);
    }
}
