//! Standalone logistics simulation engine
//!
//! This module contains all the core simulation logic: route geometry,
//! truck motion, and the scripted scenario engine. It has no presentation
//! dependencies and can be exercised entirely from the console or tests.

mod agents;
mod geometry;
mod kpi;
mod route_map;
mod scenario;
mod scheduler;
mod truck;
mod types;
mod world;

// Re-export public types for external use
// These may not be used within this crate but are part of the public API
#[allow(unused_imports)]
pub use agents::{ActivityLog, ActivityStatus, AgentActivity, AgentMessage, MessageKind};
#[allow(unused_imports)]
pub use geometry::{path_coordinates, path_string, resolve_position};
#[allow(unused_imports)]
pub use kpi::KpiReport;
#[allow(unused_imports)]
pub use route_map::{Location, Route, RouteMap, RoutePoint};
#[allow(unused_imports)]
pub use scenario::{approval, script, ScriptStep, StepAction, COMPLETION_DELAY_SECS};
#[allow(unused_imports)]
pub use scheduler::Scheduler;
#[allow(unused_imports)]
pub use truck::SimTruck;
#[allow(unused_imports)]
pub use types::{
    Point, RouteId, ScenarioKind, Traffic, TruckId, TruckStatus, Weather, PROGRESS_RATE,
    ROUTE_SAMPLE_POINTS, SEGMENT_TRAVERSAL_SECS, TICK_INTERVAL_SECS,
};
pub use world::SimWorld;
