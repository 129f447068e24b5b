//! Core types for the logistics simulation
//!
//! Standalone types shared by every part of the engine.

use std::fmt;
use std::str::FromStr;

/// A wrapper type for truck identifiers (index into the fleet)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TruckId(pub usize);

impl fmt::Display for TruckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{:03}", self.0 + 1)
    }
}

/// A wrapper type for route identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteId(pub usize);

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{:03}", self.0 + 1)
    }
}

/// Current weather over the whole map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weather {
    Sunny,
    Cloudy,
    Rainy,
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Weather::Sunny => write!(f, "sunny"),
            Weather::Cloudy => write!(f, "cloudy"),
            Weather::Rainy => write!(f, "rainy"),
        }
    }
}

/// Current traffic condition over the whole map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traffic {
    Smooth,
    Moderate,
    Jam,
}

impl fmt::Display for Traffic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Traffic::Smooth => write!(f, "smooth"),
            Traffic::Moderate => write!(f, "moderate"),
            Traffic::Jam => write!(f, "jam"),
        }
    }
}

/// Delivery status of a truck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TruckStatus {
    OnTime,
    Delayed,
    Cautious,
    Rerouted,
}

impl fmt::Display for TruckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TruckStatus::OnTime => write!(f, "on-time"),
            TruckStatus::Delayed => write!(f, "delayed"),
            TruckStatus::Cautious => write!(f, "cautious"),
            TruckStatus::Rerouted => write!(f, "rerouted"),
        }
    }
}

/// One of the fixed scripted disruption scenarios
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioKind {
    SupplierDelay,
    TrafficJam,
    DocumentIssue,
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioKind::SupplierDelay => write!(f, "supplier-delay"),
            ScenarioKind::TrafficJam => write!(f, "traffic-jam"),
            ScenarioKind::DocumentIssue => write!(f, "document-issue"),
        }
    }
}

impl FromStr for ScenarioKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "supplier-delay" => Ok(ScenarioKind::SupplierDelay),
            "traffic-jam" => Ok(ScenarioKind::TrafficJam),
            "document-issue" => Ok(ScenarioKind::DocumentIssue),
            other => Err(format!(
                "unknown scenario '{}' (expected supplier-delay, traffic-jam, or document-issue)",
                other
            )),
        }
    }
}

/// A 2D point on the normalized [0,100]x[0,100] map plane
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Number of interpolated coordinates sampled across a whole route
pub const ROUTE_SAMPLE_POINTS: usize = 100;

/// Seconds a truck takes to traverse one route segment at nominal speed
pub const SEGMENT_TRAVERSAL_SECS: f32 = 30.0;

/// Progress units (out of 100 per segment) gained per second
pub const PROGRESS_RATE: f32 = 100.0 / SEGMENT_TRAVERSAL_SECS;

/// Default tick interval for headless runs, in seconds
pub const TICK_INTERVAL_SECS: f32 = 0.15;

/// Per-tick probability of a random weather change
pub const WEATHER_FLIP_CHANCE: f64 = 0.05;

/// Per-tick probability of a random traffic change
pub const TRAFFIC_FLIP_CHANCE: f64 = 0.08;
