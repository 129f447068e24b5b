//! Truck movement logic
//!
//! Each truck advances along its assigned route at a constant progress
//! rate. Position is always derived from (route, segment, progress) via the
//! route's precomputed sample array; nothing else may set it, except the
//! explicit resets to the route's starting coordinate.

use log::debug;

use super::route_map::RouteMap;
use super::types::{Point, RouteId, TruckId, TruckStatus, PROGRESS_RATE};

/// A tracked vehicle in the simulation
#[derive(Debug, Clone)]
pub struct SimTruck {
    pub id: TruckId,
    pub name: String,
    pub origin: &'static str,
    pub destination: &'static str,
    pub route_id: RouteId,
    pub status: TruckStatus,
    /// Index of the current waypoint pair; always valid for the route
    pub current_segment: usize,
    /// Progress within the current segment, in [0, 100)
    pub progress: f32,
    pub position: Point,
    pub eta: String,
    pub is_affected: bool,
    initial_name: &'static str,
    initial_eta: &'static str,
}

impl SimTruck {
    pub fn new(
        id: TruckId,
        name: &'static str,
        origin: &'static str,
        destination: &'static str,
        route_id: RouteId,
        eta: &'static str,
        start: Point,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            origin,
            destination,
            route_id,
            status: TruckStatus::OnTime,
            current_segment: 0,
            progress: 0.0,
            position: start,
            eta: eta.to_string(),
            is_affected: false,
            initial_name: name,
            initial_eta: eta,
        }
    }

    /// Advance this truck by one tick's worth of progress.
    ///
    /// When a segment completes the truck moves to the next one at progress
    /// 0; when the final segment completes the truck wraps back to segment
    /// 0 at the route's starting coordinate (routes loop, they do not
    /// terminate). A missing route leaves the truck untouched for this
    /// tick: that is a static configuration bug, not a runtime fault.
    pub fn advance(&mut self, delta_secs: f32, route_map: &RouteMap) {
        let route = match route_map.route(self.route_id) {
            Some(route) => route,
            None => {
                debug!("truck {} references missing route {}", self.id, self.route_id);
                return;
            }
        };

        let mut new_progress = self.progress + PROGRESS_RATE * delta_secs;
        let mut new_segment = self.current_segment;

        if new_progress >= 100.0 {
            new_segment += 1;
            new_progress = 0.0;

            if new_segment >= route.segment_count() {
                // End of route: wrap to the starting waypoint exactly.
                self.current_segment = 0;
                self.progress = 0.0;
                if let Some(start) = route.start_point() {
                    self.position = start;
                }
                return;
            }
        }

        self.current_segment = new_segment;
        self.progress = new_progress;
        if let Some(position) = route.position_at(self.current_segment, self.progress) {
            self.position = position;
        }
    }

    /// Place the truck at a scripted (segment, progress) and re-derive its
    /// position. Used by scenario scripts to fast-forward a truck.
    pub fn place(&mut self, segment: usize, progress: f32, route_map: &RouteMap) {
        let route = match route_map.route(self.route_id) {
            Some(route) => route,
            None => {
                debug!("truck {} references missing route {}", self.id, self.route_id);
                return;
            }
        };

        self.current_segment = segment.min(route.segment_count().saturating_sub(1));
        self.progress = progress.clamp(0.0, 100.0 - f32::EPSILON);
        if let Some(position) = route.position_at(self.current_segment, self.progress) {
            self.position = position;
        }
    }

    /// Restore the truck to its initial state at the route's first waypoint
    pub fn reset(&mut self, route_map: &RouteMap) {
        self.name = self.initial_name.to_string();
        self.status = TruckStatus::OnTime;
        self.is_affected = false;
        self.current_segment = 0;
        self.progress = 0.0;
        self.eta = self.initial_eta.to_string();
        if let Some(start) = route_map.route(self.route_id).and_then(|r| r.start_point()) {
            self.position = start;
        }
    }

    /// The waypoint names the truck is currently travelling between
    pub fn current_leg<'a>(&self, route_map: &'a RouteMap) -> Option<(&'a str, &'a str)> {
        let route = route_map.route(self.route_id)?;
        let from = route.points.get(self.current_segment)?;
        let to = route.points.get(self.current_segment + 1)?;
        Some((from.name, to.name))
    }
}
