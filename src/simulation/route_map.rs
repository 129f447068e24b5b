//! Static route network for the logistics map
//!
//! Locations and routes are fixed configuration: they are built once at
//! engine start and shared read-only by every truck. Each route owns its
//! derived curve (path string plus dense coordinate samples) so animation
//! lookups never recompute geometry.

use anyhow::{Context, Result};

use super::geometry;
use super::types::{Point, RouteId, ROUTE_SAMPLE_POINTS};

/// A named anchor point on the map
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub point: Point,
}

/// A single waypoint along a route
#[derive(Debug, Clone)]
pub struct RoutePoint {
    pub name: &'static str,
    pub point: Point,
    pub is_checkpoint: bool,
}

/// An ordered sequence of waypoints with its derived, immutable curve
#[derive(Debug, Clone)]
pub struct Route {
    pub id: RouteId,
    pub color: &'static str,
    pub points: Vec<RoutePoint>,
    pub path_string: String,
    pub path_coordinates: Vec<Point>,
}

impl Route {
    fn new(id: RouteId, color: &'static str, points: Vec<RoutePoint>) -> Self {
        let waypoints: Vec<Point> = points.iter().map(|p| p.point).collect();
        let path_string = geometry::path_string(&waypoints);
        let path_coordinates = geometry::path_coordinates(&waypoints, ROUTE_SAMPLE_POINTS);
        Self {
            id,
            color,
            points,
            path_string,
            path_coordinates,
        }
    }

    /// Number of traversable segments (waypoint pairs)
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Resolve the map position for (segment, progress) on this route
    pub fn position_at(&self, segment: usize, progress: f32) -> Option<Point> {
        geometry::resolve_position(
            &self.path_coordinates,
            self.segment_count(),
            segment,
            progress,
        )
    }

    /// The route's starting waypoint coordinate
    pub fn start_point(&self) -> Option<Point> {
        self.points.first().map(|p| p.point)
    }
}

/// The full static network: all locations plus all routes
#[derive(Debug, Clone)]
pub struct RouteMap {
    pub locations: Vec<Location>,
    pub routes: Vec<Route>,
}

impl RouteMap {
    /// Build the standard five-route demo network.
    ///
    /// Fails only on a configuration bug (a route naming an unknown
    /// location), so the error carries enough context to point at it.
    pub fn standard_network() -> Result<Self> {
        let locations = vec![
            Location { name: "Origin 1", point: Point::new(5.0, 70.0) },
            Location { name: "Origin 2", point: Point::new(15.0, 83.0) },
            Location { name: "Origin 3", point: Point::new(10.0, 90.0) },
            Location { name: "Central Hub", point: Point::new(50.0, 55.0) },
            Location { name: "Destination 1", point: Point::new(70.0, 90.0) },
            Location { name: "Destination 2", point: Point::new(80.0, 25.0) },
            Location { name: "Checkpoint E", point: Point::new(20.0, 75.0) },
            Location { name: "Checkpoint F", point: Point::new(60.0, 70.0) },
            Location { name: "Checkpoint A", point: Point::new(25.0, 60.0) },
            Location { name: "Checkpoint B", point: Point::new(65.0, 40.0) },
            Location { name: "Checkpoint C", point: Point::new(40.0, 80.0) },
            Location { name: "Checkpoint D", point: Point::new(35.0, 40.0) },
        ];

        let route_specs: [(&str, &[&str]); 5] = [
            ("#3B82F6", &["Origin 1", "Checkpoint A", "Central Hub", "Checkpoint B", "Destination 2"]),
            ("#EF4444", &["Origin 2", "Checkpoint E", "Central Hub"]),
            ("#10B981", &["Central Hub", "Checkpoint F", "Destination 1"]),
            ("#F59E0B", &["Origin 3", "Checkpoint C", "Central Hub"]),
            ("#8B5CF6", &["Central Hub", "Checkpoint D", "Checkpoint B", "Destination 2"]),
        ];

        let mut map = Self {
            locations,
            routes: Vec::new(),
        };

        for (index, (color, names)) in route_specs.iter().enumerate() {
            let id = RouteId(index);
            let mut points = Vec::with_capacity(names.len());
            for (position, name) in names.iter().enumerate() {
                let point = map
                    .location(name)
                    .with_context(|| format!("route {} references unknown location '{}'", id, name))?;
                // Endpoints are terminals, everything in between is a checkpoint.
                let is_checkpoint = position > 0 && position < names.len() - 1;
                points.push(RoutePoint {
                    name,
                    point,
                    is_checkpoint,
                });
            }
            map.routes.push(Route::new(id, color, points));
        }

        Ok(map)
    }

    /// Look up a location's coordinates by name
    pub fn location(&self, name: &str) -> Option<Point> {
        self.locations
            .iter()
            .find(|l| l.name == name)
            .map(|l| l.point)
    }

    /// Look up a route by id
    pub fn route(&self, id: RouteId) -> Option<&Route> {
        self.routes.iter().find(|r| r.id == id)
    }
}
