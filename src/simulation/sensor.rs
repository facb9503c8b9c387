//! Ray-cast distance sensor.
//!
//! The sensor fans `ray_count` rays around its vehicle's heading and reports,
//! per ray, the nearest obstruction among road borders and other vehicles.

use geo::{Coord, Line};
use ndarray::Array1;

use super::geometry::{Intersection, Point, Segment, edges, intersect, lerp};
use super::vehicle::Vehicle;

/// Nearest hit along one ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    /// Where the ray was stopped.
    pub point: Point,
    /// Fraction of the ray length to the hit; 0 at the vehicle centre.
    pub offset: f64,
}

impl From<Intersection> for Reading {
    fn from(hit: Intersection) -> Self {
        Self {
            point: hit.point,
            offset: hit.t,
        }
    }
}

/// A fan of distance rays attached to one vehicle.
///
/// The sensor does not hold on to its vehicle; the owner passes it in on
/// every update and the sensor only reads its pose.
#[derive(Debug, Clone)]
pub struct Sensor {
    /// Number of rays.
    pub ray_count: usize,
    /// Length of each ray.
    pub ray_length: f64,
    /// Total angle covered by the fan.
    pub ray_spread: f64,
    /// Ray segments from the last update, leftmost first.
    pub rays: Vec<Segment>,
    /// One entry per ray; `None` if the ray hit nothing.
    pub readings: Vec<Option<Reading>>,
}

impl Sensor {
    /// Creates a sensor that has not cast any rays yet.
    pub fn new(ray_count: usize, ray_length: f64, ray_spread: f64) -> Self {
        Self {
            ray_count,
            ray_length,
            ray_spread,
            rays: Vec::with_capacity(ray_count),
            readings: vec![None; ray_count],
        }
    }

    /// Recasts all rays from the vehicle's current pose.
    ///
    /// # Arguments
    ///
    /// * `vehicle` - The vehicle carrying this sensor
    /// * `borders` - Road border segments
    /// * `obstacles` - Other vehicles; must not include `vehicle` itself
    pub fn update(&mut self, vehicle: &Vehicle, borders: &[Segment], obstacles: &[&Vehicle]) {
        self.cast_rays(vehicle);
        self.readings = self
            .rays
            .iter()
            .map(|ray| Self::nearest_hit(ray, borders, obstacles))
            .collect();
    }

    fn cast_rays(&mut self, vehicle: &Vehicle) {
        let origin = vehicle.position();
        let half_spread = self.ray_spread / 2.0;
        let ray_count = self.ray_count;
        let ray_length = self.ray_length;

        self.rays.clear();
        self.rays.extend((0..ray_count).map(|i| {
            let fraction = if ray_count == 1 {
                0.5
            } else {
                i as f64 / (ray_count - 1) as f64
            };
            let angle = lerp(half_spread, -half_spread, fraction) + vehicle.angle;
            let end = Coord {
                x: origin.x - angle.sin() * ray_length,
                y: origin.y - angle.cos() * ray_length,
            };
            Line::new(origin, end)
        }));
    }

    fn nearest_hit(ray: &Segment, borders: &[Segment], obstacles: &[&Vehicle]) -> Option<Reading> {
        let border_hits = borders.iter().filter_map(|border| intersect(ray, border));
        let vehicle_hits = obstacles
            .iter()
            .copied()
            .flat_map(|other| edges(&other.polygon))
            .filter_map(|edge| intersect(ray, &edge));

        border_hits
            .chain(vehicle_hits)
            .min_by(|a, b| a.t.total_cmp(&b.t))
            .map(Reading::from)
    }

    /// Policy inputs: `1 - offset` per ray, 0 where nothing was hit.
    ///
    /// Closer obstructions give larger values.
    pub fn offsets(&self) -> Array1<f64> {
        self.readings
            .iter()
            .map(|reading| reading.map_or(0.0, |r| 1.0 - r.offset))
            .collect()
    }
}
