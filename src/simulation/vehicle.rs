//! Vehicle state, discrete-time motion and collision.
//!
//! Angle 0 faces negative y, so a vehicle driving forward sees its `y`
//! decrease. Once damaged, a vehicle is frozen for good.

use std::f64::consts::PI;

use geo::Coord;

use super::controls::ControlSource;
use super::geometry::{Polygon, Segment, polygon_touches_segment, polygons_intersect};

/// Default acceleration per tick.
pub const DEFAULT_ACCELERATION: f64 = 0.1;
/// Default friction per tick.
pub const DEFAULT_FRICTION: f64 = 0.02;
/// Default steering rate in radians per tick.
pub const DEFAULT_TURNING_SPEED: f64 = 0.01;

/// A single car on the road.
#[derive(Debug, Clone)]
pub struct Vehicle {
    /// Centre x.
    pub x: f64,
    /// Centre y.
    pub y: f64,
    /// Footprint width.
    pub width: f64,
    /// Footprint length.
    pub height: f64,
    /// Heading in radians, 0 = towards negative y.
    pub angle: f64,
    /// Signed speed along the heading.
    pub speed: f64,
    /// Speed gained per tick while accelerating.
    pub acceleration: f64,
    /// Speed lost per tick while coasting.
    pub friction: f64,
    /// Forward speed cap; reverse is capped at a quarter of it.
    pub max_speed: f64,
    /// Heading change per tick while steering.
    pub turning_speed: f64,
    /// Corners of the footprint for the current pose.
    pub polygon: Polygon,
    /// Set on the first collision and never cleared.
    pub damaged: bool,
    /// Who decides what to press.
    pub controls: ControlSource,
}

impl Vehicle {
    /// Creates a vehicle at rest facing up the road.
    pub fn new(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        max_speed: f64,
        controls: ControlSource,
    ) -> Self {
        let mut vehicle = Self {
            x,
            y,
            width,
            height,
            angle: 0.0,
            speed: 0.0,
            acceleration: DEFAULT_ACCELERATION,
            friction: DEFAULT_FRICTION,
            max_speed,
            turning_speed: DEFAULT_TURNING_SPEED,
            polygon: [Coord { x, y }; 4],
            damaged: false,
            controls,
        };
        vehicle.polygon = vehicle.create_polygon();
        vehicle
    }

    /// Replaces the control source in place.
    pub fn set_control_source(&mut self, controls: ControlSource) {
        self.controls = controls;
    }

    /// Centre of the vehicle.
    pub fn position(&self) -> Coord<f64> {
        Coord {
            x: self.x,
            y: self.y,
        }
    }

    /// Advances one tick: move, rebuild the footprint, then check for damage.
    ///
    /// # Arguments
    ///
    /// * `borders` - Road border segments
    /// * `obstacles` - Other vehicles this one can crash into
    pub fn update(&mut self, borders: &[Segment], obstacles: &[&Vehicle]) {
        if self.damaged {
            return;
        }
        self.step_motion();
        self.polygon = self.create_polygon();
        self.damaged = self.assess_damage(borders, obstacles);
    }

    fn step_motion(&mut self) {
        let controls = self.controls.controls();

        if controls.forward {
            self.speed += self.acceleration;
        }
        if controls.reverse {
            self.speed -= self.acceleration;
        }
        self.speed = self.speed.clamp(-self.max_speed / 4.0, self.max_speed);

        if self.speed > 0.0 {
            self.speed -= self.friction;
        } else if self.speed < 0.0 {
            self.speed += self.friction;
        }
        // stops sign flipping around zero
        if self.speed.abs() < self.friction {
            self.speed = 0.0;
        }

        if self.speed != 0.0 {
            let flip = self.speed.signum();
            if controls.left {
                self.angle += self.turning_speed * flip;
            }
            if controls.right {
                self.angle -= self.turning_speed * flip;
            }
        }

        self.x -= self.angle.sin() * self.speed;
        self.y -= self.angle.cos() * self.speed;
    }

    /// Footprint corners for the current pose.
    pub fn create_polygon(&self) -> Polygon {
        let rad = self.width.hypot(self.height) / 2.0;
        let alpha = self.width.atan2(self.height);
        let corner = |theta: f64| Coord {
            x: self.x - theta.sin() * rad,
            y: self.y - theta.cos() * rad,
        };

        [
            corner(self.angle - alpha),
            corner(self.angle + alpha),
            corner(PI + self.angle - alpha),
            corner(PI + self.angle + alpha),
        ]
    }

    fn assess_damage(&self, borders: &[Segment], obstacles: &[&Vehicle]) -> bool {
        borders
            .iter()
            .any(|border| polygon_touches_segment(&self.polygon, border))
            || obstacles
                .iter()
                .any(|other| polygons_intersect(&self.polygon, &other.polygon))
    }
}
