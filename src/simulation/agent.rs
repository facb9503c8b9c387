//! An individual of the population: a vehicle, its sensor and its policy.

use log::warn;

use super::brain::Network;
use super::controls::ControlSource;
use super::error::NetworkError;
use super::geometry::Segment;
use super::params::Params;
use super::road::Road;
use super::sensor::Sensor;
use super::vehicle::Vehicle;

/// One member of a generation.
///
/// The policy lives in the vehicle's [`ControlSource`]; the agent adds the
/// sensor and the stall bookkeeping used to retire agents that stop moving.
#[derive(Debug, Clone)]
pub struct Agent {
    /// The car being driven.
    pub vehicle: Vehicle,
    /// Distance sensor mounted on the car.
    pub sensor: Sensor,
    /// Simulated time at which the agent last dropped to stall speed.
    pub stopped_since_ms: Option<f64>,
    /// Set once the agent is damaged or stalled; retired agents are not updated.
    pub retired: bool,
    /// Whether a renderer should draw this agent's rays.
    pub draw_sensor: bool,
}

impl Agent {
    /// Places a fresh agent at the start line with the given policy.
    ///
    /// The stall timer starts immediately, so an agent that never gets going
    /// is retired after the stall timeout.
    pub fn new(params: &Params, road: &Road, network: Network, now_ms: f64) -> Self {
        let mut vehicle = Vehicle::new(
            road.lane_center(params.start_lane),
            params.start_y,
            params.vehicle_width,
            params.vehicle_height,
            params.max_speed,
            ControlSource::neural(network),
        );
        vehicle.acceleration = params.acceleration;
        vehicle.friction = params.friction;
        vehicle.turning_speed = params.turning_speed;

        Self {
            vehicle,
            sensor: Sensor::new(params.ray_count, params.ray_length, params.ray_spread),
            stopped_since_ms: Some(now_ms),
            retired: false,
            draw_sensor: false,
        }
    }

    /// The agent's policy, unless its controls were swapped for another source.
    pub fn network(&self) -> Option<&Network> {
        self.vehicle.controls.network()
    }

    /// Hands the vehicle to a new network.
    ///
    /// The network must take one input per sensor ray; otherwise the current
    /// policy is kept and the mismatch is returned.
    pub fn set_policy(&mut self, network: Network) -> Result<(), NetworkError> {
        if network.input_size() != self.sensor.ray_count {
            return Err(NetworkError::MismatchedTopology {
                index: 0,
                expected: self.sensor.ray_count,
                actual: network.input_size(),
            });
        }
        self.vehicle.set_control_source(ControlSource::neural(network));
        Ok(())
    }

    /// Distance covered since the start line.
    pub fn progress(&self, start_y: f64) -> f64 {
        start_y - self.vehicle.y
    }

    /// Whether the agent has been stopped for longer than `timeout_ms`.
    pub fn is_stalled(&self, now_ms: f64, timeout_ms: f64) -> bool {
        self.stopped_since_ms
            .is_some_and(|since| now_ms - since > timeout_ms)
    }

    /// Advances one tick: physics and collision, stall timer, sensing, then
    /// policy inference. The new controls take effect on the next tick.
    pub fn update(
        &mut self,
        borders: &[Segment],
        obstacles: &[&Vehicle],
        now_ms: f64,
        stall_speed: f64,
    ) {
        self.vehicle.update(borders, obstacles);

        if self.vehicle.speed > stall_speed {
            self.stopped_since_ms = None;
        } else if self.stopped_since_ms.is_none() {
            self.stopped_since_ms = Some(now_ms);
        }

        self.sensor.update(&self.vehicle, borders, obstacles);
        let inputs = self.sensor.offsets();
        if let Err(e) = self.vehicle.controls.think(&inputs) {
            // an unusable policy must not seed the next generation
            warn!("dropping incompatible policy: {e}");
            self.vehicle.set_control_source(ControlSource::Static);
        }
    }
}
