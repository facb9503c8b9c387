use std::path::Path;

use serde::{Deserialize, Serialize};

use super::brain::Topology;
use super::controls::CONTROL_OUTPUTS;
use super::error::{ConfigError, ParamsError};

/// Simulation parameters that control road, vehicles, sensors and evolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Road centre line x.
    pub road_center_x: f64,
    /// Road width between the borders.
    pub road_width: f64,
    /// Number of lanes.
    pub lane_count: usize,
    /// Vehicle footprint width.
    pub vehicle_width: f64,
    /// Vehicle footprint length.
    pub vehicle_height: f64,
    /// Forward speed cap of agents.
    pub max_speed: f64,
    /// Speed gained per tick while accelerating.
    pub acceleration: f64,
    /// Speed lost per tick while coasting.
    pub friction: f64,
    /// Heading change per tick while steering, in radians.
    pub turning_speed: f64,
    /// Lane agents start in.
    pub start_lane: usize,
    /// Y coordinate agents start at.
    pub start_y: f64,
    /// Number of sensor rays.
    pub ray_count: usize,
    /// Length of each sensor ray.
    pub ray_length: f64,
    /// Angle covered by the sensor fan, in radians.
    pub ray_spread: f64,
    /// Neural network layer dimensions.
    pub layer_sizes: Vec<usize>,
    /// Agents per generation.
    pub population_size: usize,
    /// Blend strength used when mutating offspring.
    pub mutation_amount: f64,
    /// Minimum simulated time between traffic spawns (ms).
    pub traffic_spawn_interval_ms: f64,
    /// How far ahead of the leader traffic appears.
    pub traffic_spawn_distance: f64,
    /// Candidate max speeds for spawned traffic; one is picked at random.
    pub traffic_speeds: Vec<f64>,
    /// Agents at or below this speed count as stopped.
    pub stall_speed: f64,
    /// Simulated time an agent may stay stopped before it is retired (ms).
    pub stall_timeout_ms: f64,
    /// Simulated time per tick (ms).
    pub tick_ms: f64,
}

impl Default for Params {
    fn default() -> Self {
        let ray_count = 10;
        Self {
            road_center_x: 175.0,
            road_width: 175.0,
            lane_count: 3,
            vehicle_width: 30.0,
            vehicle_height: 50.0,
            max_speed: 6.0,
            acceleration: 0.1,
            friction: 0.02,
            turning_speed: 0.01,
            start_lane: 1,
            start_y: 100.0,
            ray_count,
            ray_length: 150.0,
            ray_spread: std::f64::consts::FRAC_PI_2,
            layer_sizes: vec![ray_count, 6, CONTROL_OUTPUTS],
            population_size: 500,
            mutation_amount: 0.5,
            traffic_spawn_interval_ms: 1000.0,
            traffic_spawn_distance: 4000.0,
            traffic_speeds: vec![0.0, 1.0],
            stall_speed: 0.5,
            stall_timeout_ms: 2000.0,
            tick_ms: 1000.0 / 60.0,
        }
    }
}

impl Params {
    /// Checks the parameters and returns the validated network topology.
    pub fn validate(&self) -> Result<Topology, ParamsError> {
        if self.lane_count == 0 {
            return Err(ParamsError::NoLanes);
        }
        if self.start_lane >= self.lane_count {
            return Err(ParamsError::StartLaneOutOfRange {
                lane: self.start_lane,
                lane_count: self.lane_count,
            });
        }
        if self.population_size == 0 {
            return Err(ParamsError::EmptyPopulation);
        }
        for (name, value) in [
            ("road_width", self.road_width),
            ("vehicle_width", self.vehicle_width),
            ("vehicle_height", self.vehicle_height),
            ("max_speed", self.max_speed),
            ("ray_length", self.ray_length),
            ("tick_ms", self.tick_ms),
        ] {
            if value.is_nan() || value <= 0.0 {
                return Err(ParamsError::NonPositive(name));
            }
        }
        if !(0.0..=1.0).contains(&self.mutation_amount) {
            return Err(ParamsError::MutationAmount(self.mutation_amount));
        }
        if self.traffic_speeds.is_empty() {
            return Err(ParamsError::NoTrafficSpeeds);
        }
        if self.ray_count == 0 {
            return Err(ParamsError::NoRays);
        }

        let topology = Topology::new(&self.layer_sizes)?;
        if topology.input_size() != self.ray_count {
            return Err(ParamsError::InputWidth {
                inputs: topology.input_size(),
                rays: self.ray_count,
            });
        }
        if topology.output_size() != CONTROL_OUTPUTS {
            return Err(ParamsError::OutputWidth {
                outputs: topology.output_size(),
                expected: CONTROL_OUTPUTS,
            });
        }
        Ok(topology)
    }

    /// Loads and validates parameters from a JSON file.
    ///
    /// Missing fields fall back to [`Params::default`].
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&json)?;
        params.validate()?;
        Ok(params)
    }

    /// Saves the parameters to a JSON file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
