//! Main simulation loop: one population driving on one road.
//!
//! The ecosystem owns everything that changes during a run. Each call to
//! [`Ecosystem::step`] advances the simulated clock by one tick and:
//! - culls traffic that the furthest agent has already passed
//! - moves traffic, then every active agent, in stable vector order
//! - retires agents that crashed or stalled
//! - spawns traffic ahead of the leader, or starts the next generation once
//!   no agent is left

use log::{debug, info, warn};
use rand::Rng;

use super::agent::Agent;
use super::brain::Topology;
use super::controls::ControlSource;
use super::error::ParamsError;
use super::evolution::{Champion, EvolutionEngine};
use super::generation_log::{GenerationLog, GenerationRecord};
use super::params::Params;
use super::road::Road;
use super::spatial::TrafficIndex;
use super::vehicle::Vehicle;

/// What a single tick produced.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// At least one agent is still active; holds the leader's index.
    Running {
        /// Index into [`Ecosystem::agents`].
        leader: usize,
    },
    /// No agent was left; a new population has been spawned.
    GenerationEnded(GenerationRecord),
}

/// The simulation context for an evolutionary run.
#[derive(Debug, Clone)]
pub struct Ecosystem {
    /// The road everyone drives on.
    pub road: Road,
    /// Current generation, retired agents included.
    pub agents: Vec<Agent>,
    /// Non-learning vehicles the agents must avoid.
    pub traffic: Vec<Vehicle>,
    /// Simulated time in milliseconds.
    pub time_ms: f64,
    /// Generation counter, starting at 0.
    pub generation: u32,
    /// Ticks run by the current generation.
    pub generation_ticks: u64,
    last_traffic_spawn_ms: f64,
    leader: Option<usize>,
    topology: Topology,
    evolution: EvolutionEngine,
    history: GenerationLog,
}

impl Ecosystem {
    /// Creates an ecosystem with a random first generation.
    pub fn new(params: &Params) -> Result<Self, ParamsError> {
        let topology = params.validate()?;
        let road = Road::new(params.road_center_x, params.road_width, params.lane_count);
        let evolution = EvolutionEngine::new();
        let agents = evolution.spawn_population(params, &topology, &road, 0.0);

        info!(
            "starting evolution: {} agents, layers {:?}",
            agents.len(),
            topology.widths()
        );

        Ok(Self {
            road,
            agents,
            traffic: Vec::new(),
            time_ms: 0.0,
            generation: 0,
            generation_ticks: 0,
            last_traffic_spawn_ms: 0.0,
            leader: None,
            topology,
            evolution,
            history: GenerationLog::default(),
        })
    }

    /// Advances the simulation by one tick.
    pub fn step(&mut self, params: &Params) -> StepOutcome {
        self.time_ms += params.tick_ms;
        self.generation_ticks += 1;

        self.update_traffic();
        self.retire_agents(params);
        self.update_agents(params);

        self.leader = self.find_leader();
        match self.leader {
            Some(leader) => {
                self.agents[leader].draw_sensor = true;
                self.spawn_traffic(params, leader);
                StepOutcome::Running { leader }
            }
            None => StepOutcome::GenerationEnded(self.next_generation(params)),
        }
    }

    /// Steps until the current generation ends or `max_ticks` have passed.
    ///
    /// # Returns
    ///
    /// The finished generation's record, or `None` if the tick budget ran out.
    pub fn run_generation(&mut self, params: &Params, max_ticks: u64) -> Option<GenerationRecord> {
        for _ in 0..max_ticks {
            if let StepOutcome::GenerationEnded(record) = self.step(params) {
                return Some(record);
            }
        }
        None
    }

    /// Index of the active agent furthest up the road.
    ///
    /// Ties go to the lowest index. `None` once every agent is retired.
    pub fn find_leader(&self) -> Option<usize> {
        self.agents
            .iter()
            .enumerate()
            .filter(|(_, agent)| !agent.retired)
            .min_by(|(_, a), (_, b)| a.vehicle.y.total_cmp(&b.vehicle.y))
            .map(|(i, _)| i)
    }

    /// Leader as of the last tick.
    pub fn leader(&self) -> Option<&Agent> {
        self.leader.map(|i| &self.agents[i])
    }

    /// Number of agents still driving.
    pub fn active_count(&self) -> usize {
        self.agents.iter().filter(|a| !a.retired).count()
    }

    /// Progress of the current seed, `None` before the first generation ends.
    pub fn best_progress(&self) -> Option<f64> {
        self.evolution.best_progress()
    }

    /// Seed bookkeeping.
    pub fn evolution(&self) -> &EvolutionEngine {
        &self.evolution
    }

    /// Finished generations, newest first.
    pub fn history(&self) -> &GenerationLog {
        &self.history
    }

    /// Drops traffic that is no longer ahead of the furthest active agent,
    /// then moves the rest.
    ///
    /// Culling relative to the rearmost agent instead would keep cars the
    /// leader has passed alive for trailing agents. Here trailing agents never
    /// meet traffic the leader has already overtaken.
    fn update_traffic(&mut self) {
        let front_y = self
            .agents
            .iter()
            .filter(|a| !a.retired)
            .map(|a| a.vehicle.y)
            .min_by(f64::total_cmp);
        if let Some(front_y) = front_y {
            self.traffic.retain(|car| car.y < front_y);
        }

        let borders = self.road.borders();
        for car in &mut self.traffic {
            car.update(borders, &[]);
        }
    }

    fn retire_agents(&mut self, params: &Params) {
        let now = self.time_ms;
        for agent in self.agents.iter_mut().filter(|a| !a.retired) {
            if agent.vehicle.damaged || agent.is_stalled(now, params.stall_timeout_ms) {
                agent.retired = true;
                agent.draw_sensor = false;
            }
        }
    }

    fn update_agents(&mut self, params: &Params) {
        let index = match TrafficIndex::build(&self.traffic) {
            Ok(index) => Some(index),
            Err(e) => {
                warn!("traffic index unavailable, scanning all traffic: {e:?}");
                None
            }
        };
        let diagonal = params.vehicle_width.hypot(params.vehicle_height);
        let borders = self.road.borders();

        for agent in self.agents.iter_mut().filter(|a| !a.retired) {
            agent.draw_sensor = false;
            // queried before the agent moves, so include one tick of travel
            let radius = agent.sensor.ray_length + diagonal + agent.vehicle.max_speed.abs();
            let obstacles: Vec<&Vehicle> = match &index {
                Some(index) => index
                    .query(agent.vehicle.position(), radius)
                    .into_iter()
                    .map(|i| &self.traffic[i])
                    .collect(),
                None => self.traffic.iter().collect(),
            };
            agent.update(borders, &obstacles, self.time_ms, params.stall_speed);
        }
    }

    fn spawn_traffic(&mut self, params: &Params, leader: usize) {
        if self.time_ms - self.last_traffic_spawn_ms <= params.traffic_spawn_interval_ms {
            return;
        }

        let mut rng = rand::rng();
        let lane = rng.random_range(0..self.road.lane_count);
        let max_speed = params.traffic_speeds[rng.random_range(0..params.traffic_speeds.len())];
        let y = self.agents[leader].vehicle.y - params.traffic_spawn_distance;

        debug!("spawning traffic in lane {lane} at y {y:.1} (max speed {max_speed})");
        self.traffic.push(Vehicle::new(
            self.road.lane_center(lane),
            y,
            params.vehicle_width,
            params.vehicle_height,
            max_speed,
            ControlSource::AlwaysForward,
        ));
        self.last_traffic_spawn_ms = self.time_ms;
    }

    fn next_generation(&mut self, params: &Params) -> GenerationRecord {
        let candidate = self
            .agents
            .iter()
            .filter_map(|agent| agent.network().map(|network| (agent, network)))
            .min_by(|(a, _), (b, _)| a.vehicle.y.total_cmp(&b.vehicle.y))
            .map(|(agent, network)| Champion {
                network: network.clone(),
                progress: agent.progress(params.start_y),
            });

        let leader_progress = candidate.as_ref().map_or(f64::NEG_INFINITY, |c| c.progress);
        let improved = candidate.is_some_and(|c| self.evolution.record_generation(c));
        let best_progress = self.best_progress().unwrap_or(leader_progress);

        let record = GenerationRecord {
            generation: self.generation,
            ticks: self.generation_ticks,
            leader_progress,
            best_progress,
            improved,
        };
        info!(
            "generation {} ended after {} ticks: leader {:.1}, best {:.1}{}",
            record.generation,
            record.ticks,
            record.leader_progress,
            record.best_progress,
            if improved { " (new seed)" } else { "" }
        );
        self.history.log(record);

        self.agents =
            self.evolution
                .spawn_population(params, &self.topology, &self.road, self.time_ms);
        self.traffic.clear();
        self.last_traffic_spawn_ms = self.time_ms;
        self.leader = None;
        self.generation += 1;
        self.generation_ticks = 0;

        record
    }
}
