//! # Evodrive - Evolving Self-Driving Cars
//!
//! A simulation of cars with neural network drivers that learn to weave through
//! traffic on a multi-lane road. There is no gradient training: each generation
//! runs until every car has crashed or stalled, the furthest car becomes the
//! seed, and the next generation drives mutated copies of it.
//!
//! ## Features
//!
//! - Segment/polygon intersection for collisions and ray casting
//! - Simple discrete-time car physics with friction and reverse cap
//! - Fan-shaped distance sensor feeding the network
//! - Step-activated feed-forward networks with blend mutation
//! - Elitist generational loop with monotonic seed selection
//! - Simulated clock for reproducible stall and traffic timing
//!
//! ## Core Modules
//!
//! - [`simulation::geometry`] - Segment and polygon intersection
//! - [`simulation::vehicle`] - Car physics and collision
//! - [`simulation::sensor`] - Ray-cast distance sensor
//! - [`simulation::brain`] - Neural network policy
//! - [`simulation::ecosystem`] - Main simulation loop

/// Core simulation logic and data structures.
pub mod simulation {
    /// Individuals: vehicle, sensor and policy.
    pub mod agent;
    /// Neural network policy.
    pub mod brain;
    /// Control signals and control sources.
    pub mod controls;
    /// Main simulation loop and generation turnover.
    pub mod ecosystem;
    /// Error types.
    pub mod error;
    /// Seed selection and population spawning.
    pub mod evolution;
    /// History of finished generations.
    pub mod generation_log;
    /// Segment intersection, polygon overlap and interpolation.
    pub mod geometry;
    /// Simulation parameters.
    pub mod params;
    /// Road layout and borders.
    pub mod road;
    /// Ray-cast distance sensor.
    pub mod sensor;
    /// KD-tree over traffic for neighbour queries.
    pub mod spatial;
    /// Car physics and collision.
    pub mod vehicle;
}
