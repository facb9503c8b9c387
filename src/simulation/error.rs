//! Error types for network construction and configuration.
//!
//! Geometry degeneracies and empty populations are ordinary values in the
//! simulation and never show up here; these errors only cover contract
//! violations that are detectable before the first tick.

use thiserror::Error;

/// Invalid neural network topology.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// A network needs an input width and at least one level.
    #[error("a network needs at least two layer widths, got {count}")]
    TooFewLayers {
        /// Number of widths supplied.
        count: usize,
    },
    /// A layer was declared with width zero.
    #[error("layer {index} has zero width")]
    ZeroSizedLayer {
        /// Position of the offending width.
        index: usize,
    },
    /// Consecutive levels do not chain output to input.
    #[error("level {index} expects {actual} inputs but the previous level produces {expected}")]
    MismatchedTopology {
        /// Index of the level whose input does not match.
        index: usize,
        /// Output width of the previous level.
        expected: usize,
        /// Input width of this level.
        actual: usize,
    },
    /// A level's bias vector does not have one entry per output.
    #[error("level has {expected} outputs but {actual} biases")]
    BiasCount {
        /// Weight columns.
        expected: usize,
        /// Biases supplied.
        actual: usize,
    },
}

/// Rejected simulation parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamsError {
    /// The road must have at least one lane.
    #[error("road must have at least one lane")]
    NoLanes,
    /// Agents must start in an existing lane.
    #[error("start lane {lane} is out of range for {lane_count} lanes")]
    StartLaneOutOfRange {
        /// Requested start lane.
        lane: usize,
        /// Lanes available.
        lane_count: usize,
    },
    /// The population must not be empty.
    #[error("population size must be positive")]
    EmptyPopulation,
    /// A length, speed or duration that must be strictly positive was not.
    #[error("{0} must be positive")]
    NonPositive(&'static str),
    /// Mutation blend amount outside `[0, 1]`.
    #[error("mutation amount {0} must lie in [0, 1]")]
    MutationAmount(f64),
    /// At least one traffic speed is required to spawn traffic.
    #[error("traffic speed list is empty")]
    NoTrafficSpeeds,
    /// The sensor needs at least one ray.
    #[error("sensor must cast at least one ray")]
    NoRays,
    /// First network width must equal the number of sensor rays.
    #[error("network input width {inputs} does not match ray count {rays}")]
    InputWidth {
        /// First layer width.
        inputs: usize,
        /// Sensor ray count.
        rays: usize,
    },
    /// Last network width must equal the number of control outputs.
    #[error("network output width {outputs} must be {expected}")]
    OutputWidth {
        /// Last layer width.
        outputs: usize,
        /// Required width.
        expected: usize,
    },
    /// The layer widths do not describe a valid network.
    #[error(transparent)]
    Network(#[from] NetworkError),
}

/// Failure to load or store a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing the file failed.
    #[error("config i/o: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not valid JSON for [`super::params::Params`].
    #[error("config json: {0}")]
    Json(#[from] serde_json::Error),
    /// The file parsed but describes an invalid simulation.
    #[error("invalid config: {0}")]
    Params(#[from] ParamsError),
}
