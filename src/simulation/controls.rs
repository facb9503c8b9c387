//! Control signals and the sources that produce them.
//!
//! A vehicle holds exactly one [`ControlSource`]. The source can be swapped at
//! any time without rebuilding the vehicle, e.g. to hand an agent over to a
//! human driver.

use ndarray::Array1;

use super::brain::Network;
use super::error::NetworkError;

/// Number of network outputs consumed as controls.
pub const CONTROL_OUTPUTS: usize = 4;

/// The four independent driving inputs for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    /// Accelerate.
    pub forward: bool,
    /// Brake / accelerate backwards.
    pub reverse: bool,
    /// Steer left.
    pub left: bool,
    /// Steer right.
    pub right: bool,
}

/// One of the four control inputs, for press/release style drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Maps to [`Controls::forward`].
    Forward,
    /// Maps to [`Controls::reverse`].
    Reverse,
    /// Maps to [`Controls::left`].
    Left,
    /// Maps to [`Controls::right`].
    Right,
}

impl Controls {
    /// Full throttle, no steering.
    pub const FORWARD: Self = Self {
        forward: true,
        reverse: false,
        left: false,
        right: false,
    };

    /// Reads network outputs positionally as forward, left, right, reverse.
    ///
    /// Missing entries read as released.
    pub fn from_outputs(outputs: &Array1<f64>) -> Self {
        let active = |i: usize| outputs.get(i).is_some_and(|&v| v > 0.0);
        Self {
            forward: active(0),
            left: active(1),
            right: active(2),
            reverse: active(3),
        }
    }

    /// Presses or releases one input.
    pub fn set(&mut self, direction: Direction, pressed: bool) {
        match direction {
            Direction::Forward => self.forward = pressed,
            Direction::Reverse => self.reverse = pressed,
            Direction::Left => self.left = pressed,
            Direction::Right => self.right = pressed,
        }
    }
}

/// Where a vehicle's controls come from.
#[derive(Debug, Clone)]
pub enum ControlSource {
    /// Never presses anything.
    Static,
    /// Always accelerates; used for traffic.
    AlwaysForward,
    /// Driven by an external input layer through [`Controls::set`].
    Manual(Controls),
    /// Driven by a neural network fed with sensor offsets.
    Neural {
        /// The policy.
        network: Network,
        /// Decision from the last inference.
        controls: Controls,
    },
}

impl ControlSource {
    /// Wraps a network; nothing is pressed until the first inference.
    pub fn neural(network: Network) -> Self {
        Self::Neural {
            network,
            controls: Controls::default(),
        }
    }

    /// Current control state.
    pub fn controls(&self) -> Controls {
        match self {
            Self::Static => Controls::default(),
            Self::AlwaysForward => Controls::FORWARD,
            Self::Manual(controls) | Self::Neural { controls, .. } => *controls,
        }
    }

    /// Mutable access to manual controls, if this is a manual source.
    pub fn manual_mut(&mut self) -> Option<&mut Controls> {
        match self {
            Self::Manual(controls) => Some(controls),
            _ => None,
        }
    }

    /// The policy network, if this is a neural source.
    pub fn network(&self) -> Option<&Network> {
        match self {
            Self::Neural { network, .. } => Some(network),
            _ => None,
        }
    }

    /// Runs the policy on sensor inputs and latches the resulting controls.
    ///
    /// Non-neural sources ignore the inputs. If the network expects a
    /// different input width, all controls are released and the mismatch is
    /// returned.
    pub fn think(&mut self, inputs: &Array1<f64>) -> Result<(), NetworkError> {
        if let Self::Neural { network, controls } = self {
            if network.input_size() != inputs.len() {
                *controls = Controls::default();
                return Err(NetworkError::MismatchedTopology {
                    index: 0,
                    expected: inputs.len(),
                    actual: network.input_size(),
                });
            }
            let outputs = network.feed_forward(inputs);
            *controls = Controls::from_outputs(&outputs);
        }
        Ok(())
    }
}
