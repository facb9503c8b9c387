//! Feed-forward policy network used to drive agents.
//!
//! The network is a chain of [`Level`]s with step activations. It is never
//! trained by gradients; evolution changes it only through [`Network::mutate`].

use ndarray::Array1;

use super::error::NetworkError;

/// Single network layer.
pub mod level;

pub use level::Level;

/// Validated layer widths, input first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topology {
    widths: Vec<usize>,
}

impl Topology {
    /// Validates a list of layer widths.
    ///
    /// At least two widths are required and none may be zero.
    pub fn new(widths: &[usize]) -> Result<Self, NetworkError> {
        if widths.len() < 2 {
            return Err(NetworkError::TooFewLayers {
                count: widths.len(),
            });
        }
        if let Some(index) = widths.iter().position(|&w| w == 0) {
            return Err(NetworkError::ZeroSizedLayer { index });
        }
        Ok(Self {
            widths: widths.to_vec(),
        })
    }

    /// All widths, input first.
    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    /// Width of the input vector.
    pub fn input_size(&self) -> usize {
        self.widths[0]
    }

    /// Width of the output vector.
    pub fn output_size(&self) -> usize {
        self.widths[self.widths.len() - 1]
    }
}

/// A layered network of step-activated levels.
///
/// `Clone` copies every weight and bias by value, so a cloned network can be
/// mutated without affecting its parent.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    levels: Vec<Level>,
}

impl Network {
    /// Creates a randomly initialised network from layer widths.
    pub fn new(widths: &[usize]) -> Result<Self, NetworkError> {
        Ok(Self::random(&Topology::new(widths)?))
    }

    /// Creates a randomly initialised network for a validated topology.
    pub fn random(topology: &Topology) -> Self {
        let levels = topology
            .widths()
            .windows(2)
            .map(|pair| Level::new_random(pair[0], pair[1]))
            .collect();
        Self { levels }
    }

    /// Assembles a network from existing levels, checking that they chain.
    pub fn from_levels(levels: Vec<Level>) -> Result<Self, NetworkError> {
        if levels.is_empty() {
            return Err(NetworkError::TooFewLayers { count: 0 });
        }
        for (index, pair) in levels.windows(2).enumerate() {
            let expected = pair[0].output_size();
            let actual = pair[1].input_size();
            if expected != actual {
                return Err(NetworkError::MismatchedTopology {
                    index: index + 1,
                    expected,
                    actual,
                });
            }
        }
        Ok(Self { levels })
    }

    /// The levels, input side first.
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Width of the input vector.
    pub fn input_size(&self) -> usize {
        self.levels.first().map_or(0, Level::input_size)
    }

    /// Layer widths of this network.
    pub fn topology(&self) -> Topology {
        let mut widths = Vec::with_capacity(self.levels.len() + 1);
        widths.push(self.levels[0].input_size());
        widths.extend(self.levels.iter().map(Level::output_size));
        Topology { widths }
    }

    /// Runs the inputs through every level, recording each level's activations.
    pub fn feed_forward(&mut self, inputs: &Array1<f64>) -> Array1<f64> {
        let mut output = inputs.clone();
        for level in &mut self.levels {
            output = level.feed_forward(&output);
        }
        output
    }

    /// Runs the inputs through every level without side effects.
    #[inline]
    pub fn think(&self, inputs: &Array1<f64>) -> Array1<f64> {
        let mut output = inputs.clone();
        for level in &self.levels {
            output = level.forward(&output);
        }
        output
    }

    /// Mutates all levels, see [`Level::mutate`].
    pub fn mutate(&mut self, amount: f64) {
        for level in &mut self.levels {
            level.mutate(amount);
        }
    }

    /// Clone of this network with [`Network::mutate`] applied.
    pub fn mutated(&self, amount: f64) -> Self {
        let mut child = self.clone();
        child.mutate(amount);
        child
    }
}
