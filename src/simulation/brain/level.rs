//! A single fully connected level with a hard threshold activation.

use ndarray::{Array1, Array2, Zip};
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;

use super::super::error::NetworkError;
use super::super::geometry::lerp;

/// One layer of the policy network.
///
/// Each output fires (1.0) when the weighted sum of the inputs exceeds its
/// bias and stays silent (0.0) otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    /// Inputs seen by the last [`Level::feed_forward`].
    pub inputs: Array1<f64>,
    /// Outputs produced by the last [`Level::feed_forward`].
    pub outputs: Array1<f64>,
    /// Weight matrix (`input_size` × `output_size`).
    pub weights: Array2<f64>,
    /// Firing threshold per output (`output_size`).
    pub biases: Array1<f64>,
}

impl Level {
    /// Creates a level with weights and biases drawn uniformly from `[-1, 1)`.
    pub fn new_random(input_size: usize, output_size: usize) -> Self {
        Self::with_parameters(
            Array2::random((input_size, output_size), Uniform::new(-1.0, 1.0)),
            Array1::random(output_size, Uniform::new(-1.0, 1.0)),
        )
    }

    /// Creates a level from explicit parameters.
    ///
    /// `biases` needs one entry per weight column.
    pub fn from_parameters(
        weights: Array2<f64>,
        biases: Array1<f64>,
    ) -> Result<Self, NetworkError> {
        if biases.len() != weights.ncols() {
            return Err(NetworkError::BiasCount {
                expected: weights.ncols(),
                actual: biases.len(),
            });
        }
        Ok(Self::with_parameters(weights, biases))
    }

    fn with_parameters(weights: Array2<f64>, biases: Array1<f64>) -> Self {
        let (input_size, output_size) = weights.dim();
        Self {
            inputs: Array1::zeros(input_size),
            outputs: Array1::zeros(output_size),
            weights,
            biases,
        }
    }

    /// Number of inputs.
    pub fn input_size(&self) -> usize {
        self.weights.nrows()
    }

    /// Number of outputs.
    pub fn output_size(&self) -> usize {
        self.weights.ncols()
    }

    /// Evaluates the level without recording activations.
    ///
    /// # Panics
    ///
    /// If `inputs.len()` differs from [`Level::input_size`].
    #[inline]
    pub fn forward(&self, inputs: &Array1<f64>) -> Array1<f64> {
        let sums = inputs.dot(&self.weights);
        Zip::from(&sums)
            .and(&self.biases)
            .map_collect(|&sum, &bias| if sum > bias { 1.0 } else { 0.0 })
    }

    /// Evaluates the level and keeps the inputs and outputs for inspection.
    pub fn feed_forward(&mut self, inputs: &Array1<f64>) -> Array1<f64> {
        let outputs = self.forward(inputs);
        self.inputs.assign(inputs);
        self.outputs.assign(&outputs);
        outputs
    }

    /// Blends every weight and bias towards a fresh uniform draw from `[-1, 1)`.
    ///
    /// `amount = 0` leaves the level untouched, `amount = 1` replaces it.
    pub fn mutate(&mut self, amount: f64) {
        let weight_targets = Array2::random(self.weights.dim(), Uniform::new(-1.0, 1.0));
        Zip::from(&mut self.weights)
            .and(&weight_targets)
            .for_each(|w, &target| *w = lerp(*w, target, amount));

        let bias_targets = Array1::random(self.biases.len(), Uniform::new(-1.0, 1.0));
        Zip::from(&mut self.biases)
            .and(&bias_targets)
            .for_each(|b, &target| *b = lerp(*b, target, amount));
    }
}
