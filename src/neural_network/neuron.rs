use crate::error::ModelError;
use crate::neural_network::ActivationFunction;
use ndarray::{Array1, ArrayBase, Data, Ix1};
use ndarray_rand::RandomExt;
use ndarray_rand::rand::Rng;
use ndarray_rand::rand_distr::{Distribution, Uniform};

/// Lower bound (inclusive) of the uniform weight/bias initialization range
const INIT_RANGE_MIN: f64 = -1.0;

/// Upper bound (exclusive) of the uniform weight/bias initialization range
const INIT_RANGE_MAX: f64 = 1.0;

/// A single unit holding one weight per input and a bias.
///
/// The output of a neuron is `activation(sum(inputs[i] * weights[i]) + bias)`.
///
/// # Fields
///
/// - `weights` - One weight per incoming connection, indexed like the input vector
/// - `bias` - Scalar added to the weighted sum before activation
///
/// # Example
/// ```rust
/// use ndarray::array;
/// use rusty_mlp::neural_network::{ActivationFunction, Neuron};
///
/// let neuron = Neuron::from_parameters(array![0.5, -0.5], 0.0).unwrap();
/// let output = neuron.compute(&array![1.0, 1.0], &ActivationFunction::SIGMOID).unwrap();
/// assert_eq!(output, 0.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Neuron {
    weights: Array1<f64>,
    bias: f64,
}

impl Neuron {
    /// Creates a neuron whose weights and bias are independent uniform draws in `[-1, 1)`.
    ///
    /// The weights are drawn first, in input order, followed by the bias.
    ///
    /// # Parameters
    ///
    /// - `input_count` - Number of incoming connections
    /// - `rng` - Random generator driving the initialization
    ///
    /// # Returns
    ///
    /// * `Neuron` - A randomly initialized neuron
    pub fn new<R: Rng + ?Sized>(input_count: usize, rng: &mut R) -> Self {
        let distribution = Uniform::new(INIT_RANGE_MIN, INIT_RANGE_MAX);
        let weights = Array1::random_using(input_count, distribution, rng);
        let bias = distribution.sample(rng);

        Self { weights, bias }
    }

    /// Creates a neuron from fixed parameters.
    ///
    /// # Parameters
    ///
    /// - `weights` - One weight per input
    /// - `bias` - Bias term
    ///
    /// # Returns
    ///
    /// - `Ok(Neuron)` - The neuron holding the given parameters
    /// - `Err(ModelError::ConfigurationError)` - If `weights` is empty or a parameter is not finite
    pub fn from_parameters(weights: Array1<f64>, bias: f64) -> Result<Self, ModelError> {
        if weights.is_empty() {
            return Err(ModelError::ConfigurationError(
                "A neuron needs at least one weight".to_string(),
            ));
        }

        if !bias.is_finite() || weights.iter().any(|w| !w.is_finite()) {
            return Err(ModelError::ConfigurationError(
                "Neuron parameters must be finite".to_string(),
            ));
        }

        Ok(Self { weights, bias })
    }

    /// Gets the weight vector.
    pub fn weights(&self) -> &Array1<f64> {
        &self.weights
    }

    /// Gets the bias.
    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Gets the number of inputs this neuron expects.
    pub fn input_count(&self) -> usize {
        self.weights.len()
    }

    /// Computes the activated output of the neuron for one input vector.
    ///
    /// # Parameters
    ///
    /// - `inputs` - Input vector, one value per weight
    /// - `activation` - Activation function applied to the weighted sum
    ///
    /// # Returns
    ///
    /// - `Ok(f64)` - The activated output
    /// - `Err(ModelError::DimensionMismatch)` - If the input length differs from the weight count
    pub fn compute<S>(
        &self,
        inputs: &ArrayBase<S, Ix1>,
        activation: &ActivationFunction,
    ) -> Result<f64, ModelError>
    where
        S: Data<Elem = f64>,
    {
        if inputs.len() != self.weights.len() {
            return Err(ModelError::dimension_mismatch(
                "neuron input",
                self.weights.len(),
                inputs.len(),
            ));
        }

        let weighted_sum = inputs
            .iter()
            .zip(self.weights.iter())
            .fold(0.0, |acc, (&x, &w)| acc + x * w);

        Ok(activation.activate(weighted_sum + self.bias))
    }

    /// Applies one gradient descent step to the weights and bias.
    ///
    /// Each weight moves by `-learning_rate * gradient`, as does the bias.
    ///
    /// # Parameters
    ///
    /// - `weight_gradients` - One gradient per weight
    /// - `bias_gradient` - Gradient of the bias
    /// - `learning_rate` - Step size
    ///
    /// # Returns
    ///
    /// - `Ok(())` - If the parameters were updated
    /// - `Err(ModelError::DimensionMismatch)` - If the gradient length differs from the weight count
    pub fn update<S>(
        &mut self,
        weight_gradients: &ArrayBase<S, Ix1>,
        bias_gradient: f64,
        learning_rate: f64,
    ) -> Result<(), ModelError>
    where
        S: Data<Elem = f64>,
    {
        if weight_gradients.len() != self.weights.len() {
            return Err(ModelError::dimension_mismatch(
                "neuron weight gradients",
                self.weights.len(),
                weight_gradients.len(),
            ));
        }

        for (w, &g) in self.weights.iter_mut().zip(weight_gradients.iter()) {
            *w -= learning_rate * g;
        }
        self.bias -= learning_rate * bias_gradient;

        Ok(())
    }
}
