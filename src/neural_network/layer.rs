use crate::error::ModelError;
use crate::neural_network::{ActivationFunction, Neuron};
use ndarray::{Array1, ArrayBase, Data, Ix1};
use ndarray_rand::rand::Rng;

/// Gradients of one layer's parameters for a single training sample.
///
/// `weight_gradients[i][k]` is the gradient of neuron `i`'s weight on input `k`,
/// and `bias_gradients[i]` the gradient of neuron `i`'s bias. Neuron order
/// matches the layer's neuron order.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerGradients {
    pub weight_gradients: Vec<Array1<f64>>,
    pub bias_gradients: Array1<f64>,
}

/// A fully connected layer: an ordered set of neurons sharing one activation function.
///
/// Every neuron sees the same input vector, and the i-th output of the layer is
/// the i-th neuron's output. That ordering is what the next layer's weights index into.
///
/// # Fields
///
/// - `neurons` - The neurons of the layer, in output order
/// - `activation` - Activation function shared by all neurons
///
/// # Example
/// ```rust
/// use ndarray::array;
/// use ndarray_rand::rand::SeedableRng;
/// use ndarray_rand::rand::rngs::StdRng;
/// use rusty_mlp::neural_network::{ActivationFunction, Layer};
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let layer = Layer::new(3, 2, ActivationFunction::TANH, &mut rng).unwrap();
///
/// let output = layer.compute(&array![0.5, -0.5]).unwrap();
/// assert_eq!(output.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    neurons: Vec<Neuron>,
    activation: ActivationFunction,
}

impl Layer {
    /// Creates a layer of randomly initialized neurons.
    ///
    /// # Parameters
    ///
    /// - `neuron_count` - Number of neurons (the layer's output size)
    /// - `input_count` - Number of inputs each neuron takes
    /// - `activation` - Activation function shared by the neurons
    /// - `rng` - Random generator driving weight initialization
    ///
    /// # Returns
    ///
    /// - `Ok(Layer)` - The new layer
    /// - `Err(ModelError::ConfigurationError)` - If either count is zero
    pub fn new<R: Rng + ?Sized>(
        neuron_count: usize,
        input_count: usize,
        activation: ActivationFunction,
        rng: &mut R,
    ) -> Result<Self, ModelError> {
        if neuron_count == 0 || input_count == 0 {
            return Err(ModelError::ConfigurationError(format!(
                "Layer sizes must be positive, got {} neurons with {} inputs",
                neuron_count, input_count
            )));
        }

        let neurons = (0..neuron_count)
            .map(|_| Neuron::new(input_count, rng))
            .collect();

        Ok(Self {
            neurons,
            activation,
        })
    }

    /// Creates a layer from existing neurons.
    ///
    /// # Returns
    ///
    /// - `Ok(Layer)` - The assembled layer
    /// - `Err(ModelError::ConfigurationError)` - If `neurons` is empty or the neurons disagree on their input count
    pub fn from_neurons(
        neurons: Vec<Neuron>,
        activation: ActivationFunction,
    ) -> Result<Self, ModelError> {
        let Some(first) = neurons.first() else {
            return Err(ModelError::ConfigurationError(
                "A layer needs at least one neuron".to_string(),
            ));
        };

        let input_count = first.input_count();
        if let Some((i, neuron)) = neurons
            .iter()
            .enumerate()
            .find(|(_, n)| n.input_count() != input_count)
        {
            return Err(ModelError::ConfigurationError(format!(
                "Neuron {} takes {} inputs but neuron 0 takes {}",
                i,
                neuron.input_count(),
                input_count
            )));
        }

        Ok(Self {
            neurons,
            activation,
        })
    }

    /// Gets the neurons of the layer.
    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    /// Gets the activation function of the layer.
    pub fn activation(&self) -> ActivationFunction {
        self.activation
    }

    /// Number of inputs every neuron of the layer expects.
    pub fn input_size(&self) -> usize {
        self.neurons[0].input_count()
    }

    /// Number of neurons, i.e. the length of the layer's output.
    pub fn output_size(&self) -> usize {
        self.neurons.len()
    }

    /// Number of trainable parameters (weights plus biases).
    pub fn param_count(&self) -> usize {
        self.neurons.iter().map(|n| n.input_count() + 1).sum()
    }

    /// Computes the output vector of the layer.
    ///
    /// # Parameters
    ///
    /// * `inputs` - Input vector of length `input_size()`
    ///
    /// # Returns
    ///
    /// - `Ok(Array1<f64>)` - One output per neuron, in neuron order
    /// - `Err(ModelError::DimensionMismatch)` - If the input length is wrong
    pub fn compute<S>(&self, inputs: &ArrayBase<S, Ix1>) -> Result<Array1<f64>, ModelError>
    where
        S: Data<Elem = f64>,
    {
        if inputs.len() != self.input_size() {
            return Err(ModelError::dimension_mismatch(
                "layer input",
                self.input_size(),
                inputs.len(),
            ));
        }

        self.neurons
            .iter()
            .map(|neuron| neuron.compute(inputs, &self.activation))
            .collect::<Result<Vec<_>, _>>()
            .map(Array1::from)
    }

    /// Applies one gradient descent step to every neuron of the layer.
    ///
    /// # Parameters
    ///
    /// - `gradients` - Gradients for this layer, one entry per neuron
    /// - `learning_rate` - Step size
    ///
    /// # Returns
    ///
    /// - `Ok(())` - If all neurons were updated
    /// - `Err(ModelError::DimensionMismatch)` - If the gradients do not match the layer shape
    pub fn update(
        &mut self,
        gradients: &LayerGradients,
        learning_rate: f64,
    ) -> Result<(), ModelError> {
        if gradients.weight_gradients.len() != self.neurons.len() {
            return Err(ModelError::dimension_mismatch(
                "layer weight gradients",
                self.neurons.len(),
                gradients.weight_gradients.len(),
            ));
        }
        if gradients.bias_gradients.len() != self.neurons.len() {
            return Err(ModelError::dimension_mismatch(
                "layer bias gradients",
                self.neurons.len(),
                gradients.bias_gradients.len(),
            ));
        }
        // All shapes are checked before the first neuron is touched
        for (neuron, weight_gradients) in self.neurons.iter().zip(&gradients.weight_gradients) {
            if weight_gradients.len() != neuron.input_count() {
                return Err(ModelError::dimension_mismatch(
                    "neuron weight gradients",
                    neuron.input_count(),
                    weight_gradients.len(),
                ));
            }
        }

        for ((neuron, weight_gradients), &bias_gradient) in self
            .neurons
            .iter_mut()
            .zip(gradients.weight_gradients.iter())
            .zip(gradients.bias_gradients.iter())
        {
            neuron.update(weight_gradients, bias_gradient, learning_rate)?;
        }

        Ok(())
    }
}
