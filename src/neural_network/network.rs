use crate::config::TrainingConfig;
use crate::error::ModelError;
use crate::metric::mean_squared_error;
use crate::neural_network::input_validation_function::{validate_learning_rate, validate_structure};
use crate::neural_network::{ActivationFunction, Layer, LayerGradients};
use indicatif::{ProgressBar, ProgressStyle};
use ndarray::{Array1, ArrayBase, Data, Ix1};
use ndarray_rand::rand::rngs::StdRng;
use ndarray_rand::rand::{self, Rng, SeedableRng};
use tracing::{debug, info, trace};

/// Activations recorded during one forward pass.
///
/// Entry 0 is the network input, entry `l + 1` is the output of layer `l`. Backpropagation
/// reads every unit's own output and every layer's input from here, so the forward and
/// backward halves of a training step share no hidden state on the network itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardPass {
    activations: Vec<Array1<f64>>,
}

impl ForwardPass {
    /// All recorded activation vectors, input first.
    pub fn activations(&self) -> &[Array1<f64>] {
        &self.activations
    }

    /// The vector that was fed to layer `layer`.
    ///
    /// # Panics
    ///
    /// Panics if `layer` is not a layer index of the network that produced this pass.
    pub fn layer_input(&self, layer: usize) -> &Array1<f64> {
        &self.activations[layer]
    }

    /// The vector produced by layer `layer`.
    ///
    /// # Panics
    ///
    /// Panics if `layer` is not a layer index of the network that produced this pass.
    pub fn layer_output(&self, layer: usize) -> &Array1<f64> {
        &self.activations[layer + 1]
    }

    /// The network output.
    pub fn output(&self) -> &Array1<f64> {
        &self.activations[self.activations.len() - 1]
    }
}

/// A multilayer perceptron: an ordered stack of fully connected layers.
///
/// Built from a structure `[n0, n1, ..., nL]` where `n0` is the input size and `nL` the
/// output size, plus one activation function per non-input layer. Layer `i` holds
/// `n_{i+1}` neurons taking `n_i` inputs each.
///
/// Training is online stochastic gradient descent: every sample runs a forward pass,
/// backpropagates `output - target` through the layers, and updates all parameters
/// before the next sample is seen.
///
/// # Example
/// ```rust
/// use ndarray::array;
/// use rusty_mlp::neural_network::{ActivationFunction, Network};
///
/// let mut network = Network::new(
///     &[2, 3, 1],
///     &[ActivationFunction::SIGMOID, ActivationFunction::SIGMOID],
///     Some(42),
/// ).unwrap();
///
/// let data = vec![
///     (array![0.0, 0.0], array![0.0]),
///     (array![0.0, 1.0], array![1.0]),
///     (array![1.0, 0.0], array![1.0]),
///     (array![1.0, 1.0], array![0.0]),
/// ];
///
/// let history = network.train(&data, 100, 0.5).unwrap();
/// assert_eq!(history.len(), 100);
///
/// let prediction = network.predict(&array![1.0, 0.0]).unwrap();
/// assert_eq!(prediction.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    layers: Vec<Layer>,
}

impl Network {
    /// Creates a randomly initialized network.
    ///
    /// # Parameters
    ///
    /// - `structure` - Layer widths, input size first
    /// - `activations` - One activation function per non-input layer
    /// - `random_seed` - Seed for weight initialization, drawn from entropy when `None`
    ///
    /// # Returns
    ///
    /// - `Ok(Network)` - The new network
    /// - `Err(ModelError::ConfigurationError)` - If `activations.len() != structure.len() - 1`,
    ///   the structure has fewer than two entries, or a width is zero
    pub fn new(
        structure: &[usize],
        activations: &[ActivationFunction],
        random_seed: Option<u64>,
    ) -> Result<Self, ModelError> {
        let seed = random_seed.unwrap_or_else(rand::random::<u64>);
        let mut rng = StdRng::seed_from_u64(seed);
        Self::with_rng(structure, activations, &mut rng)
    }

    /// Creates a network whose weights are drawn from the given random generator.
    ///
    /// Neurons are initialized layer by layer, in neuron order. The generator must implement
    /// the `Rng` trait of the `rand` version re-exported as `rusty_mlp::rand`.
    ///
    /// # Example
    /// ```rust
    /// use rusty_mlp::neural_network::{ActivationFunction, Network};
    /// use rusty_mlp::rand::SeedableRng;
    /// use rusty_mlp::rand::rngs::StdRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(1);
    /// let network = Network::with_rng(&[2, 1], &[ActivationFunction::SIGMOID], &mut rng).unwrap();
    /// assert_eq!(network.output_size(), 1);
    /// ```
    pub fn with_rng<R: Rng + ?Sized>(
        structure: &[usize],
        activations: &[ActivationFunction],
        rng: &mut R,
    ) -> Result<Self, ModelError> {
        validate_structure(structure, activations.len())?;

        let mut layers = Vec::with_capacity(activations.len());
        for (widths, &activation) in structure.windows(2).zip(activations) {
            layers.push(Layer::new(widths[1], widths[0], activation, rng)?);
        }

        let network = Self { layers };
        debug!(
            structure = ?network.structure(),
            params = network.param_count(),
            "network initialized"
        );
        Ok(network)
    }

    /// Assembles a network from existing layers.
    ///
    /// # Returns
    ///
    /// - `Ok(Network)` - The assembled network
    /// - `Err(ModelError::ConfigurationError)` - If `layers` is empty or a layer's input size
    ///   differs from the previous layer's neuron count
    pub fn from_layers(layers: Vec<Layer>) -> Result<Self, ModelError> {
        if layers.is_empty() {
            return Err(ModelError::ConfigurationError(
                "A network needs at least one layer".to_string(),
            ));
        }

        for (i, pair) in layers.windows(2).enumerate() {
            if pair[1].input_size() != pair[0].output_size() {
                return Err(ModelError::ConfigurationError(format!(
                    "Layer {} takes {} inputs but layer {} produces {} outputs",
                    i + 1,
                    pair[1].input_size(),
                    i,
                    pair[0].output_size()
                )));
            }
        }

        Ok(Self { layers })
    }

    /// Gets the layers of the network, input side first.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Length of the input vector the network expects.
    pub fn input_size(&self) -> usize {
        self.layers[0].input_size()
    }

    /// Length of the output vector the network produces.
    pub fn output_size(&self) -> usize {
        self.layers[self.layers.len() - 1].output_size()
    }

    /// The layer widths `[n0, n1, ..., nL]`, input size first.
    pub fn structure(&self) -> Vec<usize> {
        std::iter::once(self.input_size())
            .chain(self.layers.iter().map(Layer::output_size))
            .collect()
    }

    /// Total number of trainable parameters.
    pub fn param_count(&self) -> usize {
        self.layers.iter().map(Layer::param_count).sum()
    }

    fn check_input_len(&self, len: usize, context: impl Into<String>) -> Result<(), ModelError> {
        if len != self.input_size() {
            return Err(ModelError::dimension_mismatch(
                context,
                self.input_size(),
                len,
            ));
        }
        Ok(())
    }

    fn check_target_len(&self, len: usize, context: impl Into<String>) -> Result<(), ModelError> {
        if len != self.output_size() {
            return Err(ModelError::dimension_mismatch(
                context,
                self.output_size(),
                len,
            ));
        }
        Ok(())
    }

    /// Runs a forward pass and records the activations at every layer boundary.
    ///
    /// # Parameters
    ///
    /// * `inputs` - Input vector of length `input_size()`
    ///
    /// # Returns
    ///
    /// - `Ok(ForwardPass)` - The input followed by every layer's output
    /// - `Err(ModelError::DimensionMismatch)` - If the input length is wrong
    pub fn forward<S>(&self, inputs: &ArrayBase<S, Ix1>) -> Result<ForwardPass, ModelError>
    where
        S: Data<Elem = f64>,
    {
        self.check_input_len(inputs.len(), "network input")?;

        let mut activations = Vec::with_capacity(self.layers.len() + 1);
        activations.push(inputs.to_owned());
        for layer in &self.layers {
            let output = layer.compute(&activations[activations.len() - 1])?;
            activations.push(output);
        }

        Ok(ForwardPass { activations })
    }

    /// Predicts the output for one input vector.
    ///
    /// Inference never mutates the network, so repeated calls with the same input
    /// return identical results.
    ///
    /// # Parameters
    ///
    /// * `inputs` - Input vector of length `input_size()`
    ///
    /// # Returns
    ///
    /// - `Ok(Array1<f64>)` - Output vector of length `output_size()`
    /// - `Err(ModelError::DimensionMismatch)` - If the input length is wrong
    pub fn predict<S>(&self, inputs: &ArrayBase<S, Ix1>) -> Result<Array1<f64>, ModelError>
    where
        S: Data<Elem = f64>,
    {
        self.check_input_len(inputs.len(), "network input")?;

        let mut output = self.layers[0].compute(inputs)?;
        for layer in &self.layers[1..] {
            output = layer.compute(&output)?;
        }
        Ok(output)
    }

    /// Computes every unit's delta for one recorded forward pass.
    ///
    /// Output units use `(output - target) * f'(output)`. Hidden unit `i` of layer `l`
    /// sums `delta_{l+1}[j] * w_{l+1}[j][i]` over the next layer's units and scales it by
    /// `f'_l(a_l[i])`. All deltas are computed from the current (not yet updated) weights.
    fn backpropagate<S>(&self, pass: &ForwardPass, targets: &ArrayBase<S, Ix1>) -> Vec<Array1<f64>>
    where
        S: Data<Elem = f64>,
    {
        let last = self.layers.len() - 1;
        let output_activation = self.layers[last].activation();

        let output_deltas: Array1<f64> = pass
            .output()
            .iter()
            .zip(targets.iter())
            .map(|(&output, &target)| (output - target) * output_activation.derivative(output))
            .collect();

        // Built from the output layer backwards, reversed at the end
        let mut deltas = Vec::with_capacity(self.layers.len());
        deltas.push(output_deltas);

        for l in (0..last).rev() {
            let layer = &self.layers[l];
            let next_layer = &self.layers[l + 1];
            let next_deltas = &deltas[deltas.len() - 1];
            let layer_output = pass.layer_output(l);
            let activation = layer.activation();

            let layer_deltas: Array1<f64> = (0..layer.output_size())
                .map(|i| {
                    let error = next_layer
                        .neurons()
                        .iter()
                        .zip(next_deltas.iter())
                        .fold(0.0, |acc, (neuron, &delta)| acc + delta * neuron.weights()[i]);
                    error * activation.derivative(layer_output[i])
                })
                .collect();

            deltas.push(layer_deltas);
        }

        deltas.reverse();
        deltas
    }

    /// Turns per-layer deltas into weight and bias gradients.
    fn layer_gradients(&self, pass: &ForwardPass, deltas: Vec<Array1<f64>>) -> Vec<LayerGradients> {
        deltas
            .into_iter()
            .enumerate()
            .map(|(l, layer_deltas)| {
                let layer_input = pass.layer_input(l);
                LayerGradients {
                    weight_gradients: layer_deltas
                        .iter()
                        .map(|&delta| layer_input.mapv(|x| delta * x))
                        .collect(),
                    bias_gradients: layer_deltas,
                }
            })
            .collect()
    }

    /// Computes the parameter gradients for one sample without changing the network.
    ///
    /// The gradients are those of `0.5 * sum((output - target)^2)` with respect to every
    /// weight and bias, one `LayerGradients` per layer.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<LayerGradients>)` - Gradients for every layer, input side first
    /// - `Err(ModelError::DimensionMismatch)` - If the input or target length is wrong
    pub fn gradients<S1, S2>(
        &self,
        inputs: &ArrayBase<S1, Ix1>,
        targets: &ArrayBase<S2, Ix1>,
    ) -> Result<Vec<LayerGradients>, ModelError>
    where
        S1: Data<Elem = f64>,
        S2: Data<Elem = f64>,
    {
        self.check_target_len(targets.len(), "network target")?;

        let pass = self.forward(inputs)?;
        let deltas = self.backpropagate(&pass, targets);
        Ok(self.layer_gradients(&pass, deltas))
    }

    /// Forward pass, backpropagation and update for one already validated sample.
    ///
    /// Returns the squared error of the sample measured before the update.
    fn step<S1, S2>(
        &mut self,
        inputs: &ArrayBase<S1, Ix1>,
        targets: &ArrayBase<S2, Ix1>,
        learning_rate: f64,
    ) -> Result<f64, ModelError>
    where
        S1: Data<Elem = f64>,
        S2: Data<Elem = f64>,
    {
        let pass = self.forward(inputs)?;
        let sample_error = mean_squared_error(targets, pass.output())?;

        let deltas = self.backpropagate(&pass, targets);
        let gradients = self.layer_gradients(&pass, deltas);

        for (layer, layer_gradients) in self.layers.iter_mut().zip(&gradients) {
            layer.update(layer_gradients, learning_rate)?;
        }

        Ok(sample_error)
    }

    /// Trains the network on a single sample (one online SGD step).
    ///
    /// # Parameters
    ///
    /// - `inputs` - Input vector of length `input_size()`
    /// - `targets` - Target vector of length `output_size()`
    /// - `learning_rate` - Step size, positive and finite
    ///
    /// # Returns
    ///
    /// - `Ok(f64)` - Mean squared error of the sample before the update
    /// - `Err(ModelError)` - If the learning rate or a vector length is invalid, or a value is NaN or infinite
    pub fn train_sample<S1, S2>(
        &mut self,
        inputs: &ArrayBase<S1, Ix1>,
        targets: &ArrayBase<S2, Ix1>,
        learning_rate: f64,
    ) -> Result<f64, ModelError>
    where
        S1: Data<Elem = f64>,
        S2: Data<Elem = f64>,
    {
        validate_learning_rate(learning_rate)?;
        self.check_input_len(inputs.len(), "network input")?;
        self.check_target_len(targets.len(), "network target")?;
        check_finite(inputs, targets, "Training sample")?;

        self.step(inputs, targets, learning_rate)
    }

    /// Checks a dataset before any parameter is touched.
    fn validate_training_data(&self, data: &[(Array1<f64>, Array1<f64>)]) -> Result<(), ModelError> {
        if data.is_empty() {
            return Err(ModelError::InputValidationError(
                "Training data cannot be empty".to_string(),
            ));
        }

        for (i, (inputs, targets)) in data.iter().enumerate() {
            self.check_input_len(inputs.len(), format!("training sample {} input", i))?;
            self.check_target_len(targets.len(), format!("training sample {} target", i))?;

            check_finite(inputs, targets, &format!("Training sample {}", i))?;
        }

        Ok(())
    }

    /// Trains the network with online stochastic gradient descent.
    ///
    /// Every epoch visits the samples in the order given, updating the parameters
    /// after each one.
    ///
    /// # Parameters
    ///
    /// - `data` - `(inputs, targets)` pairs
    /// - `epochs` - Number of passes over `data`
    /// - `learning_rate` - Step size, positive and finite
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<f64>)` - Mean squared error of every epoch, measured before each sample's update
    /// - `Err(ModelError)` - If a parameter or sample is invalid; the network is left untouched
    pub fn train(
        &mut self,
        data: &[(Array1<f64>, Array1<f64>)],
        epochs: usize,
        learning_rate: f64,
    ) -> Result<Vec<f64>, ModelError> {
        let config = TrainingConfig::new(epochs, learning_rate)?;
        self.train_with_config(data, &config)
    }

    /// Trains the network as configured by a `TrainingConfig`.
    ///
    /// See [`Network::train`].
    pub fn train_with_config(
        &mut self,
        data: &[(Array1<f64>, Array1<f64>)],
        config: &TrainingConfig,
    ) -> Result<Vec<f64>, ModelError> {
        config.validate()?;
        self.validate_training_data(data)?;

        info!(
            samples = data.len(),
            epochs = config.epochs,
            learning_rate = config.learning_rate,
            "training started"
        );

        let progress_bar = config
            .show_progress
            .then(|| create_progress_bar(config.epochs as u64));

        let mut loss_history = Vec::with_capacity(config.epochs);
        for epoch in 0..config.epochs {
            let mut epoch_error = 0.0;
            for (inputs, targets) in data {
                epoch_error += self.step(inputs, targets, config.learning_rate)?;
            }
            let epoch_loss = epoch_error / data.len() as f64;

            trace!(epoch = epoch + 1, loss = epoch_loss, "epoch completed");
            if let Some(progress_bar) = &progress_bar {
                progress_bar.set_message(format!("{:.6}", epoch_loss));
                progress_bar.inc(1);
            }
            loss_history.push(epoch_loss);
        }

        if let Some(progress_bar) = progress_bar {
            progress_bar.finish_with_message("Training completed");
        }

        info!(
            samples = data.len(),
            epochs = config.epochs,
            final_loss = loss_history.last().copied().unwrap_or_default(),
            "training completed"
        );

        Ok(loss_history)
    }

    /// Mean squared error of the network's predictions over a dataset.
    ///
    /// Each sample contributes the mean of its squared output errors; the result is the
    /// average over samples.
    ///
    /// # Returns
    ///
    /// - `Ok(f64)` - The mean squared error
    /// - `Err(ModelError)` - If `data` is empty or a sample has the wrong dimensions
    pub fn mean_squared_error(&self, data: &[(Array1<f64>, Array1<f64>)]) -> Result<f64, ModelError> {
        self.validate_training_data(data)?;

        let mut total = 0.0;
        for (inputs, targets) in data {
            total += mean_squared_error(targets, &self.predict(inputs)?)?;
        }
        Ok(total / data.len() as f64)
    }

    /// Renders the layer table printed by [`Network::summary`].
    pub fn summary_table(&self) -> String {
        let col1_width = 33;
        let col2_width = 24;
        let col3_width = 15;
        let mut table = String::new();

        table.push_str("Model: \"network\"\n");
        table.push_str(&format!(
            "┏{}┳{}┳{}┓\n",
            "━".repeat(col1_width),
            "━".repeat(col2_width),
            "━".repeat(col3_width)
        ));
        table.push_str(&format!(
            "┃ {:<31} ┃ {:<22} ┃ {:>13} ┃\n",
            "Layer (activation)", "Output Shape", "Param #"
        ));
        table.push_str(&format!(
            "┡{}╇{}╇{}┩\n",
            "━".repeat(col1_width),
            "━".repeat(col2_width),
            "━".repeat(col3_width)
        ));

        for (i, layer) in self.layers.iter().enumerate() {
            let layer_name = if i == 0 {
                "Layer".to_string()
            } else {
                format!("Layer_{}", i)
            };
            table.push_str(&format!(
                "│ {:<31} │ {:<22} │ {:>13} │\n",
                format!("{} ({})", layer_name, layer.activation().name()),
                format!("({},)", layer.output_size()),
                layer.param_count()
            ));
        }

        table.push_str(&format!(
            "└{}┴{}┴{}┘\n",
            "─".repeat(col1_width),
            "─".repeat(col2_width),
            "─".repeat(col3_width)
        ));
        // f64 parameters, 8 bytes each
        table.push_str(&format!(
            " Total params: {} ({} B)\n",
            self.param_count(),
            self.param_count() * 8
        ));

        table
    }

    /// Prints a summary of the network's layers and parameter counts.
    pub fn summary(&self) {
        print!("{}", self.summary_table());
    }
}

/// Rejects a sample holding NaN or infinite values.
fn check_finite<S1, S2>(
    inputs: &ArrayBase<S1, Ix1>,
    targets: &ArrayBase<S2, Ix1>,
    label: &str,
) -> Result<(), ModelError>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    if inputs.iter().chain(targets.iter()).any(|v| !v.is_finite()) {
        return Err(ModelError::InputValidationError(format!(
            "{} contains NaN or infinite values",
            label
        )));
    }
    Ok(())
}

/// Builds the epoch progress bar shown when `TrainingConfig::show_progress` is set.
fn create_progress_bar(epochs: u64) -> ProgressBar {
    let progress_bar = ProgressBar::new(epochs);
    let style = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} | Loss: {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓░");
    progress_bar.set_style(style);
    progress_bar
}
