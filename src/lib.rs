/// Module `neural_network` contains the multilayer perceptron: activation functions,
/// neurons, layers and the network with its training loop.
///
/// Every value is held explicitly: a neuron owns its weight vector and bias, a layer owns
/// its neurons and shares one activation function between them, and a network owns its
/// layers. Training is plain online stochastic gradient descent with backpropagation.
///
/// # Core Components
///
/// - **ActivationFunction**: Named pair of scalar functions (Sigmoid, Tanh, ReLU, Linear or custom)
/// - **Neuron**: Weight vector and bias producing one activated output
/// - **Layer**: Ordered neurons mapping an input vector to an output vector
/// - **Network**: Ordered layers with forward pass, backpropagation and training
///
/// # Examples
/// ```rust
/// use ndarray::array;
/// use rusty_mlp::neural_network::*;
///
/// let mut network = Network::new(
///     &[2, 2, 1],
///     &[ActivationFunction::SIGMOID, ActivationFunction::SIGMOID],
///     Some(7),
/// ).unwrap();
///
/// let data = vec![
///     (array![0.0, 0.0], array![0.0]),
///     (array![0.0, 1.0], array![1.0]),
/// ];
/// network.train(&data, 1000, 0.2).unwrap();
///
/// let prediction = network.predict(&array![0.0, 1.0]).unwrap();
/// println!("{:?}", prediction);
/// ```
pub mod neural_network;

/// Training and topology configuration, loadable from JSON.
///
/// - **TrainingConfig**: epochs, learning rate and progress display
/// - **NetworkConfig**: layer widths, activation names and random seed
pub mod config;

/// Error type shared by the whole crate.
pub mod error;

/// Evaluation metrics for network outputs.
///
/// - **mean_squared_error**: Average squared difference between targets and predictions
/// - **accuracy**: Share of exactly matching labels, for thresholded outputs
pub mod metric;

/// Problem definitions that supply training data to a network.
///
/// - **Problem**: Trait exposing input/output sizes, training pairs and data shaping hooks
/// - **XorProblem**: The 4-row exclusive-or truth table
/// - **SineWaveProblem**: `sin(x)` sampled over one period
pub mod problem;

/// A convenience module that re-exports the most commonly used types from this crate.
///
/// # Examples
/// ```rust
/// use rusty_mlp::prelude::*;
///
/// let problem = XorProblem;
/// assert_eq!(problem.input_size(), 2);
/// ```
pub mod prelude;

pub use error::ModelError;

/// The `rand` crate that weight initialization is built on, for callers supplying
/// their own generator to [`neural_network::Network::with_rng`].
pub use ndarray_rand::rand;
