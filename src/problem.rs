use ndarray::Array1;

/// A learning problem: a source of training pairs plus optional data shaping.
///
/// Implementors describe the dimensions a network needs to solve the problem and
/// hand out `(inputs, targets)` pairs in the order they should be trained on.
///
/// # Example
/// ```rust
/// use rusty_mlp::neural_network::{ActivationFunction, Network};
/// use rusty_mlp::problem::{Problem, XorProblem};
///
/// let problem = XorProblem;
/// let mut network = Network::new(
///     &[problem.input_size(), 3, problem.output_size()],
///     &[ActivationFunction::SIGMOID, ActivationFunction::SIGMOID],
///     Some(1),
/// ).unwrap();
/// network.train(&problem.training_data(), 10, 0.5).unwrap();
/// ```
pub trait Problem {
    /// Number of input features.
    fn input_size(&self) -> usize;

    /// Number of output values.
    fn output_size(&self) -> usize;

    /// The training data as `(inputs, targets)` pairs.
    fn training_data(&self) -> Vec<(Array1<f64>, Array1<f64>)>;

    /// Prepares raw inputs before they are fed to a network. Identity by default.
    fn preprocess_inputs(&self, inputs: Array1<f64>) -> Array1<f64> {
        inputs
    }

    /// Turns raw network outputs into problem-level answers. Identity by default.
    fn postprocess_outputs(&self, outputs: Array1<f64>) -> Array1<f64> {
        outputs
    }
}

/// The sine wave regression problem
pub mod sine_wave;
/// The XOR classification problem
pub mod xor;

pub use sine_wave::*;
pub use xor::*;
