/// Module that contains the activation functions shared by the neurons of a layer
pub mod activation;
/// Module that contains parameter validation helpers
pub(crate) mod input_validation_function;
/// Module that contains the fully connected layer
pub mod layer;
/// Module that contains the multilayer perceptron and its training loop
pub mod network;
/// Module that contains the single neuron
pub mod neuron;

pub use activation::*;
pub use layer::*;
pub use network::*;
pub use neuron::*;
