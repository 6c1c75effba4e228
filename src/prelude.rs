pub use crate::config::{NetworkConfig, TrainingConfig};
pub use crate::error::ModelError;
pub use crate::metric::{accuracy, mean_squared_error};
pub use crate::neural_network::{ActivationFunction, ForwardPass, Layer, LayerGradients, Network, Neuron};
pub use crate::problem::{Problem, SineWaveProblem, XorProblem};
pub use crate::rand::SeedableRng;
pub use crate::rand::rngs::StdRng;
