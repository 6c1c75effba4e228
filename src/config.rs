use crate::error::ModelError;
use crate::neural_network::input_validation_function::{validate_epochs, validate_learning_rate};
use crate::neural_network::{ActivationFunction, Network};
use serde::{Deserialize, Serialize};

/// Hyper-parameters of a training run.
///
/// # Fields
///
/// - `epochs` - Number of full passes over the training data
/// - `learning_rate` - Step size of every gradient descent update
/// - `show_progress` - Draw a console progress bar while training
///
/// # Example
/// ```rust
/// use rusty_mlp::config::TrainingConfig;
///
/// let config = TrainingConfig::from_json_str(r#"{ "epochs": 500, "learning_rate": 0.1 }"#).unwrap();
/// assert_eq!(config.epochs, 500);
/// assert!(!config.show_progress);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingConfig {
    pub epochs: usize,
    pub learning_rate: f64,
    #[serde(default)]
    pub show_progress: bool,
}

impl Default for TrainingConfig {
    /// # Default Values
    ///
    /// - `epochs` - 10000
    /// - `learning_rate` - 0.5
    /// - `show_progress` - false
    fn default() -> Self {
        Self {
            epochs: 10_000,
            learning_rate: 0.5,
            show_progress: false,
        }
    }
}

impl TrainingConfig {
    /// Creates a validated training configuration with the progress bar disabled.
    ///
    /// # Returns
    ///
    /// - `Ok(TrainingConfig)` - The configuration
    /// - `Err(ModelError::InputValidationError)` - If `epochs` is zero or `learning_rate` is not positive and finite
    pub fn new(epochs: usize, learning_rate: f64) -> Result<Self, ModelError> {
        let config = Self {
            epochs,
            learning_rate,
            show_progress: false,
        };
        config.validate()?;
        Ok(config)
    }

    /// Enables or disables the progress bar.
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Checks that the configuration can drive a training run.
    pub fn validate(&self) -> Result<(), ModelError> {
        validate_epochs(self.epochs)?;
        validate_learning_rate(self.learning_rate)
    }

    /// Parses and validates a configuration from JSON.
    ///
    /// # Returns
    ///
    /// - `Ok(TrainingConfig)` - The parsed configuration
    /// - `Err(ModelError::ConfigurationError)` - If the JSON is malformed
    /// - `Err(ModelError::InputValidationError)` - If the values are out of range
    pub fn from_json_str(json: &str) -> Result<Self, ModelError> {
        let config: Self = serde_json::from_str(json).map_err(|e| {
            ModelError::ConfigurationError(format!("Invalid training config: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }
}

/// Topology of a network, with activation functions referenced by name.
///
/// # Fields
///
/// - `structure` - Layer widths, input size first
/// - `activations` - One activation name per non-input layer (`sigmoid`, `tanh`, `relu`, `linear`)
/// - `random_seed` - Optional seed for weight initialization
///
/// # Example
/// ```rust
/// use rusty_mlp::config::NetworkConfig;
///
/// let config = NetworkConfig::from_json_str(
///     r#"{ "structure": [2, 3, 1], "activations": ["sigmoid", "sigmoid"], "random_seed": 7 }"#,
/// ).unwrap();
/// let network = config.build().unwrap();
/// assert_eq!(network.structure(), vec![2, 3, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub structure: Vec<usize>,
    pub activations: Vec<String>,
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl NetworkConfig {
    /// Parses a network configuration from JSON.
    ///
    /// Only the JSON itself is checked here; topology errors surface from `build`.
    pub fn from_json_str(json: &str) -> Result<Self, ModelError> {
        serde_json::from_str(json).map_err(|e| {
            ModelError::ConfigurationError(format!("Invalid network config: {}", e))
        })
    }

    /// Resolves the activation names and builds the network.
    ///
    /// # Returns
    ///
    /// - `Ok(Network)` - A freshly initialized network
    /// - `Err(ModelError::ConfigurationError)` - If a name is unknown or the topology is invalid
    pub fn build(&self) -> Result<Network, ModelError> {
        let activations = self
            .activations
            .iter()
            .map(|name| ActivationFunction::from_name(name))
            .collect::<Result<Vec<_>, _>>()?;

        Network::new(&self.structure, &activations, self.random_seed)
    }
}
