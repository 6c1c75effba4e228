use crate::error::ModelError;
use std::fmt;

/// Max input clipping value to prevent overflow in the exp function
const INPUT_CLIP_MAX: f64 = 500.0;

/// Min input clipping value to prevent overflow in the exp function
const INPUT_CLIP_MIN: f64 = -500.0;

/// A named pair of scalar functions: the activation itself and its derivative.
///
/// The derivative is expressed in terms of the *activated output* `y = f(x)`,
/// not the raw weighted sum. Backpropagation therefore passes each neuron's
/// output to `derivative`.
///
/// Values are immutable and `Copy`; every neuron of a layer shares the same one.
///
/// # Example
/// ```rust
/// use rusty_mlp::neural_network::ActivationFunction;
///
/// let sigmoid = ActivationFunction::SIGMOID;
/// let y = sigmoid.activate(0.0);
/// assert_eq!(y, 0.5);
/// assert_eq!(sigmoid.derivative(y), 0.25);
/// ```
#[derive(Clone, Copy)]
pub struct ActivationFunction {
    name: &'static str,
    function: fn(f64) -> f64,
    derivative: fn(f64) -> f64,
}

fn sigmoid(x: f64) -> f64 {
    let clipped_x = x.clamp(INPUT_CLIP_MIN, INPUT_CLIP_MAX);
    1.0 / (1.0 + (-clipped_x).exp())
}

fn sigmoid_derivative(y: f64) -> f64 {
    y * (1.0 - y)
}

fn tanh(x: f64) -> f64 {
    x.tanh()
}

fn tanh_derivative(y: f64) -> f64 {
    1.0 - y * y
}

fn relu(x: f64) -> f64 {
    if x > 0.0 { x } else { 0.0 }
}

fn relu_derivative(y: f64) -> f64 {
    if y > 0.0 { 1.0 } else { 0.0 }
}

fn identity(x: f64) -> f64 {
    x
}

fn identity_derivative(_y: f64) -> f64 {
    1.0
}

impl ActivationFunction {
    /// `f(x) = 1 / (1 + e^-x)`, `f'(y) = y(1 - y)`
    pub const SIGMOID: ActivationFunction =
        ActivationFunction::new("Sigmoid", sigmoid, sigmoid_derivative);

    /// `f(x) = tanh(x)`, `f'(y) = 1 - y^2`
    pub const TANH: ActivationFunction = ActivationFunction::new("Tanh", tanh, tanh_derivative);

    /// `f(x) = max(0, x)`, `f'(y) = 1 if y > 0 else 0`
    pub const RELU: ActivationFunction = ActivationFunction::new("ReLU", relu, relu_derivative);

    /// `f(x) = x`, `f'(y) = 1`
    pub const LINEAR: ActivationFunction =
        ActivationFunction::new("Linear", identity, identity_derivative);

    /// Creates a custom activation function.
    ///
    /// # Parameters
    ///
    /// - `name` - Display name of the function
    /// - `function` - The activation applied to a neuron's weighted sum
    /// - `derivative` - The derivative, evaluated at the activated output
    ///
    /// # Returns
    ///
    /// * `ActivationFunction` - The new activation function
    pub const fn new(
        name: &'static str,
        function: fn(f64) -> f64,
        derivative: fn(f64) -> f64,
    ) -> Self {
        Self {
            name,
            function,
            derivative,
        }
    }

    /// Resolves one of the built-in activation functions by name (case-insensitive).
    ///
    /// Accepted names are `sigmoid`, `tanh`, `relu` and `linear`.
    ///
    /// # Returns
    ///
    /// - `Ok(ActivationFunction)` - The matching built-in function
    /// - `Err(ModelError::ConfigurationError)` - If the name is unknown
    pub fn from_name(name: &str) -> Result<Self, ModelError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "sigmoid" => Ok(Self::SIGMOID),
            "tanh" => Ok(Self::TANH),
            "relu" => Ok(Self::RELU),
            "linear" | "identity" => Ok(Self::LINEAR),
            other => Err(ModelError::ConfigurationError(format!(
                "Unknown activation function '{}', expected one of: sigmoid, tanh, relu, linear",
                other
            ))),
        }
    }

    /// Gets the name of the activation function.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Applies the activation to a raw weighted sum.
    pub fn activate(&self, x: f64) -> f64 {
        (self.function)(x)
    }

    /// Evaluates the derivative at an already activated output `y`.
    pub fn derivative(&self, y: f64) -> f64 {
        (self.derivative)(y)
    }
}

impl fmt::Debug for ActivationFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ActivationFunction").field(&self.name).finish()
    }
}

impl fmt::Display for ActivationFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

// Two activation functions are considered equal when they carry the same name.
impl PartialEq for ActivationFunction {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}
