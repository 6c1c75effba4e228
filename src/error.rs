use thiserror::Error;

/// Error types that can occur while building, training or querying a network
///
/// # Variants
///
/// - `ConfigurationError` - The requested topology or configuration cannot produce a valid network
/// - `DimensionMismatch` - A vector's length disagrees with what a neuron, layer or network expects
/// - `InputValidationError` - A training parameter or dataset does not meet the validation rules
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
    #[error("Dimension mismatch in {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        context: String,
        expected: usize,
        actual: usize,
    },
    #[error("Input validation error: {0}")]
    InputValidationError(String),
}

impl ModelError {
    /// Shorthand for building a `DimensionMismatch` error.
    pub(crate) fn dimension_mismatch(
        context: impl Into<String>,
        expected: usize,
        actual: usize,
    ) -> Self {
        ModelError::DimensionMismatch {
            context: context.into(),
            expected,
            actual,
        }
    }
}
