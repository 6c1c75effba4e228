use crate::error::ModelError;

/// Validates that the learning rate is positive and finite.
///
/// # Parameters
///
/// * `learning_rate` - The learning rate value to validate
///
/// # Returns
///
/// - `Ok(())` if the learning rate is positive and finite
/// - `Err(ModelError::InputValidationError)` if the learning rate is not positive or not finite
pub(crate) fn validate_learning_rate(learning_rate: f64) -> Result<(), ModelError> {
    if !(learning_rate > 0.0 && learning_rate.is_finite()) {
        return Err(ModelError::InputValidationError(format!(
            "learning_rate must be positive and finite, got {}",
            learning_rate
        )));
    }
    Ok(())
}

/// Validates that the number of epochs is at least one.
///
/// # Parameters
///
/// * `epochs` - The number of epochs to validate
///
/// # Returns
///
/// - `Ok(())` if `epochs` is positive
/// - `Err(ModelError::InputValidationError)` if `epochs` is zero
pub(crate) fn validate_epochs(epochs: usize) -> Result<(), ModelError> {
    if epochs == 0 {
        return Err(ModelError::InputValidationError(
            "epochs must be greater than 0".to_string(),
        ));
    }
    Ok(())
}

/// Validates a network structure and its activation count.
///
/// # Parameters
///
/// - `structure` - Layer widths, input size first
/// - `activation_count` - Number of activation functions supplied
///
/// # Returns
///
/// - `Ok(())` if the structure describes at least one layer, every width is positive
///   and there is exactly one activation function per non-input layer
/// - `Err(ModelError::ConfigurationError)` otherwise
pub(crate) fn validate_structure(
    structure: &[usize],
    activation_count: usize,
) -> Result<(), ModelError> {
    if structure.len() < 2 {
        return Err(ModelError::ConfigurationError(format!(
            "Structure needs an input size and at least one layer, got {} entries",
            structure.len()
        )));
    }

    if activation_count != structure.len() - 1 {
        return Err(ModelError::ConfigurationError(format!(
            "The number of activation functions must be one less than the number of layers: \
             structure has {} entries, got {} activation functions",
            structure.len(),
            activation_count
        )));
    }

    if let Some(i) = structure.iter().position(|&width| width == 0) {
        return Err(ModelError::ConfigurationError(format!(
            "Layer widths must be positive, entry {} is 0",
            i
        )));
    }

    Ok(())
}
