use super::*;

fn fixed_layer() -> Layer {
    Layer::from_neurons(
        vec![
            Neuron::from_parameters(array![1.0, 0.0], 0.0).unwrap(),
            Neuron::from_parameters(array![0.0, 1.0], 0.0).unwrap(),
            Neuron::from_parameters(array![1.0, 1.0], -1.0).unwrap(),
        ],
        ActivationFunction::LINEAR,
    )
    .unwrap()
}

#[test]
fn layer_compute_preserves_neuron_order_test() {
    let layer = fixed_layer();

    let output = layer.compute(&array![2.0, 5.0]).unwrap();
    assert_eq!(output, array![2.0, 5.0, 6.0]);
}

#[test]
fn layer_shape_accessors_test() {
    let layer = fixed_layer();

    assert_eq!(layer.input_size(), 2);
    assert_eq!(layer.output_size(), 3);
    assert_eq!(layer.neurons().len(), 3);
    assert_eq!(layer.param_count(), 9);
    assert_eq!(layer.activation(), ActivationFunction::LINEAR);
}

#[test]
fn layer_new_test() {
    let mut rng = StdRng::seed_from_u64(3);
    let layer = Layer::new(4, 6, ActivationFunction::RELU, &mut rng).unwrap();

    assert_eq!(layer.output_size(), 4);
    assert_eq!(layer.input_size(), 6);
    for neuron in layer.neurons() {
        assert_eq!(neuron.input_count(), 6);
    }

    // ReLU outputs are never negative
    let output = layer
        .compute(&array![1.0, -2.0, 3.0, -4.0, 5.0, -6.0])
        .unwrap();
    assert!(output.iter().all(|&v| v >= 0.0));
}

#[test]
fn layer_new_rejects_zero_sizes_test() {
    let mut rng = StdRng::seed_from_u64(3);

    assert!(matches!(
        Layer::new(0, 2, ActivationFunction::SIGMOID, &mut rng),
        Err(ModelError::ConfigurationError(_))
    ));
    assert!(matches!(
        Layer::new(2, 0, ActivationFunction::SIGMOID, &mut rng),
        Err(ModelError::ConfigurationError(_))
    ));
}

#[test]
fn layer_from_neurons_validation_test() {
    assert!(matches!(
        Layer::from_neurons(Vec::new(), ActivationFunction::SIGMOID),
        Err(ModelError::ConfigurationError(_))
    ));

    let result = Layer::from_neurons(
        vec![
            Neuron::from_parameters(array![1.0, 0.0], 0.0).unwrap(),
            Neuron::from_parameters(array![1.0, 0.0, 2.0], 0.0).unwrap(),
        ],
        ActivationFunction::SIGMOID,
    );
    assert!(matches!(result, Err(ModelError::ConfigurationError(_))));
}

#[test]
fn layer_compute_dimension_mismatch_test() {
    let layer = fixed_layer();

    let result = layer.compute(&array![1.0, 2.0, 3.0]);
    assert_eq!(
        result,
        Err(ModelError::DimensionMismatch {
            context: "layer input".to_string(),
            expected: 2,
            actual: 3,
        })
    );
}

#[test]
fn layer_update_test() {
    let mut layer = fixed_layer();
    let gradients = LayerGradients {
        weight_gradients: vec![array![1.0, 0.0], array![0.0, 1.0], array![2.0, 2.0]],
        bias_gradients: array![0.5, -0.5, 1.0],
    };

    layer.update(&gradients, 0.1).unwrap();

    let neurons = layer.neurons();
    assert_relative_eq!(neurons[0].weights()[0], 0.9, epsilon = 1e-12);
    assert_relative_eq!(neurons[0].bias(), -0.05, epsilon = 1e-12);
    assert_relative_eq!(neurons[1].weights()[1], 0.9, epsilon = 1e-12);
    assert_relative_eq!(neurons[1].bias(), 0.05, epsilon = 1e-12);
    assert_relative_eq!(neurons[2].weights()[0], 0.8, epsilon = 1e-12);
    assert_relative_eq!(neurons[2].weights()[1], 0.8, epsilon = 1e-12);
    assert_relative_eq!(neurons[2].bias(), -1.1, epsilon = 1e-12);
}

#[test]
fn layer_update_rejects_bad_shapes_without_partial_update_test() {
    let mut layer = fixed_layer();
    let before = layer.clone();

    // The last neuron's gradient is too short
    let gradients = LayerGradients {
        weight_gradients: vec![array![1.0, 0.0], array![0.0, 1.0], array![2.0]],
        bias_gradients: array![0.5, -0.5, 1.0],
    };
    let result = layer.update(&gradients, 0.1);
    assert!(matches!(result, Err(ModelError::DimensionMismatch { .. })));
    assert_eq!(layer, before);

    // Wrong number of neurons
    let gradients = LayerGradients {
        weight_gradients: vec![array![1.0, 0.0]],
        bias_gradients: array![0.5],
    };
    let result = layer.update(&gradients, 0.1);
    assert!(matches!(result, Err(ModelError::DimensionMismatch { .. })));
    assert_eq!(layer, before);
}
