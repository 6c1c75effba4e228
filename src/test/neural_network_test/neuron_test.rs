use super::*;

#[test]
fn neuron_compute_test() {
    let neuron = Neuron::from_parameters(array![0.4, -0.2, 0.1], 0.3).unwrap();
    let inputs = array![1.0, 2.0, -1.0];

    // 0.4 - 0.4 - 0.1 + 0.3 = 0.2
    let linear = neuron
        .compute(&inputs, &ActivationFunction::LINEAR)
        .unwrap();
    assert_relative_eq!(linear, 0.2, epsilon = 1e-12);

    let activated = neuron
        .compute(&inputs, &ActivationFunction::SIGMOID)
        .unwrap();
    assert_relative_eq!(activated, sigmoid(0.2), epsilon = 1e-12);
}

#[test]
fn neuron_compute_accepts_views_test() {
    let neuron = Neuron::from_parameters(array![1.0, 1.0], 0.0).unwrap();
    let data = array![[1.0, 2.0], [3.0, 4.0]];

    let output = neuron
        .compute(&data.row(1), &ActivationFunction::LINEAR)
        .unwrap();
    assert_eq!(output, 7.0);
}

#[test]
fn neuron_compute_dimension_mismatch_test() {
    let neuron = Neuron::from_parameters(array![0.5, 0.5], 0.0).unwrap();

    let result = neuron.compute(&array![1.0, 2.0, 3.0], &ActivationFunction::SIGMOID);
    assert_eq!(
        result,
        Err(ModelError::DimensionMismatch {
            context: "neuron input".to_string(),
            expected: 2,
            actual: 3,
        })
    );

    let result = neuron.compute(&array![1.0], &ActivationFunction::SIGMOID);
    assert!(matches!(result, Err(ModelError::DimensionMismatch { .. })));
}

#[test]
fn neuron_update_test() {
    let mut neuron = Neuron::from_parameters(array![0.5, -0.5], 0.25).unwrap();

    neuron.update(&array![0.2, -0.4], 0.1, 0.5).unwrap();

    // w -= lr * g, b -= lr * g_b
    assert_relative_eq!(neuron.weights()[0], 0.4, epsilon = 1e-12);
    assert_relative_eq!(neuron.weights()[1], -0.3, epsilon = 1e-12);
    assert_relative_eq!(neuron.bias(), 0.2, epsilon = 1e-12);
}

#[test]
fn neuron_update_dimension_mismatch_test() {
    let mut neuron = Neuron::from_parameters(array![0.5, -0.5], 0.25).unwrap();
    let before = neuron.clone();

    let result = neuron.update(&array![0.1], 0.1, 0.5);
    assert!(matches!(result, Err(ModelError::DimensionMismatch { .. })));

    // Nothing changes on failure
    assert_eq!(neuron, before);
}

#[test]
fn neuron_random_initialization_test() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..50 {
        let neuron = Neuron::new(8, &mut rng);
        assert_eq!(neuron.input_count(), 8);
        for &w in neuron.weights().iter() {
            assert!((-1.0..1.0).contains(&w), "weight {} out of range", w);
        }
        assert!((-1.0..1.0).contains(&neuron.bias()));
    }
}

#[test]
fn neuron_seeded_initialization_is_reproducible_test() {
    let mut rng_a = StdRng::seed_from_u64(7);
    let mut rng_b = StdRng::seed_from_u64(7);

    assert_eq!(Neuron::new(5, &mut rng_a), Neuron::new(5, &mut rng_b));
}

#[test]
fn neuron_from_parameters_validation_test() {
    assert!(matches!(
        Neuron::from_parameters(Array1::zeros(0), 0.0),
        Err(ModelError::ConfigurationError(_))
    ));
    assert!(matches!(
        Neuron::from_parameters(array![f64::NAN], 0.0),
        Err(ModelError::ConfigurationError(_))
    ));
    assert!(matches!(
        Neuron::from_parameters(array![1.0], f64::INFINITY),
        Err(ModelError::ConfigurationError(_))
    ));
}
