use super::*;

#[test]
fn sigmoid_activate_and_derivative_test() {
    let sigmoid_fn = ActivationFunction::SIGMOID;

    assert_eq!(sigmoid_fn.activate(0.0), 0.5);
    assert_relative_eq!(sigmoid_fn.activate(2.0), sigmoid(2.0), epsilon = 1e-12);
    assert_relative_eq!(sigmoid_fn.activate(-3.5), sigmoid(-3.5), epsilon = 1e-12);

    // Derivative takes the activated output, not the raw sum
    assert_eq!(sigmoid_fn.derivative(0.5), 0.25);
    let y = sigmoid_fn.activate(1.0);
    assert_relative_eq!(sigmoid_fn.derivative(y), y * (1.0 - y), epsilon = 1e-12);
}

#[test]
fn sigmoid_derivative_bounded_test() {
    let sigmoid_fn = ActivationFunction::SIGMOID;

    let mut samples: Vec<f64> = (-2000..=2000).map(|i| i as f64 * 0.05).collect();
    samples.extend([f64::MAX, f64::MIN, 1e300, -1e300, f64::MIN_POSITIVE, -0.0]);

    for x in samples {
        let d = sigmoid_fn.derivative(sigmoid_fn.activate(x));
        assert!(
            (0.0..=0.25).contains(&d),
            "sigmoid'(sigmoid({})) = {} is outside [0, 0.25]",
            x,
            d
        );
    }

    // Peak at x = 0
    assert_eq!(sigmoid_fn.derivative(sigmoid_fn.activate(0.0)), 0.25);
}

#[test]
fn sigmoid_extreme_inputs_test() {
    let sigmoid_fn = ActivationFunction::SIGMOID;

    let high = sigmoid_fn.activate(1e6);
    let low = sigmoid_fn.activate(-1e6);

    assert!(high.is_finite() && low.is_finite());
    assert_abs_diff_eq!(high, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(low, 0.0, epsilon = 1e-12);
}

#[test]
fn tanh_activate_and_derivative_test() {
    let tanh_fn = ActivationFunction::TANH;

    assert_eq!(tanh_fn.activate(0.0), 0.0);
    assert_relative_eq!(tanh_fn.activate(0.7), 0.7_f64.tanh(), epsilon = 1e-12);

    let y = tanh_fn.activate(0.7);
    assert_relative_eq!(tanh_fn.derivative(y), 1.0 - y * y, epsilon = 1e-12);
    assert_eq!(tanh_fn.derivative(0.0), 1.0);
}

#[test]
fn relu_activate_and_derivative_test() {
    let relu_fn = ActivationFunction::RELU;

    assert_eq!(relu_fn.activate(-2.0), 0.0);
    assert_eq!(relu_fn.activate(0.0), 0.0);
    assert_eq!(relu_fn.activate(3.0), 3.0);

    assert_eq!(relu_fn.derivative(0.0), 0.0);
    assert_eq!(relu_fn.derivative(3.0), 1.0);
}

#[test]
fn linear_activate_and_derivative_test() {
    let linear_fn = ActivationFunction::LINEAR;

    assert_eq!(linear_fn.activate(-4.25), -4.25);
    assert_eq!(linear_fn.derivative(123.0), 1.0);
}

#[test]
fn from_name_test() {
    assert_eq!(
        ActivationFunction::from_name("sigmoid").unwrap(),
        ActivationFunction::SIGMOID
    );
    assert_eq!(
        ActivationFunction::from_name("Tanh").unwrap(),
        ActivationFunction::TANH
    );
    assert_eq!(
        ActivationFunction::from_name(" RELU ").unwrap(),
        ActivationFunction::RELU
    );
    assert_eq!(
        ActivationFunction::from_name("linear").unwrap(),
        ActivationFunction::LINEAR
    );

    let result = ActivationFunction::from_name("softplus");
    assert!(matches!(result, Err(ModelError::ConfigurationError(_))));
}

#[test]
fn custom_activation_test() {
    fn softsign(x: f64) -> f64 {
        x / (1.0 + x.abs())
    }
    fn softsign_derivative(y: f64) -> f64 {
        (1.0 - y.abs()).powi(2)
    }

    let softsign_fn = ActivationFunction::new("Softsign", softsign, softsign_derivative);

    assert_eq!(softsign_fn.name(), "Softsign");
    assert_eq!(softsign_fn.activate(1.0), 0.5);
    assert_eq!(softsign_fn.derivative(0.5), 0.25);
    assert_eq!(format!("{}", softsign_fn), "Softsign");
    assert_ne!(softsign_fn, ActivationFunction::SIGMOID);
}
