use crate::problem::Problem;
use ndarray::{Array1, array};
use std::f64::consts::PI;

/// Distance between consecutive sample points
const STEP: f64 = 0.1;

/// Regression of `sin(x)` over one period.
///
/// Samples `x = 0.0, 0.1, 0.2, ...` for every `x <= 2π` (63 points), with `sin(x)` as the
/// target. The targets span `[-1, 1]`, so a `Tanh` output layer fits them.
#[derive(Debug, Clone, Copy, Default)]
pub struct SineWaveProblem;

impl Problem for SineWaveProblem {
    fn input_size(&self) -> usize {
        1
    }

    fn output_size(&self) -> usize {
        1
    }

    fn training_data(&self) -> Vec<(Array1<f64>, Array1<f64>)> {
        (0..)
            .map(|i| i as f64 * STEP)
            .take_while(|&x| x <= 2.0 * PI)
            .map(|x| (array![x], array![x.sin()]))
            .collect()
    }
}
