use crate::problem::Problem;
use ndarray::{Array1, array};

/// Outputs at or above this value are read as `1.0`
const DECISION_THRESHOLD: f64 = 0.5;

/// Exclusive-or over two binary inputs.
///
/// The four rows of the truth table are the whole dataset. Outputs are thresholded
/// at 0.5 when post-processed.
#[derive(Debug, Clone, Copy, Default)]
pub struct XorProblem;

impl Problem for XorProblem {
    fn input_size(&self) -> usize {
        2
    }

    fn output_size(&self) -> usize {
        1
    }

    fn training_data(&self) -> Vec<(Array1<f64>, Array1<f64>)> {
        vec![
            (array![0.0, 0.0], array![0.0]),
            (array![0.0, 1.0], array![1.0]),
            (array![1.0, 0.0], array![1.0]),
            (array![1.0, 1.0], array![0.0]),
        ]
    }

    fn postprocess_outputs(&self, outputs: Array1<f64>) -> Array1<f64> {
        outputs.mapv(|output| {
            if output >= DECISION_THRESHOLD {
                1.0
            } else {
                0.0
            }
        })
    }
}
