use ndarray::Array2;
use std::f64::consts::E;

/// Element-wise logistic sigmoid: 1 / (1 + e^-x).
pub fn sigmoid(z: &Array2<f64>) -> Array2<f64> {
    z.mapv(|x| 1.0 / (1.0 + E.powf(-x)))
}

/// Sigmoid derivative computed from the stored output: (1 - out) * out.
/// Pre-activations are never kept, so this is the only derivative form the
/// backward pass uses.
pub fn sigmoid_prime(out: &Array2<f64>) -> Array2<f64> {
    out.mapv(|y| (1.0 - y) * y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn sigmoid_of_zero_is_half() {
        let out = sigmoid(&array![[0.0]]);
        assert_relative_eq!(out[[0, 0]], 0.5);
    }

    #[test]
    fn sigmoid_stays_in_open_unit_interval() {
        let out = sigmoid(&array![[-30.0, -1.0, 1.0, 30.0]]);
        assert!(out.iter().all(|&y| y > 0.0 && y < 1.0));
    }

    #[test]
    fn derivative_from_output_peaks_at_half() {
        let prime = sigmoid_prime(&array![[0.5, 0.25, 0.75]]);
        assert_relative_eq!(prime[[0, 0]], 0.25);
        // symmetric around 0.5
        assert_relative_eq!(prime[[0, 1]], prime[[0, 2]]);
    }
}
