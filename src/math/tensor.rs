use ndarray::{concatenate, Array, Array2, Axis};
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;

/// Prepends a column of ones to `a`, so the bias term can be folded into the
/// weight matrix and learned like any other weight row.
///
/// Shape: (batch, n) -> (batch, n + 1), column 0 all ones.
pub fn add_bias(a: &Array2<f64>) -> Array2<f64> {
    let ones = Array2::ones((a.nrows(), 1));
    concatenate(Axis(1), &[ones.view(), a.view()])
        .expect("ones column and input must have equal row counts")
}

/// Uniform random matrix with values in [-range/2, range/2].
pub fn uniform(rows: usize, cols: usize, range: f64) -> Array2<f64> {
    let mut rng = rand::thread_rng();
    Array::random_using((rows, cols), Uniform::new(-range / 2.0, range / 2.0), &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn add_bias_prepends_ones_column() {
        let a = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let biased = add_bias(&a);

        assert_eq!(biased.dim(), (3, 3));
        for row in 0..3 {
            assert_relative_eq!(biased[[row, 0]], 1.0);
            assert_relative_eq!(biased[[row, 1]], a[[row, 0]]);
            assert_relative_eq!(biased[[row, 2]], a[[row, 1]]);
        }
    }

    #[test]
    fn add_bias_leaves_input_untouched() {
        let a = array![[7.0]];
        let _ = add_bias(&a);
        assert_relative_eq!(a[[0, 0]], 7.0);
    }

    #[test]
    fn uniform_respects_shape_and_range() {
        let w = uniform(12, 7, 0.05);
        assert_eq!(w.dim(), (12, 7));
        assert!(w.iter().all(|&v| (-0.025..=0.025).contains(&v)));
    }
}
