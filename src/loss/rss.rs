use ndarray::ArrayView2;

/// Validation error used for convergence checking.
pub struct RssLoss;

impl RssLoss {
    /// Scalar error: sqrt(sum((predicted - expected)²)) / element count.
    ///
    /// The divisor is applied after the square root — root-sum-of-squares
    /// over the element count, not RMS.
    pub fn loss(predicted: ArrayView2<f64>, expected: ArrayView2<f64>) -> f64 {
        let diff = &predicted - &expected;
        diff.mapv(|x| x * x).sum().sqrt() / predicted.len() as f64
    }
}
