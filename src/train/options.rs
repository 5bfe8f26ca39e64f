use std::sync::mpsc;
use crate::train::epoch_stats::EpochStats;

/// Hyperparameters for a `train` run.
///
/// # Fields
/// - `batch_size`  — rows per mini-batch; the final batch is reserved for
///                   validation
/// - `max_epochs`  — upper bound on passes over the training batches
/// - `alpha`       — gradient-descent learning rate
/// - `max_error`   — validation error below which training stops early
/// - `progress_tx` — optional channel sender; one `EpochStats` is sent per
///                   completed epoch. Send failures are ignored — a dropped
///                   receiver does not stop training.
pub struct TrainOptions {
    pub batch_size: usize,
    pub max_epochs: usize,
    pub alpha: f64,
    pub max_error: f64,
    pub progress_tx: Option<mpsc::Sender<EpochStats>>,
}

impl TrainOptions {
    /// Creates options with no progress channel.
    pub fn new(batch_size: usize, max_epochs: usize, alpha: f64, max_error: f64) -> Self {
        TrainOptions {
            batch_size,
            max_epochs,
            alpha,
            max_error,
            progress_tx: None,
        }
    }
}
