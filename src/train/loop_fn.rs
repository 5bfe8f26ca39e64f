use std::time::Instant;

use ndarray::{s, ArrayView2};

use crate::loss::rss::RssLoss;
use crate::network::network::Network;
use crate::train::epoch_stats::EpochStats;
use crate::train::options::TrainOptions;

/// How often, in epochs, a progress line is logged.
const LOG_INTERVAL: usize = 10;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` until the validation error drops below
/// `options.max_error` or `options.max_epochs` epochs have run, and returns
/// the last computed validation error.
///
/// The sample rows are cut into `num_samples / batch_size` batches. Every
/// batch except the last drives one forward/backward pass per epoch; the last
/// batch (plus any remainder rows) is reserved for validation and never
/// trains. With fewer than two batches no weight update happens at all and
/// the whole input is validated — `batch_size >= num_samples` is degenerate
/// but defined.
///
/// # Arguments
/// - `network` — mutable reference to the network; weights updated in place
/// - `input`   — sample rows, shape `(num_samples, input_layer_size)`
/// - `target`  — expected outputs, shape `(num_samples, output_layer_size)`
/// - `options` — hyperparameters plus the optional progress channel
///
/// # Panics
/// Panics if `input` is empty, row counts differ, or a hyperparameter is out
/// of range.
pub fn train(
    network: &mut Network,
    input: ArrayView2<f64>,
    target: ArrayView2<f64>,
    options: &TrainOptions,
) -> f64 {
    assert!(input.nrows() > 0, "input must not be empty");
    assert_eq!(
        input.nrows(),
        target.nrows(),
        "input and target must have equal row counts"
    );
    assert!(options.batch_size >= 1, "batch_size must be at least 1");
    assert!(options.max_epochs >= 1, "max_epochs must be at least 1");
    assert!(options.alpha > 0.0, "alpha must be positive");
    assert!(options.max_error >= 0.0, "max_error must not be negative");

    let num_batches = input.nrows() / options.batch_size;
    // Rows from here to the end form the reserved validation batch.
    let val_start = num_batches.saturating_sub(1) * options.batch_size;

    let mut error = 0.0;
    let mut recent_ms: Vec<u64> = Vec::with_capacity(LOG_INTERVAL);

    for epoch in 1..=options.max_epochs {
        let t_start = Instant::now();

        // ── Weight updates over the training batches ───────────────────────
        for j in 0..num_batches.saturating_sub(1) {
            let lo = j * options.batch_size;
            let hi = lo + options.batch_size;
            network.forward_propagate(input.slice(s![lo..hi, ..]));
            network.back_propagate(target.slice(s![lo..hi, ..]), options.alpha);
        }

        // ── Validation on the reserved batch ───────────────────────────────
        let predicted = network.predict(input.slice(s![val_start.., ..]));
        error = RssLoss::loss(predicted.view(), target.slice(s![val_start.., ..]));

        let elapsed_ms = t_start.elapsed().as_millis() as u64;
        recent_ms.push(elapsed_ms);

        // ── Emit progress ──────────────────────────────────────────────────
        if let Some(ref tx) = options.progress_tx {
            let _ = tx.send(EpochStats {
                epoch,
                max_epochs: options.max_epochs,
                error,
                elapsed_ms,
            });
        }

        if epoch % LOG_INTERVAL == 0 {
            let avg_ms = recent_ms.iter().sum::<u64>() as f64 / recent_ms.len() as f64;
            log::info!(
                "epoch {}/{}: error = {:.6}, avg epoch time = {:.1} ms",
                epoch,
                options.max_epochs,
                error,
                avg_ms
            );
            recent_ms.clear();
        }

        if error < options.max_error {
            log::info!("converged at epoch {} with error {:.6}", epoch, error);
            break;
        }
    }

    error
}
