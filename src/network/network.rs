use ndarray::{s, Array2, ArrayView2};

use crate::activation::sigmoid::{sigmoid, sigmoid_prime};
use crate::math::tensor::{add_bias, uniform};

/// Width of the uniform weight-initialization interval used by `Network::new`.
pub const DEFAULT_INIT_RANGE: f64 = 0.05;

/// A fully-connected feed-forward network trained by error back-propagation.
///
/// `signals[i]` holds layer i's activation for the current batch, shape
/// `(batch, layer_sizes[i])`; it is overwritten by every forward pass.
/// `weights[i]` connects layer i to layer i + 1 and carries the bias term as
/// an extra leading row, so its shape is
/// `(layer_sizes[i] + 1, layer_sizes[i + 1])`.
///
/// `signals.len() == weights.len() + 1 == layer_sizes.len()` always holds.
#[derive(Debug, Clone)]
pub struct Network {
    layer_sizes: Vec<usize>,
    signals: Vec<Array2<f64>>,
    weights: Vec<Array2<f64>>,
}

impl Network {
    /// Builds a network with weights drawn uniformly from
    /// [-`DEFAULT_INIT_RANGE`/2, `DEFAULT_INIT_RANGE`/2].
    pub fn new(layer_sizes: &[usize]) -> Network {
        Network::with_init_range(layer_sizes, DEFAULT_INIT_RANGE)
    }

    /// Builds a network with weights drawn uniformly from [-range/2, range/2].
    ///
    /// # Panics
    /// Panics if fewer than two layer sizes are given.
    pub fn with_init_range(layer_sizes: &[usize], range: f64) -> Network {
        assert!(
            layer_sizes.len() >= 2,
            "a network needs at least an input and an output layer"
        );

        let signals = empty_signals(layer_sizes);
        let weights = layer_sizes
            .windows(2)
            .map(|pair| uniform(pair[0] + 1, pair[1], range))
            .collect();

        Network {
            layer_sizes: layer_sizes.to_vec(),
            signals,
            weights,
        }
    }

    /// Builds a network from explicit weight matrices, one per layer pair.
    ///
    /// # Panics
    /// Panics if fewer than two layer sizes are given or a matrix does not
    /// have the expected `(layer_sizes[i] + 1, layer_sizes[i + 1])` shape.
    pub fn with_weights(layer_sizes: &[usize], weights: Vec<Array2<f64>>) -> Network {
        assert!(
            layer_sizes.len() >= 2,
            "a network needs at least an input and an output layer"
        );
        assert_eq!(
            weights.len(),
            layer_sizes.len() - 1,
            "expected one weight matrix per layer pair"
        );
        for (i, w) in weights.iter().enumerate() {
            assert_eq!(
                w.dim(),
                (layer_sizes[i] + 1, layer_sizes[i + 1]),
                "weight matrix {i} has the wrong shape"
            );
        }

        Network {
            layer_sizes: layer_sizes.to_vec(),
            signals: empty_signals(layer_sizes),
            weights,
        }
    }

    /// Unit counts per layer, input first.
    pub fn layer_sizes(&self) -> &[usize] {
        &self.layer_sizes
    }

    /// Read-only view of the weight matrices; weights mutate only inside
    /// `back_propagate`.
    pub fn weights(&self) -> &[Array2<f64>] {
        &self.weights
    }

    /// Runs `input` through every layer, leaving each layer's activation in
    /// `signals`; the last signal is the network output for this batch.
    pub fn forward_propagate(&mut self, input: ArrayView2<f64>) {
        self.signals[0] = input.to_owned();
        for i in 0..self.weights.len() {
            let biased = add_bias(&self.signals[i]);
            let z = biased.dot(&self.weights[i]);
            self.signals[i + 1] = sigmoid(&z);
        }
    }

    /// One gradient-descent step against `target`, updating every weight
    /// matrix in place. Walks layers output to input; the error is pushed
    /// back through the freshly updated weights of each layer.
    ///
    /// Must be preceded by a `forward_propagate` call on the matching input
    /// batch — the stored signals are the only state the backward pass reads.
    pub fn back_propagate(&mut self, target: ArrayView2<f64>, alpha: f64) {
        let m = target.nrows() as f64;
        let mut out = self.signals[self.weights.len()].clone();
        let mut err = &out - &target;

        for i in (0..self.weights.len()).rev() {
            let biased_in = add_bias(&self.signals[i]);
            // δ = σ'(out) ⊙ err, shape (batch, n_out); gradient averaged over
            // the batch, negated and scaled by the learning rate
            let dact = sigmoid_prime(&out) * &err;
            let grad = (dact.t().dot(&biased_in) * (-alpha / m)).reversed_axes();
            self.weights[i] += &grad;

            // Error for the layer below, through the updated weights; the
            // matmul reintroduces a bias column at index 0 — drop it.
            let propagated = dact.dot(&self.weights[i].t());
            err = propagated.slice(s![.., 1..]).to_owned();
            out = self.signals[i].clone();
        }
    }

    /// Forward-propagates `input` and returns an independent copy of the
    /// output, which survives later forward passes.
    pub fn predict(&mut self, input: ArrayView2<f64>) -> Array2<f64> {
        self.forward_propagate(input);
        self.signals[self.signals.len() - 1].clone()
    }
}

/// Zero-row placeholder per layer; every forward pass rebinds them.
fn empty_signals(layer_sizes: &[usize]) -> Vec<Array2<f64>> {
    layer_sizes
        .iter()
        .map(|&size| Array2::zeros((0, size)))
        .collect()
}
