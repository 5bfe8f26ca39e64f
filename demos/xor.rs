use batchprop::{train, NetworkSpec, TrainOptions};
use ndarray::{arr2, Array2};

const XOR_PATTERNS: [([f64; 2], f64); 4] = [
    ([0.0, 0.0], 0.0),
    ([0.0, 1.0], 1.0),
    ([1.0, 0.0], 1.0),
    ([1.0, 1.0], 0.0),
];

fn main() {
    env_logger::init();

    let spec = NetworkSpec {
        name: "xor".to_string(),
        layer_sizes: vec![2, 8, 1],
        init_range: 1.0,
    };
    let mut network = spec.build();

    // The four XOR patterns tiled to 100 rows: three training batches of 25
    // plus the reserved 25-row validation batch.
    let mut input = Array2::zeros((100, 2));
    let mut target = Array2::zeros((100, 1));
    for row in 0..100 {
        let (x, y) = XOR_PATTERNS[row % 4];
        input[[row, 0]] = x[0];
        input[[row, 1]] = x[1];
        target[[row, 0]] = y;
    }

    let options = TrainOptions {
        batch_size: 25,
        max_epochs: 20000,
        alpha: 3.0,
        max_error: 0.02,
        progress_tx: None,
    };
    let error = train(&mut network, input.view(), target.view(), &options);
    println!("final validation error: {error:.6}");

    for (x, y) in &XOR_PATTERNS {
        let out = network.predict(arr2(&[*x]).view());
        println!("{:?} -> {:.4} (expected {y})", x, out[[0, 0]]);
    }
}
