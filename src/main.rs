// This binary crate is intentionally minimal.
// All training logic lives in the library (src/lib.rs and its modules).
// Run the demo with:
//   cargo run --example xor
fn main() {
    println!("batchprop: mini-batch feed-forward network training on ndarray.");
    println!("Run `cargo run --example xor` to see the XOR demo.");
}
