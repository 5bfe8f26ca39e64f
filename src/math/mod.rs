pub mod tensor;

pub use tensor::{add_bias, uniform};
