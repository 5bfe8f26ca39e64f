pub mod math;
pub mod activation;
pub mod network;
pub mod loss;
pub mod train;

// Convenience re-exports
pub use math::tensor::add_bias;
pub use activation::sigmoid::{sigmoid, sigmoid_prime};
pub use network::network::Network;
pub use network::spec::NetworkSpec;
pub use loss::rss::RssLoss;
pub use train::epoch_stats::EpochStats;
pub use train::options::TrainOptions;
pub use train::loop_fn::train;
