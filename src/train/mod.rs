pub mod epoch_stats;
pub mod options;
pub mod loop_fn;

pub use epoch_stats::EpochStats;
pub use options::TrainOptions;
pub use loop_fn::train;
