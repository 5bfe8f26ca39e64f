pub mod rss;

pub use rss::RssLoss;
