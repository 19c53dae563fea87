//! Domain layer - Review model and classification rules

pub mod classifier;
pub mod review;
pub mod sentiment;

pub use classifier::classify;
pub use review::{Review, ReviewText};
pub use sentiment::{Sentiment, SentimentStats, DEFAULT_SENTIMENT_FILTER};
