//! Review submission and listing use cases

use crate::domain::{classify, Review, ReviewText, Sentiment, SentimentStats};
use crate::error::Result;
use crate::infrastructure::ReviewRepository;
use chrono::Utc;

/// Classifies and stores reviews. Holds no state besides its repository,
/// so a shared instance may serve concurrent callers.
pub struct ReviewService<R> {
    repository: R,
}

impl<R: ReviewRepository> ReviewService<R> {
    pub fn new(repository: R) -> Self {
        ReviewService { repository }
    }

    /// Classify `text`, stamp it with the current UTC time and store it
    pub fn create(&self, text: &str) -> Result<Review> {
        let text = ReviewText::parse(text)?;
        let sentiment = classify(text.as_str());
        let created_at = Utc::now();

        log::debug!("Classified review as {}", sentiment);
        let review = self
            .repository
            .insert(text.as_str(), sentiment, created_at)?;
        log::info!("Created review {} ({})", review.id, review.sentiment);

        Ok(review)
    }

    pub fn list_by_sentiment(&self, sentiment: Sentiment) -> Result<Vec<Review>> {
        self.repository.list_by_sentiment(sentiment)
    }

    pub fn stats(&self) -> Result<SentimentStats> {
        self.repository.stats()
    }
}
