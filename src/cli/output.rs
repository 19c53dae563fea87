//! Output formatting utilities

use crate::domain::review::format_timestamp;
use crate::domain::{Review, Sentiment, SentimentStats};
use crate::error::Result;

/// Format one review as a single display line
pub fn format_review(review: &Review) -> String {
    format!(
        "#{}  {:<8}  {}  {}",
        review.id,
        review.sentiment,
        format_timestamp(&review.created_at),
        review.text
    )
}

/// Format a list of reviews for display
pub fn format_review_list(reviews: &[Review], sentiment: Sentiment) -> String {
    if reviews.is_empty() {
        return format!("No {} reviews found", sentiment);
    }

    let mut output = String::new();
    for review in reviews {
        output.push_str(&format_review(review));
        output.push('\n');
    }
    output
}

/// Format per-sentiment totals
pub fn format_stats(stats: &SentimentStats) -> String {
    let mut output = String::new();
    for sentiment in Sentiment::ALL {
        output.push_str(&format!("{:<8}  {}\n", sentiment, stats.get(sentiment)));
    }
    output.push_str(&format!("{:<8}  {}\n", "total", stats.total()));
    output
}

/// Serialize reviews (or a single review) as pretty JSON
pub fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
