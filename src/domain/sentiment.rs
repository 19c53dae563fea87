//! Sentiment labels

use crate::error::ReviewError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed classification of a review's tone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Neutral,
    Positive,
    Negative,
}

/// Filter used when a listing does not name a sentiment
pub const DEFAULT_SENTIMENT_FILTER: Sentiment = Sentiment::Negative;

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Neutral, Sentiment::Positive, Sentiment::Negative];

    /// Canonical lowercase label, as stored and printed
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Neutral => "neutral",
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
        }
    }
}

/// Per-sentiment review totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SentimentStats {
    pub neutral: u64,
    pub positive: u64,
    pub negative: u64,
}

impl SentimentStats {
    pub fn get(&self, sentiment: Sentiment) -> u64 {
        match sentiment {
            Sentiment::Neutral => self.neutral,
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
        }
    }

    pub fn set(&mut self, sentiment: Sentiment, count: u64) {
        match sentiment {
            Sentiment::Neutral => self.neutral = count,
            Sentiment::Positive => self.positive = count,
            Sentiment::Negative => self.negative = count,
        }
    }

    pub fn total(&self) -> u64 {
        self.neutral + self.positive + self.negative
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = ReviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "neutral" => Ok(Sentiment::Neutral),
            "positive" => Ok(Sentiment::Positive),
            "negative" => Ok(Sentiment::Negative),
            _ => Err(ReviewError::Validation(format!(
                "Invalid sentiment: '{}'. Valid values are: neutral, positive, negative",
                s
            ))),
        }
    }
}
