//! Review entity and its input validation

use crate::domain::Sentiment;
use crate::error::{Result, ReviewError};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A persisted review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub text: String,
    pub sentiment: Sentiment,
    #[serde(with = "stored_timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Review text that passed the non-blank check, kept byte-for-byte as submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewText(String);

impl ReviewText {
    pub fn parse(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(ReviewError::Validation(
                "Review text must not be empty".to_string(),
            ));
        }
        Ok(ReviewText(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Format a creation time the way it is stored: RFC 3339, `+00:00` offset,
/// sub-second digits kept so the value reads back unchanged.
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::AutoSi, false)
}

/// Parse a stored creation time
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|at| at.with_timezone(&Utc))
        .map_err(|e| ReviewError::Persistence(format!("Invalid created_at '{}': {}", raw, e)))
}

/// Serde adapter writing `created_at` in the stored format
mod stored_timestamp {
    use super::{format_timestamp, parse_timestamp};
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_timestamp(at))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}
