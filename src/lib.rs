//! reviews - Review submission service
//!
//! Accepts free-text reviews, classifies each by keyword sentiment, stores
//! it in SQLite and lists stored reviews filtered by sentiment.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::ReviewError;
