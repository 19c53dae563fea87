//! Keyword-based sentiment classification

use crate::domain::Sentiment;

/// Substrings marking a positive review
pub const POSITIVE_KEYWORDS: &[&str] = &["хорош", "люблю"];

/// Substrings marking a negative review
pub const NEGATIVE_KEYWORDS: &[&str] = &["плохо", "ненавиж"];

/// Classify review text by case-insensitive keyword containment.
///
/// Positive keywords are checked first, so a text carrying both kinds of
/// marker is positive. Text with no marker at all is neutral.
pub fn classify(text: &str) -> Sentiment {
    let lowered = text.to_lowercase();

    if contains_any(&lowered, POSITIVE_KEYWORDS) {
        Sentiment::Positive
    } else if contains_any(&lowered, NEGATIVE_KEYWORDS) {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_keyword() {
        assert_eq!(classify("Я люблю этот продукт"), Sentiment::Positive);
        assert_eq!(classify("Очень хороший сервис"), Sentiment::Positive);
    }

    #[test]
    fn test_negative_keyword() {
        assert_eq!(classify("Всё было плохо"), Sentiment::Negative);
        assert_eq!(classify("Ненавижу ждать доставку"), Sentiment::Negative);
    }

    #[test]
    fn test_no_keyword_is_neutral() {
        assert_eq!(
            classify("Обычный продукт, ничего особенного"),
            Sentiment::Neutral
        );
        assert_eq!(classify("test"), Sentiment::Neutral);
        assert_eq!(classify(""), Sentiment::Neutral);
    }

    #[test]
    fn test_positive_wins_tie() {
        assert_eq!(
            classify("хорошо, но я ненавижу упаковку"),
            Sentiment::Positive
        );
        // Order inside the text does not matter
        assert_eq!(classify("плохо упаковано, но люблю вкус"), Sentiment::Positive);
    }

    #[test]
    fn test_matching_ignores_case() {
        assert_eq!(classify("ХОРОШО"), Sentiment::Positive);
        assert_eq!(classify("ПЛОХО"), Sentiment::Negative);
        assert_eq!(classify("ЛюБлЮ"), Sentiment::Positive);
    }

    #[test]
    fn test_substring_inside_word() {
        // Literal containment, negation prefixes are not understood
        assert_eq!(classify("нехорошо"), Sentiment::Positive);
        assert_eq!(classify("неплохой"), Sentiment::Negative);
    }

    #[test]
    fn test_deterministic() {
        let text = "всё плохо";
        assert_eq!(classify(text), classify(text));
    }
}
