use movie_sentiment::core::models::{Confidence, Sentiment};
use movie_sentiment::errors::AnalysisError;
use movie_sentiment::scoring::{
    ConfidenceThresholds, KeywordStrategy, LexiconStrategy, PolarityStrategy, SentimentScorer,
    StrategyKind,
};

const REVIEWS: &[&str] = &[
    "This movie was amazing and wonderful",
    "terrible boring waste of time",
    "It was fine I guess",
    "Not bad at all, the cast was really good and the score was beautiful",
    "I didn't like it. The plot was predictable and the pacing slow.",
    "An absolute masterpiece, the best film of the year",
    "Worst. Movie. Ever. Awful acting and a stupid script.",
    "The film is two hours long",
    "good bad good bad good bad",
    "fun",
    "!!!???",
    "very very very good",
];

fn scorers() -> Vec<SentimentScorer> {
    vec![
        SentimentScorer::for_kind(StrategyKind::Lexicon),
        SentimentScorer::for_kind(StrategyKind::Keyword),
    ]
}

#[test]
fn test_rating_stays_within_sentiment_band() {
    for scorer in scorers() {
        for review in REVIEWS {
            let result = scorer.analyze(review);
            let (low, high) = result.sentiment.rating_range();
            assert!(
                (low..=high).contains(&result.rating),
                "{}: rating {} outside {:?} for {:?}",
                scorer.strategy_name(),
                result.rating,
                (low, high),
                review
            );
        }
    }
}

#[test]
fn test_score_and_rating_bounds() {
    for scorer in scorers() {
        for review in REVIEWS {
            let result = scorer.analyze(review);
            assert!((-1.0..=1.0).contains(&result.score), "score {}", result.score);
            assert!((1.0..=5.0).contains(&result.rating), "rating {}", result.rating);
            // One decimal place
            assert!(((result.rating * 10.0).round() - result.rating * 10.0).abs() < 1e-9);
            assert!(result.error.is_none());
        }
    }
}

#[test]
fn test_keyword_positive_example() {
    let scorer = SentimentScorer::for_kind(StrategyKind::Keyword);
    let result = scorer.analyze("This movie was amazing and wonderful");
    assert_eq!(result.sentiment, Sentiment::Positive);
    assert!((4.0..=5.0).contains(&result.rating));
    assert_eq!(result.confidence, Confidence::High);
}

#[test]
fn test_negative_example_with_both_strategies() {
    for scorer in scorers() {
        let result = scorer.analyze("terrible boring waste of time");
        assert_eq!(result.sentiment, Sentiment::Negative, "{}", scorer.strategy_name());
        assert!((1.0..=2.0).contains(&result.rating));
    }
}

#[test]
fn test_lexicon_positive_example() {
    let scorer = SentimentScorer::for_kind(StrategyKind::Lexicon);
    let result = scorer.analyze("This movie was amazing and wonderful");
    assert_eq!(result.sentiment, Sentiment::Positive);
    assert!((4.0..=5.0).contains(&result.rating));
    assert_eq!(result.confidence, Confidence::High);
}

#[test]
fn test_lexicon_covers_everyday_review_vocabulary() {
    let scorer = SentimentScorer::for_kind(StrategyKind::Lexicon);
    let cases = [
        ("The acting was dreadful and the plot incoherent", Sentiment::Negative),
        ("Such a dumb, ugly movie", Sentiment::Negative),
        ("A lovely, heartfelt film", Sentiment::Positive),
        ("A fascinating and moving story", Sentiment::Positive),
    ];

    for (review, expected) in cases {
        let result = scorer.analyze(review);
        assert_eq!(result.sentiment, expected, "{review:?} scored {}", result.score);
        let (low, high) = expected.rating_range();
        assert!((low..=high).contains(&result.rating));
    }
}

#[test]
fn test_neutral_text_without_sentiment_words() {
    for scorer in scorers() {
        let result = scorer.analyze("The film is two hours long");
        assert_eq!(result.sentiment, Sentiment::Neutral);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.rating, 3.0);
        assert_eq!(result.confidence, Confidence::Low);
    }
}

#[test]
fn test_identical_input_yields_identical_result() {
    for scorer in scorers() {
        for review in REVIEWS {
            assert_eq!(scorer.analyze(review), scorer.analyze(review));
        }
    }
}

#[test]
fn test_thresholds_are_attached_to_strategy() {
    assert_eq!(
        LexiconStrategy::default().thresholds(),
        ConfidenceThresholds::LEXICON
    );
    assert_eq!(
        KeywordStrategy::default().thresholds(),
        ConfidenceThresholds::KEYWORD
    );

    // 0.25 sits between the two tables
    assert_eq!(ConfidenceThresholds::LEXICON.classify(0.25), Confidence::Medium);
    assert_eq!(ConfidenceThresholds::KEYWORD.classify(-0.25), Confidence::Medium);
    assert_eq!(ConfidenceThresholds::KEYWORD.classify(0.31), Confidence::High);
    assert_eq!(ConfidenceThresholds::LEXICON.classify(0.2), Confidence::Low);
}

#[test]
fn test_confidence_is_monotonic_in_magnitude() {
    for thresholds in [ConfidenceThresholds::LEXICON, ConfidenceThresholds::KEYWORD] {
        let mut previous = Confidence::Low;
        for step in 0..=100 {
            let polarity = f64::from(step) / 100.0;
            let current = thresholds.classify(polarity);
            assert!(current >= previous);
            assert_eq!(current, thresholds.classify(-polarity));
            previous = current;
        }
    }
}

struct BrokenBackend;

impl PolarityStrategy for BrokenBackend {
    fn name(&self) -> &'static str {
        "broken"
    }

    fn thresholds(&self) -> ConfidenceThresholds {
        ConfidenceThresholds::LEXICON
    }

    fn score(&self, _text: &str) -> Result<f64, AnalysisError> {
        Err(AnalysisError::ScoringFailure("corpus not loaded".to_string()))
    }
}

#[test]
fn test_backend_failure_returns_neutral_fallback() {
    let scorer = SentimentScorer::new(Box::new(BrokenBackend));
    let result = scorer.analyze("This movie was amazing and wonderful");

    assert_eq!(result.sentiment, Sentiment::Neutral);
    assert_eq!(result.score, 0.0);
    assert_eq!(result.confidence, Confidence::Low);
    assert_eq!(result.rating, 3.0);
    assert!(result.error.unwrap().contains("corpus not loaded"));
}

#[test]
fn test_fallback_error_is_serialized_only_when_present() {
    let ok = SentimentScorer::for_kind(StrategyKind::Lexicon).analyze("good");
    let json = serde_json::to_value(&ok).unwrap();
    assert!(json.get("error").is_none());
    assert_eq!(json["sentiment"], "positive");
    assert!(json["confidence"].is_string());

    let failed = SentimentScorer::new(Box::new(BrokenBackend)).analyze("good");
    let json = serde_json::to_value(&failed).unwrap();
    assert!(json["error"].is_string());
}
