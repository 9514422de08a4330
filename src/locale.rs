//! Display strings for the closed enums carried in the snapshot payload.
//!
//! Lookup tables rather than match arms so every entry (including the
//! fallback) is visible in one place.

/// Trade action translations, in the canonical buy/sell/hold display order.
pub const ACTION_LABELS: [(&str, &str); 3] = [("buy", "Buy"), ("sell", "Sell"), ("hold", "Hold")];

/// Sentiment label translations. Unrecognised labels fall back to neutral.
pub const SENTIMENT_LABELS: [(&str, &str); 3] = [
    ("positive", "Positive"),
    ("neutral", "Neutral"),
    ("negative", "Negative"),
];

/// Translate a trade action token. Unrecognised actions pass through
/// verbatim so a new backend action still displays something sensible.
pub fn translate_action(action: &str) -> String {
    ACTION_LABELS
        .iter()
        .find(|(token, _)| token.eq_ignore_ascii_case(action))
        .map(|(_, label)| (*label).to_string())
        .unwrap_or_else(|| action.to_string())
}

/// Translate a sentiment label token, defaulting to the neutral label.
pub fn translate_sentiment(label: &str) -> &'static str {
    SENTIMENT_LABELS
        .iter()
        .find(|(token, _)| token.eq_ignore_ascii_case(label))
        .map(|(_, label)| *label)
        .unwrap_or("Neutral")
}
