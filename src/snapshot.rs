/// Snapshot payload types for the monitor backend
///
/// These types match the JSON document served at `GET /api/state`. The
/// backend makes no guarantees about field presence, so every field is
/// optional or defaulted and a partial payload must still decode. Numeric
/// fields additionally tolerate being sent as strings or null.
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

/// Top-level dashboard state, received wholesale on every poll.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StateSnapshot {
    pub portfolio: Portfolio,
    pub market: MarketSnapshot,
    pub sentiment: SentimentSummary,
    /// Trading decisions, newest first.
    pub decisions: Vec<Decision>,
    /// Decision counts keyed by action ("buy" / "sell" / "hold").
    pub decision_summary: HashMap<String, u64>,
    /// News articles, newest first.
    pub news: Vec<NewsArticle>,
    /// When the backend last completed an agent cycle (RFC 3339).
    pub last_updated: Option<String>,
}

/// Portfolio valuation and holdings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Portfolio {
    /// Quote currency for valuation (e.g. "KRW").
    pub base_currency: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub total_value: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub cash: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub positions_count: Option<f64>,
    /// Per-currency balances; cash + totalValue already summarise these.
    pub balances: Vec<Balance>,
    pub positions: Vec<Position>,
    /// Trade history, pre-sorted newest-first by the backend.
    pub history: Vec<HistoryRecord>,
}

impl Default for Portfolio {
    fn default() -> Self {
        Self {
            base_currency: DEFAULT_CURRENCY.to_string(),
            total_value: None,
            cash: None,
            positions_count: None,
            balances: Vec::new(),
            positions: Vec::new(),
            history: Vec::new(),
        }
    }
}

/// Fallback quote currency when the payload omits one.
pub const DEFAULT_CURRENCY: &str = "KRW";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Balance {
    pub currency: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub amount: Option<f64>,
}

/// A single open holding.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Position {
    pub symbol: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub quantity: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub average_price: Option<f64>,
    /// Latest market price, absent when the ticker was unavailable.
    #[serde(deserialize_with = "lenient_f64")]
    pub current_price: Option<f64>,
    /// quantity * currentPrice, absent when the price was.
    #[serde(deserialize_with = "lenient_f64")]
    pub current_value: Option<f64>,
}

/// One executed (or explicitly held) trade.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistoryRecord {
    pub timestamp: Option<String>,
    pub symbol: String,
    /// "buy" / "sell" / "hold"; unrecognised values display verbatim.
    pub action: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub quantity: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub price: Option<f64>,
    pub reasoning: String,
}

/// Ticker table as of one market-data cycle.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarketSnapshot {
    pub timestamp: Option<String>,
    pub items: Vec<MarketItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarketItem {
    pub symbol: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub price: Option<f64>,
    /// Quote currency of the price; falls back to the portfolio's.
    pub base_currency: Option<String>,
    /// 24h change in percentage points, negative for a fall.
    #[serde(rename = "change24h", deserialize_with = "lenient_f64")]
    pub change_24h: Option<f64>,
    #[serde(rename = "high24h", deserialize_with = "lenient_f64")]
    pub high_24h: Option<f64>,
    #[serde(rename = "low24h", deserialize_with = "lenient_f64")]
    pub low_24h: Option<f64>,
    #[serde(rename = "volume24h", deserialize_with = "lenient_f64")]
    pub volume_24h: Option<f64>,
}

/// One strategy-agent decision.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Decision {
    pub symbol: String,
    pub action: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub price: Option<f64>,
    /// Confidence as a 0..=1 fraction.
    #[serde(deserialize_with = "lenient_f64")]
    pub confidence: Option<f64>,
    pub reasoning: String,
    pub created_at: Option<String>,
}

/// Aggregate article sentiment across the latest news cycle.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SentimentSummary {
    #[serde(deserialize_with = "lenient_f64")]
    pub average_score: Option<f64>,
    pub summary: SentimentCounts,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SentimentCounts {
    pub positive: u64,
    pub neutral: u64,
    pub negative: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewsArticle {
    pub title: String,
    pub url: String,
    pub source: String,
    pub published_at: Option<String>,
    pub summary: Option<String>,
    pub sentiment: Option<ArticleSentiment>,
    /// Symbols the article mentions, rendered as tags.
    pub symbols: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArticleSentiment {
    /// "positive" / "negative" / "neutral".
    pub label: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub score: Option<f64>,
    pub reasoning: Option<String>,
}

/// Accept a JSON number, a numeric string, or null; anything else (and any
/// string that does not parse) decodes as absent instead of failing the
/// whole snapshot.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Text(String),
        Other(serde_json::Value),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Num(value)) => Some(value),
        Some(Raw::Text(text)) => text.trim().parse::<f64>().ok(),
        Some(Raw::Other(_)) | None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_payload_decodes_with_defaults() {
        let snapshot: StateSnapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(snapshot.portfolio.base_currency, "KRW");
        assert!(snapshot.portfolio.positions.is_empty());
        assert!(snapshot.decisions.is_empty());
        assert!(snapshot.news.is_empty());
        assert!(snapshot.last_updated.is_none());
    }

    #[test]
    fn test_numeric_fields_accept_strings_and_null() {
        let json = r#"{
            "portfolio": {
                "totalValue": "1500000.5",
                "cash": null,
                "positions": [
                    {"symbol": "BTC", "quantity": "0.5", "currentValue": "not a number"}
                ]
            }
        }"#;
        let snapshot: StateSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.portfolio.total_value, Some(1_500_000.5));
        assert_eq!(snapshot.portfolio.cash, None);
        let position = &snapshot.portfolio.positions[0];
        assert_eq!(position.quantity, Some(0.5));
        assert_eq!(position.current_value, None);
    }

    #[test]
    fn test_unknown_fields_are_tolerated() {
        let json = r#"{
            "metadata": {"cycle": 7},
            "trackedSymbols": ["BTC", "ETH"],
            "sentiment": {"averageScore": 0.25, "summary": {"positive": 3}, "items": []}
        }"#;
        let snapshot: StateSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.sentiment.average_score, Some(0.25));
        assert_eq!(snapshot.sentiment.summary.positive, 3);
        assert_eq!(snapshot.sentiment.summary.neutral, 0);
    }

    #[test]
    fn test_market_item_camel_case_fields() {
        let json = r#"{
            "market": {
                "timestamp": "2025-01-01T00:00:00+00:00",
                "items": [
                    {"symbol": "BTC", "price": 1000.0, "change24h": -2.5, "volume24h": 12.0}
                ]
            }
        }"#;
        let snapshot: StateSnapshot = serde_json::from_str(json).unwrap();
        let item = &snapshot.market.items[0];
        assert_eq!(item.change_24h, Some(-2.5));
        assert_eq!(item.volume_24h, Some(12.0));
        assert_eq!(item.high_24h, None);
    }
}
