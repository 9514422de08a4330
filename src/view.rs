//! View-tree types produced by the panel renderers.
//!
//! Renderers are pure functions from a snapshot slice to these structs; the
//! composition step in `ui` turns them into ratatui widgets. Keeping ratatui
//! out of this layer lets every renderer be asserted on directly in tests.

/// Visual emphasis of a cell, mapped to a color by the composition step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Normal,
    /// Gains, buys, positive sentiment.
    Positive,
    /// Losses, sells, negative sentiment.
    Negative,
    /// Secondary detail (timestamps, reasoning).
    Muted,
    /// Symbols and headings.
    Accent,
}

/// One rendered value plus its emphasis.
#[derive(Debug, Clone, PartialEq)]
pub struct CellView {
    pub text: String,
    pub tone: Tone,
}

impl CellView {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Normal)
    }
}

/// Panel body: either real rows or a single defined placeholder row. The
/// placeholder is an explicit value, never just an empty list, so "no data"
/// renders the same message every pass.
#[derive(Debug, Clone, PartialEq)]
pub enum Rows<T> {
    Filled(Vec<T>),
    Placeholder(&'static str),
}

impl<T> Rows<T> {
    pub fn from_vec(rows: Vec<T>, placeholder: &'static str) -> Self {
        if rows.is_empty() {
            Rows::Placeholder(placeholder)
        } else {
            Rows::Filled(rows)
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Rows::Filled(rows) => rows.len(),
            Rows::Placeholder(_) => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Labeled portfolio and sentiment totals.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryView {
    pub total_value: String,
    pub cash: String,
    pub positions_count: String,
    pub base_currency: String,
    pub sentiment_score: CellView,
    pub sentiment_positive: String,
    pub sentiment_neutral: String,
    pub sentiment_negative: String,
}

/// Market table, rows sorted ascending by symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketView {
    /// Formatted market-cycle timestamp for the panel title.
    pub updated_at: String,
    pub rows: Rows<MarketRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarketRow {
    pub symbol: String,
    pub price: String,
    pub change: CellView,
    pub high: String,
    pub low: String,
    pub volume: String,
}

/// Open positions, sorted by current value descending.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionsView {
    pub rows: Rows<PositionRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PositionRow {
    pub symbol: String,
    pub quantity: String,
    pub average_price: String,
    pub current_price: String,
    pub current_value: String,
}

/// Most recent trades, clipped upstream order preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryView {
    pub rows: Rows<HistoryRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub timestamp: String,
    pub symbol: String,
    pub action: CellView,
    pub quantity: String,
    pub price: String,
    pub reasoning: String,
}

/// Strategy decisions list with its per-action summary header.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionsView {
    /// Full input length, shown next to the panel title.
    pub count_label: String,
    /// Non-zero per-action totals in buy/sell/hold order, absent when the
    /// summary is empty.
    pub header: Option<String>,
    pub items: Rows<DecisionItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DecisionItem {
    pub symbol: String,
    pub created_at: String,
    pub action: CellView,
    pub price: String,
    /// Whole-percent confidence, e.g. "73%".
    pub confidence: String,
    pub reasoning: String,
}

/// News feed with the unclipped article count.
#[derive(Debug, Clone, PartialEq)]
pub struct NewsView {
    /// Always reflects the full input length, even when cards are clipped.
    pub count_label: String,
    pub cards: Rows<NewsCard>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewsCard {
    pub title: String,
    pub url: String,
    /// "source · published" line.
    pub byline: String,
    pub summary: String,
    pub sentiment: Option<SentimentChip>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SentimentChip {
    pub label: CellView,
    /// Signed 2-decimal score, e.g. "+0.42".
    pub score: String,
    pub reasoning: Option<String>,
}
