//! Portfolio and sentiment totals panel.

use super::{sign_tone, signed_score};
use crate::format::Formatters;
use crate::snapshot::{Portfolio, SentimentSummary};
use crate::view::{CellView, SummaryView};

/// Project portfolio totals and the sentiment aggregate into labeled
/// fields. No sorting or filtering happens here.
pub fn render_summary(
    portfolio: &Portfolio,
    sentiment: &SentimentSummary,
    fmt: &mut Formatters,
) -> SummaryView {
    let base = portfolio.base_currency.clone();
    SummaryView {
        total_value: fmt.currency(portfolio.total_value, Some(&base)),
        cash: fmt.currency(portfolio.cash, Some(&base)),
        positions_count: fmt.number(portfolio.positions_count),
        base_currency: base,
        sentiment_score: CellView::new(
            signed_score(sentiment.average_score),
            sign_tone(sentiment.average_score),
        ),
        sentiment_positive: fmt.number(Some(sentiment.summary.positive as f64)),
        sentiment_neutral: fmt.number(Some(sentiment.summary.neutral as f64)),
        sentiment_negative: fmt.number(Some(sentiment.summary.negative as f64)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::SentimentCounts;
    use crate::view::Tone;

    #[test]
    fn test_summary_formats_totals_in_base_currency() {
        let portfolio = Portfolio {
            base_currency: "KRW".to_string(),
            total_value: Some(1_500_000.0),
            cash: Some(250_000.25),
            positions_count: Some(3.0),
            ..Default::default()
        };
        let sentiment = SentimentSummary {
            average_score: Some(0.42),
            summary: SentimentCounts {
                positive: 5,
                neutral: 2,
                negative: 1,
            },
        };
        let mut fmt = Formatters::new("KRW");

        let view = render_summary(&portfolio, &sentiment, &mut fmt);
        assert_eq!(view.total_value, "₩1,500,000");
        assert_eq!(view.cash, "₩250,000");
        assert_eq!(view.positions_count, "3");
        assert_eq!(view.sentiment_score.text, "+0.42");
        assert_eq!(view.sentiment_score.tone, Tone::Positive);
        assert_eq!(view.sentiment_positive, "5");
    }

    #[test]
    fn test_summary_is_total_on_an_empty_slice() {
        let mut fmt = Formatters::new("KRW");
        let view = render_summary(&Portfolio::default(), &SentimentSummary::default(), &mut fmt);
        assert_eq!(view.total_value, "-");
        assert_eq!(view.cash, "-");
        assert_eq!(view.sentiment_score.text, "-");
        assert_eq!(view.sentiment_score.tone, Tone::Normal);
    }
}
