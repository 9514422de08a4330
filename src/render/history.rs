//! Trade history table panel.

use super::{action_cell, EMPTY_HISTORY, HISTORY_ROW_CAP};
use crate::format::Formatters;
use crate::snapshot::HistoryRecord;
use crate::view::{HistoryRow, HistoryView, Rows};

/// Render the most recent trades. The backend serves history newest-first,
/// so the first [`HISTORY_ROW_CAP`] records are taken as-is without
/// re-sorting.
pub fn render_history(history: &[HistoryRecord], fmt: &mut Formatters) -> HistoryView {
    let rows: Vec<HistoryRow> = history
        .iter()
        .take(HISTORY_ROW_CAP)
        .map(|record| HistoryRow {
            timestamp: fmt.timestamp_or_dash(record.timestamp.as_deref()),
            symbol: record.symbol.clone(),
            action: action_cell(&record.action),
            quantity: fmt.quantity(record.quantity),
            price: fmt.currency(record.price, None),
            reasoning: record.reasoning.clone(),
        })
        .collect();

    HistoryView {
        rows: Rows::from_vec(rows, EMPTY_HISTORY),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Tone;

    fn record(symbol: &str, action: &str) -> HistoryRecord {
        HistoryRecord {
            timestamp: Some("2025-06-01T09:30:00+00:00".to_string()),
            symbol: symbol.to_string(),
            action: action.to_string(),
            quantity: Some(0.5),
            price: Some(45_000_000.0),
            reasoning: "momentum entry".to_string(),
        }
    }

    #[test]
    fn test_clips_to_twelve_rows_preserving_order() {
        let history: Vec<_> = (0..20).map(|n| record(&format!("SYM{n}"), "buy")).collect();
        let mut fmt = Formatters::new("KRW");
        let view = render_history(&history, &mut fmt);
        let Rows::Filled(rows) = view.rows else {
            panic!("expected filled rows");
        };
        assert_eq!(rows.len(), HISTORY_ROW_CAP);
        assert_eq!(rows[0].symbol, "SYM0");
        assert_eq!(rows[11].symbol, "SYM11");
    }

    #[test]
    fn test_actions_translate_with_tone() {
        let history = vec![record("BTC", "buy"), record("ETH", "sell"), record("XRP", "hold")];
        let mut fmt = Formatters::new("KRW");
        let view = render_history(&history, &mut fmt);
        let Rows::Filled(rows) = view.rows else {
            panic!("expected filled rows");
        };
        assert_eq!(rows[0].action.text, "Buy");
        assert_eq!(rows[0].action.tone, Tone::Positive);
        assert_eq!(rows[1].action.text, "Sell");
        assert_eq!(rows[1].action.tone, Tone::Negative);
        assert_eq!(rows[2].action.text, "Hold");
        assert_eq!(rows[2].action.tone, Tone::Muted);
    }

    #[test]
    fn test_empty_history_renders_placeholder_row() {
        let mut fmt = Formatters::new("KRW");
        let view = render_history(&[], &mut fmt);
        assert_eq!(view.rows, Rows::Placeholder(EMPTY_HISTORY));
    }

    #[test]
    fn test_rendering_twice_yields_identical_views() {
        let history = vec![record("BTC", "buy")];
        let mut fmt = Formatters::new("KRW");
        let first = render_history(&history, &mut fmt);
        let second = render_history(&history, &mut fmt);
        assert_eq!(first, second);
    }
}
