//! Open positions table panel.

use super::EMPTY_POSITIONS;
use crate::format::Formatters;
use crate::snapshot::Position;
use crate::view::{PositionRow, PositionsView, Rows};

/// Render open positions: entries with quantity <= 0 are dropped, the rest
/// sort by current value descending. A position whose current value is
/// absent sorts as 0 but still renders the placeholder in its value cell.
pub fn render_positions(positions: &[Position], fmt: &mut Formatters) -> PositionsView {
    let mut open: Vec<_> = positions
        .iter()
        .filter(|position| position.quantity.unwrap_or(0.0) > 0.0)
        .collect();
    open.sort_by(|a, b| sort_value(b).total_cmp(&sort_value(a)));

    let rows: Vec<PositionRow> = open
        .into_iter()
        .map(|position| PositionRow {
            symbol: position.symbol.clone(),
            quantity: fmt.quantity(position.quantity),
            average_price: fmt.currency(position.average_price, None),
            current_price: fmt.currency(position.current_price, None),
            current_value: fmt.currency(position.current_value, None),
        })
        .collect();

    PositionsView {
        rows: Rows::from_vec(rows, EMPTY_POSITIONS),
    }
}

fn sort_value(position: &Position) -> f64 {
    position
        .current_value
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(symbol: &str, quantity: f64, current_value: Option<f64>) -> Position {
        Position {
            symbol: symbol.to_string(),
            quantity: Some(quantity),
            current_value,
            ..Default::default()
        }
    }

    #[test]
    fn test_non_positive_quantities_are_filtered_out() {
        let positions = vec![
            position("BTC", 0.5, Some(45_000_000.0)),
            position("ETH", 0.0, Some(1_000_000.0)),
            position("XRP", -1.0, Some(500.0)),
        ];
        let mut fmt = Formatters::new("KRW");
        let view = render_positions(&positions, &mut fmt);
        let Rows::Filled(rows) = view.rows else {
            panic!("expected filled rows");
        };
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].symbol, "BTC");
    }

    #[test]
    fn test_rows_sort_by_current_value_descending() {
        let positions = vec![
            position("ADA", 100.0, Some(50_000.0)),
            position("BTC", 0.5, Some(45_000_000.0)),
            position("SOL", 2.0, None),
            position("ETH", 1.0, Some(4_800_000.0)),
        ];
        let mut fmt = Formatters::new("KRW");
        let view = render_positions(&positions, &mut fmt);
        let Rows::Filled(rows) = view.rows else {
            panic!("expected filled rows");
        };
        let symbols: Vec<_> = rows.iter().map(|row| row.symbol.as_str()).collect();
        // Missing current value sorts as zero, so SOL lands last.
        assert_eq!(symbols, vec!["BTC", "ETH", "ADA", "SOL"]);
        assert_eq!(rows[3].current_value, "-");
    }

    #[test]
    fn test_absent_quantity_counts_as_closed() {
        let positions = vec![Position {
            symbol: "BTC".to_string(),
            ..Default::default()
        }];
        let mut fmt = Formatters::new("KRW");
        let view = render_positions(&positions, &mut fmt);
        assert_eq!(view.rows, Rows::Placeholder(EMPTY_POSITIONS));
    }

    #[test]
    fn test_empty_input_renders_placeholder_row() {
        let mut fmt = Formatters::new("KRW");
        let view = render_positions(&[], &mut fmt);
        assert_eq!(view.rows, Rows::Placeholder(EMPTY_POSITIONS));
    }
}
