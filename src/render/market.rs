//! Market ticker table panel.

use super::{sign_tone, EMPTY_MARKET};
use crate::format::Formatters;
use crate::snapshot::MarketSnapshot;
use crate::view::{CellView, MarketRow, MarketView, Rows};

/// Render the market table: one row per ticker, sorted ascending by symbol
/// (case-sensitive). The 24h change cell is toned by sign; high/low render
/// the placeholder when the exchange omitted them.
pub fn render_market(market: &MarketSnapshot, fmt: &mut Formatters) -> MarketView {
    let mut items: Vec<_> = market.items.iter().collect();
    items.sort_by(|a, b| a.symbol.cmp(&b.symbol));

    let rows: Vec<MarketRow> = items
        .into_iter()
        .map(|item| {
            let code = item.base_currency.as_deref();
            MarketRow {
                symbol: item.symbol.clone(),
                price: fmt.currency(item.price, code),
                change: CellView::new(fmt.percent(item.change_24h), sign_tone(item.change_24h)),
                high: fmt.currency(item.high_24h, code),
                low: fmt.currency(item.low_24h, code),
                volume: fmt.quantity(item.volume_24h),
            }
        })
        .collect();

    MarketView {
        updated_at: fmt.timestamp_or_dash(market.timestamp.as_deref()),
        rows: Rows::from_vec(rows, EMPTY_MARKET),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::NO_TIMESTAMP;
    use crate::snapshot::MarketItem;
    use crate::view::Tone;

    fn item(symbol: &str, price: f64, change: f64) -> MarketItem {
        MarketItem {
            symbol: symbol.to_string(),
            price: Some(price),
            change_24h: Some(change),
            ..Default::default()
        }
    }

    #[test]
    fn test_rows_are_sorted_by_symbol() {
        let market = MarketSnapshot {
            timestamp: None,
            items: vec![
                item("XRP", 800.0, 1.2),
                item("BTC", 95_000_000.0, -0.5),
                item("ETH", 4_800_000.0, 3.1),
            ],
        };
        let mut fmt = Formatters::new("KRW");
        let view = render_market(&market, &mut fmt);

        let Rows::Filled(rows) = view.rows else {
            panic!("expected filled rows");
        };
        let symbols: Vec<_> = rows.iter().map(|row| row.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["BTC", "ETH", "XRP"]);
        assert_eq!(rows[0].change.tone, Tone::Negative);
        assert_eq!(rows[1].change.tone, Tone::Positive);
        assert_eq!(view.updated_at, NO_TIMESTAMP);
    }

    #[test]
    fn test_missing_high_low_render_placeholder() {
        let market = MarketSnapshot {
            timestamp: None,
            items: vec![item("BTC", 95_000_000.0, 0.0)],
        };
        let mut fmt = Formatters::new("KRW");
        let view = render_market(&market, &mut fmt);
        let Rows::Filled(rows) = view.rows else {
            panic!("expected filled rows");
        };
        assert_eq!(rows[0].high, "-");
        assert_eq!(rows[0].low, "-");
        assert_eq!(rows[0].volume, "-");
    }

    #[test]
    fn test_per_item_currency_overrides_the_default() {
        let market = MarketSnapshot {
            timestamp: None,
            items: vec![MarketItem {
                symbol: "BTC".to_string(),
                price: Some(65_000.5),
                base_currency: Some("USD".to_string()),
                ..Default::default()
            }],
        };
        let mut fmt = Formatters::new("KRW");
        let view = render_market(&market, &mut fmt);
        let Rows::Filled(rows) = view.rows else {
            panic!("expected filled rows");
        };
        assert_eq!(rows[0].price, "$65,000.50");
    }

    #[test]
    fn test_empty_market_renders_single_placeholder_row() {
        let mut fmt = Formatters::new("KRW");
        let view = render_market(&MarketSnapshot::default(), &mut fmt);
        assert_eq!(view.rows, Rows::Placeholder(EMPTY_MARKET));
    }
}
