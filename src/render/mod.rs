//! Panel renderers: pure mappings from snapshot slices to view trees.
//!
//! Each renderer is total (a partial or empty slice yields a defined
//! placeholder view) and idempotent, so the application can re-render from
//! the same snapshot and compare view trees for equality.

pub mod decisions;
pub mod history;
pub mod market;
pub mod news;
pub mod positions;
pub mod summary;

pub use decisions::render_decisions;
pub use history::render_history;
pub use market::render_market;
pub use news::render_news;
pub use positions::render_positions;
pub use summary::render_summary;

use crate::format::PLACEHOLDER;
use crate::locale::translate_action;
use crate::view::{CellView, Tone};

/// Row caps for the scrolling panels.
pub const HISTORY_ROW_CAP: usize = 12;
pub const NEWS_ROW_CAP: usize = 12;

pub const EMPTY_MARKET: &str = "No market data";
pub const EMPTY_POSITIONS: &str = "No open positions";
pub const EMPTY_HISTORY: &str = "No trades yet";
pub const EMPTY_DECISIONS: &str = "No decisions yet";
pub const EMPTY_NEWS: &str = "No news yet";

/// Tone for a signed change/score: positive green, negative red, flat or
/// absent stays unstyled.
pub(crate) fn sign_tone(value: Option<f64>) -> Tone {
    match value {
        Some(value) if value > 0.0 => Tone::Positive,
        Some(value) if value < 0.0 => Tone::Negative,
        _ => Tone::Normal,
    }
}

/// Translated action badge, toned buy-positive / sell-negative.
pub(crate) fn action_cell(action: &str) -> CellView {
    let tone = if action.eq_ignore_ascii_case("buy") {
        Tone::Positive
    } else if action.eq_ignore_ascii_case("sell") {
        Tone::Negative
    } else if action.eq_ignore_ascii_case("hold") {
        Tone::Muted
    } else {
        Tone::Normal
    };
    CellView::new(translate_action(action), tone)
}

/// Signed 2-decimal score for sentiment displays, placeholder when absent.
pub(crate) fn signed_score(value: Option<f64>) -> String {
    match value.filter(|value| value.is_finite()) {
        Some(value) => format!("{value:+.2}"),
        None => PLACEHOLDER.to_string(),
    }
}
