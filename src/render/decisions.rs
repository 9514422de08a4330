//! Strategy decisions list panel.

use super::{action_cell, EMPTY_DECISIONS};
use crate::format::{Formatters, PLACEHOLDER};
use crate::locale::ACTION_LABELS;
use crate::snapshot::Decision;
use crate::view::{DecisionItem, DecisionsView, Rows};
use itertools::Itertools;
use std::collections::HashMap;

/// Render the decisions list. The header line summarises the backend's
/// per-action totals, keeping only non-zero categories in buy/sell/hold
/// order; the count label carries the full list length.
pub fn render_decisions(
    decisions: &[Decision],
    summary: &HashMap<String, u64>,
    fmt: &mut Formatters,
) -> DecisionsView {
    let header = ACTION_LABELS
        .iter()
        .filter_map(|(token, label)| {
            let count = summary.get(*token).copied().unwrap_or(0);
            (count > 0).then(|| format!("{label} {count}"))
        })
        .join(" · ");

    let items: Vec<DecisionItem> = decisions
        .iter()
        .map(|decision| DecisionItem {
            symbol: decision.symbol.clone(),
            created_at: fmt.timestamp_or_dash(decision.created_at.as_deref()),
            action: action_cell(&decision.action),
            price: fmt.currency(decision.price, None),
            confidence: confidence_percent(decision.confidence),
            reasoning: decision.reasoning.clone(),
        })
        .collect();

    DecisionsView {
        count_label: decisions.len().to_string(),
        header: (!header.is_empty()).then_some(header),
        items: Rows::from_vec(items, EMPTY_DECISIONS),
    }
}

/// 0..=1 confidence fraction as a rounded whole-number percentage.
fn confidence_percent(confidence: Option<f64>) -> String {
    match confidence.filter(|value| value.is_finite()) {
        Some(value) => format!("{:.0}%", value * 100.0),
        None => PLACEHOLDER.to_string(),
    }
}
