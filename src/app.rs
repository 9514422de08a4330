//! Dashboard state: the current status line plus the six panel views.
//!
//! Outcomes from the scheduler feed [`Dashboard::apply`]. A success
//! re-renders every panel in a fixed order; a failure only moves the status
//! line, leaving each panel at its last successfully rendered view.

use crate::fetch::FetchError;
use crate::format::Formatters;
use crate::render::{
    render_decisions, render_history, render_market, render_news, render_positions,
    render_summary,
};
use crate::scheduler::RefreshOutcome;
use crate::snapshot::{StateSnapshot, DEFAULT_CURRENCY};
use crate::status::{StatusController, StatusView};
use crate::view::{
    DecisionsView, HistoryView, MarketView, NewsView, PositionsView, SummaryView,
};
use tracing::{debug, warn};

/// The complete set of panel view trees currently on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelViews {
    pub summary: SummaryView,
    pub market: MarketView,
    pub positions: PositionsView,
    pub history: HistoryView,
    pub decisions: DecisionsView,
    pub news: NewsView,
}

/// Owns the formatter service, the status machine, and the rendered panels.
pub struct Dashboard {
    formatters: Formatters,
    status: StatusController,
    panels: PanelViews,
}

impl Dashboard {
    /// Start with every panel rendered from an empty snapshot, so the first
    /// frame shows placeholders rather than nothing.
    pub fn new() -> Self {
        let mut formatters = Formatters::new(DEFAULT_CURRENCY);
        let panels = render_all(&StateSnapshot::default(), &mut formatters);
        Self {
            formatters,
            status: StatusController::new(),
            panels,
        }
    }

    pub fn status(&self) -> &StatusView {
        self.status.current()
    }

    pub fn panels(&self) -> &PanelViews {
        &self.panels
    }

    /// Apply one refresh outcome.
    pub fn apply(&mut self, outcome: RefreshOutcome) {
        match outcome.result {
            Ok(snapshot) => {
                debug!(seq = outcome.seq, "applying snapshot");
                self.apply_snapshot(&snapshot);
            }
            Err(error) => {
                warn!(seq = outcome.seq, %error, "refresh failed, keeping last panels");
                self.status.on_failure(&error);
            }
        }
    }

    fn apply_snapshot(&mut self, snapshot: &StateSnapshot) {
        // The portfolio's base currency drives the tier policy; a change
        // invalidates the pattern cache wholesale.
        if snapshot.portfolio.base_currency != self.formatters.default_currency() {
            self.formatters = Formatters::new(snapshot.portfolio.base_currency.clone());
        }
        self.panels = render_all(snapshot, &mut self.formatters);
        let last_updated = self.formatters.timestamp(snapshot.last_updated.as_deref());
        self.status.on_success(last_updated.as_deref());
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the six panels in their fixed order: Summary, Market, Positions,
/// History, Decisions, News.
fn render_all(snapshot: &StateSnapshot, formatters: &mut Formatters) -> PanelViews {
    PanelViews {
        summary: render_summary(&snapshot.portfolio, &snapshot.sentiment, formatters),
        market: render_market(&snapshot.market, formatters),
        positions: render_positions(&snapshot.portfolio.positions, formatters),
        history: render_history(&snapshot.portfolio.history, formatters),
        decisions: render_decisions(&snapshot.decisions, &snapshot.decision_summary, formatters),
        news: render_news(&snapshot.news, formatters),
    }
}
