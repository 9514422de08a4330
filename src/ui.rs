//! Composition step: view trees onto the terminal.
//!
//! This is the only module that touches ratatui. Each `mount_*` function
//! writes one panel's view tree into its layout region; a degenerate region
//! (zero width or height) is skipped silently so a cramped terminal never
//! errors, it just drops panels.

use crate::app::Dashboard;
use crate::status::StatusView;
use crate::view::{
    CellView, DecisionsView, HistoryView, MarketView, NewsView, PositionsView, Rows, SummaryView,
    Tone,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
    Frame,
};

const POSITIVE: Color = Color::Rgb(0, 255, 127);
const NEGATIVE: Color = Color::Rgb(255, 69, 58);
const MUTED: Color = Color::Rgb(128, 128, 150);
const ACCENT: Color = Color::Rgb(100, 200, 255);
const NORMAL: Color = Color::Rgb(200, 200, 220);
const GOLD: Color = Color::Rgb(255, 215, 0);
const PANEL_BG: Color = Color::Rgb(15, 15, 25);

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Normal => NORMAL,
        Tone::Positive => POSITIVE,
        Tone::Negative => NEGATIVE,
        Tone::Muted => MUTED,
        Tone::Accent => ACCENT,
    }
}

fn cell_span(cell: &CellView) -> Span<'_> {
    Span::styled(cell.text.as_str(), Style::default().fg(tone_color(cell.tone)))
}

/// Draw the whole dashboard for one frame.
pub fn draw(f: &mut Frame, dashboard: &Dashboard) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(f.area());

    mount_status(f, chunks[0], dashboard.status());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    let panels = dashboard.panels();

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9),
            Constraint::Min(8),
            Constraint::Length(10),
        ])
        .split(columns[0]);
    mount_summary(f, left[0], &panels.summary);
    mount_market(f, left[1], &panels.market);
    mount_positions(f, left[2], &panels.positions);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(30),
            Constraint::Min(0),
        ])
        .split(columns[1]);
    mount_history(f, right[0], &panels.history);
    mount_decisions(f, right[1], &panels.decisions);
    mount_news(f, right[2], &panels.news);
}

fn unmounted(area: Rect) -> bool {
    area.width == 0 || area.height == 0
}

fn panel_block(title: &str, detail: Option<&str>) -> Block<'static> {
    let mut spans = vec![Span::styled(
        format!(" {title} "),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )];
    if let Some(detail) = detail {
        spans.push(Span::styled(
            format!("({detail}) "),
            Style::default().fg(MUTED),
        ));
    }
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(138, 43, 226)))
        .title_top(Line::from(spans).alignment(Alignment::Center))
        .style(Style::default().bg(PANEL_BG))
}

fn mount_placeholder(f: &mut Frame, area: Rect, block: Block, text: &str) {
    let body = Paragraph::new(Text::from(vec![
        Line::from(""),
        Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
        )),
    ]))
    .block(block)
    .alignment(Alignment::Center);
    f.render_widget(body, area);
}

fn mount_status(f: &mut Frame, area: Rect, status: &StatusView) {
    if unmounted(area) {
        return;
    }
    let (symbol, color, label) = if status.is_online() {
        ("●", POSITIVE, "ONLINE")
    } else {
        ("○", NEGATIVE, "OFFLINE")
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {symbol} {label} "),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {} ", status.message), Style::default().fg(NORMAL)),
        Span::styled(
            " ◆ CRYPTO MONITOR ◆ ",
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" [Q] Quit  [R] Refresh ", Style::default().fg(MUTED)),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Rgb(138, 43, 226)))
        .style(Style::default().bg(Color::Rgb(18, 18, 28)));

    f.render_widget(
        Paragraph::new(line).block(block).alignment(Alignment::Center),
        area,
    );
}

fn mount_summary(f: &mut Frame, area: Rect, view: &SummaryView) {
    if unmounted(area) {
        return;
    }
    let label = |text: &str| Span::styled(format!("  {text:<16}"), Style::default().fg(MUTED));
    let value = |text: &str| Span::styled(text.to_string(), Style::default().fg(NORMAL));

    let lines = vec![
        Line::from(vec![label("Total value"), value(&view.total_value)]),
        Line::from(vec![label("Cash"), value(&view.cash)]),
        Line::from(vec![label("Open positions"), value(&view.positions_count)]),
        Line::from(vec![label("Base currency"), value(&view.base_currency)]),
        Line::from(vec![
            label("Sentiment"),
            cell_span(&view.sentiment_score),
            Span::styled(
                format!(
                    "   +{} ={} -{}",
                    view.sentiment_positive, view.sentiment_neutral, view.sentiment_negative
                ),
                Style::default().fg(MUTED),
            ),
        ]),
    ];

    f.render_widget(
        Paragraph::new(lines).block(panel_block("PORTFOLIO", None)),
        area,
    );
}

fn mount_market(f: &mut Frame, area: Rect, view: &MarketView) {
    if unmounted(area) {
        return;
    }
    let block = panel_block("MARKET", Some(&view.updated_at));
    let rows = match &view.rows {
        Rows::Placeholder(text) => return mount_placeholder(f, area, block, text),
        Rows::Filled(rows) => rows,
    };

    let header = ListItem::new(Line::from(Span::styled(
        format!(
            " {:<6} {:>16} {:>9} {:>14} {:>14} {:>12}",
            "SYM", "PRICE", "24H", "HIGH", "LOW", "VOLUME"
        ),
        Style::default().fg(MUTED).add_modifier(Modifier::BOLD),
    )));

    let mut items = vec![header];
    items.extend(rows.iter().map(|row| {
        ListItem::new(Line::from(vec![
            Span::styled(format!(" {:<6}", row.symbol), Style::default().fg(ACCENT)),
            Span::styled(format!(" {:>16}", row.price), Style::default().fg(NORMAL)),
            Span::styled(
                format!(" {:>9}", row.change.text),
                Style::default().fg(tone_color(row.change.tone)),
            ),
            Span::styled(format!(" {:>14}", row.high), Style::default().fg(MUTED)),
            Span::styled(format!(" {:>14}", row.low), Style::default().fg(MUTED)),
            Span::styled(format!(" {:>12}", row.volume), Style::default().fg(NORMAL)),
        ]))
    }));

    f.render_widget(List::new(items).block(block), area);
}

fn mount_positions(f: &mut Frame, area: Rect, view: &PositionsView) {
    if unmounted(area) {
        return;
    }
    let block = panel_block("POSITIONS", None);
    let rows = match &view.rows {
        Rows::Placeholder(text) => return mount_placeholder(f, area, block, text),
        Rows::Filled(rows) => rows,
    };

    let header = ListItem::new(Line::from(Span::styled(
        format!(
            " {:<6} {:>12} {:>14} {:>14} {:>16}",
            "SYM", "QTY", "AVG", "PRICE", "VALUE"
        ),
        Style::default().fg(MUTED).add_modifier(Modifier::BOLD),
    )));

    let mut items = vec![header];
    items.extend(rows.iter().map(|row| {
        ListItem::new(Line::from(vec![
            Span::styled(format!(" {:<6}", row.symbol), Style::default().fg(ACCENT)),
            Span::styled(format!(" {:>12}", row.quantity), Style::default().fg(NORMAL)),
            Span::styled(
                format!(" {:>14}", row.average_price),
                Style::default().fg(MUTED),
            ),
            Span::styled(
                format!(" {:>14}", row.current_price),
                Style::default().fg(NORMAL),
            ),
            Span::styled(
                format!(" {:>16}", row.current_value),
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            ),
        ]))
    }));

    f.render_widget(List::new(items).block(block), area);
}

fn mount_history(f: &mut Frame, area: Rect, view: &HistoryView) {
    if unmounted(area) {
        return;
    }
    let block = panel_block("TRADE HISTORY", None);
    let rows = match &view.rows {
        Rows::Placeholder(text) => return mount_placeholder(f, area, block, text),
        Rows::Filled(rows) => rows,
    };

    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!(" {} ", row.timestamp), Style::default().fg(MUTED)),
                    Span::styled(
                        format!("{:<6} ", row.symbol),
                        Style::default().fg(ACCENT),
                    ),
                    Span::styled(
                        format!("{:<5} ", row.action.text),
                        Style::default()
                            .fg(tone_color(row.action.tone))
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!("{} ", row.quantity), Style::default().fg(NORMAL)),
                    Span::styled(format!("@ {}", row.price), Style::default().fg(NORMAL)),
                ]),
                Line::from(Span::styled(
                    format!("   {}", row.reasoning),
                    Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
                )),
            ])
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

fn mount_decisions(f: &mut Frame, area: Rect, view: &DecisionsView) {
    if unmounted(area) {
        return;
    }
    let block = panel_block("DECISIONS", Some(&view.count_label));
    let items = match &view.items {
        Rows::Placeholder(text) => return mount_placeholder(f, area, block, text),
        Rows::Filled(items) => items,
    };

    let mut list_items = Vec::with_capacity(items.len() + 1);
    if let Some(header) = &view.header {
        list_items.push(ListItem::new(Line::from(Span::styled(
            format!(" {header}"),
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
        ))));
    }
    list_items.extend(items.iter().map(|item| {
        ListItem::new(vec![
            Line::from(vec![
                Span::styled(format!(" {:<6} ", item.symbol), Style::default().fg(ACCENT)),
                Span::styled(
                    format!("{:<5} ", item.action.text),
                    Style::default()
                        .fg(tone_color(item.action.tone))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("@ {} ", item.price), Style::default().fg(NORMAL)),
                Span::styled(
                    format!("conf {:>4} ", item.confidence),
                    Style::default().fg(GOLD),
                ),
                Span::styled(item.created_at.clone(), Style::default().fg(MUTED)),
            ]),
            Line::from(Span::styled(
                format!("   {}", item.reasoning),
                Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
            )),
        ])
    }));

    f.render_widget(List::new(list_items).block(block), area);
}

fn mount_news(f: &mut Frame, area: Rect, view: &NewsView) {
    if unmounted(area) {
        return;
    }
    let block = panel_block("NEWS", Some(&view.count_label));
    let cards = match &view.cards {
        Rows::Placeholder(text) => return mount_placeholder(f, area, block, text),
        Rows::Filled(cards) => cards,
    };

    let items: Vec<ListItem> = cards
        .iter()
        .map(|card| {
            let mut lines = vec![
                Line::from(Span::styled(
                    format!(" {}", card.title),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("   {}", card.url),
                    Style::default().fg(Color::Rgb(100, 149, 237)),
                )),
                Line::from(Span::styled(
                    format!("   {}", card.byline),
                    Style::default().fg(MUTED),
                )),
                Line::from(Span::styled(
                    format!("   {}", card.summary),
                    Style::default().fg(NORMAL),
                )),
            ];
            if let Some(chip) = &card.sentiment {
                let mut spans = vec![
                    Span::styled("   [", Style::default().fg(MUTED)),
                    Span::styled(
                        chip.label.text.clone(),
                        Style::default()
                            .fg(tone_color(chip.label.tone))
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!(" {}", chip.score), Style::default().fg(NORMAL)),
                    Span::styled("]", Style::default().fg(MUTED)),
                ];
                if let Some(reason) = &chip.reasoning {
                    spans.push(Span::styled(
                        format!(" {reason}"),
                        Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
                    ));
                }
                lines.push(Line::from(spans));
            }
            if !card.tags.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("   #{}", card.tags.join(" #")),
                    Style::default().fg(ACCENT),
                )));
            }
            ListItem::new(lines)
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}
