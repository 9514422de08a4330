//! News feed panel.

use super::{signed_score, EMPTY_NEWS, NEWS_ROW_CAP};
use crate::format::Formatters;
use crate::locale::translate_sentiment;
use crate::snapshot::NewsArticle;
use crate::view::{CellView, NewsCard, NewsView, Rows, SentimentChip, Tone};

const NO_SUMMARY: &str = "No summary available";

/// Render the news feed: the first [`NEWS_ROW_CAP`] articles in payload
/// order. The count label always reports the unclipped input length.
pub fn render_news(news: &[NewsArticle], fmt: &mut Formatters) -> NewsView {
    let cards: Vec<NewsCard> = news
        .iter()
        .take(NEWS_ROW_CAP)
        .map(|article| {
            let source = if article.source.is_empty() {
                "Unknown source"
            } else {
                article.source.as_str()
            };
            NewsCard {
                title: article.title.clone(),
                url: article.url.clone(),
                byline: format!(
                    "{source} · {}",
                    fmt.timestamp_or_dash(article.published_at.as_deref())
                ),
                summary: article
                    .summary
                    .as_deref()
                    .filter(|summary| !summary.trim().is_empty())
                    .unwrap_or(NO_SUMMARY)
                    .to_string(),
                sentiment: article.sentiment.as_ref().map(|sentiment| {
                    let label = translate_sentiment(&sentiment.label);
                    let tone = match label {
                        "Positive" => Tone::Positive,
                        "Negative" => Tone::Negative,
                        _ => Tone::Muted,
                    };
                    SentimentChip {
                        label: CellView::new(label, tone),
                        score: signed_score(sentiment.score),
                        reasoning: sentiment
                            .reasoning
                            .as_deref()
                            .filter(|reason| !reason.trim().is_empty())
                            .map(str::to_string),
                    }
                }),
                tags: article.symbols.clone(),
            }
        })
        .collect();

    NewsView {
        count_label: news.len().to_string(),
        cards: Rows::from_vec(cards, EMPTY_NEWS),
    }
}
