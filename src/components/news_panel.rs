use crate::app::state::{Focus, NewsField, NewsState};
use crate::app::ui::AppLayout;
use crate::domain::models::{NewsArticle, Sentiment};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget,
        Wrap,
    },
};

pub const RETRY_HINT: &str = "Press Ctrl+S to retry";

pub struct NewsFilters<'a> {
    pub news: &'a NewsState<'a>,
    pub focus: Focus,
    pub theme: &'a Theme,
    pub layout: &'a AppLayout,
}

impl Widget for NewsFilters<'_> {
    fn render(self, _area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        for field in NewsField::ALL {
            let rect = self.layout.filter(field);
            if rect.width < 3 || rect.height < 3 {
                continue;
            }
            let focused = self.focus == Focus::News(field);
            let block = Block::default()
                .title(Span::styled(
                    format!(" {} ", field.title()),
                    if focused {
                        theme.header_logo
                    } else {
                        theme.header_item
                    },
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(if focused {
                    theme.border_focus
                } else {
                    theme.border
                });
            let inner = block.inner(rect);
            block.render(rect, buf);

            let mut input = self.news.field(field).clone();
            input.set_style(theme.input_text);
            input.set_cursor_line_style(Style::default());
            input.set_placeholder_text(field.placeholder());
            input.set_placeholder_style(theme.placeholder);
            input.set_cursor_style(if focused {
                theme.input_cursor
            } else {
                theme.input_text
            });
            Widget::render(&input, inner, buf);
        }
    }
}

pub struct NewsResults<'a> {
    pub news: &'a NewsState<'a>,
    pub theme: &'a Theme,
    pub frame_count: u64,
}

impl NewsResults<'_> {
    fn summary(&self) -> String {
        match &self.news.results {
            Some(page) => {
                let pages = page
                    .per_page
                    .filter(|p| *p > 0)
                    .map(|p| page.total.div_ceil(u64::from(p)).max(1));
                match pages {
                    Some(pages) => format!(
                        " {} articles found · page {}/{} ",
                        page.total, self.news.page, pages
                    ),
                    None => format!(" {} articles found · page {} ", page.total, self.news.page),
                }
            }
            None => String::new(),
        }
    }

    fn sentiment_style(&self, article: &NewsArticle) -> Style {
        let sentiment = article
            .sentiment
            .as_ref()
            .and_then(|s| s.overall_sentiment.as_deref())
            .and_then(Sentiment::parse)
            .unwrap_or(Sentiment::Neutral);
        match sentiment {
            Sentiment::Positive => self.theme.sentiment_positive,
            Sentiment::Negative => self.theme.sentiment_negative,
            Sentiment::Neutral => self.theme.sentiment_neutral,
        }
    }

    fn article_item(&self, article: &NewsArticle, width: usize) -> ListItem<'static> {
        let theme = self.theme;
        let mut meta = vec![Span::styled(article.source.clone(), theme.article_meta)];
        let published = article.published_label();
        if !published.is_empty() {
            meta.push(Span::styled(format!(" · {published}"), theme.article_meta));
        }

        let mut tags: Vec<Span> = article
            .symbols
            .iter()
            .flat_map(|s| [Span::styled(format!(" {s} "), theme.symbol_tag), Span::raw(" ")])
            .collect();
        tags.push(Span::styled(
            format!(" {} ", article.sentiment_label()),
            self.sentiment_style(article),
        ));

        let mut lines = vec![
            Line::from(Span::styled(article.title.clone(), theme.article_title)),
            Line::from(meta),
            Line::from(Span::styled(
                truncate(article.excerpt(), width),
                theme.article_body,
            )),
        ];
        if let Some(impact) = article.market_impact() {
            let label = "Market Impact: ";
            lines.push(Line::from(vec![
                Span::styled(label, theme.article_meta),
                Span::styled(
                    truncate(impact, width.saturating_sub(label.len())),
                    theme.article_body,
                ),
            ]));
        }
        lines.push(Line::from(tags));
        lines.push(Line::from(""));
        ListItem::new(lines)
    }
}

impl Widget for NewsResults<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" NEWS ", theme.header_item),
                Span::raw(" "),
            ]))
            .title(Line::from(self.summary()).alignment(Alignment::Right))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if let Some(error) = &self.news.error {
            Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(error.clone(), theme.status_error)),
                Line::from(""),
                Line::from(Span::styled(RETRY_HINT, theme.dimmed)),
            ])
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
            return;
        }

        let articles = self
            .news
            .results
            .as_ref()
            .map(|r| r.articles.as_slice())
            .unwrap_or_default();

        if self.news.loading && articles.is_empty() {
            Paragraph::new(format!(
                "{} Loading news...",
                super::spinner(self.frame_count)
            ))
            .alignment(Alignment::Center)
            .style(theme.dimmed)
            .render(inner, buf);
            return;
        }

        if articles.is_empty() {
            let message = if self.news.results.is_some() {
                "No articles found"
            } else {
                "Submit a ticker or edit a filter to search"
            };
            Paragraph::new(message)
                .alignment(Alignment::Center)
                .style(theme.dimmed)
                .render(inner, buf);
            return;
        }

        let width = inner.width.saturating_sub(2) as usize;
        let items: Vec<ListItem> = articles
            .iter()
            .map(|a| self.article_item(a, width))
            .collect();
        let list = List::new(items)
            .highlight_symbol("▍")
            .highlight_style(theme.list_selected);
        let mut state = ListState::default().with_selected(Some(self.news.selected_article));
        StatefulWidget::render(list, inner, buf, &mut state);
    }
}

fn truncate(text: &str, width: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{ArticleSentiment, ArticleSummary, NewsPage};

    fn render(news: &NewsState) -> String {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 70, 14);
        let mut buf = Buffer::empty(area);
        NewsResults {
            news,
            theme: &theme,
            frame_count: 0,
        }
        .render(area, &mut buf);
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer sentence", 8), "a longe…");
    }

    #[test]
    fn test_results_show_count_and_article() {
        let mut news = NewsState::default();
        news.results = Some(NewsPage {
            total: 1,
            articles: vec![NewsArticle {
                title: "Apple beats estimates".into(),
                source: "Reuters".into(),
                symbols: vec!["AAPL".into()],
                sentiment: Some(ArticleSentiment {
                    overall_sentiment: Some("POSITIVE".into()),
                    confidence: Some(0.9),
                }),
                ..Default::default()
            }],
            page: Some(1),
            per_page: Some(10),
        });
        let text = render(&news);
        assert!(text.contains("1 articles found"));
        assert!(text.contains("Apple beats estimates"));
        assert!(text.contains("POSITIVE (90.0%)"));
    }

    #[test]
    fn test_market_impact_is_shown_under_excerpt() {
        let mut news = NewsState::default();
        news.results = Some(NewsPage {
            total: 1,
            articles: vec![NewsArticle {
                title: "Fed holds rates".into(),
                summary: Some(ArticleSummary {
                    brief: Some("Rates unchanged".into()),
                    market_impact: Some("Banks rally".into()),
                }),
                ..Default::default()
            }],
            page: Some(1),
            per_page: Some(10),
        });
        let text = render(&news);
        let brief = text.find("Rates unchanged").unwrap();
        let impact = text.find("Market Impact: Banks rally").unwrap();
        assert!(impact > brief);
    }

    #[test]
    fn test_error_shows_retry_hint() {
        let mut news = NewsState::default();
        news.error = Some("HTTP error! status: 502".into());
        let text = render(&news);
        assert!(text.contains("status: 502"));
        assert!(text.contains(RETRY_HINT));
    }
}
