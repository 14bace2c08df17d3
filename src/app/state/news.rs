use super::AppTextArea;
use crate::domain::models::{NewsPage, NewsQuery};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NewsField {
    Keyword,
    Symbol,
    Sentiment,
    StartDate,
    EndDate,
}

impl NewsField {
    pub const ALL: [NewsField; 5] = [
        NewsField::Keyword,
        NewsField::Symbol,
        NewsField::Sentiment,
        NewsField::StartDate,
        NewsField::EndDate,
    ];

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            NewsField::Keyword => "Keyword",
            NewsField::Symbol => "Symbol",
            NewsField::Sentiment => "Sentiment",
            NewsField::StartDate => "From",
            NewsField::EndDate => "To",
        }
    }

    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            NewsField::Keyword => "search text",
            NewsField::Symbol => "e.g. AAPL",
            NewsField::Sentiment => "positive/negative/neutral",
            NewsField::StartDate | NewsField::EndDate => "YYYY-MM-DD",
        }
    }
}

/// News filters and the last result page.
#[derive(Debug, Clone, PartialEq)]
pub struct NewsState<'a> {
    pub fields: [AppTextArea<'a>; 5],
    pub page: u32,
    pub results: Option<NewsPage>,
    pub error: Option<String>,
    pub loading: bool,
    pub fetching: bool,
    pub latest_seq: u64,
    pub selected_article: usize,
}

impl Default for NewsState<'_> {
    fn default() -> Self {
        Self {
            fields: Default::default(),
            page: 1,
            results: None,
            error: None,
            loading: false,
            fetching: false,
            latest_seq: 0,
            selected_article: 0,
        }
    }
}

impl<'a> NewsState<'a> {
    /// Empty filters over the thirty days ending `today`.
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        let mut state = Self::default();
        state.apply_query(&NewsQuery::with_default_dates(today));
        state
    }

    #[must_use]
    pub fn field(&self, field: NewsField) -> &AppTextArea<'a> {
        &self.fields[field.index()]
    }

    pub fn field_mut(&mut self, field: NewsField) -> &mut AppTextArea<'a> {
        &mut self.fields[field.index()]
    }

    pub fn set_field(&mut self, field: NewsField, value: &str) {
        self.fields[field.index()] = AppTextArea::with_text(value);
    }

    #[must_use]
    pub fn value(&self, field: NewsField) -> String {
        self.field(field).value()
    }

    #[must_use]
    pub fn query(&self) -> NewsQuery {
        NewsQuery {
            keyword: self.value(NewsField::Keyword),
            symbol: self.value(NewsField::Symbol),
            sentiment: self.value(NewsField::Sentiment),
            start_date: self.value(NewsField::StartDate),
            end_date: self.value(NewsField::EndDate),
            page: self.page,
        }
    }

    pub fn apply_query(&mut self, query: &NewsQuery) {
        self.set_field(NewsField::Keyword, &query.keyword);
        self.set_field(NewsField::Symbol, &query.symbol);
        self.set_field(NewsField::Sentiment, &query.sentiment);
        self.set_field(NewsField::StartDate, &query.start_date);
        self.set_field(NewsField::EndDate, &query.end_date);
        self.page = query.page.max(1);
    }

    pub fn reset(&mut self, today: NaiveDate) {
        self.apply_query(&NewsQuery::with_default_dates(today));
        self.selected_article = 0;
    }

    /// Starts a new search cycle; older responses become stale.
    pub fn begin_search(&mut self) -> u64 {
        self.latest_seq += 1;
        self.loading = true;
        self.error = None;
        self.latest_seq
    }

    #[must_use]
    pub fn article_count(&self) -> usize {
        self.results.as_ref().map_or(0, |r| r.articles.len())
    }

    pub fn select_next_article(&mut self) {
        let count = self.article_count();
        if count > 0 {
            self.selected_article = (self.selected_article + 1).min(count - 1);
        }
    }

    pub fn select_prev_article(&mut self) {
        self.selected_article = self.selected_article.saturating_sub(1);
    }
}
