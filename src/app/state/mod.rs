use super::features::ticker::TickerSearchController;
use super::keymap::KeyMap;
use super::persistence::{PreferenceStore, LAST_SEARCH};
use crate::config::AppConfig;
use crate::domain::models::NewsQuery;
use crate::theme::Theme;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub mod feedback;
pub mod input;
pub mod news;
pub mod ticker;

// Re-exports
pub use feedback::{AlertState, Feedback, Notice, NoticeKind};
pub use input::AppTextArea;
pub use news::{NewsField, NewsState};
pub use ticker::{SearchSurface, TickerPanel};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Focus {
    Ticker,
    News(NewsField),
}

impl Focus {
    const ORDER: [Focus; 6] = [
        Focus::Ticker,
        Focus::News(NewsField::Keyword),
        Focus::News(NewsField::Symbol),
        Focus::News(NewsField::Sentiment),
        Focus::News(NewsField::StartDate),
        Focus::News(NewsField::EndDate),
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub fetch_limit: u32,
    pub notice_duration: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        let config = AppConfig::default();
        Self::from(&config)
    }
}

impl From<&AppConfig> for Settings {
    fn from(config: &AppConfig) -> Self {
        Self {
            fetch_limit: config.news_fetch_limit,
            notice_duration: config.notice_duration(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState<'a> {
    pub should_quit: bool,
    pub focus: Focus,

    // --- Ticker Search ---
    pub ticker: TickerPanel<'a>,
    pub ticker_search: TickerSearchController,

    // --- News ---
    pub news: NewsState<'a>,

    // --- Notices & Alerts ---
    pub feedback: Feedback,

    // --- Click Tracking ---
    pub last_click_time: Option<Instant>,
    pub last_click_pos: Option<(u16, u16)>,

    // --- Animation ---
    pub frame_count: u64,

    // --- Config ---
    pub settings: Settings,
    pub preferences: PreferenceStore,
    pub keymap: Arc<KeyMap>,
    pub theme: Theme,
    pub base_url: String,
}

impl AppState<'_> {
    /// State for a fresh session: default filters, then the last saved
    /// search on top if one exists.
    #[must_use]
    pub fn new(config: &AppConfig, preferences: PreferenceStore) -> Self {
        let mut state = Self {
            settings: Settings::from(config),
            theme: Theme::from_name(config.theme),
            base_url: config.base_url.clone(),
            ..Default::default()
        };
        if let Some(query) = preferences.load::<NewsQuery>(LAST_SEARCH) {
            tracing::debug!(?query, "restoring last news search");
            state.news.apply_query(&query);
        }
        state.preferences = preferences;
        state
    }

    #[must_use]
    pub fn today() -> chrono::NaiveDate {
        chrono::Local::now().date_naive()
    }
}

impl<'a> AppState<'a> {
    /// Splits out the pieces the ticker controller drives.
    pub fn ticker_parts(&mut self) -> (&mut TickerSearchController, SearchSurface<'_, 'a>) {
        (
            &mut self.ticker_search,
            SearchSurface {
                panel: &mut self.ticker,
                feedback: &mut self.feedback,
            },
        )
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        Self {
            should_quit: false,
            focus: Focus::Ticker,
            ticker: TickerPanel::default(),
            ticker_search: TickerSearchController::new(),
            news: NewsState::new(Self::today()),
            feedback: Feedback::default(),
            last_click_time: None,
            last_click_pos: None,
            frame_count: 0,
            settings: Settings::default(),
            preferences: PreferenceStore::default(),
            keymap: Arc::new(KeyMap::default()),
            theme: Theme::default(),
            base_url: AppConfig::default().base_url,
        }
    }
}
