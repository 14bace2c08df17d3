use crate::app::state::{AppState, NewsField};
use crate::components::{
    footer::Footer,
    header::Header,
    modals::alert::AlertModal,
    news_panel::{NewsFilters, NewsResults},
    notifications::Notifications,
    ticker_input::{SuggestionDropdown, TickerInput},
};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

pub const MAX_DROPDOWN_ROWS: usize = 8;

pub struct AppLayout {
    pub header: Rect,
    pub ticker: Rect,
    pub filters: Vec<Rect>,
    pub results: Rect,
    pub footer: Rect,
}

impl AppLayout {
    /// Rect of the filter box for `field`.
    #[must_use]
    pub fn filter(&self, field: NewsField) -> Rect {
        self.filters
            .get(field.index())
            .copied()
            .unwrap_or_default()
    }
}

pub fn get_layout(area: Rect) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Ticker field
            Constraint::Length(3), // News filters
            Constraint::Min(0),    // Results
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let filters = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(14),
            Constraint::Percentage(24),
            Constraint::Percentage(16),
            Constraint::Percentage(16),
        ])
        .split(main[2])
        .to_vec();

    AppLayout {
        header: main[0],
        ticker: main[1],
        filters,
        results: main[3],
        footer: main[4],
    }
}

/// The dropdown hangs below the ticker field, over the panels beneath it.
pub fn dropdown_area(layout: &AppLayout, area: Rect, rows: usize) -> Rect {
    let height = rows.min(MAX_DROPDOWN_ROWS) as u16 + 2;
    Rect {
        x: layout.ticker.x,
        y: layout.ticker.y + layout.ticker.height,
        width: layout.ticker.width,
        height,
    }
    .intersection(area)
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }

    let area = f.area();
    let layout = get_layout(area);
    let theme = &app_state.theme;

    f.render_widget(
        Header {
            state: app_state,
            theme,
        },
        layout.header,
    );

    f.render_widget(
        TickerInput {
            panel: &app_state.ticker,
            focused: app_state.focus == crate::app::state::Focus::Ticker,
            theme,
        },
        layout.ticker,
    );

    f.render_widget(
        NewsFilters {
            news: &app_state.news,
            focus: app_state.focus,
            theme,
            layout: &layout,
        },
        area,
    );

    f.render_widget(
        NewsResults {
            news: &app_state.news,
            theme,
            frame_count: app_state.frame_count,
        },
        layout.results,
    );

    f.render_widget(
        Footer {
            state: app_state,
            theme,
        },
        layout.footer,
    );

    if app_state.ticker.shows_dropdown() {
        let dropdown = dropdown_area(&layout, area, app_state.ticker.suggestions.len());
        f.render_widget(
            SuggestionDropdown {
                panel: &app_state.ticker,
                theme,
            },
            dropdown,
        );
    }

    f.render_widget(
        Notifications {
            notices: app_state.feedback.visible_notices(),
            theme,
        },
        area,
    );

    if let Some(alert) = &app_state.feedback.alert {
        f.render_widget(AlertModal { theme, alert }, area);
    }
}
