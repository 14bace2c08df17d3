use crate::app::state::AppState;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Header<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.state;
        let theme = self.theme;

        let status = if state.ticker.busy || state.news.loading {
            Span::styled(
                format!(" {} LOADING ", super::spinner(state.frame_count)),
                theme.status_busy,
            )
        } else if state.news.fetching {
            Span::styled(
                format!(" {} FETCHING ", super::spinner(state.frame_count)),
                theme.status_busy,
            )
        } else if state.news.error.is_some() {
            Span::styled(" ERROR ", theme.status_error)
        } else {
            Span::styled(" READY ", theme.status_ready)
        };

        let spans = vec![
            Span::styled(" STOCKSCOPE ", theme.header_logo),
            Span::raw(" "),
            Span::styled(format!(" {} ", state.base_url), theme.header_item),
            Span::raw(" "),
            status,
        ];

        Paragraph::new(Line::from(spans))
            .style(theme.header)
            .render(area, buf);
    }
}
