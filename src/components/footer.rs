use crate::app::state::{AppState, Focus};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct FooterItem {
    pub key: &'static str,
    pub desc: &'static str,
}

const fn item(key: &'static str, desc: &'static str) -> FooterItem {
    FooterItem { key, desc }
}

pub struct Footer<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Footer<'_> {
    fn items(&self) -> Vec<FooterItem> {
        if self.state.feedback.has_alert() {
            return vec![item("Enter/Esc", "dismiss")];
        }

        let mut items = match self.state.focus {
            Focus::Ticker => vec![
                item("↑/↓", "pick"),
                item("Enter", "select/submit"),
                item("Esc", "hide"),
                item("^T", "submit"),
            ],
            Focus::News(_) => vec![
                item("Enter", "search"),
                item("↑/↓", "article"),
                item("Esc", "reset"),
            ],
        };
        items.extend([
            item("Tab", "focus"),
            item("PgUp/PgDn", "page"),
            item("^K", "keyword"),
            item("^S", "retry"),
            item("^F", "fetch"),
            item("^R", "reset"),
            item("^D", "clear notices"),
            item("^C", "quit"),
        ]);
        items
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let available_width = usize::from(area.width);

        let mut spans = Vec::new();
        let mut current_width = 0;
        for FooterItem { key, desc } in self.items() {
            let key_span = Span::styled(format!(" {key} "), theme.footer_key);
            let desc_span = Span::styled(format!(" {desc} "), theme.footer_val);
            let width = key_span.width() + desc_span.width() + 1;
            if current_width + width > available_width {
                break;
            }
            current_width += width;
            spans.push(key_span);
            spans.push(desc_span);
            spans.push(Span::raw(" "));
        }

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(area, buf);
    }
}
