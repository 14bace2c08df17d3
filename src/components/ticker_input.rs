use crate::app::state::TickerPanel;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, StatefulWidget, Widget},
};

pub const PLACEHOLDER: &str = "Type a ticker or company name";

/// First dropdown row on screen, keeping the highlighted row visible.
#[must_use]
pub fn dropdown_offset(highlighted: Option<usize>, visible_rows: usize) -> usize {
    highlighted.map_or(0, |h| (h + 1).saturating_sub(visible_rows))
}

pub struct TickerInput<'a> {
    pub panel: &'a TickerPanel<'a>,
    pub focused: bool,
    pub theme: &'a Theme,
}

impl Widget for TickerInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let (border, title_style) = if self.focused {
            (theme.border_focus, theme.header_logo)
        } else {
            (theme.border, theme.header_item)
        };

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" TICKER ", title_style),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);

        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let mut field = self.panel.field.clone();
        field.set_style(theme.input_text);
        field.set_cursor_line_style(Style::default());
        field.set_placeholder_text(PLACEHOLDER);
        field.set_placeholder_style(theme.placeholder);
        field.set_cursor_style(if self.focused {
            theme.input_cursor
        } else {
            theme.input_text
        });
        Widget::render(&field, inner, buf);
    }
}

pub struct SuggestionDropdown<'a> {
    pub panel: &'a TickerPanel<'a>,
    pub theme: &'a Theme,
}

impl Widget for SuggestionDropdown<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 3 || area.height < 3 {
            return;
        }
        let theme = self.theme;
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border_focus);
        let inner = block.inner(area);
        block.render(area, buf);

        let symbol_width = self
            .panel
            .suggestions
            .iter()
            .map(|s| s.symbol.chars().count())
            .max()
            .unwrap_or(0);

        let items: Vec<ListItem> = self
            .panel
            .suggestions
            .iter()
            .map(|s| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!(" {:<width$} ", s.symbol, width = symbol_width),
                        theme.suggestion_symbol,
                    ),
                    Span::styled(format!(" {}", s.name), theme.suggestion_name),
                ]))
            })
            .collect();

        let mut list_state = ListState::default()
            .with_offset(dropdown_offset(self.panel.highlighted, inner.height as usize))
            .with_selected(self.panel.highlighted);
        let list = List::new(items).highlight_style(theme.suggestion_selected);
        StatefulWidget::render(list, inner, buf, &mut list_state);
    }
}
