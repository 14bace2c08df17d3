use crate::app::state::AlertState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::helpers::{centered_rect_fixed_height, draw_drop_shadow};

/// Blocking message box. Input is held until it is acknowledged.
pub struct AlertModal<'a> {
    pub theme: &'a Theme,
    pub alert: &'a AlertState,
}

impl Widget for AlertModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = centered_rect_fixed_height(60, 8, area);
        if modal_area.width < 3 || modal_area.height < 3 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let title_style = self.theme.status_error;
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" ALERT ", title_style),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(self.theme.border_focus);

        let timestamp = self.alert.timestamp.format("%H:%M:%S").to_string();

        let text_lines = vec![
            Line::from(""),
            Line::from(Span::styled(&self.alert.message, self.theme.list_item)),
            Line::from(Span::styled(timestamp, self.theme.dimmed)),
            Line::from(""),
            Line::from(vec![
                Span::raw(" Press "),
                Span::styled("Enter", self.theme.footer_key),
                Span::raw(" or "),
                Span::styled("Esc", self.theme.footer_key),
                Span::raw(" to continue "),
            ]),
        ];

        Paragraph::new(text_lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(modal_area, buf);
    }
}
